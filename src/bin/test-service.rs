use dotenv::dotenv;
use service_pair::{api, config::Config, server};

#[actix_web::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env("test-service", 3000);

    if let Err(e) = server::run(config, api::test_service_routes).await {
        log::error!("❌ {}", e);
        std::process::exit(1);
    }
}
