use actix_web::web;
use dotenv::dotenv;
use service_pair::{api, config::Config, server, store::UserStore};

#[actix_web::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env("user-service", 3001);

    // Users live only as long as this process
    let store = web::Data::new(UserStore::new());

    if let Err(e) = server::run(config, api::user_service_routes(store)).await {
        log::error!("❌ {}", e);
        std::process::exit(1);
    }
}
