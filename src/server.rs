use crate::{
    api,
    config::Config,
    middleware::{RequestMetrics, RequestTracker},
    shutdown::{ServerControl, ShutdownCoordinator, ShutdownSignals, ShutdownState},
    utils::ServerError,
};
use actix_cors::Cors;
use actix_web::{dev::ServerHandle, middleware::Logger, web, App, HttpServer};
use async_trait::async_trait;
use std::io;
use std::time::Duration;

/// Listener handle plus the counters the coordinator reports on shutdown.
pub struct ActixServer {
    handle: ServerHandle,
    metrics: web::Data<RequestMetrics>,
}

#[async_trait(?Send)]
impl ServerControl for ActixServer {
    async fn drain(&self) {
        self.handle.stop(true).await;
    }

    async fn force_stop(&self) {
        self.handle.stop(false).await;
    }

    fn in_flight(&self) -> u64 {
        self.metrics.in_flight()
    }
}

fn cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::permissive();
    }

    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .max_age(3600)
}

/// actix's own drain deadline in whole seconds, one past the grace period.
fn actix_shutdown_timeout(grace: Duration) -> u64 {
    grace.as_secs().saturating_add(1)
}

/// Binds `config`'s address, serves the routes registered by `routes` and
/// blocks until a termination signal has been handled.
pub async fn run<F>(config: Config, routes: F) -> Result<(), ServerError>
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let metrics = web::Data::new(RequestMetrics::default());
    let config_data = web::Data::new(config.clone());

    log::info!("🚀 Starting {}...", config.name);

    // Registered before the listener exists so an early SIGTERM still
    // goes through the coordinator.
    let signals = ShutdownSignals::install().map_err(ServerError::Signal)?;

    let app_metrics = metrics.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(config_data.clone())
            .app_data(app_metrics.clone())
            .wrap(cors(&config_data.allowed_origins))
            .wrap(RequestTracker::new(app_metrics.clone()))
            .wrap(Logger::default())
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            .configure(routes.clone())
    })
    .bind(config.bind_addr())
    .map_err(ServerError::ListenerStart)?
    // Signals belong to the coordinator; actix's own drain deadline sits
    // past ours so the coordinator's timeout fires first.
    .disable_signals()
    .shutdown_timeout(actix_shutdown_timeout(config.shutdown_timeout))
    .run();

    log::info!("🌐 {} listening on {}", config.name, config.bind_addr());
    log::info!(
        "📚 Swagger UI available at: http://{}/swagger-ui/",
        config.bind_addr()
    );

    let control = ActixServer {
        handle: server.handle(),
        metrics,
    };
    let mut listener = actix_rt::spawn(server);
    let coordinator = ShutdownCoordinator::new(config.shutdown_timeout);

    let shutdown = coordinator.run(&control, signals.recv());
    tokio::pin!(shutdown);

    tokio::select! {
        biased;

        outcome = &mut shutdown => outcome,
        exited = &mut listener => {
            // A drain finishes the listener in the same wakeup as the
            // coordinator; let the coordinator report the outcome.
            if coordinator.state() != ShutdownState::Running {
                return shutdown.await;
            }

            log::error!("❌ Listener stopped before any shutdown signal");
            match exited {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(ServerError::Listener(e)),
                Err(e) => Err(ServerError::Listener(io::Error::new(io::ErrorKind::Other, e))),
            }
        }
    }
}
