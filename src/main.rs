use actix_cors::Cors;
use actix_web::{App, HttpServer};
use levyscope::config::{Config, LogFormat};
use levyscope::middleware::{json_config, RateLimiter, RequestId};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!("Starting Levyscope invoice levy calculator");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute)?;
    tracing::info!(
        "Rate limiter initialized ({} calculations/minute)",
        config.security.rate_limit_per_minute
    );

    let cors_origin = config.security.cors_allowed_origin.clone();
    let bind_address = config.server.bind_address();

    let server = HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default().allowed_origin(origin),
            None => Cors::default().allow_any_origin(),
        }
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600);

        App::new()
            .wrap(rate_limiter.clone())
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(json_config())
            .configure(levyscope::modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("levyscope={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
