use std::sync::Arc;

use auth::Authenticator;
use headhunter_service::config::Config;
use headhunter_service::domain::headhunter::service::AuthService;
use headhunter_service::inbound::http::router::create_router;
use headhunter_service::outbound::repositories::PostgresHeadhunterDirectory;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "headhunter_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "headhunter-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // Rejects unsupported algorithms before anything is served
    let auth_config = config.auth.to_auth_config()?;

    tracing::info!(
        http_port = config.server.http_port,
        algorithm = %config.auth.algorithm,
        access_token_expire_minutes = config.auth.access_token_expire_minutes,
        leeway_seconds = config.auth.leeway_seconds,
        conceal_unknown_email = config.auth.conceal_unknown_email,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(auth_config));
    let directory = Arc::new(PostgresHeadhunterDirectory::new(pg_pool));
    let auth_service = Arc::new(AuthService::new(directory, authenticator));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, config.auth.conceal_unknown_email);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
