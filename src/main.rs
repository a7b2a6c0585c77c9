use std::net::SocketAddr;

use tokio::{net::TcpListener, signal};
use tracing::{error, info};

use credential_service::{
    config::AppConfig,
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher, credential_repository::SqlCredentialRepository,
        database,
    },
    presentation::router::create_router,
    telemetry,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    telemetry::init_tracing(config.log_format);

    info!(
        environment = %config.environment,
        rate_limit = config.rate_limit,
        "configuration loaded"
    );

    let db = database::connect(&config.database).await?;
    database::bootstrap(&db).await?;

    let credential_repository = SqlCredentialRepository::new(db.clone());
    let password_hasher = Argon2PasswordHasher::new()?;

    let app = create_router(credential_repository, password_hasher);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(bind_addr = %addr, "server starting");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("server shutting down");
    if let Err(e) = db.close().await {
        error!(error = %e, "failed to close database");
    }
    info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
