use movie_api::{config::Config, db, routes, state::AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 0. Pull in .env for local runs
    // No file is fine. Variables already set in the environment are not overridden.
    dotenvy::dotenv().ok();

    // 1. Error reporting
    // SENTRY_DSN unset means the client is a no-op. Dropping the guard flushes events,
    // so it lives until main returns.
    let _guard = sentry::init((std::env::var("SENTRY_DSN").ok(), sentry::ClientOptions {
        release: sentry::release_name!(),
        traces_sample_rate: 1.0,
        ..Default::default()
    }));

    // 2. Logging
    // RUST_LOG overrides; otherwise our crate and the request trace layer log at debug.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "movie_api=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    // 3. Read config
    // Fails here, before binding anything, if JWT_SECRET is missing.
    let config = Config::from_env()?;

    tracing::info!("Starting Movie API...");

    // 4. Open the database
    // Creates the file and tables on first run.
    let db = db::connect(&config.database_url).await?;
    tracing::info!(url = %config.database_url, "Database ready");

    // 5. Build the app state and router
    let state = AppState::new(db, &config.jwt_secret);
    let app = routes::create_routes(state);

    // 6. Serve
    // Bound on every interface; PORT picks the port (3200 when unset).
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix, so in-flight requests get to finish.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
