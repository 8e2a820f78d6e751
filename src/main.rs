use activity_generator::{load_activity_set, resolve_data_paths, router, AppState};
use std::{env, net::SocketAddr};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let paths = resolve_data_paths();
    let support_url = env::var("APP_SUPPORT_URL")
        .ok()
        .filter(|url| !url.trim().is_empty());
    let state = AppState::new(support_url);

    let loader = state.clone();
    tokio::spawn(async move {
        info!(
            leisure = %paths.leisure.display(),
            productive = %paths.productive.display(),
            "loading activities"
        );
        let activities = load_activity_set(&paths).await;
        loader.mark_ready(activities);
    });

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
