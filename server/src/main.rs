use tokio::net::TcpListener;
use todo_server::{shutdown, AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, cors_origin = ?config.cors_origin, "listening");

    let router = todo_server::app_with(&config, AppState::default());
    todo_server::run_with_shutdown(listener, router, shutdown::signal()).await?;
    info!("server stopped");
    Ok(())
}
