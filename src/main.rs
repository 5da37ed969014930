use std::net::SocketAddr;

use tokio::net::TcpListener;

use dashfolio_backend::config::AppConfig;
use dashfolio_backend::logging::{init_logging, LoggingConfig};
use dashfolio_backend::{app, build_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env()).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let config = AppConfig::from_env();
    let state = build_state(&config);
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Dashfolio backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
