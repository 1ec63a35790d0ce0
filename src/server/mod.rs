mod http;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub async fn serve() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    http::http_server_task().await?;
    Ok(())
}
