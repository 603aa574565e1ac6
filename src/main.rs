use anyhow::Result;
use stats_endpoint::create_router;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env file, then initialize tracing to stdout
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let app = create_router()?;

    // Get optional bind endpoint from environment
    let endpoint = env::var("STATS_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:19779".to_string());

    info!("Starting stats endpoint v{} at {endpoint}", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&endpoint).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
