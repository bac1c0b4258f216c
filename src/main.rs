use adlens::{api, app_state::AppState, config, summarizer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // One-time initialization of summarizer tables, before requests arrive.
    summarizer::ensure_ready();

    let config = config::Config::from_env()?;
    let addr = config.bind_addr().to_string();
    let app = api::router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
