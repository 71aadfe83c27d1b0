use account_facade::FacadeConfig;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = FacadeConfig::from_env()?;
    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!(
        addr = %config.listen_addr,
        backend = %config.backend_url,
        timeout_ms = config.backend_timeout.as_millis() as u64,
        "listening on {}",
        account_facade::ACCOUNTS_ROUTE
    );
    account_facade::run(listener, &config).await?;
    Ok(())
}
