//! eduserve binary entry point

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading the API credential, matching local dev setups
    let _ = dotenvy::dotenv();

    let config = eduserve::config::ServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    println!("EduServe - EduChain HTTP Server");
    println!("Configuration:");
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);

    // Fails fast when OPENAI_API_KEY is absent
    let server = eduserve::EduServeServer::new(config)?;

    println!();
    println!("Server starting on: {}", server.server_url());
    println!("Press Ctrl+C to stop");

    server.start().await?;

    Ok(())
}
