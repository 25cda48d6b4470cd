use anyhow::{Context, Result};
use clap::Parser;
use tether_server::{ServerConfig, SignalingService, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tether-server")]
#[command(about = "Pairs a controller and a phone and relays their WebRTC signaling")]
struct Cli {
    #[command(flatten)]
    config: ServerConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let Cli { config } = Cli::parse();

    let service = SignalingService::spawn(config.command_buffer);
    let app = router(service, &config.public_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://localhost:{}", config.port);
    info!("Phone links will work on your local network");
    info!("Access the controller at: http://localhost:{}", config.port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
