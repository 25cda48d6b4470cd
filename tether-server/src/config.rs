use clap::Args;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Listener and runtime settings. Defaults reproduce the fixed
/// `0.0.0.0:3000` deployment.
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Directory holding index.html, phone.html and their assets.
    #[arg(long, default_value = "public")]
    pub public_dir: PathBuf,

    /// Capacity of the session manager's command queue.
    #[arg(long, default_value_t = 256)]
    pub command_buffer: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
