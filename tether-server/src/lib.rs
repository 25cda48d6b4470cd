pub mod config;
pub mod http;
pub mod routing;
pub mod session;
pub mod signaling;

pub use config::ServerConfig;
pub use http::router;
pub use routing::*;
pub use session::*;
pub use signaling::*;
