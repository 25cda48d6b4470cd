mod connection;
mod session;
mod signaling;

pub use connection::ConnectionId;
pub use session::{Role, SessionId};
pub use signaling::{ClientEvent, RelayKind, RelayMessage, ServerEvent};
