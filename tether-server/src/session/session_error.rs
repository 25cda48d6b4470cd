use tether_core::SessionId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Join against an id that was never issued or has already ended.
    #[error("Invalid session ID")]
    InvalidSession(SessionId),
}
