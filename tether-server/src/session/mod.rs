mod session;
mod session_command;
mod session_error;
mod session_manager;
mod session_registry;

pub use session::*;
pub use session_command::*;
pub use session_error::*;
pub use session_manager::*;
pub use session_registry::*;
