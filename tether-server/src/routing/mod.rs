mod broadcast_groups;
mod message_router;

pub use broadcast_groups::*;
pub use message_router::*;
