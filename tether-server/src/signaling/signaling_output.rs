use async_trait::async_trait;
use tether_core::{ConnectionId, ServerEvent};

/// Outbound side of the transport gateway.
///
/// Delivery is fire-and-forget: implementations must not block on the peer
/// and silently drop events for connections that are already gone.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Push one event to a single connection.
    async fn send_event(&self, connection_id: ConnectionId, event: ServerEvent);
}
