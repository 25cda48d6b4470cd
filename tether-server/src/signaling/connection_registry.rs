use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use std::sync::Arc;
use tether_core::{ConnectionId, ServerEvent};
use tokio::sync::mpsc;
use tracing::{debug, error};

/// Live sockets keyed by connection id, each with its outbound queue.
///
/// Cheap to clone; every clone shares the same table.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    connections: Arc<DashMap<ConnectionId, mpsc::UnboundedSender<Message>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, connection_id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.connections.insert(connection_id, tx);
    }

    pub fn remove(&self, connection_id: &ConnectionId) {
        self.connections.remove(connection_id);
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.connections.contains_key(connection_id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    fn send_json(&self, connection_id: ConnectionId, event: &ServerEvent) {
        let Some(connection) = self.connections.get(&connection_id) else {
            debug!("Dropping event for closed connection {}", connection_id);
            return;
        };

        match serde_json::to_string(event) {
            Ok(json) => {
                if let Err(e) = connection.send(Message::Text(json.into())) {
                    error!("Failed to send WS message to {}: {:?}", connection_id, e);
                }
            }
            Err(e) => error!("Failed to serialize server event: {}", e),
        }
    }
}

#[async_trait]
impl SignalingOutput for ConnectionRegistry {
    async fn send_event(&self, connection_id: ConnectionId, event: ServerEvent) {
        self.send_json(connection_id, &event);
    }
}
