use crate::session::{SessionCommand, SessionManager};
use crate::signaling::ConnectionRegistry;
use std::sync::Arc;
use tether_core::{ClientEvent, ConnectionId};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::SendError;
use tracing::info;

/// Gateway-facing handle: the connection table plus the session manager's
/// inbox.
#[derive(Clone)]
pub struct SignalingService {
    connections: ConnectionRegistry,
    session_cmd_tx: mpsc::Sender<SessionCommand>,
}

impl SignalingService {
    pub fn new(
        connections: ConnectionRegistry,
        session_cmd_tx: mpsc::Sender<SessionCommand>,
    ) -> Self {
        Self {
            connections,
            session_cmd_tx,
        }
    }

    /// Spawns a [`SessionManager`] that delivers through a fresh connection
    /// registry and returns the handle feeding it.
    pub fn spawn(command_buffer: usize) -> Self {
        let (tx, rx) = mpsc::channel(command_buffer);
        let connections = ConnectionRegistry::new();

        let manager = SessionManager::new(rx, Arc::new(connections.clone()));
        tokio::spawn(manager.run());
        info!("Session manager spawned (command buffer: {})", command_buffer);

        Self::new(connections, tx)
    }

    pub fn connections(&self) -> &ConnectionRegistry {
        &self.connections
    }

    /// Hands an inbound event to the session manager.
    pub async fn dispatch(
        &self,
        connection_id: ConnectionId,
        event: ClientEvent,
    ) -> Result<(), SendError<SessionCommand>> {
        self.session_cmd_tx
            .send(SessionCommand::from_client_event(connection_id, event))
            .await
    }

    /// Reports that a connection is gone. Must be called once per connection.
    pub async fn disconnect(
        &self,
        connection_id: ConnectionId,
    ) -> Result<(), SendError<SessionCommand>> {
        self.session_cmd_tx
            .send(SessionCommand::Disconnect { connection_id })
            .await
    }
}
