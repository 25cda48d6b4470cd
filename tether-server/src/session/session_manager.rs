use crate::routing::{BroadcastGroups, MessageRouter};
use crate::session::{SessionCommand, SessionRegistry};
use crate::signaling::SignalingOutput;
use std::sync::Arc;
use tether_core::{ConnectionId, RelayMessage, Role, ServerEvent, SessionId};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Owner of all session state.
///
/// Runs as a single task draining one command channel, so every create,
/// join, relay and disconnect is applied in arrival order and never observes
/// another half-finished.
pub struct SessionManager {
    registry: SessionRegistry,
    groups: BroadcastGroups,
    command_rx: mpsc::Receiver<SessionCommand>,
    signaling: Arc<dyn SignalingOutput>,
}

impl SessionManager {
    pub fn new(
        command_rx: mpsc::Receiver<SessionCommand>,
        signaling: Arc<dyn SignalingOutput>,
    ) -> Self {
        Self {
            registry: SessionRegistry::new(),
            groups: BroadcastGroups::new(),
            command_rx,
            signaling,
        }
    }

    pub async fn run(mut self) {
        info!("Session manager started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!(
            "Command channel closed. Shutting down with {} live session(s).",
            self.registry.len()
        );
    }

    pub async fn handle_command(&mut self, cmd: SessionCommand) {
        match cmd {
            SessionCommand::Create { connection_id } => self.create(connection_id).await,

            SessionCommand::Join {
                connection_id,
                session_id,
                role,
            } => self.join(session_id, role, connection_id).await,

            SessionCommand::Relay {
                connection_id,
                message,
            } => self.relay(connection_id, message).await,

            SessionCommand::Disconnect { connection_id } => {
                self.on_disconnect(connection_id).await
            }
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn groups(&self) -> &BroadcastGroups {
        &self.groups
    }

    fn router(&self) -> MessageRouter<'_> {
        MessageRouter::new(&self.groups, self.signaling.as_ref())
    }

    async fn create(&mut self, connection_id: ConnectionId) {
        let session_id = self.registry.create();
        self.groups.join(&session_id, connection_id);

        info!("Session created: {} by {}", session_id, connection_id);

        self.signaling
            .send_event(connection_id, ServerEvent::SessionCreated(session_id))
            .await;
    }

    async fn join(&mut self, session_id: SessionId, role: Role, connection_id: ConnectionId) {
        match self.registry.join(&session_id, role, connection_id) {
            Ok(displaced) => {
                if let Some(previous) = displaced.filter(|previous| *previous != connection_id) {
                    info!(
                        "Connection {} replaced {} as {} of session {}",
                        connection_id, previous, role, session_id
                    );
                }

                self.groups.join(&session_id, connection_id);
                info!("{} {} joined session: {}", role, connection_id, session_id);

                match role {
                    Role::Phone => {
                        self.router()
                            .broadcast_except(
                                &session_id,
                                &connection_id,
                                ServerEvent::PhoneConnected,
                            )
                            .await;
                    }
                    Role::Controller => {
                        self.signaling
                            .send_event(connection_id, ServerEvent::PcJoined)
                            .await;
                    }
                }
            }
            Err(e) => {
                warn!(
                    "Rejected {} join from {} for session {}: {}",
                    role, connection_id, session_id, e
                );
                self.signaling
                    .send_event(connection_id, ServerEvent::Error(e.to_string()))
                    .await;
            }
        }
    }

    async fn relay(&self, connection_id: ConnectionId, message: RelayMessage) {
        self.router().relay(connection_id, message).await;
    }

    async fn on_disconnect(&mut self, connection_id: ConnectionId) {
        let ended = self.registry.remove_occupied_by(&connection_id);

        for session in ended {
            self.router()
                .broadcast(&session.id, ServerEvent::SessionEnded)
                .await;

            info!(
                "Session ended: {} ({} disconnected, open since {})",
                session.id, connection_id, session.created_at
            );
        }

        // Remaining members keep their group and can still relay by this id
        self.groups.leave_all(&connection_id);
    }
}
