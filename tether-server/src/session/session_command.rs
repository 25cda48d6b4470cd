use tether_core::{ClientEvent, ConnectionId, RelayKind, RelayMessage, Role, SessionId};

/// Commands the signaling gateway feeds into the session manager.
#[derive(Debug)]
pub enum SessionCommand {
    /// Open a new empty session and place the requester in its group.
    Create { connection_id: ConnectionId },

    /// Take a role in an existing session.
    Join {
        connection_id: ConnectionId,
        session_id: SessionId,
        role: Role,
    },

    /// Pass an opaque payload to the rest of a session's group.
    Relay {
        connection_id: ConnectionId,
        message: RelayMessage,
    },

    /// The socket is gone. Sent exactly once per connection.
    Disconnect { connection_id: ConnectionId },
}

impl SessionCommand {
    pub fn from_client_event(connection_id: ConnectionId, event: ClientEvent) -> Self {
        let relay = |kind, session_id, payload| SessionCommand::Relay {
            connection_id,
            message: RelayMessage::new(kind, session_id, payload),
        };

        match event {
            ClientEvent::CreateSession => SessionCommand::Create { connection_id },
            ClientEvent::PhoneJoin(session_id) => SessionCommand::Join {
                connection_id,
                session_id,
                role: Role::Phone,
            },
            ClientEvent::PcJoin(session_id) => SessionCommand::Join {
                connection_id,
                session_id,
                role: Role::Controller,
            },
            ClientEvent::Offer { session_id, offer } => relay(RelayKind::Offer, session_id, offer),
            ClientEvent::Answer { session_id, answer } => {
                relay(RelayKind::Answer, session_id, answer)
            }
            ClientEvent::IceCandidate {
                session_id,
                candidate,
            } => relay(RelayKind::IceCandidate, session_id, candidate),
            ClientEvent::ControlCommand {
                session_id,
                command,
            } => relay(RelayKind::ControlCommand, session_id, command),
        }
    }
}
