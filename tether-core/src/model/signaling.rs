use crate::model::session::SessionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Events a client sends over its signaling socket.
///
/// Framed as `{"event": "<kebab-name>", "data": <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    CreateSession,
    PhoneJoin(SessionId),
    PcJoin(SessionId),
    // Payloads are passed through unread; a missing one relays as null.
    #[serde(rename_all = "camelCase")]
    Offer {
        session_id: SessionId,
        #[serde(default)]
        offer: Value,
    },
    #[serde(rename_all = "camelCase")]
    Answer {
        session_id: SessionId,
        #[serde(default)]
        answer: Value,
    },
    #[serde(rename_all = "camelCase")]
    IceCandidate {
        session_id: SessionId,
        #[serde(default)]
        candidate: Value,
    },
    #[serde(rename_all = "camelCase")]
    ControlCommand {
        session_id: SessionId,
        #[serde(default)]
        command: Value,
    },
}

/// Events the server pushes to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    SessionCreated(SessionId),
    PhoneConnected,
    PcJoined,
    Error(String),
    Offer(Value),
    Answer(Value),
    IceCandidate(Value),
    ControlCommand(Value),
    SessionEnded,
}

/// Kinds of payload the router passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayKind {
    Offer,
    Answer,
    IceCandidate,
    ControlCommand,
}

impl RelayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelayKind::Offer => "offer",
            RelayKind::Answer => "answer",
            RelayKind::IceCandidate => "ice-candidate",
            RelayKind::ControlCommand => "control-command",
        }
    }

    /// Wraps `payload` in the outbound event of the same kind.
    pub fn into_event(self, payload: Value) -> ServerEvent {
        match self {
            RelayKind::Offer => ServerEvent::Offer(payload),
            RelayKind::Answer => ServerEvent::Answer(payload),
            RelayKind::IceCandidate => ServerEvent::IceCandidate(payload),
            RelayKind::ControlCommand => ServerEvent::ControlCommand(payload),
        }
    }
}

/// A relayable event detached from its wire framing.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayMessage {
    pub kind: RelayKind,
    pub session_id: SessionId,
    pub payload: Value,
}

impl RelayMessage {
    pub fn new(kind: RelayKind, session_id: SessionId, payload: Value) -> Self {
        Self {
            kind,
            session_id,
            payload,
        }
    }

    pub fn into_event(self) -> ServerEvent {
        self.kind.into_event(self.payload)
    }
}
