use anyhow::{Context, Result};
use tokio::sync::mpsc;

use tether_core::{ConnectionId, RelayKind, RelayMessage, Role, ServerEvent, SessionId};
use tether_server::{SessionCommand, SessionManager};

use super::mock_signaling::{MockSignalingOutput, SentEvent};

/// Timeout for a single expected event (ms).
pub const SIGNAL_TIMEOUT_MS: u64 = 2000;

/// How long to listen before concluding nothing else will arrive (ms).
pub const SILENCE_MS: u64 = 200;

/// Create a session on behalf of `connection_id` and return its id.
pub async fn create_session(
    manager: &mut SessionManager,
    signaling: &MockSignalingOutput,
    connection_id: ConnectionId,
) -> Result<SessionId> {
    manager
        .handle_command(SessionCommand::Create { connection_id })
        .await;

    signaling
        .events_for(&connection_id)
        .await
        .into_iter()
        .rev()
        .find_map(|event| match event {
            ServerEvent::SessionCreated(id) => Some(id),
            _ => None,
        })
        .context("No session-created event")
}

pub async fn join(
    manager: &mut SessionManager,
    session_id: &SessionId,
    role: Role,
    connection_id: ConnectionId,
) {
    manager
        .handle_command(SessionCommand::Join {
            connection_id,
            session_id: session_id.clone(),
            role,
        })
        .await;
}

pub async fn relay(
    manager: &mut SessionManager,
    kind: RelayKind,
    session_id: &SessionId,
    payload: serde_json::Value,
    connection_id: ConnectionId,
) {
    manager
        .handle_command(SessionCommand::Relay {
            connection_id,
            message: RelayMessage::new(kind, session_id.clone(), payload),
        })
        .await;
}

pub async fn disconnect(manager: &mut SessionManager, connection_id: ConnectionId) {
    manager
        .handle_command(SessionCommand::Disconnect { connection_id })
        .await;
}

/// Wait for the next event addressed to `connection_id`, skipping others.
pub async fn wait_for_event(
    signal_rx: &mut mpsc::UnboundedReceiver<SentEvent>,
    connection_id: &ConnectionId,
    timeout_ms: u64,
) -> Result<ServerEvent> {
    let start = std::time::Instant::now();
    let timeout = std::time::Duration::from_millis(timeout_ms);

    loop {
        let recv_timeout =
            tokio::time::timeout(std::time::Duration::from_millis(100), signal_rx.recv());

        match recv_timeout.await {
            Ok(Some(sent)) if &sent.connection_id == connection_id => return Ok(sent.event),
            Ok(Some(_)) => continue,
            Ok(None) => anyhow::bail!("Signal channel closed"),
            Err(_) => {
                if start.elapsed() > timeout {
                    anyhow::bail!("Timeout waiting for event to {}", connection_id);
                }
            }
        }
    }
}
