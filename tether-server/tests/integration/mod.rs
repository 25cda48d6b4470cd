
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Level;

use tether_server::{SessionCommand, SessionManager, SignalingService, router};

use crate::utils::{MockSignalingOutput, SentEvent};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A manager driven directly through `handle_command`, for tests that
/// inspect registry state between steps.
pub fn create_test_manager() -> (SessionManager, MockSignalingOutput) {
    let (_cmd_tx, cmd_rx) = mpsc::channel::<SessionCommand>(1);
    let signaling = MockSignalingOutput::new_stored_only();

    let manager = SessionManager::new(cmd_rx, Arc::new(signaling.clone()));

    (manager, signaling)
}

/// A manager running its own event loop, fed through a channel.
pub fn spawn_test_manager() -> (
    mpsc::Sender<SessionCommand>,
    mpsc::UnboundedReceiver<SentEvent>,
    MockSignalingOutput,
) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<SessionCommand>(100);
    let (signaling, signal_rx) = MockSignalingOutput::new();

    let manager = SessionManager::new(cmd_rx, Arc::new(signaling.clone()));

    tokio::spawn(async move {
        manager.run().await;
    });

    (cmd_tx, signal_rx, signaling)
}

/// Serve the full router on an ephemeral local port.
pub async fn start_test_server() -> SocketAddr {
    let service = SignalingService::spawn(64);
    let app = router(service, Path::new("public"));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    addr
}
