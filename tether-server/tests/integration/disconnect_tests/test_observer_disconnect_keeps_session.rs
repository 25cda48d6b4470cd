use tether_core::{ConnectionId, Role, ServerEvent};

use crate::integration::{create_test_manager, init_tracing};
use crate::utils::{create_session, disconnect, join};

/// The creator sits in the group without holding a role; losing it must
/// not end the session.
#[tokio::test]
async fn test_observer_disconnect_keeps_session() {
    init_tracing();

    let (mut manager, signaling) = create_test_manager();
    let creator = ConnectionId::new();
    let session_id = create_session(&mut manager, &signaling, creator)
        .await
        .expect("Session was not created");
    let phone = ConnectionId::new();
    join(&mut manager, &session_id, Role::Phone, phone).await;
    signaling.clear().await;

    disconnect(&mut manager, creator).await;

    assert!(manager.registry().contains(&session_id));
    assert!(!manager.groups().contains(&session_id, &creator));
    assert!(manager.groups().contains(&session_id, &phone));
    assert_eq!(signaling.total().await, 0);

    // A controller can still join afterwards
    let pc = ConnectionId::new();
    join(&mut manager, &session_id, Role::Controller, pc).await;
    assert_eq!(signaling.events_for(&pc).await, vec![ServerEvent::PcJoined]);
}

#[tokio::test]
async fn test_disconnect_of_unknown_connection_is_harmless() {
    init_tracing();

    let (mut manager, signaling) = create_test_manager();
    let creator = ConnectionId::new();
    let session_id = create_session(&mut manager, &signaling, creator)
        .await
        .expect("Session was not created");
    signaling.clear().await;

    disconnect(&mut manager, ConnectionId::new()).await;

    assert!(manager.registry().contains(&session_id));
    assert!(manager.groups().contains(&session_id, &creator));
    assert_eq!(signaling.total().await, 0);
}
