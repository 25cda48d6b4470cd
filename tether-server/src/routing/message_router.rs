use crate::routing::BroadcastGroups;
use crate::signaling::SignalingOutput;
use tether_core::{ConnectionId, RelayMessage, ServerEvent, SessionId};
use tracing::debug;

/// Fans events out to the members of a session's broadcast group.
///
/// Holds only shared borrows: routing never changes group membership or
/// session state.
pub struct MessageRouter<'a> {
    groups: &'a BroadcastGroups,
    signaling: &'a dyn SignalingOutput,
}

impl<'a> MessageRouter<'a> {
    pub fn new(groups: &'a BroadcastGroups, signaling: &'a dyn SignalingOutput) -> Self {
        Self { groups, signaling }
    }

    /// Forwards a payload verbatim to every other member of its session.
    ///
    /// Neither the session nor the sender's membership is checked; a relay
    /// into an empty or unknown group reaches nobody. Returns how many
    /// connections the event was handed to.
    pub async fn relay(&self, sender: ConnectionId, message: RelayMessage) -> usize {
        let kind = message.kind;
        let session_id = message.session_id.clone();
        let delivered = self
            .broadcast_except(&session_id, &sender, message.into_event())
            .await;

        debug!(
            "Relayed {} in session {} from {} to {} peer(s)",
            kind.as_str(),
            session_id,
            sender,
            delivered
        );
        delivered
    }

    /// Sends `event` to every member of the group.
    pub async fn broadcast(&self, session_id: &SessionId, event: ServerEvent) -> usize {
        let members = self.groups.members(session_id);
        self.deliver(members, event).await
    }

    /// Sends `event` to every member of the group except `sender`.
    pub async fn broadcast_except(
        &self,
        session_id: &SessionId,
        sender: &ConnectionId,
        event: ServerEvent,
    ) -> usize {
        let members = self.groups.members_except(session_id, sender);
        self.deliver(members, event).await
    }

    async fn deliver(&self, members: Vec<ConnectionId>, event: ServerEvent) -> usize {
        let count = members.len();
        for connection_id in members {
            self.signaling.send_event(connection_id, event.clone()).await;
        }
        count
    }
}
