use std::collections::{HashMap, HashSet};
use tether_core::{ConnectionId, SessionId};

/// Set of connections currently associated with each session id.
///
/// Written by the session manager on create, join and disconnect; the
/// router only reads it.
#[derive(Debug, Default)]
pub struct BroadcastGroups {
    groups: HashMap<SessionId, HashSet<ConnectionId>>,
}

impl BroadcastGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&mut self, session_id: &SessionId, connection_id: ConnectionId) {
        self.groups
            .entry(session_id.clone())
            .or_default()
            .insert(connection_id);
    }

    /// Drops `connection_id` from every group, discarding groups left empty.
    pub fn leave_all(&mut self, connection_id: &ConnectionId) {
        self.groups.retain(|_, members| {
            members.remove(connection_id);
            !members.is_empty()
        });
    }

    pub fn members(&self, session_id: &SessionId) -> Vec<ConnectionId> {
        self.groups
            .get(session_id)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn members_except(
        &self,
        session_id: &SessionId,
        sender: &ConnectionId,
    ) -> Vec<ConnectionId> {
        self.groups
            .get(session_id)
            .map(|members| members.iter().filter(|id| *id != sender).copied().collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, session_id: &SessionId, connection_id: &ConnectionId) -> bool {
        self.groups
            .get(session_id)
            .is_some_and(|members| members.contains(connection_id))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
