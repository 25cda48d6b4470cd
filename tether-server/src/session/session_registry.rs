use crate::session::{Session, SessionError};
use std::collections::HashMap;
use tether_core::{ConnectionId, Role, SessionId};

/// Owned map of live sessions. Not synchronized: the [`SessionManager`]
/// actor is its only writer.
///
/// [`SessionManager`]: crate::session::SessionManager
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an empty session under a freshly generated id.
    pub fn create(&mut self) -> SessionId {
        let mut id = SessionId::generate();
        while self.sessions.contains_key(&id) {
            id = SessionId::generate();
        }

        self.sessions.insert(id.clone(), Session::new(id.clone()));
        id
    }

    /// Seats `connection_id` in `role` of an existing session.
    ///
    /// Returns the displaced occupant, if any. Unknown ids leave the
    /// registry untouched.
    pub fn join(
        &mut self,
        session_id: &SessionId,
        role: Role,
        connection_id: ConnectionId,
    ) -> Result<Option<ConnectionId>, SessionError> {
        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::InvalidSession(session_id.clone()))?;

        Ok(session.assign(role, connection_id))
    }

    /// Removes and returns every session in which `connection_id` holds a role.
    pub fn remove_occupied_by(&mut self, connection_id: &ConnectionId) -> Vec<Session> {
        let ended: Vec<SessionId> = self
            .sessions
            .values()
            .filter(|session| session.is_occupied_by(connection_id))
            .map(|session| session.id.clone())
            .collect();

        ended
            .iter()
            .filter_map(|id| self.sessions.remove(id))
            .collect()
    }

    pub fn get(&self, session_id: &SessionId) -> Option<&Session> {
        self.sessions.get(session_id)
    }

    pub fn contains(&self, session_id: &SessionId) -> bool {
        self.sessions.contains_key(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
