use chrono::{DateTime, Utc};
use tether_core::{ConnectionId, Role, SessionId};

/// Registry record for one controller/phone pairing.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub controller: Option<ConnectionId>,
    pub phone: Option<ConnectionId>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            controller: None,
            phone: None,
            created_at: Utc::now(),
        }
    }

    /// Seats `connection_id` in `role`, returning whoever held it before.
    /// The previous occupant is only forgotten, never notified.
    pub fn assign(&mut self, role: Role, connection_id: ConnectionId) -> Option<ConnectionId> {
        let slot = match role {
            Role::Controller => &mut self.controller,
            Role::Phone => &mut self.phone,
        };
        slot.replace(connection_id)
    }

    pub fn is_occupied_by(&self, connection_id: &ConnectionId) -> bool {
        self.controller.as_ref() == Some(connection_id)
            || self.phone.as_ref() == Some(connection_id)
    }
}
