use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Opaque session identifier.
///
/// Issued ids are UUID v4 strings, but whatever a client sends deserializes
/// into a `SessionId` so that lookups of unknown ids fail at the registry, not
/// at deserialization. A missing id or one that is not a JSON string becomes
/// the empty id, which is never issued.
#[derive(Debug, Serialize, Clone, Hash, Eq, PartialEq)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for SessionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Going through Option lets an absent field land here as None
        match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => Ok(Self(s)),
            _ => Ok(Self(String::new())),
        }
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two seats of a session.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Role {
    /// The initiating peer, called "pc" on the wire.
    Controller,
    Phone,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Controller => f.write_str("controller"),
            Role::Phone => f.write_str("phone"),
        }
    }
}
