//! Actor identity for the interaction engine.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a connected actor.
///
/// Ordered so registries can iterate actors in a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Create a new random actor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an actor ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil/empty actor ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
