//! # Identity Newtypes
//!
//! Routers are re-created every time their section's view appears, and the
//! manager must keep the first instance. `RouterId` makes "which instance is
//! this" observable in logs and tests without pointer comparisons.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of one `Router` instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouterId(pub Uuid);

impl RouterId {
    /// Generate a new random router identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RouterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RouterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "router:{}", self.0)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "subscription:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_ids_are_unique() {
        assert_ne!(RouterId::new(), RouterId::new());
    }

    #[test]
    fn router_id_display_is_prefixed() {
        let id = RouterId::new();
        assert_eq!(id.to_string(), format!("router:{}", id.as_uuid()));
    }

    #[test]
    fn router_id_serde_round_trip() {
        let id = RouterId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: RouterId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
