//! # Application Flows
//!
//! A flow is a top-level, independently navigable section of the app (one
//! tab, or a transient section shown above the tabs). Each flow owns one
//! `Router` while it is mounted.

use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a top-level section.
///
/// Persistent flows (tabs) keep their router for the whole session.
/// Transient flows are torn down when their view disappears: the manager
/// returns to the previously active flow and unregisters the router.
pub trait Flow: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Whether this flow's router is discarded when its view disappears.
    fn is_transient(&self) -> bool {
        false
    }
}
