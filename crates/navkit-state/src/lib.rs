//! # navkit-state: Navigation State Machines
//!
//! Holds the mutable navigation state of an application. The rendering layer
//! binds to it through `subscribe`; application code drives it through the
//! handles below.
//!
//! ## Components
//!
//! - **Router** (`router.rs`): one per top-level section. A stack of pushed
//!   destinations plus at most one overlay in one of six slots, with an
//!   optional action run on dismissal.
//!
//! - **RouterManager** (`manager.rs`): one per application. Maps each flow to
//!   its router, tracks the selected and previous flow, and runs follow-up
//!   actions once a flow switch has mounted.
//!
//! ## Concurrency
//!
//! Both handles are `Clone + Send + Sync` and share state through `Arc`.
//! Mutations are serialized per handle. Observers and dismiss actions run
//! after the state lock is released, so they may call back into any router
//! or the manager.

pub mod manager;
pub mod router;

pub use manager::{FlowAction, FlowSelection, PendingFlowAction, RouterManager, WeakRouterManager};
pub use router::{DismissAction, Dismissal, Overlay, Router, RouterError, RouterState};
