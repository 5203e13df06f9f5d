#![deny(missing_docs)]

//! # navkit-core: Foundational Types for navkit
//!
//! Leaf crate of the workspace. Defines the value types every other crate
//! shares and depends on nothing internal.
//!
//! ## Contents
//!
//! - **Destinations** (`destination.rs`): the `Destination` value bound, the
//!   `Resolvable` capability used by the registry, and `TypeTag` runtime
//!   identity.
//! - **Routes** (`route.rs`): `Route`, `SheetStyle`, `OverlaySlot`, `Detent`.
//! - **Flows** (`flow.rs`): the `Flow` trait for top-level sections.
//! - **Published state** (`observable.rs`): `Published<T>`, the synchronous
//!   observable container the rendering layer binds to.
//! - **Identity** (`identity.rs`): `RouterId`, `SubscriptionId`.
//! - **Configuration** (`config.rs`) and **errors** (`error.rs`).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `navkit-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod destination;
pub mod error;
pub mod flow;
pub mod identity;
pub mod observable;
pub mod route;

pub use config::{ConfigError, NavigationConfig, DEFAULT_FLOW_SWITCH_DELAY};
pub use destination::{AsAny, Destination, Resolvable, TypeTag};
pub use error::NavkitError;
pub use flow::Flow;
pub use identity::{RouterId, SubscriptionId};
pub use observable::{Observer, Published};
pub use route::{Detent, OverlaySlot, Route, SheetStyle};
