//! # navkit-registry: Destination Resolution
//!
//! Turns destination values into the rendering layer's unit type `V`
//! without the caller knowing which section owns the destination.
//!
//! - **Registry** (`registry.rs`): `DestinationRegistry<V>` and its
//!   four-step resolution with wrapper unwrapping.
//! - **Renderable** (`renderable.rs`): what `V` must provide, including the
//!   two visible placeholders for misses.
//! - **Global** (`global.rs`): explicitly initialized process-wide
//!   instances, one per `V`.
//!
//! ## Crate Policy
//!
//! Resolution never fails. A miss renders a placeholder naming the type.

pub mod error;
pub mod global;
pub mod registry;
pub mod renderable;

pub use error::RegistryError;
pub use global::{global, init_global, reset_global};
pub use registry::{DestinationRegistry, Resolver, MAX_UNWRAP_DEPTH};
pub use renderable::{Placeholder, Renderable};
