//! # navkit-demo: Example App
//!
//! A small app wired the way a real one would use navkit: a person directory
//! tab, a random-number tab, and a transient profile flow.
//!
//! - `app`: flows, destination enums, and the person store.
//! - `view`: `TextView`, the plain-text rendering unit, and the registry
//!   wiring for each section.
//! - `scenario`: a scripted session that records JSON snapshots.
//! - `routes`: the route table (slots and detents) as data.
//!
//! ## Crate Policy
//!
//! Argument parsing lives in `main.rs`; everything here is plain library
//! code so it can be tested without a process boundary.

pub mod app;
pub mod routes;
pub mod scenario;
pub mod view;
