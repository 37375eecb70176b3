//! Adapter utilities for the `pager` crate.
//!
//! The `pager` crate is UI-agnostic and focuses on the paging math and state. This crate
//! provides the framework-neutral widget controller that adapters wrap:
//!
//! - Mount/unmount lifecycle with a scoped resize [`Subscription`]
//! - Coalesced resize recomputation on the next animation frame
//! - Optional tween-driven page transitions (adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/iced bindings).
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod controller;
mod subscription;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, Frame};
pub use subscription::Subscription;
pub use tween::{Easing, Tween};
