//! A headless pager for a single horizontal row of items.
//!
//! For adapter-level utilities (resize coalescing, subscriptions, tweens), see the
//! `pager-adapter` crate.
//!
//! The row is paged one viewport width at a time, by arrow clicks or by swipes. This crate
//! contains the paging engine:
//! - a position model that clamps offsets to the row and derives the current item
//! - a swipe recognizer with axis locking and a release threshold
//! - resize reconciliation that keeps the current item page-aligned
//! - arrow visibility derived from boundary state and hover/focus
//!
//! It is UI-agnostic. A GUI/web layer is expected to provide:
//! - content width, viewport width and item count (see [`GeometryProvider`])
//! - pointer/touch, click, hover and resize events
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod arrows;
pub mod gesture;
mod geometry;
mod options;
mod pager;
pub mod position;
mod state;
mod types;


pub use gesture::{
    Axis, DEFAULT_SWIPE_THRESHOLD_PX, DragSession, GesturePhase, GestureRecognizer, MoveResponse,
    Release,
};
pub use geometry::{Geometry, GeometryProvider};
pub use options::{InitialOffset, OnPositionChange, PagerOptions};
pub use pager::Pager;
pub use state::{PagingState, Step};
pub use types::{Arrows, Direction};
