//! Carousel widget: gesture-driven, animated slide navigation.
//!
//! This module provides a reusable horizontal image carousel with swipe
//! navigation and eased slide transitions. The structure cleanly
//! separates per-widget state, gesture recognition, the tween animator,
//! and message handling, with a registry scoping state per carousel
//! instance.

pub mod animator;
pub mod gesture;
pub mod messages;
pub mod registry;
pub mod state;
pub mod types;
pub mod update;

pub use gesture::{Axis, DragState};
pub use messages::CarouselMessage;
pub use registry::CarouselRegistry;
pub use state::CarouselState;
pub use types::*;
