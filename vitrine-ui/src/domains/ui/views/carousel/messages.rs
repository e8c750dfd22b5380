//! Local message types for carousel interactions

use std::time::Instant;

use super::types::CarouselKey;

/// Inbound carousel events, translated from host input.
#[derive(Debug, Clone)]
pub enum CarouselMessage {
    // Navigation controls
    NextPressed { key: CarouselKey },
    PrevPressed { key: CarouselKey },

    // Touch gesture
    TouchStarted { key: CarouselKey, x: f32, y: f32 },
    TouchMoved { key: CarouselKey, x: f32, y: f32 },
    TouchEnded { key: CarouselKey, x: f32 },
    TouchCancelled { key: CarouselKey },

    /// Host frame callback fired for this widget; `now` is the frame
    /// timestamp.
    FrameTick { key: CarouselKey, now: Instant },

    /// Widget width changed (viewport resize or relayout).
    ViewportResized { key: CarouselKey, width: f32 },
}
