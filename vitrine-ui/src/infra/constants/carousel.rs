//! Carousel constants
//!
//! Shared constants for carousel gesture recognition and slide animation.
//! Tuning should happen here so all carousels on a page update
//! consistently.

/// Swipe recognition defaults.
pub mod swipe {
    /// Fraction of the widget width a horizontal drag must cover on
    /// release to commit a slide change. Below this the carousel snaps
    /// back to the starting slide.
    pub const THRESHOLD_FRACTION: f32 = 0.15;
}

/// Slide/tween animation defaults.
pub mod snap {
    /// Duration (ms) of a slide transition. Snap-backs run the same
    /// full duration.
    pub const SLIDE_DURATION_MS: u64 = 200;
    /// Easing kind for slides: 0=Linear, 1=EaseIn, 2=EaseOut, 3=EaseInOut.
    pub const EASING_KIND: u8 = 2; // EaseOut
}

/// Track geometry. Every slide spans the full widget width, so track
/// offsets are expressed in percentage units of one slide.
pub mod track {
    /// Offset span of a single slide in percent.
    pub const SLIDE_SPAN_PERCENT: f32 = 100.0;
}
