//! Shared types for the carousel module

use uuid::Uuid;

use crate::infra::constants::carousel::{snap, swipe};

/// Unique key for identifying carousels throughout the page.
/// Using a strongly-typed key avoids brittle string matching and enables
/// scoped state per carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    /// Gallery attached to a portfolio project card.
    Project(Uuid),
    /// Ad-hoc gallery identified by a static name.
    Custom(&'static str),
}

/// Static configuration for a carousel instance. These can be derived
/// from the portfolio preset or provided ad-hoc by callsites.
#[derive(Debug, Clone, Copy)]
pub struct CarouselConfig {
    /// Fraction of the widget width a drag must cover to change slides.
    pub swipe_threshold_fraction: f32,
    /// Slide transition duration in milliseconds.
    pub slide_duration_ms: u64,
    /// Easing kind: 0=Linear, 1=EaseIn, 2=EaseOut, 3=EaseInOut.
    pub easing_kind: u8,
}

impl CarouselConfig {
    /// Basic sane defaults suitable for full-width portfolio galleries.
    pub const fn portfolio_defaults() -> Self {
        Self {
            swipe_threshold_fraction: swipe::THRESHOLD_FRACTION,
            slide_duration_ms: snap::SLIDE_DURATION_MS,
            easing_kind: snap::EASING_KIND,
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::portfolio_defaults()
    }
}
