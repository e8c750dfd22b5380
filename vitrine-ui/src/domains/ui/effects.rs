//! Declarative side-effect commands returned to the host.
//!
//! Update handlers never touch the DOM; they describe the mutations the
//! host must apply. The host owns element lookup and tolerates absent
//! optional elements (missing counters, missing buttons) with
//! conditional no-ops.

use super::views::carousel::types::CarouselKey;

/// One host-side mutation requested by an update handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write `translateX(<percent>%)` on the widget's images container.
    SetTrackOffset { key: CarouselKey, percent: f32 },
    /// Write the counter text on the widget's counter elements
    /// (desktop and mobile alike).
    SetCounter { key: CarouselKey, text: String },
    /// Suppress native scrolling for the touch-move being handled.
    /// Emitted from the move that locks a gesture horizontal onward.
    PreventPageScroll { key: CarouselKey },
    /// Schedule one frame callback for this widget, reported back as
    /// [`super::views::carousel::messages::CarouselMessage::FrameTick`].
    RequestFrame { key: CarouselKey },
    /// Swap the singleton modal image.
    ShowImage { source: String, alt: String },
}
