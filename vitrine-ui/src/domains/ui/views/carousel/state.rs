//! Per-widget carousel state

use vitrine_model::image::ImageAsset;

use super::gesture::DragState;
use super::types::CarouselConfig;
use crate::infra::constants::carousel::track;

/// State for one carousel widget instance.
///
/// `current_index` is only committed when a slide animation completes;
/// while a drag or tween is in flight the visual offset moves
/// independently of the committed index.
#[derive(Debug, Clone)]
pub struct CarouselState {
    /// Ordered slide images. Fixed for the widget's lifetime, never empty.
    pub images: Vec<ImageAsset>,
    /// Committed slide index, always within `0..images.len()`.
    pub current_index: usize,
    /// Widget width in pixels, kept current by resize events.
    pub viewport_width: f32,
    /// Active touch interaction, if any.
    pub drag: Option<DragState>,
    /// Per-widget tuning copied at mount.
    pub config: CarouselConfig,
}

impl CarouselState {
    /// Create state for a freshly mounted widget. Callers guarantee a
    /// non-empty image list; the page controller enforces this at mount.
    pub fn new(
        images: Vec<ImageAsset>,
        viewport_width: f32,
        config: CarouselConfig,
    ) -> Self {
        Self {
            images,
            current_index: 0,
            viewport_width,
            drag: None,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Counter display text for the committed index.
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.len())
    }

    /// Track offset (percent) of the slide at `index`.
    pub fn offset_for_index(&self, index: usize) -> f32 {
        -(index as f32) * track::SLIDE_SPAN_PERCENT
    }

    /// Track offset (percent) when the committed slide is at rest.
    pub fn resting_offset(&self) -> f32 {
        self.offset_for_index(self.current_index)
    }

    /// Un-eased track offset while a horizontal drag follows the finger.
    /// Deliberately unclamped: overdrag past either edge is allowed and
    /// resolved by the snap-back on release.
    pub fn live_drag_offset(&self, dx: f32) -> f32 {
        let width = self.viewport_width.max(1.0);
        self.resting_offset() + (dx / width) * track::SLIDE_SPAN_PERCENT
    }

    /// Pixel displacement a release must exceed to change slides.
    pub fn swipe_threshold(&self) -> f32 {
        self.viewport_width * self.config.swipe_threshold_fraction
    }

    /// Decide where a horizontal release lands: one slide over when the
    /// displacement clears the threshold and a neighbor exists in that
    /// direction, otherwise back to the starting slide. Drags never wrap.
    pub fn release_target(&self, dx: f32) -> usize {
        let threshold = self.swipe_threshold();
        if dx > threshold && self.current_index > 0 {
            self.current_index - 1
        } else if dx < -threshold && self.current_index + 1 < self.len() {
            self.current_index + 1
        } else {
            self.current_index
        }
    }

    /// Next slide for button navigation, wrapping past the end.
    pub fn next_wrapped(&self) -> usize {
        (self.current_index + 1) % self.len()
    }

    /// Previous slide for button navigation, wrapping past the start.
    pub fn prev_wrapped(&self) -> usize {
        (self.current_index + self.len() - 1) % self.len()
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Commit a finished transition. The clamp keeps the invariant even
    /// against a stale target.
    pub(crate) fn commit_index(&mut self, index: usize) {
        self.current_index = index.min(self.len() - 1);
    }
}
