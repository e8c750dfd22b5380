//! Carousel message handling
//!
//! The update functions hold the widget's control flow: button and
//! gesture input decide a target slide, the animator tweens the track
//! offset there, and the committed index (plus counter text) only
//! changes when a tween finishes. Messages addressing unknown keys are
//! conditional no-ops.

use std::time::Instant;

use crate::domains::ui::effects::Effect;

use super::gesture::DragState;
use super::messages::CarouselMessage;
use super::registry::CarouselRegistry;
use super::types::CarouselKey;

/// Handle one carousel message against the page's registry.
pub fn handle_carousel_message(
    registry: &mut CarouselRegistry,
    msg: CarouselMessage,
) -> Vec<Effect> {
    match msg {
        CarouselMessage::NextPressed { key } => {
            start_button_slide(registry, key, true)
        }
        CarouselMessage::PrevPressed { key } => {
            start_button_slide(registry, key, false)
        }
        CarouselMessage::TouchStarted { key, x, y } => {
            // A gesture begun mid-transition is ignored wholesale: no
            // drag record exists, so its moves and release are no-ops.
            if registry.is_animating(&key) {
                return Vec::new();
            }
            let Some(vc) = registry.get_mut(&key) else {
                log::debug!("touch start for unknown carousel {key:?}");
                return Vec::new();
            };
            vc.drag = Some(DragState::begin(x, y));
            Vec::new()
        }
        CarouselMessage::TouchMoved { key, x, y } => {
            let Some(vc) = registry.get_mut(&key) else {
                return Vec::new();
            };
            let Some(mut drag) = vc.drag else {
                return Vec::new();
            };
            let dx = drag.observe(x, y);
            vc.drag = Some(drag);
            // Vertical (or axis-undecided) gestures leave the track
            // alone and let native scroll proceed.
            let Some(dx) = dx else {
                return Vec::new();
            };
            let percent = vc.live_drag_offset(dx);
            vec![
                Effect::PreventPageScroll { key },
                Effect::SetTrackOffset { key, percent },
            ]
        }
        CarouselMessage::TouchEnded { key, x } => {
            let target = {
                let Some(vc) = registry.get_mut(&key) else {
                    return Vec::new();
                };
                let Some(drag) = vc.drag.take() else {
                    return Vec::new();
                };
                if !drag.is_horizontal() {
                    return Vec::new();
                }
                vc.release_target(drag.displacement(x))
            };
            start_slide(registry, key, target)
        }
        CarouselMessage::TouchCancelled { key } => {
            let target = {
                let Some(vc) = registry.get_mut(&key) else {
                    return Vec::new();
                };
                let Some(drag) = vc.drag.take() else {
                    return Vec::new();
                };
                if !drag.is_horizontal() {
                    return Vec::new();
                }
                // The finger is gone; snap back without an index change.
                vc.current_index
            };
            start_slide(registry, key, target)
        }
        CarouselMessage::FrameTick { key, now } => {
            advance_animation(registry, key, now)
        }
        CarouselMessage::ViewportResized { key, width } => {
            if let Some(vc) = registry.get_mut(&key) {
                vc.set_viewport_width(width);
            }
            Vec::new()
        }
    }
}

/// Prev/next controls bypass gesture recognition: the target wraps
/// around and the press is ignored while a transition is in flight.
fn start_button_slide(
    registry: &mut CarouselRegistry,
    key: CarouselKey,
    forward: bool,
) -> Vec<Effect> {
    if registry.is_animating(&key) {
        return Vec::new();
    }
    let target = {
        let Some(vc) = registry.get(&key) else {
            log::debug!("button press for unknown carousel {key:?}");
            return Vec::new();
        };
        if forward {
            vc.next_wrapped()
        } else {
            vc.prev_wrapped()
        }
    };
    start_slide(registry, key, target)
}

/// Kick off a tween from the committed slide to `target`. Runs even
/// when `target` equals the committed index: a snap-back is visual
/// feedback, not a no-op.
fn start_slide(
    registry: &mut CarouselRegistry,
    key: CarouselKey,
    target: usize,
) -> Vec<Effect> {
    let (start, end, duration_ms, easing_kind) = {
        let Some(vc) = registry.get(&key) else {
            return Vec::new();
        };
        (
            vc.resting_offset(),
            vc.offset_for_index(target),
            vc.config.slide_duration_ms,
            vc.config.easing_kind,
        )
    };
    let anim = registry.ensure_animator(&key);
    anim.start_at(Instant::now(), start, target, end, duration_ms, easing_kind);
    vec![Effect::RequestFrame { key }]
}

/// Advance the widget's tween for one frame. While the tween runs each
/// frame emits the interpolated offset and asks for the next callback;
/// the finishing frame commits the index and publishes the counter
/// instead.
fn advance_animation(
    registry: &mut CarouselRegistry,
    key: CarouselKey,
    now: Instant,
) -> Vec<Effect> {
    let (percent, finished, target) = {
        let Some(anim) = registry.animator_mut(&key) else {
            return Vec::new();
        };
        let Some(percent) = anim.tick_at(now) else {
            return Vec::new();
        };
        (percent, !anim.is_active(), anim.target_index())
    };

    let mut effects = vec![Effect::SetTrackOffset { key, percent }];
    if finished {
        if let Some(vc) = registry.get_mut(&key) {
            vc.commit_index(target);
            effects.push(Effect::SetCounter {
                key,
                text: vc.counter_text(),
            });
            log::debug!(
                "carousel {key:?} settled on slide {}/{}",
                vc.current_index + 1,
                vc.len()
            );
        }
    } else {
        effects.push(Effect::RequestFrame { key });
    }
    effects
}
