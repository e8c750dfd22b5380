//! Shared helpers for widget integration tests

use std::time::{Duration, Instant};

use vitrine_model::image::ImageAsset;
use vitrine_ui::PageController;
use vitrine_ui::domains::ui::effects::Effect;
use vitrine_ui::domains::ui::messages::Message;
use vitrine_ui::domains::ui::page::{CarouselMarkup, PageMarkup};
use vitrine_ui::domains::ui::views::carousel::messages::CarouselMessage;
use vitrine_ui::domains::ui::views::carousel::types::CarouselKey;

pub const KEY: CarouselKey = CarouselKey::Custom("test-gallery");

pub fn assets(total: usize) -> Vec<ImageAsset> {
    (0..total)
        .map(|i| {
            ImageAsset::new(format!("slide-{i}.jpg"), format!("slide {i}"))
                .expect("valid asset")
        })
        .collect()
}

/// A controller with one mounted gallery under [`KEY`].
pub fn mounted(total: usize, width: f32) -> PageController {
    let mut controller = PageController::new();
    controller
        .mount_page(PageMarkup {
            carousels: vec![CarouselMarkup {
                key: KEY,
                images: assets(total),
                viewport_width: width,
            }],
        })
        .expect("valid markup");
    controller
}

pub fn current_index(controller: &PageController) -> usize {
    controller
        .registry()
        .get(&KEY)
        .expect("gallery is mounted")
        .current_index
}

/// Pump frame callbacks on a 16 ms virtual timeline until the widget
/// stops requesting them. Returns the final frame's effects (the commit
/// batch when a tween was in flight).
pub fn settle(controller: &mut PageController) -> Vec<Effect> {
    let mut now = Instant::now();
    let mut batch = Vec::new();
    for _ in 0..64 {
        now += Duration::from_millis(16);
        let effects = controller.handle(Message::Carousel(
            CarouselMessage::FrameTick { key: KEY, now },
        ));
        if effects.is_empty() {
            break;
        }
        let more = effects
            .iter()
            .any(|effect| matches!(effect, Effect::RequestFrame { .. }));
        batch = effects;
        if !more {
            break;
        }
    }
    batch
}

/// Drive one single-finger drag from `from_x` to `to_x` at a steady
/// height and return the release effects.
pub fn swipe(
    controller: &mut PageController,
    from_x: f32,
    to_x: f32,
) -> Vec<Effect> {
    let _ = controller.handle(Message::Carousel(CarouselMessage::TouchStarted {
        key: KEY,
        x: from_x,
        y: 120.0,
    }));
    let midpoint = (from_x + to_x) / 2.0;
    for x in [midpoint, to_x] {
        let _ = controller.handle(Message::Carousel(
            CarouselMessage::TouchMoved {
                key: KEY,
                x,
                y: 121.0,
            },
        ));
    }
    controller.handle(Message::Carousel(CarouselMessage::TouchEnded {
        key: KEY,
        x: to_x,
    }))
}
