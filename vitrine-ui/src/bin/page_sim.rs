//! Scripted walkthrough of a portfolio page.
//!
//! Parses a small JSON page description the way a host would scan its
//! markup, mounts the widgets, then drives a swipe, button navigation,
//! a vertical scroll gesture, and a lightbox click, logging every
//! effect the runtime emits.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;
use serde::Deserialize;

use vitrine_model::ids::ProjectID;
use vitrine_model::image::ImageAsset;
use vitrine_ui::domains::ui::effects::Effect;
use vitrine_ui::domains::ui::messages::Message;
use vitrine_ui::domains::ui::page::{CarouselMarkup, PageMarkup};
use vitrine_ui::domains::ui::views::carousel::messages::CarouselMessage;
use vitrine_ui::domains::ui::views::carousel::types::CarouselKey;
use vitrine_ui::domains::ui::views::lightbox::messages::LightboxMessage;
use vitrine_ui::PageController;

const PAGE_JSON: &str = r#"{
  "carousels": [
    {
      "title": "Riverside Pavilion",
      "width": 300.0,
      "images": [
        { "source": "pavilion-1.jpg", "full_source": "pavilion-1-full.jpg", "alt": "Pavilion at dusk" },
        { "source": "pavilion-2.jpg", "full_source": "pavilion-2-full.jpg", "alt": "Pavilion interior" },
        { "source": "pavilion-3.jpg", "alt": "Pavilion site plan" }
      ]
    },
    {
      "title": "Harbor Masterplan",
      "width": 720.0,
      "images": [
        { "source": "harbor-1.jpg", "full_source": "harbor-1-full.jpg", "alt": "Harbor aerial" },
        { "source": "harbor-2.jpg", "full_source": "harbor-2-full.jpg", "alt": "Harbor boardwalk" }
      ]
    }
  ]
}"#;

#[derive(Debug, Deserialize)]
struct PageDoc {
    carousels: Vec<CarouselDoc>,
}

#[derive(Debug, Deserialize)]
struct CarouselDoc {
    title: String,
    width: f32,
    images: Vec<ImageAsset>,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("vitrine_ui", LevelFilter::Debug)
        .filter_module("page_sim", LevelFilter::Info)
        .init();
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let doc: PageDoc =
        serde_json::from_str(PAGE_JSON).context("invalid page document")?;

    let mut controller = PageController::new();
    let mut galleries = Vec::new();
    let mut page = PageMarkup::default();
    for carousel in doc.carousels {
        let key = CarouselKey::Project(ProjectID::new().to_uuid());
        galleries.push((carousel.title.clone(), key, carousel.images.clone()));
        page.carousels.push(CarouselMarkup {
            key,
            images: carousel.images,
            viewport_width: carousel.width,
        });
    }

    let effects = controller
        .mount_page(page)
        .context("page markup violates the widget contract")?;
    report("mount", &effects);

    let (title, key, images) = &galleries[0];
    let key = *key;
    log::info!("--- gallery \"{title}\" ---");

    // Two next presses: 3-slide gallery ends on "3 / 3".
    for _ in 0..2 {
        let effects = controller.handle(Message::Carousel(
            CarouselMessage::NextPressed { key },
        ));
        report("next press", &effects);
        pump_frames(&mut controller, key, effects);
    }

    // A swipe right past the 15% threshold steps back one slide.
    let effects = drive_swipe(&mut controller, key, 100.0, 180.0);
    pump_frames(&mut controller, key, effects);

    // A vertical gesture scrolls the page instead of the track.
    let _ = controller.handle(Message::Carousel(CarouselMessage::TouchStarted {
        key,
        x: 150.0,
        y: 80.0,
    }));
    let effects = controller.handle(Message::Carousel(
        CarouselMessage::TouchMoved {
            key,
            x: 152.0,
            y: 200.0,
        },
    ));
    report("vertical move", &effects);
    let effects = controller.handle(Message::Carousel(
        CarouselMessage::TouchEnded { key, x: 152.0 },
    ));
    report("vertical release", &effects);

    // Enlarge the first image through the lightbox.
    let effects = controller.handle(Message::Lightbox(
        LightboxMessage::ImageClicked {
            asset: images[0].clone(),
        },
    ));
    report("image click", &effects);

    Ok(())
}

/// Deterministic frame timeline: one tick every 16 ms of virtual time.
#[derive(Debug)]
struct Clock {
    now: Instant,
}

impl Clock {
    fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    fn next_frame(&mut self) -> Instant {
        self.now += Duration::from_millis(16);
        self.now
    }
}

/// Feed frame callbacks until the widget stops asking for them.
fn pump_frames(
    controller: &mut PageController,
    key: CarouselKey,
    mut effects: Vec<Effect>,
) {
    let mut clock = Clock::new();
    while effects
        .iter()
        .any(|effect| matches!(effect, Effect::RequestFrame { .. }))
    {
        let now = clock.next_frame();
        effects = controller
            .handle(Message::Carousel(CarouselMessage::FrameTick { key, now }));
        report("frame", &effects);
    }
}

/// One horizontal drag from `from_x` to `to_x` at a steady height.
fn drive_swipe(
    controller: &mut PageController,
    key: CarouselKey,
    from_x: f32,
    to_x: f32,
) -> Vec<Effect> {
    let _ = controller.handle(Message::Carousel(CarouselMessage::TouchStarted {
        key,
        x: from_x,
        y: 120.0,
    }));
    let midpoint = (from_x + to_x) / 2.0;
    for x in [midpoint, to_x] {
        let effects = controller.handle(Message::Carousel(
            CarouselMessage::TouchMoved { key, x, y: 122.0 },
        ));
        report("drag move", &effects);
    }
    let effects = controller
        .handle(Message::Carousel(CarouselMessage::TouchEnded {
            key,
            x: to_x,
        }));
    report("release", &effects);
    effects
}

fn report(stage: &str, effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::SetTrackOffset { percent, .. } => {
                log::info!("[{stage}] track -> translateX({percent:.2}%)");
            }
            Effect::SetCounter { text, .. } => {
                log::info!("[{stage}] counter -> \"{text}\"");
            }
            Effect::PreventPageScroll { .. } => {
                log::info!("[{stage}] native scroll suppressed");
            }
            Effect::RequestFrame { .. } => {
                log::info!("[{stage}] frame callback requested");
            }
            Effect::ShowImage { source, alt } => {
                log::info!("[{stage}] modal -> src=\"{source}\" alt=\"{alt}\"");
            }
        }
    }
}
