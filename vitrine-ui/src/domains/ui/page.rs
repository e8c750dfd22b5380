//! Page controller: mounts scanned markup and fans out host events.
//!
//! The host scans its markup once at load (the `DOMContentLoaded` pass)
//! into a [`PageMarkup`] value and hands it to [`PageController::mount_page`];
//! from then on every translated input event goes through
//! [`PageController::handle`].

use vitrine_model::image::ImageAsset;

use crate::error::UiError;

use super::effects::Effect;
use super::messages::Message;
use super::views::carousel::registry::CarouselRegistry;
use super::views::carousel::state::CarouselState;
use super::views::carousel::types::{CarouselConfig, CarouselKey};
use super::views::carousel::update::handle_carousel_message;
use super::views::lightbox::update::handle_lightbox_message;

/// Scanned markup for one carousel widget: its key, the ordered image
/// children of the images container, and the widget's current width.
#[derive(Debug, Clone)]
pub struct CarouselMarkup {
    pub key: CarouselKey,
    pub images: Vec<ImageAsset>,
    pub viewport_width: f32,
}

/// Scanned markup for the whole page.
#[derive(Debug, Clone, Default)]
pub struct PageMarkup {
    pub carousels: Vec<CarouselMarkup>,
}

/// Owns every widget on the page and routes host events to them.
#[derive(Debug, Default)]
pub struct PageController {
    registry: CarouselRegistry,
    config: CarouselConfig,
}

impl PageController {
    pub fn new() -> Self {
        Self::with_config(CarouselConfig::portfolio_defaults())
    }

    pub fn with_config(config: CarouselConfig) -> Self {
        Self {
            registry: CarouselRegistry::new(),
            config,
        }
    }

    /// Register every scanned widget and publish its initial counter
    /// text. Fails on markup that violates the widget contract: an
    /// empty image list or a key that is already mounted.
    pub fn mount_page(
        &mut self,
        page: PageMarkup,
    ) -> Result<Vec<Effect>, UiError> {
        let mut effects = Vec::with_capacity(page.carousels.len());
        for markup in page.carousels {
            if markup.images.is_empty() {
                return Err(UiError::EmptyCarousel { key: markup.key });
            }
            if self.registry.contains(&markup.key) {
                return Err(UiError::DuplicateKey { key: markup.key });
            }
            let state = CarouselState::new(
                markup.images,
                markup.viewport_width,
                self.config,
            );
            log::debug!(
                "mounted carousel {:?} with {} slides",
                markup.key,
                state.len()
            );
            effects.push(Effect::SetCounter {
                key: markup.key,
                text: state.counter_text(),
            });
            self.registry.insert(markup.key, state);
        }
        Ok(effects)
    }

    /// Route one translated host event to its widget family.
    pub fn handle(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Carousel(msg) => {
                handle_carousel_message(&mut self.registry, msg)
            }
            Message::Lightbox(msg) => handle_lightbox_message(msg),
        }
    }

    /// Read access to the carousel registry, mainly for tests and
    /// host-side inspection.
    pub fn registry(&self) -> &CarouselRegistry {
        &self.registry
    }
}
