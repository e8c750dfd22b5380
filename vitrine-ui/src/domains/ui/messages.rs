//! Top-level UI message surface fanned out by the page controller.

use super::views::carousel::messages::CarouselMessage;
use super::views::lightbox::messages::LightboxMessage;

/// One host event, translated into the widget runtime's vocabulary.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(CarouselMessage),
    Lightbox(LightboxMessage),
}

impl From<CarouselMessage> for Message {
    fn from(msg: CarouselMessage) -> Self {
        Message::Carousel(msg)
    }
}

impl From<LightboxMessage> for Message {
    fn from(msg: LightboxMessage) -> Self {
        Message::Lightbox(msg)
    }
}
