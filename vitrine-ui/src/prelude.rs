// Common imports and re-exports for hosts embedding the widget runtime

pub use vitrine_model::prelude::*;

pub use crate::domains::ui::effects::Effect;
pub use crate::domains::ui::messages::Message;
pub use crate::domains::ui::page::{
    CarouselMarkup, PageController, PageMarkup,
};
pub use crate::domains::ui::views::carousel::{
    CarouselConfig, CarouselKey, CarouselMessage, CarouselRegistry,
    CarouselState,
};
pub use crate::domains::ui::views::lightbox::LightboxMessage;
pub use crate::error::UiError;
