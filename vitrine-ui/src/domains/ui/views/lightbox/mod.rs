//! Lightbox modal: click-to-enlarge image viewing.

pub mod messages;
pub mod update;

pub use messages::LightboxMessage;
