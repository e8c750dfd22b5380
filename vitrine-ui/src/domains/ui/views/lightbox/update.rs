//! Lightbox message handling
//!
//! Stateless: a click maps directly onto a modal image swap. Assets
//! without a full-size reference enlarge their slide source instead.

use crate::domains::ui::effects::Effect;

use super::messages::LightboxMessage;

/// Handle one lightbox message.
pub fn handle_lightbox_message(msg: LightboxMessage) -> Vec<Effect> {
    match msg {
        LightboxMessage::ImageClicked { asset } => {
            let source = asset.display_source().to_owned();
            vec![Effect::ShowImage {
                source,
                alt: asset.alt,
            }]
        }
    }
}
