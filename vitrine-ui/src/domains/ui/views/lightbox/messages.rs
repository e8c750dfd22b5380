//! Local message types for lightbox interactions

use vitrine_model::image::ImageAsset;

/// Inbound lightbox events.
#[derive(Debug, Clone)]
pub enum LightboxMessage {
    /// A clickable gallery image was activated.
    ImageClicked { asset: ImageAsset },
}
