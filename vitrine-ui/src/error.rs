use thiserror::Error;

use crate::domains::ui::views::carousel::types::CarouselKey;

/// Structural violations of the page markup contract, detected at mount.
///
/// Runtime navigation never errors: out-of-range requests are prevented
/// structurally (wrap-around for buttons, boundary clamps for drags) and
/// messages addressing unknown widgets are conditional no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("carousel {key:?} declares no images")]
    EmptyCarousel { key: CarouselKey },

    #[error("carousel {key:?} is already mounted")]
    DuplicateKey { key: CarouselKey },
}
