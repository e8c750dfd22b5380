use crate::error::{ModelError, Result};

/// One gallery image as declared by the page markup.
///
/// `source` is the inline slide image; `full_source` is the optional
/// full-resolution reference used by the lightbox (the `data-fullsize`
/// attribute of the markup contract). Markup without a full-size
/// reference falls back to the slide source when enlarged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageAsset {
    pub source: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub full_source: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alt: String,
}

impl ImageAsset {
    /// Build an asset from a slide source and alt text.
    ///
    /// The source must be non-empty; everything else about the reference
    /// is the host's business.
    pub fn new(
        source: impl Into<String>,
        alt: impl Into<String>,
    ) -> Result<Self> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(ModelError::InvalidAsset(
                "image source must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            source,
            full_source: None,
            alt: alt.into(),
        })
    }

    /// Attach a full-resolution reference for lightbox viewing.
    pub fn with_full_source(mut self, full_source: impl Into<String>) -> Self {
        self.full_source = Some(full_source.into());
        self
    }

    /// The reference an enlarged view should display: the full-size
    /// source when present, otherwise the slide source.
    pub fn display_source(&self) -> &str {
        self.full_source.as_deref().unwrap_or(&self.source)
    }
}
