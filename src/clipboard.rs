//! System clipboard access.

use anyhow::{Context, Result};
use arboard::Clipboard;

use crate::extract::ImageSource;

/// Why the clipboard could not supply an image.
#[derive(Debug, thiserror::Error)]
pub enum PasteError {
    #[error("no image found on the clipboard")]
    NoImage,

    #[error("could not read the clipboard: {0}")]
    Unavailable(String),
}

/// Grab the clipboard image as raw RGBA pixels.
pub fn read_image() -> Result<ImageSource, PasteError> {
    let mut clipboard = Clipboard::new().map_err(|e| PasteError::Unavailable(e.to_string()))?;
    match clipboard.get_image() {
        Ok(image) => {
            let width = u32::try_from(image.width)
                .map_err(|e| PasteError::Unavailable(e.to_string()))?;
            let height = u32::try_from(image.height)
                .map_err(|e| PasteError::Unavailable(e.to_string()))?;
            tracing::debug!(width, height, "read image from clipboard");
            Ok(ImageSource::Rgba {
                width,
                height,
                pixels: image.bytes.into_owned(),
            })
        }
        Err(arboard::Error::ContentNotAvailable) => Err(PasteError::NoImage),
        Err(e) => Err(PasteError::Unavailable(e.to_string())),
    }
}

pub fn write_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")?;
    Ok(())
}
