//! Where an image comes from before it is quantized.

use std::io::Cursor;
use std::path::PathBuf;

use image::{ImageReader, RgbaImage};

use super::ExtractError;

pub enum ImageSource {
    /// An encoded image file on disk.
    Path(PathBuf),
    /// Encoded image bytes (png, jpeg, ...).
    Bytes(Vec<u8>),
    /// Raw RGBA8 pixels, as handed over by the clipboard.
    Rgba {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    },
}

impl ImageSource {
    /// Short human label for status lines.
    pub fn label(&self) -> String {
        match self {
            Self::Path(path) => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
            Self::Bytes(bytes) => format!("{} bytes", bytes.len()),
            Self::Rgba { width, height, .. } => format!("clipboard {width}x{height}"),
        }
    }

    pub fn load(self) -> Result<RgbaImage, ExtractError> {
        match self {
            Self::Path(path) => {
                let img = ImageReader::open(&path)
                    .map_err(|e| ExtractError::Decode(format!("{}: {e}", path.display())))?
                    .with_guessed_format()
                    .map_err(|e| ExtractError::Decode(format!("{}: {e}", path.display())))?
                    .decode()?;
                Ok(img.to_rgba8())
            }
            Self::Bytes(bytes) => {
                let img = ImageReader::new(Cursor::new(bytes))
                    .with_guessed_format()
                    .map_err(|e| ExtractError::Decode(e.to_string()))?
                    .decode()?;
                Ok(img.to_rgba8())
            }
            Self::Rgba {
                width,
                height,
                pixels,
            } => RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
                ExtractError::Decode(format!(
                    "pixel buffer does not match {width}x{height} rgba"
                ))
            }),
        }
    }
}
