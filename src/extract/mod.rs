//! Palette extraction: image in, named swatch buckets out.

mod quantize;
mod source;
mod vibrant;

use std::sync::Arc;

use image::RgbaImage;

pub use source::ImageSource;

use crate::swatch::Swatch;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read image: {0}")]
    Decode(String),

    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("image has no pixels")]
    EmptyImage,

    #[error("image has no opaque, non-white pixels to sample")]
    NoPixels,

    #[error("extraction task failed: {0}")]
    Task(String),
}

/// Anything that can turn pixels into named buckets.
pub trait Extractor: Send + Sync {
    fn extract(&self, image: &RgbaImage) -> Result<Vec<Swatch>, ExtractError>;
}

/// Median cut followed by HSL bucket targeting.
#[derive(Debug, Clone, Copy)]
pub struct VibrantExtractor {
    /// Sample every n-th pixel.
    pub quality: usize,
    /// Upper bound on quantized colors considered for the buckets.
    pub color_count: usize,
}

impl Default for VibrantExtractor {
    fn default() -> Self {
        Self {
            quality: 5,
            color_count: 64,
        }
    }
}

impl Extractor for VibrantExtractor {
    fn extract(&self, image: &RgbaImage) -> Result<Vec<Swatch>, ExtractError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ExtractError::EmptyImage);
        }

        // Tiny images would otherwise be sampled down to a handful of pixels.
        let pixels = image.width() as usize * image.height() as usize;
        let stride = if pixels / self.quality.max(1) < 64 { 1 } else { self.quality };

        let histo = quantize::Histogram::from_image(image, stride);
        if histo.total() == 0 {
            return Err(ExtractError::NoPixels);
        }

        let colors = quantize::median_cut(&histo, self.color_count);
        let swatches = vibrant::generate(&colors);
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            sampled = histo.total(),
            colors = colors.len(),
            swatches = swatches.len(),
            "extracted palette"
        );
        Ok(swatches)
    }
}

/// Decode and quantize off the async runtime.
pub async fn extract(
    extractor: Arc<dyn Extractor>,
    source: ImageSource,
) -> Result<Vec<Swatch>, ExtractError> {
    tokio::task::spawn_blocking(move || {
        let image = source.load()?;
        extractor.extract(&image)
    })
    .await
    .map_err(|e| ExtractError::Task(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swatch::{SwatchName, normalize};
    use image::Rgba;

    fn striped() -> RgbaImage {
        RgbaImage::from_fn(60, 20, |x, _| {
            if x < 45 {
                Rgba([220, 30, 30, 255])
            } else {
                Rgba([60, 60, 70, 255])
            }
        })
    }

    #[test]
    fn two_color_image_normalizes_to_full_share() {
        let swatches = VibrantExtractor::default().extract(&striped()).unwrap();
        let names: Vec<_> = swatches.iter().map(|s| s.name).collect();
        assert_eq!(names, vec![SwatchName::Vibrant, SwatchName::DarkMuted]);

        let records = normalize(&swatches);
        let sum: f64 = records.iter().map(|r| r.population_share).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((records[0].population_share - 75.0).abs() < 1e-9);
    }

    #[test]
    fn empty_image_is_error() {
        let img = RgbaImage::new(0, 0);
        assert!(matches!(
            VibrantExtractor::default().extract(&img),
            Err(ExtractError::EmptyImage)
        ));
    }

    #[test]
    fn all_white_image_has_nothing_to_sample() {
        let img = RgbaImage::from_pixel(50, 50, Rgba([255, 255, 255, 255]));
        assert!(matches!(
            VibrantExtractor::default().extract(&img),
            Err(ExtractError::NoPixels)
        ));
    }

    #[test]
    fn flat_gray_fills_a_single_bucket() {
        let img = RgbaImage::from_pixel(50, 50, Rgba([128, 128, 128, 255]));
        let swatches = VibrantExtractor::default().extract(&img).unwrap();
        assert_eq!(swatches.len(), 1);
        assert_eq!(swatches[0].name, SwatchName::Muted);
    }

    #[tokio::test]
    async fn extract_runs_on_blocking_pool() {
        let source = ImageSource::Rgba {
            width: 60,
            height: 20,
            pixels: striped().into_raw(),
        };
        let swatches = extract(Arc::new(VibrantExtractor::default()), source)
            .await
            .unwrap();
        assert_eq!(swatches.len(), 2);
    }

    #[tokio::test]
    async fn extract_reports_decode_failure() {
        let source = ImageSource::Bytes(vec![1, 2, 3]);
        let result = extract(Arc::new(VibrantExtractor::default()), source).await;
        assert!(result.is_err());
    }
}
