//! Named swatch buckets and population normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Rgb, TextColor};

/// The six buckets a palette extraction can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwatchName {
    Vibrant,
    DarkVibrant,
    LightVibrant,
    Muted,
    DarkMuted,
    LightMuted,
}

impl SwatchName {
    /// Canonical display order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Vibrant,
            Self::DarkVibrant,
            Self::LightVibrant,
            Self::Muted,
            Self::DarkMuted,
            Self::LightMuted,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vibrant => "Vibrant",
            Self::DarkVibrant => "DarkVibrant",
            Self::LightVibrant => "LightVibrant",
            Self::Muted => "Muted",
            Self::DarkMuted => "DarkMuted",
            Self::LightMuted => "LightMuted",
        }
    }
}

impl fmt::Display for SwatchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown swatch name: {0} (expected one of Vibrant, DarkVibrant, LightVibrant, Muted, DarkMuted, LightMuted)")]
pub struct UnknownSwatch(pub String);

impl FromStr for SwatchName {
    type Err = UnknownSwatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .or_else(|| {
                Self::all()
                    .iter()
                    .copied()
                    .find(|name| name.as_str().eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| UnknownSwatch(s.to_string()))
    }
}

/// A raw bucket as produced by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub name: SwatchName,
    pub rgb: Rgb,
    pub hex: String,
    pub population: u32,
}

impl Swatch {
    pub fn new(name: SwatchName, rgb: Rgb, population: u32) -> Self {
        Self {
            name,
            rgb,
            hex: rgb.to_hex(),
            population,
        }
    }
}

/// A swatch ready for display, weighted by its share of the palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRecord {
    pub name: SwatchName,
    pub hex: String,
    #[serde(serialize_with = "serialize_rgb")]
    pub rgb: Rgb,
    pub population_share: f64,
}

fn serialize_rgb<S: serde::Serializer>(rgb: &Rgb, serializer: S) -> Result<S::Ok, S::Error> {
    rgb.0.serialize(serializer)
}

impl ColorRecord {
    pub fn text_color(&self) -> TextColor {
        TextColor::for_background(self.rgb)
    }
}

/// Convert extractor buckets into records carrying a percentage share.
///
/// Input order is preserved. An empty input (or one whose populations sum to
/// zero) yields an empty palette rather than an error.
pub fn normalize(swatches: &[Swatch]) -> Vec<ColorRecord> {
    let total: u64 = swatches.iter().map(|s| u64::from(s.population)).sum();
    if total == 0 {
        return Vec::new();
    }

    swatches
        .iter()
        .map(|s| ColorRecord {
            name: s.name,
            hex: s.hex.clone(),
            rgb: s.rgb,
            population_share: f64::from(s.population) / total as f64 * 100.0,
        })
        .collect()
}
