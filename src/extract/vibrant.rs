//! Sorting quantized colors into the six named swatch buckets.
//!
//! Each bucket has a target HSL lightness and saturation plus an allowed
//! window. Among the colors inside the window, the one with the best
//! weighted closeness to the target (with a small bonus for population)
//! wins, and a color can fill at most one bucket.

use palette::{Hsl, IntoColor, Srgb};

use super::quantize::QuantizedColor;
use crate::color::Rgb;
use crate::swatch::{Swatch, SwatchName};

const TARGET_DARK_LUMA: f32 = 0.26;
const MAX_DARK_LUMA: f32 = 0.45;
const MIN_LIGHT_LUMA: f32 = 0.55;
const TARGET_LIGHT_LUMA: f32 = 0.74;
const MIN_NORMAL_LUMA: f32 = 0.3;
const TARGET_NORMAL_LUMA: f32 = 0.5;
const MAX_NORMAL_LUMA: f32 = 0.7;
const TARGET_MUTED_SATURATION: f32 = 0.3;
const MAX_MUTED_SATURATION: f32 = 0.4;
const TARGET_VIBRANT_SATURATION: f32 = 1.0;
const MIN_VIBRANT_SATURATION: f32 = 0.35;

const WEIGHT_SATURATION: f32 = 3.0;
const WEIGHT_LUMA: f32 = 6.5;
const WEIGHT_POPULATION: f32 = 0.5;

struct Target {
    name: SwatchName,
    luma: (f32, f32, f32),
    saturation: (f32, f32, f32),
}

/// (min, target, max) windows, in the order buckets get first pick.
const TARGETS: [Target; 6] = [
    Target {
        name: SwatchName::Vibrant,
        luma: (MIN_NORMAL_LUMA, TARGET_NORMAL_LUMA, MAX_NORMAL_LUMA),
        saturation: (MIN_VIBRANT_SATURATION, TARGET_VIBRANT_SATURATION, 1.0),
    },
    Target {
        name: SwatchName::LightVibrant,
        luma: (MIN_LIGHT_LUMA, TARGET_LIGHT_LUMA, 1.0),
        saturation: (MIN_VIBRANT_SATURATION, TARGET_VIBRANT_SATURATION, 1.0),
    },
    Target {
        name: SwatchName::DarkVibrant,
        luma: (0.0, TARGET_DARK_LUMA, MAX_DARK_LUMA),
        saturation: (MIN_VIBRANT_SATURATION, TARGET_VIBRANT_SATURATION, 1.0),
    },
    Target {
        name: SwatchName::Muted,
        luma: (MIN_NORMAL_LUMA, TARGET_NORMAL_LUMA, MAX_NORMAL_LUMA),
        saturation: (0.0, TARGET_MUTED_SATURATION, MAX_MUTED_SATURATION),
    },
    Target {
        name: SwatchName::LightMuted,
        luma: (MIN_LIGHT_LUMA, TARGET_LIGHT_LUMA, 1.0),
        saturation: (0.0, TARGET_MUTED_SATURATION, MAX_MUTED_SATURATION),
    },
    Target {
        name: SwatchName::DarkMuted,
        luma: (0.0, TARGET_DARK_LUMA, MAX_DARK_LUMA),
        saturation: (0.0, TARGET_MUTED_SATURATION, MAX_MUTED_SATURATION),
    },
];

struct Candidate {
    rgb: Rgb,
    population: u32,
    saturation: f32,
    lightness: f32,
}

impl Candidate {
    fn new(color: &QuantizedColor) -> Self {
        let rgb = Rgb::from_f64(color.rgb);
        let hsl: Hsl = Srgb::new(rgb.r(), rgb.g(), rgb.b())
            .into_format::<f32>()
            .into_color();
        Self {
            rgb,
            population: color.population,
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    fn fits(&self, target: &Target) -> bool {
        let (min_l, _, max_l) = target.luma;
        let (min_s, _, max_s) = target.saturation;
        (min_l..=max_l).contains(&self.lightness) && (min_s..=max_s).contains(&self.saturation)
    }

    fn score(&self, target: &Target, max_population: u32) -> f32 {
        let invert_diff = |value: f32, goal: f32| 1.0 - (value - goal).abs();
        let population = if max_population == 0 {
            0.0
        } else {
            self.population as f32 / max_population as f32
        };
        let weighted = invert_diff(self.saturation, target.saturation.1) * WEIGHT_SATURATION
            + invert_diff(self.lightness, target.luma.1) * WEIGHT_LUMA
            + population * WEIGHT_POPULATION;
        weighted / (WEIGHT_SATURATION + WEIGHT_LUMA + WEIGHT_POPULATION)
    }
}

/// Fill the named buckets from quantized colors.
///
/// The result is in [`SwatchName::all`] order; buckets nothing qualified for
/// are absent.
pub fn generate(colors: &[QuantizedColor]) -> Vec<Swatch> {
    let candidates: Vec<Candidate> = colors.iter().map(Candidate::new).collect();
    let max_population = candidates.iter().map(|c| c.population).max().unwrap_or(0);
    let mut used = vec![false; candidates.len()];
    let mut picked: Vec<Swatch> = Vec::new();

    for target in &TARGETS {
        let best = candidates
            .iter()
            .enumerate()
            .filter(|(i, c)| !used[*i] && c.fits(target))
            .max_by(|(_, a), (_, b)| {
                a.score(target, max_population)
                    .total_cmp(&b.score(target, max_population))
            });
        if let Some((i, c)) = best {
            used[i] = true;
            picked.push(Swatch::new(target.name, c.rgb, c.population));
        }
    }

    SwatchName::all()
        .iter()
        .filter_map(|name| picked.iter().find(|s| s.name == *name).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(r: f64, g: f64, b: f64, population: u32) -> QuantizedColor {
        QuantizedColor {
            rgb: [r, g, b],
            population,
        }
    }

    fn names(swatches: &[Swatch]) -> Vec<SwatchName> {
        swatches.iter().map(|s| s.name).collect()
    }

    #[test]
    fn saturated_mid_red_is_vibrant() {
        let out = generate(&[color(220.0, 30.0, 30.0, 10)]);
        assert_eq!(names(&out), vec![SwatchName::Vibrant]);
        assert_eq!(out[0].hex, "#dc1e1e");
    }

    #[test]
    fn gray_lands_in_muted_family() {
        let out = generate(&[color(128.0, 120.0, 120.0, 5)]);
        assert_eq!(names(&out), vec![SwatchName::Muted]);
    }

    #[test]
    fn output_follows_canonical_order() {
        let out = generate(&[
            color(60.0, 60.0, 70.0, 5),    // dark muted
            color(250.0, 200.0, 200.0, 5), // light vibrant
            color(30.0, 200.0, 40.0, 5),   // vibrant
        ]);
        assert_eq!(
            names(&out),
            vec![SwatchName::Vibrant, SwatchName::LightVibrant, SwatchName::DarkMuted]
        );
    }

    #[test]
    fn one_color_fills_at_most_one_bucket() {
        let out = generate(&[color(220.0, 30.0, 30.0, 10), color(225.0, 35.0, 30.0, 1)]);
        assert_eq!(names(&out), vec![SwatchName::Vibrant]);
        // population tips the score
        assert_eq!(out[0].population, 10);
    }

    #[test]
    fn nothing_in_nothing_out() {
        assert!(generate(&[]).is_empty());
    }
}
