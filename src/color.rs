//! WCAG relative luminance and foreground text selection.

use std::fmt;

/// CSS text color used on dark backgrounds.
pub const LIGHT_TEXT: &str = "white";
/// CSS text color used on light backgrounds.
pub const DARK_TEXT: &str = "#333";

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub const fn r(self) -> u8 {
        self.0[0]
    }

    pub const fn g(self) -> u8 {
        self.0[1]
    }

    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Round and clamp floating point channels into an `Rgb`.
    pub fn from_f64(channels: [f64; 3]) -> Self {
        Self(channels.map(|c| c.round().clamp(0.0, 255.0) as u8))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }

    /// Space separated CSS color, e.g. `rgb(255 128 0)`.
    pub fn to_css(self) -> String {
        format!("rgb({} {} {})", self.r(), self.g(), self.b())
    }

    /// Comma separated CSS color, e.g. `rgb(255, 128, 0)`.
    pub fn to_css_commas(self) -> String {
        format!("rgb({}, {}, {})", self.r(), self.g(), self.b())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Linearize an 8-bit sRGB channel (WCAG 2.0 threshold).
fn linearize(channel: u8) -> f64 {
    let x = f64::from(channel) / 255.0;
    if x <= 0.03928 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0.0, 1.0].
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126f64.mul_add(
        linearize(r),
        0.7152f64.mul_add(linearize(g), 0.0722 * linearize(b)),
    )
}

/// Whether white text should be drawn on top of this background.
pub fn use_light_text(r: u8, g: u8, b: u8) -> bool {
    relative_luminance(r, g, b) < 0.5
}

/// One of the two foreground colors a swatch can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Light,
    Dark,
}

impl TextColor {
    pub fn for_background(rgb: Rgb) -> Self {
        if use_light_text(rgb.r(), rgb.g(), rgb.b()) {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub const fn css(self) -> &'static str {
        match self {
            Self::Light => LIGHT_TEXT,
            Self::Dark => DARK_TEXT,
        }
    }
}
