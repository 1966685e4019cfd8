//! Colors for the UI chrome (borders, hints, errors), as opposed to the
//! swatch colors being displayed.

use ratatui::style::{Color, Modifier, Style};

use crate::color::{Rgb, TextColor};
use crate::config::UiTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub highlight_bg: Color,
}

impl Chrome {
    pub const fn dark() -> Self {
        Self {
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::Yellow,
            border: Color::Gray,
            error: Color::Red,
            highlight_bg: Color::DarkGray,
        }
    }

    pub const fn light() -> Self {
        Self {
            text: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            border: Color::DarkGray,
            error: Color::Red,
            highlight_bg: Color::Gray,
        }
    }

    /// Resolve the configured theme, probing the terminal for `auto`.
    pub fn for_theme(theme: UiTheme) -> Self {
        match theme {
            UiTheme::Light => Self::light(),
            UiTheme::Dark => Self::dark(),
            UiTheme::Auto => detect_terminal_theme(),
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}

/// Detect terminal background color mode
fn detect_terminal_theme() -> Chrome {
    // Falls back to dark if detection fails
    match terminal_light::luma() {
        Ok(luma) if luma > 0.5 => Chrome::light(),
        Ok(_) => Chrome::dark(),
        Err(e) => {
            tracing::debug!(error = %e, "terminal background detection failed");
            Chrome::dark()
        }
    }
}

pub const fn swatch_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r(), rgb.g(), rgb.b())
}

/// Style that draws a swatch block with its readable text color.
pub fn swatch_style(rgb: Rgb) -> Style {
    let fg = match TextColor::for_background(rgb) {
        TextColor::Light => Color::White,
        TextColor::Dark => Color::Rgb(0x33, 0x33, 0x33),
    };
    Style::default()
        .bg(swatch_color(rgb))
        .fg(fg)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_themes_skip_detection() {
        assert_eq!(Chrome::for_theme(UiTheme::Light), Chrome::light());
        assert_eq!(Chrome::for_theme(UiTheme::Dark), Chrome::dark());
    }

    #[test]
    fn swatch_style_picks_readable_text() {
        assert_eq!(swatch_style(Rgb::new(0, 0, 0)).fg, Some(Color::White));
        assert_eq!(
            swatch_style(Rgb::new(255, 255, 255)).fg,
            Some(Color::Rgb(0x33, 0x33, 0x33))
        );
    }
}
