//! View testing utilities built on ratatui's TestBackend.

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

/// Render a view to a string for assertions.
///
/// This creates a virtual terminal of the specified dimensions,
/// runs the render function, and returns the buffer contents as a string.
///
/// # Example
///
/// ```ignore
/// let output = render_to_string(80, 24, |frame| views::render(frame, &app));
/// assert!(output.contains("Palette"));
/// ```
pub fn render_to_string<F>(width: u16, height: u16, render_fn: F) -> String
where
    F: FnOnce(&mut Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(render_fn).unwrap();
    buffer_to_string(terminal.backend().buffer())
}

/// Convert a ratatui Buffer to a readable string.
///
/// Each row becomes a line, with trailing whitespace trimmed.
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut lines = Vec::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            line.push_str(cell.symbol());
        }
        // Trim trailing whitespace so assertions ignore padding
        lines.push(line.trim_end().to_string());
    }
    // Remove trailing empty lines
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod screen_tests {
    use super::*;
    use crate::app::{App, Msg};
    use crate::color::Rgb;
    use crate::prefs::UserPreference;
    use crate::swatch::{Swatch, SwatchName};
    use crate::template::DEFAULT_TEMPLATE;
    use crate::views::style::Chrome;

    fn app() -> App {
        App::new(UserPreference::default(), DEFAULT_TEMPLATE.into(), Chrome::dark())
    }

    #[test]
    fn empty_state_prompts_for_paste() {
        let app = app();
        let output = render_to_string(61, 8, |frame| crate::views::render(frame, &app));
        insta::assert_snapshot!(output, @r"
        picpal
        ┌───────────────────────────────────────────────────────────┐
        │    Copy an image, then press p (or ctrl-v) to paste it    │
        │                                                           │
        │                                                           │
        │                                                           │
        └───────────────────────────────────────────────────────────┘
         PALETTE  ?:help  q:quit
        ");
    }

    #[test]
    fn busy_state_shows_processing() {
        let (app, _) = app().update(Msg::ExtractionStarted("cat.png".into()));
        let output = render_to_string(80, 12, |frame| crate::views::render(frame, &app));
        assert!(output.contains("Processing..."));
        assert!(output.contains("cat.png"));
    }

    #[test]
    fn empty_palette_is_distinct_from_error() {
        let (app, _) = app().update(Msg::ExtractionFinished {
            label: "blank.png".into(),
            result: Ok(Vec::new()),
        });
        let output = render_to_string(80, 12, |frame| crate::views::render(frame, &app));
        assert!(output.contains("Unable to extract a palette from this image"));
        assert!(!output.contains("Failed"));
    }

    #[test]
    fn error_is_shown_above_body() {
        let (app, _) = app().update(Msg::InputError("no image found on the clipboard".into()));
        let output = render_to_string(80, 12, |frame| crate::views::render(frame, &app));
        assert!(output.contains("no image found on the clipboard"));
        assert!(output.contains("press p"));
    }

    #[test]
    fn loaded_screen_layout() {
        let app = App::new(
            UserPreference::default(),
            "$lightOneBg on $darkOneBg".into(),
            Chrome::dark(),
        );
        let (app, _) = app.update(Msg::ExtractionFinished {
            label: "cat.png".into(),
            result: Ok(vec![
                Swatch::new(SwatchName::LightVibrant, Rgb::new(250, 230, 200), 3),
                Swatch::new(SwatchName::Muted, Rgb::new(90, 100, 110), 1),
            ]),
        });

        let output = render_to_string(100, 15, |frame| crate::views::render(frame, &app));

        insta::assert_snapshot!(output, @r"
        picpal  cat.png
        ┌Palette────────────────────────────────────┐┌light: LightVibrant / dark: Muted────────────────────┐
        │▶  LightVibrant  [LightOne]                ││LightOne  #333 on rgb(250 230 200)                   │
        │    #fae6c8 | rgb(250 230 200) | 75.00%    ││DarkOne   white on rgb(90 100 110)                   │
        │   Muted         [DarkOne]                 │└─────────────────────────────────────────────────────┘
        │    #5a646e | rgb(90 100 110) | 25.00%     │┌Result (c: copy)─────────────────────────────────────┐
        │                                           ││rgb(250 230 200) on rgb(90 100 110)                  │
        │                                           │└─────────────────────────────────────────────────────┘
        │                                           │┌Template (e: edit, T: reset)─────────────────────────┐
        │                                           ││$lightOneBg on $darkOneBg                            │
        │                                           ││                                                     │
        │                                           ││                                                     │
        │                                           ││                                                     │
        └───────────────────────────────────────────┘└─────────────────────────────────────────────────────┘
         PALETTE  1/2 | ?:help  q:quit
        ");
    }

    #[test]
    fn loaded_state_shows_palette_and_result() {
        let (app, _) = app().update(Msg::ExtractionFinished {
            label: "cat.png".into(),
            result: Ok(vec![Swatch::new(SwatchName::Muted, Rgb::new(90, 100, 110), 4)]),
        });
        let output = render_to_string(120, 30, |frame| crate::views::render(frame, &app));
        assert!(output.contains("Palette"));
        assert!(output.contains("Result"));
        assert!(output.contains("100.00%"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_render_to_string_basic() {
        let output = render_to_string(20, 3, |frame| {
            let paragraph = Paragraph::new("Hello, world!");
            frame.render_widget(paragraph, frame.area());
        });
        assert!(output.contains("Hello, world!"));
    }
}
