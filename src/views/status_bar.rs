use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::spinner::spinner_frame;
use crate::app::{App, Mode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chrome = &app.chrome;
    let mode = match app.mode {
        Mode::Browse => " PALETTE ",
        Mode::EditTemplate => " TEMPLATE ",
    };

    let mut spans = vec![
        Span::styled(
            mode,
            Style::default().bg(chrome.accent).fg(ratatui::style::Color::Black),
        ),
        Span::raw(" "),
    ];

    if app.is_busy() {
        spans.push(Span::styled(
            format!("{} extracting", spinner_frame(app.tick)),
            chrome.accent_style(),
        ));
        spans.push(Span::raw(" | "));
    } else if !app.palette.is_empty() {
        spans.push(Span::styled(
            format!("{}/{}", app.selected + 1, app.palette.len()),
            chrome.dim_style(),
        ));
        spans.push(Span::raw(" | "));
    }

    if let Some(status) = &app.status {
        spans.push(Span::styled(status.clone(), chrome.accent_style()));
        spans.push(Span::raw(" | "));
    }

    spans.push(Span::styled("?:help  q:quit", chrome.dim_style()));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Msg;
    use crate::prefs::UserPreference;
    use crate::template::DEFAULT_TEMPLATE;
    use crate::views::style::Chrome;
    use crate::views::tests::render_to_string;

    #[test]
    fn shows_busy_indicator() {
        let app = App::new(UserPreference::default(), DEFAULT_TEMPLATE.into(), Chrome::dark());
        let (app, _) = app.update(Msg::ExtractionStarted("x".into()));
        let output = render_to_string(60, 1, |frame| render(frame, &app, frame.area()));
        assert!(output.contains("extracting"));
    }

    #[test]
    fn shows_status_message() {
        let app = App::new(UserPreference::default(), DEFAULT_TEMPLATE.into(), Chrome::dark());
        let (app, _) = app.update(Msg::Status("Copied".into()));
        let output = render_to_string(60, 1, |frame| render(frame, &app, frame.area()));
        assert!(output.contains("Copied"));
        assert!(output.contains("PALETTE"));
    }
}
