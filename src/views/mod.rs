pub mod help_overlay;
pub mod palette;
pub mod result;
pub mod spinner;
pub mod status_bar;
pub mod style;

#[cfg(test)]
pub mod tests;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use spinner::spinner_frame;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let error_height = u16::from(app.error.is_some());

    let chunks = Layout::vertical([
        Constraint::Length(1),            // Header
        Constraint::Length(error_height), // Error line
        Constraint::Min(0),               // Body
        Constraint::Length(1),            // Status bar
    ])
    .split(area);

    render_header(frame, app, chunks[0]);
    if let Some(err) = &app.error {
        frame.render_widget(
            Paragraph::new(err.as_str()).style(app.chrome.error_style()),
            chunks[1],
        );
    }
    render_body(frame, app, chunks[2]);
    status_bar::render(frame, app, chunks[3]);
    help_overlay::render(frame, app, area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chrome = &app.chrome;
    let mut spans = vec![Span::styled("picpal", chrome.accent_style())];
    if let Some(image) = &app.image {
        spans.push(Span::styled(format!("  {image}"), chrome.dim_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    if app.is_busy() && app.palette.is_empty() {
        render_message(
            frame,
            app,
            area,
            &format!("{} Processing...", spinner_frame(app.tick)),
        );
        return;
    }

    if app.image.is_none() {
        render_message(frame, app, area, "Copy an image, then press p (or ctrl-v) to paste it");
        return;
    }

    if app.palette.is_empty() {
        render_message(frame, app, area, "Unable to extract a palette from this image");
        return;
    }

    let chunks =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(area);
    palette::render(frame, app, chunks[0]);
    result::render(frame, app, chunks[1]);
}

fn render_message(frame: &mut Frame, app: &App, area: Rect, text: &str) {
    let paragraph = Paragraph::new(text.to_string())
        .style(app.chrome.dim_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.chrome.border_style()),
        );
    frame.render_widget(paragraph, area);
}
