//! Help overlay view showing keybindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, Mode};
use crate::keys::{BROWSE_HELP, EDIT_HELP};

#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if !app.help_overlay {
        return;
    }

    let chrome = &app.chrome;
    let items = match app.mode {
        Mode::Browse => BROWSE_HELP,
        Mode::EditTemplate => EDIT_HELP,
    };

    // Calculate dimensions
    let key_width = items.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let label_width = items.iter().map(|(_, l)| l.len()).max().unwrap_or(0);
    let content_width = key_width + 2 + label_width; // 2 for spacing
    let popup_width = (content_width + 4) as u16; // 4 for borders and padding
    let popup_height = (items.len() + 2) as u16; // 2 for borders

    // Ensure popup fits in area
    let popup_width = popup_width.min(area.width.saturating_sub(4));
    let popup_height = popup_height.min(area.height.saturating_sub(4));
    let popup_area = centered_rect(popup_width, popup_height, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = items
        .iter()
        .map(|(keys, label)| {
            Line::from(vec![
                Span::styled(format!("{keys:>key_width$}"), chrome.dim_style()),
                Span::raw("  "),
                Span::styled(*label, chrome.text_style()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(chrome.border_style())
            .title("Help"),
    );

    frame.render_widget(paragraph, popup_area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
