//! The swatch list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::style::{Chrome, swatch_style};
use crate::app::App;
use crate::select::ThemeRole;
use crate::swatch::ColorRecord;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chrome = &app.chrome;
    let items: Vec<ListItem> = app
        .palette
        .iter()
        .map(|record| record_to_list_item(record, app, chrome))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(chrome.border_style())
                .title("Palette"),
        )
        .highlight_style(
            Style::default()
                .bg(chrome.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn role_marker(app: &App, record: &ColorRecord, role: ThemeRole) -> Span<'static> {
    if role.source(&app.preference) == record.name {
        Span::styled(format!(" [{}]", role.label()), app.chrome.accent_style())
    } else {
        Span::raw("")
    }
}

fn record_to_list_item(record: &ColorRecord, app: &App, chrome: &Chrome) -> ListItem<'static> {
    let title_line = Line::from(vec![
        Span::styled(format!(" {:<12} ", record.name), swatch_style(record.rgb)),
        role_marker(app, record, ThemeRole::Light),
        role_marker(app, record, ThemeRole::Dark),
    ]);

    let meta_line = Line::from(vec![
        Span::raw("  "),
        Span::styled(record.hex.clone(), chrome.text_style()),
        Span::raw(" | "),
        Span::styled(record.rgb.to_css(), chrome.text_style()),
        Span::raw(" | "),
        Span::styled(
            format!("{:.2}%", record.population_share),
            chrome.dim_style(),
        ),
    ]);

    ListItem::new(vec![title_line, meta_line])
}
