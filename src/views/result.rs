//! Rendered template output and the inline template editor.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::style::swatch_style;
use crate::app::{App, Mode};
use crate::color::Rgb;
use crate::select::{ThemeRole, ThemeRoleAssignment};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Role previews
        Constraint::Min(3),    // Rendered output
        Constraint::Min(6),    // Template
    ])
    .split(area);

    render_roles(frame, app, chunks[0]);
    render_output(frame, app, chunks[1]);
    render_template(frame, app, chunks[2]);
}

fn render_roles(frame: &mut Frame, app: &App, area: Rect) {
    let chrome = &app.chrome;
    let lines: Vec<Line> = [ThemeRole::Light, ThemeRole::Dark]
        .into_iter()
        .map(|role| role_line(app, role))
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(chrome.border_style())
        .title(format!(
            "light: {} / dark: {}",
            app.preference.light_theme_source, app.preference.dark_theme_source
        ));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn role_line(app: &App, role: ThemeRole) -> Line<'static> {
    let assignment = app.assignments.get(role);
    let label = Span::styled(format!("{:<8} ", role.label()), app.chrome.dim_style());
    if assignment.is_empty() {
        return Line::from(vec![label, Span::styled("unassigned", app.chrome.dim_style())]);
    }
    Line::from(vec![
        label,
        Span::styled(
            format!(" {} on {} ", assignment.foreground, assignment.background),
            preview_style(assignment),
        ),
    ])
}

fn preview_style(assignment: &ThemeRoleAssignment) -> ratatui::style::Style {
    parse_css_rgb(&assignment.background)
        .map_or_else(ratatui::style::Style::default, swatch_style)
}

/// Parse the `rgb(R G B)` strings produced by the selector.
fn parse_css_rgb(css: &str) -> Option<Rgb> {
    let inner = css.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split_whitespace().map(str::parse::<u8>);
    let rgb = Rgb::new(parts.next()?.ok()?, parts.next()?.ok()?, parts.next()?.ok()?);
    parts.next().is_none().then_some(rgb)
}

fn render_output(frame: &mut Frame, app: &App, area: Rect) {
    let chrome = &app.chrome;
    let output = Paragraph::new(app.rendered())
        .style(chrome.text_style())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(chrome.border_style())
                .title("Result (c: copy)"),
        );
    frame.render_widget(output, area);
}

fn render_template(frame: &mut Frame, app: &App, area: Rect) {
    let chrome = &app.chrome;
    let editing = app.mode == Mode::EditTemplate;

    let mut lines: Vec<Line> = app
        .template
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), chrome.dim_style())))
        .collect();
    if editing {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(
                "█",
                chrome.accent_style().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
    }

    let (title, border) = if editing {
        ("Template (editing, Esc: done)", chrome.accent_style())
    } else {
        ("Template (e: edit, T: reset)", chrome.border_style())
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(paragraph, area);
}
