//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode, Msg};
use crate::select::ThemeRole;

/// Bindings shown in the help overlay, as (keys, description).
pub const BROWSE_HELP: &[(&str, &str)] = &[
    ("p / ctrl-v", "paste image from clipboard"),
    ("j/k ↓/↑", "move selection"),
    ("g/G", "first / last swatch"),
    ("l", "use swatch for LightOne"),
    ("d", "use swatch for DarkOne"),
    ("c / y", "copy result"),
    ("x", "copy swatch hex"),
    ("R", "copy swatch rgb"),
    ("e", "edit template"),
    ("T", "reset template"),
    ("r", "reset image"),
    ("? / F1", "toggle help"),
    ("q / esc", "quit"),
];

pub const EDIT_HELP: &[(&str, &str)] = &[
    ("type", "insert text"),
    ("enter", "new line"),
    ("backspace", "delete last character"),
    ("esc / ctrl-s", "save and stop editing"),
    ("F1", "toggle help"),
];

pub fn handle_key(key: KeyEvent, app: &App) -> Option<Msg> {
    match app.mode {
        Mode::Browse => browse_key(key, app),
        Mode::EditTemplate => edit_key(key, app),
    }
}

fn browse_key(key: KeyEvent, app: &App) -> Option<Msg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if app.help_overlay {
        return match key.code {
            KeyCode::Char('?' | 'q') | KeyCode::Esc | KeyCode::F(1) => Some(Msg::ToggleHelp),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Msg::Quit),
        KeyCode::Char('v') if ctrl => Some(Msg::Paste),
        KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Char('p') => Some(Msg::Paste),
        KeyCode::Char('j') | KeyCode::Down => Some(Msg::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Msg::SelectPrev),
        KeyCode::Char('g') | KeyCode::Home => Some(Msg::SelectFirst),
        KeyCode::Char('G') | KeyCode::End => Some(Msg::SelectLast),
        KeyCode::Char('l') => Some(Msg::Assign(ThemeRole::Light)),
        KeyCode::Char('d') => Some(Msg::Assign(ThemeRole::Dark)),
        KeyCode::Char('c' | 'y') => Some(Msg::Copy),
        KeyCode::Char('x') => Some(Msg::CopyHex),
        KeyCode::Char('R') => Some(Msg::CopyRgb),
        KeyCode::Char('e') => Some(Msg::EditTemplate),
        KeyCode::Char('T') => Some(Msg::ResetTemplate),
        KeyCode::Char('r') => Some(Msg::Reset),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Msg::ToggleHelp),
        _ => None,
    }
}

fn edit_key(key: KeyEvent, app: &App) -> Option<Msg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if app.help_overlay {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) => Some(Msg::ToggleHelp),
            _ => None,
        };
    }
    match key.code {
        KeyCode::F(1) => Some(Msg::ToggleHelp),
        KeyCode::Esc => Some(Msg::FinishEdit),
        KeyCode::Char('s') if ctrl => Some(Msg::FinishEdit),
        KeyCode::Enter => Some(Msg::TemplateNewline),
        KeyCode::Backspace => Some(Msg::TemplateBackspace),
        KeyCode::Tab => Some(Msg::TemplateInput('\t')),
        KeyCode::Char(c) if !ctrl => Some(Msg::TemplateInput(c)),
        _ => None,
    }
}
