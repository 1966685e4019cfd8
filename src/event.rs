use crossterm::event::KeyEvent;

use crate::swatch::Swatch;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
    /// A background extraction resolved.
    Extracted {
        label: String,
        result: Result<Vec<Swatch>, String>,
    },
}
