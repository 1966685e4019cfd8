//! Application state and its transitions.
//!
//! `App` is a plain value owned by the event loop. Every user action or
//! background result arrives as a [`Msg`]; [`App::update`] consumes the old
//! state and returns the new one together with the side effects the runtime
//! should perform. Nothing in here touches the clipboard, disk or terminal.

use crate::prefs::UserPreference;
use crate::select::{self, Assignments, ThemeRole};
use crate::swatch::{self, ColorRecord, Swatch};
use crate::template::{self, DEFAULT_TEMPLATE};
use crate::views::style::Chrome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    EditTemplate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Paste,
    ExtractionStarted(String),
    ExtractionFinished {
        label: String,
        result: Result<Vec<Swatch>, String>,
    },
    InputError(String),
    Reset,
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    Assign(ThemeRole),
    Copy,
    CopyHex,
    CopyRgb,
    Status(String),
    EditTemplate,
    TemplateInput(char),
    TemplateNewline,
    TemplateBackspace,
    FinishEdit,
    ResetTemplate,
    ToggleHelp,
    Tick,
    Quit,
}

/// Work the runtime performs on behalf of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ReadClipboard,
    SavePreference(UserPreference),
    SaveTemplate(String),
    /// `label` names what was copied in the confirmation.
    CopyToClipboard { text: String, label: String },
}

#[derive(Debug, Clone)]
pub struct App {
    /// Label of the image the palette came from; `None` when cleared.
    pub image: Option<String>,
    pub palette: Vec<ColorRecord>,
    pub assignments: Assignments,
    pub preference: UserPreference,
    pub template: String,
    /// Extractions started but not yet resolved.
    pub in_flight: usize,
    pub error: Option<String>,
    pub status: Option<String>,
    pub selected: usize,
    pub mode: Mode,
    pub help_overlay: bool,
    pub tick: u64,
    pub chrome: Chrome,
    pub should_quit: bool,
}

impl App {
    pub fn new(preference: UserPreference, template: String, chrome: Chrome) -> Self {
        Self {
            image: None,
            palette: Vec::new(),
            assignments: Assignments::default(),
            preference,
            template,
            in_flight: 0,
            error: None,
            status: None,
            selected: 0,
            mode: Mode::Browse,
            help_overlay: false,
            tick: 0,
            chrome,
            should_quit: false,
        }
    }

    pub const fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn rendered(&self) -> String {
        template::render(&self.template, &self.assignments)
    }

    pub fn selected_record(&self) -> Option<&ColorRecord> {
        self.palette.get(self.selected)
    }

    pub fn update(mut self, msg: Msg) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();
        if !matches!(msg, Msg::Tick) {
            self.status = None;
        }

        match msg {
            Msg::Paste => {
                self.error = None;
                effects.push(Effect::ReadClipboard);
            }
            Msg::ExtractionStarted(label) => {
                self.in_flight += 1;
                self.error = None;
                self.image = Some(label);
            }
            Msg::ExtractionFinished { label, result } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                match result {
                    Ok(swatches) => {
                        self.image = Some(label);
                        self.palette = swatch::normalize(&swatches);
                        self.assignments =
                            select::select(&self.palette, &self.preference, &self.assignments);
                        self.selected = 0;
                    }
                    Err(e) => {
                        self.error = Some(format!("Failed to process image: {e}"));
                        self.clear_image();
                    }
                }
            }
            Msg::InputError(e) => {
                self.error = Some(e);
                self.clear_image();
            }
            Msg::Reset => {
                self.clear_image();
                self.error = None;
                self.assignments = Assignments::default();
            }
            Msg::SelectNext => {
                if self.selected + 1 < self.palette.len() {
                    self.selected += 1;
                }
            }
            Msg::SelectPrev => self.selected = self.selected.saturating_sub(1),
            Msg::SelectFirst => self.selected = 0,
            Msg::SelectLast => self.selected = self.palette.len().saturating_sub(1),
            Msg::Assign(role) => {
                if let Some(record) = self.selected_record().cloned() {
                    let (assignments, preference) =
                        select::assign_manual(&self.assignments, &self.preference, role, &record);
                    self.assignments = assignments;
                    self.preference = preference;
                    self.status = Some(format!("{} ← {}", role.label(), record.name));
                    effects.push(Effect::SavePreference(preference));
                }
            }
            Msg::Copy => {
                if self.palette.is_empty() {
                    self.status = Some("Nothing to copy yet".to_string());
                } else {
                    effects.push(Effect::CopyToClipboard {
                        text: self.rendered(),
                        label: "result".to_string(),
                    });
                }
            }
            Msg::CopyHex => {
                if let Some(record) = self.selected_record() {
                    effects.push(Effect::CopyToClipboard {
                        text: record.hex.clone(),
                        label: record.hex.clone(),
                    });
                }
            }
            Msg::CopyRgb => {
                if let Some(record) = self.selected_record() {
                    let text = record.rgb.to_css_commas();
                    effects.push(Effect::CopyToClipboard {
                        label: text.clone(),
                        text,
                    });
                }
            }
            Msg::Status(text) => self.status = Some(text),
            Msg::EditTemplate => {
                // The editor only exists next to a palette.
                if self.palette.is_empty() {
                    self.status =
                        Some("Extract a palette before editing the template".to_string());
                } else {
                    self.mode = Mode::EditTemplate;
                }
            }
            Msg::TemplateInput(c) => self.template.push(c),
            Msg::TemplateNewline => self.template.push('\n'),
            Msg::TemplateBackspace => {
                self.template.pop();
            }
            Msg::FinishEdit => {
                self.mode = Mode::Browse;
                effects.push(Effect::SaveTemplate(self.template.clone()));
            }
            Msg::ResetTemplate => {
                self.template = DEFAULT_TEMPLATE.to_string();
                self.status = Some("Template reset".to_string());
                effects.push(Effect::SaveTemplate(self.template.clone()));
            }
            Msg::ToggleHelp => self.help_overlay = !self.help_overlay,
            Msg::Tick => self.tick = self.tick.wrapping_add(1),
            Msg::Quit => self.should_quit = true,
        }

        (self, effects)
    }

    fn clear_image(&mut self) {
        self.image = None;
        self.palette = Vec::new();
        self.selected = 0;
    }
}
