//! The interactive loop: draws [`App`], feeds it messages and carries out
//! the effects it asks for.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::app::{App, Effect, Msg};
use crate::clipboard;
use crate::config::Config;
use crate::event::Event;
use crate::extract::{self, Extractor, ImageSource};
use crate::keys;
use crate::prefs;
use crate::storage::KvStore;
use crate::template;
use crate::tui::{self, EventHandler, Tui};
use crate::views::{self, style::Chrome};

const TICK_RATE_MS: u64 = 100;

struct Runtime<'a> {
    store: &'a dyn KvStore,
    extractor: Arc<dyn Extractor>,
    tx: mpsc::UnboundedSender<Event>,
}

impl Runtime<'_> {
    fn dispatch(&self, app: App, msg: Msg) -> App {
        let (mut app, effects) = app.update(msg);
        for effect in effects {
            app = self.perform(app, effect);
        }
        app
    }

    fn perform(&self, app: App, effect: Effect) -> App {
        match effect {
            Effect::ReadClipboard => match clipboard::read_image() {
                Ok(source) => self.start_extraction(app, source),
                Err(e) => {
                    warn!(error = %e, "paste failed");
                    self.dispatch(app, Msg::InputError(e.to_string()))
                }
            },
            Effect::SavePreference(pref) => match prefs::save(self.store, &pref) {
                Ok(()) => app,
                Err(e) => {
                    warn!(error = %e, "failed to save preference");
                    self.dispatch(app, Msg::Status(format!("Failed to save preference: {e}")))
                }
            },
            Effect::SaveTemplate(text) => match template::save(self.store, &text) {
                Ok(()) => app,
                Err(e) => {
                    warn!(error = %e, "failed to save template");
                    self.dispatch(app, Msg::Status(format!("Failed to save template: {e}")))
                }
            },
            Effect::CopyToClipboard { text, label } => match clipboard::write_text(&text) {
                Ok(()) => self.dispatch(app, Msg::Status(format!("Copied {label}"))),
                Err(e) => {
                    warn!(error = %e, "copy failed");
                    self.dispatch(app, Msg::Status(format!("{e:#}")))
                }
            },
        }
    }

    /// Kick off a background extraction. Results come back as
    /// [`Event::Extracted`]; an earlier extraction still in flight is left
    /// to finish and whichever resolves last is what the user sees.
    fn start_extraction(&self, app: App, source: ImageSource) -> App {
        let label = source.label();
        info!(image = %label, "starting extraction");
        let app = self.dispatch(app, Msg::ExtractionStarted(label.clone()));

        let extractor = Arc::clone(&self.extractor);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = extract::extract(extractor, source)
                .await
                .map_err(|e| e.to_string());
            if let Err(e) = &result {
                warn!(image = %label, error = %e, "extraction failed");
            }
            // The receiver only disappears when the UI is shutting down.
            let _ = tx.send(Event::Extracted { label, result });
        });
        app
    }
}

pub async fn run(store: &dyn KvStore, config: &Config, image: Option<PathBuf>) -> Result<()> {
    // Probe the terminal before raw mode takes over stdin.
    let chrome = Chrome::for_theme(config.ui_theme);
    let app = App::new(prefs::load(store), template::load(store), chrome);

    let mut terminal = tui::init()?;
    let result = event_loop(&mut terminal, store, config, app, image).await;
    tui::restore()?;
    result
}

async fn event_loop(
    terminal: &mut Tui,
    store: &dyn KvStore,
    config: &Config,
    mut app: App,
    image: Option<PathBuf>,
) -> Result<()> {
    let mut events = EventHandler::new(TICK_RATE_MS);
    let runtime = Runtime {
        store,
        extractor: Arc::new(config.extractor()),
        tx: events.sender(),
    };

    if let Some(path) = image {
        app = runtime.start_extraction(app, ImageSource::Path(path));
    }

    loop {
        terminal.draw(|frame| views::render(frame, &app))?;

        app = match events.next().await? {
            Event::Key(key) => match keys::handle_key(key, &app) {
                Some(msg) => runtime.dispatch(app, msg),
                None => app,
            },
            Event::Tick => runtime.dispatch(app, Msg::Tick),
            // Terminal handles resize automatically
            Event::Resize => app,
            Event::Extracted { label, result } => {
                runtime.dispatch(app, Msg::ExtractionFinished { label, result })
            }
        };

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
