use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{Event as CrosstermEvent, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior, interval};
use tracing::debug;

use crate::event::Event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> Result<Tui> {
    debug!("entering alternate screen");
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn restore() -> Result<()> {
    debug!("leaving alternate screen");
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Merges terminal input, a UI tick and background task results into one
/// stream of [`Event`]s.
pub struct EventHandler {
    event_stream: EventStream,
    tick: Interval,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let mut tick = interval(Duration::from_millis(tick_rate_ms));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            event_stream: EventStream::new(),
            tick,
            tx,
            rx,
        }
    }

    /// Handle for background tasks to report back on.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            tokio::select! {
                _ = self.tick.tick() => {
                    return Ok(Event::Tick);
                }
                Some(event) = self.rx.recv() => {
                    return Ok(event);
                }
                event = self.event_stream.next() => {
                    match event {
                        Some(Ok(CrosstermEvent::Key(key)))
                            if key.kind == crossterm::event::KeyEventKind::Press =>
                        {
                            return Ok(Event::Key(key));
                        }
                        Some(Ok(CrosstermEvent::Resize(_, _))) => {
                            return Ok(Event::Resize);
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => anyhow::bail!("terminal event stream closed"),
                        _ => {}
                    }
                }
            }
        }
    }
}
