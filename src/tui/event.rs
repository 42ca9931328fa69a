//! Event handling for TUI

use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic redraws
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    /// Handle to the event task for cleanup
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(100);

        let task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = interval(tick_rate);

            loop {
                let event = tokio::select! {
                    _ = tick_interval.tick() => Some(AppEvent::Tick),
                    maybe_event = reader.next() => match maybe_event {
                        Some(Ok(evt)) => translate(evt),
                        Some(Err(e)) => {
                            tracing::warn!("Terminal event error: {}", e);
                            None
                        }
                        // Input stream closed
                        None => break,
                    },
                };

                if let Some(event) = event {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _task: task }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Keep key presses and resizes; drop key releases and everything else
fn translate(evt: CrosstermEvent) -> Option<AppEvent> {
    match evt {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// Helper to check for quit key combinations
pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Helper to check for back/escape key
pub fn is_back_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Esc,
            ..
        } | KeyEvent {
            code: KeyCode::Backspace,
            modifiers: KeyModifiers::NONE,
            ..
        }
    )
}
