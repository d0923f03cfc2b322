use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

pub enum AppEvent {
    Key(KeyEvent),
    /// Nothing to handle (timeout, resize, focus change); just redraw.
    Redraw,
}

/// Blocking terminal event source.
///
/// Each call waits at most one tick so the loop redraws regularly even
/// without input.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> io::Result<AppEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(AppEvent::Redraw);
        }
        match event::read()? {
            Event::Key(key) => Ok(AppEvent::Key(key)),
            _ => Ok(AppEvent::Redraw),
        }
    }
}
