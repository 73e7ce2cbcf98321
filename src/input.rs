//! Input collaborator.
//!
//! The session's input thread owns an `EventSource` and polls it with a
//! bounded timeout, so it can notice shutdown between events.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::InputEvent;
use crate::error::{GameError, Result};

pub trait EventSource {
    /// Wait up to `timeout` for the next event.  A timeout yields
    /// `InputEvent::Idle`.
    fn poll(&mut self, timeout: Duration) -> Result<InputEvent>;
}

/// Reads the crossterm event queue.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> Result<InputEvent> {
        if !event::poll(timeout).map_err(GameError::Input)? {
            return Ok(InputEvent::Idle);
        }
        let ev = event::read().map_err(GameError::Input)?;
        Ok(translate(&ev))
    }
}

/// Space jumps; q, Esc and Ctrl-C quit.  Key releases and repeats are
/// ignored so one press is one jump.
pub fn translate(ev: &Event) -> InputEvent {
    match ev {
        Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
            if *kind != KeyEventKind::Press {
                return InputEvent::Idle;
            }
            match code {
                KeyCode::Char(' ') => InputEvent::Jump,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    InputEvent::Quit
                }
                _ => InputEvent::Idle,
            }
        }
        Event::Resize(cols, rows) => InputEvent::Resize { cols: *cols, rows: *rows },
        _ => InputEvent::Idle,
    }
}
