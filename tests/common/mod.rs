//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::Duration;

use flappy_term::audio::Soundtrack;
use flappy_term::display::Canvas;
use flappy_term::entities::{InputEvent, Obstacle, Orientation, Rect, Sprite};
use flappy_term::error::{GameError, Result};

// ── Canvas ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Begin,
    Bird(Sprite),
    Obstacle(Obstacle),
    Score(String),
    Present,
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
    pub presents: usize,
    /// Fail the n-th `present` (1-based).
    pub fail_on_present: Option<usize>,
    pub resized: Option<(u16, u16)>,
}

impl RecordingCanvas {
    pub fn failing_on(n: usize) -> Self {
        RecordingCanvas {
            fail_on_present: Some(n),
            ..Default::default()
        }
    }

    /// Ops recorded since the last `Begin`.
    pub fn last_frame(&self) -> &[Op] {
        let start = self.ops.iter().rposition(|op| *op == Op::Begin).unwrap_or(0);
        &self.ops[start..]
    }

    pub fn last_sprite(&self) -> Option<Sprite> {
        self.ops.iter().rev().find_map(|op| match op {
            Op::Bird(s) => Some(*s),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn begin_frame(&mut self) -> Result<()> {
        self.ops.push(Op::Begin);
        Ok(())
    }

    fn draw_bird(&mut self, sprite: &Sprite) -> Result<()> {
        self.ops.push(Op::Bird(*sprite));
        Ok(())
    }

    fn draw_obstacle(&mut self, obstacle: &Obstacle) -> Result<()> {
        self.ops.push(Op::Obstacle(*obstacle));
        Ok(())
    }

    fn draw_score(&mut self, text: &str) -> Result<()> {
        self.ops.push(Op::Score(text.to_string()));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        if self.fail_on_present == Some(self.presents) {
            return Err(GameError::Render(io::Error::other("texture rejected")));
        }
        self.ops.push(Op::Present);
        Ok(())
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.resized = Some((cols, rows));
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Replays a script, one event per poll.  Each poll takes its full timeout
/// so the script spreads over real time.  An exhausted script idles forever.
#[derive(Debug)]
pub struct ScriptedEvents {
    script: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    pub fn new(script: impl IntoIterator<Item = InputEvent>) -> Self {
        ScriptedEvents {
            script: script.into_iter().collect(),
        }
    }

    pub fn idle_then(idle_polls: usize, last: InputEvent) -> Self {
        let mut script = vec![InputEvent::Idle; idle_polls];
        script.push(last);
        Self::new(script)
    }
}

impl flappy_term::input::EventSource for ScriptedEvents {
    fn poll(&mut self, timeout: Duration) -> Result<InputEvent> {
        thread::sleep(timeout);
        Ok(self.script.pop_front().unwrap_or(InputEvent::Idle))
    }
}

#[derive(Debug, Default)]
pub struct BrokenEvents;

impl flappy_term::input::EventSource for BrokenEvents {
    fn poll(&mut self, _timeout: Duration) -> Result<InputEvent> {
        Err(GameError::Input(io::Error::other("event queue closed")))
    }
}

// ── Audio ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct CountingSoundtrack {
    pub starts: usize,
    pub fail: bool,
}

impl Soundtrack for CountingSoundtrack {
    fn start_loop(&mut self) -> Result<()> {
        self.starts += 1;
        if self.fail {
            return Err(GameError::Audio("no mixer".to_string()));
        }
        Ok(())
    }
}

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// Hangs from the top, well clear of a bird flying at the default height.
pub fn ceiling_obstacle(x: i32) -> Obstacle {
    Obstacle {
        rect: Rect::new(x, 0, 50, 100),
        orientation: Orientation::Inverted,
    }
}

/// Sits across the bird's default flight line.
pub fn blocking_obstacle(x: i32) -> Obstacle {
    Obstacle {
        rect: Rect::new(x, 250, 50, 270),
        orientation: Orientation::Upright,
    }
}
