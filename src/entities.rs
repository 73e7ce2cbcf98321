/// Game entity types — pure data, no logic beyond geometry.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in screen space (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// True when the two rectangles share a region of positive area.
    /// Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Rises from the floor.
    Upright,
    /// Hangs from the top edge; drawn vertically flipped.
    Inverted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub rect: Rect,
    pub orientation: Orientation,
}

impl Obstacle {
    pub fn is_flipped(&self) -> bool {
        self.orientation == Orientation::Inverted
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// One drawable bird frame: animation index, destination and tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub frame: usize,
    pub rect: Rect,
    /// Degrees, positive tilts the nose down.
    pub angle: f64,
    pub alive: bool,
}

// ── Scene state ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// The bird is dead; rendering continues, physics is paused.
    DeadLinger,
}

/// What a tick did, for callers and tests that care.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    Scored,
    Collided,
    Lingering,
    Restarted,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Platform events as far as the game cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    Quit,
    Resize { cols: u16, rows: u16 },
    /// Poll timed out, or the event is irrelevant to the game.
    Idle,
}
