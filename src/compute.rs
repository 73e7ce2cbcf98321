/// Pure game-logic functions.
///
/// Nothing here locks, sleeps or reads the clock.  Aggregates in `bird` and
/// `obstacles` wrap these with their own synchronisation; randomness is
/// injected so callers control determinism.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Obstacle, Orientation, Rect};

// ── Bird physics ──────────────────────────────────────────────────────────────

/// Vertical flight state of the bird.  `y` is measured upward from the
/// bottom of the window and marks the bird's centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flight {
    pub y: i32,
    /// Positive means falling.
    pub velocity: f64,
    pub angle: f64,
}

impl Flight {
    pub fn at_rest(y: i32) -> Self {
        Flight { y, velocity: 0.0, angle: 0.0 }
    }
}

/// Advance one tick.
///
/// The current velocity moves the bird first (truncated to whole pixels),
/// then gravity is added for the next tick.  A move that would leave the
/// band `[floor, window_height]` is undone; at the floor the bird is levelled.
pub fn fall(flight: &Flight, cfg: &GameConfig) -> Flight {
    let step = flight.velocity as i32;
    let mut y = flight.y - step;
    let mut angle = cfg.max_angle.min(flight.velocity * cfg.angle_boost);

    let half = cfg.bird_h / 2;
    let at_top = y + half > cfg.window_height;
    let at_bottom = y - half < cfg.floor;
    if at_top || at_bottom {
        y += step;
        if at_bottom {
            angle = 0.0;
        }
    }

    Flight {
        y,
        velocity: flight.velocity + cfg.gravity,
        angle,
    }
}

/// Screen-space bounding box of a bird whose centre sits at `y` (upward).
pub fn bird_rect(y: i32, cfg: &GameConfig) -> Rect {
    Rect::new(
        cfg.bird_x,
        cfg.window_height - y - cfg.bird_h / 2,
        cfg.bird_w,
        cfg.bird_h,
    )
}

/// Animation frame for a given counter value.
///
/// Alive birds cycle through the flight frames; dead birds alternate between
/// the last two frames.
pub fn sprite_frame(counter: u64, alive: bool, cfg: &GameConfig) -> usize {
    let hold = cfg.frame_hold.max(1);
    let step = counter / hold;
    if alive {
        (step % cfg.flight_frames() as u64) as usize
    } else {
        let last = cfg.frame_count.max(2) - 1;
        last - (step % 2) as usize
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// Draw one obstacle just off the right edge.  Height first, then flip.
pub fn new_obstacle(rng: &mut impl Rng, cfg: &GameConfig) -> Obstacle {
    let h = cfg.obstacle_min_height + rng.gen_range(0..cfg.obstacle_height_range.max(1));
    let flipped = rng.gen_bool(cfg.flip_chance.clamp(0.0, 1.0));
    let (y, orientation) = if flipped {
        (0, Orientation::Inverted)
    } else {
        (cfg.window_height - h - cfg.floor, Orientation::Upright)
    };
    Obstacle {
        rect: Rect::new(cfg.window_width, y, cfg.obstacle_width, h),
        orientation,
    }
}

/// Move every obstacle left by `speed` and drop the ones fully off-screen.
/// Survivors keep their relative order.
pub fn advance_obstacles(obstacles: Vec<Obstacle>, speed: i32) -> Vec<Obstacle> {
    obstacles
        .into_iter()
        .filter_map(|mut o| {
            o.rect.x -= speed;
            (o.rect.x + o.rect.w > 0).then_some(o)
        })
        .collect()
}

/// True on the tick the obstacle crosses the pass line.
///
/// The line sits where `obstacle.x == bird.x - bird.w`.  The obstacle has
/// crossed it when it is at or past the line now but was short of it one
/// step (`speed`) ago, so a step that jumps over the line still counts once.
pub fn crossed_pass_line(bird: &Rect, obstacle: &Rect, speed: i32) -> bool {
    let line = bird.x - bird.w;
    obstacle.x <= line && obstacle.x + speed > line
}

// ── Score ─────────────────────────────────────────────────────────────────────

pub fn score_text(score: u32) -> String {
    score.to_string()
}

/// Top-left corner for score text `text_width` wide: centred horizontally,
/// 10px from the top.
pub fn score_origin(window_width: i32, text_width: i32) -> (i32, i32) {
    (window_width / 2 - text_width / 2, 10)
}
