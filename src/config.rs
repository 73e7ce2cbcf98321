/// Immutable game configuration.
///
/// One value is built at startup and handed to every component.  Nothing in
/// the crate reads window or physics constants from global state.

use std::time::Duration;

/// Environment variable holding an explicit spawner seed.
pub const SEED_ENV: &str = "FLAPPY_SEED";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    // ── Window ────────────────────────────────────────────────────────────────
    pub window_width: i32,
    pub window_height: i32,
    /// Height of the floor band.  The bird may not sink below it and upright
    /// obstacles stand on it.
    pub floor: i32,

    // ── Timing ────────────────────────────────────────────────────────────────
    pub tick: Duration,
    /// How long the scene keeps rendering a dead bird before resetting.
    pub linger: Duration,
    /// Upper bound on a single wait for a platform event.
    pub input_poll: Duration,

    // ── Bird physics ──────────────────────────────────────────────────────────
    pub gravity: f64,
    pub jump_speed: f64,
    pub angle_boost: f64,
    pub max_angle: f64,

    // ── Bird geometry & animation ─────────────────────────────────────────────
    pub bird_x: i32,
    pub bird_w: i32,
    pub bird_h: i32,
    pub spawn_y: i32,
    /// Total animation frames; the last two are the death pose.
    pub frame_count: usize,
    /// Counter steps each animation frame is held for.
    pub frame_hold: u64,

    // ── Obstacles ─────────────────────────────────────────────────────────────
    pub obstacle_speed: i32,
    pub obstacle_width: i32,
    pub obstacle_min_height: i32,
    /// Heights are drawn from `min_height .. min_height + height_range`.
    pub obstacle_height_range: i32,
    pub spawn_period: Duration,
    pub flip_chance: f64,
    /// Spawner seed.  `None` draws a fresh one per session.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let window_height = 600;
        GameConfig {
            window_width: 800,
            window_height,
            floor: 80,

            tick: Duration::from_millis(10),
            linger: Duration::from_secs(2),
            input_poll: Duration::from_millis(10),

            gravity: 0.12,
            jump_speed: 5.0,
            angle_boost: 10.0,
            max_angle: 25.0,

            bird_x: 10,
            bird_w: 50,
            bird_h: 43,
            spawn_y: window_height / 2,
            frame_count: 10,
            frame_hold: 10,

            obstacle_speed: 2,
            obstacle_width: 50,
            obstacle_min_height: 100,
            obstacle_height_range: 300,
            spawn_period: Duration::from_millis(1200),
            flip_chance: 0.5,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults plus an optional spawn seed from `FLAPPY_SEED`.
    pub fn from_env() -> Self {
        Self::default().with_seed_var(std::env::var(SEED_ENV).ok().as_deref())
    }

    fn with_seed_var(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => log::warn!("ignoring {SEED_ENV}={raw:?}: not a u64"),
            }
        }
        self
    }

    /// Number of flight frames (everything except the death pose).
    pub fn flight_frames(&self) -> usize {
        self.frame_count.saturating_sub(2).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_constants() {
        let c = GameConfig::default();
        assert_eq!((c.window_width, c.window_height), (800, 600));
        assert_eq!(c.spawn_y, 300);
        assert_eq!(c.flight_frames(), 8);
        assert_eq!(c.spawn_period, Duration::from_millis(1200));
    }

    #[test]
    fn seed_var_parses_or_is_ignored() {
        assert_eq!(GameConfig::default().with_seed_var(Some(" 42 ")).seed, Some(42));
        assert_eq!(GameConfig::default().with_seed_var(Some("nope")).seed, None);
        assert_eq!(GameConfig::default().with_seed_var(None).seed, None);
    }
}
