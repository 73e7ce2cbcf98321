//! The player-controlled falling actor.
//!
//! All state lives behind one `RwLock` owned by the `Bird`.  Every method
//! takes and releases the lock itself; no guard ever escapes, so callers can
//! never hold the bird locked while touching another component.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use crate::compute::{self, Flight};
use crate::config::GameConfig;
use crate::entities::{Rect, Sprite};

#[derive(Debug)]
struct BirdState {
    flight: Flight,
    /// Advances once per rendered frame, alive or not.
    frame: u64,
    died_at: Option<Instant>,
}

impl BirdState {
    fn alive(&self) -> bool {
        self.died_at.is_none()
    }
}

#[derive(Debug)]
pub struct Bird {
    cfg: GameConfig,
    state: RwLock<BirdState>,
}

impl Bird {
    pub fn new(cfg: &GameConfig) -> Self {
        Bird {
            cfg: cfg.clone(),
            state: RwLock::new(BirdState {
                flight: Flight::at_rest(cfg.spawn_y),
                frame: 0,
                died_at: None,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BirdState> {
        self.state.read().unwrap_or_else(|poisoned| {
            log::warn!("bird lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, BirdState> {
        self.state.write().unwrap_or_else(|poisoned| {
            log::warn!("bird lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    /// One physics step.  No-op while dead.
    pub fn update(&self) {
        let mut state = self.write();
        if !state.alive() {
            return;
        }
        state.flight = compute::fall(&state.flight, &self.cfg);
    }

    /// Jump: velocity is overwritten with the fixed upward speed.
    pub fn apply_impulse(&self) {
        self.write().flight.velocity = -self.cfg.jump_speed;
    }

    pub fn on_collision(&self) {
        self.on_collision_at(Instant::now());
    }

    /// Marks the bird dead at `now`.  Later calls keep the first timestamp.
    pub fn on_collision_at(&self, now: Instant) {
        let mut state = self.write();
        if state.alive() {
            state.died_at = Some(now);
        }
    }

    pub fn time_since_death(&self) -> Duration {
        self.time_since_death_at(Instant::now())
    }

    pub fn time_since_death_at(&self, now: Instant) -> Duration {
        match self.read().died_at {
            Some(t) => now.saturating_duration_since(t),
            None => Duration::ZERO,
        }
    }

    /// Back to the spawn point.  Only valid while dead; ignored otherwise.
    pub fn restart(&self) {
        let mut state = self.write();
        if state.alive() {
            return;
        }
        state.flight = Flight::at_rest(self.cfg.spawn_y);
        state.died_at = None;
    }

    pub fn is_alive(&self) -> bool {
        self.read().alive()
    }

    pub fn flight(&self) -> Flight {
        self.read().flight
    }

    pub fn frame_counter(&self) -> u64 {
        self.read().frame
    }

    /// Current screen-space bounding box.
    pub fn bounds(&self) -> Rect {
        compute::bird_rect(self.read().flight.y, &self.cfg)
    }

    pub fn intersects(&self, rect: &Rect) -> bool {
        self.bounds().intersects(rect)
    }

    /// True on the tick `rect`, moving at `speed`, crosses the pass line.
    pub fn has_passed(&self, rect: &Rect, speed: i32) -> bool {
        compute::crossed_pass_line(&self.bounds(), rect, speed)
    }

    /// What to draw this frame.  Advances the animation counter.
    pub fn next_sprite(&self) -> Sprite {
        let mut state = self.write();
        let alive = state.alive();
        let sprite = Sprite {
            frame: compute::sprite_frame(state.frame, alive, &self.cfg),
            rect: compute::bird_rect(state.flight.y, &self.cfg),
            angle: state.flight.angle,
            alive,
        };
        state.frame += 1;
        sprite
    }
}

