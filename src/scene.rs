//! Scene orchestration: one fixed-period tick at a time.
//!
//! Per tick the scene renders first, then either waits out the death linger,
//! resets, or runs physics, collision and scoring.  The bird and the obstacle
//! stream each lock themselves; the scene never holds one while calling the
//! other.

use std::sync::Arc;
use std::time::Instant;

use crate::bird::Bird;
use crate::compute;
use crate::config::GameConfig;
use crate::display::Canvas;
use crate::entities::{Phase, TickOutcome};
use crate::error::Result;
use crate::obstacles::ObstacleStream;

#[derive(Debug)]
pub struct Scene {
    cfg: GameConfig,
    bird: Arc<Bird>,
    obstacles: Arc<ObstacleStream>,
    phase: Phase,
    score: u32,
    frame: u64,
}

impl Scene {
    pub fn new(cfg: &GameConfig) -> Self {
        Scene {
            cfg: cfg.clone(),
            bird: Arc::new(Bird::new(cfg)),
            obstacles: Arc::new(ObstacleStream::new(cfg)),
            phase: Phase::Playing,
            score: 0,
            frame: 0,
        }
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    /// Shared handle for the spawner thread.
    pub fn obstacles(&self) -> Arc<ObstacleStream> {
        Arc::clone(&self.obstacles)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn jump(&self) {
        self.bird.apply_impulse();
    }

    pub fn tick<C: Canvas>(&mut self, canvas: &mut C) -> Result<TickOutcome> {
        self.tick_at(canvas, Instant::now())
    }

    /// One tick as of `now`.  Only rendering can fail; a failure leaves the
    /// simulation state untouched.
    pub fn tick_at<C: Canvas>(&mut self, canvas: &mut C, now: Instant) -> Result<TickOutcome> {
        self.render(canvas)?;
        self.frame += 1;

        if self.phase == Phase::DeadLinger {
            if self.bird.time_since_death_at(now) > self.cfg.linger {
                self.reset();
                return Ok(TickOutcome::Restarted);
            }
            return Ok(TickOutcome::Lingering);
        }

        self.bird.update();
        self.obstacles.update();

        if self.obstacles.intersects(&self.bird) {
            self.bird.on_collision_at(now);
            self.phase = Phase::DeadLinger;
            log::debug!("collision at frame {}, score {}", self.frame, self.score);
            return Ok(TickOutcome::Collided);
        }
        if self.obstacles.has_passed(&self.bird) {
            self.score += 1;
            log::debug!("score {}", self.score);
            return Ok(TickOutcome::Scored);
        }
        Ok(TickOutcome::Advanced)
    }

    /// Background, bird, obstacles, score; then present.
    pub fn render<C: Canvas>(&self, canvas: &mut C) -> Result<()> {
        canvas.begin_frame()?;
        let sprite = self.bird.next_sprite();
        canvas.draw_bird(&sprite)?;
        for obstacle in self.obstacles.snapshot() {
            canvas.draw_obstacle(&obstacle)?;
        }
        canvas.draw_score(&compute::score_text(self.score))?;
        canvas.present()
    }

    fn reset(&mut self) {
        log::info!("restarting after death, final score {}", self.score);
        self.score = 0;
        self.bird.restart();
        self.obstacles.restart();
        self.phase = Phase::Playing;
    }
}
