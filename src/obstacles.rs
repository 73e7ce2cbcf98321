//! The obstacle stream and its periodic producer.
//!
//! `ObstacleStream` keeps obstacles in spawn order.  Since they all move left
//! at the same speed and leave from the left edge, spawn order is also
//! proximity order: index 0 is always the one nearest the bird.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::bird::Bird;
use crate::compute;
use crate::config::GameConfig;
use crate::entities::Obstacle;
use crate::shutdown::Pacer;

#[derive(Debug)]
pub struct ObstacleStream {
    speed: i32,
    obstacles: RwLock<Vec<Obstacle>>,
}

impl ObstacleStream {
    pub fn new(cfg: &GameConfig) -> Self {
        ObstacleStream {
            speed: cfg.obstacle_speed,
            obstacles: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Obstacle>> {
        self.obstacles.read().unwrap_or_else(|poisoned| {
            log::warn!("obstacle lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Obstacle>> {
        self.obstacles.write().unwrap_or_else(|poisoned| {
            log::warn!("obstacle lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Append a freshly spawned obstacle at the far end.
    pub fn push(&self, obstacle: Obstacle) {
        self.write().push(obstacle);
    }

    /// Move everything left one step and retire what left the screen.
    pub fn update(&self) {
        let mut obstacles = self.write();
        let current = std::mem::take(&mut *obstacles);
        *obstacles = compute::advance_obstacles(current, self.speed);
    }

    /// True when the bird overlaps any live obstacle.
    pub fn intersects(&self, bird: &Bird) -> bool {
        // Bird lock is released before ours is taken.
        let bounds = bird.bounds();
        self.read().iter().any(|o| o.rect.intersects(&bounds))
    }

    /// True on the tick the nearest obstacle crosses the bird's pass line.
    pub fn has_passed(&self, bird: &Bird) -> bool {
        let nearest = match self.read().first() {
            Some(o) => o.rect,
            None => return false,
        };
        bird.has_passed(&nearest, self.speed)
    }

    pub fn restart(&self) {
        self.write().clear();
    }

    /// Copy of the current sequence, nearest first.
    pub fn snapshot(&self) -> Vec<Obstacle> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

// ── Spawner ───────────────────────────────────────────────────────────────────

/// Periodic obstacle producer with its own PRNG.
#[derive(Debug)]
pub struct Spawner {
    cfg: GameConfig,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(cfg: &GameConfig, seed: u64) -> Self {
        Spawner {
            cfg: cfg.clone(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the config, or a fresh random one.
    pub fn from_config(cfg: &GameConfig) -> Self {
        let seed = cfg.seed.unwrap_or_else(rand::random);
        log::info!("obstacle spawner seed: {seed}");
        Self::new(cfg, seed)
    }

    pub fn next_obstacle(&mut self) -> Obstacle {
        compute::new_obstacle(&mut self.rng, &self.cfg)
    }

    /// Push one obstacle per period until the pacer says stop.
    /// Returns how many were spawned.
    pub fn run(&mut self, stream: &ObstacleStream, pacer: &impl Pacer) -> usize {
        let mut spawned = 0;
        while pacer.wait(self.cfg.spawn_period) {
            let obstacle = self.next_obstacle();
            log::debug!(
                "spawned {:?} obstacle, height {}",
                obstacle.orientation,
                obstacle.rect.h
            );
            stream.push(obstacle);
            spawned += 1;
        }
        log::debug!("spawner stopped after {spawned} obstacles");
        spawned
    }
}
