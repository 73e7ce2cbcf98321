//! Terminal flappy-bird: a bird falls under gravity and must slip past a
//! stream of obstacles.
//!
//! - `compute` / `entities`: pure logic and data
//! - `bird`, `obstacles`: internally locked aggregates
//! - `scene`: the per-tick state machine
//! - `session`: threads, handoff channel and shutdown
//! - `display`, `input`, `audio`: collaborators at the edges

pub mod audio;
pub mod bird;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod obstacles;
pub mod scene;
pub mod session;
pub mod shutdown;

pub use config::GameConfig;
pub use error::GameError;
pub use scene::Scene;
pub use session::Session;
