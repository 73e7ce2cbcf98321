/// Rendering layer.
///
/// The scene composes a frame out of `Canvas` calls; it never talks to the
/// terminal directly.  `TerminalCanvas` is the crossterm implementation.

mod terminal;

pub use terminal::TerminalCanvas;

use crate::entities::{Obstacle, Sprite};
use crate::error::Result;

pub trait Canvas {
    /// Clear the previous frame and lay down the background.
    fn begin_frame(&mut self) -> Result<()>;

    /// Draw bird frame `sprite.frame` at `sprite.rect`, rotated by
    /// `sprite.angle` degrees.
    fn draw_bird(&mut self, sprite: &Sprite) -> Result<()>;

    /// Draw one obstacle, vertically flipped when inverted.
    fn draw_obstacle(&mut self, obstacle: &Obstacle) -> Result<()>;

    /// Overlay the score text, centred at the top.
    fn draw_score(&mut self, text: &str) -> Result<()>;

    /// Show the composed frame.
    fn present(&mut self) -> Result<()>;

    /// The output surface changed size.
    fn resize(&mut self, _cols: u16, _rows: u16) {}
}
