//! Crossterm canvas.
//!
//! The 800x600 world is projected onto the terminal grid.  Each frame is
//! painted into a cell buffer first, then written row by row and flushed
//! once, so the terminal never shows a half-drawn frame.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use super::Canvas;
use crate::compute;
use crate::config::GameConfig;
use crate::entities::{Obstacle, Rect, Sprite};
use crate::error::Result;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Reset;
const C_FLOOR: Color = Color::DarkYellow;
const C_PIPE: Color = Color::Green;
const C_PIPE_CAP: Color = Color::DarkGreen;
const C_BIRD: Color = Color::Yellow;
const C_BIRD_DEAD: Color = Color::Red;
const C_SCORE: Color = Color::White;

// ── Glyphs ────────────────────────────────────────────────────────────────────

const WINGS: [char; 4] = ['^', '-', 'v', '-'];
const DEATH_POSE: [&str; 2] = ["x_x", "X_X"];

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell { ch: ' ', color: C_SKY };

pub struct TerminalCanvas<W: Write> {
    out: W,
    world_w: i32,
    world_h: i32,
    floor: i32,
    flight_frames: usize,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, cfg: &GameConfig, cols: u16, rows: u16) -> Self {
        TerminalCanvas {
            out,
            world_w: cfg.window_width.max(1),
            world_h: cfg.window_height.max(1),
            floor: cfg.floor,
            flight_frames: cfg.flight_frames(),
            cols,
            rows,
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    /// Canvas sized to the current terminal.
    pub fn for_terminal(out: W, cfg: &GameConfig) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::new(out, cfg, cols, rows))
    }

    fn col(&self, x: i32) -> i32 {
        (x as i64 * self.cols as i64 / self.world_w as i64) as i32
    }

    fn row(&self, y: i32) -> i32 {
        (y as i64 * self.rows as i64 / self.world_h as i64) as i32
    }

    /// Cell span `[c0, c1) x [r0, r1)` covered by a world rectangle, at least
    /// one cell in each direction.
    fn span(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        let c0 = self.col(rect.x);
        let r0 = self.row(rect.y);
        let c1 = self.col(rect.x + rect.w).max(c0 + 1);
        let r1 = self.row(rect.y + rect.h).max(r0 + 1);
        (c0, c1, r0, r1)
    }

    fn put(&mut self, col: i32, row: i32, ch: char, color: Color) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells[idx] = Cell { ch, color };
    }

    fn put_str(&mut self, col: i32, row: i32, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch, color);
        }
    }

    fn bird_glyph(&self, sprite: &Sprite) -> String {
        if sprite.frame >= self.flight_frames {
            let pose = (sprite.frame - self.flight_frames) % DEATH_POSE.len();
            return DEATH_POSE[pose].to_string();
        }
        let wing = WINGS[sprite.frame % WINGS.len()];
        let nose = if sprite.angle >= 10.0 {
            '\\'
        } else if sprite.angle <= -10.0 {
            '/'
        } else {
            '>'
        };
        format!("{wing}o{nose}")
    }

    fn write_frame(&mut self) -> io::Result<()> {
        let cols = self.cols as usize;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * cols;
            let line = &self.cells[start..start + cols];

            // One colour change per run of same-coloured cells.
            let mut run = String::with_capacity(cols);
            let mut color = line.first().map_or(C_SKY, |c| c.color);
            for cell in line {
                if cell.color != color {
                    self.out.queue(style::SetForegroundColor(color))?;
                    self.out.queue(Print(&run))?;
                    run.clear();
                    color = cell.color;
                }
                run.push(cell.ch);
            }
            self.out.queue(style::SetForegroundColor(color))?;
            self.out.queue(Print(&run))?;
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn begin_frame(&mut self) -> Result<()> {
        self.cells.fill(BLANK);
        let floor_row = self.row(self.world_h - self.floor);
        for row in floor_row..self.rows as i32 {
            for col in 0..self.cols as i32 {
                self.put(col, row, '░', C_FLOOR);
            }
        }
        Ok(())
    }

    fn draw_bird(&mut self, sprite: &Sprite) -> Result<()> {
        let (c0, _, r0, r1) = self.span(&sprite.rect);
        let color = if sprite.alive { C_BIRD } else { C_BIRD_DEAD };
        let glyph = self.bird_glyph(sprite);
        self.put_str(c0, (r0 + r1 - 1) / 2, &glyph, color);
        Ok(())
    }

    fn draw_obstacle(&mut self, obstacle: &Obstacle) -> Result<()> {
        let (c0, c1, r0, r1) = self.span(&obstacle.rect);
        // The cap faces the gap: top row upright, bottom row when flipped.
        let cap_row = if obstacle.is_flipped() { r1 - 1 } else { r0 };
        for row in r0..r1 {
            let (ch, color) = if row == cap_row {
                ('▓', C_PIPE_CAP)
            } else {
                ('█', C_PIPE)
            };
            for col in c0..c1 {
                self.put(col, row, ch, color);
            }
        }
        Ok(())
    }

    fn draw_score(&mut self, text: &str) -> Result<()> {
        let chars = text.chars().count() as i64;
        let world_width = (chars * self.world_w as i64 / self.cols.max(1) as i64) as i32;
        let (x, y) = compute::score_origin(self.world_w, world_width);
        let (col, row) = (self.col(x), self.row(y));
        self.put_str(col, row, text, C_SCORE);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.write_frame()?;
        Ok(())
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        log::debug!("canvas resized to {cols}x{rows}");
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![BLANK; cols as usize * rows as usize];
    }
}
