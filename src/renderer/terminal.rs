//! Terminal renderer
//!
//! Scales the world window onto the terminal grid. Each frame is composed in
//! a cell buffer and written out in one pass on `end_frame`.

use std::io::{self, Write};

use crossterm::{QueueableCommand, cursor, style, terminal};
use glam::Vec2;

use super::Renderer;
use crate::sim::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

fn term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Draws rectangles as colored cells
pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    /// World units covered by the grid
    world: Vec2,
    cells: Vec<Cell>,
    /// Re-read the terminal size at the start of each frame
    follow_terminal_size: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer sized to the current terminal
    pub fn new(out: W, world: Vec2) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let mut renderer = Self::with_size(out, cols, rows, world);
        renderer.follow_terminal_size = true;
        Ok(renderer)
    }

    /// Renderer with a fixed grid size
    pub fn with_size(out: W, cols: u16, rows: u16, world: Vec2) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let blank = Cell {
            ch: ' ',
            fg: Color::rgb(0, 0, 0),
            bg: Color::rgb(0, 0, 0),
        };
        Self {
            out,
            cols,
            rows,
            world,
            cells: vec![blank; cols as usize * rows as usize],
            follow_terminal_size: false,
        }
    }

    pub fn grid_size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Cells per world unit on each axis
    fn scale(&self) -> Vec2 {
        Vec2::new(
            self.cols as f32 / self.world.x,
            self.rows as f32 / self.world.y,
        )
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    #[cfg(test)]
    fn cell(&self, col: i32, row: i32) -> Option<&Cell> {
        self.index(col, row).map(|i| &self.cells[i])
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        let blank = self.cells.first().copied().unwrap_or(Cell {
            ch: ' ',
            fg: Color::rgb(0, 0, 0),
            bg: Color::rgb(0, 0, 0),
        });
        self.cells = vec![blank; self.cols as usize * self.rows as usize];
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin_frame(&mut self, clear: Color) {
        if self.follow_terminal_size {
            if let Ok((cols, rows)) = terminal::size() {
                if (cols, rows) != (self.cols, self.rows) {
                    log::debug!("Terminal resized to {cols}x{rows}");
                    self.resize(cols, rows);
                }
            }
        }
        self.cells.fill(Cell {
            ch: ' ',
            fg: clear,
            bg: clear,
        });
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let scale = self.scale();
        let col0 = (x * scale.x).floor() as i32;
        let row0 = (y * scale.y).floor() as i32;
        // Always cover at least one cell so thin platforms stay visible
        let col1 = ((x + width) * scale.x).ceil().max(col0 as f32 + 1.0) as i32;
        let row1 = ((y + height) * scale.y).ceil().max(row0 as f32 + 1.0) as i32;

        for row in row0.max(0)..row1.min(self.rows as i32) {
            for col in col0.max(0)..col1.min(self.cols as i32) {
                if let Some(i) = self.index(col, row) {
                    self.cells[i] = Cell {
                        ch: ' ',
                        fg: color,
                        bg: color,
                    };
                }
            }
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color, _font_size: f32) {
        let scale = self.scale();
        let col0 = (x * scale.x).floor() as i32;
        let row = (y * scale.y).floor() as i32;
        for (offset, ch) in text.chars().enumerate() {
            if let Some(i) = self.index(col0 + offset as i32, row) {
                self.cells[i].ch = ch;
                self.cells[i].fg = color;
            }
        }
    }

    /// One cell per character, whatever the font size
    fn text_width(&self, text: &str, _font_size: f32) -> f32 {
        text.chars().count() as f32 / self.scale().x
    }

    fn end_frame(&mut self) -> io::Result<()> {
        let mut last: Option<(Color, Color)> = None;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if last != Some((cell.fg, cell.bg)) {
                    self.out
                        .queue(style::SetForegroundColor(term_color(cell.fg)))?
                        .queue(style::SetBackgroundColor(term_color(cell.bg)))?;
                    last = Some((cell.fg, cell.bg));
                }
                self.out.queue(style::Print(cell.ch))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}
