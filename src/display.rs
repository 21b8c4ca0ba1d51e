/// Terminal canvas. All terminal I/O lives here.
///
/// Arena pixels are scaled onto the terminal grid each frame, so the game
/// plays the same on any window size; it just gets chunkier on small ones.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};
use space_duel::assets::Image;
use space_duel::canvas::{self, Canvas, TextAlign};
use space_duel::entities::Arena;

// ── Glyphs ────────────────────────────────────────────────────────────────────

const G_FILL: &str = "█";
const G_BLAST: &str = "*";

/// Text drawn at or above this size is emphasised.
const LARGE_TEXT: f32 = 32.0;

fn term_color(color: canvas::Color) -> Color {
    match color {
        canvas::Color::Yellow => Color::Yellow,
        canvas::Color::Red => Color::Red,
        canvas::Color::Green => Color::Green,
        canvas::Color::Blue => Color::Blue,
        canvas::Color::Orange => Color::DarkYellow,
    }
}

/// Horizontal mirror of a single character, for flipped sprites.
fn mirror_glyph(ch: char) -> char {
    match ch {
        '<' => '>',
        '>' => '<',
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '/' => '\\',
        '\\' => '/',
        other => other,
    }
}

fn mirror_row(row: &str, width: usize) -> Vec<char> {
    let mut chars: Vec<char> = row.chars().collect();
    chars.resize(width, ' ');
    chars.into_iter().rev().map(mirror_glyph).collect()
}

// ── Canvas ────────────────────────────────────────────────────────────────────

pub struct TerminalCanvas<'a, W: Write> {
    out: &'a mut W,
    cols: u16,
    rows: u16,
    arena: Arena,
}

impl<'a, W: Write> TerminalCanvas<'a, W> {
    pub fn new(out: &'a mut W, cols: u16, rows: u16, arena: Arena) -> Self {
        TerminalCanvas { out, cols, rows, arena }
    }

    fn col(&self, x: f32) -> i32 {
        (x / self.arena.width * self.cols as f32).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y / self.arena.height * self.rows as f32).floor() as i32
    }

    fn col_end(&self, x: f32) -> i32 {
        (x / self.arena.width * self.cols as f32).ceil() as i32
    }

    fn row_end(&self, y: f32) -> i32 {
        (y / self.arena.height * self.rows as f32).ceil() as i32
    }

    fn on_screen(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < self.cols as i32 && row < self.rows as i32
    }

    fn put(&mut self, col: i32, row: i32, text: &str) -> std::io::Result<()> {
        if self.on_screen(col, row) {
            self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
            self.out.queue(Print(text))?;
        }
        Ok(())
    }
}

impl<W: Write> Canvas for TerminalCanvas<'_, W> {
    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: canvas::Color) -> std::io::Result<()> {
        if w <= 0.0 || h <= 0.0 {
            return Ok(());
        }
        let c0 = self.col(x).max(0);
        let c1 = self.col_end(x + w).max(self.col(x) + 1).min(self.cols as i32);
        let r0 = self.row(y);
        let r1 = self.row_end(y + h).max(r0 + 1);
        if c1 <= c0 {
            return Ok(());
        }

        self.out.queue(style::SetForegroundColor(term_color(color)))?;
        let strip = G_FILL.repeat((c1 - c0) as usize);
        for row in r0..r1 {
            self.put(c0, row, &strip)?;
        }
        Ok(())
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: canvas::Color) -> std::io::Result<()> {
        let cell_w = self.arena.width / self.cols.max(1) as f32;
        let cell_h = self.arena.height / self.rows.max(1) as f32;

        self.out.queue(style::SetForegroundColor(term_color(color)))?;
        for row in self.row(cy - radius)..self.row_end(cy + radius) {
            for col in self.col(cx - radius)..self.col_end(cx + radius) {
                // Cell centre, back in arena pixels.
                let px = (col as f32 + 0.5) * cell_w;
                let py = (row as f32 + 0.5) * cell_h;
                if (px - cx).powi(2) + (py - cy).powi(2) <= radius * radius {
                    self.put(col, row, G_BLAST)?;
                }
            }
        }
        Ok(())
    }

    fn draw_image(
        &mut self,
        image: &Image,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        mirrored: bool,
    ) -> std::io::Result<()> {
        if !image.is_loaded() {
            return Ok(());
        }
        let c0 = self.col(x);
        let r0 = self.row(y);
        let box_cols = (self.col_end(x + w) - c0).max(1) as usize;
        let box_rows = (self.row_end(y + h) - r0).max(1) as usize;

        self.out.queue(style::SetForegroundColor(Color::White))?;
        let width = image.width();
        for (dy, line) in image.rows().iter().take(box_rows).enumerate() {
            let glyphs: Vec<char> = if mirrored {
                mirror_row(line, width)
            } else {
                line.chars().collect()
            };
            for (dx, ch) in glyphs.into_iter().take(box_cols).enumerate() {
                if ch != ' ' {
                    self.put(c0 + dx as i32, r0 + dy as i32, ch.encode_utf8(&mut [0; 4]))?;
                }
            }
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        align: TextAlign,
        color: canvas::Color,
    ) -> std::io::Result<()> {
        let len = text.chars().count() as i32;
        let col = match align {
            TextAlign::Left => self.col(x),
            TextAlign::Center => self.col(x) - len / 2,
        };
        let row = self.row(y);

        self.out.queue(style::SetForegroundColor(term_color(color)))?;
        if size >= LARGE_TEXT {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        // Clip per character so long lines still show their visible part.
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch.encode_utf8(&mut [0; 4]))?;
        }
        if size >= LARGE_TEXT {
            self.out.queue(style::SetAttribute(Attribute::NormalIntensity))?;
        }
        Ok(())
    }
}
