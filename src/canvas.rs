/// The drawing surface the game renders onto.
///
/// Coordinates are arena pixels.  Implementations map them onto whatever
/// they actually draw to; the simulation never sees the difference.

use std::io;

use crate::assets::Image;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Yellow,
    Red,
    Green,
    Blue,
    Orange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

pub trait Canvas {
    /// Wipe the whole arena.
    fn clear(&mut self) -> io::Result<()>;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) -> io::Result<()>;

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) -> io::Result<()>;

    /// Draw `image` into the `w`×`h` box at (`x`, `y`).  With `mirrored` the
    /// image is flipped horizontally about its own box.  An empty image
    /// draws nothing.
    fn draw_image(
        &mut self,
        image: &Image,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        mirrored: bool,
    ) -> io::Result<()>;

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        align: TextAlign,
        color: Color,
    ) -> io::Result<()>;
}

// ── Recording canvas ──────────────────────────────────────────────────────────

/// One recorded call against a `Recorder`.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    Circle { cx: f32, cy: f32, radius: f32, color: Color },
    Image { x: f32, y: f32, w: f32, h: f32, mirrored: bool, loaded: bool },
    Text { text: String, x: f32, y: f32, size: f32, align: TextAlign, color: Color },
}

/// Headless canvas that keeps every call in order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    /// Calls since the most recent `clear`, i.e. what is on screen now.
    pub fn current_frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == DrawCall::Clear)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.calls[start..]
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for Recorder {
    fn clear(&mut self) -> io::Result<()> {
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) -> io::Result<()> {
        self.calls.push(DrawCall::Rect { x, y, w, h, color });
        Ok(())
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) -> io::Result<()> {
        self.calls.push(DrawCall::Circle { cx, cy, radius, color });
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
    ) -> io::Result<()> {
        self.calls.push(DrawCall::Image {
            x,
            y,
            w,
            h,
            mirrored,
            loaded: image.is_loaded(),
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        align: TextAlign,
        color: Color,
    ) -> io::Result<()> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            size,
            align,
            color,
        });
        Ok(())
    }
}
