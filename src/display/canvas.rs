/// RGB pixel buffer presented with upper-half blocks: every terminal cell
/// shows two vertically stacked pixels (foreground = top, background =
/// bottom).  Drawing calls take logical game coordinates and are scaled to
/// whatever terminal size the buffer was built for.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
};

use crate::config::Rgb;
use crate::entities::Rect;
use crate::scenery::sky_color;

pub fn term_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

pub struct Canvas {
    w: usize,
    h: usize,
    px: Vec<Rgb>,
    /// Logical size being mapped onto the pixel grid.
    world: (f32, f32),
    sx: f32,
    sy: f32,
}

impl Canvas {
    /// A canvas covering `cols` × `rows` terminal cells that maps a logical
    /// `world_w` × `world_h` screen onto them.
    pub fn new(cols: u16, rows: u16, world_w: f32, world_h: f32) -> Self {
        let w = cols as usize;
        let h = rows as usize * 2;
        let sx = if world_w > 0.0 { w as f32 / world_w } else { 0.0 };
        let sy = if world_h > 0.0 { h as f32 / world_h } else { 0.0 };
        Self {
            w,
            h,
            px: vec![(0, 0, 0); w * h],
            world: (world_w, world_h),
            sx,
            sy,
        }
    }

    pub fn cols(&self) -> usize {
        self.w
    }

    pub fn rows(&self) -> usize {
        self.h / 2
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.w && y < self.h {
            Some(self.px[y * self.w + x])
        } else {
            None
        }
    }

    fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    /// Terminal cell containing the logical point `(x, y)`.
    pub fn cell_of(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x * self.sx).max(0.0) as u16;
        let row = (y * self.sy / 2.0).max(0.0) as u16;
        (col, row)
    }

    /// Colour of the upper pixel of a cell, used as text background.  Cells
    /// outside the buffer read as black.
    pub fn cell_color(&self, col: usize, row: usize) -> Rgb {
        self.get(col, row * 2).unwrap_or_default()
    }

    // ── Shapes (logical coordinates) ─────────────────────────────────────────

    pub fn fill(&mut self, c: Rgb) {
        self.px.iter_mut().for_each(|p| *p = c);
    }

    /// Vertical gradient over the whole buffer, one colour per pixel row.
    pub fn fill_gradient(&mut self, top: Rgb, bottom: Rgb) {
        for py in 0..self.h {
            let y = (py as f32 + 0.5) / self.sy;
            let c = sky_color(top, bottom, y, self.world.1);
            self.px[py * self.w..(py + 1) * self.w].fill(c);
        }
    }

    /// Pixel span covered by `[start, start + len)`, never thinner than one
    /// pixel so small shapes don't vanish at low resolutions.
    fn span(start: f32, len: f32, scale: f32) -> (i32, i32) {
        let a = (start * scale).round() as i32;
        let b = ((start + len) * scale).round() as i32;
        (a, b.max(a + 1))
    }

    pub fn fill_rect(&mut self, r: &Rect, c: Rgb) {
        let (x0, x1) = Self::span(r.x, r.w, self.sx);
        let (y0, y1) = Self::span(r.y, r.h, self.sy);
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, c);
            }
        }
    }

    /// Outline drawn inside the rectangle, `thickness` logical pixels wide.
    pub fn stroke_rect(&mut self, r: &Rect, thickness: f32, c: Rgb) {
        let t = thickness.min(r.w / 2.0).min(r.h / 2.0);
        self.fill_rect(&Rect::new(r.x, r.y, r.w, t), c);
        self.fill_rect(&Rect::new(r.x, r.bottom() - t, r.w, t), c);
        self.fill_rect(&Rect::new(r.x, r.y, t, r.h), c);
        self.fill_rect(&Rect::new(r.right() - t, r.y, t, r.h), c);
    }

    /// Rectangle with rounded corners of logical radius `radius`.
    pub fn fill_round_rect(&mut self, r: &Rect, radius: f32, c: Rgb) {
        let rad = radius.min(r.w / 2.0).min(r.h / 2.0).max(0.0);
        let (x0, x1) = Self::span(r.x, r.w, self.sx);
        let (y0, y1) = Self::span(r.y, r.h, self.sy);
        for py in y0..y1 {
            for px in x0..x1 {
                let (wx, wy) = self.to_world(px, py);
                // Distance from the nearest corner-circle centre.
                let cx = wx.clamp(r.x + rad, r.right() - rad);
                let cy = wy.clamp(r.y + rad, r.bottom() - rad);
                if (wx - cx).hypot(wy - cy) <= rad {
                    self.set(px, py, c);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, c: Rgb) {
        let bounds = Rect::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
        let (x0, x1) = Self::span(bounds.x, bounds.w, self.sx);
        let (y0, y1) = Self::span(bounds.y, bounds.h, self.sy);
        for py in y0..y1 {
            for px in x0..x1 {
                let (wx, wy) = self.to_world(px, py);
                if (wx - cx).hypot(wy - cy) <= radius {
                    self.set(px, py, c);
                }
            }
        }
        // Always light the centre pixel so tiny circles stay visible.
        self.set((cx * self.sx) as i32, (cy * self.sy) as i32, c);
    }

    /// Logical coordinates of a pixel's centre.
    fn to_world(&self, px: i32, py: i32) -> (f32, f32) {
        let wx = if self.sx > 0.0 { (px as f32 + 0.5) / self.sx } else { 0.0 };
        let wy = if self.sy > 0.0 { (py as f32 + 0.5) / self.sy } else { 0.0 };
        (wx, wy)
    }

    // ── Output ───────────────────────────────────────────────────────────────

    /// Queue the whole buffer from the top-left corner.  Colour changes are
    /// only emitted when they differ from the previous cell.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.rows();
        let mut prev_fg: Option<Rgb> = None;
        let mut prev_bg: Option<Rgb> = None;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.px[row * 2 * self.w + col];
                let bot = self.px[(row * 2 + 1) * self.w + col];

                if prev_bg != Some(bot) {
                    queue!(out, style::SetBackgroundColor(term_color(bot)))?;
                    prev_bg = Some(bot);
                }
                if top == bot {
                    queue!(out, style::Print(' '))?;
                } else {
                    if prev_fg != Some(top) {
                        queue!(out, style::SetForegroundColor(term_color(top)))?;
                        prev_fg = Some(top);
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                prev_fg = None;
                prev_bg = None;
            }
        }
        queue!(out, style::ResetColor)?;
        Ok(())
    }
}
