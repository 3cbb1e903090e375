//! Pixel-buffer primitives.
//!
//! Everything here paints straight into a [`PixelBuffer`]; nothing is retained between
//! calls. Coordinates are signed so shapes may hang off the canvas edges.

use crate::error::{Error, Result};
use crate::font::{GLYPH_CELL, glyph_bit, glyph_rows};
use crate::theme::Color;

/// Row-major RGB canvas, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub const CHANNELS: usize = 3;

    /// Allocates a `width x height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvas { width, height });
        }
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(Self::CHANNELS))
            .ok_or(Error::AllocationFailure {
                width,
                height,
                bytes: usize::MAX,
            })?;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| Error::AllocationFailure {
                width,
                height,
                bytes,
            })?;
        let [r, g, b] = background.channels();
        for _ in 0..bytes / Self::CHANNELS {
            data.extend_from_slice(&[r, g, b]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn row_stride(&self) -> usize {
        self.width as usize * Self::CHANNELS
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Reads back one pixel; `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        let px = &self.data[idx..idx + Self::CHANNELS];
        Some(Color::rgb(px[0], px[1], px[2]))
    }

    /// Counts pixels equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        let [r, g, b] = color.channels();
        self.data
            .chunks_exact(Self::CHANNELS)
            .filter(|px| px[0] == r && px[1] == g && px[2] == b)
            .count()
    }
}

/// Writes one pixel.
///
/// `x` is clipped to `[0, width)` and negative `y` is dropped. There is no explicit test of
/// `y` against the height: a row past the end of the canvas lands outside the backing
/// storage and is discarded there.
pub fn set_pixel(buf: &mut PixelBuffer, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x as u32 >= buf.width {
        return;
    }
    let Some(idx) = (y as usize)
        .checked_mul(buf.width as usize)
        .and_then(|row| row.checked_add(x as usize))
        .and_then(|px| px.checked_mul(PixelBuffer::CHANNELS))
    else {
        return;
    };
    if let Some(px) = buf.data.get_mut(idx..idx + PixelBuffer::CHANNELS) {
        px.copy_from_slice(&color.channels());
    }
}

pub fn fill_rect(buf: &mut PixelBuffer, x: i32, y: i32, w: i32, h: i32, color: Color) {
    for j in 0..h {
        for i in 0..w {
            set_pixel(buf, x.saturating_add(i), y.saturating_add(j), color);
        }
    }
}

/// Integer Bresenham line, both endpoints included.
pub fn draw_line(buf: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let (mut x, mut y) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        set_pixel(buf, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Shaft from `(x0, y0)` to `(x1, y1)` with two fixed barbs pointing up-left and up-right
/// from the tip. The barbs do not follow the shaft direction.
pub fn draw_arrow(buf: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    draw_line(buf, x0, y0, x1, y1, color);
    draw_line(buf, x1, y1, x1 - ARROW_BARB, y1 - ARROW_BARB, color);
    draw_line(buf, x1, y1, x1 + ARROW_BARB, y1 - ARROW_BARB, color);
}

const ARROW_BARB: i32 = 5;

/// Paints one glyph with its top-left cell corner at `(x, y)`; every lit bit becomes a
/// `scale x scale` block. Characters without a table entry leave the cell blank.
pub fn draw_glyph(buf: &mut PixelBuffer, x: i32, y: i32, ch: char, scale: i32, color: Color) {
    let Some(rows) = glyph_rows(ch) else {
        return;
    };
    let cell = GLYPH_CELL as usize;
    for row in 0..cell {
        for col in 0..cell {
            if glyph_bit(rows, row, col) {
                fill_rect(
                    buf,
                    x.saturating_add((col as i32).saturating_mul(scale)),
                    y.saturating_add((row as i32).saturating_mul(scale)),
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
}

/// Draws `text` left to right, one `8 * scale` cell per character, and returns the cursor
/// x after the last character.
pub fn draw_text(
    buf: &mut PixelBuffer,
    x: i32,
    y: i32,
    text: &str,
    scale: i32,
    color: Color,
) -> i32 {
    let mut cursor = x;
    for ch in text.chars() {
        draw_glyph(buf, cursor, y, ch, scale, color);
        cursor = cursor.saturating_add(GLYPH_CELL.saturating_mul(scale));
    }
    cursor
}
