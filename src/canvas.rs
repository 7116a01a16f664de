use crate::color::Color;
use crate::error::RenderError;
use png::{BitDepth, ColorType, Encoder as PngEncoder};
use std::path::Path;

/// Mutable RGBA pixel buffer that one diagram composition draws into.
///
/// Every primitive clips silently: out-of-bounds writes are no-ops, never
/// errors, so hand-authored coordinate scripts tolerate minor overshoot.
/// The canvas is owned by the generating call and dropped after encoding.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            pixels.extend_from_slice(&[background.r, background.g, background.b, background.a]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let i = self.offset(x, y)?;
        Some(Color::rgba(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ))
    }

    /// Overwrites one pixel, ignoring the source alpha.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = color.r;
            self.pixels[i + 1] = color.g;
            self.pixels[i + 2] = color.b;
            self.pixels[i + 3] = color.a;
        }
    }

    /// Alpha-over composite of `color` onto the existing pixel:
    /// `out = src*a + dst*(1-a)` per channel.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        let a = color.a as u32;
        if a == 0 {
            return;
        }
        if a == 255 {
            self.set_pixel(x, y, color);
            return;
        }
        let Some(i) = self.offset(x, y) else {
            return;
        };
        let inv = 255 - a;
        let mix = |src: u8, dst: u8| ((src as u32 * a + dst as u32 * inv + 127) / 255) as u8;
        self.pixels[i] = mix(color.r, self.pixels[i]);
        self.pixels[i + 1] = mix(color.g, self.pixels[i + 1]);
        self.pixels[i + 2] = mix(color.b, self.pixels[i + 2]);
        self.pixels[i + 3] = (a + self.pixels[i + 3] as u32 * inv / 255).min(255) as u8;
    }

    /// Fills the inclusive horizontal run `[x0, x1]` on row `y`, clamped to
    /// the canvas. Rows outside the canvas are skipped entirely.
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        if y < 0 || y >= self.height as i32 || x1 < x0 {
            return;
        }
        let lo = x0.max(0);
        let hi = x1.min(self.width as i32 - 1);
        if color.a == 255 {
            for x in lo..=hi {
                self.set_pixel(x, y, color);
            }
        } else {
            for x in lo..=hi {
                self.blend_pixel(x, y, color);
            }
        }
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        let mut encoder = PngEncoder::new(&mut bytes, self.width, self.height);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        writer.finish()?;
        Ok(bytes)
    }

    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_background_colored() {
        let bg = Color::rgb(248, 250, 252);
        let canvas = Canvas::new(4, 3, bg);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), Some(bg));
            }
        }
    }

    #[test]
    fn out_of_bounds_writes_are_noops() {
        let bg = Color::WHITE;
        let mut canvas = Canvas::new(2, 2, bg);
        canvas.set_pixel(-1, 0, Color::BLACK);
        canvas.set_pixel(0, -1, Color::BLACK);
        canvas.set_pixel(2, 0, Color::BLACK);
        canvas.set_pixel(0, 2, Color::BLACK);
        canvas.blend_pixel(99, 99, Color::BLACK);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(canvas.pixel(x, y), Some(bg));
            }
        }
        assert_eq!(canvas.pixel(5, 5), None);
    }

    #[test]
    fn blend_is_alpha_over() {
        let mut canvas = Canvas::new(1, 1, Color::WHITE);
        canvas.blend_pixel(0, 0, Color::rgba(0, 0, 0, 128));
        let px = canvas.pixel(0, 0).unwrap();
        // 50% black over white lands mid-gray.
        assert!((px.r as i32 - 128).abs() <= 1, "got {px:?}");
        assert_eq!(px.r, px.g);
        assert_eq!(px.g, px.b);
    }

    #[test]
    fn blend_with_zero_alpha_changes_nothing() {
        let mut canvas = Canvas::new(1, 1, Color::rgb(10, 20, 30));
        canvas.blend_pixel(0, 0, Color::rgba(255, 0, 0, 0));
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(10, 20, 30)));
    }

    #[test]
    fn fill_span_clamps_to_row() {
        let mut canvas = Canvas::new(4, 2, Color::WHITE);
        canvas.fill_span(0, -10, 10, Color::BLACK);
        canvas.fill_span(5, 0, 3, Color::BLACK);
        for x in 0..4 {
            assert_eq!(canvas.pixel(x, 0), Some(Color::BLACK));
            assert_eq!(canvas.pixel(x, 1), Some(Color::WHITE));
        }
    }

    #[test]
    fn encode_png_has_signature() {
        let canvas = Canvas::new(8, 8, Color::WHITE);
        let bytes = canvas.encode_png().unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }
}
