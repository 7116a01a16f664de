//! Drop shadows: the shape's silhouette, offset and Gaussian-blurred, is
//! composited beneath the shape as translucent black.
//!
//! The blur is separable (one horizontal pass, one vertical) and runs only
//! over the silhouette's inflated bounding box, never the full canvas.

use super::{shapes, Shape};
use crate::canvas::Canvas;
use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub dx: f32,
    pub dy: f32,
    pub sigma: f32,
    pub opacity: u8,
}

impl Shadow {
    pub const fn new(dx: f32, dy: f32, sigma: f32, opacity: u8) -> Self {
        Self {
            dx,
            dy,
            sigma,
            opacity,
        }
    }

    /// The soft offset used under panels and state boxes.
    pub const fn soft() -> Self {
        Self::new(6.0, 8.0, 6.0, 70)
    }
}

/// Draws `shape` with its shadow underneath. Opacity 0 skips the shadow
/// pass entirely, leaving the canvas pixel-identical to a plain draw;
/// sigma 0 produces a hard-edged offset silhouette.
pub fn with_shadow(canvas: &mut Canvas, shape: &Shape, shadow: Shadow) {
    if shadow.opacity > 0 {
        composite_shadow(canvas, shape, shadow);
    }
    shapes::draw_shape(canvas, shape);
}

fn composite_shadow(canvas: &mut Canvas, shape: &Shape, shadow: Shadow) {
    let pad = (3.0 * shadow.sigma.max(0.0)).ceil() as i32 + 1;
    let silhouette = shape.translated(shadow.dx, shadow.dy);
    let bounds = silhouette.bounds();
    let x0 = bounds.x0.floor() as i32 - pad;
    let y0 = bounds.y0.floor() as i32 - pad;
    let w = (bounds.x1.ceil() as i32 + pad - x0).max(0) as usize;
    let h = (bounds.y1.ceil() as i32 + pad - y0).max(0) as usize;
    if w == 0 || h == 0 {
        return;
    }

    // Full-coverage silhouette mask; the shape's own fill alpha plays no
    // part in its shadow.
    let mut mask = vec![0.0f32; w * h];
    shapes::for_each_span(&silhouette, |y, sx0, sx1| {
        if y < y0 || y >= y0 + h as i32 {
            return;
        }
        let row = (y - y0) as usize * w;
        let lo = sx0.max(x0);
        let hi = sx1.min(x0 + w as i32 - 1);
        for x in lo..=hi {
            mask[row + (x - x0) as usize] = 1.0;
        }
    });

    if shadow.sigma > 0.0 {
        let kernel = gaussian_kernel(shadow.sigma);
        let mut scratch = vec![0.0f32; w * h];
        blur_rows(&mask, &mut scratch, w, h, &kernel);
        blur_cols(&scratch, &mut mask, w, h, &kernel);
    }

    let opacity = shadow.opacity as f32;
    for my in 0..h {
        for mx in 0..w {
            let coverage = mask[my * w + mx];
            if coverage <= 0.0 {
                continue;
            }
            let alpha = (coverage * opacity).round().min(255.0) as u8;
            if alpha > 0 {
                canvas.blend_pixel(x0 + mx as i32, y0 + my as i32, Color::rgba(0, 0, 0, alpha));
            }
        }
    }
}

/// Normalized 1D Gaussian with kernel radius `ceil(3*sigma)`.
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (3.0 * sigma).ceil() as i32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}

fn blur_rows(src: &[f32], dst: &mut [f32], w: usize, h: usize, kernel: &[f32]) {
    let radius = (kernel.len() / 2) as i32;
    for y in 0..h {
        let row = y * w;
        for x in 0..w {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let sx = x as i32 + k as i32 - radius;
                if sx >= 0 && (sx as usize) < w {
                    acc += src[row + sx as usize] * weight;
                }
            }
            dst[row + x] = acc;
        }
    }
}

fn blur_cols(src: &[f32], dst: &mut [f32], w: usize, h: usize, kernel: &[f32]) {
    let radius = (kernel.len() / 2) as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let sy = y as i32 + k as i32 - radius;
                if sy >= 0 && (sy as usize) < h {
                    acc += src[sy as usize * w + x] * weight;
                }
            }
            dst[y * w + x] = acc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Rect, Style};

    fn box_shape(rect: Rect, fill: Color) -> Shape {
        Shape::RoundedRect {
            rect,
            style: Style::solid(fill).rounded(8.0),
        }
    }

    fn pixels(canvas: &Canvas) -> Vec<Option<Color>> {
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .map(|(x, y)| canvas.pixel(x, y))
            .collect()
    }

    #[test]
    fn zero_opacity_matches_plain_draw_exactly() {
        let shape = box_shape(Rect::new(20.0, 20.0, 80.0, 60.0), Color::rgb(37, 99, 235));
        let mut plain = Canvas::new(120, 100, Color::WHITE);
        shapes::draw_shape(&mut plain, &shape);
        let mut shadowed = Canvas::new(120, 100, Color::WHITE);
        with_shadow(&mut shadowed, &shape, Shadow::new(6.0, 8.0, 6.0, 0));
        assert_eq!(pixels(&plain), pixels(&shadowed));
    }

    #[test]
    fn zero_sigma_gives_hard_offset_silhouette() {
        let shape = Shape::RoundedRect {
            rect: Rect::new(20.0, 20.0, 60.0, 60.0),
            style: Style::solid(Color::rgb(220, 38, 38)),
        };
        let mut canvas = Canvas::new(100, 100, Color::WHITE);
        with_shadow(&mut canvas, &shape, Shadow::new(20.0, 20.0, 0.0, 255));
        // Inside the offset silhouette but outside the shape: solid black.
        assert_eq!(canvas.pixel(70, 70), Some(Color::rgba(0, 0, 0, 255)));
        // The shape paints over its own shadow.
        assert_eq!(canvas.pixel(30, 30), Some(Color::rgb(220, 38, 38)));
        // Beyond the silhouette nothing changes.
        assert_eq!(canvas.pixel(90, 90), Some(Color::WHITE));
    }

    #[test]
    fn blur_spreads_partial_coverage_past_the_edge() {
        let shape = Shape::RoundedRect {
            rect: Rect::new(30.0, 30.0, 70.0, 70.0),
            style: Style::solid(Color::rgb(5, 150, 105)),
        };
        let mut canvas = Canvas::new(120, 120, Color::WHITE);
        with_shadow(&mut canvas, &shape, Shadow::new(10.0, 10.0, 4.0, 200));
        // A few pixels past the offset silhouette edge: darker than the
        // background but not fully dark.
        let px = canvas.pixel(84, 50).unwrap();
        assert!(px.r < 255, "blur should darken past the edge, got {px:?}");
        assert!(px.r > 40, "far edge should only be partially covered, got {px:?}");
        assert_eq!(px.r, px.g);
        assert_eq!(px.g, px.b);
    }

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let kernel = gaussian_kernel(3.0);
        assert_eq!(kernel.len(), 19);
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        for i in 0..kernel.len() / 2 {
            assert_eq!(kernel[i], kernel[kernel.len() - 1 - i]);
        }
    }
}
