//! Scanline rasterization for the shape variants.
//!
//! All geometry is sampled at pixel centers: pixel `x` on a row is covered
//! when `x + 0.5` lies inside the half-open horizontal interval of the shape
//! at that row. Fills and shadow silhouettes share the same span generator,
//! so a shadow always matches the footprint of the shape above it.

use super::{Fill, Point, Rect, Shape, Style};
use crate::canvas::Canvas;
use crate::color::Color;

/// First pixel index whose center lies at or after `edge`.
#[inline]
fn first_index(edge: f32) -> i32 {
    (edge - 0.5).ceil() as i32
}

/// Last pixel index whose center lies strictly before `edge`.
#[inline]
fn last_index(edge: f32) -> i32 {
    (edge - 0.5).ceil() as i32 - 1
}

fn clamp_radius(rect: &Rect, radius: f32) -> f32 {
    radius.clamp(0.0, rect.width().min(rect.height()) / 2.0)
}

/// Horizontal span of a rounded rect on row `y`, or `None` when the row is
/// outside the rect or fully consumed by the corner insets.
fn rounded_row_span(rect: &Rect, radius: f32, y: i32) -> Option<(i32, i32)> {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let cy = y as f32 + 0.5;
    if cy < rect.y0 || cy >= rect.y1 {
        return None;
    }
    let inset = if cy < rect.y0 + radius {
        let dy = rect.y0 + radius - cy;
        radius - (radius * radius - dy * dy).max(0.0).sqrt()
    } else if cy > rect.y1 - radius {
        let dy = cy - (rect.y1 - radius);
        radius - (radius * radius - dy * dy).max(0.0).sqrt()
    } else {
        0.0
    };
    let x0 = first_index(rect.x0 + inset);
    let x1 = last_index(rect.x1 - inset);
    (x0 <= x1).then_some((x0, x1))
}

fn circle_row_span(center: Point, radius: f32, y: i32) -> Option<(i32, i32)> {
    if radius <= 0.0 {
        return None;
    }
    let dy = y as f32 + 0.5 - center.y;
    let rr = radius * radius - dy * dy;
    if rr <= 0.0 {
        return None;
    }
    let half = rr.sqrt();
    let x0 = first_index(center.x - half);
    let x1 = last_index(center.x + half);
    (x0 <= x1).then_some((x0, x1))
}

/// Even-odd scanline fill: crossings of each row's center line against the
/// closed edge loop, sorted and paired into spans.
fn polygon_spans(points: &[Point], mut f: impl FnMut(i32, i32, i32)) {
    if points.len() < 3 {
        return;
    }
    let (mut min_y, mut max_y) = (f32::MAX, f32::MIN);
    for p in points {
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
    for y in first_index(min_y)..=last_index(max_y) {
        let cy = y as f32 + 0.5;
        crossings.clear();
        for i in 0..points.len() {
            let p = points[i];
            let q = points[(i + 1) % points.len()];
            if (p.y <= cy) != (q.y <= cy) {
                crossings.push(p.x + (cy - p.y) * (q.x - p.x) / (q.y - p.y));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let x0 = first_index(pair[0]);
            let x1 = last_index(pair[1]);
            if x0 <= x1 {
                f(y, x0, x1);
            }
        }
    }
}

fn stroke_quad(from: Point, to: Point, width: f32) -> Option<[Point; 4]> {
    let d = to - from;
    let len = d.length();
    if len == 0.0 {
        return None;
    }
    let o = Point::new(-d.y / len, d.x / len) * (width / 2.0);
    Some([from + o, to + o, to - o, from - o])
}

fn line_width(style: &Style) -> f32 {
    style.outline_width.max(1.0)
}

fn stroke_color(style: &Style) -> Option<Color> {
    style.outline.or(match style.fill {
        Some(Fill::Solid(color)) => Some(color),
        Some(Fill::Vertical { top, .. }) => Some(top),
        None => None,
    })
}

/// Emits the silhouette spans of `shape` (full coverage, style ignored
/// except for line stroke width). The shadow compositor offsets and blurs
/// exactly these spans.
pub(crate) fn for_each_span(shape: &Shape, mut f: impl FnMut(i32, i32, i32)) {
    match shape {
        Shape::RoundedRect { rect, style } => {
            let r = clamp_radius(rect, style.corner_radius);
            for y in first_index(rect.y0)..=last_index(rect.y1) {
                if let Some((x0, x1)) = rounded_row_span(rect, r, y) {
                    f(y, x0, x1);
                }
            }
        }
        Shape::Pill { rect, .. } => {
            let r = rect.height() / 2.0;
            for y in first_index(rect.y0)..=last_index(rect.y1) {
                if let Some((x0, x1)) = rounded_row_span(rect, clamp_radius(rect, r), y) {
                    f(y, x0, x1);
                }
            }
        }
        Shape::Diamond { center, half, .. } => {
            polygon_spans(&diamond_points(*center, *half), f);
        }
        Shape::Circle { center, radius, .. } => {
            for y in first_index(center.y - radius)..=last_index(center.y + radius) {
                if let Some((x0, x1)) = circle_row_span(*center, *radius, y) {
                    f(y, x0, x1);
                }
            }
        }
        Shape::Line { from, to, style } => {
            if let Some(quad) = stroke_quad(*from, *to, line_width(style)) {
                polygon_spans(&quad, f);
            }
        }
        Shape::Polygon { points, .. } => polygon_spans(points, f),
    }
}

fn diamond_points(center: Point, half: f32) -> [Point; 4] {
    [
        Point::new(center.x, center.y - half),
        Point::new(center.x + half, center.y),
        Point::new(center.x, center.y + half),
        Point::new(center.x - half, center.y),
    ]
}

/// Paints every silhouette span with the style's fill. The gradient ratio
/// runs over the shape's own rows, so the first painted row is exactly the
/// top color and the last exactly the bottom one.
fn paint_fill(canvas: &mut Canvas, shape: &Shape, fill: &Fill) {
    let bounds = shape.bounds();
    let y_first = first_index(bounds.y0);
    let y_last = last_index(bounds.y1);
    let denom = (y_last - y_first).max(1) as f32;
    for_each_span(shape, |y, x0, x1| {
        let t = (y - y_first) as f32 / denom;
        canvas.fill_span(y, x0, x1, fill.at(t));
    });
}

fn paint_rounded_outline(
    canvas: &mut Canvas,
    rect: &Rect,
    radius: f32,
    color: Color,
    width: f32,
) {
    let inner = rect.inflated(-width);
    let inner_radius = (radius - width).max(0.0);
    for y in first_index(rect.y0)..=last_index(rect.y1) {
        let Some((ox0, ox1)) = rounded_row_span(rect, radius, y) else {
            continue;
        };
        match rounded_row_span(&inner, inner_radius, y) {
            Some((ix0, ix1)) => {
                if ox0 < ix0 {
                    canvas.fill_span(y, ox0, ix0 - 1, color);
                }
                if ix1 < ox1 {
                    canvas.fill_span(y, ix1 + 1, ox1, color);
                }
            }
            None => canvas.fill_span(y, ox0, ox1, color),
        }
    }
}

fn paint_circle_outline(canvas: &mut Canvas, center: Point, radius: f32, color: Color, width: f32) {
    let inner_radius = (radius - width).max(0.0);
    for y in first_index(center.y - radius)..=last_index(center.y + radius) {
        let Some((ox0, ox1)) = circle_row_span(center, radius, y) else {
            continue;
        };
        match circle_row_span(center, inner_radius, y) {
            Some((ix0, ix1)) => {
                if ox0 < ix0 {
                    canvas.fill_span(y, ox0, ix0 - 1, color);
                }
                if ix1 < ox1 {
                    canvas.fill_span(y, ix1 + 1, ox1, color);
                }
            }
            None => canvas.fill_span(y, ox0, ox1, color),
        }
    }
}

/// Strokes a closed point loop edge by edge, with a dot at each vertex so
/// thick outlines do not leave notched corners.
fn paint_edge_outline(canvas: &mut Canvas, points: &[Point], color: Color, width: f32) {
    for i in 0..points.len() {
        let from = points[i];
        let to = points[(i + 1) % points.len()];
        if let Some(quad) = stroke_quad(from, to, width) {
            polygon_spans(&quad, |y, x0, x1| canvas.fill_span(y, x0, x1, color));
        }
    }
    if width > 1.0 {
        for p in points {
            for y in first_index(p.y - width / 2.0)..=last_index(p.y + width / 2.0) {
                if let Some((x0, x1)) = circle_row_span(*p, width / 2.0, y) {
                    canvas.fill_span(y, x0, x1, color);
                }
            }
        }
    }
}

/// Draws one shape: fill first, outline ring on top. A style with neither
/// is a no-op.
pub fn draw_shape(canvas: &mut Canvas, shape: &Shape) {
    let style = *shape.style();

    if let Shape::Line { from, to, .. } = shape {
        if let Some(color) = stroke_color(&style) {
            if let Some(quad) = stroke_quad(*from, *to, line_width(&style)) {
                polygon_spans(&quad, |y, x0, x1| canvas.fill_span(y, x0, x1, color));
            }
        }
        return;
    }

    if let Some(fill) = style.fill {
        paint_fill(canvas, shape, &fill);
    }

    let Some(outline) = style.outline else {
        return;
    };
    if style.outline_width <= 0.0 {
        return;
    }
    let width = style.outline_width;
    match shape {
        Shape::RoundedRect { rect, .. } => {
            let r = clamp_radius(rect, style.corner_radius);
            paint_rounded_outline(canvas, rect, r, outline, width);
        }
        Shape::Pill { rect, .. } => {
            let r = clamp_radius(rect, rect.height() / 2.0);
            paint_rounded_outline(canvas, rect, r, outline, width);
        }
        Shape::Diamond { center, half, .. } => {
            paint_edge_outline(canvas, &diamond_points(*center, *half), outline, width);
        }
        Shape::Circle { center, radius, .. } => {
            paint_circle_outline(canvas, *center, *radius, outline, width);
        }
        Shape::Polygon { points, .. } => paint_edge_outline(canvas, points, outline, width),
        Shape::Line { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_canvas(w: u32, h: u32) -> Canvas {
        Canvas::new(w, h, Color::WHITE)
    }

    #[test]
    fn rounded_rect_fills_interior_and_skips_corners() {
        let mut canvas = white_canvas(120, 60);
        let fill = Color::rgb(37, 99, 235);
        draw_shape(
            &mut canvas,
            &Shape::RoundedRect {
                rect: Rect::new(0.0, 0.0, 100.0, 50.0),
                style: Style::solid(fill).rounded(10.0),
            },
        );
        assert_eq!(canvas.pixel(50, 25), Some(fill));
        assert_eq!(canvas.pixel(50, 0), Some(fill));
        // Corner pixel stays outside the radius-10 arc.
        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(99, 49), Some(Color::WHITE));
        // Nothing painted past the half-open edges.
        assert_eq!(canvas.pixel(100, 25), Some(Color::WHITE));
        assert_eq!(canvas.pixel(50, 50), Some(Color::WHITE));
    }

    #[test]
    fn gradient_rows_hit_exact_endpoint_colors() {
        let mut canvas = white_canvas(60, 40);
        let top = Color::rgb(200, 40, 40);
        let bottom = Color::rgb(40, 40, 200);
        draw_shape(
            &mut canvas,
            &Shape::RoundedRect {
                rect: Rect::new(10.0, 5.0, 50.0, 35.0),
                style: Style::gradient(top, bottom).rounded(6.0),
            },
        );
        assert_eq!(canvas.pixel(30, 5), Some(top));
        assert_eq!(canvas.pixel(30, 34), Some(bottom));
    }

    #[test]
    fn oversized_radius_clamps_to_pill() {
        let mut canvas = white_canvas(120, 60);
        draw_shape(
            &mut canvas,
            &Shape::RoundedRect {
                rect: Rect::new(10.0, 10.0, 110.0, 50.0),
                style: Style::solid(Color::BLACK).rounded(500.0),
            },
        );
        // Midpoint of the left cap edge is painted, the bbox corner is not.
        assert_eq!(canvas.pixel(10, 30), Some(Color::BLACK));
        assert_eq!(canvas.pixel(10, 10), Some(Color::WHITE));
    }

    #[test]
    fn outline_ring_sits_on_top_of_fill() {
        let mut canvas = white_canvas(120, 60);
        let fill = Color::rgb(37, 99, 235);
        let edge = Color::rgb(29, 78, 216);
        draw_shape(
            &mut canvas,
            &Shape::RoundedRect {
                rect: Rect::new(0.0, 0.0, 100.0, 50.0),
                style: Style::solid(fill).rounded(10.0).outlined(edge, 2.0),
            },
        );
        assert_eq!(canvas.pixel(50, 1), Some(edge));
        assert_eq!(canvas.pixel(50, 48), Some(edge));
        assert_eq!(canvas.pixel(1, 25), Some(edge));
        assert_eq!(canvas.pixel(50, 25), Some(fill));
    }

    #[test]
    fn circle_spans_are_symmetric() {
        let mut canvas = white_canvas(40, 40);
        draw_shape(
            &mut canvas,
            &Shape::Circle {
                center: Point::new(20.0, 20.0),
                radius: 10.0,
                style: Style::solid(Color::BLACK),
            },
        );
        for (x, y) in [(20, 20), (12, 20), (27, 20), (20, 12), (20, 27)] {
            assert_eq!(canvas.pixel(x, y), Some(Color::BLACK), "at ({x},{y})");
        }
        assert_eq!(canvas.pixel(20, 31), Some(Color::WHITE));
        assert_eq!(canvas.pixel(9, 9), Some(Color::WHITE));
    }

    #[test]
    fn diamond_covers_center_not_bbox_corner() {
        let mut canvas = white_canvas(60, 60);
        draw_shape(
            &mut canvas,
            &Shape::Diamond {
                center: Point::new(30.0, 30.0),
                half: 20.0,
                style: Style::solid(Color::BLACK),
            },
        );
        assert_eq!(canvas.pixel(30, 30), Some(Color::BLACK));
        assert_eq!(canvas.pixel(30, 12), Some(Color::BLACK));
        assert_eq!(canvas.pixel(11, 11), Some(Color::WHITE));
    }

    #[test]
    fn horizontal_line_paints_requested_thickness() {
        let mut canvas = white_canvas(60, 20);
        draw_shape(
            &mut canvas,
            &Shape::Line {
                from: Point::new(5.0, 10.0),
                to: Point::new(55.0, 10.0),
                style: Style::stroke(Color::BLACK, 4.0),
            },
        );
        let painted: Vec<i32> = (0..20)
            .filter(|&y| canvas.pixel(30, y) == Some(Color::BLACK))
            .collect();
        assert_eq!(painted, vec![8, 9, 10, 11]);
    }

    #[test]
    fn zero_length_line_is_a_noop() {
        let mut canvas = white_canvas(10, 10);
        draw_shape(
            &mut canvas,
            &Shape::Line {
                from: Point::new(5.0, 5.0),
                to: Point::new(5.0, 5.0),
                style: Style::stroke(Color::BLACK, 3.0),
            },
        );
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(canvas.pixel(x, y), Some(Color::WHITE));
            }
        }
    }

    #[test]
    fn styleless_shape_draws_nothing() {
        let mut canvas = white_canvas(20, 20);
        draw_shape(
            &mut canvas,
            &Shape::Circle {
                center: Point::new(10.0, 10.0),
                radius: 8.0,
                style: Style::default(),
            },
        );
        assert_eq!(canvas.pixel(10, 10), Some(Color::WHITE));
    }
}
