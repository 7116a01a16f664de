//! Straight connector arrows with filled triangular heads.

use super::{shapes, Point, Shape, Style};
use crate::canvas::Canvas;
use crate::color::Color;

/// Half-width of the arrowhead base as a fraction of its length. Fixed so
/// every arrow in a document carries the same head proportions.
const HEAD_RATIO: f32 = 0.4;

/// Vertices of the head triangle `[tip, base_left, base_right]`, or `None`
/// for a zero-length arrow. The base vertices sit `head_len` behind the tip
/// along the shaft, offset `0.4 * head_len` to each side, so the triangle
/// is always isoceles about the shaft axis.
pub fn arrow_head(start: Point, end: Point, head_len: f32) -> Option<[Point; 3]> {
    let d = end - start;
    let len = d.length();
    if len == 0.0 {
        return None;
    }
    let u = d * (1.0 / len);
    let p = Point::new(-u.y, u.x);
    let base = end - u * head_len;
    Some([end, base + p * (HEAD_RATIO * head_len), base - p * (HEAD_RATIO * head_len)])
}

/// Draws the shaft from `start` to `end`, then the filled head with its tip
/// at `end`. Zero-length arrows draw nothing; compositions occasionally
/// produce them from coordinate arithmetic and they must not fault.
pub fn draw_arrow(
    canvas: &mut Canvas,
    start: Point,
    end: Point,
    color: Color,
    width: f32,
    head_len: f32,
) {
    let Some(head) = arrow_head(start, end, head_len) else {
        return;
    };
    shapes::draw_shape(
        canvas,
        &Shape::Line {
            from: start,
            to: end,
            style: Style::stroke(color, width),
        },
    );
    shapes::draw_shape(
        canvas,
        &Shape::Polygon {
            points: head.to_vec(),
            style: Style::solid(color),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_vertices_for_horizontal_arrow() {
        let head = arrow_head(Point::new(0.0, 50.0), Point::new(100.0, 50.0), 12.0).unwrap();
        assert_eq!(head[0], Point::new(100.0, 50.0));
        assert!((head[1].x - 88.0).abs() < 1e-4);
        assert!((head[2].x - 88.0).abs() < 1e-4);
        assert!((head[1].y - 54.8).abs() < 1e-4);
        assert!((head[2].y - 45.2).abs() < 1e-4);
    }

    #[test]
    fn head_is_isoceles_about_the_shaft_for_any_direction() {
        let start = Point::new(13.0, 27.0);
        let end = Point::new(201.0, 148.0);
        let head = arrow_head(start, end, 20.0).unwrap();
        let d = end - start;
        let len = d.length();
        let u = Point::new(d.x / len, d.y / len);
        // Signed distance of each base vertex from the shaft line.
        let dist = |p: Point| {
            let v = p - start;
            -u.y * v.x + u.x * v.y
        };
        assert!((dist(head[1]) + dist(head[2])).abs() < 1e-3);
        assert!((dist(head[1]).abs() - 8.0).abs() < 1e-3);
    }

    #[test]
    fn zero_length_arrow_is_a_noop() {
        assert!(arrow_head(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 12.0).is_none());
        let mut canvas = Canvas::new(10, 10, Color::WHITE);
        draw_arrow(
            &mut canvas,
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
            Color::BLACK,
            3.0,
            12.0,
        );
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(canvas.pixel(x, y), Some(Color::WHITE));
            }
        }
    }

    #[test]
    fn drawn_arrow_covers_shaft_and_tip_region() {
        let mut canvas = Canvas::new(120, 100, Color::WHITE);
        draw_arrow(
            &mut canvas,
            Point::new(10.0, 50.0),
            Point::new(100.0, 50.0),
            Color::BLACK,
            3.0,
            12.0,
        );
        assert_eq!(canvas.pixel(50, 50), Some(Color::BLACK));
        assert_eq!(canvas.pixel(97, 50), Some(Color::BLACK));
        // Off-shaft above the thin shaft, behind the head: untouched.
        assert_eq!(canvas.pixel(50, 44), Some(Color::WHITE));
    }
}
