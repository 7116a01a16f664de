//! Stateless drawing primitives over [`Canvas`](crate::canvas::Canvas).
//!
//! Every operation takes the target canvas by mutable reference and writes
//! pixels immediately (painter's algorithm). Nothing here retains state
//! between calls; compositions are plain sequential code.

pub mod arrow;
pub mod shadow;
pub mod shapes;
pub mod text;

pub use arrow::{arrow_head, draw_arrow};
pub use shadow::{with_shadow, Shadow};
pub use shapes::draw_shape;
pub use text::{draw_centered, draw_text, draw_wrapped, wrap};

use crate::color::Color;
use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle, half-open: the covered region is
/// `[x0, x1) x [y0, y1)`, so a rect of height `h` paints exactly `h` rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub const fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + w,
            y1: y + h,
        }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> Point {
        Point::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    pub fn inflated(&self, d: f32) -> Rect {
        Rect::new(self.x0 - d, self.y0 - d, self.x1 + d, self.y1 + d)
    }
}

/// Interior paint of a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Linear vertical gradient across the shape's rows. The first painted
    /// row is exactly `top` and the last is exactly `bottom`.
    Vertical { top: Color, bottom: Color },
}

impl Fill {
    pub fn at(&self, t: f32) -> Color {
        match *self {
            Fill::Solid(color) => color,
            Fill::Vertical { top, bottom } => Color::lerp(top, bottom, t),
        }
    }
}

/// Fill and outline styling shared by all shape variants. A style with
/// neither fill nor outline turns the primitive into a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    pub fill: Option<Fill>,
    pub outline: Option<Color>,
    pub outline_width: f32,
    pub corner_radius: f32,
}

impl Style {
    pub fn solid(color: Color) -> Self {
        Self {
            fill: Some(Fill::Solid(color)),
            ..Self::default()
        }
    }

    pub fn gradient(top: Color, bottom: Color) -> Self {
        Self {
            fill: Some(Fill::Vertical { top, bottom }),
            ..Self::default()
        }
    }

    pub fn filled(fill: Fill) -> Self {
        Self {
            fill: Some(fill),
            ..Self::default()
        }
    }

    /// Outline-only style, mostly used for thick connector lines.
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            outline: Some(color),
            outline_width: width,
            ..Self::default()
        }
    }

    pub fn outlined(mut self, color: Color, width: f32) -> Self {
        self.outline = Some(color);
        self.outline_width = width;
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }
}

/// Geometry plus style for one drawing primitive.
#[derive(Clone, Debug)]
pub enum Shape {
    /// Rectangle with corners rounded by `style.corner_radius` (clamped to
    /// half the shorter side).
    RoundedRect { rect: Rect, style: Style },
    /// Rounded rect whose radius is pinned to half its height.
    Pill { rect: Rect, style: Style },
    /// Axis-aligned rhombus around `center` with half-diagonal `half`.
    Diamond {
        center: Point,
        half: f32,
        style: Style,
    },
    Circle {
        center: Point,
        radius: f32,
        style: Style,
    },
    /// Straight segment stroked `style.outline_width` thick (minimum 1).
    Line { from: Point, to: Point, style: Style },
    /// Arbitrary closed polygon, even-odd filled.
    Polygon { points: Vec<Point>, style: Style },
}

impl Shape {
    pub fn style(&self) -> &Style {
        match self {
            Shape::RoundedRect { style, .. }
            | Shape::Pill { style, .. }
            | Shape::Diamond { style, .. }
            | Shape::Circle { style, .. }
            | Shape::Line { style, .. }
            | Shape::Polygon { style, .. } => style,
        }
    }

    /// Bounding box of the painted area, stroke width included for lines.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::RoundedRect { rect, .. } | Shape::Pill { rect, .. } => *rect,
            Shape::Diamond { center, half, .. } => Rect::new(
                center.x - half,
                center.y - half,
                center.x + half,
                center.y + half,
            ),
            Shape::Circle { center, radius, .. } => Rect::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
            Shape::Line { from, to, style } => {
                let half = style.outline_width.max(1.0) / 2.0;
                Rect::new(
                    from.x.min(to.x) - half,
                    from.y.min(to.y) - half,
                    from.x.max(to.x) + half,
                    from.y.max(to.y) + half,
                )
            }
            Shape::Polygon { points, .. } => {
                let mut bounds = Rect::new(f32::MAX, f32::MAX, f32::MIN, f32::MIN);
                for p in points {
                    bounds.x0 = bounds.x0.min(p.x);
                    bounds.y0 = bounds.y0.min(p.y);
                    bounds.x1 = bounds.x1.max(p.x);
                    bounds.y1 = bounds.y1.max(p.y);
                }
                if points.is_empty() {
                    Rect::new(0.0, 0.0, 0.0, 0.0)
                } else {
                    bounds
                }
            }
        }
    }

    /// Same geometry shifted by `(dx, dy)`; the shadow pass silhouettes a
    /// translated copy instead of re-deriving offsets per variant.
    pub(crate) fn translated(&self, dx: f32, dy: f32) -> Shape {
        match self {
            Shape::RoundedRect { rect, style } => Shape::RoundedRect {
                rect: rect.translated(dx, dy),
                style: *style,
            },
            Shape::Pill { rect, style } => Shape::Pill {
                rect: rect.translated(dx, dy),
                style: *style,
            },
            Shape::Diamond {
                center,
                half,
                style,
            } => Shape::Diamond {
                center: Point::new(center.x + dx, center.y + dy),
                half: *half,
                style: *style,
            },
            Shape::Circle {
                center,
                radius,
                style,
            } => Shape::Circle {
                center: Point::new(center.x + dx, center.y + dy),
                radius: *radius,
                style: *style,
            },
            Shape::Line { from, to, style } => Shape::Line {
                from: Point::new(from.x + dx, from.y + dy),
                to: Point::new(to.x + dx, to.y + dy),
                style: *style,
            },
            Shape::Polygon { points, style } => Shape::Polygon {
                points: points
                    .iter()
                    .map(|p| Point::new(p.x + dx, p.y + dy))
                    .collect(),
                style: *style,
            },
        }
    }
}
