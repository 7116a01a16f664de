//! The fixed set of fleet architecture figures.
//!
//! Each composer is a hand-laid-out scene: literal coordinates, palette
//! colors, and the shared drawing helpers below. Composers never touch the
//! filesystem; [`render_all`] owns output naming and persistence.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::Config;
use crate::draw::{self, Point, Rect, Shadow, Shape, Style};
use crate::error::RenderError;
use crate::font::{FontLibrary, Weight};
use crate::theme::{AccentColors, Palette};
use anyhow::bail;
use log::{error, info, warn};
use std::path::Path;

mod buffer_strategy;
mod mindmap;
mod npd_platform;
mod state_machine;
mod workflow;

/// One renderable figure in the registry.
pub struct Diagram {
    pub stem: &'static str,
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub render: fn(&Palette, &FontLibrary) -> Result<Canvas, RenderError>,
}

impl Diagram {
    /// Output file name, numbered by registry position.
    pub fn file_name(&self, index: usize) -> String {
        format!("{:02}_{}.png", index + 1, self.stem)
    }
}

static DIAGRAMS: [Diagram; 5] = [
    Diagram {
        stem: "mindmap_overview",
        title: "AI Compute Platform — Fleet Operations Pillars",
        width: 2400,
        height: 1800,
        render: mindmap::render,
    },
    Diagram {
        stem: "state_machine",
        title: "Node Lifecycle State Machine",
        width: 2400,
        height: 1500,
        render: state_machine::render,
    },
    Diagram {
        stem: "workflow_diagram",
        title: "Detection → Enforcement → Recovery Workflow",
        width: 2400,
        height: 1560,
        render: workflow::render,
    },
    Diagram {
        stem: "npd_platform",
        title: "NPD as a Platform — Multi-Team Contribution Model",
        width: 2400,
        height: 1500,
        render: npd_platform::render,
    },
    Diagram {
        stem: "buffer_strategy",
        title: "Buffer Pool Strategy & Fleet Availability Model",
        width: 2400,
        height: 1560,
        render: buffer_strategy::render,
    },
];

pub fn all() -> &'static [Diagram] {
    &DIAGRAMS
}

/// Renders every registered diagram (or the `only` subset) into `out_dir`.
/// A failed diagram is logged and counted without stopping the rest of the
/// set; the summary error reports the tally.
pub fn render_all(config: &Config, out_dir: &Path, only: &[String]) -> anyhow::Result<()> {
    let palette = config.theme.palette()?;
    let fonts = FontLibrary::shared();
    std::fs::create_dir_all(out_dir)?;

    for stem in only {
        if !DIAGRAMS.iter().any(|d| d.stem == stem.as_str()) {
            warn!("unknown diagram stem {stem:?}, skipping");
        }
    }

    let mut rendered = 0usize;
    let mut failed = 0usize;
    for (index, diagram) in DIAGRAMS.iter().enumerate() {
        if !only.is_empty() && !only.iter().any(|s| s.as_str() == diagram.stem) {
            continue;
        }
        let path = out_dir.join(diagram.file_name(index));
        match (diagram.render)(&palette, fonts).and_then(|canvas| canvas.save_png(&path)) {
            Ok(()) => {
                info!(
                    "wrote {} ({}x{})",
                    path.display(),
                    diagram.width,
                    diagram.height
                );
                rendered += 1;
            }
            Err(err) => {
                error!("{}: {err}", diagram.stem);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} diagrams failed", rendered + failed);
    }
    Ok(())
}

fn draw_title(canvas: &mut Canvas, fonts: &FontLibrary, palette: &Palette, text: &str) {
    let font = fonts.font(36.0, Weight::Bold);
    let width = font.measure(text).0;
    let x = (canvas.width() as f32 - width) / 2.0;
    draw::draw_text(canvas, &font, Point::new(x, 20.0), text, palette.title_ink);
}

fn section_panel(
    canvas: &mut Canvas,
    fonts: &FontLibrary,
    palette: &Palette,
    rect: Rect,
    heading: &str,
) {
    draw::draw_shape(
        canvas,
        &Shape::RoundedRect {
            rect,
            style: Style::solid(palette.panel_fill)
                .outlined(palette.panel_edge, 2.0)
                .rounded(10.0),
        },
    );
    if !heading.is_empty() {
        let font = fonts.font(20.0, Weight::Bold);
        draw::draw_text(
            canvas,
            &font,
            Point::new(rect.x0 + 20.0, rect.y0 + 12.0),
            heading,
            palette.title_ink,
        );
    }
}

/// Gradient state box with a drop shadow, a bold name line, and smaller
/// detail lines underneath.
fn accent_box(
    canvas: &mut Canvas,
    fonts: &FontLibrary,
    accent: &AccentColors,
    rect: Rect,
    name: &str,
    name_px: f32,
    lines: &[&str],
) {
    let shape = Shape::RoundedRect {
        rect,
        style: Style::filled(accent.box_fill())
            .outlined(accent.edge, 3.0)
            .rounded(15.0),
    };
    draw::with_shadow(canvas, &shape, Shadow::soft());

    let name_font = fonts.font(name_px, Weight::Bold);
    draw::draw_text(
        canvas,
        &name_font,
        Point::new(rect.x0 + 30.0, rect.y0 + 18.0),
        name,
        Color::WHITE,
    );
    let line_font = fonts.font(14.0, Weight::Regular);
    let mut y = rect.y0 + 18.0 + name_font.line_height() + 10.0;
    for line in lines {
        draw::draw_text(
            canvas,
            &line_font,
            Point::new(rect.x0 + 30.0, y),
            line,
            Color::WHITE,
        );
        y += line_font.line_height() + 6.0;
    }
}

/// Decision diamond with centered question text.
fn decision(
    canvas: &mut Canvas,
    fonts: &FontLibrary,
    accent: &AccentColors,
    center: Point,
    half: f32,
    lines: &[&str],
) {
    let shape = Shape::Diamond {
        center,
        half,
        style: Style::filled(accent.box_fill()).outlined(accent.edge, 3.0),
    };
    draw::with_shadow(canvas, &shape, Shadow::soft());
    let font = fonts.font(16.0, Weight::Bold);
    draw::draw_centered(canvas, &font, center, lines, Color::WHITE, 2.0);
}

/// Small filled circle carrying a number or initials, for phase and team
/// markers.
fn icon_circle(
    canvas: &mut Canvas,
    fonts: &FontLibrary,
    accent: &AccentColors,
    center: Point,
    radius: f32,
    label: &str,
) {
    let shape = Shape::Circle {
        center,
        radius,
        style: Style::filled(accent.box_fill()).outlined(accent.edge, 3.0),
    };
    draw::with_shadow(canvas, &shape, Shadow::soft());
    let font = fonts.font(20.0, Weight::Bold);
    draw::draw_centered(canvas, &font, center, &[label], Color::WHITE, 0.0);
}

/// Straight transition arrow with an optional label in the arrow color.
fn flow_arrow(
    canvas: &mut Canvas,
    fonts: &FontLibrary,
    from: Point,
    to: Point,
    color: Color,
    label: &str,
    label_at: Point,
) {
    draw::draw_arrow(canvas, from, to, color, 3.0, 16.0);
    if !label.is_empty() {
        let font = fonts.font(15.0, Weight::Regular);
        draw::draw_text(canvas, &font, label_at, label, color);
    }
}

/// Headless polyline for routed transitions; the caller finishes the last
/// leg with an arrow.
fn elbow(canvas: &mut Canvas, points: &[Point], color: Color, width: f32) {
    for pair in points.windows(2) {
        draw::draw_shape(
            canvas,
            &Shape::Line {
                from: pair[0],
                to: pair[1],
                style: Style::stroke(color, width),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_five_diagrams_in_order() {
        let diagrams = all();
        assert_eq!(diagrams.len(), 5);
        assert_eq!(diagrams[0].stem, "mindmap_overview");
        assert_eq!(diagrams[0].file_name(0), "01_mindmap_overview.png");
        assert_eq!(diagrams[4].file_name(4), "05_buffer_strategy.png");
    }

    #[test]
    fn stems_are_unique() {
        let diagrams = all();
        for (i, a) in diagrams.iter().enumerate() {
            for b in &diagrams[i + 1..] {
                assert_ne!(a.stem, b.stem);
            }
        }
    }

    #[test]
    fn registry_pins_output_dimensions() {
        let dims: Vec<(u32, u32)> = all().iter().map(|d| (d.width, d.height)).collect();
        assert_eq!(
            dims,
            [
                (2400, 1800),
                (2400, 1500),
                (2400, 1560),
                (2400, 1500),
                (2400, 1560),
            ]
        );
    }
}
