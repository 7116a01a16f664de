//! Five-state node lifecycle with the recertification gate.

use crate::canvas::Canvas;
use crate::draw::{Point, Rect};
use crate::error::RenderError;
use crate::font::FontLibrary;
use crate::theme::{AccentColors, Palette};

pub(super) fn render(palette: &Palette, fonts: &FontLibrary) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(2400, 1500, palette.background);
    super::draw_title(&mut canvas, fonts, palette, "Node Lifecycle State Machine");
    super::section_panel(
        &mut canvas,
        fonts,
        palette,
        Rect::new(30.0, 70.0, 2370.0, 1430.0),
        "Node Lifecycle States",
    );

    // Buffer wears the brighter certification green; its outline stays in
    // the regular green family.
    let buffer_accent = AccentColors {
        fill: palette.emerald,
        edge: palette.green.fill,
        deep: palette.green.deep,
    };
    super::accent_box(
        &mut canvas,
        fonts,
        &buffer_accent,
        Rect::new(150.0, 350.0, 650.0, 510.0),
        "BUFFER_HEALTHY",
        22.0,
        &["Healthy, certified, and available", "for tenant assignment"],
    );
    super::accent_box(
        &mut canvas,
        fonts,
        &palette.blue,
        Rect::new(950.0, 350.0, 1450.0, 510.0),
        "TENANT_ASSIGNED",
        22.0,
        &["Actively serving a tenant workload"],
    );
    super::accent_box(
        &mut canvas,
        fonts,
        &palette.red,
        Rect::new(1750.0, 350.0, 2250.0, 510.0),
        "QUARANTINED",
        22.0,
        &["Blocking signal, removed", "from scheduling"],
    );
    super::accent_box(
        &mut canvas,
        fonts,
        &palette.orange,
        Rect::new(1750.0, 800.0, 2250.0, 960.0),
        "REPAIR_IN_PROGRESS",
        22.0,
        &["Triage, fix, or RMA process"],
    );
    super::accent_box(
        &mut canvas,
        fonts,
        &palette.purple,
        Rect::new(950.0, 800.0, 1450.0, 960.0),
        "RECERTIFY",
        22.0,
        &["BCM burn-in + DCGM/DCGMI", "diagnostics"],
    );
    super::decision(
        &mut canvas,
        fonts,
        &palette.amber,
        Point::new(575.0, 880.0),
        120.0,
        &["All tests", "pass?"],
    );

    super::flow_arrow(
        &mut canvas,
        fonts,
        Point::new(50.0, 430.0),
        Point::new(150.0, 430.0),
        palette.slate.fill,
        "initial provisioning",
        Point::new(40.0, 390.0),
    );
    super::flow_arrow(
        &mut canvas,
        fonts,
        Point::new(650.0, 430.0),
        Point::new(950.0, 430.0),
        palette.blue.fill,
        "attach tenant label",
        Point::new(660.0, 385.0),
    );
    super::flow_arrow(
        &mut canvas,
        fonts,
        Point::new(1450.0, 430.0),
        Point::new(1750.0, 430.0),
        palette.red.fill,
        "blocking signal",
        Point::new(1490.0, 385.0),
    );
    super::flow_arrow(
        &mut canvas,
        fonts,
        Point::new(2000.0, 510.0),
        Point::new(2000.0, 800.0),
        palette.orange.fill,
        "triage initiated",
        Point::new(2030.0, 640.0),
    );
    super::flow_arrow(
        &mut canvas,
        fonts,
        Point::new(1750.0, 880.0),
        Point::new(1450.0, 880.0),
        palette.purple.fill,
        "fix complete",
        Point::new(1520.0, 835.0),
    );
    super::flow_arrow(
        &mut canvas,
        fonts,
        Point::new(950.0, 880.0),
        Point::new(695.0, 880.0),
        palette.amber.fill,
        "",
        Point::new(0.0, 0.0),
    );
    super::flow_arrow(
        &mut canvas,
        fonts,
        Point::new(1200.0, 510.0),
        Point::new(1200.0, 800.0),
        palette.green.fill,
        "detach + reimage + disk wipe",
        Point::new(1230.0, 640.0),
    );
    super::flow_arrow(
        &mut canvas,
        fonts,
        Point::new(575.0, 760.0),
        Point::new(400.0, 510.0),
        palette.green.fill,
        "pass",
        Point::new(520.0, 610.0),
    );

    // Fail leg routes under the whole scene and climbs back into
    // quarantine from the right.
    super::elbow(
        &mut canvas,
        &[
            Point::new(575.0, 1000.0),
            Point::new(575.0, 1180.0),
            Point::new(2320.0, 1180.0),
            Point::new(2320.0, 430.0),
        ],
        palette.red.fill,
        3.0,
    );
    super::flow_arrow(
        &mut canvas,
        fonts,
        Point::new(2320.0, 430.0),
        Point::new(2250.0, 430.0),
        palette.red.fill,
        "fail",
        Point::new(605.0, 1140.0),
    );

    Ok(canvas)
}
