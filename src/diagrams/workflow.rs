//! Detect, self-heal, enforce, recover: the core operational flow.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::draw::{self, Point, Rect, Shape, Style};
use crate::error::RenderError;
use crate::font::{FontLibrary, Weight};
use crate::theme::{AccentColors, Palette};

const SIGNALS: &[&str] = &[
    "▸ GPU / XID",
    "▸ InfiniBand",
    "▸ Filesystem",
    "▸ Kubelet",
    "▸ Runtime",
    "▸ Storage",
];

pub(super) fn render(palette: &Palette, fonts: &FontLibrary) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(2400, 1560, palette.background);
    super::draw_title(
        &mut canvas,
        fonts,
        palette,
        "Detection → Enforcement → Recovery Workflow",
    );

    draw_phase_strip(&mut canvas, fonts, palette);
    super::section_panel(
        &mut canvas,
        fonts,
        palette,
        Rect::new(30.0, 190.0, 2370.0, 1080.0),
        "Signal to Resolution",
    );
    draw_flow(&mut canvas, fonts, palette);
    draw_phase_notes(&mut canvas, fonts, palette);

    Ok(canvas)
}

fn draw_phase_strip(canvas: &mut Canvas, fonts: &FontLibrary, palette: &Palette) {
    let phases = [
        (palette.blue, "1", "Detect"),
        (palette.green, "2", "Self-Heal"),
        (palette.red, "3", "Enforce"),
        (palette.purple, "4", "Recover"),
    ];
    let label_font = fonts.font(20.0, Weight::Bold);
    for (i, (accent, number, name)) in phases.iter().enumerate() {
        let cx = 180.0 + i as f32 * 580.0;
        if i > 0 {
            // Starts clear of the preceding phase label.
            draw::draw_shape(
                canvas,
                &Shape::Line {
                    from: Point::new(cx - 580.0 + 210.0, 130.0),
                    to: Point::new(cx - 28.0, 130.0),
                    style: Style::stroke(palette.panel_edge, 2.0),
                },
            );
        }
        super::icon_circle(canvas, fonts, accent, Point::new(cx, 130.0), 28.0, number);
        draw::draw_text(
            canvas,
            &label_font,
            Point::new(cx + 45.0, 116.0),
            name,
            palette.title_ink,
        );
    }
}

fn draw_flow(canvas: &mut Canvas, fonts: &FontLibrary, palette: &Palette) {
    super::accent_box(
        canvas,
        fonts,
        &palette.slate,
        Rect::new(60.0, 280.0, 300.0, 560.0),
        "Host Signals",
        16.0,
        SIGNALS,
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(300.0, 420.0),
        Point::new(420.0, 420.0),
        palette.slate.edge,
        "",
        Point::new(0.0, 0.0),
    );

    super::accent_box(
        canvas,
        fonts,
        &palette.blue,
        Rect::new(420.0, 340.0, 680.0, 500.0),
        "NPD",
        28.0,
        &["Detectors +", "Custom Plugins"],
    );
    let note_font = fonts.font(14.0, Weight::Regular);
    draw::draw_text(
        canvas,
        &note_font,
        Point::new(450.0, 468.0),
        "Multi-team",
        palette.highlight_blue,
    );

    super::flow_arrow(
        canvas,
        fonts,
        Point::new(680.0, 420.0),
        Point::new(765.0, 420.0),
        palette.amber.fill,
        "",
        Point::new(0.0, 0.0),
    );
    super::decision(
        canvas,
        fonts,
        &palette.amber,
        Point::new(880.0, 420.0),
        115.0,
        &["Self-heal", "allowed?"],
    );

    // Allowlisted branch.
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(880.0, 535.0),
        Point::new(880.0, 640.0),
        palette.green.fill,
        "allowlisted",
        Point::new(905.0, 570.0),
    );
    super::accent_box(
        canvas,
        fonts,
        &palette.green,
        Rect::new(730.0, 640.0, 1030.0, 800.0),
        "SELF-HEAL",
        16.0,
        &["Bounded retries", "Strict time window"],
    );
    let cleared = Rect::new(380.0, 670.0, 660.0, 770.0);
    draw::draw_shape(
        canvas,
        &Shape::Pill {
            rect: cleared,
            style: Style::solid(palette.emerald).outlined(palette.green.fill, 3.0),
        },
    );
    let pill_font = fonts.font(15.0, Weight::Bold);
    draw::draw_centered(
        canvas,
        &pill_font,
        cleared.center(),
        &["BACK IN SERVICE"],
        Color::WHITE,
        0.0,
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(730.0, 720.0),
        Point::new(660.0, 720.0),
        palette.green.fill,
        "cleared",
        Point::new(655.0, 685.0),
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(1030.0, 720.0),
        Point::new(1285.0, 505.0),
        palette.red.fill,
        "retries exhausted",
        Point::new(1185.0, 600.0),
    );

    // Blocking branch.
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(995.0, 420.0),
        Point::new(1150.0, 420.0),
        palette.red.fill,
        "blocking signal",
        Point::new(1000.0, 378.0),
    );
    super::accent_box(
        canvas,
        fonts,
        &palette.red,
        Rect::new(1150.0, 340.0, 1450.0, 500.0),
        "QUARANTINE",
        18.0,
        &["Cordon + Taint", "NoSchedule applied", "Alert + ticket routing"],
    );

    // Repair split.
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(1450.0, 390.0),
        Point::new(1600.0, 340.0),
        palette.orange.fill,
        "software",
        Point::new(1470.0, 322.0),
    );
    super::accent_box(
        canvas,
        fonts,
        &palette.orange,
        Rect::new(1600.0, 280.0, 1840.0, 400.0),
        "REPAIR",
        16.0,
        &["SW/Config fix"],
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(1450.0, 450.0),
        Point::new(1600.0, 500.0),
        palette.bronze.fill,
        "hardware",
        Point::new(1470.0, 480.0),
    );
    super::accent_box(
        canvas,
        fonts,
        &palette.bronze,
        Rect::new(1600.0, 440.0, 1840.0, 560.0),
        "RMA",
        16.0,
        &["HW fault"],
    );

    // Both repair paths converge on burn-in, then the full battery.
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(1840.0, 340.0),
        Point::new(1960.0, 400.0),
        palette.amber.fill,
        "",
        Point::new(0.0, 0.0),
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(1840.0, 500.0),
        Point::new(1960.0, 440.0),
        palette.amber.fill,
        "",
        Point::new(0.0, 0.0),
    );
    super::accent_box(
        canvas,
        fonts,
        &palette.amber,
        Rect::new(1960.0, 340.0, 2200.0, 500.0),
        "BURN-IN",
        16.0,
        &["BCM burn-in", "6-24 hours", "gpu_burn + stress"],
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(2080.0, 500.0),
        Point::new(2080.0, 640.0),
        palette.purple.fill,
        "",
        Point::new(0.0, 0.0),
    );
    super::accent_box(
        canvas,
        fonts,
        &palette.purple,
        Rect::new(1860.0, 640.0, 2300.0, 920.0),
        "RECERTIFY",
        18.0,
        &[
            "DCGM Level 4",
            "NCCL (bus + algo BW)",
            "HPL / HPL-MxP",
            "NVLink / IB tests",
            "K8s dummy job",
        ],
    );

    let buffer_accent = AccentColors {
        fill: palette.emerald,
        edge: palette.green.fill,
        deep: palette.green.deep,
    };
    super::accent_box(
        canvas,
        fonts,
        &buffer_accent,
        Rect::new(1250.0, 700.0, 1650.0, 860.0),
        "RETURN TO BUFFER",
        16.0,
        &["Certified & available"],
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(1860.0, 780.0),
        Point::new(1650.0, 780.0),
        palette.green.fill,
        "pass",
        Point::new(1715.0, 745.0),
    );

    // Recertification failure re-enters quarantine. The return leg runs
    // under the service row and climbs the lane left of the quarantine box.
    super::elbow(
        canvas,
        &[
            Point::new(2080.0, 920.0),
            Point::new(2080.0, 1010.0),
            Point::new(1100.0, 1010.0),
            Point::new(1100.0, 470.0),
        ],
        palette.red.fill,
        3.0,
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(1100.0, 470.0),
        Point::new(1150.0, 470.0),
        palette.red.fill,
        "fail",
        Point::new(1125.0, 960.0),
    );
}

fn draw_phase_notes(canvas: &mut Canvas, fonts: &FontLibrary, palette: &Palette) {
    let notes = [
        (
            palette.blue,
            "PHASE 1 — DETECTION",
            "NPD detectors and custom plugins monitor host signals (GPU, IB, \
             filesystem, kubelet, runtime) and produce standardized Node Events, \
             Node Conditions, and taint recommendations.",
        ),
        (
            palette.green,
            "PHASE 2 — SELF-HEAL",
            "For allowlisted conditions only (e.g. IB interface reset), bounded \
             retry with a strict time window. Recovery clears transient state; \
             failure escalates to quarantine.",
        ),
        (
            palette.red,
            "PHASE 3 — ENFORCEMENT",
            "Quarantine via cordon + taint (NoSchedule). Scheduling is \
             immediately prevented on the node. Alert and ticket routing are \
             triggered.",
        ),
        (
            palette.purple,
            "PHASE 4 — RECOVERY",
            "Repair/RMA workflow. Post-fix recertification is mandatory (BCM \
             burn-in + DCGM/DCGMI). Only a passing recertification returns the \
             node to BUFFER_HEALTHY.",
        ),
    ];
    let heading_font = fonts.font(17.0, Weight::Bold);
    let body_font = fonts.font(15.0, Weight::Regular);
    for (i, (accent, heading, body)) in notes.iter().enumerate() {
        let x = 60.0 + i as f32 * 585.0;
        let rect = Rect::new(x, 1150.0, x + 525.0, 1470.0);
        draw::draw_shape(
            canvas,
            &Shape::RoundedRect {
                rect,
                style: Style::solid(palette.panel_fill)
                    .outlined(accent.edge, 2.0)
                    .rounded(10.0),
            },
        );
        draw::draw_text(
            canvas,
            &heading_font,
            Point::new(x + 25.0, 1172.0),
            heading,
            accent.deep,
        );
        draw::draw_wrapped(
            canvas,
            &body_font,
            Point::new(x + 25.0, 1215.0),
            body,
            475.0,
            palette.body_ink,
            5.0,
        );
    }
}
