//! NPD as the shared detection substrate: teams in, standardized outputs out.

use crate::canvas::Canvas;
use crate::draw::{self, Point, Rect, Shadow, Shape, Style};
use crate::error::RenderError;
use crate::font::{FontLibrary, Weight};
use crate::theme::Palette;

pub(super) fn render(palette: &Palette, fonts: &FontLibrary) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(2400, 1500, palette.background);
    super::draw_title(
        &mut canvas,
        fonts,
        palette,
        "NPD as a Platform — Multi-Team Contribution Model",
    );
    super::section_panel(
        &mut canvas,
        fonts,
        palette,
        Rect::new(30.0, 80.0, 2370.0, 1420.0),
        "Contribution Model",
    );

    draw_teams(&mut canvas, fonts, palette);
    draw_platform(&mut canvas, fonts, palette);
    draw_outputs(&mut canvas, fonts, palette);

    Ok(canvas)
}

fn draw_teams(canvas: &mut Canvas, fonts: &FontLibrary, palette: &Palette) {
    let teams = [
        (
            palette.blue,
            "CP",
            "Compute Platform",
            "GPU + IB multi-node readiness detectors, certification gates, \
             evidence capture hooks.",
        ),
        (
            palette.green,
            "K8S",
            "Kubernetes Team",
            "kubelet/runtime, node readiness, nodefs/imagefs pressure detectors \
             and enforcement wiring.",
        ),
        (
            palette.purple,
            "OE",
            "OE Team",
            "Host OS and hardware-facing detectors (kernel, drivers, DCGM \
             signal interpretation, time sync).",
        ),
        (
            palette.orange,
            "NET",
            "Network Team",
            "Tenant VLAN/IB fabric validation hooks or APIs used by node \
             routing agent checks.",
        ),
    ];

    let name_font = fonts.font(20.0, Weight::Bold);
    let body_font = fonts.font(15.0, Weight::Regular);
    let npd_entries = [620.0, 700.0, 800.0, 880.0];
    for (i, (accent, initials, name, contribution)) in teams.iter().enumerate() {
        let y = 180.0 + i as f32 * 310.0;
        let rect = Rect::new(80.0, y, 640.0, y + 230.0);
        let shape = Shape::RoundedRect {
            rect,
            style: Style::solid(palette.panel_fill)
                .outlined(accent.edge, 3.0)
                .rounded(12.0),
        };
        draw::with_shadow(canvas, &shape, Shadow::soft());
        super::icon_circle(
            canvas,
            fonts,
            accent,
            Point::new(150.0, y + 80.0),
            34.0,
            initials,
        );
        draw::draw_text(
            canvas,
            &name_font,
            Point::new(210.0, y + 40.0),
            name,
            accent.deep,
        );
        draw::draw_wrapped(
            canvas,
            &body_font,
            Point::new(210.0, y + 80.0),
            contribution,
            405.0,
            palette.body_ink,
            5.0,
        );

        draw::draw_arrow(
            canvas,
            Point::new(640.0, y + 115.0),
            Point::new(1000.0, npd_entries[i]),
            accent.fill,
            3.0,
            16.0,
        );
    }
}

fn draw_platform(canvas: &mut Canvas, fonts: &FontLibrary, palette: &Palette) {
    super::accent_box(
        canvas,
        fonts,
        &palette.blue,
        Rect::new(1000.0, 560.0, 1440.0, 940.0),
        "NPD",
        40.0,
        &[
            "Node Problem Detector",
            "Single detection platform",
            "Multi-team plugin model",
        ],
    );
    let caption_font = fonts.font(16.0, Weight::Regular);
    draw::draw_wrapped(
        canvas,
        &caption_font,
        Point::new(1000.0, 1010.0),
        "Domain ownership stays with the contributing teams; detection and \
         enforcement stay centralized.",
        440.0,
        palette.slate.edge,
        5.0,
    );
}

fn draw_outputs(canvas: &mut Canvas, fonts: &FontLibrary, palette: &Palette) {
    let outputs = [
        (
            palette.tint_blue,
            "Node Events",
            "Human-readable audit trail for operational visibility.",
        ),
        (
            palette.tint_green,
            "Node Conditions",
            "Machine-readable state for controller consumption.",
        ),
        (
            palette.tint_red,
            "Taints",
            "Enforcement mechanism: NoSchedule / PreferNoSchedule.",
        ),
    ];

    let name_font = fonts.font(18.0, Weight::Bold);
    let body_font = fonts.font(14.0, Weight::Regular);
    let npd_exits = [700.0, 750.0, 800.0];
    for (i, (tint, name, desc)) in outputs.iter().enumerate() {
        let y = 360.0 + i as f32 * 200.0;
        let rect = Rect::new(1750.0, y, 2200.0, y + 130.0);
        draw::draw_shape(
            canvas,
            &Shape::RoundedRect {
                rect,
                style: Style::solid(*tint)
                    .outlined(palette.subtle_ink, 2.0)
                    .rounded(8.0),
            },
        );
        draw::draw_text(
            canvas,
            &name_font,
            Point::new(1775.0, y + 18.0),
            name,
            palette.body_ink,
        );
        draw::draw_wrapped(
            canvas,
            &body_font,
            Point::new(1775.0, y + 55.0),
            desc,
            400.0,
            palette.body_ink,
            4.0,
        );

        draw::draw_arrow(
            canvas,
            Point::new(1440.0, npd_exits[i]),
            Point::new(1750.0, y + 65.0),
            palette.blue.fill,
            3.0,
            16.0,
        );
    }

    // Taints are the teeth: call out the enforcement path explicitly.
    let note = Rect::new(1750.0, 1010.0, 2300.0, 1260.0);
    draw::draw_shape(
        canvas,
        &Shape::RoundedRect {
            rect: note,
            style: Style::solid(palette.tint_red)
                .outlined(palette.red.edge, 2.0)
                .rounded(10.0),
        },
    );
    let heading_font = fonts.font(16.0, Weight::Bold);
    draw::draw_text(
        canvas,
        &heading_font,
        Point::new(1775.0, 1035.0),
        "ENFORCEMENT",
        palette.red.deep,
    );
    let body_font = fonts.font(15.0, Weight::Regular);
    draw::draw_wrapped(
        canvas,
        &body_font,
        Point::new(1775.0, 1075.0),
        "Cordon + taint is applied the moment a blocking condition is raised; \
         scheduling stops immediately, before tenant impact.",
        500.0,
        palette.body_ink,
        5.0,
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(1975.0, 890.0),
        Point::new(1975.0, 1010.0),
        palette.red.fill,
        "drives",
        Point::new(1998.0, 935.0),
    );
}
