//! Buffer pool partitioning and the three availability modes.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::draw::{self, Point, Rect, Shape, Style};
use crate::error::RenderError;
use crate::font::{FontLibrary, Weight};
use crate::theme::{AccentColors, Palette};

pub(super) fn render(palette: &Palette, fonts: &FontLibrary) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(2400, 1560, palette.background);
    super::draw_title(
        &mut canvas,
        fonts,
        palette,
        "Buffer Pool Strategy & Fleet Availability Model",
    );
    super::section_panel(
        &mut canvas,
        fonts,
        palette,
        Rect::new(30.0, 80.0, 2370.0, 900.0),
        "Four Pools, Strict Flow Constraints",
    );

    draw_pools(&mut canvas, fonts, palette);
    draw_legend(&mut canvas, fonts, palette);
    draw_modes(&mut canvas, fonts, palette);

    Ok(canvas)
}

fn draw_pools(canvas: &mut Canvas, fonts: &FontLibrary, palette: &Palette) {
    let buffer_accent = AccentColors {
        fill: palette.emerald,
        edge: palette.green.fill,
        deep: palette.green.deep,
    };
    super::accent_box(
        canvas,
        fonts,
        &buffer_accent,
        Rect::new(150.0, 280.0, 700.0, 500.0),
        "HEALTHY BUFFER",
        22.0,
        &["Certified & available", "for assignment"],
    );
    super::accent_box(
        canvas,
        fonts,
        &palette.blue,
        Rect::new(1000.0, 280.0, 1550.0, 500.0),
        "TENANT SERVING",
        22.0,
        &["Attached, serving production", "workloads for a tenant"],
    );
    super::accent_box(
        canvas,
        fonts,
        &palette.red,
        Rect::new(1000.0, 640.0, 1550.0, 860.0),
        "QUARANTINE",
        22.0,
        &["Cordoned + tainted,", "awaiting triage"],
    );
    super::accent_box(
        canvas,
        fonts,
        &palette.purple,
        Rect::new(150.0, 640.0, 700.0, 860.0),
        "REPAIR & RECERTIFY",
        22.0,
        &["Repair/RMA, burn-in,", "full certification battery"],
    );

    super::flow_arrow(
        canvas,
        fonts,
        Point::new(700.0, 390.0),
        Point::new(1000.0, 390.0),
        palette.blue.fill,
        "assignment",
        Point::new(770.0, 350.0),
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(1275.0, 500.0),
        Point::new(1275.0, 640.0),
        palette.red.fill,
        "blocking signal",
        Point::new(1300.0, 555.0),
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(1000.0, 750.0),
        Point::new(700.0, 750.0),
        palette.orange.fill,
        "triage → repair / RMA",
        Point::new(720.0, 710.0),
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(425.0, 640.0),
        Point::new(425.0, 500.0),
        palette.green.fill,
        "recertified",
        Point::new(450.0, 555.0),
    );
    super::flow_arrow(
        canvas,
        fonts,
        Point::new(1000.0, 500.0),
        Point::new(700.0, 640.0),
        palette.green.fill,
        "detach + reimage + disk wipe",
        Point::new(560.0, 585.0),
    );
}

fn draw_legend(canvas: &mut Canvas, fonts: &FontLibrary, palette: &Palette) {
    let rect = Rect::new(1750.0, 280.0, 2320.0, 760.0);
    draw::draw_shape(
        canvas,
        &Shape::RoundedRect {
            rect,
            style: Style::solid(Color::WHITE)
                .outlined(palette.panel_edge, 2.0)
                .rounded(10.0),
        },
    );
    let heading_font = fonts.font(16.0, Weight::Bold);
    draw::draw_text(
        canvas,
        &heading_font,
        Point::new(1775.0, 300.0),
        "Legend",
        palette.title_ink,
    );

    let entries = [
        (palette.emerald, "Healthy buffer"),
        (palette.blue.fill, "Tenant service"),
        (palette.red.fill, "Quarantined / blocked"),
        (palette.orange.fill, "Repair / RMA"),
        (palette.amber.fill, "Burn-in testing"),
        (palette.purple.fill, "Recertification"),
    ];
    let label_font = fonts.font(15.0, Weight::Regular);
    for (i, (color, label)) in entries.iter().enumerate() {
        let y = 350.0 + i as f32 * 60.0;
        draw::draw_shape(
            canvas,
            &Shape::RoundedRect {
                rect: Rect::new(1775.0, y, 1815.0, y + 24.0),
                style: Style::solid(*color),
            },
        );
        draw::draw_text(
            canvas,
            &label_font,
            Point::new(1830.0, y + 2.0),
            label,
            palette.body_ink,
        );
    }
}

fn draw_modes(canvas: &mut Canvas, fonts: &FontLibrary, palette: &Palette) {
    let heading_font = fonts.font(22.0, Weight::Bold);
    draw::draw_text(
        canvas,
        &heading_font,
        Point::new(60.0, 930.0),
        "Availability Modes",
        palette.title_ink,
    );

    let modes = [
        (
            palette.tint_green,
            palette.green,
            "NORMAL MODE",
            "Buffer ≥ Threshold",
            "Standard operations. Tenant assignment proceeds without \
             restriction. Buffer replenishment via the repair/recertification \
             pipeline.",
        ),
        (
            palette.panel_fill,
            palette.amber,
            "CONSTRAINED MODE",
            "Buffer approaching minimum",
            "Heightened alerting. Repair velocity is escalated. L1 squad \
             reports buffer status in daily triage.",
        ),
        (
            palette.tint_red,
            palette.red,
            "EXCEPTION MODE",
            "Buffer below minimum",
            "Audited, time-bounded exceptions. Explicit approval required for \
             any tenant assignment from constrained buffer. All exceptions \
             logged and reviewed.",
        ),
    ];

    let pill_font = fonts.font(17.0, Weight::Bold);
    let criteria_font = fonts.font(17.0, Weight::Bold);
    let body_font = fonts.font(15.0, Weight::Regular);
    for (i, (band, accent, name, criteria, behavior)) in modes.iter().enumerate() {
        let y = 980.0 + i as f32 * 170.0;
        let rect = Rect::new(60.0, y, 2340.0, y + 130.0);
        draw::draw_shape(
            canvas,
            &Shape::RoundedRect {
                rect,
                style: Style::solid(*band).outlined(accent.edge, 2.0).rounded(10.0),
            },
        );
        let pill = Rect::new(90.0, y + 40.0, 340.0, y + 95.0);
        draw::draw_shape(
            canvas,
            &Shape::Pill {
                rect: pill,
                style: Style::solid(accent.fill),
            },
        );
        draw::draw_centered(
            canvas,
            &pill_font,
            pill.center(),
            &[*name],
            Color::WHITE,
            0.0,
        );
        draw::draw_text(
            canvas,
            &criteria_font,
            Point::new(400.0, y + 22.0),
            criteria,
            accent.deep,
        );
        draw::draw_wrapped(
            canvas,
            &body_font,
            Point::new(400.0, y + 58.0),
            behavior,
            1850.0,
            palette.body_ink,
            5.0,
        );
    }
}
