//! Four-pillar fleet operations overview.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::draw::{self, Point, Rect, Shadow, Shape, Style};
use crate::error::RenderError;
use crate::font::{FontLibrary, Weight};
use crate::theme::{AccentColors, Palette};

const HUB: Point = Point::new(1200.0, 850.0);
const HUB_HALF_W: f32 = 140.0;
const HUB_HALF_H: f32 = 40.0;

struct Pillar {
    rect: Rect,
    badge: Option<&'static str>,
    heading: &'static str,
    items: &'static [&'static str],
    items_top: f32,
    anchor: Point,
}

const MAINTENANCE_ITEMS: &[&str] = &[
    "• 99.5% SLA Squad (Established)",
    "• SLA Scope & Critical Path",
    "  Components Defined",
    "• Runbooks for All Critical",
    "  Path Components",
    "• Observability & Grafana",
    "  Dashboards",
    "• Q4 GPU Reliability Tasks",
    "  Completed",
    "• RMA Workflows & Vendor",
    "  SLA Tracking",
    "• Capacity Return <24h SOP",
    "• Incident 5337 Multi-Node",
    "  Learnings Integrated",
    "• Automated Daily Executive",
    "  Summary Dashboards",
];

const LIFECYCLE_ITEMS: &[&str] = &[
    "• NPD + Controllers for",
    "  Host-Level Detection",
    "• Cordon/Taint Enforcement",
    "• BCM Burn-in & DCGM L4",
    "  Certification Pipeline",
    "• NCCL / HPL / NVLink / IB",
    "  Validation",
    "• Day Zero & Day Two SOP",
    "  Integration",
    "• Multi-Node Readiness Gates",
];

const IMAGE_ITEMS: &[&str] = &[
    "• Deprecate BCM Image",
    "  Cloning Model",
    "• Packer-Based Pipeline",
    "  (NVIDIA Support)",
    "• GitOps CD Style Deployment",
    "• Cross-AZ / Cross-Region",
    "  Image Replication",
    "• Self-Service Layers",
    "  (Storage, K8s, etc.)",
];

const REASSIGNMENT_ITEMS: &[&str] = &[
    "• Internal Tenant A →",
    "  Certified → Tenant X",
    "• Re-image + Disk Wipe on",
    "  Every Transition",
    "• Full Recertification Gate",
    "  (Burn-in + DCGM + NCCL)",
    "• Host Network",
    "  Reconfiguration",
    "• VLAN/Tenant Routing",
    "  Validated",
];

pub(super) fn render(palette: &Palette, fonts: &FontLibrary) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(2400, 1800, palette.background);
    super::draw_title(
        &mut canvas,
        fonts,
        palette,
        "AI Compute Platform — Fleet Operations Pillars",
    );

    let pillars = [
        (
            palette.blue,
            Pillar {
                rect: Rect::new(40.0, 80.0, 580.0, 780.0),
                badge: Some("PHASE 1"),
                heading: "Healthy Fleet\nMaintenance",
                items: MAINTENANCE_ITEMS,
                items_top: 105.0,
                anchor: Point::new(580.0, 430.0),
            },
        ),
        (
            palette.green,
            Pillar {
                rect: Rect::new(1820.0, 80.0, 2360.0, 640.0),
                badge: Some("PHASE 2"),
                heading: "Automated Node Lifecycle\n& Certification",
                items: LIFECYCLE_ITEMS,
                items_top: 110.0,
                anchor: Point::new(1820.0, 360.0),
            },
        ),
        (
            palette.purple,
            Pillar {
                rect: Rect::new(40.0, 850.0, 580.0, 1350.0),
                badge: Some("PHASE 2"),
                heading: "Automated Image\nPipeline",
                items: IMAGE_ITEMS,
                items_top: 110.0,
                anchor: Point::new(580.0, 1000.0),
            },
        ),
        (
            palette.orange,
            Pillar {
                rect: Rect::new(1820.0, 850.0, 2360.0, 1350.0),
                badge: None,
                heading: "Tenant Reassignment",
                items: REASSIGNMENT_ITEMS,
                items_top: 65.0,
                anchor: Point::new(1820.0, 1000.0),
            },
        ),
    ];

    for (accent, pillar) in &pillars {
        draw_pillar(&mut canvas, fonts, accent, pillar);
        let hub_edge = if pillar.anchor.x < HUB.x {
            Point::new(HUB.x - HUB_HALF_W, HUB.y)
        } else {
            Point::new(HUB.x + HUB_HALF_W, HUB.y)
        };
        draw::draw_arrow(&mut canvas, pillar.anchor, hub_edge, accent.fill, 3.0, 16.0);
    }

    draw_hub(&mut canvas, fonts, palette);
    Ok(canvas)
}

fn draw_hub(canvas: &mut Canvas, fonts: &FontLibrary, palette: &Palette) {
    let rect = Rect::new(
        HUB.x - HUB_HALF_W,
        HUB.y - HUB_HALF_H,
        HUB.x + HUB_HALF_W,
        HUB.y + HUB_HALF_H,
    );
    let shape = Shape::RoundedRect {
        rect,
        style: Style::solid(palette.title_ink)
            .outlined(palette.title_ink.darken(0.6), 3.0)
            .rounded(15.0),
    };
    draw::with_shadow(canvas, &shape, Shadow::soft());
    let font = fonts.font(20.0, Weight::Bold);
    draw::draw_centered(
        canvas,
        &font,
        HUB,
        &["AI COMPUTE", "PLATFORM"],
        Color::WHITE,
        2.0,
    );
}

fn draw_pillar(canvas: &mut Canvas, fonts: &FontLibrary, accent: &AccentColors, pillar: &Pillar) {
    let shape = Shape::RoundedRect {
        rect: pillar.rect,
        style: Style::filled(accent.box_fill())
            .outlined(accent.edge, 3.0)
            .rounded(15.0),
    };
    draw::with_shadow(canvas, &shape, Shadow::soft());

    let x0 = pillar.rect.x0;
    let y0 = pillar.rect.y0;
    let heading_top = if let Some(badge) = pillar.badge {
        let badge_rect = Rect::new(x0 + 10.0, y0 + 10.0, x0 + 120.0, y0 + 40.0);
        draw::draw_shape(
            canvas,
            &Shape::Pill {
                rect: badge_rect,
                style: Style::solid(accent.deep),
            },
        );
        let badge_font = fonts.font(18.0, Weight::Bold);
        draw::draw_centered(
            canvas,
            &badge_font,
            badge_rect.center(),
            &[badge],
            Color::WHITE,
            0.0,
        );
        50.0
    } else {
        20.0
    };

    let heading_font = fonts.font(22.0, Weight::Bold);
    draw::draw_text(
        canvas,
        &heading_font,
        Point::new(x0 + 20.0, y0 + heading_top),
        pillar.heading,
        Color::WHITE,
    );

    // Continuation lines are indented two spaces and sit tight under their
    // bullet.
    let item_font = fonts.font(16.0, Weight::Regular);
    let mut y = y0 + pillar.items_top;
    for (i, item) in pillar.items.iter().enumerate() {
        draw::draw_text(canvas, &item_font, Point::new(x0 + 20.0, y), item, Color::WHITE);
        let continuation_next = pillar
            .items
            .get(i + 1)
            .is_some_and(|next| next.starts_with("  "));
        y += if continuation_next { 22.0 } else { 28.0 };
    }
}
