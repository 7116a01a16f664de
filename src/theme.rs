use crate::color::Color;
use crate::draw::Fill;
use crate::error::RenderError;
use serde::{Deserialize, Serialize};

/// One accent family: box fill, its outline, and a deep variant used for
/// badges and emphasis panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accent {
    pub fill: String,
    pub edge: String,
    pub deep: String,
}

impl Accent {
    fn new(fill: &str, edge: &str, deep: &str) -> Self {
        Self {
            fill: fill.to_string(),
            edge: edge.to_string(),
            deep: deep.to_string(),
        }
    }

    fn parse(&self) -> Result<AccentColors, RenderError> {
        Ok(AccentColors {
            fill: Color::from_hex(&self.fill)?,
            edge: Color::from_hex(&self.edge)?,
            deep: Color::from_hex(&self.deep)?,
        })
    }
}

/// Document palette as authored hex strings. Parsed once per run into a
/// [`Palette`]; a malformed literal fails the run immediately since these
/// are authoring-time values, not runtime input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub background: String,
    pub title_ink: String,
    pub body_ink: String,
    pub subtle_ink: String,
    pub panel_fill: String,
    pub panel_edge: String,
    pub blue: Accent,
    pub green: Accent,
    pub purple: Accent,
    pub orange: Accent,
    pub red: Accent,
    pub amber: Accent,
    pub bronze: Accent,
    pub slate: Accent,
    pub emerald: String,
    pub tint_blue: String,
    pub tint_green: String,
    pub tint_red: String,
    pub highlight_blue: String,
    pub highlight_green: String,
    pub highlight_red: String,
}

impl Theme {
    /// The palette of the fleet architecture documents.
    pub fn default_palette() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            title_ink: "#1B3A5C".to_string(),
            body_ink: "#1E293B".to_string(),
            subtle_ink: "#94A3B8".to_string(),
            panel_fill: "#F8FAFC".to_string(),
            panel_edge: "#CBD5E1".to_string(),
            blue: Accent::new("#2563EB", "#1D4ED8", "#1E40AF"),
            green: Accent::new("#059669", "#047857", "#065F46"),
            purple: Accent::new("#7C3AED", "#6D28D9", "#5B21B6"),
            orange: Accent::new("#EA580C", "#C2410C", "#9A3412"),
            red: Accent::new("#DC2626", "#B91C1C", "#991B1B"),
            amber: Accent::new("#D97706", "#B45309", "#92400E"),
            bronze: Accent::new("#B45309", "#92400E", "#78350F"),
            slate: Accent::new("#6B7280", "#4B5563", "#374151"),
            emerald: "#10B981".to_string(),
            tint_blue: "#DBEAFE".to_string(),
            tint_green: "#D1FAE5".to_string(),
            tint_red: "#FEE2E2".to_string(),
            highlight_blue: "#93C5FD".to_string(),
            highlight_green: "#6EE7B7".to_string(),
            highlight_red: "#FCA5A5".to_string(),
        }
    }

    pub fn palette(&self) -> Result<Palette, RenderError> {
        Ok(Palette {
            background: Color::from_hex(&self.background)?,
            title_ink: Color::from_hex(&self.title_ink)?,
            body_ink: Color::from_hex(&self.body_ink)?,
            subtle_ink: Color::from_hex(&self.subtle_ink)?,
            panel_fill: Color::from_hex(&self.panel_fill)?,
            panel_edge: Color::from_hex(&self.panel_edge)?,
            blue: self.blue.parse()?,
            green: self.green.parse()?,
            purple: self.purple.parse()?,
            orange: self.orange.parse()?,
            red: self.red.parse()?,
            amber: self.amber.parse()?,
            bronze: self.bronze.parse()?,
            slate: self.slate.parse()?,
            emerald: Color::from_hex(&self.emerald)?,
            tint_blue: Color::from_hex(&self.tint_blue)?,
            tint_green: Color::from_hex(&self.tint_green)?,
            tint_red: Color::from_hex(&self.tint_red)?,
            highlight_blue: Color::from_hex(&self.highlight_blue)?,
            highlight_green: Color::from_hex(&self.highlight_green)?,
            highlight_red: Color::from_hex(&self.highlight_red)?,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_palette()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentColors {
    pub fill: Color,
    pub edge: Color,
    pub deep: Color,
}

impl AccentColors {
    /// Vertical gradient pair for an accent box: slightly lifted at the
    /// top, slightly sunk at the bottom.
    pub fn box_fill(&self) -> Fill {
        Fill::Vertical {
            top: self.fill.lighten(1.10),
            bottom: self.fill.darken(0.92),
        }
    }
}

/// Fully parsed palette consumed by the composers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub title_ink: Color,
    pub body_ink: Color,
    pub subtle_ink: Color,
    pub panel_fill: Color,
    pub panel_edge: Color,
    pub blue: AccentColors,
    pub green: AccentColors,
    pub purple: AccentColors,
    pub orange: AccentColors,
    pub red: AccentColors,
    pub amber: AccentColors,
    pub bronze: AccentColors,
    pub slate: AccentColors,
    pub emerald: Color,
    pub tint_blue: Color,
    pub tint_green: Color,
    pub tint_red: Color,
    pub highlight_blue: Color,
    pub highlight_green: Color,
    pub highlight_red: Color,
}
