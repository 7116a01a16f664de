//! Font resolution and glyph metrics.
//!
//! Resolution per weight walks three tiers: well-known system font files
//! first (DejaVu Sans, then Liberation Sans), then a fontdb query for any
//! sans-serif face, and finally the embedded bitmap set. Resolution never
//! fails a render; a missing font only degrades glyph quality, logged once
//! per weight.

pub mod builtin;

use fontdb::{Database, Family, Query, Stretch, Weight as DbWeight};
use fontdue::{Font as Face, FontSettings};
use log::warn;
use once_cell::sync::Lazy;

/// Extra rows between the lines of a multi-line string.
pub(crate) const LINE_SPACING: f32 = 4.0;

static SHARED: Lazy<FontLibrary> = Lazy::new(FontLibrary::load);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weight {
    Regular,
    Bold,
}

const REGULAR_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];
const BOLD_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

enum GlyphSource {
    Outline(Face),
    Builtin,
}

/// Resolved glyph sources for both weights. Immutable once constructed, so
/// parallel diagram renders can share one instance freely.
pub struct FontLibrary {
    regular: GlyphSource,
    bold: GlyphSource,
}

impl FontLibrary {
    /// Process-wide instance, resolved on first use.
    pub fn shared() -> &'static FontLibrary {
        &SHARED
    }

    pub fn load() -> FontLibrary {
        FontLibrary {
            regular: resolve_weight(Weight::Regular),
            bold: resolve_weight(Weight::Bold),
        }
    }

    pub fn font(&self, size: f32, weight: Weight) -> Font<'_> {
        let source = match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        };
        Font { source, size }
    }

    /// Library pinned to the embedded glyph set, for deterministic layout
    /// assertions regardless of the host's installed fonts.
    #[cfg(test)]
    pub(crate) fn builtin_only() -> FontLibrary {
        FontLibrary {
            regular: GlyphSource::Builtin,
            bold: GlyphSource::Builtin,
        }
    }
}

fn resolve_weight(weight: Weight) -> GlyphSource {
    let paths = match weight {
        Weight::Regular => REGULAR_PATHS,
        Weight::Bold => BOLD_PATHS,
    };
    for path in paths {
        if let Ok(bytes) = std::fs::read(path) {
            match Face::from_bytes(bytes, FontSettings::default()) {
                Ok(face) => return GlyphSource::Outline(face),
                Err(err) => warn!("ignoring unparseable font file {path}: {err}"),
            }
        }
    }
    if let Some(face) = query_system_face(weight) {
        return GlyphSource::Outline(face);
    }
    warn!("no usable {weight:?} font found, falling back to built-in glyphs");
    GlyphSource::Builtin
}

fn query_system_face(weight: Weight) -> Option<Face> {
    let mut db = Database::new();
    db.load_system_fonts();
    let query = Query {
        families: &[Family::SansSerif],
        weight: match weight {
            Weight::Regular => DbWeight::NORMAL,
            Weight::Bold => DbWeight::BOLD,
        },
        stretch: Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let id = db.query(&query)?;
    let mut loaded = None;
    db.with_face_data(id, |data, index| {
        let settings = FontSettings {
            collection_index: index,
            ..FontSettings::default()
        };
        match Face::from_bytes(data.to_vec(), settings) {
            Ok(face) => loaded = Some(face),
            Err(err) => warn!("ignoring unparseable system sans-serif face: {err}"),
        }
    });
    loaded
}

/// Cheap handle over a resolved glyph source at one pixel size.
#[derive(Clone, Copy)]
pub struct Font<'a> {
    source: &'a GlyphSource,
    size: f32,
}

impl Font<'_> {
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Distance from the top of a line box to the baseline.
    pub(crate) fn ascent(&self) -> f32 {
        match self.source {
            GlyphSource::Outline(face) => face
                .horizontal_line_metrics(self.size)
                .map(|m| m.ascent)
                .unwrap_or(self.size * 0.8),
            GlyphSource::Builtin => {
                (builtin::GLYPH_HEIGHT * builtin::scale_for(self.size)) as f32
            }
        }
    }

    pub fn line_height(&self) -> f32 {
        match self.source {
            GlyphSource::Outline(face) => face
                .horizontal_line_metrics(self.size)
                .map(|m| m.ascent - m.descent)
                .unwrap_or(self.size * 1.2),
            GlyphSource::Builtin => {
                (builtin::LINE_HEIGHT * builtin::scale_for(self.size)) as f32
            }
        }
    }

    /// Width and height of `text`. Width is the advance sum of the widest
    /// line (kerning applied); height stacks the lines with the standard
    /// spacing. Pure: identical inputs always yield identical results.
    pub fn measure(&self, text: &str) -> (f32, f32) {
        let mut width = 0.0f32;
        let mut lines = 0usize;
        for line in text.split('\n') {
            width = width.max(self.line_advance(line));
            lines += 1;
        }
        let height = lines as f32 * self.line_height() + (lines - 1) as f32 * LINE_SPACING;
        (width, height)
    }

    fn line_advance(&self, line: &str) -> f32 {
        match self.source {
            GlyphSource::Outline(face) => {
                let mut width = 0.0f32;
                let mut prev = None;
                for ch in line.chars() {
                    if let Some(prev) = prev {
                        width += face.horizontal_kern(prev, ch, self.size).unwrap_or(0.0);
                    }
                    width += face.metrics(ch, self.size).advance_width;
                    prev = Some(ch);
                }
                width
            }
            GlyphSource::Builtin => {
                (line.chars().count() as i32 * builtin::ADVANCE * builtin::scale_for(self.size))
                    as f32
            }
        }
    }

    /// Rasterizes one line and emits `(x, y, coverage)` per touched pixel,
    /// pen starting at `x` with the baseline on `baseline`. The caller
    /// composites coverage into color; clipping happens at the canvas.
    pub(crate) fn render_line(
        &self,
        x: f32,
        baseline: f32,
        line: &str,
        mut emit: impl FnMut(i32, i32, u8),
    ) {
        match self.source {
            GlyphSource::Outline(face) => {
                let mut pen = x;
                let mut prev = None;
                for ch in line.chars() {
                    if let Some(prev) = prev {
                        pen += face.horizontal_kern(prev, ch, self.size).unwrap_or(0.0);
                    }
                    let (metrics, bitmap) = face.rasterize(ch, self.size);
                    if metrics.width > 0 {
                        let gx = (pen + metrics.xmin as f32).round() as i32;
                        let gy = baseline.round() as i32 - (metrics.height as i32 + metrics.ymin);
                        for (i, &coverage) in bitmap.iter().enumerate() {
                            if coverage > 0 {
                                let col = (i % metrics.width) as i32;
                                let row = (i / metrics.width) as i32;
                                emit(gx + col, gy + row, coverage);
                            }
                        }
                    }
                    pen += metrics.advance_width;
                    prev = Some(ch);
                }
            }
            GlyphSource::Builtin => {
                let scale = builtin::scale_for(self.size);
                let mut pen = x.round() as i32;
                let top = baseline.round() as i32 - builtin::GLYPH_HEIGHT * scale;
                for ch in line.chars() {
                    let rows = builtin::glyph(ch);
                    for (row, &bits) in rows.iter().enumerate() {
                        for col in 0..builtin::GLYPH_WIDTH {
                            if (bits >> (builtin::GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                                for sy in 0..scale {
                                    for sx in 0..scale {
                                        emit(
                                            pen + col * scale + sx,
                                            top + row as i32 * scale + sy,
                                            255,
                                        );
                                    }
                                }
                            }
                        }
                    }
                    pen += builtin::ADVANCE * scale;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_library() -> FontLibrary {
        FontLibrary::builtin_only()
    }

    #[test]
    fn measure_is_idempotent_and_monotonic() {
        let library = FontLibrary::load();
        let font = library.font(16.0, Weight::Regular);
        let short = font.measure("NPD Detectors");
        let long = font.measure("NPD Detectors + Custom Plugins");
        assert_eq!(short, font.measure("NPD Detectors"));
        assert!(short.0 > 0.0);
        assert!(long.0 > short.0);
    }

    #[test]
    fn empty_text_has_zero_width_and_one_line_of_height() {
        let library = FontLibrary::load();
        let font = library.font(14.0, Weight::Bold);
        let (w, h) = font.measure("");
        assert_eq!(w, 0.0);
        assert!((h - font.line_height()).abs() < f32::EPSILON);
    }

    #[test]
    fn multiline_measure_takes_the_widest_line() {
        let library = FontLibrary::load();
        let font = library.font(16.0, Weight::Regular);
        let (block_w, block_h) = font.measure("Healthy Fleet\nMaintenance");
        let (first_w, _) = font.measure("Healthy Fleet");
        assert_eq!(block_w, first_w.max(font.measure("Maintenance").0));
        assert!(block_h > font.line_height());
    }

    #[test]
    fn builtin_advance_scales_with_size() {
        let library = builtin_library();
        let small = library.font(8.0, Weight::Regular);
        let large = library.font(16.0, Weight::Regular);
        assert_eq!(small.measure("abc").0, 18.0);
        assert_eq!(large.measure("abc").0, 36.0);
    }

    #[test]
    fn builtin_rendering_stays_inside_the_advance_box() {
        let library = builtin_library();
        let font = library.font(8.0, Weight::Bold);
        let mut max_x = i32::MIN;
        let mut any = false;
        font.render_line(0.0, 7.0, "Hi", |x, y, cov| {
            assert_eq!(cov, 255);
            assert!((0..12).contains(&x), "x {x} outside two advances");
            assert!((0..7).contains(&y), "y {y} outside glyph rows");
            max_x = max_x.max(x);
            any = true;
        });
        assert!(any);
        assert!(max_x < 11);
    }
}
