//! Word wrapping and text drawing.
//!
//! Wrapping is greedy against measured advance widths: words accumulate on
//! a line while the candidate still fits, the overflowing word starts the
//! next line, and a single word wider than the limit stands alone rather
//! than being split mid-word.

use super::Point;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::font::{Font, LINE_SPACING};

/// Wraps `text` to `max_width`. Embedded newlines split first and blank
/// segments survive as empty lines so authored spacing is preserved.
pub fn wrap(font: &Font<'_>, text: &str, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        let mut words = segment.split_whitespace();
        let Some(first) = words.next() else {
            lines.push(String::new());
            continue;
        };
        let mut current = first.to_string();
        for word in words {
            let candidate = format!("{current} {word}");
            if font.measure(&candidate).0 > max_width {
                lines.push(current);
                current = word.to_string();
            } else {
                current = candidate;
            }
        }
        lines.push(current);
    }
    lines
}

fn draw_line(canvas: &mut Canvas, font: &Font<'_>, x: f32, top: f32, line: &str, color: Color) {
    let baseline = top + font.ascent();
    font.render_line(x, baseline, line, |px, py, coverage| {
        let alpha = (coverage as u32 * color.a as u32 / 255) as u8;
        canvas.blend_pixel(px, py, color.with_alpha(alpha));
    });
}

/// Draws `text` top-left anchored at `pos`. Newline-separated lines stack
/// with the standard spacing.
pub fn draw_text(canvas: &mut Canvas, font: &Font<'_>, pos: Point, text: &str, color: Color) {
    let mut top = pos.y;
    for line in text.split('\n') {
        draw_line(canvas, font, pos.x, top, line, color);
        top += font.line_height() + LINE_SPACING;
    }
}

/// Wraps `text` to `max_width`, draws the lines top-left anchored at `pos`,
/// and returns the y coordinate just below the painted block.
pub fn draw_wrapped(
    canvas: &mut Canvas,
    font: &Font<'_>,
    pos: Point,
    text: &str,
    max_width: f32,
    color: Color,
    spacing: f32,
) -> f32 {
    let mut top = pos.y;
    for line in wrap(font, text, max_width) {
        draw_line(canvas, font, pos.x, top, &line, color);
        top += font.line_height() + spacing;
    }
    top
}

/// Draws `lines` as a block centered on `center`: each line centered about
/// `center.x` independently, the whole block centered about `center.y`.
pub fn draw_centered(
    canvas: &mut Canvas,
    font: &Font<'_>,
    center: Point,
    lines: &[impl AsRef<str>],
    color: Color,
    spacing: f32,
) {
    if lines.is_empty() {
        return;
    }
    let line_height = font.line_height();
    let block = lines.len() as f32 * line_height + (lines.len() - 1) as f32 * spacing;
    let mut top = center.y - block / 2.0;
    for line in lines {
        let line = line.as_ref();
        let width = font.measure(line).0;
        draw_line(canvas, font, center.x - width / 2.0, top, line, color);
        top += line_height + spacing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontLibrary, Weight};

    #[test]
    fn wrap_preserves_every_word_in_order() {
        let library = FontLibrary::builtin_only();
        let font = library.font(16.0, Weight::Regular);
        let text = "Cordon and taint enforcement with bounded self-heal retries";
        let lines = wrap(&font, text, 150.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrapped_lines_fit_unless_a_single_word_overflows() {
        let library = FontLibrary::builtin_only();
        let font = library.font(16.0, Weight::Regular);
        let max_width = 150.0;
        let lines = wrap(&font, "buffer pool replenishment via recertification", max_width);
        for line in &lines {
            if line.split_whitespace().count() > 1 {
                assert!(font.measure(line).0 <= max_width, "{line:?} overflows");
            }
        }
    }

    #[test]
    fn overflowing_word_breaks_after_the_measured_prefix() {
        let library = FontLibrary::builtin_only();
        let font = library.font(16.0, Weight::Regular);
        let text = "NPD Detectors + Custom Plugins";
        let max_width = font.measure("NPD Detectors").0;
        let lines = wrap(&font, text, max_width);
        assert_eq!(lines[0], "NPD Detectors");
        assert!(lines.len() >= 2);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn single_overwide_word_stands_alone_unsplit() {
        let library = FontLibrary::builtin_only();
        let font = library.font(16.0, Weight::Regular);
        let lines = wrap(&font, "recertification gate", 10.0);
        assert_eq!(lines, vec!["recertification".to_string(), "gate".to_string()]);
    }

    #[test]
    fn blank_segments_survive_as_empty_lines() {
        let library = FontLibrary::builtin_only();
        let font = library.font(16.0, Weight::Regular);
        let lines = wrap(&font, "above\n\nbelow", 500.0);
        assert_eq!(
            lines,
            vec!["above".to_string(), String::new(), "below".to_string()]
        );
    }

    #[test]
    fn draw_text_paints_glyph_pixels() {
        let library = FontLibrary::builtin_only();
        let font = library.font(8.0, Weight::Regular);
        let mut canvas = Canvas::new(40, 20, Color::WHITE);
        draw_text(&mut canvas, &font, Point::new(2.0, 2.0), "H", Color::BLACK);
        // 'H' keeps its left stem on the first glyph column.
        assert_eq!(canvas.pixel(2, 5), Some(Color::BLACK));
        assert_eq!(canvas.pixel(30, 10), Some(Color::WHITE));
    }

    #[test]
    fn draw_centered_centers_the_line_about_x() {
        let library = FontLibrary::builtin_only();
        let font = library.font(8.0, Weight::Regular);
        let mut canvas = Canvas::new(100, 40, Color::WHITE);
        draw_centered(
            &mut canvas,
            &font,
            Point::new(50.0, 20.0),
            &["HH"],
            Color::BLACK,
            4.0,
        );
        let mut min_x = i32::MAX;
        let mut max_x = i32::MIN;
        for y in 0..40 {
            for x in 0..100 {
                if canvas.pixel(x, y) == Some(Color::BLACK) {
                    min_x = min_x.min(x);
                    max_x = max_x.max(x);
                }
            }
        }
        // Two 6px advances centered on 50: glyph columns span 44..=54.
        assert_eq!(min_x, 44);
        assert_eq!(max_x, 54);
    }
}
