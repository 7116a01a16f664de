use crate::error::RenderError;

/// 8-bit RGBA color.
///
/// Diagram palettes are authored as `#RRGGBB` literals; alpha enters only
/// through compositing (shadows, blended strokes).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RRGGBB` (the `#` is optional, the six hex digits are not).
    ///
    /// Anything else is [`RenderError::InvalidColorFormat`]: palette entries
    /// are compile-time literals and a malformed one is an authoring bug.
    pub fn from_hex(literal: &str) -> Result<Self, RenderError> {
        let digits = literal.strip_prefix('#').unwrap_or(literal);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RenderError::InvalidColorFormat {
                literal: literal.to_string(),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).expect("validated hex digits")
        };
        Ok(Self::rgb(channel(0..2), channel(2..4), channel(4..6)))
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scales each channel toward black. `factor` below 1 darkens; 1.0 is
    /// the identity. Alpha is untouched.
    pub fn darken(self, factor: f32) -> Self {
        self.scaled(factor)
    }

    /// Scales each channel away from black, clamping at 255. `factor` above
    /// 1 lightens; 1.0 is the identity. Alpha is untouched.
    pub fn lighten(self, factor: f32) -> Self {
        self.scaled(factor)
    }

    fn scaled(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Per-channel linear interpolation with `t` clamped to `[0, 1]`.
    ///
    /// `t == 0.0` returns `a` and `t == 1.0` returns `b` exactly, so gradient
    /// boundary rows reproduce their endpoint colors with no drift.
    pub fn lerp(a: Color, b: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
        Color {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
            a: mix(a.a, b.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Color::from_hex("#2563EB").unwrap(), Color::rgb(0x25, 0x63, 0xEB));
        assert_eq!(Color::from_hex("1b3a5c").unwrap(), Color::rgb(0x1B, 0x3A, 0x5C));
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in ["", "#fff", "#22334", "#2233445", "not-a-color", "#12g456"] {
            assert!(
                matches!(
                    Color::from_hex(bad),
                    Err(RenderError::InvalidColorFormat { .. })
                ),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn unit_factor_is_identity() {
        let c = Color::rgb(37, 99, 235);
        assert_eq!(c.darken(1.0), c);
        assert_eq!(c.lighten(1.0), c);
    }

    #[test]
    fn darken_never_raises_a_channel() {
        let c = Color::rgb(200, 100, 7);
        let d = c.darken(0.8);
        assert!(d.r <= c.r && d.g <= c.g && d.b <= c.b);
    }

    #[test]
    fn lighten_never_lowers_a_channel_and_clamps() {
        let c = Color::rgb(200, 100, 7);
        let l = c.lighten(1.5);
        assert!(l.r >= c.r && l.g >= c.g && l.b >= c.b);
        assert_eq!(Color::rgb(250, 250, 250).lighten(2.0), Color::WHITE);
    }

    #[test]
    fn lerp_hits_both_endpoints_exactly() {
        let a = Color::rgb(10, 200, 77);
        let b = Color::rgb(240, 3, 128);
        assert_eq!(Color::lerp(a, b, 0.0), a);
        assert_eq!(Color::lerp(a, b, 1.0), b);
        assert_eq!(Color::lerp(a, b, -2.0), a);
        assert_eq!(Color::lerp(a, b, 2.0), b);
    }

    #[test]
    fn alpha_survives_scaling() {
        let c = Color::rgba(80, 80, 80, 90);
        assert_eq!(c.darken(0.5).a, 90);
        assert_eq!(c.lighten(1.5).a, 90);
    }
}
