// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    const DARKER_FACTOR: f64 = 0.5;
    const LIGHTER_FACTOR: f64 = 1.5;

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num >> 0) as u8;

        Color { r, g, b, a }
    }

    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Per-channel linear blend from `self` towards `other`, truncating each
    /// channel. `t` is expected in [0, 1) and is not clamped.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let mix = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t) as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a,
        }
    }

    // Shade used for the outer ring stroke
    pub fn darken(self) -> Color {
        let scale = |c: u8| (c as f64 * Color::DARKER_FACTOR) as u8;
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    // Highlight used for the inner ring stroke, saturating at 255
    pub fn lighten(self) -> Color {
        let scale = |c: u8| (c as f64 * Color::LIGHTER_FACTOR).min(255.0) as u8;
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }
}
