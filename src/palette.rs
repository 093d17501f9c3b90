// Ordered list of reference colors that particles cycle through by index

use crate::color::Color;

pub const REFERENCE_COLORS: [Color; 14] = [
    Color::rgb(255, 0, 0),     // red
    Color::rgb(255, 165, 0),   // orange
    Color::rgb(255, 255, 0),   // yellow
    Color::rgb(0, 128, 0),     // green
    Color::rgb(0, 0, 255),     // blue
    Color::rgb(128, 0, 128),   // purple
    Color::rgb(255, 192, 203), // pink
    Color::rgb(0, 255, 255),   // cyan
    Color::rgb(0, 255, 255),   // aqua
    Color::rgb(255, 0, 255),   // magenta
    Color::rgb(255, 215, 0),   // gold
    Color::rgb(0, 255, 0),     // lime
    Color::rgb(64, 224, 208),  // turquoise
    Color::rgb(255, 255, 255), // white
];

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Returns `None` for an empty color list; every palette index is taken
    /// modulo `len()`, which must never be zero.
    pub fn new(colors: Vec<Color>) -> Option<Palette> {
        if colors.is_empty() {
            None
        } else {
            Some(Palette { colors })
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    // Always false, `new` refuses an empty list
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    pub fn successor(&self, index: usize) -> usize {
        (index + 1) % self.colors.len()
    }

    // Color partway through the fade from `index` to `next_index`
    pub fn blend(&self, index: usize, next_index: usize, t: f64) -> Color {
        self.get(index).lerp(self.get(next_index), t)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: REFERENCE_COLORS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_palette_has_fourteen_entries() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 14);
        assert_eq!(palette.get(0), Color::rgb(255, 0, 0));
        assert_eq!(palette.get(13), Color::rgb(255, 255, 255));
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(Palette::new(Vec::new()).is_none());
        let single = Palette::new(vec![Color::rgb(1, 2, 3)]).unwrap();
        assert!(!single.is_empty());
        assert_eq!(single.successor(0), 0);
    }

    #[test]
    fn successor_wraps_around() {
        let palette = Palette::default();
        assert_eq!(palette.successor(0), 1);
        assert_eq!(palette.successor(13), 0);
    }

    #[test]
    fn blend_interpolates_between_entries() {
        let palette = Palette::default();
        // red -> orange, a quarter of the way
        assert_eq!(palette.blend(0, 1, 0.25), Color::rgb(255, 41, 0));
        assert_eq!(palette.blend(13, 0, 0.0), Color::rgb(255, 255, 255));
    }
}
