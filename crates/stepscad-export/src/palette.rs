//! Face colors for the per-face SCAD output.

use std::fmt;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Channels scaled to `0.0..=1.0`, as OpenSCAD's `color()` expects.
    pub fn to_unit(self) -> [f64; 3] {
        [self.0, self.1, self.2].map(|c| f64::from(c) / 255.0)
    }
}

impl fmt::Display for Rgb {
    /// Formats as an OpenSCAD vector, e.g. `[0.651, 0.808, 0.890]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_unit();
        write!(f, "[{r:.3}, {g:.3}, {b:.3}]")
    }
}

/// Twelve qualitative colors; neighbours are easy to tell apart.
pub const PALETTE: [Rgb; 12] = [
    Rgb(166, 206, 227),
    Rgb(31, 120, 180),
    Rgb(178, 223, 138),
    Rgb(51, 160, 44),
    Rgb(251, 154, 153),
    Rgb(227, 26, 28),
    Rgb(253, 191, 111),
    Rgb(255, 127, 0),
    Rgb(202, 178, 214),
    Rgb(106, 61, 154),
    Rgb(255, 255, 153),
    Rgb(177, 89, 40),
];

/// Color of the face at position `n` of a face vector.
///
/// Depends only on `n`, so output is reproducible across runs.
pub fn face_color(n: usize) -> Rgb {
    PALETTE[n % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(face_color(0), PALETTE[0]);
        assert_eq!(face_color(11), PALETTE[11]);
        assert_eq!(face_color(12), PALETTE[0]);
        assert_eq!(face_color(25), PALETTE[1]);
    }

    #[test]
    fn test_neighbours_differ() {
        for n in 0..PALETTE.len() {
            assert_ne!(face_color(n), face_color(n + 1));
        }
    }

    #[test]
    fn test_unit_and_display() {
        let [r, g, b] = Rgb(255, 0, 51).to_unit();
        assert_relative_eq!(r, 1.0);
        assert_relative_eq!(g, 0.0);
        assert_relative_eq!(b, 0.2);
        assert_eq!(Rgb(255, 0, 51).to_string(), "[1.000, 0.000, 0.200]");
    }
}
