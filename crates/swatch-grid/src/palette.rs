//! Cell colors.
//!
//! [`Swatch`] is the token stored in the collection; [`ColorRgba`] is what a
//! renderer actually fills a cell with.

use std::fmt;
use std::str::FromStr;

/// Straight-alpha RGBA color, channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Rounds each channel back to a byte.
    #[inline]
    pub fn to_u8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Background behind the grid.
pub const BACKGROUND: ColorRgba = ColorRgba::opaque(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);

/// Corner radius applied to every cell.
pub const CELL_CORNER_RADIUS: f32 = 5.0;

/// One of the nine palette colors a cell can take.
///
/// Equality is by value: two cells holding `Swatch::Red` are indistinguishable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Swatch {
    Black,
    Blue,
    Brown,
    Cyan,
    Green,
    Orange,
    Red,
    Purple,
    Yellow,
}

impl Swatch {
    pub const ALL: [Swatch; 9] = [
        Swatch::Black,
        Swatch::Blue,
        Swatch::Brown,
        Swatch::Cyan,
        Swatch::Green,
        Swatch::Orange,
        Swatch::Red,
        Swatch::Purple,
        Swatch::Yellow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Swatch::Black => "black",
            Swatch::Blue => "blue",
            Swatch::Brown => "brown",
            Swatch::Cyan => "cyan",
            Swatch::Green => "green",
            Swatch::Orange => "orange",
            Swatch::Red => "red",
            Swatch::Purple => "purple",
            Swatch::Yellow => "yellow",
        }
    }

    pub fn rgba(self) -> ColorRgba {
        match self {
            Swatch::Black => ColorRgba::opaque(0.0, 0.0, 0.0),
            Swatch::Blue => ColorRgba::opaque(0.0, 0.0, 1.0),
            Swatch::Brown => ColorRgba::opaque(0.6, 0.4, 0.2),
            Swatch::Cyan => ColorRgba::opaque(0.0, 1.0, 1.0),
            Swatch::Green => ColorRgba::opaque(0.0, 1.0, 0.0),
            Swatch::Orange => ColorRgba::opaque(1.0, 0.5, 0.0),
            Swatch::Red => ColorRgba::opaque(1.0, 0.0, 0.0),
            Swatch::Purple => ColorRgba::opaque(0.5, 0.0, 0.5),
            Swatch::Yellow => ColorRgba::opaque(1.0, 1.0, 0.0),
        }
    }

    /// Palette entry at `i`, wrapping around.
    #[inline]
    pub fn cycled(i: usize) -> Swatch {
        Self::ALL[i % Self::ALL.len()]
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a color name is not in the palette.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown swatch `{0}` (expected one of: black, blue, brown, cyan, green, orange, red, purple, yellow)")]
pub struct UnknownSwatch(pub String);

impl FromStr for Swatch {
    type Err = UnknownSwatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Swatch::ALL
            .into_iter()
            .find(|sw| sw.name() == lower)
            .ok_or_else(|| UnknownSwatch(s.to_string()))
    }
}
