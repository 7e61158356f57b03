/// 2D vector in logical pixels. Doubles as a width/height pair.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Width when the vector is used as a size.
    #[inline]
    pub fn width(self) -> f32 {
        self.x
    }

    /// Height when the vector is used as a size.
    #[inline]
    pub fn height(self) -> f32 {
        self.y
    }
}
