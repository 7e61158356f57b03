/// Insets on all four sides of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_like_uikit_insets() {
        let e = Edges::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(e.top, 1.0);
        assert_eq!(e.left, 2.0);
        assert_eq!(e.bottom, 3.0);
        assert_eq!(e.right, 4.0);
    }

    #[test]
    fn v_sums_top_and_bottom() {
        let e = Edges::new(10.0, 6.0, 12.0, 8.0);
        assert_eq!(e.v(), 22.0);
    }
}
