use std::num::NonZeroUsize;

/// Fixed geometry of the flow grid.
///
/// Immutable once built. `padding_width` is derived at construction so the
/// per-item size query stays a single subtraction and division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricParams {
    columns: NonZeroUsize,
    left_inset: f32,
    right_inset: f32,
    inter_item_spacing: f32,
    padding_width: f32,
}

impl GeometricParams {
    /// Negative or non-finite lengths are treated as zero.
    pub fn new(columns: NonZeroUsize, left_inset: f32, right_inset: f32, inter_item_spacing: f32) -> Self {
        let left_inset = sanitize("left_inset", left_inset);
        let right_inset = sanitize("right_inset", right_inset);
        let inter_item_spacing = sanitize("inter_item_spacing", inter_item_spacing);
        let gaps = (columns.get() - 1) as f32;
        Self {
            columns,
            left_inset,
            right_inset,
            inter_item_spacing,
            padding_width: left_inset + right_inset + gaps * inter_item_spacing,
        }
    }

    #[must_use]
    pub fn with_columns(self, columns: NonZeroUsize) -> Self {
        Self::new(columns, self.left_inset, self.right_inset, self.inter_item_spacing)
    }

    #[must_use]
    pub fn with_insets(self, left: f32, right: f32) -> Self {
        Self::new(self.columns, left, right, self.inter_item_spacing)
    }

    #[must_use]
    pub fn with_inter_item_spacing(self, spacing: f32) -> Self {
        Self::new(self.columns, self.left_inset, self.right_inset, spacing)
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns.get()
    }

    #[inline]
    pub fn left_inset(&self) -> f32 {
        self.left_inset
    }

    #[inline]
    pub fn right_inset(&self) -> f32 {
        self.right_inset
    }

    #[inline]
    pub fn inter_item_spacing(&self) -> f32 {
        self.inter_item_spacing
    }

    /// Horizontal space not available to cells in a row.
    #[inline]
    pub fn padding_width(&self) -> f32 {
        self.padding_width
    }
}

impl Default for GeometricParams {
    /// Three columns, 10pt insets and 10pt spacing.
    fn default() -> Self {
        Self::new(NonZeroUsize::MIN.saturating_add(2), 10.0, 10.0, 10.0)
    }
}

fn sanitize(what: &str, v: f32) -> f32 {
    if v.is_finite() && v >= 0.0 {
        v
    } else {
        log::warn!("GeometricParams: {what} = {v} is not a non-negative length; using 0");
        0.0
    }
}
