use std::ops::Range;

/// Positions changed by a single mutation.
///
/// Both lists are strictly ascending. `removed` holds indices as they were
/// *before* the mutation; `inserted` holds indices *after* it. A host applies
/// removals first (highest index first), then insertions (lowest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexDiff {
    pub inserted: Vec<usize>,
    pub removed: Vec<usize>,
}

impl IndexDiff {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn inserted(range: Range<usize>) -> Self {
        Self { inserted: range.collect(), removed: Vec::new() }
    }

    /// `indices` must already be ascending.
    pub fn removed(indices: Vec<usize>) -> Self {
        debug_assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "IndexDiff::removed: indices not strictly ascending: {indices:?}"
        );
        Self { inserted: Vec::new(), removed: indices }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.removed.is_empty()
    }

    /// Change in item count once the diff is applied.
    #[inline]
    pub fn delta(&self) -> isize {
        self.inserted.len() as isize - self.removed.len() as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_empty() {
        assert!(IndexDiff::empty().is_empty());
        assert_eq!(IndexDiff::empty().delta(), 0);
    }

    #[test]
    fn inserted_expands_range() {
        let d = IndexDiff::inserted(3..6);
        assert_eq!(d.inserted, vec![3, 4, 5]);
        assert!(d.removed.is_empty());
        assert_eq!(d.delta(), 3);
    }

    #[test]
    fn empty_range_is_empty_diff() {
        assert!(IndexDiff::inserted(4..4).is_empty());
    }

    #[test]
    fn removed_delta_is_negative() {
        assert_eq!(IndexDiff::removed(vec![0, 2]).delta(), -2);
    }
}
