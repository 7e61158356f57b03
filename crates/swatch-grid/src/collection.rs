use crate::coords::{Edges, Vec2};
use crate::diff::IndexDiff;
use crate::error::GridError;
use crate::params::GeometricParams;

/// Vertical inset above the first row and below the last.
pub const SECTION_VERTICAL_INSET: f32 = 10.0;

/// Vertical gap between rows.
pub const LINE_SPACING: f32 = 10.0;

/// Ordered list of colors laid out as a fixed-column flow grid.
///
/// The host polls the query methods during its layout pass and calls the two
/// mutations in response to user input. Each mutation returns the [`IndexDiff`]
/// the host must apply so its rendered cells stay in step with `item_count`.
///
/// # Example
/// ```
/// use swatch_grid::{GridCollection, GeometricParams, Swatch};
///
/// let mut grid = GridCollection::new(GeometricParams::default());
/// let diff = grid.append_batch([Swatch::Red, Swatch::Blue, Swatch::Red]);
/// assert_eq!(diff.inserted, vec![0, 1, 2]);
///
/// let diff = grid.remove_matching(&Swatch::Red);
/// assert_eq!(diff.removed, vec![0, 2]);
/// assert_eq!(grid.item_at(0), Ok(&Swatch::Blue));
/// ```
#[derive(Debug, Clone)]
pub struct GridCollection<C> {
    params: GeometricParams,
    items: Vec<C>,
}

impl<C: PartialEq> GridCollection<C> {
    pub fn new(params: GeometricParams) -> Self {
        Self { params, items: Vec::new() }
    }

    #[inline]
    pub fn params(&self) -> &GeometricParams {
        &self.params
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_at(&self, index: usize) -> Result<&C, GridError> {
        self.items
            .get(index)
            .ok_or(GridError::OutOfRange { index, count: self.items.len() })
    }

    /// All items in display order.
    #[inline]
    pub fn items(&self) -> &[C] {
        &self.items
    }

    /// Size of the cell at `index` when the grid is `available_width` wide.
    ///
    /// Every cell has the same size; `index` is accepted so hosts can call this
    /// per item. A width narrower than the padding yields a zero-sized cell.
    pub fn item_size(&self, _index: usize, available_width: f32) -> Vec2 {
        let usable = available_width - self.params.padding_width();
        if usable.is_nan() || usable <= 0.0 {
            log::warn!(
                "item_size: available width {available_width} leaves no room after {} of padding",
                self.params.padding_width()
            );
            return Vec2::zero();
        }
        let width = usable / self.params.columns() as f32;
        // Fixed 3:2 cell.
        Vec2::new(width, width * 2.0 / 3.0)
    }

    pub fn section_inset(&self) -> Edges {
        Edges::new(
            SECTION_VERTICAL_INSET,
            self.params.left_inset(),
            SECTION_VERTICAL_INSET,
            self.params.right_inset(),
        )
    }

    #[inline]
    pub fn line_spacing(&self) -> f32 {
        LINE_SPACING
    }

    #[inline]
    pub fn inter_item_spacing(&self) -> f32 {
        self.params.inter_item_spacing()
    }

    // ── mutations ─────────────────────────────────────────────────────────

    /// Appends `values` in order and reports the new tail as inserted.
    pub fn append_batch(&mut self, values: impl IntoIterator<Item = C>) -> IndexDiff {
        let old_count = self.items.len();
        self.items.extend(values);
        let new_count = self.items.len();

        if new_count == old_count {
            return IndexDiff::empty();
        }
        log::debug!("append_batch: inserted {old_count}..{new_count}");
        IndexDiff::inserted(old_count..new_count)
    }

    /// Removes every item equal to `value` and reports their original indices.
    pub fn remove_matching(&mut self, value: &C) -> IndexDiff {
        let matches: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| *item == value)
            .map(|(i, _)| i)
            .collect();

        if matches.is_empty() {
            return IndexDiff::empty();
        }

        // Highest first, so each removal leaves the remaining targets in place.
        for &i in matches.iter().rev() {
            self.items.remove(i);
        }

        log::debug!(
            "remove_matching: removed {} items, {} remain",
            matches.len(),
            self.items.len()
        );
        IndexDiff::removed(matches)
    }
}
