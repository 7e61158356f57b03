use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use swatch_grid::coords::Vec2;
use swatch_grid::palette::{BACKGROUND, CELL_CORNER_RADIUS};
use swatch_grid::{ColorRgba, FlowLayout, GeometricParams, GridCollection, GridError, IndexDiff, Swatch};

/// Largest number of cells a single add may generate.
pub const MAX_BATCH: usize = 10_000;

// ── CellView ──────────────────────────────────────────────────────────────

/// What the host has on screen for one position.
///
/// Built from the collection when the cell is inserted and never refreshed
/// afterwards, so a mis-applied diff shows up as stale cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    pub swatch: Swatch,
    pub fill: ColorRgba,
    pub corner_radius: f32,
}

impl CellView {
    fn new(swatch: Swatch) -> Self {
        Self { swatch, fill: swatch.rgba(), corner_radius: CELL_CORNER_RADIUS }
    }
}

// ── SyncError ─────────────────────────────────────────────────────────────

/// A diff that could not be applied to the rendered cells.
#[derive(Debug, Error, PartialEq)]
pub enum SyncError {
    #[error("diff removes index {index} but only {rendered} cells are rendered")]
    StaleRemoval { index: usize, rendered: usize },
    #[error("diff inserts at {index} past the {rendered} rendered cells")]
    GappedInsert { index: usize, rendered: usize },
    #[error("diff would leave {rendered} cells but the grid reports {reported}")]
    CountMismatch { rendered: isize, reported: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

// ── HostView ──────────────────────────────────────────────────────────────

/// Stand-in for the scrolling collection view that displays the grid.
///
/// Owns the model, polls it for layout, and keeps its own list of rendered
/// cells in step by applying each returned [`IndexDiff`].
pub struct HostView {
    grid: GridCollection<Swatch>,
    layout: FlowLayout,
    cells: Vec<CellView>,
    scroll_offset: f32,
    /// Colors taken out by each removal, most recent last.
    removed: Vec<Vec<Swatch>>,
    rng: StdRng,
}

impl HostView {
    pub fn new(params: GeometricParams, layout: FlowLayout, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            grid: GridCollection::new(params),
            layout,
            cells: Vec::new(),
            scroll_offset: 0.0,
            removed: Vec::new(),
            rng,
        }
    }

    #[inline]
    pub fn grid(&self) -> &GridCollection<Swatch> {
        &self.grid
    }

    #[inline]
    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Number of removals that can still be undone with [`restore_removed`](Self::restore_removed).
    #[inline]
    pub fn removed_batches(&self) -> usize {
        self.removed.len()
    }

    // ── syncing ───────────────────────────────────────────────────────────

    /// Throws away the rendered cells and rebuilds them from the grid.
    pub fn reload(&mut self) {
        self.cells = self.grid.items().iter().copied().map(CellView::new).collect();
        self.scroll_offset = self.layout.clamp_scroll(&self.grid, self.scroll_offset);
        log::debug!("reload: {} cells", self.cells.len());
    }

    /// Applies `diff` to the rendered cells as one batch update.
    ///
    /// Removals run highest index first, then insertions lowest first. A diff
    /// that would leave a different count than the grid reports is rejected
    /// before any cell is touched.
    pub fn apply_diff(&mut self, diff: &IndexDiff) -> Result<(), SyncError> {
        let reported = self.grid.item_count();
        let expected = self.cells.len() as isize + diff.delta();
        if expected != reported as isize {
            return Err(SyncError::CountMismatch { rendered: expected, reported });
        }

        for &index in diff.removed.iter().rev() {
            if index >= self.cells.len() {
                return Err(SyncError::StaleRemoval { index, rendered: self.cells.len() });
            }
            self.cells.remove(index);
        }

        for &index in &diff.inserted {
            if index > self.cells.len() {
                return Err(SyncError::GappedInsert { index, rendered: self.cells.len() });
            }
            let swatch = *self.grid.item_at(index)?;
            self.cells.insert(index, CellView::new(swatch));
        }

        self.scroll_offset = self.layout.clamp_scroll(&self.grid, self.scroll_offset);
        Ok(())
    }

    /// Applies `diff`, falling back to a full reload if it does not fit.
    fn perform_batch_updates(&mut self, diff: &IndexDiff) {
        if diff.is_empty() {
            return;
        }
        if let Err(e) = self.apply_diff(diff) {
            log::warn!("batch update failed ({e}); reloading");
            self.reload();
        }
    }

    // ── user actions ──────────────────────────────────────────────────────

    pub fn append(&mut self, swatches: Vec<Swatch>) -> IndexDiff {
        let diff = self.grid.append_batch(swatches);
        self.perform_batch_updates(&diff);
        diff
    }

    /// Appends `count` randomly chosen swatches, at most [`MAX_BATCH`].
    pub fn add_random(&mut self, count: usize) -> IndexDiff {
        if count > MAX_BATCH {
            log::warn!("add_random: batch of {count} capped at {MAX_BATCH}");
        }
        let count = count.min(MAX_BATCH);
        let swatches: Vec<Swatch> = (0..count)
            .map(|_| Swatch::ALL[self.rng.gen_range(0..Swatch::ALL.len())])
            .collect();
        let diff = self.append(swatches);
        log::info!("added {} cells, {} total", diff.inserted.len(), self.grid.item_count());
        diff
    }

    /// Removes every cell with the given color.
    pub fn remove_swatch(&mut self, swatch: Swatch) -> IndexDiff {
        let diff = self.grid.remove_matching(&swatch);
        if !diff.removed.is_empty() {
            self.removed.push(vec![swatch; diff.removed.len()]);
            log::info!("removed {} {swatch} cells, {} left", diff.removed.len(), self.grid.item_count());
        }
        self.perform_batch_updates(&diff);
        diff
    }

    /// Selecting a cell removes every cell sharing its color.
    pub fn tap_index(&mut self, index: usize) -> Result<IndexDiff, GridError> {
        let swatch = *self.grid.item_at(index)?;
        Ok(self.remove_swatch(swatch))
    }

    /// Tap at a viewport-space point; `None` if it hits no cell.
    pub fn tap_point(&mut self, point: Vec2) -> Option<IndexDiff> {
        let index = self.layout.index_at(&self.grid, point, self.scroll_offset)?;
        self.tap_index(index).ok()
    }

    /// Re-appends the cells taken out by the most recent removal.
    pub fn restore_removed(&mut self) -> IndexDiff {
        match self.removed.pop() {
            Some(batch) => self.append(batch),
            None => IndexDiff::empty(),
        }
    }

    /// Non-finite deltas are ignored.
    pub fn scroll_by(&mut self, dy: f32) {
        if !dy.is_finite() {
            log::warn!("scroll_by: ignoring non-finite delta {dy}");
            return;
        }
        self.scroll_offset = self.layout.clamp_scroll(&self.grid, self.scroll_offset + dy);
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Text rendering of the rows currently in the viewport.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let columns = self.grid.params().columns();
        let size = self.grid.item_size(0, self.layout.viewport().x);
        let visible = self.layout.visible_range(&self.grid, self.scroll_offset);

        let _ = writeln!(
            out,
            "{} cells · {}×{} · cell {:.1}×{:.1} r{} on {} · scroll {:.0}/{:.0}",
            self.cells.len(),
            columns,
            self.layout.row_count(&self.grid),
            size.x,
            size.y,
            CELL_CORNER_RADIUS,
            hex(BACKGROUND),
            self.scroll_offset,
            self.layout.clamp_scroll(&self.grid, f32::INFINITY),
        );

        let mut row_start = visible.start;
        while row_start < visible.end {
            let row_end = (row_start + columns).min(visible.end);
            let _ = write!(out, " ");
            for i in row_start..row_end {
                let _ = write!(out, " [{i:>3} {:<6}]", self.cells[i].swatch.name());
            }
            out.push('\n');
            row_start = row_end;
        }
        out
    }
}

fn hex(color: ColorRgba) -> String {
    let [r, g, b, _] = color.to_u8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> HostView {
        HostView::new(GeometricParams::default(), FlowLayout::new(400.0, 600.0), Some(7))
    }

    fn rendered(h: &HostView) -> Vec<Swatch> {
        h.cells().iter().map(|c| c.swatch).collect()
    }

    // ── syncing ───────────────────────────────────────────────────────────

    #[test]
    fn cells_follow_appends_and_removals() {
        let mut h = host();
        h.append(vec![Swatch::Red, Swatch::Blue]);
        h.append(vec![Swatch::Red]);
        assert_eq!(rendered(&h), vec![Swatch::Red, Swatch::Blue, Swatch::Red]);

        let d = h.remove_swatch(Swatch::Red);
        assert_eq!(d.removed, vec![0, 2]);
        assert_eq!(rendered(&h), vec![Swatch::Blue]);
        assert_eq!(h.cells()[0].fill, Swatch::Blue.rgba());
    }

    #[test]
    fn add_random_is_reproducible_with_seed() {
        let mut a = host();
        let mut b = host();
        a.add_random(31);
        b.add_random(31);
        assert_eq!(a.grid().item_count(), 31);
        assert_eq!(rendered(&a), rendered(&b));
        assert_eq!(rendered(&a), a.grid().items());
    }

    #[test]
    fn stale_removal_is_rejected() {
        let mut h = host();
        h.append(vec![Swatch::Red]);
        // Remove from the model behind the host's back, then replay a bogus diff.
        h.grid.remove_matching(&Swatch::Red);
        h.cells.clear();
        h.grid.append_batch([Swatch::Blue]);
        h.cells.push(CellView::new(Swatch::Blue));
        h.grid.append_batch([Swatch::Blue]);
        let err = h.apply_diff(&IndexDiff { inserted: vec![0, 1], removed: vec![3] }).unwrap_err();
        assert_eq!(err, SyncError::StaleRemoval { index: 3, rendered: 1 });
    }

    #[test]
    fn diff_without_model_change_is_count_mismatch() {
        let mut h = host();
        h.append(vec![Swatch::Green, Swatch::Green]);
        let err = h.apply_diff(&IndexDiff::removed(vec![1])).unwrap_err();
        assert_eq!(err, SyncError::CountMismatch { rendered: 1, reported: 2 });

        // Rejected up front, so the rendered cells are untouched.
        assert_eq!(rendered(&h), vec![Swatch::Green, Swatch::Green]);
        h.append(vec![Swatch::Cyan]);
        assert_eq!(rendered(&h), vec![Swatch::Green, Swatch::Green, Swatch::Cyan]);
    }

    #[test]
    fn gapped_insert_falls_back_to_reload() {
        let mut h = host();
        h.grid.append_batch([Swatch::Red, Swatch::Blue, Swatch::Cyan]);
        h.cells.push(CellView::new(Swatch::Red));

        // Counts agree, but index 1 was never inserted.
        let diff = IndexDiff::inserted(2..4);
        assert_eq!(h.apply_diff(&diff), Err(SyncError::GappedInsert { index: 2, rendered: 1 }));

        h.cells.truncate(1);
        h.perform_batch_updates(&diff);
        assert_eq!(rendered(&h), h.grid().items());
    }

    // ── taps ──────────────────────────────────────────────────────────────

    #[test]
    fn tap_index_removes_all_of_that_color() {
        let mut h = host();
        h.append(vec![Swatch::Orange, Swatch::Black, Swatch::Orange, Swatch::Black]);
        let d = h.tap_index(3).unwrap();
        assert_eq!(d.removed, vec![1, 3]);
        assert_eq!(rendered(&h), vec![Swatch::Orange, Swatch::Orange]);
    }

    #[test]
    fn tap_index_out_of_range() {
        let mut h = host();
        assert_eq!(h.tap_index(0), Err(GridError::OutOfRange { index: 0, count: 0 }));
    }

    #[test]
    fn tap_point_hits_second_cell() {
        let mut h = host();
        h.append(vec![Swatch::Red, Swatch::Blue, Swatch::Red]);
        // Second column spans x 140..260 in a 400-wide viewport.
        let d = h.tap_point(Vec2::new(150.0, 20.0)).unwrap();
        assert_eq!(d.removed, vec![1]);
        assert!(h.tap_point(Vec2::new(135.0, 20.0)).is_none());
    }

    // ── restore ───────────────────────────────────────────────────────────

    #[test]
    fn restore_appends_last_removed_batch() {
        let mut h = host();
        h.append(vec![Swatch::Red, Swatch::Blue, Swatch::Red]);
        h.remove_swatch(Swatch::Red);
        assert_eq!(h.removed_batches(), 1);

        let d = h.restore_removed();
        assert_eq!(d.inserted, vec![1, 2]);
        assert_eq!(rendered(&h), vec![Swatch::Blue, Swatch::Red, Swatch::Red]);
        assert!(h.restore_removed().is_empty());
    }

    #[test]
    fn removing_absent_color_records_nothing() {
        let mut h = host();
        h.append(vec![Swatch::Red]);
        assert!(h.remove_swatch(Swatch::Yellow).is_empty());
        assert_eq!(h.removed_batches(), 0);
    }

    // ── scroll / render ───────────────────────────────────────────────────

    #[test]
    fn scroll_is_clamped_and_follows_removals() {
        let mut h = host();
        h.append((0..31).map(Swatch::cycled).collect());
        h.scroll_by(10_000.0);
        assert_eq!(h.scroll_offset(), 400.0);

        h.scroll_by(-50.0);
        assert_eq!(h.scroll_offset(), 350.0);

        // Dropping every black cell (indices 0, 9, 18, 27) leaves 9 rows, 820pt tall.
        h.remove_swatch(Swatch::Black);
        assert_eq!(h.scroll_offset(), 220.0);
    }

    #[test]
    fn non_finite_scroll_is_ignored() {
        let mut h = host();
        h.append((0..31).map(Swatch::cycled).collect());
        h.scroll_by(100.0);
        h.scroll_by(f32::NAN);
        h.scroll_by(f32::INFINITY);
        assert_eq!(h.scroll_offset(), 100.0);
        assert!(h.render().contains("scroll 100/400"));

        // Row 1 (y 100..180 in content space) sits at the viewport top.
        assert_eq!(h.tap_point(Vec2::new(15.0, 15.0)).map(|d| d.removed.len()), Some(4));
    }

    #[test]
    fn add_random_caps_huge_batches() {
        let mut h = host();
        let d = h.add_random(usize::MAX);
        assert_eq!(d.inserted.len(), MAX_BATCH);
        assert_eq!(h.cells().len(), MAX_BATCH);
    }

    #[test]
    fn render_lists_visible_rows() {
        let mut h = host();
        h.append(vec![Swatch::Red, Swatch::Blue, Swatch::Cyan, Swatch::Green]);
        let text = h.render();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("4 cells"));
        assert!(lines[0].contains("r5 on #aaaaaa"));
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("[  0 red   ]"));
        assert!(lines[2].contains("[  3 green ]"));
    }
}
