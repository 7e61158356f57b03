//! Placement of cells in the single-section flow grid.
//!
//! [`GridCollection`] answers per-item size and spacing queries; [`FlowLayout`]
//! turns those answers into frames for a given viewport, the same way a host
//! toolkit's flow layout would. Content space has its origin at the top-left of
//! the section, viewport space is content space shifted up by the scroll offset.

use std::ops::Range;

use crate::collection::GridCollection;
use crate::coords::{Rect, Vec2};
use crate::error::GridError;

/// Viewport-bound placement of a [`GridCollection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    viewport: Vec2,
}

impl FlowLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self { viewport: Vec2::new(width.max(0.0), height.max(0.0)) }
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn row_count<C: PartialEq>(&self, grid: &GridCollection<C>) -> usize {
        grid.item_count().div_ceil(grid.params().columns())
    }

    /// Content-space frame of the cell at `index`.
    pub fn frame_of<C: PartialEq>(&self, grid: &GridCollection<C>, index: usize) -> Result<Rect, GridError> {
        if index >= grid.item_count() {
            return Err(GridError::OutOfRange { index, count: grid.item_count() });
        }
        let columns = grid.params().columns();
        let size = grid.item_size(index, self.viewport.x);
        let inset = grid.section_inset();
        let (row, col) = (index / columns, index % columns);

        let x = inset.left + col as f32 * (size.x + grid.inter_item_spacing());
        let y = inset.top + row as f32 * (size.y + grid.line_spacing());
        Ok(Rect::from_origin_size(Vec2::new(x, y), size))
    }

    /// Total scrollable height including the section insets.
    pub fn content_height<C: PartialEq>(&self, grid: &GridCollection<C>) -> f32 {
        let inset = grid.section_inset();
        let rows = self.row_count(grid);
        if rows == 0 {
            return inset.v();
        }
        let cell_h = grid.item_size(0, self.viewport.x).y;
        inset.v() + rows as f32 * cell_h + (rows - 1) as f32 * grid.line_spacing()
    }

    /// Clamps a scroll offset into `[0, content_height - viewport_height]`.
    pub fn clamp_scroll<C: PartialEq>(&self, grid: &GridCollection<C>, offset: f32) -> f32 {
        let max = (self.content_height(grid) - self.viewport.y).max(0.0);
        offset.clamp(0.0, max)
    }

    /// Indices of cells whose row overlaps the viewport at `scroll_offset`.
    pub fn visible_range<C: PartialEq>(&self, grid: &GridCollection<C>, scroll_offset: f32) -> Range<usize> {
        let count = grid.item_count();
        let cell_h = grid.item_size(0, self.viewport.x).y;
        if count == 0 || cell_h <= 0.0 || self.viewport.y <= 0.0 {
            return 0..0;
        }

        let columns = grid.params().columns();
        let rows = self.row_count(grid);
        let top = grid.section_inset().top;
        let pitch = cell_h + grid.line_spacing();

        // First row whose bottom edge lies below the viewport top.
        let first = (((scroll_offset - top - cell_h) / pitch).floor() + 1.0).max(0.0) as usize;
        // Rows starting before the viewport bottom.
        let end = ((scroll_offset + self.viewport.y - top) / pitch).ceil().max(0.0) as usize;

        let first = first.min(rows);
        let end = end.clamp(first, rows);
        (first * columns).min(count)..(end * columns).min(count)
    }

    /// Index of the cell under `point` (viewport space), if any.
    ///
    /// Points over insets or inter-cell gaps hit nothing.
    pub fn index_at<C: PartialEq>(&self, grid: &GridCollection<C>, point: Vec2, scroll_offset: f32) -> Option<usize> {
        let size = grid.item_size(0, self.viewport.x);
        if size.x <= 0.0 || size.y <= 0.0 {
            return None;
        }
        let inset = grid.section_inset();
        let columns = grid.params().columns();
        let content = Vec2::new(point.x, point.y + scroll_offset);

        let col = slot(content.x - inset.left, size.x + grid.inter_item_spacing())?;
        if col >= columns {
            return None;
        }
        let row = slot(content.y - inset.top, size.y + grid.line_spacing())?;

        // The slot may still land in the gap after a cell.
        let index = row * columns + col;
        let frame = self.frame_of(grid, index).ok()?;
        frame.contains(content).then_some(index)
    }

    /// Viewport-space frames of every visible cell, paired with their index.
    pub fn visible_frames<C: PartialEq>(&self, grid: &GridCollection<C>, scroll_offset: f32) -> Vec<(usize, Rect)> {
        let frames: Vec<(usize, Rect)> = self
            .visible_range(grid, scroll_offset)
            .filter_map(|i| self.frame_of(grid, i).ok().map(|r| (i, r.scrolled(scroll_offset))))
            .collect();
        log::trace!("visible_frames @ {scroll_offset}: {frames:?}");
        frames
    }
}

/// Cell slot along one axis for an offset `rel` from the section edge.
fn slot(rel: f32, pitch: f32) -> Option<usize> {
    if rel.is_nan() || rel < 0.0 {
        return None;
    }
    Some((rel / pitch).floor() as usize)
}
