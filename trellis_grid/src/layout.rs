// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-major tile geometry.

use kurbo::{Point, Rect, Size};

/// Tile geometry derived from a frame and per-axis tile counts.
///
/// All coordinates are whole logical pixels carried in `f64`, the geometry
/// vocabulary shared with the rest of the workspace. Tile extents are the
/// frame extents divided by the counts with the remainder truncated; the
/// remainder is not redistributed, so a frame that does not divide evenly
/// leaves a short strip at the right/bottom edge. That is the intended
/// behavior, not a rounding defect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    frame: Rect,
    tile_width: f64,
    tile_height: f64,
    tiles: usize,
    tiles_per_row: usize,
    tiles_per_view: usize,
    rows: usize,
}

impl Layout {
    /// Derives a layout for `tiles` tiles inside `frame`.
    ///
    /// `tiles_per_view` is the number of tile rows visible at once (it divides
    /// the frame height), `tiles_per_row` the number of columns (it divides
    /// the frame width). Returns `None` when either count is zero. `tiles`
    /// may be zero: the layout is then empty but well-formed.
    #[must_use]
    pub fn new(
        frame: Rect,
        tiles: usize,
        tiles_per_view: usize,
        tiles_per_row: usize,
    ) -> Option<Self> {
        if tiles_per_view == 0 || tiles_per_row == 0 {
            return None;
        }
        Some(Self {
            frame,
            tile_width: trunc_div(frame.width(), tiles_per_row),
            tile_height: trunc_div(frame.height(), tiles_per_view),
            tiles,
            tiles_per_row,
            tiles_per_view,
            rows: tiles.div_ceil(tiles_per_row),
        })
    }

    /// The visible frame this layout was derived from.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Uniform size of every tile.
    #[must_use]
    pub const fn tile_size(&self) -> Size {
        Size::new(self.tile_width, self.tile_height)
    }

    /// Total number of tiles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tiles
    }

    /// Returns `true` if the layout holds no tiles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tiles == 0
    }

    /// Number of tile rows, `ceil(tiles / tiles_per_row)`.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn tiles_per_row(&self) -> usize {
        self.tiles_per_row
    }

    /// Number of rows visible in the frame at once.
    #[must_use]
    pub const fn tiles_per_view(&self) -> usize {
        self.tiles_per_view
    }

    /// Zero-based row of tile `index`.
    #[must_use]
    pub const fn row_of(&self, index: usize) -> usize {
        index / self.tiles_per_row
    }

    /// Zero-based column of tile `index`.
    #[must_use]
    pub const fn col_of(&self, index: usize) -> usize {
        index % self.tiles_per_row
    }

    /// Rectangle of tile `index` in content coordinates.
    ///
    /// Content coordinates share the frame's origin; scrolling is a separate
    /// offset applied by the viewport.
    #[must_use]
    pub fn tile_rect(&self, index: usize) -> Rect {
        let origin = self.frame.origin();
        Rect::from_origin_size(
            Point::new(
                origin.x + self.col_of(index) as f64 * self.tile_width,
                origin.y + self.row_of(index) as f64 * self.tile_height,
            ),
            self.tile_size(),
        )
    }

    /// Rectangle of the first tile, if any.
    #[must_use]
    pub fn first_tile_rect(&self) -> Option<Rect> {
        (!self.is_empty()).then(|| self.tile_rect(0))
    }

    /// Rectangle of the last tile, if any.
    #[must_use]
    pub fn last_tile_rect(&self) -> Option<Rect> {
        (!self.is_empty()).then(|| self.tile_rect(self.tiles - 1))
    }

    /// Bounds of the scrollable content.
    ///
    /// Shares the frame's origin and width; the height is the laid-out rows
    /// or the frame height, whichever is larger, so a short grid still fills
    /// the visible frame.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        let height = (self.tile_height * self.rows as f64).max(self.frame.height());
        Rect::from_origin_size(self.frame.origin(), Size::new(self.frame.width(), height))
    }
}

/// Truncating division of a whole-pixel extent by a count.
fn trunc_div(extent: f64, count: usize) -> f64 {
    debug_assert!(extent >= 0.0, "frame extents must be non-negative");
    #[allow(
        clippy::cast_possible_truncation,
        reason = "extents are whole logical pixels; truncation is the division rule"
    )]
    let quotient = (extent as u64) / (count as u64);
    quotient as f64
}

#[cfg(test)]
mod tests {
    use super::Layout;
    use kurbo::{Rect, Size};

    fn eight_tile_layout() -> Layout {
        // Two tiles per row, three rows visible: 50 x 30 tiles.
        Layout::new(Rect::new(0.0, 0.0, 100.0, 90.0), 8, 3, 2).unwrap()
    }

    #[test]
    fn zero_counts_refuse_construction() {
        let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
        assert!(Layout::new(frame, 8, 0, 2).is_none());
        assert!(Layout::new(frame, 8, 3, 0).is_none());
        assert!(Layout::new(frame, 0, 3, 2).is_some());
    }

    #[test]
    fn tile_extents_use_truncating_division() {
        // 168 / 5 = 33 rem 3: the remainder stays at the bottom edge.
        let layout = Layout::new(Rect::new(0.0, 0.0, 144.0, 168.0), 10, 5, 2).unwrap();
        assert_eq!(layout.tile_size(), Size::new(72.0, 33.0));
    }

    #[test]
    fn rows_round_up() {
        let layout = eight_tile_layout();
        assert_eq!(layout.rows(), 4);

        let uneven = Layout::new(Rect::new(0.0, 0.0, 100.0, 90.0), 7, 3, 2).unwrap();
        assert_eq!(uneven.rows(), 4);
    }

    #[test]
    fn row_major_placement() {
        let layout = eight_tile_layout();

        // Tile 5 sits in the third row, second column.
        assert_eq!(layout.row_of(5), 2);
        assert_eq!(layout.col_of(5), 1);
        assert_eq!(layout.tile_rect(5), Rect::new(50.0, 60.0, 100.0, 90.0));

        // Tiles 4 and 5 share a row and therefore a y position.
        assert_eq!(
            layout.tile_rect(4).origin().y,
            layout.tile_rect(5).origin().y
        );
    }

    #[test]
    fn placement_honors_the_frame_origin() {
        let layout = Layout::new(Rect::new(10.0, 20.0, 110.0, 110.0), 8, 3, 2).unwrap();
        assert_eq!(layout.tile_rect(0).origin(), kurbo::Point::new(10.0, 20.0));
        assert_eq!(layout.tile_rect(3).origin(), kurbo::Point::new(60.0, 50.0));
    }

    #[test]
    fn content_is_at_least_as_tall_as_the_frame() {
        // Four rows of 30 exceed the 90 frame.
        let tall = eight_tile_layout();
        assert_eq!(tall.content_bounds().height(), 120.0);

        // Two tiles fit in one row: content keeps the frame height.
        let short = Layout::new(Rect::new(0.0, 0.0, 100.0, 90.0), 2, 3, 2).unwrap();
        assert_eq!(short.content_bounds().height(), 90.0);
        assert_eq!(short.content_bounds().width(), 100.0);
    }

    #[test]
    fn edge_tile_rects() {
        let layout = eight_tile_layout();
        assert_eq!(layout.first_tile_rect(), Some(Rect::new(0.0, 0.0, 50.0, 30.0)));
        assert_eq!(
            layout.last_tile_rect(),
            Some(Rect::new(50.0, 90.0, 100.0, 120.0))
        );

        let empty = Layout::new(Rect::new(0.0, 0.0, 100.0, 90.0), 0, 3, 2).unwrap();
        assert_eq!(empty.first_tile_rect(), None);
        assert_eq!(empty.last_tile_rect(), None);
    }
}
