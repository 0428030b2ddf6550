// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Select: the highlighted-tile cursor and its viewport follower.
//!
//! A [`Selector`] tracks which tile of a [`Grid`] carries the highlight and
//! keeps the scrollable viewport following it. Every move answers two
//! questions:
//!
//! - **Where did the highlight go?** The selection cursor steps one tile in
//!   the requested direction; running off either end wraps by reseating the
//!   cursor at the opposite end, still traveling the same way.
//! - **Must the viewport shift?** The destination tile's position is compared
//!   against the visible window in content coordinates. A destination above
//!   the window pulls the window's top up to it exactly; one at or below the
//!   bottom edge pushes the window down until the tile's lower edge sits on
//!   the new bottom. Anything already inside moves nothing: the window shifts
//!   by the minimum amount and never recenters.
//!
//! The selector is pure. It owns only the cursor, the scroll offset, and the
//! first/last tile markers; each move returns a [`Motion`] describing what
//! the host should do (reposition the highlight from `from` to `to`, and
//! apply `scroll` to the scroll layer when present). Applying those effects,
//! and notifying the application that content moved, is the widget layer's
//! job.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use trellis_grid::Grid;
//! use trellis_select::Selector;
//!
//! // Eight tiles, two per row, three rows visible: rows 0..3 start on screen.
//! let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
//! let grid = Grid::new(frame, 8, 3, 2, |index, _| index as u32).unwrap();
//! let mut selector = Selector::arm(&grid).unwrap();
//!
//! // Tile 1 shares the top row: the viewport holds still.
//! let motion = selector.move_next(&grid).unwrap();
//! assert_eq!(motion.item, 1);
//! assert_eq!(motion.scroll, None);
//!
//! // Walking down to tile 6 (fourth row) drags the window with it.
//! let scrolls: Vec<_> = (0..5)
//!     .map(|_| selector.move_next(&grid).unwrap().scroll)
//!     .collect();
//! assert!(scrolls[4].is_some());
//! ```
//!
//! An empty grid never arms: [`Selector::arm`] returns `None` and the menu
//! stays highlight-free.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use kurbo::{Point, Rect, Vec2};
use trellis_chain::{Cursor, Direction};
use trellis_grid::{Grid, Layout};

/// The outcome of one selection move.
///
/// `from` and `to` are the highlight's old and new rectangles in content
/// coordinates; hosts animate the highlight between them. `scroll` carries
/// the new content offset exactly when the viewport had to shift; a `None`
/// means the destination was already fully visible.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Motion<T> {
    /// The tile now holding the highlight.
    pub item: T,
    /// Highlight rectangle before the move.
    pub from: Rect,
    /// Highlight rectangle after the move.
    pub to: Rect,
    /// New content offset, present only when the viewport shifted.
    pub scroll: Option<Vec2>,
}

/// Selection state over a non-empty [`Grid`]: a cursor, a scroll offset, and
/// the first/last tile markers used in the wrap-aware boundary comparison.
///
/// A selector exists only in the armed state. [`Selector::arm`] refuses an
/// empty grid, and arming seats the highlight on the first tile with zero
/// motion: nothing scrolls and nothing is notified until the first move.
///
/// The scroll offset follows the scroll-layer convention: it is applied to
/// the content, so scrolling down makes the vertical component more
/// negative. The visible window's top edge in content coordinates is
/// `frame.origin.y - offset.y`. Only the vertical component ever changes;
/// tile menus do not shift sideways.
#[derive(Clone, Debug)]
pub struct Selector {
    cursor: Cursor,
    offset: Vec2,
    home: Point,
    terminus: Point,
}

impl Selector {
    /// Arms selection over `grid`, seated on the first tile.
    ///
    /// Returns `None` for an empty grid. Arming computes no shift: the first
    /// tile is visible at offset zero by construction.
    #[must_use]
    pub fn arm<T: Copy>(grid: &Grid<T>) -> Option<Self> {
        let home = grid.layout().first_tile_rect()?.origin();
        let terminus = grid.layout().last_tile_rect()?.origin();
        Some(Self {
            cursor: Cursor::forward(grid.chain()),
            offset: Vec2::ZERO,
            home,
            terminus,
        })
    }

    /// The tile currently holding the highlight.
    #[must_use]
    pub fn selected<T: Copy>(&self, grid: &Grid<T>) -> Option<T> {
        self.cursor.current(grid.chain())
    }

    /// The highlight's rectangle in content coordinates.
    #[must_use]
    pub fn selected_rect<T: Copy>(&self, grid: &Grid<T>) -> Option<Rect> {
        self.cursor.position().map(|id| grid.rect_of(id))
    }

    /// The current content offset.
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Moves the highlight one tile toward the tail, wrapping to the first
    /// tile past the last.
    pub fn move_next<T: Copy>(&mut self, grid: &Grid<T>) -> Option<Motion<T>> {
        self.travel(grid, Direction::Forward)
    }

    /// Moves the highlight one tile toward the head, wrapping to the last
    /// tile past the first.
    pub fn move_prev<T: Copy>(&mut self, grid: &Grid<T>) -> Option<Motion<T>> {
        self.travel(grid, Direction::Reverse)
    }

    /// One shared move path for both directions.
    ///
    /// The cursor supplies the direction mapping, so nothing here branches on
    /// its orientation; crossing a boundary reseats it at the opposite end
    /// still traveling the same way, and the wrapped tile is the destination.
    fn travel<T: Copy>(&mut self, grid: &Grid<T>, dir: Direction) -> Option<Motion<T>> {
        let from = self.selected_rect(grid)?;
        let item = match self.cursor.step(grid.chain(), dir) {
            Some(item) => item,
            None => {
                self.cursor = Cursor::seated(dir, grid.chain());
                self.cursor.current(grid.chain())?
            }
        };
        let to = self.selected_rect(grid)?;
        let scroll = self.reconcile(grid.layout(), to);
        Some(Motion {
            item,
            from,
            to,
            scroll,
        })
    }

    /// Shifts the offset just enough to keep `dest` fully visible.
    ///
    /// With the window's top at `frame.origin.y - offset.y` and its bottom
    /// one frame height below: a destination above the top becomes the new
    /// top exactly; one at or below the bottom puts its lower edge on the new
    /// bottom exactly. The first/last tile markers clamp the two targets so a
    /// wrapped destination never drags the window past the content's ends.
    fn reconcile(&mut self, layout: &Layout, dest: Rect) -> Option<Vec2> {
        let frame = layout.frame();
        let tile_height = layout.tile_size().height;
        let top = frame.origin().y - self.offset.y;
        let bottom = top + frame.height();
        let end_y = dest.origin().y;

        let before = self.offset.y;
        if end_y < top {
            self.offset.y += top - end_y.max(self.home.y);
        } else if end_y >= bottom {
            self.offset.y -= (end_y + tile_height).min(self.terminus.y + tile_height) - bottom;
        }
        (self.offset.y != before).then_some(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::{Motion, Selector};
    use alloc::vec::Vec;
    use kurbo::{Rect, Vec2};
    use trellis_grid::Grid;

    // Eight tiles, two per row, three rows visible; tiles are 50 x 30 and the
    // last row starts below the initial window.
    fn eight_tiles() -> Grid<u32> {
        let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
        Grid::new(frame, 8, 3, 2, |index, _| index as u32).unwrap()
    }

    fn visible_top(selector: &Selector) -> f64 {
        -selector.offset().y
    }

    #[test]
    fn an_empty_grid_never_arms() {
        let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
        let grid: Grid<u32> = Grid::new(frame, 0, 3, 2, |_, _| 0).unwrap();
        assert!(Selector::arm(&grid).is_none());
    }

    #[test]
    fn arming_selects_the_first_tile_with_zero_motion() {
        let grid = eight_tiles();
        let selector = Selector::arm(&grid).unwrap();
        assert_eq!(selector.selected(&grid), Some(0));
        assert_eq!(selector.offset(), Vec2::ZERO);
        assert_eq!(
            selector.selected_rect(&grid),
            Some(Rect::new(0.0, 0.0, 50.0, 30.0))
        );
    }

    #[test]
    fn moves_inside_the_window_do_not_scroll() {
        let grid = eight_tiles();
        let mut selector = Selector::arm(&grid).unwrap();

        // Tiles 1 through 5 all lie in the three visible rows.
        for expected in 1..=5 {
            let motion = selector.move_next(&grid).unwrap();
            assert_eq!(motion.item, expected);
            assert_eq!(motion.scroll, None, "tile {expected} was already visible");
        }
        assert_eq!(selector.offset(), Vec2::ZERO);
    }

    #[test]
    fn same_row_neighbors_share_a_highlight_y() {
        let grid = eight_tiles();
        let mut selector = Selector::arm(&grid).unwrap();
        for _ in 0..4 {
            selector.move_next(&grid);
        }

        // Tile 4 to tile 5: same row, no shift.
        let motion = selector.move_next(&grid).unwrap();
        assert_eq!(motion.item, 5);
        assert_eq!(motion.from.origin().y, motion.to.origin().y);
        assert_eq!(motion.scroll, None);
    }

    #[test]
    fn descending_below_the_window_aligns_the_tile_bottom_exactly() {
        let grid = eight_tiles();
        let mut selector = Selector::arm(&grid).unwrap();

        // Walk from tile 0 to tile 6: exactly one shift, of one tile height.
        let motions: Vec<Motion<u32>> =
            (0..6).map(|_| selector.move_next(&grid).unwrap()).collect();
        let scrolled: Vec<&Motion<u32>> =
            motions.iter().filter(|m| m.scroll.is_some()).collect();
        assert_eq!(scrolled.len(), 1);
        assert_eq!(scrolled[0].item, 6);

        // New bottom = destination bottom: top slides from 0 to 30.
        assert_eq!(visible_top(&selector), 30.0);
        assert_eq!(selector.offset(), Vec2::new(0.0, -30.0));
    }

    #[test]
    fn a_full_forward_cycle_returns_home_and_scrolls_at_least_once() {
        let grid = eight_tiles();
        let mut selector = Selector::arm(&grid).unwrap();

        let mut scrolls = 0;
        for _ in 0..8 {
            if selector.move_next(&grid).unwrap().scroll.is_some() {
                scrolls += 1;
            }
        }

        // Eight tiles, eight moves: back on tile 0 with the window reset.
        assert_eq!(selector.selected(&grid), Some(0));
        assert_eq!(selector.offset(), Vec2::ZERO);
        assert!(scrolls >= 1, "a grid taller than the window must scroll");
    }

    #[test]
    fn wrapping_backward_from_the_first_tile_reveals_the_last_row() {
        let grid = eight_tiles();
        let mut selector = Selector::arm(&grid).unwrap();

        let motion = selector.move_prev(&grid).unwrap();
        assert_eq!(motion.item, 7);
        // Tile 7 starts at y = 90: its lower edge lands on the new bottom.
        assert_eq!(visible_top(&selector), 30.0);
        assert!(motion.scroll.is_some());

        // Continuing backward stays inside the shifted window for a while.
        let motion = selector.move_prev(&grid).unwrap();
        assert_eq!(motion.item, 6);
        assert_eq!(motion.scroll, None);
    }

    #[test]
    fn a_full_backward_cycle_returns_home() {
        let grid = eight_tiles();
        let mut selector = Selector::arm(&grid).unwrap();

        for _ in 0..8 {
            selector.move_prev(&grid);
        }
        assert_eq!(selector.selected(&grid), Some(0));
        assert_eq!(selector.offset(), Vec2::ZERO);
    }

    #[test]
    fn ascending_above_the_window_aligns_the_tile_top_exactly() {
        let grid = eight_tiles();
        let mut selector = Selector::arm(&grid).unwrap();

        // Down to tile 7 (window top at 30), then back up to tile 1 (y = 0).
        for _ in 0..7 {
            selector.move_next(&grid);
        }
        assert_eq!(visible_top(&selector), 30.0);

        for expected in [6, 5, 4, 3, 2] {
            let motion = selector.move_prev(&grid).unwrap();
            assert_eq!(motion.item, expected);
            assert_eq!(motion.scroll, None);
        }

        // Tile 1 sits above the window: its top becomes the new top exactly.
        let motion = selector.move_prev(&grid).unwrap();
        assert_eq!(motion.item, 1);
        assert!(motion.scroll.is_some());
        assert_eq!(visible_top(&selector), 0.0);
    }

    #[test]
    fn a_single_tile_wraps_onto_itself_without_motion() {
        let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
        let grid = Grid::new(frame, 1, 3, 2, |index, _| index as u32).unwrap();
        let mut selector = Selector::arm(&grid).unwrap();

        let motion = selector.move_next(&grid).unwrap();
        assert_eq!(motion.item, 0);
        assert_eq!(motion.from, motion.to);
        assert_eq!(motion.scroll, None);

        let motion = selector.move_prev(&grid).unwrap();
        assert_eq!(motion.item, 0);
        assert_eq!(motion.scroll, None);
    }

    #[test]
    fn a_short_grid_never_scrolls() {
        // Four tiles fill two of the three visible rows.
        let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
        let grid = Grid::new(frame, 4, 3, 2, |index, _| index as u32).unwrap();
        let mut selector = Selector::arm(&grid).unwrap();

        for _ in 0..8 {
            assert_eq!(selector.move_next(&grid).unwrap().scroll, None);
        }
        for _ in 0..8 {
            assert_eq!(selector.move_prev(&grid).unwrap().scroll, None);
        }
        assert_eq!(selector.offset(), Vec2::ZERO);
    }

    #[test]
    fn direction_reversals_mid_grid_step_one_tile_at_a_time() {
        let grid = eight_tiles();
        let mut selector = Selector::arm(&grid).unwrap();

        selector.move_next(&grid);
        selector.move_next(&grid);
        assert_eq!(selector.selected(&grid), Some(2));

        assert_eq!(selector.move_prev(&grid).unwrap().item, 1);
        assert_eq!(selector.move_next(&grid).unwrap().item, 2);
        assert_eq!(selector.move_next(&grid).unwrap().item, 3);
    }
}
