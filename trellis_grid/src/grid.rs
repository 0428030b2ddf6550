// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tile grid: a chain of tile handles plus a wrapping traversal cursor.

use kurbo::Rect;
use trellis_chain::{Chain, Cursor, NodeId};

use crate::Layout;

/// A fixed set of tiles in a row-major layout, traversable with wrap-around.
///
/// The grid owns the ordering ([`Chain`]) and the geometry ([`Layout`]); the
/// tile handles themselves point at host-owned content, realized once at
/// construction through the `make_tile` closure and never added to or removed
/// from afterwards.
///
/// One primary cursor backs the `next_tile` / `prev_tile` reads. A read that
/// finds its boundary consumed reseats the cursor at the opposite end and
/// yields from there, so pure sweeps cycle through the tiles indefinitely and
/// never return `None` on a non-empty grid.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    chain: Chain<T>,
    layout: Layout,
    cursor: Cursor,
}

impl<T: Copy> Grid<T> {
    /// Builds a grid of `tiles` tiles inside `frame`.
    ///
    /// `make_tile(index, rect)` realizes the handle for each tile in order;
    /// hosts typically create a platform layer for `rect` and return its id.
    /// Returns `None` exactly when [`Layout::new`] does (a zero count).
    #[must_use]
    pub fn new(
        frame: Rect,
        tiles: usize,
        tiles_per_view: usize,
        tiles_per_row: usize,
        mut make_tile: impl FnMut(usize, Rect) -> T,
    ) -> Option<Self> {
        let layout = Layout::new(frame, tiles, tiles_per_view, tiles_per_row)?;
        let mut chain = Chain::with_capacity(tiles);
        for index in 0..tiles {
            let id = chain.push_back(make_tile(index, layout.tile_rect(index)));
            debug_assert_eq!(id.index(), index, "chain ids must equal tile ordinals");
        }
        let cursor = Cursor::forward(&chain);
        Some(Self {
            chain,
            layout,
            cursor,
        })
    }

    /// The grid's geometry.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The underlying tile chain, for selection cursors and iteration.
    #[must_use]
    pub const fn chain(&self) -> &Chain<T> {
        &self.chain
    }

    /// Number of tiles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the grid holds no tiles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Content-coordinate rectangle of the tile at `id`.
    #[must_use]
    pub fn rect_of(&self, id: NodeId) -> Rect {
        self.layout.tile_rect(id.index())
    }

    /// Iterates `(handle, rect)` pairs in chain order.
    ///
    /// This is the draw/teardown order: hosts attach or release every tile's
    /// platform content exactly once by walking it.
    pub fn tiles(&self) -> impl Iterator<Item = (T, Rect)> + '_ {
        self.chain
            .iter()
            .enumerate()
            .map(|(index, &item)| (item, self.layout.tile_rect(index)))
    }

    /// Yields the tile under the primary cursor and steps onward.
    ///
    /// When the forward sweep is spent the cursor reseats at the head first,
    /// so a fresh grid yields tile 0, then 1, and the read after the last
    /// tile wraps back to tile 0. Pure forward sweeps never see `None` on a
    /// non-empty grid; after a direction change the first read follows the
    /// cursor's old orientation until a boundary reseats it.
    pub fn next_tile(&mut self) -> Option<T> {
        if self.cursor.at_end() {
            self.cursor = Cursor::forward(&self.chain);
        }
        let item = self.cursor.current(&self.chain);
        self.cursor.advance(&self.chain);
        item
    }

    /// Yields the tile under the primary cursor and steps toward the head.
    ///
    /// The mirror image of [`next_tile`](Self::next_tile): when the backward
    /// sweep is spent the cursor reseats at the tail, so a fresh grid yields
    /// the last tile first and the read after tile 0 wraps back to the tail.
    pub fn prev_tile(&mut self) -> Option<T> {
        if self.cursor.at_start() {
            self.cursor = Cursor::reverse(&self.chain);
        }
        let item = self.cursor.current(&self.chain);
        self.cursor.advance(&self.chain);
        item
    }

    /// The tile currently under the primary cursor, without stepping.
    #[must_use]
    pub fn current_tile(&self) -> Option<T> {
        self.cursor.current(&self.chain)
    }

    /// True when the cursor holds nothing on the tail side.
    ///
    /// The next [`next_tile`](Self::next_tile) call will wrap.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    /// True when the cursor holds nothing on the head side.
    ///
    /// The next [`prev_tile`](Self::prev_tile) call will wrap.
    #[must_use]
    pub const fn at_begin(&self) -> bool {
        self.cursor.at_start()
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use alloc::vec::Vec;
    use kurbo::Rect;

    fn eight_tiles() -> Grid<u32> {
        let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
        Grid::new(frame, 8, 3, 2, |index, _| index as u32).unwrap()
    }

    #[test]
    fn construction_realizes_every_tile_with_its_rect() {
        let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
        let mut rects = Vec::new();
        let grid = Grid::new(frame, 4, 3, 2, |index, rect| {
            rects.push(rect);
            index
        })
        .unwrap();

        assert_eq!(grid.len(), 4);
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 50.0, 30.0));
        assert_eq!(rects[3], Rect::new(50.0, 30.0, 100.0, 60.0));
    }

    #[test]
    fn zero_counts_refuse_construction() {
        let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
        assert!(Grid::new(frame, 8, 0, 2, |i, _| i).is_none());
        assert!(Grid::new(frame, 8, 3, 0, |i, _| i).is_none());
    }

    #[test]
    fn next_tile_visits_each_tile_once_then_wraps_to_the_first() {
        let mut grid = eight_tiles();

        let sweep: Vec<u32> = (0..8).map(|_| grid.next_tile().unwrap()).collect();
        assert_eq!(sweep, [0, 1, 2, 3, 4, 5, 6, 7]);

        // The ninth read wraps.
        assert_eq!(grid.next_tile(), Some(0));
    }

    #[test]
    fn prev_tile_sweeps_backward_from_the_tail_and_wraps() {
        let mut grid = eight_tiles();

        let sweep: Vec<u32> = (0..8).map(|_| grid.prev_tile().unwrap()).collect();
        assert_eq!(sweep, [7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(grid.prev_tile(), Some(7));
    }

    #[test]
    fn boundary_queries_track_the_sweep() {
        let mut grid = eight_tiles();
        assert!(grid.at_begin());
        assert!(!grid.at_end());

        for _ in 0..8 {
            grid.next_tile();
        }
        assert!(grid.at_end());
        assert_eq!(grid.current_tile(), None);

        // Wrapping reseats the cursor and clears the flag.
        assert_eq!(grid.next_tile(), Some(0));
        assert!(!grid.at_end());
    }

    #[test]
    fn empty_grid_reads_yield_none() {
        let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
        let mut grid: Grid<u32> = Grid::new(frame, 0, 3, 2, |_, _| 0).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.next_tile(), None);
        assert_eq!(grid.prev_tile(), None);
        assert_eq!(grid.current_tile(), None);
        assert!(grid.at_end());
        assert!(grid.at_begin());
    }

    #[test]
    fn single_tile_grid_wraps_onto_itself() {
        let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
        let mut grid = Grid::new(frame, 1, 3, 2, |index, _| index).unwrap();
        for _ in 0..3 {
            assert_eq!(grid.next_tile(), Some(0));
        }
    }

    #[test]
    fn tiles_iterates_handles_with_their_rects_in_order() {
        let grid = eight_tiles();
        let pairs: Vec<(u32, Rect)> = grid.tiles().collect();
        assert_eq!(pairs.len(), 8);
        assert_eq!(pairs[0], (0, Rect::new(0.0, 0.0, 50.0, 30.0)));
        assert_eq!(pairs[5], (5, Rect::new(50.0, 60.0, 100.0, 90.0)));
        assert_eq!(pairs[7], (7, Rect::new(50.0, 90.0, 100.0, 120.0)));
    }
}
