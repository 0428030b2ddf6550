// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Grid: tile geometry and the traversable tile grid.
//!
//! A menu's tiles are laid out row-major inside a scrollable viewport. This
//! crate owns the two pieces that make that concrete:
//!
//! - [`Layout`]: pure geometry. Tile extents come from truncating division of
//!   the frame by the per-axis tile counts, rows from `div_ceil`, and the
//!   scrollable content is never shorter than the visible frame.
//! - [`Grid`]: a [`Chain`](trellis_chain::Chain) of host-owned tile handles
//!   plus a primary traversal cursor. Reads wrap: stepping past either end
//!   reseats the cursor at the opposite end instead of failing.
//!
//! The grid stores handles, not views. Hosts realize each tile through the
//! closure passed to [`Grid::new`], typically by creating a platform layer
//! for the tile's rectangle, and keep ownership of whatever they created.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use trellis_grid::Grid;
//!
//! // Eight tiles, two per row, three rows visible at a time.
//! let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
//! let mut grid = Grid::new(frame, 8, 3, 2, |index, _rect| index as u32).unwrap();
//!
//! // 100 / 2 wide, 90 / 3 tall.
//! assert_eq!(grid.layout().tile_size(), kurbo::Size::new(50.0, 30.0));
//!
//! // Reads sweep the tiles in order and wrap past the end.
//! let first: Vec<u32> = (0..8).map(|_| grid.next_tile().unwrap()).collect();
//! assert_eq!(first, [0, 1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(grid.next_tile(), Some(0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod layout;

pub use grid::Grid;
pub use layout::Layout;
