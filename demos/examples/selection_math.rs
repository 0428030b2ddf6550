// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the traversal and viewport-reconciliation decisions of the pure
//! cores, with no widget or platform involved.

use kurbo::Rect;
use trellis_chain::Cursor;
use trellis_grid::Grid;
use trellis_select::Selector;

fn main() {
    let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
    let grid = Grid::new(frame, 8, 3, 2, |index, _| index as u32)
        .expect("counts are non-zero");

    // Chain-level view: one forward and one reverse sweep over the tiles.
    let chain = grid.chain();
    let mut fwd = Cursor::forward(chain);
    print!("forward sweep: {}", fwd.current(chain).unwrap());
    while let Some(tile) = fwd.advance(chain) {
        print!(" {tile}");
    }
    println!();

    let mut rev = Cursor::reverse(chain);
    print!("reverse sweep: {}", rev.current(chain).unwrap());
    while let Some(tile) = rev.advance(chain) {
        print!(" {tile}");
    }
    println!();

    // Selection view: a full wrap cycle, reporting every viewport shift.
    let mut selector = Selector::arm(&grid).expect("grid is non-empty");
    for step in 1..=8 {
        let motion = selector.move_next(&grid).expect("grid is non-empty");
        match motion.scroll {
            Some(offset) => println!(
                "step {step}: tile {} at {:?}, viewport shifts to offset {offset:?}",
                motion.item,
                motion.to.origin()
            ),
            None => println!(
                "step {step}: tile {} at {:?}, viewport holds",
                motion.item,
                motion.to.origin()
            ),
        }
    }
}
