// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction-reversible traversal cursors.

use crate::chain::{Chain, NodeId};

/// Travel orientation of a [`Cursor`], fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Head-to-tail travel: `advance` follows `next` links.
    Forward,
    /// Tail-to-head travel: `advance` follows `prev` links.
    Reverse,
}

impl Direction {
    /// Returns the other orientation.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// A position into a [`Chain`], oriented forward or reverse.
///
/// A cursor is a small value: the node it sits on, the node it came from, and
/// its orientation tag. It borrows the chain per call and never mutates it,
/// so any number of cursors over one chain are independent.
///
/// The orientation tag is consulted inside this one set of methods; callers
/// pick a direction when they construct (or reseat) the cursor and from then
/// on call [`advance`](Self::advance) / [`retreat`](Self::retreat) /
/// [`at_start`](Self::at_start) / [`at_end`](Self::at_end) without caring
/// which way the cursor happens to point.
///
/// Stepping off either end does not wrap: the cursor parks just past the
/// boundary, remembers the node it left, and keeps answering `None` until it
/// is either retreated back in or reseated. Menu-level wrap-around is a
/// reseat policy in the layers above.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    dir: Direction,
    from: Option<NodeId>,
    curr: Option<NodeId>,
}

impl Cursor {
    /// A cursor seated on the chain's head, traveling toward the tail.
    #[must_use]
    pub fn forward<T>(chain: &Chain<T>) -> Self {
        Self {
            dir: Direction::Forward,
            from: None,
            curr: chain.head(),
        }
    }

    /// A cursor seated on the chain's tail, traveling toward the head.
    #[must_use]
    pub fn reverse<T>(chain: &Chain<T>) -> Self {
        Self {
            dir: Direction::Reverse,
            from: None,
            curr: chain.tail(),
        }
    }

    /// A cursor seated at the starting end for travel in `dir`.
    ///
    /// `Forward` seats at the head, `Reverse` at the tail. This is the reseat
    /// used by wrap policies: travel that ran off one end continues in the
    /// same direction from the opposite end.
    #[must_use]
    pub fn seated<T>(dir: Direction, chain: &Chain<T>) -> Self {
        match dir {
            Direction::Forward => Self::forward(chain),
            Direction::Reverse => Self::reverse(chain),
        }
    }

    /// The cursor's orientation tag.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.dir
    }

    /// The node under the cursor, if it sits on one.
    #[must_use]
    pub const fn position(&self) -> Option<NodeId> {
        self.curr
    }

    /// The item under the cursor.
    ///
    /// `None` when the chain is empty or the cursor stepped past a boundary.
    /// Callers that need to distinguish those states query
    /// [`at_start`](Self::at_start) / [`at_end`](Self::at_end) first.
    #[must_use]
    pub fn current<T: Copy>(&self, chain: &Chain<T>) -> Option<T> {
        self.curr.and_then(|id| chain.get(id).copied())
    }

    /// Moves one step in the cursor's own orientation and returns the item
    /// now under it.
    ///
    /// Stepping off the far end returns `None` and parks the cursor past the
    /// boundary; the node it left stays recorded so [`retreat`](Self::retreat)
    /// can land back on it. Advancing a parked cursor stays `None`.
    pub fn advance<T: Copy>(&mut self, chain: &Chain<T>) -> Option<T> {
        let curr = self.curr?;
        self.curr = beyond(chain, curr, self.dir);
        self.from = Some(curr);
        self.current(chain)
    }

    /// Moves one step against the cursor's orientation and returns the item
    /// now under it.
    ///
    /// From the parked-past-the-end state this lands back on the last node
    /// visited. Retreating out of the seat end exhausts the cursor: both
    /// boundary queries turn true and only a reseat revives it.
    pub fn retreat<T: Copy>(&mut self, chain: &Chain<T>) -> Option<T> {
        self.curr = self.from;
        self.from = self.curr.and_then(|c| beyond(chain, c, self.dir.opposite()));
        self.current(chain)
    }

    /// Moves one step of travel in the given chain-absolute direction.
    ///
    /// When `dir` matches the orientation this is [`advance`](Self::advance),
    /// otherwise [`retreat`](Self::retreat). Selection code moves either way
    /// through this single entry point and never branches on orientation.
    pub fn step<T: Copy>(&mut self, chain: &Chain<T>, dir: Direction) -> Option<T> {
        if self.dir == dir {
            self.advance(chain)
        } else {
            self.retreat(chain)
        }
    }

    /// True when the cursor holds no node on the head side.
    ///
    /// Boundary queries are phrased in chain order, not travel order:
    /// `at_start` concerns the head side and [`at_end`](Self::at_end) the
    /// tail side whichever way the cursor points. A forward cursor answers
    /// from its own fields directly; a reverse cursor swaps the two reads,
    /// the same swap its orientation applies to stepping.
    ///
    /// A freshly seated cursor reports the boundary it is seated at
    /// (forward: `at_start`, reverse: `at_end`), and a backward sweep is
    /// spent exactly when `at_start` turns true.
    #[must_use]
    pub const fn at_start(&self) -> bool {
        match self.dir {
            Direction::Forward => self.from.is_none(),
            Direction::Reverse => self.curr.is_none(),
        }
    }

    /// True when the cursor holds no node on the tail side.
    ///
    /// A forward sweep is spent exactly when this turns true: every node has
    /// been yielded and the cursor is parked past the tail. See
    /// [`at_start`](Self::at_start) for the full boundary-query contract.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        match self.dir {
            Direction::Forward => self.curr.is_none(),
            Direction::Reverse => self.from.is_none(),
        }
    }
}

fn beyond<T>(chain: &Chain<T>, node: NodeId, dir: Direction) -> Option<NodeId> {
    match dir {
        Direction::Forward => chain.next_of(node),
        Direction::Reverse => chain.prev_of(node),
    }
}
