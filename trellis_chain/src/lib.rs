// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Chain: the linked tile sequence and its traversal cursor.
//!
//! This crate provides the ordering backbone for the Trellis tile menu: an
//! append-only sequence of small copyable item handles ([`Chain`]) and a
//! direction-reversible position into it ([`Cursor`]).
//!
//! The core concepts are:
//!
//! - [`Chain`]: an insertion-ordered arena of linked nodes. Nodes are
//!   addressed by dense [`NodeId`]s equal to insertion order, and each node
//!   links to its neighbors by id. The chain stores handles, not content:
//!   payload lifetime (platform layers, and so on) belongs to the caller.
//! - [`Cursor`]: a `{from, current}` pair plus an orientation tag
//!   ([`Direction`]). A forward cursor's [`Cursor::advance`] walks toward the
//!   tail, a reverse cursor's toward the head, so callers traverse either way
//!   through one set of methods chosen at construction time.
//!
//! Cursors never wrap on their own: stepping off either end yields `None` and
//! parks the cursor just past the boundary. Menu-level wrap-around is a
//! reinitialization policy in the layers above, not a property of the chain.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_chain::{Chain, Cursor};
//!
//! let mut chain = Chain::new();
//! for tile in 0_u32..4 {
//!     chain.push_back(tile);
//! }
//!
//! // A forward cursor walks head to tail...
//! let mut fwd = Cursor::forward(&chain);
//! assert_eq!(fwd.current(&chain), Some(0));
//! assert_eq!(fwd.advance(&chain), Some(1));
//!
//! // ...and an independent reverse cursor walks tail to head.
//! let mut rev = Cursor::reverse(&chain);
//! assert_eq!(rev.current(&chain), Some(3));
//! assert_eq!(rev.advance(&chain), Some(2));
//!
//! // Neither cursor disturbed the other.
//! assert_eq!(fwd.current(&chain), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chain;
mod cursor;

pub use chain::{Chain, Iter, NodeId};
pub use cursor::{Cursor, Direction};
