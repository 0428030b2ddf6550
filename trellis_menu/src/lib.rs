// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Menu: the scrollable tile-grid menu widget.
//!
//! This crate is the embedding surface of the Trellis workspace. It glues the
//! pure cores ([`trellis_grid`] for geometry and traversal, [`trellis_select`]
//! for selection and viewport following) onto a host platform reached through
//! the [`Compositor`] trait: layers, a scroll container, an inverted
//! highlight, and a fire-and-forget frame animator.
//!
//! Everything runs to completion on the thread that delivers the input event;
//! the only asynchronous piece is the highlight animation, which cleans up
//! after itself and is never awaited.
//!
//! ## Minimal example
//!
//! Drive a menu against the in-memory [`softcomp::SoftCompositor`]:
//!
//! ```rust
//! use kurbo::Rect;
//! use trellis_menu::softcomp::SoftCompositor;
//! use trellis_menu::{MenuButton, TileMenu};
//!
//! let mut platform = SoftCompositor::new();
//! let frame = Rect::new(0.0, 0.0, 100.0, 90.0);
//! let window = platform.new_window(frame);
//!
//! // Eight tiles, two per row, three rows visible.
//! let mut menu: TileMenu<SoftCompositor> =
//!     TileMenu::create(&mut platform, frame, Some(window), 8, 3, 2).unwrap();
//! menu.draw(&mut platform);
//!
//! // Drawing armed the selection on the first tile.
//! let first = menu.selected().unwrap();
//!
//! // The down button walks the selection forward.
//! menu.handle_click(&mut platform, MenuButton::Down);
//! assert_ne!(menu.selected().unwrap(), first);
//!
//! // Walking off the bottom row drags the viewport along.
//! for _ in 0..5 {
//!     menu.select_next(&mut platform);
//! }
//! assert!(!platform.scroll_moves().is_empty());
//!
//! menu.destroy(&mut platform);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//! - `softcomp` (default): the in-memory [`softcomp::SoftCompositor`] used by
//!   hosts, demos, and tests.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bindings;
mod menu;
mod platform;

#[cfg(feature = "softcomp")]
pub mod softcomp;

pub use bindings::{ClickBindings, MenuAction, MenuButton};
pub use menu::{ClickResponse, MenuCallbacks, MenuState, TileMenu};
pub use platform::Compositor;

// The selection outcome travels through the widget API unchanged.
pub use trellis_select::Motion;
