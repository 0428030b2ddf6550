// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tile menu widget: platform glue over the grid and selector cores.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Rect;
use trellis_chain::Direction;
use trellis_grid::Grid;
use trellis_select::{Motion, Selector};

use crate::bindings::{ClickBindings, MenuAction, MenuButton};
use crate::platform::Compositor;

bitflags::bitflags! {
    /// Lifecycle flags of a [`TileMenu`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MenuState: u8 {
        /// The menu has been drawn into its window at least once.
        const DRAWN = 0b0000_0001;
        /// The click configuration provider has run.
        const CLICKS_BOUND = 0b0000_0010;
    }
}

/// Host callbacks, captured as values at configuration time.
///
/// The host context travels as an explicit `&mut C` parameter instead of a
/// stashed pointer, so callback lifetimes are plain ownership.
pub struct MenuCallbacks<P: Compositor, C> {
    /// Runs once, at the first draw into a window, to rebind buttons.
    pub click_config: Option<Box<dyn FnMut(&mut ClickBindings)>>,
    /// Runs after every selection move that shifted the viewport.
    pub content_changed: Option<Box<dyn FnMut(&Grid<P::LayerId>, &mut C)>>,
}

impl<P: Compositor, C> Default for MenuCallbacks<P, C> {
    fn default() -> Self {
        Self {
            click_config: None,
            content_changed: None,
        }
    }
}

impl<P: Compositor, C> fmt::Debug for MenuCallbacks<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuCallbacks")
            .field("click_config", &self.click_config.is_some())
            .field("content_changed", &self.content_changed.is_some())
            .finish()
    }
}

/// What [`TileMenu::handle_click`] did with a button press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickResponse<T> {
    /// The selection moved; `scrolled` reports whether the viewport shifted.
    Moved {
        /// The tile now holding the highlight.
        item: T,
        /// True when the move shifted the viewport.
        scrolled: bool,
    },
    /// The select action fired on this tile; activation itself is the host's.
    Activated(T),
    /// The press was swallowed (unbound button, or an empty menu).
    Ignored,
}

/// A scrollable tile-grid menu inside a window.
///
/// The menu owns the tile [`Grid`], the scroll layer it draws into, and, once
/// selection is in use, a [`Selector`] plus its highlight layer. All platform
/// effects go through the [`Compositor`] passed into each method; the menu
/// stores handles only.
///
/// Selection arms lazily, at most once, and only when the grid is non-empty:
/// the first draw (or the first selection call) seats the highlight on the
/// first tile with zero motion. Every later move animates the highlight from
/// its old to its new rectangle and, when the destination was outside the
/// visible window, shifts the scroll offset by the minimum amount and fires
/// the content-changed callback.
pub struct TileMenu<P: Compositor, C = ()> {
    window: P::WindowId,
    scroll: P::LayerId,
    grid: Grid<P::LayerId>,
    selector: Option<Selector>,
    highlight: Option<P::LayerId>,
    bindings: ClickBindings,
    callbacks: MenuCallbacks<P, C>,
    context: C,
    state: MenuState,
}

impl<P: Compositor, C> fmt::Debug for TileMenu<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileMenu")
            .field("window", &self.window)
            .field("scroll", &self.scroll)
            .field("tiles", &self.grid.len())
            .field("armed", &self.selector.is_some())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<P: Compositor, C: Default> TileMenu<P, C> {
    /// Builds a menu of `tiles` tiles inside `frame`, for `window`.
    ///
    /// Returns `None` when `tiles_per_view` or `tiles_per_row` is zero or the
    /// window handle is absent; nothing is created on the platform in that
    /// case. On success every tile layer and the scroll layer exist, with the
    /// scroll layer's content bounds set from the layout.
    #[must_use]
    pub fn create(
        platform: &mut P,
        frame: Rect,
        window: Option<P::WindowId>,
        tiles: usize,
        tiles_per_view: usize,
        tiles_per_row: usize,
    ) -> Option<Self> {
        let window = window?;
        // Layout validation runs before any tile layer is realized, so a
        // refused configuration leaves the platform untouched.
        let grid = Grid::new(frame, tiles, tiles_per_view, tiles_per_row, |_, rect| {
            platform.create_layer(rect)
        })?;
        let scroll = platform.create_scroll_layer(frame);
        platform.set_content_bounds(scroll, grid.layout().content_bounds());
        Some(Self {
            window,
            scroll,
            grid,
            selector: None,
            highlight: None,
            bindings: ClickBindings::default(),
            callbacks: MenuCallbacks::default(),
            context: C::default(),
            state: MenuState::empty(),
        })
    }
}

impl<P: Compositor, C> TileMenu<P, C> {
    /// Milliseconds the highlight takes to glide between tiles.
    pub const HIGHLIGHT_ANIM_MS: u32 = 150;
    /// Milliseconds the highlight waits before it starts moving.
    pub const HIGHLIGHT_ANIM_DELAY_MS: u32 = 0;

    /// Tears the menu down, releasing every platform resource it created.
    ///
    /// Each tile layer is destroyed exactly once, then the highlight layer if
    /// selection ever armed, then the scroll layer. Consuming `self` is what
    /// rules out double teardown.
    pub fn destroy(self, platform: &mut P) {
        for (tile, _) in self.grid.tiles() {
            platform.destroy_layer(tile);
        }
        if let Some(highlight) = self.highlight {
            platform.destroy_layer(highlight);
        }
        platform.destroy_layer(self.scroll);
    }

    /// Draws the menu into its window.
    ///
    /// Attaches the scroll layer under the window root and every tile layer
    /// under the scroll layer in chain order, then arms selection (when the
    /// grid is non-empty) and, the first time only, runs the click
    /// configuration provider. Re-drawing re-attaches; deduplication is the
    /// platform's contract.
    pub fn draw(&mut self, platform: &mut P) {
        let root = platform.root_layer(self.window);
        platform.add_child(root, self.scroll);
        for (tile, _) in self.grid.tiles() {
            platform.add_child(self.scroll, tile);
        }
        self.ensure_armed(platform);
        self.state.insert(MenuState::DRAWN);
        if !self.state.contains(MenuState::CLICKS_BOUND) {
            if let Some(configure) = self.callbacks.click_config.as_mut() {
                configure(&mut self.bindings);
            }
            self.state.insert(MenuState::CLICKS_BOUND);
        }
    }

    /// Replaces the host context handed to callbacks.
    pub fn set_context(&mut self, context: C) {
        self.context = context;
    }

    /// Shared view of the host context.
    #[must_use]
    pub const fn context(&self) -> &C {
        &self.context
    }

    /// Mutable view of the host context.
    pub const fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Replaces the callback set.
    pub fn set_callbacks(&mut self, callbacks: MenuCallbacks<P, C>) {
        self.callbacks = callbacks;
    }

    /// The current button bindings.
    #[must_use]
    pub const fn bindings(&self) -> &ClickBindings {
        &self.bindings
    }

    /// Lifecycle flags.
    #[must_use]
    pub const fn state(&self) -> MenuState {
        self.state
    }

    /// The underlying grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid<P::LayerId> {
        &self.grid
    }

    /// Bounds of the scrollable content.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.grid.layout().content_bounds()
    }

    /// Number of tiles.
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.grid.len()
    }

    /// The window the scroll layer is currently attached under, if any.
    #[must_use]
    pub fn window(&self, platform: &P) -> Option<P::WindowId> {
        platform.window_of(self.scroll)
    }

    /// The scroll layer.
    #[must_use]
    pub const fn layer(&self) -> P::LayerId {
        self.scroll
    }

    /// The highlight layer, once selection has armed.
    #[must_use]
    pub const fn highlight(&self) -> Option<P::LayerId> {
        self.highlight
    }

    /// Yields the next tile in reading order, wrapping past the end.
    pub fn next_tile(&mut self) -> Option<P::LayerId> {
        self.grid.next_tile()
    }

    /// Yields the previous tile, wrapping past the beginning.
    pub fn prev_tile(&mut self) -> Option<P::LayerId> {
        self.grid.prev_tile()
    }

    /// The tile under the traversal cursor, without stepping.
    #[must_use]
    pub fn current_tile(&self) -> Option<P::LayerId> {
        self.grid.current_tile()
    }

    /// True when the next [`next_tile`](Self::next_tile) read will wrap.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.grid.at_end()
    }

    /// True when the next [`prev_tile`](Self::prev_tile) read will wrap.
    #[must_use]
    pub const fn at_begin(&self) -> bool {
        self.grid.at_begin()
    }

    /// The tile holding the highlight, once selection has armed.
    #[must_use]
    pub fn selected(&self) -> Option<P::LayerId> {
        self.selector.as_ref()?.selected(&self.grid)
    }

    /// Moves the selection forward, wrapping from the last tile to the first.
    ///
    /// Arms selection first if needed. Applies the scroll shift (animated)
    /// and fires the content-changed callback when the destination was
    /// outside the window, then requests the highlight animation. `None`
    /// only for an empty grid.
    pub fn select_next(&mut self, platform: &mut P) -> Option<Motion<P::LayerId>> {
        self.shift_selection(platform, Direction::Forward)
    }

    /// Moves the selection backward, wrapping from the first tile to the
    /// last. See [`select_next`](Self::select_next).
    pub fn select_prev(&mut self, platform: &mut P) -> Option<Motion<P::LayerId>> {
        self.shift_selection(platform, Direction::Reverse)
    }

    /// Applies the button bindings to a press.
    pub fn handle_click(
        &mut self,
        platform: &mut P,
        button: MenuButton,
    ) -> ClickResponse<P::LayerId> {
        match self.bindings.action_for(button) {
            MenuAction::SelectPrev => match self.select_prev(platform) {
                Some(motion) => ClickResponse::Moved {
                    item: motion.item,
                    scrolled: motion.scroll.is_some(),
                },
                None => ClickResponse::Ignored,
            },
            MenuAction::SelectNext => match self.select_next(platform) {
                Some(motion) => ClickResponse::Moved {
                    item: motion.item,
                    scrolled: motion.scroll.is_some(),
                },
                None => ClickResponse::Ignored,
            },
            MenuAction::Activate => {
                self.ensure_armed(platform);
                match self.selected() {
                    Some(item) => ClickResponse::Activated(item),
                    None => ClickResponse::Ignored,
                }
            }
            MenuAction::Ignore => ClickResponse::Ignored,
        }
    }

    /// Arms selection once the grid is non-empty; true when armed.
    ///
    /// Arming creates the highlight layer over the first tile and attaches it
    /// to the scroll layer; no motion, shift, or notification happens.
    fn ensure_armed(&mut self, platform: &mut P) -> bool {
        if self.selector.is_some() {
            return true;
        }
        let Some(selector) = Selector::arm(&self.grid) else {
            return false;
        };
        let Some(rect) = selector.selected_rect(&self.grid) else {
            return false;
        };
        let highlight = platform.create_highlight(rect);
        platform.add_child(self.scroll, highlight);
        self.highlight = Some(highlight);
        self.selector = Some(selector);
        true
    }

    /// One code path for both selection directions.
    fn shift_selection(
        &mut self,
        platform: &mut P,
        dir: Direction,
    ) -> Option<Motion<P::LayerId>> {
        if !self.ensure_armed(platform) {
            return None;
        }
        let selector = self.selector.as_mut()?;
        let motion = match dir {
            Direction::Forward => selector.move_next(&self.grid),
            Direction::Reverse => selector.move_prev(&self.grid),
        }?;
        if let Some(offset) = motion.scroll {
            platform.set_content_offset(self.scroll, offset, true);
            if let Some(on_change) = self.callbacks.content_changed.as_mut() {
                on_change(&self.grid, &mut self.context);
            }
        }
        if let Some(highlight) = self.highlight {
            platform.animate_frame(
                highlight,
                motion.from,
                motion.to,
                Self::HIGHLIGHT_ANIM_MS,
                Self::HIGHLIGHT_ANIM_DELAY_MS,
            );
        }
        Some(motion)
    }
}
