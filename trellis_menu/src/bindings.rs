// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-input bindings.

/// The three physical buttons a watch menu listens to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuButton {
    /// The up button.
    Up,
    /// The down button.
    Down,
    /// The select button.
    Select,
}

/// What a button press does to the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Move the selection backward (toward the first tile).
    SelectPrev,
    /// Move the selection forward (toward the last tile).
    SelectNext,
    /// Report the selected tile to the host; the menu itself does nothing.
    Activate,
    /// Swallow the press.
    Ignore,
}

/// Button-to-action mapping, applied by
/// [`TileMenu::handle_click`](crate::TileMenu::handle_click).
///
/// The default is the stock watch mapping: up walks the selection backward,
/// down walks it forward, select activates. A configuration provider set via
/// [`MenuCallbacks`](crate::MenuCallbacks) may rebind any of the three; it
/// runs once, at the first draw into a window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClickBindings {
    /// Action for [`MenuButton::Up`].
    pub up: MenuAction,
    /// Action for [`MenuButton::Down`].
    pub down: MenuAction,
    /// Action for [`MenuButton::Select`].
    pub select: MenuAction,
}

impl Default for ClickBindings {
    fn default() -> Self {
        Self {
            up: MenuAction::SelectPrev,
            down: MenuAction::SelectNext,
            select: MenuAction::Activate,
        }
    }
}

impl ClickBindings {
    /// The action bound to `button`.
    #[must_use]
    pub const fn action_for(&self, button: MenuButton) -> MenuAction {
        match button {
            MenuButton::Up => self.up,
            MenuButton::Down => self.down,
            MenuButton::Select => self.select,
        }
    }
}
