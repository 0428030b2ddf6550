// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Compositor`] for hosts, demos, and tests.
//!
//! [`SoftCompositor`] models just enough of a layer system to exercise the
//! menu end to end without a real platform: a layer table, parent/child
//! attachment, scroll metadata, and a recorded animation log. Animations
//! "complete" immediately by applying their final frame, which is all the
//! fire-and-forget contract promises anyone.
//!
//! Creation and destruction are counted so tests can assert resource balance
//! (see [`layers_created`](SoftCompositor::layers_created) and friends).

use hashbrown::HashMap;
use kurbo::{Rect, Vec2};
use smallvec::SmallVec;

use crate::platform::Compositor;

/// Layer handle minted by a [`SoftCompositor`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SoftLayerId(u32);

/// Window handle minted by a [`SoftCompositor`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SoftWindowId(u32);

/// Dangling layer id returned for queries that cannot resolve.
const NO_LAYER: SoftLayerId = SoftLayerId(u32::MAX);

/// One recorded [`Compositor::animate_frame`] request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimationRecord {
    /// The animated layer.
    pub layer: SoftLayerId,
    /// Starting frame.
    pub from: Rect,
    /// Final frame.
    pub to: Rect,
    /// Requested duration in milliseconds.
    pub duration_ms: u32,
    /// Requested delay in milliseconds.
    pub delay_ms: u32,
}

/// One recorded [`Compositor::set_content_offset`] request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollMove {
    /// The scroll layer.
    pub layer: SoftLayerId,
    /// The offset that was applied.
    pub offset: Vec2,
    /// Whether the move asked for animation.
    pub animated: bool,
}

#[derive(Clone, Debug)]
struct SoftLayer {
    frame: Rect,
    parent: Option<SoftLayerId>,
    children: SmallVec<[SoftLayerId; 8]>,
    /// Set only on window root layers.
    window: Option<SoftWindowId>,
    content_bounds: Rect,
    content_offset: Vec2,
}

impl SoftLayer {
    fn new(frame: Rect) -> Self {
        Self {
            frame,
            parent: None,
            children: SmallVec::new(),
            window: None,
            content_bounds: frame,
            content_offset: Vec2::ZERO,
        }
    }
}

/// A software layer system implementing [`Compositor`] in memory.
#[derive(Clone, Debug, Default)]
pub struct SoftCompositor {
    layers: HashMap<SoftLayerId, SoftLayer>,
    roots: HashMap<SoftWindowId, SoftLayerId>,
    next_layer: u32,
    next_window: u32,
    created: usize,
    destroyed: usize,
    animations: alloc::vec::Vec<AnimationRecord>,
    scroll_moves: alloc::vec::Vec<ScrollMove>,
}

impl SoftCompositor {
    /// An empty compositor with no windows or layers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a window and its root layer.
    ///
    /// The root layer does not count toward
    /// [`layers_created`](Self::layers_created); the counters track only what
    /// widgets ask for.
    pub fn new_window(&mut self, frame: Rect) -> SoftWindowId {
        let window = SoftWindowId(self.next_window);
        self.next_window += 1;
        let root = self.mint_layer(frame);
        if let Some(layer) = self.layers.get_mut(&root) {
            layer.window = Some(window);
        }
        self.roots.insert(window, root);
        window
    }

    /// Number of layers created through the [`Compositor`] entry points.
    #[must_use]
    pub const fn layers_created(&self) -> usize {
        self.created
    }

    /// Number of layers destroyed.
    #[must_use]
    pub const fn layers_destroyed(&self) -> usize {
        self.destroyed
    }

    /// Number of layers currently alive, window roots included.
    #[must_use]
    pub fn live_layers(&self) -> usize {
        self.layers.len()
    }

    /// Every animation requested so far, in request order.
    #[must_use]
    pub fn animations(&self) -> &[AnimationRecord] {
        &self.animations
    }

    /// Every content-offset change so far, in request order.
    #[must_use]
    pub fn scroll_moves(&self) -> &[ScrollMove] {
        &self.scroll_moves
    }

    /// The children of `layer`, in attach order.
    #[must_use]
    pub fn children_of(&self, layer: SoftLayerId) -> &[SoftLayerId] {
        self.layers
            .get(&layer)
            .map(|l| l.children.as_slice())
            .unwrap_or(&[])
    }

    /// The parent of `layer`, if attached.
    #[must_use]
    pub fn parent_of(&self, layer: SoftLayerId) -> Option<SoftLayerId> {
        self.layers.get(&layer)?.parent
    }

    fn mint_layer(&mut self, frame: Rect) -> SoftLayerId {
        let id = SoftLayerId(self.next_layer);
        self.next_layer += 1;
        self.layers.insert(id, SoftLayer::new(frame));
        id
    }

    fn counted_layer(&mut self, frame: Rect) -> SoftLayerId {
        self.created += 1;
        self.mint_layer(frame)
    }
}

impl Compositor for SoftCompositor {
    type LayerId = SoftLayerId;
    type WindowId = SoftWindowId;

    fn create_layer(&mut self, frame: Rect) -> SoftLayerId {
        self.counted_layer(frame)
    }

    fn destroy_layer(&mut self, layer: SoftLayerId) {
        let Some(removed) = self.layers.remove(&layer) else {
            return;
        };
        self.destroyed += 1;
        if let Some(parent) = removed.parent {
            if let Some(parent) = self.layers.get_mut(&parent) {
                parent.children.retain(|c| *c != layer);
            }
        }
        // Children are detached, not destroyed.
        for child in removed.children {
            if let Some(child) = self.layers.get_mut(&child) {
                child.parent = None;
            }
        }
    }

    fn layer_frame(&self, layer: SoftLayerId) -> Rect {
        self.layers.get(&layer).map_or(Rect::ZERO, |l| l.frame)
    }

    fn add_child(&mut self, parent: SoftLayerId, child: SoftLayerId) {
        if !self.layers.contains_key(&parent) || !self.layers.contains_key(&child) {
            return;
        }
        if let Some(old) = self.layers.get(&child).and_then(|c| c.parent) {
            if let Some(old) = self.layers.get_mut(&old) {
                old.children.retain(|c| *c != child);
            }
        }
        if let Some(parent_layer) = self.layers.get_mut(&parent) {
            if !parent_layer.children.contains(&child) {
                parent_layer.children.push(child);
            }
        }
        if let Some(child_layer) = self.layers.get_mut(&child) {
            child_layer.parent = Some(parent);
        }
    }

    fn root_layer(&self, window: SoftWindowId) -> SoftLayerId {
        self.roots.get(&window).copied().unwrap_or(NO_LAYER)
    }

    fn window_of(&self, layer: SoftLayerId) -> Option<SoftWindowId> {
        let mut at = layer;
        // Bounded walk: the layer table is acyclic by construction, but a
        // hostile graph must not hang us.
        for _ in 0..self.layers.len() + 1 {
            let node = self.layers.get(&at)?;
            if let Some(window) = node.window {
                return Some(window);
            }
            at = node.parent?;
        }
        None
    }

    fn create_scroll_layer(&mut self, frame: Rect) -> SoftLayerId {
        self.counted_layer(frame)
    }

    fn set_content_bounds(&mut self, scroll: SoftLayerId, bounds: Rect) {
        if let Some(layer) = self.layers.get_mut(&scroll) {
            layer.content_bounds = bounds;
        }
    }

    fn set_content_offset(&mut self, scroll: SoftLayerId, offset: Vec2, animated: bool) {
        let Some(layer) = self.layers.get_mut(&scroll) else {
            return;
        };
        layer.content_offset = offset;
        self.scroll_moves.push(ScrollMove {
            layer: scroll,
            offset,
            animated,
        });
    }

    fn content_offset(&self, scroll: SoftLayerId) -> Vec2 {
        self.layers
            .get(&scroll)
            .map_or(Vec2::ZERO, |l| l.content_offset)
    }

    fn create_highlight(&mut self, frame: Rect) -> SoftLayerId {
        self.counted_layer(frame)
    }

    fn animate_frame(
        &mut self,
        layer: SoftLayerId,
        from: Rect,
        to: Rect,
        duration_ms: u32,
        delay_ms: u32,
    ) {
        let Some(target) = self.layers.get_mut(&layer) else {
            return;
        };
        // The soft animator completes immediately: final frame applied, no
        // transient state left behind.
        target.frame = to;
        self.animations.push(AnimationRecord {
            layer,
            from,
            to,
            duration_ms,
            delay_ms,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{SoftCompositor, NO_LAYER};
    use crate::platform::Compositor;
    use kurbo::{Rect, Vec2};

    const FRAME: Rect = Rect::new(0.0, 0.0, 100.0, 90.0);

    #[test]
    fn windows_get_roots_that_resolve_back() {
        let mut soft = SoftCompositor::new();
        let window = soft.new_window(FRAME);
        let root = soft.root_layer(window);
        assert_ne!(root, NO_LAYER);
        assert_eq!(soft.window_of(root), Some(window));
        // Roots are infrastructure, not widget resources.
        assert_eq!(soft.layers_created(), 0);
        assert_eq!(soft.live_layers(), 1);
    }

    #[test]
    fn attachment_walks_up_to_the_window() {
        let mut soft = SoftCompositor::new();
        let window = soft.new_window(FRAME);
        let root = soft.root_layer(window);
        let a = soft.create_layer(FRAME);
        let b = soft.create_layer(Rect::new(0.0, 0.0, 10.0, 10.0));

        assert_eq!(soft.window_of(a), None);
        soft.add_child(root, a);
        soft.add_child(a, b);
        assert_eq!(soft.window_of(b), Some(window));
        assert_eq!(soft.parent_of(b), Some(a));
        assert_eq!(soft.children_of(a), &[b]);
    }

    #[test]
    fn reattachment_moves_a_layer_without_duplicating_it() {
        let mut soft = SoftCompositor::new();
        let a = soft.create_layer(FRAME);
        let b = soft.create_layer(FRAME);
        let child = soft.create_layer(Rect::new(0.0, 0.0, 10.0, 10.0));

        soft.add_child(a, child);
        soft.add_child(a, child);
        assert_eq!(soft.children_of(a).len(), 1);

        soft.add_child(b, child);
        assert!(soft.children_of(a).is_empty());
        assert_eq!(soft.children_of(b), &[child]);
    }

    #[test]
    fn destroying_a_layer_detaches_but_keeps_its_children() {
        let mut soft = SoftCompositor::new();
        let parent = soft.create_layer(FRAME);
        let child = soft.create_layer(Rect::new(0.0, 0.0, 10.0, 10.0));
        soft.add_child(parent, child);

        soft.destroy_layer(parent);
        assert_eq!(soft.layers_destroyed(), 1);
        assert_eq!(soft.parent_of(child), None);
        assert_eq!(soft.layer_frame(parent), Rect::ZERO);

        // Destroying an already-gone id is a no-op, not a double count.
        soft.destroy_layer(parent);
        assert_eq!(soft.layers_destroyed(), 1);
    }

    #[test]
    fn scroll_state_and_animations_are_recorded() {
        let mut soft = SoftCompositor::new();
        let scroll = soft.create_scroll_layer(FRAME);
        soft.set_content_bounds(scroll, Rect::new(0.0, 0.0, 100.0, 120.0));
        soft.set_content_offset(scroll, Vec2::new(0.0, -30.0), true);
        assert_eq!(soft.content_offset(scroll), Vec2::new(0.0, -30.0));
        assert_eq!(soft.scroll_moves().len(), 1);
        assert!(soft.scroll_moves()[0].animated);

        let layer = soft.create_layer(Rect::new(0.0, 0.0, 50.0, 30.0));
        let to = Rect::new(50.0, 0.0, 100.0, 30.0);
        soft.animate_frame(layer, Rect::new(0.0, 0.0, 50.0, 30.0), to, 150, 0);
        assert_eq!(soft.animations().len(), 1);
        assert_eq!(soft.layer_frame(layer), to);
    }
}
