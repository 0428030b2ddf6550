// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The platform contract the menu widget draws through.

use core::fmt::Debug;

use kurbo::{Rect, Vec2};

/// Layer, scrolling, highlight, and animation services supplied by the host
/// platform.
///
/// The widget treats the platform as an opaque collaborator: it holds layer
/// and window ids, never layer contents, and drives everything through this
/// one trait. Implementations range from a real embedded compositor to the
/// in-memory [`SoftCompositor`](crate::softcomp::SoftCompositor) used by
/// tests and demos.
///
/// Contract points the widget relies on:
///
/// - ids are small copyable handles; a destroyed id simply stops resolving
///   (queries on it return the zero rectangle or `None`, never panic).
/// - [`add_child`](Self::add_child) tolerates re-attachment; drawing twice is
///   the platform's problem to deduplicate or not.
/// - [`animate_frame`](Self::animate_frame) is fire-and-forget: it owns its
///   transient resources and releases them on completion. The widget never
///   observes completion.
pub trait Compositor {
    /// Handle to a layer (plain, scroll, or highlight).
    type LayerId: Copy + Eq + Debug;
    /// Handle to a window.
    type WindowId: Copy + Eq + Debug;

    /// Creates a plain layer with the given frame.
    fn create_layer(&mut self, frame: Rect) -> Self::LayerId;

    /// Destroys a layer. Children are detached, not destroyed.
    fn destroy_layer(&mut self, layer: Self::LayerId);

    /// The layer's frame, or [`Rect::ZERO`] for an id that no longer
    /// resolves.
    fn layer_frame(&self, layer: Self::LayerId) -> Rect;

    /// Attaches `child` under `parent`.
    fn add_child(&mut self, parent: Self::LayerId, child: Self::LayerId);

    /// The root layer of a window.
    fn root_layer(&self, window: Self::WindowId) -> Self::LayerId;

    /// The window a layer is attached under, if any.
    fn window_of(&self, layer: Self::LayerId) -> Option<Self::WindowId>;

    /// Creates a scrollable container layer.
    fn create_scroll_layer(&mut self, frame: Rect) -> Self::LayerId;

    /// Sets the scrollable content bounds of a scroll layer.
    fn set_content_bounds(&mut self, scroll: Self::LayerId, bounds: Rect);

    /// Sets the content offset of a scroll layer, optionally animated.
    ///
    /// The offset is applied to the content: scrolling down corresponds to a
    /// more negative vertical component.
    fn set_content_offset(&mut self, scroll: Self::LayerId, offset: Vec2, animated: bool);

    /// The current content offset of a scroll layer.
    fn content_offset(&self, scroll: Self::LayerId) -> Vec2;

    /// Creates the inverted highlight layer at the given frame.
    fn create_highlight(&mut self, frame: Rect) -> Self::LayerId;

    /// Schedules a frame animation from `from` to `to` on `layer`.
    ///
    /// Asynchronous and self-cleaning; nothing in the widget waits for it.
    fn animate_frame(
        &mut self,
        layer: Self::LayerId,
        from: Rect,
        to: Rect,
        duration_ms: u32,
        delay_ms: u32,
    );
}
