//! Core widget types and traits.
//!
//! The host framework owns the view lifecycle. Widgets do not inherit from it;
//! they expose the callbacks the host invokes and receive the capabilities
//! they need (a paint surface, a way to ask for a redraw) as arguments.

use std::time::Duration;

use crate::render::Surface;

/// Widget state flags (bitfield).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// Rotated bounds must be recomputed before the next paint.
    pub const DIRTY_BOUNDS: u32 = 1 << 1;
    /// Widget needs redraw.
    pub const DIRTY_RENDER: u32 = 1 << 2;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::DIRTY_BOUNDS | Self::DIRTY_RENDER);

    /// Creates new flags with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Host capability for scheduling a repaint.
pub trait RedrawRequester {
    /// Asks the host to call [`Widget::on_paint`] soon.
    fn request_redraw(&mut self);
}

impl<F: FnMut()> RedrawRequester for F {
    fn request_redraw(&mut self) {
        self();
    }
}

/// Callbacks a host invokes on a widget.
pub trait Widget {
    /// The drawable area changed size.
    fn on_resize(&mut self, width: i32, height: i32);

    /// The drawable area gained or lost visibility.
    fn on_visibility_changed(&mut self, visible: bool);

    /// A frame of `dt` elapsed. Widgets that changed call
    /// [`RedrawRequester::request_redraw`].
    fn on_frame(&mut self, dt: Duration, host: &mut dyn RedrawRequester);

    /// Paints onto the host surface.
    fn on_paint(&mut self, surface: &mut dyn Surface);
}
