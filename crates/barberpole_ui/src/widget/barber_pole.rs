//! The barber pole widget.
//!
//! Geometry is recomputed synchronously whenever the rotation or the viewport
//! changes, so a paint never sees stale bounds. The offset animator is the
//! only time-dependent state and is read, never written, during paint.

use std::time::Duration;

use barberpole_core::{
    compute_rotated_bounds, stripe_lines, IntRect, Orientation, RotatedBounds, StripeLines,
};

use crate::animation::{AnimatorState, OffsetAnimator};
use crate::config::BarberPoleConfig;
use crate::error::BarberPoleResult;
use crate::render::{render_stripes, Surface};
use crate::style::{Color, StripeStyle};
use crate::widget::core::{RedrawRequester, Widget, WidgetFlags};

/// Animated stripes rotated at a configurable angle, clipped to the widget.
#[derive(Debug)]
pub struct BarberPoleView {
    /// Colors and stroke width.
    style: StripeStyle,
    /// Stripe rotation.
    orientation: Orientation,
    /// Unrotated drawable area, also the clip rect.
    viewport: IntRect,
    /// Cached bounds for `viewport` under `orientation`.
    bounds: RotatedBounds,
    /// Time per color.
    animation_speed: Duration,
    /// Present only when animated.
    animator: Option<OffsetAnimator>,
    /// State flags.
    flags: WidgetFlags,
}

impl BarberPoleView {
    /// Creates a widget from a configuration. Starts animating right away if
    /// `config.animated` is set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BarberPoleError::InvalidConfiguration`] for an empty
    /// palette or a non-positive line width. Nothing is constructed then.
    pub fn new(config: &BarberPoleConfig) -> BarberPoleResult<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!("Rejected barber pole configuration: {}", err);
            return Err(err);
        }

        let style = StripeStyle::new(&config.colors, config.line_width)?;
        let animation_speed = Duration::from_millis(config.animation_speed);

        let animator = config.animated.then(|| {
            let mut animator = OffsetAnimator::new(
                style.cycle_length(),
                cycle_duration(animation_speed, style.color_count()),
            );
            animator.start();
            animator
        });

        tracing::debug!(
            "Barber pole created: colors={} line_width={} rotation={} animated={}",
            style.color_count(),
            style.line_width(),
            config.line_rotation,
            config.animated
        );

        Ok(Self {
            style,
            orientation: Orientation::from_degrees(config.line_rotation),
            viewport: IntRect::ZERO,
            bounds: RotatedBounds::default(),
            animation_speed,
            animator,
            flags: WidgetFlags::DEFAULT,
        })
    }

    /// Creates a widget from a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns the parse or validation error of
    /// [`BarberPoleConfig::from_toml_str`].
    pub fn from_toml_str(source: &str) -> BarberPoleResult<Self> {
        Self::new(&BarberPoleConfig::from_toml_str(source)?)
    }

    /// Returns the stripe rotation in degrees.
    #[must_use]
    pub fn line_rotation(&self) -> i32 {
        self.orientation.degrees()
    }

    /// Returns the stripe width in pixels.
    #[must_use]
    pub fn line_width(&self) -> i32 {
        self.style.line_width()
    }

    /// Returns the stripe style.
    #[must_use]
    pub fn style(&self) -> &StripeStyle {
        &self.style
    }

    /// Returns the time per color.
    #[must_use]
    pub fn animation_speed(&self) -> Duration {
        self.animation_speed
    }

    /// Returns the unrotated drawable area.
    #[must_use]
    pub fn viewport(&self) -> IntRect {
        self.viewport
    }

    /// Returns the cached rotated bounds.
    #[must_use]
    pub fn rotated_bounds(&self) -> RotatedBounds {
        self.bounds
    }

    /// Returns the current animation offset; always 0 when not animated.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.animator.as_ref().map_or(0.0, OffsetAnimator::offset)
    }

    /// Returns true if the widget was configured to animate.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animator.is_some()
    }

    /// Returns the animator state; `Stopped` when not animated.
    #[must_use]
    pub fn animator_state(&self) -> AnimatorState {
        self.animator
            .as_ref()
            .map_or(AnimatorState::Stopped, OffsetAnimator::state)
    }

    /// Returns the state flags.
    #[must_use]
    pub fn flags(&self) -> WidgetFlags {
        self.flags
    }

    /// Returns true if something changed since the last paint.
    ///
    /// The setters below cannot reach the host, so after calling one the host
    /// checks this and schedules a paint itself.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.flags.has(WidgetFlags::DIRTY_RENDER)
    }

    /// Sets the stripe rotation.
    ///
    /// Side effect: recomputes the rotated bounds immediately and marks the
    /// widget for redraw (see [`Self::needs_redraw`]). Setting the current
    /// value does nothing.
    pub fn set_line_rotation(&mut self, degrees: i32) {
        if degrees == self.orientation.degrees() {
            return;
        }
        self.orientation = Orientation::from_degrees(degrees);
        self.recompute_bounds();
        self.flags.set(WidgetFlags::DIRTY_RENDER);
    }

    /// Sets the stripe width.
    ///
    /// Side effect: rewrites every paint's stroke width, rescales the
    /// animation range keeping the current phase, and marks the widget for
    /// redraw (see [`Self::needs_redraw`]).
    ///
    /// # Errors
    ///
    /// Returns [`crate::BarberPoleError::InvalidConfiguration`] if
    /// `line_width` is not positive. Nothing changes then.
    pub fn set_line_width(&mut self, line_width: i32) -> BarberPoleResult<()> {
        self.style.set_line_width(line_width)?;
        self.sync_animator();
        self.flags.set(WidgetFlags::DIRTY_RENDER);
        Ok(())
    }

    /// Replaces the palette.
    ///
    /// Side effect: rescales the animation range and cycle duration, keeping
    /// the current phase, and marks the widget for redraw (see
    /// [`Self::needs_redraw`]).
    ///
    /// # Errors
    ///
    /// Returns [`crate::BarberPoleError::InvalidConfiguration`] if `colors` is
    /// empty. Nothing changes then.
    pub fn set_colors(&mut self, colors: &[Color]) -> BarberPoleResult<()> {
        self.style.set_colors(colors)?;
        self.sync_animator();
        self.flags.set(WidgetFlags::DIRTY_RENDER);
        Ok(())
    }

    /// Sets the time per color, keeping the current phase.
    pub fn set_animation_speed(&mut self, speed: Duration) {
        self.animation_speed = speed;
        self.sync_animator();
    }

    /// Feeds a normalized progress value from a host timer primitive.
    /// Requests a redraw if the offset moved.
    pub fn on_progress(&mut self, progress: f32, host: &mut dyn RedrawRequester) {
        let advanced = self
            .animator
            .as_mut()
            .and_then(|animator| animator.set_progress(progress));
        if advanced.is_some() {
            self.flags.set(WidgetFlags::DIRTY_RENDER);
            host.request_redraw();
        }
    }

    /// Plans the stripe lines of the next paint without a surface. `None`
    /// while the widget is unsized.
    #[must_use]
    pub fn stripe_plan(&self) -> Option<StripeLines> {
        if self.viewport.is_empty() {
            return None;
        }
        Some(stripe_lines(
            &self.bounds,
            self.style.line_width(),
            self.style.color_count(),
            self.offset(),
        ))
    }

    /// Tears the widget down, stopping the animator so no timer outlives the
    /// surface.
    pub fn detach(&mut self) {
        if let Some(animator) = self.animator.as_mut() {
            animator.stop();
        }
        self.flags.clear(WidgetFlags::VISIBLE);
    }

    fn recompute_bounds(&mut self) {
        self.bounds = compute_rotated_bounds(
            self.viewport.width(),
            self.viewport.height(),
            self.orientation,
        );
        self.flags.clear(WidgetFlags::DIRTY_BOUNDS);
        tracing::debug!(
            "Rotated bounds recomputed: viewport={}x{} rotation={} bounds={:?} x_shift={}",
            self.viewport.width(),
            self.viewport.height(),
            self.orientation.degrees(),
            self.bounds.rect,
            self.bounds.x_shift
        );
    }

    fn sync_animator(&mut self) {
        let end_value = self.style.cycle_length();
        let duration = cycle_duration(self.animation_speed, self.style.color_count());
        if let Some(animator) = self.animator.as_mut() {
            animator.reconfigure(end_value, duration);
        }
    }
}

impl Widget for BarberPoleView {
    fn on_resize(&mut self, width: i32, height: i32) {
        self.viewport = IntRect::from_size(width.max(0), height.max(0));
        self.recompute_bounds();
        self.flags.set(WidgetFlags::DIRTY_RENDER);
    }

    fn on_visibility_changed(&mut self, visible: bool) {
        if visible {
            self.flags.set(WidgetFlags::VISIBLE);
            if let Some(animator) = self.animator.as_mut() {
                animator.resume();
            }
        } else {
            self.flags.clear(WidgetFlags::VISIBLE);
            if let Some(animator) = self.animator.as_mut() {
                animator.pause();
            }
        }
    }

    fn on_frame(&mut self, dt: Duration, host: &mut dyn RedrawRequester) {
        let advanced = self.animator.as_mut().and_then(|animator| animator.tick(dt));
        if advanced.is_some() {
            self.flags.set(WidgetFlags::DIRTY_RENDER);
            host.request_redraw();
        }
    }

    fn on_paint(&mut self, surface: &mut dyn Surface) {
        if self.viewport.is_empty() {
            tracing::trace!("Skipping paint of unsized barber pole");
            return;
        }

        render_stripes(
            surface,
            self.viewport,
            &self.bounds,
            &self.style,
            self.offset(),
            self.orientation.degrees(),
        );
        self.flags.clear(WidgetFlags::DIRTY_RENDER);
    }
}

impl Drop for BarberPoleView {
    fn drop(&mut self) {
        self.detach();
    }
}

fn cycle_duration(speed: Duration, color_count: usize) -> Duration {
    let count = u32::try_from(color_count).unwrap_or(u32::MAX);
    speed.saturating_mul(count)
}
