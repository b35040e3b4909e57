//! Stripe rendering.
//!
//! The host hands the widget a [`Surface`] during paint. [`render_stripes`]
//! issues the clip, transform and line calls; [`CommandRecorder`] is a surface
//! that only records them, for tests and for hosts that batch draw calls.

use barberpole_core::{stripe_lines, IntRect, RotatedBounds};

use crate::style::{Color, StripePaint, StripeStyle};

/// Paint surface provided by the host during a paint request.
pub trait Surface {
    /// Intersects the current clip with `rect`.
    fn clip_rect(&mut self, rect: IntRect);

    /// Pushes the current transform and clip.
    fn save(&mut self);

    /// Rotates by `degrees` around `(pivot_x, pivot_y)`.
    fn rotate(&mut self, degrees: f32, pivot_x: f32, pivot_y: f32);

    /// Translates by `(dx, dy)`.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Draws a straight line with the given paint.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &StripePaint);

    /// Pops the transform and clip pushed by the matching [`Surface::save`].
    fn restore(&mut self);
}

/// A recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clip to a rectangle.
    ClipRect {
        /// Requested bounds.
        bounds: IntRect,
    },
    /// Save transform and clip state.
    Save,
    /// Rotation about a pivot.
    Rotate {
        /// Angle in degrees.
        degrees: f32,
        /// Pivot X.
        pivot_x: f32,
        /// Pivot Y.
        pivot_y: f32,
    },
    /// Translation.
    Translate {
        /// Horizontal shift.
        dx: f32,
        /// Vertical shift.
        dy: f32,
    },
    /// Line segment.
    Line {
        /// Start X.
        x1: f32,
        /// Start Y.
        y1: f32,
        /// End X.
        x2: f32,
        /// End Y.
        y2: f32,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        stroke_width: f32,
    },
    /// Restore transform and clip state.
    Restore,
}

/// Surface that records every call instead of painting.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Effective clip, if any.
    clip: Option<IntRect>,
    /// Clips saved by `save`.
    clip_stack: Vec<Option<IntRect>>,
}

impl CommandRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
            clip: None,
            clip_stack: Vec::with_capacity(4),
        }
    }

    /// Begins a new frame, dropping everything recorded so far.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.clip = None;
        self.clip_stack.clear();
    }

    /// Returns the recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Returns only the line commands.
    pub fn lines(&self) -> impl Iterator<Item = &RenderCommand> + '_ {
        self.commands
            .iter()
            .filter(|command| matches!(command, RenderCommand::Line { .. }))
    }

    /// Returns the effective clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<IntRect> {
        self.clip
    }

    /// Returns the number of unmatched `save` calls.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.clip_stack.len()
    }
}

impl Surface for CommandRecorder {
    fn clip_rect(&mut self, rect: IntRect) {
        // Intersect with current clip if any
        self.clip = Some(match self.clip {
            Some(current) => intersect(current, rect),
            None => rect,
        });
        self.commands.push(RenderCommand::ClipRect { bounds: rect });
    }

    fn save(&mut self) {
        self.clip_stack.push(self.clip);
        self.commands.push(RenderCommand::Save);
    }

    fn rotate(&mut self, degrees: f32, pivot_x: f32, pivot_y: f32) {
        self.commands.push(RenderCommand::Rotate {
            degrees,
            pivot_x,
            pivot_y,
        });
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.commands.push(RenderCommand::Translate { dx, dy });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &StripePaint) {
        self.commands.push(RenderCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color: paint.color,
            stroke_width: paint.stroke_width,
        });
    }

    fn restore(&mut self) {
        if let Some(clip) = self.clip_stack.pop() {
            self.clip = clip;
        }
        self.commands.push(RenderCommand::Restore);
    }
}

fn intersect(a: IntRect, b: IntRect) -> IntRect {
    let rect = IntRect::new(
        a.left.max(b.left),
        a.top.max(b.top),
        a.right.min(b.right),
        a.bottom.min(b.bottom),
    );
    if rect.is_empty() {
        IntRect::ZERO
    } else {
        rect
    }
}

/// Draws the stripes of one frame onto `surface`.
///
/// Clips to `viewport`, rotates by `rotation_degrees` around the viewport
/// center, shifts left by `bounds.x_shift`, then draws one vertical line per
/// stripe across the full height of `bounds`. Returns the number of lines.
pub fn render_stripes<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: IntRect,
    bounds: &RotatedBounds,
    style: &StripeStyle,
    offset: f32,
    rotation_degrees: i32,
) -> usize {
    let (pivot_x, pivot_y) = viewport.center();

    surface.clip_rect(viewport);
    surface.save();
    surface.rotate(rotation_degrees as f32, pivot_x, pivot_y);
    surface.translate(-(bounds.x_shift as f32), 0.0);

    let mut drawn = 0;
    for line in stripe_lines(bounds, style.line_width(), style.color_count(), offset) {
        surface.draw_line(
            line.x,
            line.y_start,
            line.x,
            line.y_end,
            style.paint_for(line.color_index),
        );
        drawn += 1;
    }

    surface.restore();
    drawn
}
