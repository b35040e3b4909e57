//! Stripe line planning.
//!
//! Stripes are drawn as vertical lines in the rotated, translated drawing
//! space. The plan below is what the renderer walks each frame; it never
//! touches a surface so it can be asserted on directly.

use crate::geometry::RotatedBounds;

/// One vertical stripe line in drawing space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripeLine {
    /// Step count from the start of the iteration (0-based).
    pub step: usize,
    /// Cursor position before the animation offset is applied.
    pub cursor: i32,
    /// Horizontal position, `cursor + offset`.
    pub x: f32,
    /// Line start (the bounds' bottom edge).
    pub y_start: f32,
    /// Line end (the bounds' top edge).
    pub y_end: f32,
    /// Index into the color list, `step % color_count`.
    pub color_index: usize,
}

/// Iterator over the stripe lines of one frame.
#[derive(Debug, Clone)]
pub struct StripeLines {
    cursor: i32,
    end: i32,
    step_width: i32,
    step: usize,
    color_count: usize,
    offset: f32,
    y_start: f32,
    y_end: f32,
    done: bool,
}

impl Iterator for StripeLines {
    type Item = StripeLine;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.cursor > self.end {
            return None;
        }

        let line = StripeLine {
            step: self.step,
            cursor: self.cursor,
            x: self.cursor as f32 + self.offset,
            y_start: self.y_start,
            y_end: self.y_end,
            color_index: self.step % self.color_count,
        };

        self.step += 1;
        match self.cursor.checked_add(self.step_width) {
            Some(next) => self.cursor = next,
            None => self.done = true,
        }

        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done || self.cursor > self.end {
            return (0, Some(0));
        }
        let span = i64::from(self.end) - i64::from(self.cursor);
        let remaining = (span / i64::from(self.step_width) + 1) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StripeLines {}

/// Plans the stripe lines for one frame.
///
/// The cursor runs from `max(0, left - x_shift)` to `right + x_shift`
/// inclusive, one `stripe_width` per step. Each line spans the full height of
/// the bounds and is shifted by `offset`. Colors cycle with the step count, so
/// the color of a line never depends on its absolute position.
///
/// A non-positive `stripe_width` or zero `color_count` yields no lines; both
/// are rejected at configuration time before they can reach this point.
#[must_use]
pub fn stripe_lines(
    bounds: &RotatedBounds,
    stripe_width: i32,
    color_count: usize,
    offset: f32,
) -> StripeLines {
    let rect = bounds.rect;
    let start = rect.left.saturating_sub(bounds.x_shift).max(0);
    let end = rect.right.saturating_add(bounds.x_shift);

    StripeLines {
        cursor: start,
        end,
        step_width: stripe_width.max(1),
        step: 0,
        color_count: color_count.max(1),
        offset,
        y_start: rect.bottom as f32,
        y_end: rect.top as f32,
        done: stripe_width <= 0 || color_count == 0,
    }
}
