//! Rotated bounding box math.
//!
//! Rotating a rectangle grows its axis-aligned bounding box. Stripes drawn only
//! inside the original viewport would leave empty triangles in the corners once
//! the canvas is rotated, so they are drawn across this larger box and the
//! composite is clipped back to the viewport.

/// An integer rectangle in surface pixels (left, top, right, bottom).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl IntRect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a new rectangle from its edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates the rectangle `[0, 0]..[width, height]`.
    #[must_use]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Returns the height.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Returns true if the rectangle covers no pixels.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) as f32 * 0.5,
            (self.top + self.bottom) as f32 * 0.5,
        )
    }
}

/// Stripe rotation in degrees, with the trig values the bounds need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    degrees: i32,
    radians: f64,
    sin_abs: f64,
    cos_abs: f64,
}

impl Orientation {
    /// Creates an orientation. Any integer angle is accepted.
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Self {
        let radians = f64::from(degrees).to_radians();
        Self {
            degrees,
            radians,
            sin_abs: radians.sin().abs(),
            cos_abs: radians.cos().abs(),
        }
    }

    /// Returns the angle in degrees.
    #[inline]
    #[must_use]
    pub const fn degrees(&self) -> i32 {
        self.degrees
    }

    /// Returns the angle in radians.
    #[inline]
    #[must_use]
    pub const fn radians(&self) -> f64 {
        self.radians
    }

    /// Returns `|sin θ|`.
    #[inline]
    #[must_use]
    pub const fn sin_abs(&self) -> f64 {
        self.sin_abs
    }

    /// Returns `|cos θ|`.
    #[inline]
    #[must_use]
    pub const fn cos_abs(&self) -> f64 {
        self.cos_abs
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::from_degrees(45)
    }
}

/// Box that still covers the viewport after rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotatedBounds {
    /// The enlarged box in pre-rotation drawing space.
    pub rect: IntRect,
    /// `round(w·|cos| + h·|sin|)`.
    pub width: i32,
    /// `round(w·|sin| + h·|cos|)`.
    pub height: i32,
    /// `|rect.left|`, the translation that lines stripes up with the box.
    pub x_shift: i32,
}

impl RotatedBounds {
    /// Returns true if nothing has been computed yet (both sizes are zero).
    #[inline]
    #[must_use]
    pub const fn is_uncomputed(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

/// Computes the bounds covering a `width` x `height` viewport rotated by
/// `orientation`.
///
/// The box is anchored on the viewport's bottom-right corner and extends by
/// the rotated size in every direction. That is looser than the tightest
/// rotated-rectangle bound but never leaves gaps. Negative sizes are treated
/// as zero; edges saturate at the `i32` range.
#[must_use]
pub fn compute_rotated_bounds(width: i32, height: i32, orientation: Orientation) -> RotatedBounds {
    let width = width.max(0);
    let height = height.max(0);
    let w = f64::from(width);
    let h = f64::from(height);
    let s = orientation.sin_abs();
    let c = orientation.cos_abs();

    let rotated_width = (w * c + h * s).round() as i32;
    let rotated_height = (w * s + h * c).round() as i32;

    let rect = IntRect::new(
        width.saturating_sub(rotated_width),
        height.saturating_sub(rotated_height),
        width.saturating_add(rotated_width),
        height.saturating_add(rotated_height),
    );

    RotatedBounds {
        rect,
        width: rotated_width,
        height: rotated_height,
        x_shift: rect.left.abs(),
    }
}
