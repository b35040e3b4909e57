//! # BARBERPOLE Core
//!
//! Geometry behind the barber pole stripe widget:
//! - Rotated bounding box that covers a viewport at any angle
//! - Deterministic plan of stripe lines for a given offset
//!
//! ## Architecture Rules
//!
//! 1. **No I/O, no clocks** - everything here is a pure function of its inputs
//! 2. **Integer geometry** - bounds are whole pixels, like the host surface
//! 3. **Testable without a canvas** - the stripe plan is an iterator of lines
//!
//! ## Example
//!
//! ```rust
//! use barberpole_core::{compute_rotated_bounds, Orientation};
//!
//! let bounds = compute_rotated_bounds(100, 200, Orientation::from_degrees(45));
//! assert_eq!(bounds.x_shift, 112);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod geometry;
pub mod stripes;

pub use geometry::{compute_rotated_bounds, IntRect, Orientation, RotatedBounds};
pub use stripes::{stripe_lines, StripeLine, StripeLines};
