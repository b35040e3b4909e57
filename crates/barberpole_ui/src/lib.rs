//! # BARBERPOLE UI
//!
//! Animated "barber pole" stripes for any host UI framework:
//! - Stripes rotated at any integer angle, never leaving corner gaps
//! - Linear, endlessly repeating scroll with pause/resume on visibility
//! - Draw calls issued through a host [`Surface`], or recorded for tests
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    BARBER POLE PIPELINE                   │
//! ├──────────────────────────────────────────────────────────┤
//! │  Config → Rotated Bounds → Stripe Plan → Surface Calls   │
//! │     ↓            ↓              ↑             ↓          │
//! │  Style     resize/rotate   Offset Animator  clip/rotate  │
//! │                              (host ticks)   translate    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use barberpole_ui::{BarberPoleConfig, BarberPoleView, CommandRecorder, Widget};
//!
//! let mut view = BarberPoleView::new(&BarberPoleConfig::default())?;
//! view.on_resize(100, 200);
//! view.on_frame(Duration::from_millis(16), &mut || {});
//!
//! let mut recorder = CommandRecorder::new();
//! view.on_paint(&mut recorder);
//! assert!(recorder.lines().count() > 0);
//! # Ok::<(), barberpole_ui::BarberPoleError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod config;
pub mod error;
pub mod render;
pub mod style;
pub mod widget;

pub use animation::{AnimatorState, OffsetAnimator};
pub use barberpole_core::{IntRect, Orientation, RotatedBounds, StripeLine};
pub use config::BarberPoleConfig;
pub use error::{BarberPoleError, BarberPoleResult};
pub use render::{render_stripes, CommandRecorder, RenderCommand, Surface};
pub use style::{Color, StripePaint, StripeStyle};
pub use widget::{BarberPoleView, RedrawRequester, Widget, WidgetFlags};
