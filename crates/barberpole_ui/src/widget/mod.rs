//! Widget system.
//!
//! The barber pole is the only widget; the traits describe the host seam.

mod barber_pole;
mod core;

pub use barber_pole::BarberPoleView;
pub use self::core::{RedrawRequester, Widget, WidgetFlags};
