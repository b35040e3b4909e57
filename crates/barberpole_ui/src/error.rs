//! # Barber Pole Error Types
//!
//! Every failure here happens at configuration time. Painting and ticking
//! never fail.

use thiserror::Error;

/// Errors that can occur while configuring a barber pole.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BarberPoleError {
    /// A configuration value would leave the widget unable to draw.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// The configuration document is not valid TOML or has the wrong shape.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for barber pole operations.
pub type BarberPoleResult<T> = Result<T, BarberPoleError>;
