//! Barber pole configuration.
//!
//! Loaded once at construction, usually from a TOML document:
//!
//! ```toml
//! colors = ["#FF0000", "#FFFFFF"]
//! line_width = 8
//! line_rotation = 30
//! animated = true
//! animation_speed = 400
//! ```
//!
//! Missing keys fall back to the platform defaults below. A document without
//! `colors` gets red/white; [`BarberPoleConfig::default`], used when there is
//! no document at all, gets red/white/blue/white.

use serde::Deserialize;

use crate::error::BarberPoleResult;
use crate::style::{validate_colors, validate_line_width, Color};

/// Platform default stripe width in pixels.
pub const DEFAULT_LINE_WIDTH: i32 = 5;

/// Platform default stripe rotation in degrees.
pub const DEFAULT_LINE_ROTATION: i32 = 45;

/// Platform default time per color in milliseconds.
pub const DEFAULT_ANIMATION_SPEED_MS: u64 = 400;

/// Configuration for a barber pole widget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarberPoleConfig {
    /// Stripe colors in drawing order. Must not be empty.
    #[serde(default = "declared_colors")]
    pub colors: Vec<Color>,
    /// Stripe width in pixels. Must be positive.
    pub line_width: i32,
    /// Stripe rotation in degrees.
    pub line_rotation: i32,
    /// Whether the stripes scroll.
    pub animated: bool,
    /// Milliseconds per color; one full cycle lasts
    /// `animation_speed * colors.len()`.
    pub animation_speed: u64,
}

impl Default for BarberPoleConfig {
    fn default() -> Self {
        Self {
            colors: vec![Color::RED, Color::WHITE, Color::BLUE, Color::WHITE],
            line_width: DEFAULT_LINE_WIDTH,
            line_rotation: DEFAULT_LINE_ROTATION,
            animated: true,
            animation_speed: DEFAULT_ANIMATION_SPEED_MS,
        }
    }
}

fn declared_colors() -> Vec<Color> {
    vec![Color::RED, Color::WHITE]
}

impl BarberPoleConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BarberPoleError::ConfigParse`] for malformed documents
    /// (including unparseable colors) and
    /// [`crate::BarberPoleError::InvalidConfiguration`] if validation fails.
    pub fn from_toml_str(source: &str) -> BarberPoleResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values that would break drawing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BarberPoleError::InvalidConfiguration`] if `colors` is
    /// empty or `line_width` is not positive.
    pub fn validate(&self) -> BarberPoleResult<()> {
        validate_colors(&self.colors)?;
        validate_line_width(self.line_width)?;
        Ok(())
    }
}
