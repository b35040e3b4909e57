//! Colors and the stripe style.
//!
//! Colors and stroke width are one entity: a [`StripeStyle`] holds one paint
//! per color, all sharing the configured line width.

use serde::Deserialize;

use crate::error::{BarberPoleError, BarberPoleResult};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Solid red.
    pub const RED: Self = Self::rgba(1.0, 0.0, 0.0, 1.0);
    /// Solid blue.
    pub const BLUE: Self = Self::rgba(0.0, 0.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from a packed `0xAARRGGBB` value, the host's notation.
    #[must_use]
    pub fn argb(packed: u32) -> Self {
        let a = ((packed >> 24) & 0xFF) as f32 / 255.0;
        let r = ((packed >> 16) & 0xFF) as f32 / 255.0;
        let g = ((packed >> 8) & 0xFF) as f32 / 255.0;
        let b = (packed & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Parses `#RRGGBB`, `#AARRGGBB` or one of the named colors
    /// (`red`, `white`, `blue`, `black`, `transparent`).
    ///
    /// # Errors
    ///
    /// Returns [`BarberPoleError::InvalidColor`] for anything else.
    pub fn parse(value: &str) -> BarberPoleResult<Self> {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "red" => return Ok(Self::RED),
            "white" => return Ok(Self::WHITE),
            "blue" => return Ok(Self::BLUE),
            "black" => return Ok(Self::BLACK),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }

        let digits = trimmed
            .strip_prefix('#')
            .filter(|digits| digits.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| BarberPoleError::InvalidColor(value.to_owned()))?;
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| BarberPoleError::InvalidColor(value.to_owned()))?;

        match digits.len() {
            6 => Ok(Self::argb(0xFF00_0000 | packed)),
            8 => Ok(Self::argb(packed)),
            _ => Err(BarberPoleError::InvalidColor(value.to_owned())),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for Color {
    type Error = BarberPoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Paint for one stripe color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripePaint {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels, equal to the style's line width.
    pub stroke_width: f32,
    /// Whether edges are anti-aliased. Always on for stripes.
    pub anti_alias: bool,
}

/// Ordered stripe paints sharing one line width.
///
/// Invariant: never empty, line width always positive.
#[derive(Debug, Clone, PartialEq)]
pub struct StripeStyle {
    paints: Vec<StripePaint>,
    line_width: i32,
}

impl StripeStyle {
    /// Creates a style with one paint per color.
    ///
    /// # Errors
    ///
    /// Returns [`BarberPoleError::InvalidConfiguration`] if `colors` is empty
    /// or `line_width` is not positive.
    pub fn new(colors: &[Color], line_width: i32) -> BarberPoleResult<Self> {
        validate_colors(colors)?;
        validate_line_width(line_width)?;

        Ok(Self {
            paints: build_paints(colors, line_width),
            line_width,
        })
    }

    /// Returns the stripe width in pixels.
    #[inline]
    #[must_use]
    pub fn line_width(&self) -> i32 {
        self.line_width
    }

    /// Returns the number of colors. Never zero.
    #[inline]
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.paints.len()
    }

    /// Returns the paints in drawing order.
    #[must_use]
    pub fn paints(&self) -> &[StripePaint] {
        &self.paints
    }

    /// Returns the paint for a stripe index, cycling through the palette.
    #[must_use]
    pub fn paint_for(&self, index: usize) -> &StripePaint {
        &self.paints[index % self.paints.len()]
    }

    /// Length of one full color cycle in pixels, `line_width * color_count`.
    #[must_use]
    pub fn cycle_length(&self) -> f32 {
        self.line_width as f32 * self.paints.len() as f32
    }

    /// Changes the line width and rewrites every paint's stroke width.
    ///
    /// # Errors
    ///
    /// Returns [`BarberPoleError::InvalidConfiguration`] if `line_width` is
    /// not positive. The style is left untouched in that case.
    pub fn set_line_width(&mut self, line_width: i32) -> BarberPoleResult<()> {
        validate_line_width(line_width)?;
        self.line_width = line_width;
        for paint in &mut self.paints {
            paint.stroke_width = line_width as f32;
        }
        Ok(())
    }

    /// Replaces the palette, keeping the line width.
    ///
    /// # Errors
    ///
    /// Returns [`BarberPoleError::InvalidConfiguration`] if `colors` is empty.
    /// The style is left untouched in that case.
    pub fn set_colors(&mut self, colors: &[Color]) -> BarberPoleResult<()> {
        validate_colors(colors)?;
        self.paints = build_paints(colors, self.line_width);
        Ok(())
    }
}

fn build_paints(colors: &[Color], line_width: i32) -> Vec<StripePaint> {
    colors
        .iter()
        .map(|&color| StripePaint {
            color,
            stroke_width: line_width as f32,
            anti_alias: true,
        })
        .collect()
}

pub(crate) fn validate_colors(colors: &[Color]) -> BarberPoleResult<()> {
    if colors.is_empty() {
        return Err(BarberPoleError::InvalidConfiguration(
            "colors must contain at least one color".to_owned(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_line_width(line_width: i32) -> BarberPoleResult<()> {
    if line_width <= 0 {
        return Err(BarberPoleError::InvalidConfiguration(format!(
            "line_width must be positive, got {line_width}"
        )));
    }
    Ok(())
}
