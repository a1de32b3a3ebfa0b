//! Wheel options and colors
//!
//! Deserializes from the same camelCase keys the widget props use, so a
//! partial JSON object only overrides what it names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::spin::Easing;

/// RGBA color parsed from `#RGB`, `#RRGGBB` or `#RRGGBBAA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Parse a CSS-style hex color
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);

        let color = match digits.len() {
            3 => Color::rgb(
                nibble(0).map_err(|_| invalid())?,
                nibble(1).map_err(|_| invalid())?,
                nibble(2).map_err(|_| invalid())?,
            ),
            6 | 8 => {
                let mut color = Color::rgb(
                    byte(0).map_err(|_| invalid())?,
                    byte(2).map_err(|_| invalid())?,
                    byte(4).map_err(|_| invalid())?,
                );
                if digits.len() == 8 {
                    color.a = byte(6).map_err(|_| invalid())?;
                }
                color
            }
            _ => return Err(invalid()),
        };
        Ok(color)
    }

    /// Normalized [r, g, b, a] for vertex colors
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 0xFF {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// How reward labels are laid out inside their segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAngle {
    /// Whole label on one line, centered on the segment centroid
    #[default]
    Horizontal,
    /// One character per line along the radius, first character innermost
    Vertical,
}

impl TextAngle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAngle::Horizontal => "horizontal",
            TextAngle::Vertical => "vertical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "horizontal" => Some(TextAngle::Horizontal),
            "vertical" => Some(TextAngle::Vertical),
            _ => None,
        }
    }
}

/// Wheel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WheelOptions {
    /// Forced winner index; takes precedence over the random draw on every spin
    pub winner: Option<usize>,
    /// Segment palette, cycled modulo its length (default palette when absent)
    pub colors: Option<Vec<Color>>,
    /// Spin duration in milliseconds
    #[serde(rename = "duration")]
    pub duration_ms: f64,

    // === Geometry ===
    pub outer_radius: f32,
    /// Hole size; nonzero produces a ring wheel
    pub inner_radius: f32,
    /// Insert a small gap between wedges (rendering only)
    pub use_pad_angle: bool,

    // === Labels ===
    pub text_angle: TextAngle,
    pub text_color: Color,
    pub font_size: f32,

    // === Chrome ===
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    /// Knob size (0 disables the knob)
    pub knob_size: f32,

    // === Animation ===
    pub easing: Easing,
    /// Seed for the winner RNG (entropy-seeded when absent)
    pub seed: Option<u64>,
}

impl Default for WheelOptions {
    fn default() -> Self {
        Self {
            winner: None,
            colors: None,
            duration_ms: DEFAULT_DURATION_MS,

            outer_radius: DEFAULT_OUTER_RADIUS,
            inner_radius: DEFAULT_INNER_RADIUS,
            use_pad_angle: false,

            text_angle: TextAngle::Horizontal,
            text_color: Color::WHITE,
            font_size: DEFAULT_FONT_SIZE,

            background_color: Color::WHITE,
            border_color: Color::WHITE,
            border_width: DEFAULT_BORDER_WIDTH,
            knob_size: DEFAULT_KNOB_SIZE,

            easing: Easing::default(),
            seed: None,
        }
    }
}

impl WheelOptions {
    /// Parse options from JSON and validate everything that does not depend
    /// on the reward list
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: WheelOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Validate reward-independent fields
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(ConfigError::InvalidDuration(self.duration_ms));
        }
        if !(self.inner_radius.is_finite() && self.outer_radius.is_finite())
            || self.inner_radius < 0.0
            || self.inner_radius >= self.outer_radius
        {
            return Err(ConfigError::InvalidRadius {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }
        if !self.knob_size.is_finite() || self.knob_size < 0.0 {
            return Err(ConfigError::InvalidKnobSize);
        }
        if self.colors.as_ref().is_some_and(|c| c.is_empty()) {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Validate against a reward list of `len` entries
    pub fn validate_for(&self, len: usize) -> Result<(), ConfigError> {
        if len == 0 {
            return Err(ConfigError::EmptyRewards);
        }
        if len > MAX_SEGMENTS {
            return Err(ConfigError::TooManySegments {
                len,
                max: MAX_SEGMENTS,
            });
        }
        if let Some(winner) = self.winner {
            if winner >= len {
                return Err(ConfigError::WinnerOutOfRange { winner, len });
            }
        }
        self.validate()
    }

    /// Whether the knob indicator is drawn at all
    pub fn knob_enabled(&self) -> bool {
        self.knob_size > 0.0
    }
}
