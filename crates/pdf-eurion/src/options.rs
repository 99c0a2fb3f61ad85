use crate::color::parse_hex_color;
use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Overlay configuration shared by every page of a run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EurionOptions {
    /// Fill and stroke color of the dots
    pub color: Rgb,

    /// Approximate number of motifs across the page width
    pub density_x: u32,
    /// Approximate number of motifs along the page height
    pub density_y: u32,

    /// Motif scale in points; each dot has radius `size / 5`
    pub size: f64,

    /// Fill and stroke alpha, not clamped
    pub opacity: f64,
}

impl Default for EurionOptions {
    fn default() -> Self {
        Self {
            color: Rgb::new(160.0 / 255.0, 160.0 / 255.0, 160.0 / 255.0),
            density_x: DEFAULT_DENSITY_X,
            density_y: DEFAULT_DENSITY_Y,
            size: DEFAULT_SIZE,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl EurionOptions {
    /// Default options with the color taken from a hex string
    pub fn with_hex_color(hex: &str) -> Result<Self> {
        Ok(Self {
            color: parse_hex_color(hex)?,
            ..Default::default()
        })
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.density_x == 0 {
            return Err(EurionError::Config(
                "Horizontal density must be at least 1".to_string(),
            ));
        }
        if self.density_y == 0 {
            return Err(EurionError::Config(
                "Vertical density must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
