//! Hex color parsing

use crate::types::{EurionError, Result, Rgb};

/// Parse a `RRGGBB` hex string (optionally prefixed with one `#`) into
/// normalized RGB channels.
///
/// Each channel is the integer value of its two-digit pair divided by 255.
pub fn parse_hex_color(input: &str) -> Result<Rgb> {
    let hex = input.strip_prefix('#').unwrap_or(input);

    if hex.chars().count() != 6 {
        return Err(EurionError::InvalidColorFormat(input.to_string()));
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EurionError::InvalidColorDigit(input.to_string()));
    }

    let channel = |i: usize| -> Result<f64> {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|v| f64::from(v) / 255.0)
            .map_err(|_| EurionError::InvalidColorDigit(input.to_string()))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}
