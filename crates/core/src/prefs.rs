//! The dock's preference-file color format.
//!
//! A color is stored as `red;;green;;blue;;alpha`, each channel scaled from
//! [0, 1] to 0..=255 and truncated toward zero. Existing settings files use
//! this exact scaling, so encoding must not round.
//!
//! [`Color`] also serializes through serde as this string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Color;
use crate::error::ColorError;
use crate::rgb::Rgba;

/// Field separator in the preference string.
pub const SEPARATOR: &str = ";;";

const CHANNELS: [&str; 4] = ["red", "green", "blue", "alpha"];

/// Slack for float error picked up on the HSV round trip, far below one
/// channel step.
const BYTE_EPSILON: f64 = 1e-9;

fn channel_to_byte(c: f64) -> u8 {
    // truncates toward zero; a decoded byte must re-encode to itself
    (c * 255.0 + BYTE_EPSILON) as u8
}

/// Parses one integer field, clamped to 0..=255. Integers too large for
/// `i64` clamp by sign like any other out-of-range value.
fn parse_channel(raw: &str, channel: &'static str) -> Result<f64, ColorError> {
    let text = raw.trim();
    let n: i64 = match text.parse() {
        Ok(n) => n,
        Err(_) => {
            let (negative, digits) = match text.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, text.strip_prefix('+').unwrap_or(text)),
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ColorError::InvalidComponent {
                    channel,
                    raw: raw.to_string(),
                });
            }
            if negative {
                0
            } else {
                255
            }
        }
    };
    Ok(n.clamp(0, 255) as f64 / 255.0)
}

impl Color {
    /// Encodes the color as `R;;G;;B;;A` with 0-255 integer channels.
    pub fn to_prefs_string(&self) -> String {
        let rgba = self.to_rgba().clamped();
        [rgba.r, rgba.g, rgba.b, rgba.a]
            .iter()
            .map(|&c| channel_to_byte(c).to_string())
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    /// Decodes an `R;;G;;B;;A` preference string.
    ///
    /// Exactly four integer fields are required. Each is clamped to 0..=255
    /// before conversion.
    pub fn from_prefs_string(s: &str) -> Result<Color, ColorError> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        if parts.len() != CHANNELS.len() {
            return Err(ColorError::MalformedPrefs {
                input: s.to_string(),
                fields: parts.len(),
            });
        }
        let r = parse_channel(parts[0], CHANNELS[0])?;
        let g = parse_channel(parts[1], CHANNELS[1])?;
        let b = parse_channel(parts[2], CHANNELS[2])?;
        let a = parse_channel(parts[3], CHANNELS[3])?;
        Ok(Color::from_rgba(Rgba::new(r, g, b, a)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_prefs_string())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_prefs_string(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_prefs_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_prefs_string(&s).map_err(serde::de::Error::custom)
    }
}
