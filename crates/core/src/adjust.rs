//! Scriptable color adjustments.
//!
//! An [`Adjustment`] names one mutating [`Color`] operation together with its
//! argument, so a theme can describe how a hover or active variant is derived
//! from the base color as data. Adjustments come from JSON
//! (`{"op": "darken_val", "amount": 0.25}`) or from the short text form
//! `darken_val=0.25` (kebab-case names are accepted too).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ColorError;

/// All adjustment names, in declaration order.
const ADJUSTMENT_NAMES: &[&str] = &[
    "set_hue",
    "add_hue",
    "set_sat",
    "set_min_sat",
    "set_max_sat",
    "multiply_sat",
    "darken_by_sat",
    "set_val",
    "set_min_val",
    "set_max_val",
    "brighten_val",
    "darken_val",
    "set_alpha",
];

/// One color operation and its argument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "amount", rename_all = "snake_case")]
pub enum Adjustment {
    SetHue(f64),
    AddHue(f64),
    SetSat(f64),
    SetMinSat(f64),
    SetMaxSat(f64),
    MultiplySat(f64),
    DarkenBySat(f64),
    SetVal(f64),
    SetMinVal(f64),
    SetMaxVal(f64),
    BrightenVal(f64),
    DarkenVal(f64),
    SetAlpha(f64),
}

impl Adjustment {
    /// Builds an adjustment from its name and argument.
    ///
    /// Returns `ColorError::UnknownAdjustment` if the name is not recognized.
    pub fn from_name(name: &str, amount: f64) -> Result<Self, ColorError> {
        let adjustment = match name.trim().replace('-', "_").as_str() {
            "set_hue" => Adjustment::SetHue(amount),
            "add_hue" => Adjustment::AddHue(amount),
            "set_sat" => Adjustment::SetSat(amount),
            "set_min_sat" => Adjustment::SetMinSat(amount),
            "set_max_sat" => Adjustment::SetMaxSat(amount),
            "multiply_sat" => Adjustment::MultiplySat(amount),
            "darken_by_sat" => Adjustment::DarkenBySat(amount),
            "set_val" => Adjustment::SetVal(amount),
            "set_min_val" => Adjustment::SetMinVal(amount),
            "set_max_val" => Adjustment::SetMaxVal(amount),
            "brighten_val" => Adjustment::BrightenVal(amount),
            "darken_val" => Adjustment::DarkenVal(amount),
            "set_alpha" => Adjustment::SetAlpha(amount),
            _ => return Err(ColorError::UnknownAdjustment(name.to_string())),
        };
        Ok(adjustment)
    }

    /// Returns a slice of all recognized adjustment names.
    pub fn list_names() -> &'static [&'static str] {
        ADJUSTMENT_NAMES
    }

    /// Returns the snake_case name of this adjustment.
    pub fn name(&self) -> &'static str {
        match self {
            Adjustment::SetHue(_) => "set_hue",
            Adjustment::AddHue(_) => "add_hue",
            Adjustment::SetSat(_) => "set_sat",
            Adjustment::SetMinSat(_) => "set_min_sat",
            Adjustment::SetMaxSat(_) => "set_max_sat",
            Adjustment::MultiplySat(_) => "multiply_sat",
            Adjustment::DarkenBySat(_) => "darken_by_sat",
            Adjustment::SetVal(_) => "set_val",
            Adjustment::SetMinVal(_) => "set_min_val",
            Adjustment::SetMaxVal(_) => "set_max_val",
            Adjustment::BrightenVal(_) => "brighten_val",
            Adjustment::DarkenVal(_) => "darken_val",
            Adjustment::SetAlpha(_) => "set_alpha",
        }
    }

    /// Applies this adjustment to `color` in place.
    pub fn apply(&self, color: &mut Color) {
        match *self {
            Adjustment::SetHue(x) => color.set_hue(x),
            Adjustment::AddHue(x) => color.add_hue(x),
            Adjustment::SetSat(x) => color.set_sat(x),
            Adjustment::SetMinSat(x) => color.set_min_sat(x),
            Adjustment::SetMaxSat(x) => color.set_max_sat(x),
            Adjustment::MultiplySat(x) => color.multiply_sat(x),
            Adjustment::DarkenBySat(x) => color.darken_by_sat(x),
            Adjustment::SetVal(x) => color.set_val(x),
            Adjustment::SetMinVal(x) => color.set_min_val(x),
            Adjustment::SetMaxVal(x) => color.set_max_val(x),
            Adjustment::BrightenVal(x) => color.brighten_val(x),
            Adjustment::DarkenVal(x) => color.darken_val(x),
            Adjustment::SetAlpha(x) => color.set_alpha(x),
        }
    }

    /// Applies `adjustments` in order to a copy of `color` and returns it.
    pub fn apply_all(adjustments: &[Adjustment], color: Color) -> Color {
        adjustments.iter().fold(color, |mut c, adjustment| {
            adjustment.apply(&mut c);
            c
        })
    }

    /// Parses a JSON array of adjustments.
    pub fn list_from_json(json: &str) -> Result<Vec<Adjustment>, ColorError> {
        serde_json::from_str(json).map_err(|e| ColorError::InvalidAdjustment {
            spec: json.to_string(),
            reason: e.to_string(),
        })
    }
}

impl FromStr for Adjustment {
    type Err = ColorError;

    /// Parses `name=amount`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, amount) = s
            .split_once('=')
            .ok_or_else(|| ColorError::InvalidAdjustment {
                spec: s.to_string(),
                reason: "expected <name>=<amount>".to_string(),
            })?;
        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|e| ColorError::InvalidAdjustment {
                spec: s.to_string(),
                reason: format!("invalid amount: {e}"),
            })?;
        Adjustment::from_name(name, amount)
    }
}
