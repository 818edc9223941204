//! HSV color state used to derive theme color variants.
//!
//! [`Color`] stores hue, saturation and value directly and keeps every field in
//! its canonical range after every operation:
//!
//! - hue in [0, 360)
//! - saturation in [0, 1]
//! - value in [0, 1]
//! - alpha in [0, 1]
//!
//! No operation fails or panics. Out-of-domain input is handled silently, and
//! each operation picks one of three behaviors:
//!
//! - `set_hsv` resets hue, saturation and value to 0 when any of its inputs is
//!   out of range.
//! - The single-field setters (`set_hue`, `set_sat`, `set_val`, `set_alpha`)
//!   ignore an out-of-range input and keep the previous value.
//! - Derived operations (min/max bounds, multiply, brighten/darken, hue
//!   rotation) bound their computed result into the canonical range.

use crate::rgb::{hsv_to_rgb, rgb_to_hsv, Rgba};

/// Upper bound of the hue circle, in degrees. Setters accept it inclusively
/// and store it as 0.
pub const HUE_MAX: f64 = 360.0;

/// What a single-field update does with a result outside the field's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    /// Keep the previous value.
    Reject,
    /// Bound the result into the domain.
    Clamp,
}

impl Policy {
    /// Resolves `candidate` against `[lo, hi]`. A NaN candidate always keeps
    /// `current`.
    fn resolve(self, candidate: f64, lo: f64, hi: f64, current: f64) -> f64 {
        if candidate.is_nan() {
            return current;
        }
        match self {
            Policy::Reject if (lo..=hi).contains(&candidate) => candidate,
            Policy::Reject => current,
            Policy::Clamp => candidate.clamp(lo, hi),
        }
    }
}

/// Wraps a hue in degrees into [0, 360).
///
/// `rem_euclid` can round tiny negative inputs up to exactly 360, which is
/// folded back to 0. Non-finite input yields NaN.
pub(crate) fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(HUE_MAX);
    if h >= HUE_MAX {
        0.0
    } else {
        h
    }
}

fn in_unit(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

/// A color in hue/saturation/value form with an alpha channel.
///
/// The default is transparent black: every field 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    hue: f64,
    sat: f64,
    val: f64,
    alpha: f64,
}

impl Color {
    /// Creates transparent black.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a color through [`Color::set_hsv`], so out-of-range input
    /// yields black.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let mut color = Self::new();
        color.set_hsv(h, s, v);
        color
    }

    /// Creates a color from RGBA channels, clamping them into [0, 1] first.
    pub fn from_rgba(rgba: Rgba) -> Self {
        let rgba = rgba.clamped();
        let (hue, sat, val) = rgb_to_hsv(rgba.r, rgba.g, rgba.b);
        Self {
            hue,
            sat,
            val,
            alpha: rgba.a,
        }
    }

    /// Converts to RGBA channels.
    pub fn to_rgba(&self) -> Rgba {
        let (r, g, b) = hsv_to_rgb(self.hue, self.sat, self.val);
        Rgba::new(r, g, b, self.alpha)
    }

    /// Sets hue, saturation and value together.
    ///
    /// All three are stored only if `0 <= h <= 360` and `s`, `v` are in
    /// [0, 1]. Otherwise the whole call is rejected and the three fields are
    /// reset to 0. Alpha is left alone either way.
    pub fn set_hsv(&mut self, h: f64, s: f64, v: f64) {
        if (0.0..=HUE_MAX).contains(&h) && in_unit(s) && in_unit(v) {
            self.hue = normalize_hue(h);
            self.sat = s;
            self.val = v;
        } else {
            self.hue = 0.0;
            self.sat = 0.0;
            self.val = 0.0;
        }
    }

    pub fn get_hue(&self) -> f64 {
        self.hue
    }

    pub fn get_sat(&self) -> f64 {
        self.sat
    }

    pub fn get_val(&self) -> f64 {
        self.val
    }

    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }

    /// Sets the hue if `0 <= h <= 360`; otherwise does nothing.
    pub fn set_hue(&mut self, h: f64) {
        self.hue = normalize_hue(Policy::Reject.resolve(h, 0.0, HUE_MAX, self.hue));
    }

    /// Rotates the hue by `delta` degrees, wrapping into [0, 360).
    pub fn add_hue(&mut self, delta: f64) {
        let h = normalize_hue(self.hue + delta);
        if h.is_finite() {
            self.hue = h;
        }
    }

    /// Sets the saturation if it is in [0, 1]; otherwise does nothing.
    pub fn set_sat(&mut self, s: f64) {
        self.sat = Policy::Reject.resolve(s, 0.0, 1.0, self.sat);
    }

    /// Raises the saturation to at least `min`.
    pub fn set_min_sat(&mut self, min: f64) {
        let target = if self.sat < min { min } else { self.sat };
        self.sat = Policy::Clamp.resolve(target, 0.0, 1.0, self.sat);
    }

    /// Lowers the saturation to at most `max`.
    pub fn set_max_sat(&mut self, max: f64) {
        let target = if self.sat > max { max } else { self.sat };
        self.sat = Policy::Clamp.resolve(target, 0.0, 1.0, self.sat);
    }

    /// Scales the saturation by `factor`, capped at 1.
    pub fn multiply_sat(&mut self, factor: f64) {
        self.sat = Policy::Clamp.resolve(self.sat * factor, 0.0, 1.0, self.sat);
    }

    /// Sets the saturation to `amount` and darkens the value by the previous
    /// saturation times `amount`.
    ///
    /// An `amount` outside [0, 1] leaves the saturation as it was; the value
    /// is still reduced, and never drops below 0.
    pub fn darken_by_sat(&mut self, amount: f64) {
        let old_sat = self.sat;
        self.sat = Policy::Reject.resolve(amount, 0.0, 1.0, self.sat);
        self.val = Policy::Clamp.resolve(self.val - old_sat * amount, 0.0, 1.0, self.val);
    }

    /// Sets the value if it is in [0, 1]; otherwise does nothing.
    pub fn set_val(&mut self, v: f64) {
        self.val = Policy::Reject.resolve(v, 0.0, 1.0, self.val);
    }

    /// Raises the value to at least `min`.
    pub fn set_min_val(&mut self, min: f64) {
        let target = if self.val < min { min } else { self.val };
        self.val = Policy::Clamp.resolve(target, 0.0, 1.0, self.val);
    }

    /// Lowers the value to at most `max`.
    pub fn set_max_val(&mut self, max: f64) {
        let target = if self.val > max { max } else { self.val };
        self.val = Policy::Clamp.resolve(target, 0.0, 1.0, self.val);
    }

    /// Increases the value by `value * amount`, capped at 1.
    pub fn brighten_val(&mut self, amount: f64) {
        self.val = Policy::Clamp.resolve(self.val + self.val * amount, 0.0, 1.0, self.val);
    }

    /// Decreases the value by `value * amount`, floored at 0.
    pub fn darken_val(&mut self, amount: f64) {
        self.val = Policy::Clamp.resolve(self.val - self.val * amount, 0.0, 1.0, self.val);
    }

    /// Sets the alpha if it is in [0, 1]; otherwise does nothing.
    pub fn set_alpha(&mut self, a: f64) {
        self.alpha = Policy::Reject.resolve(a, 0.0, 1.0, self.alpha);
    }
}
