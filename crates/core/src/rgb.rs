//! RGB form of a color and the HSV <-> RGB conversions.
//!
//! The preference format stores channels, not HSV, so every encode and decode
//! goes through these functions. Channels are `f64` in [0, 1].

use crate::color::normalize_hue;

/// Red/green/blue/alpha color with components in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a copy with every channel clamped to [0, 1]. NaN becomes 0.
    pub fn clamped(self) -> Self {
        Self {
            r: unit(self.r),
            g: unit(self.g),
            b: unit(self.b),
            a: unit(self.a),
        }
    }
}

fn unit(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 1.0)
    }
}

/// Converts HSV to RGB using the six-sector construction.
///
/// `h` is in degrees (any value, wrapped into [0, 360)); `s` and `v` are
/// expected in [0, 1].
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (v, v, v);
    }

    let sector = normalize_hue(h) / 60.0;
    let i = sector.floor();
    let f = sector - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match i as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Converts RGB to HSV. Hue is in [0, 360) and is 0 for achromatic input.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max > 0.0 { delta / max } else { 0.0 };

    let h = if delta <= 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (normalize_hue(h), s, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_rgb(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert!(
            approx_eq(actual.0, expected.0)
                && approx_eq(actual.1, expected.1)
                && approx_eq(actual.2, expected.2),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn primaries_convert_to_rgb() {
        assert_rgb(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_rgb(hsv_to_rgb(120.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_rgb(hsv_to_rgb(240.0, 1.0, 1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn secondaries_convert_to_rgb() {
        assert_rgb(hsv_to_rgb(60.0, 1.0, 1.0), (1.0, 1.0, 0.0));
        assert_rgb(hsv_to_rgb(180.0, 1.0, 1.0), (0.0, 1.0, 1.0));
        assert_rgb(hsv_to_rgb(300.0, 1.0, 1.0), (1.0, 0.0, 1.0));
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_rgb(hsv_to_rgb(210.0, 0.0, 0.4), (0.4, 0.4, 0.4));
    }

    #[test]
    fn hue_of_360_wraps_to_red() {
        assert_rgb(hsv_to_rgb(360.0, 1.0, 1.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn dock_base_color_channels() {
        let (r, g, b) = hsv_to_rgb(100.0, 0.5, 0.5);
        assert!(approx_eq(r, 1.0 / 3.0), "r: {r}");
        assert!(approx_eq(g, 0.5), "g: {g}");
        assert!(approx_eq(b, 0.25), "b: {b}");
    }

    #[test]
    fn rgb_to_hsv_pure_blue() {
        let (h, s, v) = rgb_to_hsv(0.0, 0.0, 1.0);
        assert!(approx_eq(h, 240.0), "h: {h}");
        assert!(approx_eq(s, 1.0), "s: {s}");
        assert!(approx_eq(v, 1.0), "v: {v}");
    }

    #[test]
    fn rgb_to_hsv_magenta_side_stays_positive() {
        // red dominant with blue > green gives a negative raw hue
        let (h, _, _) = rgb_to_hsv(1.0, 0.0, 0.5);
        assert!(approx_eq(h, 330.0), "h: {h}");
    }

    #[test]
    fn rgb_to_hsv_black_and_gray_have_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        let (h, s, v) = rgb_to_hsv(0.3, 0.3, 0.3);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!(approx_eq(v, 0.3));
    }

    #[test]
    fn clamped_bounds_every_channel() {
        let c = Rgba::new(1.5, -0.2, f64::NAN, 0.5).clamped();
        assert_eq!(c, Rgba::new(1.0, 0.0, 0.0, 0.5));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_hsv_round_trip_within_epsilon(
                r in 0.0_f64..=1.0,
                g in 0.0_f64..=1.0,
                b in 0.0_f64..=1.0,
            ) {
                let (h, s, v) = rgb_to_hsv(r, g, b);
                let (r2, g2, b2) = hsv_to_rgb(h, s, v);
                prop_assert!((r2 - r).abs() < 1e-9, "r: {} vs {}", r2, r);
                prop_assert!((g2 - g).abs() < 1e-9, "g: {} vs {}", g2, g);
                prop_assert!((b2 - b).abs() < 1e-9, "b: {} vs {}", b2, b);
            }

            #[test]
            fn rgb_to_hsv_stays_in_canonical_ranges(
                r in 0.0_f64..=1.0,
                g in 0.0_f64..=1.0,
                b in 0.0_f64..=1.0,
            ) {
                let (h, s, v) = rgb_to_hsv(r, g, b);
                prop_assert!((0.0..360.0).contains(&h), "hue {}", h);
                prop_assert!((0.0..=1.0).contains(&s), "sat {}", s);
                prop_assert!((0.0..=1.0).contains(&v), "val {}", v);
            }

            #[test]
            fn hsv_to_rgb_stays_in_unit_range(
                h in 0.0_f64..360.0,
                s in 0.0_f64..=1.0,
                v in 0.0_f64..=1.0,
            ) {
                let (r, g, b) = hsv_to_rgb(h, s, v);
                for c in [r, g, b] {
                    prop_assert!((-1e-12..=1.0 + 1e-12).contains(&c), "channel {}", c);
                }
            }
        }
    }
}
