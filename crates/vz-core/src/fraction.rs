//! Float → mixed fraction approximation.

use serde::{Deserialize, Serialize};

/// Numerator must land within this distance of an integer.
pub const TOLERANCE: f64 = 0.01;

/// Denominators tried when the caller passes none: 1..=20.
pub const DEFAULT_DENOMINATORS: std::ops::RangeInclusive<u32> = 1..=20;

const WHOLE_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// `whole + numerator / denominator`. The sign lives on `whole`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedFraction {
    pub whole: i64,
    pub numerator: u32,
    pub denominator: u32,
}

impl MixedFraction {
    /// Reconstructed value. `negative` puts the fraction below `whole`, which
    /// matters when `whole` is zero and carries no sign.
    pub fn to_f64(self, negative: bool) -> f64 {
        let frac = f64::from(self.numerator) / f64::from(self.denominator);
        if negative {
            self.whole as f64 - frac
        } else {
            self.whole as f64 + frac
        }
    }
}

/// Approximate `value` as a mixed fraction.
///
/// Denominators are tried in the given order and the first one whose scaled
/// numerator sits within [`TOLERANCE`] of an integer wins, even when a later
/// one fits tighter. Zero denominators are skipped. Returns `None` when no
/// denominator fits, or the value is not finite. Integral values succeed as
/// `(value, 0, 1)` while `whole` fits an `i64`; beyond ±2^63 the result is
/// `None`.
pub fn to_mixed_fraction(value: f64, denominators: &[u32]) -> Option<MixedFraction> {
    let whole = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which itself does not fit.
    if !value.is_finite() || whole.abs() >= WHOLE_LIMIT {
        return None;
    }
    if whole == value {
        return Some(MixedFraction {
            whole: whole as i64,
            numerator: 0,
            denominator: 1,
        });
    }

    let frac = (value - whole).abs();
    let first_fit = |d: u32| {
        let numerator = frac * f64::from(d);
        ((numerator - numerator.round()).abs() < TOLERANCE).then(|| MixedFraction {
            whole: whole as i64,
            numerator: numerator.round() as u32,
            denominator: d,
        })
    };

    if denominators.is_empty() {
        DEFAULT_DENOMINATORS.filter_map(first_fit).next()
    } else {
        denominators
            .iter()
            .copied()
            .filter(|&d| d > 0)
            .find_map(first_fit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn mf(whole: i64, numerator: u32, denominator: u32) -> Option<MixedFraction> {
        Some(MixedFraction {
            whole,
            numerator,
            denominator,
        })
    }

    #[test]
    fn test_half() {
        assert_eq!(to_mixed_fraction(4.5, &[1, 2, 4]), mf(4, 1, 2));
    }

    #[test]
    fn test_third_within_tolerance() {
        assert_eq!(to_mixed_fraction(4.333, &[1, 2, 3]), mf(4, 1, 3));
    }

    #[test]
    fn test_integral_value() {
        assert_eq!(to_mixed_fraction(4.0, &[1, 2]), mf(4, 0, 1));
        assert_eq!(to_mixed_fraction(0.0, &[]), mf(0, 0, 1));
        assert_eq!(to_mixed_fraction(-3.0, &[7]), mf(-3, 0, 1));
    }

    #[test]
    fn test_no_fit_is_none() {
        assert_eq!(to_mixed_fraction(0.123, &[2, 3]), None);
        assert_eq!(to_mixed_fraction(4.5, &[3]), None);
    }

    #[test]
    fn test_first_match_wins() {
        // 2/4 fits exactly, but 2 comes first.
        assert_eq!(to_mixed_fraction(0.5, &[2, 4]), mf(0, 1, 2));
        assert_eq!(to_mixed_fraction(0.5, &[4, 2]), mf(0, 2, 4));
        // 0.334 fits 1/3 within tolerance before the tighter 167/500 could.
        assert_eq!(to_mixed_fraction(0.334, &[3, 500]), mf(0, 1, 3));
    }

    #[test]
    fn test_default_denominators() {
        assert_eq!(to_mixed_fraction(2.75, &[]), mf(2, 3, 4));
        assert_eq!(to_mixed_fraction(0.05, &[]), mf(0, 1, 20));
        assert_eq!(to_mixed_fraction(0.0123, &[]), None);
    }

    #[test]
    fn test_negative_keeps_sign_on_whole() {
        assert_eq!(to_mixed_fraction(-4.5, &[2]), mf(-4, 1, 2));
    }

    #[test]
    fn test_zero_denominator_skipped() {
        assert_eq!(to_mixed_fraction(1.25, &[0, 4]), mf(1, 1, 4));
        assert_eq!(to_mixed_fraction(1.25, &[0]), None);
    }

    #[test]
    fn test_rounds_up_to_denominator() {
        assert_eq!(to_mixed_fraction(4.999, &[1]), mf(4, 1, 1));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(to_mixed_fraction(f64::NAN, &[]), None);
        assert_eq!(to_mixed_fraction(f64::INFINITY, &[]), None);
    }

    #[test]
    fn test_whole_out_of_i64_range() {
        assert_eq!(to_mixed_fraction(1e20, &[]), None);
        assert_eq!(to_mixed_fraction(-1e19, &[2]), None);
        assert_eq!(to_mixed_fraction(9_223_372_036_854_775_808.0, &[]), None);
        assert_eq!(to_mixed_fraction(-9_223_372_036_854_775_808.0, &[]), None);
        assert_eq!(
            to_mixed_fraction(1e18, &[]),
            mf(1_000_000_000_000_000_000, 0, 1)
        );
    }

    #[test]
    fn test_reconstruction() {
        let m = to_mixed_fraction(-2.25, &[4]).unwrap();
        assert_abs_diff_eq!(m.to_f64(true), -2.25, epsilon = 1e-12);
        let m = to_mixed_fraction(7.6, &[]).unwrap();
        assert_abs_diff_eq!(m.to_f64(false), 7.6, epsilon = 1e-12);
    }
}
