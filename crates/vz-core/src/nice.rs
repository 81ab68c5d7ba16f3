//! Human-friendly phrasing of floats: 4.5 → "4 and a half" (speech) or "4 1/2" (display).

use crate::fraction::{MixedFraction, to_mixed_fraction};
use crate::scale::fraction_name;

/// Format `value` for speech or display using the first denominator that fits.
///
/// Falls back to the value rounded to three decimals when no denominator fits
/// or the whole part is too large for a mixed fraction.
/// Plurals are formed by appending "s" ("3 halfs").
pub fn nice_number(value: f64, speech: bool, denominators: &[u32]) -> String {
    let Some(mixed) = to_mixed_fraction(value, denominators) else {
        return round_decimal(value, 3);
    };
    let mixed = carry_whole(mixed, value < 0.0);

    if mixed.numerator == 0 {
        return mixed.whole.to_string();
    }
    if !speech {
        return display(&mixed);
    }
    let Some(name) = fraction_name(mixed.denominator) else {
        return display(&mixed);
    };

    let mut phrase = match (mixed.whole, mixed.numerator) {
        (0, 1) => format!("a {name}"),
        (0, n) => format!("{n} {name}"),
        (whole, 1) => format!("{whole} and a {name}"),
        (whole, n) => format!("{whole} and {n} {name}"),
    };
    if mixed.numerator > 1 {
        phrase.push('s');
    }
    phrase
}

fn display(mixed: &MixedFraction) -> String {
    format!("{} {}/{}", mixed.whole, mixed.numerator, mixed.denominator)
}

/// A numerator that rounded up to its denominator is a whole unit.
fn carry_whole(mixed: MixedFraction, negative: bool) -> MixedFraction {
    if mixed.numerator == 0 || mixed.numerator != mixed.denominator {
        return mixed;
    }
    MixedFraction {
        whole: if negative {
            mixed.whole - 1
        } else {
            mixed.whole + 1
        },
        numerator: 0,
        denominator: 1,
    }
}

fn round_decimal(value: f64, places: i32) -> String {
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    rounded.to_string()
}
