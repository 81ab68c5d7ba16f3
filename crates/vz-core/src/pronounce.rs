//! Numeric value → spoken English.
//!
//! `5.2` → "five point two", `1234` → "one thousand, two hundred and thirty four",
//! `1234.5` (scientific) → "one point two three times ten to the power of three".

use crate::options::PronounceOptions;
use crate::scale::{
    DIGITS, ILLIONS, LONG_SCALE_LIMIT, SHORT_SCALE, SHORT_SCALE_GROUPS, TENS, direct_name,
};

const INFINITY: &str = "infinity";

/// Convert a number to its spoken form.
///
/// Never fails: magnitudes past the selected scale's last name come out as
/// "infinity", and NaN as "not a number".
pub fn pronounce_number(value: f64, opts: &PronounceOptions) -> String {
    if value.is_nan() {
        return "not a number".to_string();
    }

    if opts.scientific
        && value.is_finite()
        && let Some((mantissa, exponent)) = split_scientific(value)
        && exponent != 0
    {
        let plain = PronounceOptions {
            scientific: false,
            ..*opts
        };
        return format!(
            "{} times ten to the power of {}",
            pronounce_number(mantissa, &plain),
            pronounce_number(f64::from(exponent), &plain)
        );
    }

    let mut result = String::new();
    if value < 0.0 {
        result.push_str("negative ");
    }
    let num = value.abs();
    if num.is_infinite() {
        result.push_str(INFINITY);
        return result;
    }

    if let Some(name) = direct_name(num, opts.short_scale) {
        // Bare magnitudes are spoken with a count: 100 → "one hundred".
        if num > 90.0 {
            result.push_str("one ");
        }
        result.push_str(name);
    } else {
        let groups = split_by_thousands(num.trunc());
        if groups.is_empty() {
            result.push_str(DIGITS[0]);
        } else if opts.short_scale {
            result.push_str(&short_scale(&groups));
        } else if num >= LONG_SCALE_LIMIT {
            result.push_str(INFINITY);
        } else {
            result.push_str(&long_scale(&groups, opts));
        }
    }

    let digits = fraction_digits(num, opts.places);
    if !digits.is_empty() {
        result.push_str(" point");
        for digit in digits {
            result.push(' ');
            result.push_str(DIGITS[digit]);
        }
    }
    result
}

/// Normalized scientific split: `1234.5` → `(1.2345, 3)`.
/// The mantissa keeps six decimals, as `%E` formatting does.
fn split_scientific(value: f64) -> Option<(f64, i32)> {
    let formatted = format!("{value:.6E}");
    let (mantissa, exponent) = formatted.split_once('E')?;
    Some((mantissa.parse().ok()?, exponent.parse().ok()?))
}

/// Base-1000 groups of a non-negative integral float, least significant first.
/// Zero yields no groups.
fn split_by_thousands(int_part: f64) -> Vec<u32> {
    // `{:.0}` prints the exact decimal expansion of the float.
    let digits = format!("{int_part:.0}");
    let digits = digits.trim_start_matches('0').as_bytes();
    digits
        .rchunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
        })
        .collect()
}

fn sub_thousand(n: u32) -> String {
    debug_assert!(n <= 999);
    match n {
        0..=19 => DIGITS[n as usize].to_string(),
        20..=99 => {
            let (q, r) = (n / 10, n % 10);
            let tens = TENS[q as usize - 1];
            if r > 0 {
                format!("{tens} {}", sub_thousand(r))
            } else {
                tens.to_string()
            }
        }
        _ => {
            let (q, r) = (n / 100, n % 100);
            let hundreds = format!("{} hundred", DIGITS[q as usize]);
            if r > 0 {
                format!("{hundreds} and {}", sub_thousand(r))
            } else {
                hundreds
            }
        }
    }
}

fn short_scale(groups: &[u32]) -> String {
    if groups.len() > SHORT_SCALE_GROUPS {
        return INFINITY.to_string();
    }
    groups
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, z)| **z > 0)
        .map(|(i, &z)| {
            let words = sub_thousand(z);
            if i > 0 {
                format!("{words} {}", SHORT_SCALE[i].name)
            } else {
                words
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Long scale names a major word every second group; odd groups above the
/// first carry "thousand" ahead of the following major word.
fn long_scale(groups: &[u32], opts: &PronounceOptions) -> String {
    let triplet_opts = PronounceOptions {
        short_scale: true,
        scientific: false,
        ..*opts
    };

    let mut parts = Vec::new();
    for (i, &z) in groups.iter().enumerate() {
        if z == 0 {
            continue;
        }
        let mut number = pronounce_number(f64::from(z), &triplet_opts);
        if i % 2 == 1 && i > 1 {
            number.push_str(" thousand");
            // "five thousand million": the major word rides on the odd group
            // when its own group is empty.
            if groups[i - 1] == 0 {
                number.push(' ');
                number.push_str(ILLIONS[(i - 1) / 2 - 1]);
                number.push(',');
            }
        } else if i == 1 {
            number.push_str(" thousand,");
        } else if i > 1 {
            number.push(' ');
            number.push_str(ILLIONS[i / 2 - 1]);
            number.push(',');
        }
        parts.push(number);
    }
    parts.reverse();
    parts.join(" ").trim_end_matches(',').to_string()
}

/// Up to `places` decimal digits after the point, without trailing zeros
/// inside that window. Empty when nothing nonzero remains.
fn fraction_digits(num: f64, places: usize) -> Vec<usize> {
    if num.fract() == 0.0 {
        return Vec::new();
    }
    let repr = num.to_string();
    let mut digits: Vec<usize> = repr
        .split_once('.')
        .map(|(_, frac)| {
            frac.chars()
                .filter_map(|c| c.to_digit(10))
                .map(|d| d as usize)
                .take(places)
                .collect()
        })
        .unwrap_or_default();
    while digits.last() == Some(&0) {
        digits.pop();
    }
    digits
}
