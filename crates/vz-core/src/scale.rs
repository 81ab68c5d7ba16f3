//! Constant naming tables for English cardinals.
//!
//! Short scale steps ×1000 per name (million, billion, trillion, ...).
//! Long scale steps ×1,000,000 per name, with "thousand" sitting between
//! each pair (thousand million, billion, thousand billion, ...).

/// A named power of ten.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleEntry {
    pub value: f64,
    pub name: &'static str,
}

const fn entry(value: f64, name: &'static str) -> ScaleEntry {
    ScaleEntry { value, name }
}

/// Words for 0..=19, indexed by value.
pub const DIGITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for 10, 20, ..., 90. `TENS[q - 1]` names `q * 10`.
pub const TENS: [&str; 9] = [
    "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// The -illion names shared by both scales. Entry `k` is 1000^(k+2) on the
/// short scale and 10^(6(k+1)) on the long scale.
pub const ILLIONS: [&str; 25] = [
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
    "unvigintillion",
    "duovigintillion",
    "trevigintillion",
    "quattuorvigintillion",
    "quinvigintillion",
];

/// Short scale, ascending. Index `i >= 1` names base-1000 group `i`.
pub const SHORT_SCALE: [ScaleEntry; 27] = [
    entry(1e2, "hundred"),
    entry(1e3, "thousand"),
    entry(1e6, "million"),
    entry(1e9, "billion"),
    entry(1e12, "trillion"),
    entry(1e15, "quadrillion"),
    entry(1e18, "quintillion"),
    entry(1e21, "sextillion"),
    entry(1e24, "septillion"),
    entry(1e27, "octillion"),
    entry(1e30, "nonillion"),
    entry(1e33, "decillion"),
    entry(1e36, "undecillion"),
    entry(1e39, "duodecillion"),
    entry(1e42, "tredecillion"),
    entry(1e45, "quattuordecillion"),
    entry(1e48, "quindecillion"),
    entry(1e51, "sexdecillion"),
    entry(1e54, "septendecillion"),
    entry(1e57, "octodecillion"),
    entry(1e60, "novemdecillion"),
    entry(1e63, "vigintillion"),
    entry(1e66, "unvigintillion"),
    entry(1e69, "duovigintillion"),
    entry(1e72, "trevigintillion"),
    entry(1e75, "quattuorvigintillion"),
    entry(1e78, "quinvigintillion"),
];

/// Long scale, ascending.
pub const LONG_SCALE: [ScaleEntry; 27] = [
    entry(1e2, "hundred"),
    entry(1e3, "thousand"),
    entry(1e6, "million"),
    entry(1e12, "billion"),
    entry(1e18, "trillion"),
    entry(1e24, "quadrillion"),
    entry(1e30, "quintillion"),
    entry(1e36, "sextillion"),
    entry(1e42, "septillion"),
    entry(1e48, "octillion"),
    entry(1e54, "nonillion"),
    entry(1e60, "decillion"),
    entry(1e66, "undecillion"),
    entry(1e72, "duodecillion"),
    entry(1e78, "tredecillion"),
    entry(1e84, "quattuordecillion"),
    entry(1e90, "quindecillion"),
    entry(1e96, "sexdecillion"),
    entry(1e102, "septendecillion"),
    entry(1e108, "octodecillion"),
    entry(1e114, "novemdecillion"),
    entry(1e120, "vigintillion"),
    entry(1e126, "unvigintillion"),
    entry(1e132, "duovigintillion"),
    entry(1e138, "trevigintillion"),
    entry(1e144, "quattuorvigintillion"),
    entry(1e150, "quinvigintillion"),
];

/// Long-scale values at or above this have no name.
pub const LONG_SCALE_LIMIT: f64 = 1e154;

/// Number of base-1000 groups the short scale can name.
pub const SHORT_SCALE_GROUPS: usize = SHORT_SCALE.len();

/// Spoken denominators for 2..=20, indexed by `d - 2`.
const FRACTIONS: [&str; 19] = [
    "half",
    "third",
    "quarter",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
    "twentieth",
];

/// Spoken name of a denominator, e.g. 2 → "half", 4 → "quarter".
pub fn fraction_name(denominator: u32) -> Option<&'static str> {
    let idx = (denominator as usize).checked_sub(2)?;
    FRACTIONS.get(idx).copied()
}

/// Exact-value lookup used for direct matches: digit names, tens, and the
/// named magnitudes of the selected scale.
pub fn direct_name(value: f64, short_scale: bool) -> Option<&'static str> {
    if value.fract() != 0.0 || value < 0.0 {
        return None;
    }
    if value < 20.0 {
        return Some(DIGITS[value as usize]);
    }
    if value < 100.0 {
        let v = value as usize;
        return (v % 10 == 0).then(|| TENS[v / 10 - 1]);
    }
    let table: &[ScaleEntry] = if short_scale {
        &SHORT_SCALE
    } else {
        &LONG_SCALE
    };
    table.iter().find(|e| e.value == value).map(|e| e.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_ascending() {
        for table in [&SHORT_SCALE, &LONG_SCALE] {
            for pair in table.windows(2) {
                assert!(pair[0].value < pair[1].value, "{pair:?}");
            }
        }
    }

    #[test]
    fn test_short_scale_steps_by_thousand() {
        for pair in SHORT_SCALE[1..].windows(2) {
            let ratio = pair[1].value / pair[0].value;
            assert!((ratio - 1000.0).abs() < 1e-6, "{pair:?}");
        }
    }

    #[test]
    fn test_long_scale_steps_by_million() {
        for pair in LONG_SCALE[2..].windows(2) {
            let ratio = pair[1].value / pair[0].value;
            assert!((ratio - 1e6).abs() < 1e-3, "{pair:?}");
        }
    }

    #[test]
    fn test_illions_shared_by_both_scales() {
        for (k, name) in ILLIONS.iter().enumerate() {
            assert_eq!(SHORT_SCALE[k + 2].name, *name);
            assert_eq!(LONG_SCALE[k + 2].name, *name);
        }
    }

    #[test]
    fn test_direct_name_covers_digits_and_tens() {
        assert_eq!(direct_name(0.0, true), Some("zero"));
        assert_eq!(direct_name(19.0, true), Some("nineteen"));
        assert_eq!(direct_name(40.0, true), Some("forty"));
        assert_eq!(direct_name(41.0, true), None);
        assert_eq!(direct_name(2.5, true), None);
    }

    #[test]
    fn test_direct_name_depends_on_scale() {
        assert_eq!(direct_name(1e9, true), Some("billion"));
        assert_eq!(direct_name(1e9, false), None);
        assert_eq!(direct_name(1e12, false), Some("billion"));
        assert_eq!(direct_name(1e12, true), Some("trillion"));
    }

    #[test]
    fn test_fraction_names() {
        assert_eq!(fraction_name(2), Some("half"));
        assert_eq!(fraction_name(4), Some("quarter"));
        assert_eq!(fraction_name(20), Some("twentieth"));
        assert_eq!(fraction_name(1), None);
        assert_eq!(fraction_name(0), None);
        assert_eq!(fraction_name(21), None);
    }
}
