//! Built-in number extraction: digit tokens and spoken short-scale cardinals.
//!
//! "I saw twenty three cats and 4 dogs" → `[23.0, 4.0]`.

use regex::Regex;
use std::sync::LazyLock;

use crate::collab::{CollaboratorError, NumberExtractor};
use crate::scale::{DIGITS, SHORT_SCALE, TENS};

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?$").unwrap()
});

/// Default [`NumberExtractor`]. Stateless; never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordNumberExtractor;

impl NumberExtractor for WordNumberExtractor {
    fn extract_numbers(&self, text: &str) -> Result<Vec<f64>, CollaboratorError> {
        Ok(extract_numbers(text))
    }
}

/// Numbers mentioned in `text`, in order of appearance.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| {
            w.trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?'))
                .to_lowercase()
        })
        .collect();

    let mut numbers = Vec::new();
    let mut i = 0;
    while i < words.len() {
        match parse_signed(&words, i) {
            Some((value, consumed)) => {
                numbers.push(value);
                i += consumed;
            }
            None => i += 1,
        }
    }
    numbers
}

fn parse_signed(words: &[String], start: usize) -> Option<(f64, usize)> {
    if matches!(words[start].as_str(), "negative" | "minus")
        && let Some((value, consumed)) = parse_unsigned(words, start + 1)
    {
        return Some((-value, consumed + 1));
    }
    parse_unsigned(words, start)
}

fn parse_unsigned(words: &[String], start: usize) -> Option<(f64, usize)> {
    let word = words.get(start)?;
    if NUMERIC.is_match(word) {
        let value: f64 = word.replace(',', "").parse().ok()?;
        return Some((value, 1));
    }
    if word == "half" {
        return Some((0.5, 1));
    }
    parse_cardinal(words, start)
}

fn ones(w: &str) -> Option<f64> {
    DIGITS.iter().position(|d| *d == w).map(|v| v as f64)
}

/// Twenty through ninety. "ten" is handled with the teens.
fn tens(w: &str) -> Option<f64> {
    TENS[1..]
        .iter()
        .position(|t| *t == w)
        .map(|q| ((q + 2) * 10) as f64)
}

fn magnitude(w: &str) -> Option<f64> {
    SHORT_SCALE[1..]
        .iter()
        .find(|e| e.name == w)
        .map(|e| e.value)
}

/// "twenty-three" → 23
fn hyphenated(w: &str) -> Option<f64> {
    let (left, right) = w.split_once('-')?;
    let unit = ones(right).filter(|v| (1.0..=9.0).contains(v))?;
    Some(tens(left)? + unit)
}

/// A value below one hundred: ones/teens, tens, "twenty three", "twenty-three".
fn parse_small(words: &[String], start: usize) -> Option<(f64, usize)> {
    let w = words.get(start)?.as_str();
    if let Some(v) = hyphenated(w) {
        return Some((v, 1));
    }
    if let Some(t) = tens(w) {
        if let Some(unit) = words
            .get(start + 1)
            .and_then(|next| ones(next))
            .filter(|v| (1.0..=9.0).contains(v))
        {
            return Some((t + unit, 2));
        }
        return Some((t, 1));
    }
    ones(w).map(|v| (v, 1))
}

fn is_small(w: &str) -> bool {
    ones(w).is_some() || tens(w).is_some() || hyphenated(w).is_some()
}

/// Spoken cardinal such as "three hundred and forty two thousand five hundred",
/// optionally followed by "point" and digit words.
fn parse_cardinal(words: &[String], start: usize) -> Option<(f64, usize)> {
    let mut total = 0.0;
    let mut current = 0.0;
    let mut found_any = false;
    let mut expect_small = true;
    // "and" only joins after "hundred" or a magnitude: "one hundred and ten".
    let mut after_multiplier = false;
    let mut i = start;

    while i < words.len() {
        let w = words[i].as_str();

        if w == "and" {
            match words.get(i + 1) {
                Some(next) if after_multiplier && is_small(next) => {
                    i += 1;
                    after_multiplier = false;
                    continue;
                }
                _ => break,
            }
        }

        if found_any && w == "hundred" {
            current = if current == 0.0 { 100.0 } else { current * 100.0 };
            expect_small = true;
            after_multiplier = true;
            i += 1;
            continue;
        }

        if found_any && let Some(mag) = magnitude(w) {
            total += if current == 0.0 { mag } else { current * mag };
            current = 0.0;
            expect_small = true;
            after_multiplier = true;
            i += 1;
            continue;
        }

        if !expect_small {
            break;
        }
        match parse_small(words, i) {
            Some((v, consumed)) => {
                current += v;
                found_any = true;
                expect_small = false;
                after_multiplier = false;
                i += consumed;
            }
            None => break,
        }
    }

    if !found_any {
        return None;
    }
    let mut value = total + current;

    // "point five two"
    if words.get(i).map(String::as_str) == Some("point") {
        let digits: Vec<usize> = words[i + 1..]
            .iter()
            .map_while(|w| ones(w).filter(|v| *v < 10.0).map(|v| v as usize))
            .collect();
        if !digits.is_empty() {
            let frac: String = digits.iter().map(|d| d.to_string()).collect();
            if let Ok(v) = format!("{value}.{frac}").parse::<f64>() {
                value = v;
            }
            i += 1 + digits.len();
        }
    }

    Some((value, i - start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(extract_numbers("I have 4 dogs and 2.5 cats"), vec![4.0, 2.5]);
        assert_eq!(extract_numbers("about 1,200 people, -3 degrees."), vec![1200.0, -3.0]);
    }

    #[test]
    fn test_ignores_non_numeric_tokens() {
        assert!(extract_numbers("nan inf infinity abc 1.2.3").is_empty());
        assert!(extract_numbers("").is_empty());
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(extract_numbers("five apples"), vec![5.0]);
        assert_eq!(extract_numbers("twenty three apples"), vec![23.0]);
        assert_eq!(extract_numbers("twenty-three apples"), vec![23.0]);
        assert_eq!(extract_numbers("ninety"), vec![90.0]);
        assert_eq!(extract_numbers("ten five"), vec![10.0, 5.0]);
    }

    #[test]
    fn test_hundreds_and_magnitudes() {
        assert_eq!(extract_numbers("one hundred and ten"), vec![110.0]);
        assert_eq!(
            extract_numbers("three hundred and forty two thousand five hundred"),
            vec![342_500.0]
        );
        assert_eq!(extract_numbers("two million, five"), vec![2_000_005.0]);
        assert_eq!(extract_numbers("one billion"), vec![1e9]);
    }

    #[test]
    fn test_adjacent_numbers_stay_separate() {
        assert_eq!(extract_numbers("one two three"), vec![1.0, 2.0, 3.0]);
        assert_eq!(extract_numbers("twenty one five"), vec![21.0, 5.0]);
    }

    #[test]
    fn test_and_outside_number() {
        assert_eq!(extract_numbers("five and dogs"), vec![5.0]);
        assert_eq!(extract_numbers("cats and dogs"), Vec::<f64>::new());
    }

    #[test]
    fn test_and_between_plain_numbers_separates() {
        assert_eq!(extract_numbers("five and six"), vec![5.0, 6.0]);
        assert_eq!(extract_numbers("twenty one and three"), vec![21.0, 3.0]);
        assert_eq!(extract_numbers("one thousand and five"), vec![1005.0]);
        assert_eq!(
            extract_numbers("two hundred and one and two"),
            vec![201.0, 2.0]
        );
    }

    #[test]
    fn test_negative_and_decimal() {
        assert_eq!(extract_numbers("negative seven"), vec![-7.0]);
        assert_eq!(extract_numbers("minus two point five"), vec![-2.5]);
        assert_eq!(extract_numbers("three point one four"), vec![3.14]);
        assert_eq!(extract_numbers("zero point five"), vec![0.5]);
    }

    #[test]
    fn test_point_without_digits() {
        assert_eq!(extract_numbers("five point blank"), vec![5.0]);
    }

    #[test]
    fn test_half() {
        assert_eq!(extract_numbers("half the cake"), vec![0.5]);
    }

    #[test]
    fn test_magnitude_alone_is_not_a_number() {
        assert!(extract_numbers("thousand hundred").is_empty());
    }

    #[test]
    fn test_trait_impl() {
        let found = WordNumberExtractor.extract_numbers("eleven, twelve!").unwrap();
        assert_eq!(found, vec![11.0, 12.0]);
    }
}
