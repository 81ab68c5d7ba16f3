use serde::{Deserialize, Serialize};

/// How numbers are spoken by [`crate::pronounce_number`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PronounceOptions {
    /// Maximum decimal digits to speak after "point".
    pub places: usize,
    /// Short scale (billion = 10^9) when true, long scale (billion = 10^12) otherwise.
    pub short_scale: bool,
    /// Speak as "mantissa times ten to the power of exponent".
    pub scientific: bool,
}

impl Default for PronounceOptions {
    fn default() -> Self {
        Self {
            places: 2,
            short_scale: true,
            scientific: false,
        }
    }
}

/// Where spoken numbers are replaced by digits in the final normalization pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberSubstitution {
    /// Replace every occurrence of the spoken phrase anywhere in the text,
    /// including inside unrelated words ("someone" → "some1").
    #[default]
    Global,
    /// Replace only the next whole-word occurrence after the previous substitution.
    WholeWord,
}

/// Steps run by [`crate::Normalizer::normalize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Drop "the", "a" and "an".
    pub remove_articles: bool,
    /// Run the reassembled text through the coreference resolver.
    pub solve_corefs: bool,
    /// Singularize common nouns using the tagger.
    pub make_singular: bool,
    pub number_substitution: NumberSubstitution,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            remove_articles: true,
            solve_corefs: false,
            make_singular: false,
            number_substitution: NumberSubstitution::Global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pronounce_defaults() {
        let opts = PronounceOptions::default();
        assert_eq!(opts.places, 2);
        assert!(opts.short_scale);
        assert!(!opts.scientific);
    }

    #[test]
    fn test_normalize_defaults() {
        let opts = NormalizeOptions::default();
        assert!(opts.remove_articles);
        assert!(!opts.solve_corefs);
        assert!(!opts.make_singular);
        assert_eq!(opts.number_substitution, NumberSubstitution::Global);
    }
}
