//! Word-level English normalization.
//!
//! One pass over whitespace tokens (articles, contractions, singular nouns),
//! then optional coreference resolution on the reassembled text, then a final
//! pass that swaps spoken numbers for digits.

use std::sync::Arc;

use crate::collab::{CoreferenceResolver, NumberExtractor, PartOfSpeech, Tagger};
use crate::contractions::expand_contraction;
use crate::error::{Capability, NormalizeError, Result};
use crate::extract::WordNumberExtractor;
use crate::inflect::singular_noun;
use crate::options::{NormalizeOptions, NumberSubstitution, PronounceOptions};
use crate::pronounce::pronounce_number;

const ARTICLES: [&str; 3] = ["the", "a", "an"];

/// Nouns the singularizer leaves alone.
const KEEP_PLURAL: [&str; 4] = ["this", "data", "my", "was"];

const REPLACEMENTS: [(&str, &str); 1] = [("are", "is")];

/// Normalizer with its collaborators bound.
///
/// The number extractor defaults to [`WordNumberExtractor`]. The tagger and
/// coreference resolver are only consulted when their step is enabled.
#[derive(Clone)]
pub struct Normalizer {
    options: NormalizeOptions,
    tagger: Option<Arc<dyn Tagger>>,
    resolver: Option<Arc<dyn CoreferenceResolver>>,
    extractor: Arc<dyn NumberExtractor>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

impl Normalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            tagger: None,
            resolver: None,
            extractor: Arc::new(WordNumberExtractor),
        }
    }

    pub fn with_tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    pub fn with_coreference_resolver(mut self, resolver: Arc<dyn CoreferenceResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_number_extractor(mut self, extractor: Arc<dyn NumberExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize `text`. Unknown tokens pass through; runs of whitespace
    /// collapse to one space.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let opts = &self.options;
        let tagger = match (opts.make_singular, &self.tagger) {
            (false, _) => None,
            (true, Some(t)) => Some(t.as_ref()),
            (true, None) => return Err(NormalizeError::MissingCollaborator(Capability::Tagger)),
        };
        let resolver = match (opts.solve_corefs, &self.resolver) {
            (false, _) => None,
            (true, Some(r)) => Some(r.as_ref()),
            (true, None) => {
                return Err(NormalizeError::MissingCollaborator(
                    Capability::CoreferenceResolver,
                ));
            }
        };

        let mut words = Vec::new();
        for token in text.split_whitespace() {
            if opts.remove_articles && ARTICLES.contains(&token) {
                continue;
            }
            let word = expand_contraction(token).unwrap_or(token);
            match tagger {
                Some(tagger) => words.push(singularize(word, tagger)?),
                None => words.push(word.to_string()),
            }
        }
        let mut normalized = words.join(" ");
        tracing::debug!(tokens = words.len(), "word pass complete");

        if let Some(resolver) = resolver {
            normalized = resolver
                .resolve(&normalized)
                .map_err(|source| NormalizeError::Collaborator {
                    capability: Capability::CoreferenceResolver,
                    source,
                })?;
            tracing::debug!("coreferences resolved");
        }

        let normalized = self.substitute_numbers(normalized)?;
        Ok(normalized.trim().to_string())
    }

    /// Replace the spoken form of every extracted number with its digits.
    fn substitute_numbers(&self, mut text: String) -> Result<String> {
        let numbers = self
            .extractor
            .extract_numbers(&text)
            .map_err(|source| NormalizeError::Collaborator {
                capability: Capability::NumberExtractor,
                source,
            })?;

        let pronounce = PronounceOptions::default();
        let mut cursor = 0;
        for value in numbers {
            let spoken = pronounce_number(value, &pronounce);
            let digits = digit_string(value);
            match self.options.number_substitution {
                NumberSubstitution::Global => {
                    text = text.replace(&spoken, &digits);
                }
                NumberSubstitution::WholeWord => {
                    if let Some(at) = find_whole_word(&text, &spoken, cursor) {
                        text.replace_range(at..at + spoken.len(), &digits);
                        cursor = at + digits.len();
                    }
                }
            }
            tracing::debug!(value, spoken = %spoken, "number substituted");
        }
        Ok(text)
    }
}

/// Normalize with the built-in number extractor and no tagger or resolver.
pub fn normalize(text: &str, options: &NormalizeOptions) -> Result<String> {
    Normalizer::new(*options).normalize(text)
}

/// Tag `word` (possibly a multi-word expansion) and singularize its common nouns.
fn singularize(word: &str, tagger: &dyn Tagger) -> Result<String> {
    let tokens = tagger
        .tag(word)
        .map_err(|source| NormalizeError::Collaborator {
            capability: Capability::Tagger,
            source,
        })?;

    let words: Vec<String> = tokens
        .into_iter()
        .map(|tok| {
            if tok.pos == PartOfSpeech::Noun && !KEEP_PLURAL.contains(&tok.text.as_str()) {
                if tok.lemma.is_empty() {
                    singular_noun(&tok.text)
                } else {
                    tok.lemma
                }
            } else if let Some((_, to)) = REPLACEMENTS.iter().find(|(from, _)| *from == tok.text) {
                to.to_string()
            } else {
                tok.text
            }
        })
        .collect();
    Ok(words.join(" "))
}

/// Canonical digits for a value: `5.0` → "5", `0.5` → "0.5".
fn digit_string(value: f64) -> String {
    let s = value.to_string();
    match s.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}

/// Byte offset of the first occurrence of `needle` at or after `from` that is
/// not glued to a neighbouring letter or digit.
fn find_whole_word(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let is_word = |c: char| c.is_alphanumeric() || c == '\'';
    haystack
        .get(from..)?
        .match_indices(needle)
        .map(|(i, _)| from + i)
        .find(|&at| {
            let before = haystack[..at].chars().next_back();
            let after = haystack[at + needle.len()..].chars().next();
            !before.is_some_and(is_word) && !after.is_some_and(is_word)
        })
}
