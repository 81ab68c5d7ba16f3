//! Capabilities the normalizer consumes but does not implement.
//!
//! Each is passed in explicitly. Errors are boxed and handed back to the
//! caller untouched.

use std::error::Error;

pub type CollaboratorError = Box<dyn Error + Send + Sync>;

/// Coarse part-of-speech classes. Only `Noun` (common noun) is singularized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Pronoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Determiner,
    Number,
    Punctuation,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
    /// Dictionary form; empty when the tagger does not lemmatize.
    pub lemma: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech, lemma: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos,
            lemma: lemma.into(),
        }
    }
}

/// Tokenizes and tags text.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, CollaboratorError>;
}

/// Replaces pronouns and other referring expressions with their antecedents.
pub trait CoreferenceResolver: Send + Sync {
    fn resolve(&self, text: &str) -> Result<String, CollaboratorError>;
}

/// Finds the numeric values mentioned in text, in order of appearance.
pub trait NumberExtractor: Send + Sync {
    fn extract_numbers(&self, text: &str) -> Result<Vec<f64>, CollaboratorError>;
}

impl<F> CoreferenceResolver for F
where
    F: Fn(&str) -> Result<String, CollaboratorError> + Send + Sync,
{
    fn resolve(&self, text: &str) -> Result<String, CollaboratorError> {
        self(text)
    }
}
