//! Whole-token contraction expansion ("don't" → "do not").
//!
//! Matching is exact and case-sensitive: "Don't" and "dont" pass through.
//! A few entries cover speech-to-text spellings ("whats", "y'aint").

use std::collections::HashMap;
use std::sync::LazyLock;

const CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "is not"),
    ("aren't", "are not"),
    ("can't", "can not"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'd", "he would"),
    ("he'll", "he will"),
    ("he's", "he is"),
    ("how'd", "how did"),
    ("how'll", "how will"),
    ("how's", "how is"),
    ("I'd", "I would"),
    ("I'll", "I will"),
    ("I'm", "I am"),
    ("I've", "I have"),
    ("isn't", "is not"),
    ("it'd", "it would"),
    ("it'll", "it will"),
    ("it's", "it is"),
    ("mightn't", "might not"),
    ("might've", "might have"),
    ("mustn't", "must not"),
    ("must've", "must have"),
    ("needn't", "need not"),
    ("oughtn't", "ought not"),
    ("shan't", "shall not"),
    ("she'd", "she would"),
    ("she'll", "she will"),
    ("she's", "she is"),
    ("shouldn't", "should not"),
    ("should've", "should have"),
    ("somebody's", "somebody is"),
    ("someone'd", "someone would"),
    ("someone'll", "someone will"),
    ("someone's", "someone is"),
    ("that'll", "that will"),
    ("that's", "that is"),
    ("that'd", "that would"),
    ("there'd", "there would"),
    ("there're", "there are"),
    ("there's", "there is"),
    ("they'd", "they would"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we'd", "we would"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'd", "what did"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("whats", "what is"),
    ("what've", "what have"),
    ("when's", "when is"),
    ("when'd", "when did"),
    ("where'd", "where did"),
    ("where's", "where is"),
    ("where've", "where have"),
    ("who'd", "who would"),
    ("who'd've", "who would have"),
    ("who'll", "who will"),
    ("who're", "who are"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("why'd", "why did"),
    ("why're", "why are"),
    ("why's", "why is"),
    ("won't", "will not"),
    ("won't've", "will not have"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("wouldn't've", "would not have"),
    ("y'all", "you all"),
    ("ya'll", "you all"),
    ("you'd", "you would"),
    ("you'd've", "you would have"),
    ("you'll", "you will"),
    ("y'aint", "you are not"),
    ("y'ain't", "you are not"),
    ("you're", "you are"),
    ("you've", "you have"),
];

static TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CONTRACTIONS.iter().copied().collect());

/// Expansion for a whole token, if it is a known contraction.
pub fn expand_contraction(token: &str) -> Option<&'static str> {
    TABLE.get(token).copied()
}

/// Every (contraction, expansion) pair, in table order.
pub fn contractions() -> impl Iterator<Item = (&'static str, &'static str)> {
    CONTRACTIONS.iter().copied()
}
