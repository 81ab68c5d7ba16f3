//! Numeral verbalization and English text normalization.
//!
//! Converts numbers to spoken English on the short or long scale, approximates
//! floats as mixed fractions for friendly phrasing, and normalizes free text
//! (articles, contractions, singular nouns, coreferences, spoken numbers to
//! digits).
//!
//! Zero I/O. Tagging, coreference resolution and number extraction are
//! collaborator traits supplied by the caller.

pub mod collab;
pub mod contractions;
pub mod error;
pub mod extract;
pub mod fraction;
pub mod inflect;
pub mod nice;
pub mod normalize;
pub mod options;
pub mod pronounce;
pub mod scale;

pub use collab::{
    CollaboratorError, CoreferenceResolver, NumberExtractor, PartOfSpeech, TaggedToken, Tagger,
};
pub use contractions::expand_contraction;
pub use error::{Capability, NormalizeError};
pub use extract::{WordNumberExtractor, extract_numbers};
pub use fraction::{DEFAULT_DENOMINATORS, MixedFraction, TOLERANCE, to_mixed_fraction};
pub use inflect::singular_noun;
pub use nice::nice_number;
pub use normalize::{Normalizer, normalize};
pub use options::{NormalizeOptions, NumberSubstitution, PronounceOptions};
pub use pronounce::pronounce_number;
pub use scale::{LONG_SCALE, SHORT_SCALE, ScaleEntry, fraction_name};
