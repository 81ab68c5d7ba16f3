use std::fmt;

use crate::collab::CollaboratorError;

/// Which external capability a normalization step needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Tagger,
    CoreferenceResolver,
    NumberExtractor,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Tagger => "tagger",
            Capability::CoreferenceResolver => "coreference resolver",
            Capability::NumberExtractor => "number extractor",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub enum NormalizeError {
    /// A step was requested but its collaborator was not supplied.
    MissingCollaborator(Capability),
    /// A collaborator failed; its error is passed through as the source.
    Collaborator {
        capability: Capability,
        source: CollaboratorError,
    },
}

impl NormalizeError {
    pub fn capability(&self) -> Capability {
        match self {
            NormalizeError::MissingCollaborator(c) => *c,
            NormalizeError::Collaborator { capability, .. } => *capability,
        }
    }
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::MissingCollaborator(c) => write!(f, "no {c} configured"),
            NormalizeError::Collaborator { capability, source } => {
                write!(f, "{capability} failed: {source}")
            }
        }
    }
}

impl std::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NormalizeError::MissingCollaborator(_) => None,
            NormalizeError::Collaborator { source, .. } => Some(source.as_ref()),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
