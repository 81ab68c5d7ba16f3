use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Serialize(toml::ser::Error),
    InvalidData(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {e}"),
            StoreError::Toml(e) => write!(f, "malformed config: {e}"),
            StoreError::Serialize(e) => write!(f, "failed to serialize config: {e}"),
            StoreError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Toml(e) => Some(e),
            StoreError::Serialize(e) => Some(e),
            StoreError::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(e: toml::de::Error) -> Self {
        StoreError::Toml(e)
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(e: toml::ser::Error) -> Self {
        StoreError::Serialize(e)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
