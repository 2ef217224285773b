//! Error type for configuration loading.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// TOML syntax or schema error.
    Parse(String),
    /// TOML serialization failure.
    Serialize(String),
    /// A value is outside its allowed range.
    Invalid {
        section: &'static str,
        message: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config file '{}': {source}", path.display())
            }
            Self::Parse(msg) => write!(f, "failed to parse config: {msg}"),
            Self::Serialize(msg) => write!(f, "failed to serialize config: {msg}"),
            Self::Invalid { section, message } => write!(f, "[{section}] {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
