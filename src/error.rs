use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration problems. Any of these aborts the render pass.
#[derive(Debug, Error)]
pub enum StarWheelError {
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("failed to read data file {}: {source}", path.display())]
    DataFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid color '{value}' for role '{role}'")]
    InvalidColor { role: String, value: String },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("translation table is malformed: {0}")]
    Translations(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StarWheelError>;

/// A single malformed line in a catalogue, stick-figure or label source.
///
/// Never fatal: the record is skipped and the pass continues.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {reason}")]
pub struct RecordError {
    pub line: usize,
    pub reason: String,
}

impl RecordError {
    pub fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}
