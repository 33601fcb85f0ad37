use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, WordFreqError>;

#[derive(Debug)]
pub enum WordFreqError {
    /// The input file could not be opened.
    Open { path: PathBuf, source: io::Error },
    /// Reading failed part way through the input.
    Read { source: io::Error },
    /// More distinct words than the configured cap.
    CapacityExceeded { limit: usize },
}

impl fmt::Display for WordFreqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordFreqError::Open { path, .. } => write!(f, "failed to open {}", path.display()),
            WordFreqError::Read { .. } => write!(f, "failed to read input"),
            WordFreqError::CapacityExceeded { limit } => {
                write!(f, "exceeded number of allowed unique words ({})", limit)
            }
        }
    }
}

impl std::error::Error for WordFreqError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WordFreqError::Open { source, .. } | WordFreqError::Read { source } => Some(source),
            WordFreqError::CapacityExceeded { .. } => None,
        }
    }
}
