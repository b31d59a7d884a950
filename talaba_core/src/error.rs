use std::path::PathBuf;
use thiserror::Error;

pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Failure to build a `Directory` from its data source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("required column '{0}' is missing")]
    SchemaInvalid(String),

    #[error("failed to parse data file: {0}")]
    Parse(String),

    #[error("failed to write sample data file: {0}")]
    SampleWrite(String),
}

impl LoadError {
    #[must_use]
    pub const fn is_file_missing(&self) -> bool {
        matches!(self, Self::FileMissing(_))
    }
}

/// Failure of a lookup operation. An empty result is not an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    #[error("student directory is unavailable")]
    StoreUnavailable,
}
