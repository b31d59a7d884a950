use crate::{read_directory, write_sample};
use std::path::{Path, PathBuf};
use talaba_core::{Directory, DirectorySource, LoadError};
use tracing::warn;

/// What to do when the data file does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleFallback {
    /// Report `FileMissing`.
    #[default]
    Disabled,
    /// Write the sample dataset to the configured path and load it once.
    Generate,
}

impl From<bool> for SampleFallback {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Generate } else { Self::Disabled }
    }
}

/// Directory source backed by one spreadsheet file.
#[derive(Debug, Clone)]
pub struct SpreadsheetSource {
    path: PathBuf,
    fallback: SampleFallback,
}

impl SpreadsheetSource {
    pub fn new(path: impl Into<PathBuf>, fallback: SampleFallback) -> Self {
        Self {
            path: path.into(),
            fallback,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn fallback(&self) -> SampleFallback {
        self.fallback
    }
}

impl DirectorySource for SpreadsheetSource {
    fn load(&self) -> Result<Directory, LoadError> {
        match read_directory(&self.path) {
            Err(LoadError::FileMissing(path)) if self.fallback == SampleFallback::Generate => {
                warn!(
                    target: "talaba::fallback",
                    "Data file {} is missing; generating sample dataset in its place",
                    path.display()
                );
                write_sample(&path)?;
                read_directory(&self.path)
            }
            other => other,
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
