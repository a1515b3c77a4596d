use std::path::PathBuf;

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SheetError {
    #[error("invalid accession range {range}: {reason}")]
    InvalidRange { range: String, reason: String },

    #[error("invalid group label: {0:?}")]
    InvalidGroupLabel(String),

    #[error("no input files to build a manifest from")]
    EmptyInput,

    #[error("data directory does not exist: {0}")]
    MissingRoot(Utf8PathBuf),

    #[error("no files matching {pattern} found in: {root}")]
    NoMatchingFiles { root: Utf8PathBuf, pattern: String },

    #[error("invalid file pattern: {0}")]
    InvalidPattern(String),

    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("failed to read config file at {}", .0.display())]
    ConfigRead(PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("failed to write samplesheet: {0}")]
    ManifestWrite(String),
}

impl SheetError {
    /// Process exit status for this error: 2 for configuration problems, 1
    /// for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            SheetError::ConfigRead(_)
            | SheetError::ConfigParse(_)
            | SheetError::InvalidRange { .. }
            | SheetError::InvalidGroupLabel(_) => 2,
            _ => 1,
        }
    }
}
