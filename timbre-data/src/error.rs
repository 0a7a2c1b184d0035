use std::fmt;
use std::path::PathBuf;

/// Custom error type for the timbre-data crate.
///
/// Implemented by hand rather than via `#[derive(thiserror::Error)]` because
/// `UnsupportedInstrumentSource` carries a plain-data field named `source`,
/// which the derive would unconditionally treat as the error's cause.
#[derive(Debug)]
pub enum DatasetError {
    InvalidArgument { message: String },

    Scan {
        path: PathBuf,
        source: walkdir::Error,
    },

    MalformedFilename { path: PathBuf, reason: String },

    UnsupportedInstrumentSource { path: PathBuf, source: String },

    EmptyDataset { dir: PathBuf, extension: String },

    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {message}")
            }
            DatasetError::Scan { path, source } => {
                write!(f, "Failed to scan {}: {source}", path.display())
            }
            DatasetError::MalformedFilename { path, reason } => {
                write!(f, "Malformed filename {}: {reason}", path.display())
            }
            DatasetError::UnsupportedInstrumentSource { path, source } => {
                write!(
                    f,
                    "Unsupported instrument source '{source}' in {}: only 'acoustic' follows this naming convention",
                    path.display()
                )
            }
            DatasetError::EmptyDataset { dir, extension } => {
                write!(
                    f,
                    "No file matching '*{extension}' found under {}",
                    dir.display()
                )
            }
            DatasetError::IndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "Index out of bounds: index {index} for dataset of length {len}"
                )
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Scan { source, .. } => Some(source),
            _ => None,
        }
    }
}
