use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::traits::{Dataset, Transform};
use crate::error::DatasetError;

/// Structured metadata parsed from a filtered-NSynth filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NsynthLabel {
    pub family: String,
    pub instrument: String,
    pub pitch: u32,
    pub velocity: u32,
}

/// A dataset over a flat directory of filtered-NSynth files named:
///
/// ```text
/// <family>_<source>_<instrumentId>-<pitch>-<velocity>.<ext>
/// ```
///
/// This convention only holds for acoustic instruments; synthesizer-sourced
/// files follow a different, unsupported format and are rejected during
/// construction. Every filename is parsed eagerly into an [`NsynthLabel`];
/// a single non-conforming name aborts the whole build.
pub struct NsynthDataset<T = PathBuf> {
    paths: Vec<PathBuf>,
    labels: Vec<NsynthLabel>,
    transform: Transform<T>,
}

impl NsynthDataset<PathBuf> {
    /// Creates a dataset over `*.wav` files in `dir`, with no transform:
    /// `get` yields the file path itself.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::MalformedFilename`] or
    /// [`DatasetError::UnsupportedInstrumentSource`] if a filename does not
    /// follow the convention, [`DatasetError::Scan`] if the directory cannot
    /// be listed, and [`DatasetError::EmptyDataset`] if no file matched —
    /// the last is warning-grade: callers may match it and proceed with an
    /// empty dataset rather than abort.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DatasetError> {
        Self::with_extension(dir, ".wav")
    }

    /// Like [`NsynthDataset::new`] for files ending in `extension`.
    pub fn with_extension(
        dir: impl Into<PathBuf>,
        extension: &str,
    ) -> Result<Self, DatasetError> {
        Self::with_transform(dir, extension, Box::new(Path::to_path_buf))
    }
}

impl<T: Send + 'static> NsynthDataset<T> {
    /// Creates a dataset that materializes items through `transform` on
    /// every [`Dataset::get`] call.
    pub fn with_transform(
        dir: impl Into<PathBuf>,
        extension: &str,
        transform: Transform<T>,
    ) -> Result<Self, DatasetError> {
        let dir = dir.into();

        let mut paths = Vec::new();
        let mut labels = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.clone());
                DatasetError::Scan { path, source: e }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !name.ends_with(extension) {
                continue;
            }
            let stem = entry
                .path()
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            labels.push(parse_stem(&stem, entry.path())?);
            paths.push(entry.into_path());
        }

        if paths.is_empty() {
            log::warn!(
                "no file matching '*{}' found under {}",
                extension,
                dir.display()
            );
            return Err(DatasetError::EmptyDataset {
                dir,
                extension: extension.to_string(),
            });
        }

        Ok(Self {
            paths,
            labels,
            transform,
        })
    }
}

/// Parses a `family_source_instrumentId-pitch-velocity` stem.
fn parse_stem(stem: &str, path: &Path) -> Result<NsynthLabel, DatasetError> {
    let malformed = |reason: String| DatasetError::MalformedFilename {
        path: path.to_path_buf(),
        reason,
    };

    let fields: Vec<&str> = stem.split('-').collect();
    if fields.len() != 3 {
        return Err(malformed(format!(
            "expected 3 '-'-separated fields, got {}",
            fields.len()
        )));
    }
    let pitch: u32 = fields[1]
        .parse()
        .map_err(|_| malformed(format!("pitch '{}' is not an integer", fields[1])))?;
    let velocity: u32 = fields[2]
        .parse()
        .map_err(|_| malformed(format!("velocity '{}' is not an integer", fields[2])))?;

    let spec: Vec<&str> = fields[0].split('_').collect();
    if spec.len() != 3 {
        return Err(malformed(format!(
            "expected 3 '_'-separated instrument fields, got {}",
            spec.len()
        )));
    }
    if spec[1] != "acoustic" {
        return Err(DatasetError::UnsupportedInstrumentSource {
            path: path.to_path_buf(),
            source: spec[1].to_string(),
        });
    }

    Ok(NsynthLabel {
        family: spec[0].to_string(),
        instrument: spec[2].to_string(),
        pitch,
        velocity,
    })
}

impl<T: Send + 'static> Dataset for NsynthDataset<T> {
    type Label = NsynthLabel;
    type Item = T;

    fn get(&self, index: usize) -> Result<(usize, NsynthLabel, T), DatasetError> {
        let path = self
            .paths
            .get(index)
            .ok_or(DatasetError::IndexOutOfBounds {
                index,
                len: self.paths.len(),
            })?;
        Ok((index, self.labels[index].clone(), (self.transform)(path)))
    }

    fn len(&self) -> usize {
        self.paths.len() // paths and labels are built in lockstep
    }
}

#[cfg(test)]
#[path = "nsynth_test.rs"]
mod tests;
