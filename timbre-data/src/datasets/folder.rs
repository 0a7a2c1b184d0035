use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::traits::{Dataset, Transform};
use crate::error::DatasetError;

/// File extensions accepted by [`FolderDataset::new`]: raw audio and
/// pre-extracted feature dumps.
pub const DEFAULT_EXTENSIONS: &[&str] = &["wav", "mp3", "npy", "pth"];

const TRAIN_DIR: &str = "trainingdata";
const TEST_DIR: &str = "testdata";

/// Selects which partition of a dataset root to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subset {
    /// Both the training and the test partition.
    #[default]
    All,
    /// Only `<root>/trainingdata`.
    Train,
    /// Only `<root>/testdata`.
    Test,
}

impl Subset {
    fn partition_dirs(self) -> &'static [&'static str] {
        match self {
            Subset::All => &[TRAIN_DIR, TEST_DIR],
            Subset::Train => &[TRAIN_DIR],
            Subset::Test => &[TEST_DIR],
        }
    }
}

/// A dataset enumerating class-labeled files from one or more roots laid
/// out as:
///
/// ```text
/// <root>/trainingdata/<classLabel>/<file>.<ext>
/// <root>/testdata/<classLabel>/<file>.<ext>
/// ```
///
/// Each entry's label is the name of its immediate parent directory. The
/// whole tree is scanned once at construction; entries are stored as
/// parallel path/label vectors and are immutable afterwards. Entry order is
/// directory-listing order, which is not guaranteed stable across platforms.
pub struct FolderDataset<T = PathBuf> {
    paths: Vec<PathBuf>,
    labels: Vec<String>,
    transform: Transform<T>,
}

impl FolderDataset<PathBuf> {
    /// Creates a dataset over `roots` with the [`DEFAULT_EXTENSIONS`] and no
    /// transform: `get` yields the file path itself.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidArgument`] if `roots` is empty, or
    /// [`DatasetError::Scan`] if a partition directory cannot be listed.
    pub fn new(roots: &[PathBuf], subset: Subset) -> Result<Self, DatasetError> {
        Self::with_extensions(roots, DEFAULT_EXTENSIONS, subset)
    }

    /// Like [`FolderDataset::new`] with a caller-chosen extension set.
    pub fn with_extensions(
        roots: &[PathBuf],
        extensions: &[&str],
        subset: Subset,
    ) -> Result<Self, DatasetError> {
        Self::with_transform(roots, extensions, subset, Box::new(Path::to_path_buf))
    }
}

impl<T: Send + 'static> FolderDataset<T> {
    /// Creates a dataset that materializes items through `transform` on
    /// every [`Dataset::get`] call.
    ///
    /// A file is accepted when its name *contains* one of `extensions` as a
    /// substring. This loose containment match (rather than a strict suffix
    /// match) is long-standing behavior that callers rely on; pass more
    /// specific extension strings such as `".wav"` to tighten it.
    pub fn with_transform(
        roots: &[PathBuf],
        extensions: &[&str],
        subset: Subset,
        transform: Transform<T>,
    ) -> Result<Self, DatasetError> {
        if roots.is_empty() {
            return Err(DatasetError::InvalidArgument {
                message: "at least one dataset root is required".to_string(),
            });
        }

        let mut paths = Vec::new();
        let mut labels = Vec::new();
        for root in roots {
            for partition in subset.partition_dirs() {
                let partition_dir = root.join(partition);
                scan_partition(&partition_dir, extensions, &mut paths, &mut labels)?;
            }
        }
        log::debug!(
            "collected {} labeled files from {} root(s) ({:?})",
            paths.len(),
            roots.len(),
            subset
        );

        Ok(Self {
            paths,
            labels,
            transform,
        })
    }
}

/// Collects every class-directory file under one partition directory.
///
/// Layout is exactly two levels deep: immediate subdirectories are class
/// labels, their regular files are the data. A missing or unreadable
/// partition aborts the whole construction; there is no partial index.
fn scan_partition(
    partition_dir: &Path,
    extensions: &[&str],
    paths: &mut Vec<PathBuf>,
    labels: &mut Vec<String>,
) -> Result<(), DatasetError> {
    for entry in WalkDir::new(partition_dir).min_depth(2).max_depth(2) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| partition_dir.to_path_buf());
            DatasetError::Scan { path, source: e }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if extensions.iter().any(|ext| name.contains(ext)) {
            // Label is the class directory the file sits in.
            let label = entry
                .path()
                .parent()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            paths.push(entry.into_path());
            labels.push(label);
        }
    }
    Ok(())
}

impl<T: Send + 'static> Dataset for FolderDataset<T> {
    type Label = String;
    type Item = T;

    fn get(&self, index: usize) -> Result<(usize, String, T), DatasetError> {
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
#[path = "folder_test.rs"]
mod tests;
