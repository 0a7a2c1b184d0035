use std::path::Path;

use crate::error::DatasetError;

/// Caller-supplied function mapping an enumerated file path to a
/// materialized in-memory item (decoded audio, a loaded feature array, ...).
///
/// The datasets never inspect the returned value and never catch failures:
/// a transform that panics propagates to the caller of [`Dataset::get`].
/// A caller that wants fallible materialization can pick `T = Result<..>`.
pub type Transform<T> = Box<dyn Fn(&Path) -> T + Send + Sync>;

/// Represents an indexed dataset that can be accessed by position.
///
/// A dataset is an immutable collection of `(index, label, item)` entries
/// built once from a filesystem scan. The label shape varies per dataset
/// (a plain class name for [`FolderDataset`], a structured record for
/// [`NsynthDataset`]), so it is an associated type rather than a shared
/// concrete schema.
///
/// [`FolderDataset`]: crate::datasets::FolderDataset
/// [`NsynthDataset`]: crate::datasets::NsynthDataset
pub trait Dataset {
    /// The label attached to each entry.
    type Label;

    /// The type of a single materialized item.
    ///
    /// This type must be `Send` and `'static` to allow for potential
    /// multi-threaded data loading in the future.
    type Item: Send + 'static;

    /// Returns the entry at the given index as `(index, label, item)`.
    ///
    /// The first element always equals the queried `index`, so downstream
    /// pipeline code can carry the position alongside the payload.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::IndexOutOfBounds`] if the index is out of
    /// bounds.
    fn get(&self, index: usize) -> Result<(usize, Self::Label, Self::Item), DatasetError>;

    /// Returns the total number of entries in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a sequential iterator over all entries, materializing each
    /// item lazily via [`Dataset::get`].
    fn iter(&self) -> DatasetIter<'_, Self>
    where
        Self: Sized,
    {
        DatasetIter {
            dataset: self,
            current: 0,
        }
    }
}

/// Sequential iterator over a dataset, yielding `get(0), get(1), ...`.
pub struct DatasetIter<'a, D: Dataset> {
    dataset: &'a D,
    current: usize,
}

impl<D: Dataset> Iterator for DatasetIter<'_, D> {
    type Item = Result<(usize, D::Label, D::Item), DatasetError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.dataset.len() {
            return None;
        }
        let entry = self.dataset.get(self.current);
        self.current += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dataset.len().saturating_sub(self.current);
        (remaining, Some(remaining))
    }
}
