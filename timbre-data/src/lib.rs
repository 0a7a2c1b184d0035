//! Filesystem dataset indexing for the Timbre audio pipeline.
//!
//! Two independent adapters enumerate files on disk and expose them through
//! the same `(index, label, item)` contract defined by the [`Dataset`]
//! trait:
//!
//! - [`FolderDataset`] walks `<root>/{trainingdata,testdata}/<class>/` trees
//!   and labels each file with its class directory name.
//! - [`NsynthDataset`] scans a flat directory of filtered-NSynth files and
//!   parses structured metadata out of each filename.
//!
//! Both build their index eagerly at construction and are immutable
//! afterwards; item materialization (audio decoding, feature loading) is
//! deferred to an optional caller-supplied [`Transform`] applied on each
//! [`Dataset::get`] call.

pub mod datasets;
pub mod error;

// Re-export main components
pub use datasets::{
    Dataset, DatasetIter, FolderDataset, NsynthDataset, NsynthLabel, Subset, Transform,
    DEFAULT_EXTENSIONS,
};
pub use error::DatasetError;
