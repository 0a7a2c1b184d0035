pub mod traits;
pub mod folder;
pub mod nsynth;

pub use traits::{Dataset, DatasetIter, Transform};
pub use folder::{FolderDataset, Subset, DEFAULT_EXTENSIONS};
pub use nsynth::{NsynthDataset, NsynthLabel};
