//! Enumerates a class-folder audio dataset and prints the first entries.
//!
//! Expects a directory laid out as
//! `<root>/{trainingdata,testdata}/<class>/<file>.<ext>`; pass the root as
//! the first argument (defaults to `myAudioDataset/audio` next to the
//! current directory).

use std::path::PathBuf;

use timbre_data::{Dataset, FolderDataset, Subset};

fn main() {
    let root: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "myAudioDataset/audio".to_string())
        .into();

    let dataset = match FolderDataset::new(&[root], Subset::All) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("failed to index dataset: {e}");
            std::process::exit(1);
        }
    };
    println!("the number of data: {}", dataset.len());

    println!("the first five entries:");
    for entry in dataset.iter().take(5) {
        let (idx, label, path) = entry.expect("in-bounds access");
        println!("  {idx}: [{label}] {}", path.display());
    }
}
