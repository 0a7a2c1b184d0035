// timbre-data/src/datasets/folder_test.rs

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::*;
use crate::error::DatasetError;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

/// Builds `<root>/{trainingdata,testdata}` with a few class folders:
/// trainingdata/drums/{kick.wav, snare.mp3}, trainingdata/strings/violin.npy,
/// testdata/drums/tom.wav.
fn sample_root() -> TempDir {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("trainingdata/drums/kick.wav"));
    touch(&root.path().join("trainingdata/drums/snare.mp3"));
    touch(&root.path().join("trainingdata/strings/violin.npy"));
    touch(&root.path().join("testdata/drums/tom.wav"));
    root
}

fn roots(root: &TempDir) -> Vec<PathBuf> {
    vec![root.path().to_path_buf()]
}

#[test]
fn test_folder_dataset_len_and_labels() {
    let root = sample_root();
    let dataset = FolderDataset::new(&roots(&root), Subset::All).unwrap();
    assert_eq!(dataset.len(), 4);
    assert!(!dataset.is_empty());

    // Listing order is platform-dependent, so compare as a sorted set.
    let mut entries: Vec<(String, String)> = (0..dataset.len())
        .map(|i| {
            let (_, label, path) = dataset.get(i).unwrap();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            (label, name)
        })
        .collect();
    entries.sort();
    assert_eq!(
        entries,
        vec![
            ("drums".to_string(), "kick.wav".to_string()),
            ("drums".to_string(), "snare.mp3".to_string()),
            ("drums".to_string(), "tom.wav".to_string()),
            ("strings".to_string(), "violin.npy".to_string()),
        ]
    );
}

#[test]
fn test_folder_dataset_get_returns_queried_index() {
    let root = sample_root();
    let dataset = FolderDataset::new(&roots(&root), Subset::All).unwrap();
    for i in 0..dataset.len() {
        let (idx, _, _) = dataset.get(i).unwrap();
        assert_eq!(idx, i);
    }
}

#[test]
fn test_folder_dataset_subset_train_excludes_testdata() {
    let root = sample_root();
    let dataset = FolderDataset::new(&roots(&root), Subset::Train).unwrap();
    assert_eq!(dataset.len(), 3);
    for entry in dataset.iter() {
        let (_, _, path) = entry.unwrap();
        assert!(path.components().any(|c| c.as_os_str() == "trainingdata"));
        assert!(!path.components().any(|c| c.as_os_str() == "testdata"));
    }
}

#[test]
fn test_folder_dataset_subset_test_excludes_trainingdata() {
    let root = sample_root();
    let dataset = FolderDataset::new(&roots(&root), Subset::Test).unwrap();
    assert_eq!(dataset.len(), 1);
    let (_, label, path) = dataset.get(0).unwrap();
    assert_eq!(label, "drums");
    assert!(path.ends_with("testdata/drums/tom.wav"));
}

#[test]
fn test_folder_dataset_multiple_roots() {
    let first = sample_root();
    let second = sample_root();
    let all = vec![first.path().to_path_buf(), second.path().to_path_buf()];
    let dataset = FolderDataset::new(&all, Subset::All).unwrap();
    assert_eq!(dataset.len(), 8);
}

#[test]
fn test_folder_dataset_extension_containment_is_loose() {
    let root = TempDir::new().unwrap();
    // "wav" matches anywhere in the name, not just as a suffix.
    touch(&root.path().join("trainingdata/drums/take1.wav.bak"));
    touch(&root.path().join("trainingdata/drums/mynpydump.txt"));
    touch(&root.path().join("trainingdata/drums/readme.txt"));
    let dataset = FolderDataset::new(&roots(&root), Subset::Train).unwrap();

    let mut names: Vec<String> = (0..dataset.len())
        .map(|i| {
            let (_, _, path) = dataset.get(i).unwrap();
            path.file_name().unwrap().to_string_lossy().into_owned()
        })
        .collect();
    names.sort();
    assert_eq!(names, vec!["mynpydump.txt", "take1.wav.bak"]);
}

#[test]
fn test_folder_dataset_custom_extensions() {
    let root = sample_root();
    let dataset =
        FolderDataset::with_extensions(&roots(&root), &[".npy"], Subset::All).unwrap();
    assert_eq!(dataset.len(), 1);
    let (_, label, _) = dataset.get(0).unwrap();
    assert_eq!(label, "strings");
}

#[test]
fn test_folder_dataset_transform_applied_on_get() {
    let root = sample_root();
    let dataset = FolderDataset::with_transform(
        &roots(&root),
        &["wav"],
        Subset::Test,
        Box::new(|p| p.file_name().unwrap().to_string_lossy().into_owned()),
    )
    .unwrap();
    let (_, _, item) = dataset.get(0).unwrap();
    assert_eq!(item, "tom.wav");
}

#[test]
fn test_folder_dataset_empty_tree_is_valid() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("trainingdata")).unwrap();
    fs::create_dir_all(root.path().join("testdata")).unwrap();
    let dataset = FolderDataset::new(&roots(&root), Subset::All).unwrap();
    assert_eq!(dataset.len(), 0);
    assert!(dataset.is_empty());
}

#[test]
fn test_folder_dataset_empty_roots_rejected() {
    match FolderDataset::new(&[], Subset::All) {
        Err(DatasetError::InvalidArgument { .. }) => {}
        other => panic!("expected InvalidArgument, got {:?}", other.map(|d| d.len())),
    }
}

#[test]
fn test_folder_dataset_missing_partition_aborts() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("trainingdata/drums/kick.wav"));
    // No testdata directory: scanning Subset::All must fail outright.
    match FolderDataset::new(&roots(&root), Subset::All) {
        Err(DatasetError::Scan { .. }) => {}
        other => panic!("expected Scan error, got {:?}", other.map(|d| d.len())),
    }
}

#[test]
fn test_folder_dataset_get_out_of_bounds() {
    let root = sample_root();
    let dataset = FolderDataset::new(&roots(&root), Subset::All).unwrap();
    match dataset.get(dataset.len()) {
        Err(DatasetError::IndexOutOfBounds { index, len }) => {
            assert_eq!(index, 4);
            assert_eq!(len, 4);
        }
        _ => panic!("expected IndexOutOfBounds error"),
    }
}

#[test]
fn test_folder_dataset_iter_visits_every_entry_in_order() {
    let root = sample_root();
    let dataset = FolderDataset::new(&roots(&root), Subset::All).unwrap();
    let indices: Vec<usize> = dataset
        .iter()
        .map(|entry| entry.unwrap().0)
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}
