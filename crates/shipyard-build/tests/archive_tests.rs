//! Archive layout tests
//!
//! Packages real directory trees and re-opens the produced archives to
//! assert the per-target layout rules.

use flate2::read::GzDecoder;
use pretty_assertions::assert_eq;
use shipyard_build::{archive, policy_for, ArchiveError};
use shipyard_config::PlatformTarget;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Lay out a typical build output tree under `root/folder`
fn make_build_tree(root: &Path, folder: &str) -> PathBuf {
    let dir = root.join(folder);
    fs::create_dir_all(dir.join("Data")).unwrap();
    fs::write(dir.join("game.bin"), b"player").unwrap();
    fs::write(dir.join("Data/level0"), b"level data").unwrap();
    fs::write(dir.join("Data/level1"), b"more level data").unwrap();
    dir
}

fn zip_names(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}

fn tar_gz_names(path: &Path) -> Vec<String> {
    let mut archive = tar::Archive::new(GzDecoder::new(File::open(path).unwrap()));
    let mut names: Vec<String> = archive
        .entries()
        .unwrap()
        .map(|entry| {
            entry
                .unwrap()
                .path()
                .unwrap()
                .to_string_lossy()
                .trim_end_matches('/')
                .to_string()
        })
        .collect();
    names.sort();
    names
}

#[test]
fn test_windows_zip_root_is_the_folder_name() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_build_tree(root.path(), "win-rc1");

    let policy = policy_for(PlatformTarget::Windows64).unwrap();
    let path = archive(&dir, policy, root.path()).unwrap();

    assert_eq!(path, root.path().join("win-rc1.zip"));
    let names = zip_names(&path);
    assert!(names.iter().all(|name| name.starts_with("win-rc1/")));
    assert!(names.contains(&"win-rc1/game.bin".to_string()));
    assert!(names.contains(&"win-rc1/Data/level0".to_string()));
}

#[test]
fn test_web_zip_root_is_the_folder_contents() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_build_tree(root.path(), "web-demo");
    fs::write(dir.join("index.html"), "<html></html>").unwrap();

    let policy = policy_for(PlatformTarget::WebGl).unwrap();
    let path = archive(&dir, policy, root.path()).unwrap();

    assert_eq!(path, root.path().join("web-demo.zip"));
    let names = zip_names(&path);
    // No entry is nested under the folder name; the entry page sits at
    // the archive root, matching `ls web-demo/`
    assert!(names.iter().all(|name| !name.starts_with("web-demo")));
    assert!(names.contains(&"index.html".to_string()));
    assert!(names.contains(&"Data/level0".to_string()));
}

#[test]
fn test_tar_gz_entries_are_relative_to_the_build_root() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_build_tree(root.path(), "linux-rc1");

    let policy = policy_for(PlatformTarget::Linux64).unwrap();
    let path = archive(&dir, policy, root.path()).unwrap();

    assert_eq!(path, root.path().join("linux-rc1.tar.gz"));
    let root_name = root.path().file_name().unwrap().to_string_lossy().to_string();
    let names = tar_gz_names(&path);
    assert!(names.iter().all(|name| name.starts_with("linux-rc1")));
    assert!(names.iter().all(|name| !name.contains(&root_name)));
    assert!(names.contains(&"linux-rc1/game.bin".to_string()));
    assert!(names.contains(&"linux-rc1/Data/level1".to_string()));
}

#[test]
fn test_nested_output_folder_keeps_subpath_in_tar() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_build_tree(root.path(), "release/linux");

    let policy = policy_for(PlatformTarget::Linux64).unwrap();
    let path = archive(&dir, policy, root.path()).unwrap();

    assert_eq!(path, root.path().join("release/linux.tar.gz"));
    let names = tar_gz_names(&path);
    assert!(names.iter().all(|name| name.starts_with("release/linux")));
}

#[test]
fn test_stale_archive_is_replaced() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_build_tree(root.path(), "win-rc1");

    let stale = root.path().join("win-rc1.zip");
    fs::write(&stale, b"not a zip at all").unwrap();

    let policy = policy_for(PlatformTarget::Windows).unwrap();
    let path = archive(&dir, policy, root.path()).unwrap();

    assert_eq!(path, stale);
    // Readable as a real archive again, no first-run leftovers
    assert!(zip_names(&path).contains(&"win-rc1/game.bin".to_string()));
}

#[test]
fn test_repackaging_is_structurally_equivalent() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_build_tree(root.path(), "mac-rc1");

    let policy = policy_for(PlatformTarget::MacOs).unwrap();
    let first = archive(&dir, policy, root.path()).unwrap();
    let first_names = tar_gz_names(&first);

    let second = archive(&dir, policy, root.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(tar_gz_names(&second), first_names);
}

#[test]
fn test_output_outside_build_root_is_rejected() {
    let root = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let dir = make_build_tree(elsewhere.path(), "stray");

    let policy = policy_for(PlatformTarget::Linux64).unwrap();
    let err = archive(&dir, policy, root.path()).unwrap_err();

    assert!(matches!(err, ArchiveError::OutsideBuildRoot { .. }));
}
