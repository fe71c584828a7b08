//! Build output packaging
//!
//! Compresses a finished build directory into its distributable archive.
//! The layout depends on the target's policy:
//! - `ZipTree` — the directory is one tree whose root entry is the folder
//!   name; extracting reproduces the folder.
//! - `ZipContents` — the directory's contents sit at the archive root with
//!   no wrapping level; downstream hosting expects the entry page there.
//! - `TarGz` — entry names are relative to the build root, so the archive
//!   is relocatable.

use crate::error::ArchiveError;
use crate::policy::{ArchiveKind, TargetPolicy};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Compress the build at `output_dir` per the target's policy.
///
/// Any pre-existing archive at the destination is deleted before writing
/// begins, so re-packaging the same profile is idempotent. On failure a
/// partially written file may remain; the next run's delete step removes
/// it before retrying.
pub fn archive(
    output_dir: &Path,
    policy: &TargetPolicy,
    build_root: &Path,
) -> Result<PathBuf, ArchiveError> {
    let destination = archive_destination(output_dir, policy.archive);

    if destination.exists() {
        fs::remove_file(&destination).map_err(|e| ArchiveError::RemoveStale {
            path: destination.clone(),
            source: e,
        })?;
    }

    match policy.archive {
        ArchiveKind::ZipContents => write_zip(output_dir, output_dir, &destination)?,
        ArchiveKind::ZipTree => {
            let base = output_dir.parent().unwrap_or(output_dir);
            write_zip(output_dir, base, &destination)?;
        }
        ArchiveKind::TarGz => write_tar_gz(output_dir, build_root, &destination)?,
    }

    Ok(destination)
}

/// Destination path: the archive suffix appended to the directory name.
/// Appended rather than substituted, so a dotted folder name like `v1.2`
/// stays intact.
pub fn archive_destination(output_dir: &Path, kind: ArchiveKind) -> PathBuf {
    let mut name = OsString::from(output_dir.as_os_str());
    name.push(kind.suffix());
    PathBuf::from(name)
}

/// Write a deflate zip of `dir`. Entry names are relative to `base`: the
/// directory itself puts its contents at the archive root, its parent
/// makes the folder name the root entry.
fn write_zip(dir: &Path, base: &Path, destination: &Path) -> Result<(), ArchiveError> {
    let file = File::create(destination).map_err(|e| ArchiveError::Create {
        path: destination.to_path_buf(),
        source: e,
    })?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| ArchiveError::Walk {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let rel = entry.path().strip_prefix(base).map_err(|e| {
            ArchiveError::Append {
                name: entry.path().display().to_string(),
                source: io::Error::other(e),
            }
        })?;
        if rel.as_os_str().is_empty() {
            // the base directory itself
            continue;
        }

        let name = rel.to_string_lossy().replace('\\', "/");
        if entry.file_type().is_dir() {
            zip.add_directory(name, options)?;
        } else {
            zip.start_file(name.as_str(), options)?;
            let mut source = File::open(entry.path()).map_err(|e| ArchiveError::Append {
                name: name.clone(),
                source: e,
            })?;
            io::copy(&mut source, &mut zip).map_err(|e| ArchiveError::Append {
                name: name.clone(),
                source: e,
            })?;
        }
    }

    zip.finish()?;
    Ok(())
}

/// Write a gzip tar of `dir` with every entry name relative to
/// `build_root` (the root prefix is stripped from stored names).
fn write_tar_gz(dir: &Path, build_root: &Path, destination: &Path) -> Result<(), ArchiveError> {
    let rel = dir
        .strip_prefix(build_root)
        .map_err(|_| ArchiveError::OutsideBuildRoot {
            path: dir.to_path_buf(),
        })?;

    let file = File::create(destination).map_err(|e| ArchiveError::Create {
        path: destination.to_path_buf(),
        source: e,
    })?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    builder
        .append_dir_all(rel, dir)
        .map_err(|e| ArchiveError::Append {
            name: rel.display().to_string(),
            source: e,
        })?;

    let encoder = builder.into_inner().map_err(|e| ArchiveError::Finish {
        path: destination.to_path_buf(),
        source: e,
    })?;
    encoder.finish().map_err(|e| ArchiveError::Finish {
        path: destination.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_appends_suffix() {
        assert_eq!(
            archive_destination(Path::new("/b/web-demo"), ArchiveKind::ZipContents),
            Path::new("/b/web-demo.zip")
        );
        assert_eq!(
            archive_destination(Path::new("/b/linux-rc1"), ArchiveKind::TarGz),
            Path::new("/b/linux-rc1.tar.gz")
        );
    }

    #[test]
    fn test_destination_keeps_dotted_folder_names() {
        assert_eq!(
            archive_destination(Path::new("/b/game-v1.2"), ArchiveKind::ZipTree),
            Path::new("/b/game-v1.2.zip")
        );
    }
}
