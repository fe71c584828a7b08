//! Output path resolution
//!
//! Computes where one profile's build lands and what location the engine
//! is handed. Fails eagerly — an empty output folder or a target without
//! packaging rules is rejected before anything touches the filesystem or
//! the engine.

use crate::error::PipelineError;
use crate::policy;
use shipyard_config::BuildProfile;
use std::path::{Path, PathBuf};

/// Where the engine writes one profile's build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory receiving the build, `<build root>/<folder>`
    pub output_dir: PathBuf,
    /// Location handed to the engine: the executable path inside the
    /// output directory, or the directory itself for targets whose entry
    /// file the engine names on its own (always `index.html` for WebGL)
    pub build_location: PathBuf,
}

/// Resolve a profile against the build root.
pub fn resolve(build_root: &Path, profile: &BuildProfile) -> Result<ResolvedPaths, PipelineError> {
    if profile.folder.is_empty() {
        return Err(PipelineError::EmptyOutputFolder);
    }

    let policy = policy::policy_for(profile.target).ok_or(PipelineError::UnknownTarget {
        target: profile.target,
    })?;

    let output_dir = build_root.join(&profile.folder);
    let build_location = match policy.executable_extension {
        Some(extension) => output_dir.join(executable_filename(
            &profile.executable_name,
            extension,
        )),
        None => output_dir.clone(),
    };

    Ok(ResolvedPaths {
        output_dir,
        build_location,
    })
}

/// Executable filename with the target's canonical extension substituted
/// for any extension already on the base name.
pub fn executable_filename(name: &str, extension: &str) -> String {
    Path::new(name)
        .with_extension(extension)
        .to_string_lossy()
        .into_owned()
}
