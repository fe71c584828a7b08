pub mod build;
pub mod defaults;
pub mod list;
pub mod open;

use anyhow::{Context, Result};
use colored::Colorize;
use shipyard_build::CommandEngine;
use shipyard_config::{BuildProfile, ProfileStore, SceneList};
use std::path::Path;

/// Load the project's profiles, falling back to an empty list when the
/// settings document is malformed (a warning, not a failure).
pub(crate) fn load_profiles(project: &Path) -> Result<Vec<BuildProfile>> {
    let store = ProfileStore::for_project(project);
    match store.load() {
        Ok(profiles) => Ok(profiles),
        Err(err) if err.is_recoverable() => {
            eprintln!("{} {}", "warning:".yellow().bold(), err);
            Ok(Vec::new())
        }
        Err(err) => Err(err).context("failed to load build profiles"),
    }
}

/// Load the project's scene list with the same fallback semantics.
pub(crate) fn load_scenes(project: &Path) -> Result<Vec<String>> {
    match SceneList::for_project(project).load() {
        Ok(scenes) => Ok(scenes),
        Err(err) if err.is_recoverable() => {
            eprintln!("{} {}", "warning:".yellow().bold(), err);
            Ok(Vec::new())
        }
        Err(err) => Err(err).context("failed to load scene list"),
    }
}

/// Construct the engine adapter from the command-line selection.
pub(crate) fn make_engine(
    engine: &Path,
    project: &Path,
    modules: Option<&Path>,
) -> CommandEngine {
    let adapter = CommandEngine::new(engine, project);
    match modules {
        Some(dir) => adapter.with_modules_dir(dir),
        None => adapter,
    }
}
