//! Open command - launch the platform file manager on the build root

use anyhow::{Context, Result};
use shipyard_config::paths;
use std::fs;
use std::path::Path;
use std::process::Command;

#[cfg(target_os = "macos")]
const FILE_MANAGER: &str = "open";
#[cfg(target_os = "windows")]
const FILE_MANAGER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const FILE_MANAGER: &str = "xdg-open";

/// Run the open command
pub fn run(project: &Path) -> Result<()> {
    let root = paths::build_root(project);
    fs::create_dir_all(&root)
        .with_context(|| format!("failed to create build folder {}", root.display()))?;

    Command::new(FILE_MANAGER)
        .arg(&root)
        .spawn()
        .with_context(|| format!("failed to open {}", root.display()))?;

    Ok(())
}
