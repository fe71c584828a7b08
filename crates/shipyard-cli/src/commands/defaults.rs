//! Build-defaults command - run every default profile sequentially

use anyhow::{bail, Result};
use colored::Colorize;
use shipyard_build::Pipeline;
use shipyard_config::paths;
use std::path::Path;

/// Run the build-defaults command
pub fn run(project: &Path, engine: &Path, modules: Option<&Path>) -> Result<()> {
    let profiles = super::load_profiles(project)?;
    let scenes = super::load_scenes(project)?;
    let engine = super::make_engine(engine, project, modules);
    let pipeline = Pipeline::new(engine, paths::build_root(project)).with_scenes(scenes);

    let entries = pipeline.run_defaults(&profiles);

    if entries.is_empty() {
        println!("No default profiles configured.");
        return Ok(());
    }

    let mut failures = 0;
    for entry in &entries {
        match &entry.result {
            Ok(built) => {
                println!(
                    "{} {} ({}) -> {}",
                    "ok".green().bold(),
                    entry.folder,
                    entry.target,
                    built.archive_path.display()
                );
            }
            Err(err) => {
                failures += 1;
                println!(
                    "{} {} ({}) at {}: {}",
                    "failed".red().bold(),
                    entry.folder,
                    entry.target,
                    err.stage(),
                    err
                );
            }
        }
    }

    println!();
    println!("{} built, {} failed", entries.len() - failures, failures);

    if failures > 0 {
        bail!("{} of {} default builds failed", failures, entries.len());
    }
    Ok(())
}
