//! Build command - run the pipeline for one profile by index

use anyhow::{bail, Result};
use colored::Colorize;
use shipyard_build::Pipeline;
use shipyard_config::paths;
use std::path::Path;

/// Run the build command
pub fn run(project: &Path, index: usize, engine: &Path, modules: Option<&Path>) -> Result<()> {
    let profiles = super::load_profiles(project)?;

    let Some(profile) = profiles.get(index) else {
        bail!(
            "no profile at index {} ({} configured; see `shipyard list`)",
            index,
            profiles.len()
        );
    };

    let scenes = super::load_scenes(project)?;
    let engine = super::make_engine(engine, project, modules);
    let pipeline = Pipeline::new(engine, paths::build_root(project)).with_scenes(scenes);

    println!(
        "Building {} ({})...",
        profile.folder.bold(),
        profile.target
    );

    match pipeline.run(profile) {
        Ok(built) => {
            println!(
                "{} {}",
                "Packaged".green().bold(),
                built.archive_path.display()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {} failed: {}", "error:".red().bold(), err.stage(), err);
            bail!("build failed for {}", profile.folder);
        }
    }
}
