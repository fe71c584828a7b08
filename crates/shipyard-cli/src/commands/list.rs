//! List command - show the configured profiles in stored order

use anyhow::Result;
use colored::Colorize;
use shipyard_config::{paths, ProfileStore};
use std::path::Path;

/// Run the list command
pub fn run(project: &Path) -> Result<()> {
    let profiles = super::load_profiles(project)?;

    if profiles.is_empty() {
        println!("No build profiles configured.");
    } else {
        for (index, profile) in profiles.iter().enumerate() {
            let marker = if profile.is_default {
                "[default]".green().to_string()
            } else {
                String::new()
            };
            println!(
                "{:>3}  {:<24} {:<12} {}",
                index,
                profile.folder,
                profile.target.to_string(),
                marker
            );
        }
    }

    let store = ProfileStore::for_project(project);
    println!();
    println!("{}", format!("settings: {}", store.path().display()).dimmed());
    println!(
        "{}",
        format!("output:   {}", paths::build_root(project).display()).dimmed()
    );

    Ok(())
}
