//! Pipeline orchestration
//!
//! Runs one profile through the stage sequence: capability check → path
//! resolution → stale-output cleanup → engine build → packaging. A stage
//! failure aborts the remaining stages; batch runs attempt every default
//! profile and isolate failures per profile.

use crate::archive;
use crate::engine::{BuildEngine, BuildRequest};
use crate::error::{PipelineError, PipelineResult};
use crate::policy;
use crate::resolve::{self, ResolvedPaths};
use shipyard_config::{BuildProfile, PlatformTarget};
use std::fs;
use std::path::{Path, PathBuf};

/// Successful outcome of one profile's run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedBuild {
    /// Directory the engine wrote the build into
    pub output_dir: PathBuf,
    /// The distributable archive
    pub archive_path: PathBuf,
}

/// Outcome of one profile within a batch run
#[derive(Debug)]
pub struct BatchEntry {
    /// The profile's output folder, its identity in reports
    pub folder: String,
    /// The profile's target
    pub target: PlatformTarget,
    /// This profile's result; a failure never aborts the batch
    pub result: PipelineResult<ArchivedBuild>,
}

/// Sequences the build-and-package stages against one build engine.
///
/// Strictly sequential and single-threaded: the engine is a single shared
/// stateful resource, so profiles are never built concurrently. The engine
/// call blocks with no cancellation hook; an external supervisor imposes
/// timeouts by terminating the whole process.
pub struct Pipeline<E> {
    engine: E,
    build_root: PathBuf,
    scenes: Vec<String>,
}

impl<E: BuildEngine> Pipeline<E> {
    /// Create a pipeline writing all output under `build_root`
    pub fn new(engine: E, build_root: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            build_root: build_root.into(),
            scenes: Vec::new(),
        }
    }

    /// Set the scene list handed to the engine
    pub fn with_scenes(mut self, scenes: Vec<String>) -> Self {
        self.scenes = scenes;
        self
    }

    /// The root directory all build output lands under
    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    /// Run one profile to a packaged archive.
    ///
    /// Stage order and failure handling:
    /// 1. capability — a concrete target without its engine module fails
    ///    here with nothing touched; the unset sentinel falls through to
    ///    resolution instead, which rejects it without a missing-module
    ///    report.
    /// 2. resolve — empty folder or unmapped target, nothing touched.
    /// 3. clean — a leftover output tree from a previous run is deleted;
    ///    the build root is created on demand.
    /// 4. build — one blocking engine call; on failure the archive stage
    ///    never runs.
    /// 5. archive — stale archive deleted, new one written per policy.
    pub fn run(&self, profile: &BuildProfile) -> PipelineResult<ArchivedBuild> {
        if !profile.target.is_unset() && !self.engine.is_module_installed(profile.target) {
            return Err(PipelineError::ModuleMissing {
                target: profile.target,
            });
        }

        let ResolvedPaths {
            output_dir,
            build_location,
        } = resolve::resolve(&self.build_root, profile)?;
        let policy = policy::policy_for(profile.target).ok_or(PipelineError::UnknownTarget {
            target: profile.target,
        })?;

        if output_dir.exists() {
            fs::remove_dir_all(&output_dir)
                .map_err(|e| PipelineError::clean(&output_dir, e))?;
        }
        fs::create_dir_all(&self.build_root)
            .map_err(|e| PipelineError::clean(&self.build_root, e))?;

        let request = BuildRequest {
            target: profile.target,
            location: &build_location,
            scenes: &self.scenes,
            flags: profile.flags,
        };
        self.engine
            .build_player(&request)
            .map_err(|e| PipelineError::Build {
                folder: profile.folder.clone(),
                message: e.to_string(),
            })?;

        let archive_path = archive::archive(&output_dir, policy, &self.build_root).map_err(
            |e| PipelineError::Archive {
                folder: profile.folder.clone(),
                source: e,
            },
        )?;

        Ok(ArchivedBuild {
            output_dir,
            archive_path,
        })
    }

    /// Run every profile marked as default, sequentially, in stored order.
    /// Each profile is attempted and reported independently.
    pub fn run_defaults(&self, profiles: &[BuildProfile]) -> Vec<BatchEntry> {
        profiles
            .iter()
            .filter(|profile| profile.is_default)
            .map(|profile| BatchEntry {
                folder: profile.folder.clone(),
                target: profile.target,
                result: self.run(profile),
            })
            .collect()
    }
}
