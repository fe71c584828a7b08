//! Build-and-package pipeline
//!
//! Turns one build profile into a distributable archive:
//! - Capability check against the engine's installed platform modules
//! - Output path resolution with per-target naming rules
//! - Stale-output cleanup, one blocking engine build call
//! - Per-target packaging (zip or gzip-compressed tar)
//! - Sequential batch runs with per-profile failure isolation

pub mod archive;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod policy;
pub mod resolve;

// Re-export main types
pub use archive::{archive, archive_destination};
pub use engine::{BuildEngine, BuildRequest, CommandEngine};
pub use error::{ArchiveError, EngineError, PipelineError, PipelineResult, Stage};
pub use pipeline::{ArchivedBuild, BatchEntry, Pipeline};
pub use policy::{policy_for, ArchiveKind, TargetPolicy};
pub use resolve::{resolve, ResolvedPaths};
