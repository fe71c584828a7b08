/// Pipeline error types
use shipyard_config::PlatformTarget;
use std::path::PathBuf;
use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Stage of the pipeline a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Installed-module query
    CapabilityCheck,
    /// Output path resolution
    Resolve,
    /// Engine build call, including output cleanup gating it
    Build,
    /// Packaging
    Archive,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapabilityCheck => write!(f, "capability check"),
            Self::Resolve => write!(f, "resolve"),
            Self::Build => write!(f, "build"),
            Self::Archive => write!(f, "archive"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("build module for {target} is not installed")]
    ModuleMissing { target: PlatformTarget },

    #[error("profile has no output folder configured")]
    EmptyOutputFolder,

    #[error("no packaging rules for {target}")]
    UnknownTarget { target: PlatformTarget },

    #[error("failed to clean {path}: {source}")]
    Clean {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("build failed for {folder}: {message}")]
    Build { folder: String, message: String },

    #[error("failed to package {folder}: {source}")]
    Archive {
        folder: String,
        source: ArchiveError,
    },
}

impl PipelineError {
    /// Create a cleanup error with path context
    pub fn clean(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Clean {
            path: path.into(),
            source,
        }
    }

    /// The stage this failure aborted the pipeline in
    pub fn stage(&self) -> Stage {
        match self {
            Self::ModuleMissing { .. } => Stage::CapabilityCheck,
            Self::EmptyOutputFolder | Self::UnknownTarget { .. } => Stage::Resolve,
            Self::Clean { .. } | Self::Build { .. } => Stage::Build,
            Self::Archive { .. } => Stage::Archive,
        }
    }
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to create archive at {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to remove stale archive at {path}: {source}")]
    RemoveStale {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to add {name} to archive: {source}")]
    Append {
        name: String,
        source: std::io::Error,
    },

    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to finish archive at {path}: {source}")]
    Finish {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("output directory {path} is not under the build root")]
    OutsideBuildRoot { path: PathBuf },
}

/// Failure reported by the external build engine.
///
/// The engine's message is passed through verbatim; the pipeline attaches
/// the profile identity when it reports the failure.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
