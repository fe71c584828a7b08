//! Platform targets recognized by the build pipeline

use serde::{Deserialize, Serialize};

/// Platform a build profile targets.
///
/// The numeric values match the build engine's own target enumeration, so
/// settings written by this tool stay readable by anything else that speaks
/// that format. The engine defines far more platforms than the pipeline can
/// package; unrecognized values survive a load/save round trip through
/// [`PlatformTarget::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum PlatformTarget {
    /// No platform selected yet
    None,
    /// macOS standalone player
    MacOs,
    /// 32-bit Windows standalone player
    Windows,
    /// Android application package
    Android,
    /// 64-bit Windows standalone player
    Windows64,
    /// Browser build
    WebGl,
    /// 64-bit Linux standalone player
    Linux64,
    /// A target the engine knows but this tool has no packaging rules for
    Other(u32),
}

impl PlatformTarget {
    /// Whether no platform has been chosen for this profile yet.
    ///
    /// The unset sentinel is a valid stored state and must not be reported
    /// as a missing engine module.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl Default for PlatformTarget {
    fn default() -> Self {
        Self::None
    }
}

impl From<u32> for PlatformTarget {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::None,
            2 => Self::MacOs,
            5 => Self::Windows,
            13 => Self::Android,
            19 => Self::Windows64,
            20 => Self::WebGl,
            24 => Self::Linux64,
            other => Self::Other(other),
        }
    }
}

impl From<PlatformTarget> for u32 {
    fn from(target: PlatformTarget) -> Self {
        match target {
            PlatformTarget::None => 0,
            PlatformTarget::MacOs => 2,
            PlatformTarget::Windows => 5,
            PlatformTarget::Android => 13,
            PlatformTarget::Windows64 => 19,
            PlatformTarget::WebGl => 20,
            PlatformTarget::Linux64 => 24,
            PlatformTarget::Other(value) => value,
        }
    }
}

impl std::fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::MacOs => write!(f, "macOS"),
            Self::Windows => write!(f, "Windows"),
            Self::Android => write!(f, "Android"),
            Self::Windows64 => write!(f, "Windows64"),
            Self::WebGl => write!(f, "WebGL"),
            Self::Linux64 => write!(f, "Linux64"),
            Self::Other(value) => write!(f, "unknown target {}", value),
        }
    }
}
