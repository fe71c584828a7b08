//! Build profiles

use crate::flags::BuildFlags;
use crate::target::PlatformTarget;
use serde::{Deserialize, Serialize};

/// One user-defined build job.
///
/// Profiles are created and edited by the settings surface, persisted as an
/// ordered list, and consumed read-only by the pipeline. The serde names
/// are the stored wire names and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildProfile {
    /// Output directory, relative to the build root
    pub folder: String,
    /// Executable base name; the target's canonical extension replaces any
    /// extension already on it. Ignored for WebGL, where the entry file is
    /// always `index.html`.
    #[serde(rename = "exeName", default)]
    pub executable_name: String,
    /// Whether this profile is included in a "build all defaults" run
    #[serde(rename = "defaultBuild", default)]
    pub is_default: bool,
    /// Platform to build for
    #[serde(default)]
    pub target: PlatformTarget,
    /// Engine build options
    #[serde(rename = "options", default)]
    pub flags: BuildFlags,
}

impl BuildProfile {
    /// Create a new profile for the given output folder
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            executable_name: String::new(),
            is_default: false,
            target: PlatformTarget::None,
            flags: BuildFlags::empty(),
        }
    }

    /// Set the executable base name
    pub fn with_executable_name(mut self, name: impl Into<String>) -> Self {
        self.executable_name = name.into();
        self
    }

    /// Set the target platform
    pub fn with_target(mut self, target: PlatformTarget) -> Self {
        self.target = target;
        self
    }

    /// Set the engine build options
    pub fn with_flags(mut self, flags: BuildFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Mark the profile as part of the default batch
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let profile = BuildProfile::new("linux-rc1")
            .with_executable_name("game")
            .with_target(PlatformTarget::Linux64)
            .with_default(true);

        assert_eq!(profile.folder, "linux-rc1");
        assert_eq!(profile.executable_name, "game");
        assert_eq!(profile.target, PlatformTarget::Linux64);
        assert!(profile.is_default);
        assert!(profile.flags.is_empty());
    }

    #[test]
    fn test_wire_names() {
        let profile = BuildProfile::new("web-demo")
            .with_executable_name("index")
            .with_target(PlatformTarget::WebGl)
            .with_flags(BuildFlags::DEVELOPMENT);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["folder"], "web-demo");
        assert_eq!(json["exeName"], "index");
        assert_eq!(json["defaultBuild"], false);
        assert_eq!(json["target"], 20);
        assert_eq!(json["options"], 1);
    }

    #[test]
    fn test_missing_optional_fields() {
        let profile: BuildProfile = serde_json::from_str(r#"{"folder": "win"}"#).unwrap();

        assert_eq!(profile.folder, "win");
        assert_eq!(profile.executable_name, "");
        assert!(!profile.is_default);
        assert_eq!(profile.target, PlatformTarget::None);
        assert!(profile.flags.is_empty());
    }
}
