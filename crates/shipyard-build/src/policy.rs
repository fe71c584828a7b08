//! Per-target packaging policy
//!
//! All per-target branching lives in this one lookup table: the executable
//! extension, the archive layout, the engine module probed by the
//! capability check, and the engine's batch-mode target name. The
//! orchestrator never matches on targets directly, so adding a platform is
//! a new table row.

use shipyard_config::PlatformTarget;

/// How a finished build is packaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    /// Zip whose root entries are the contents of the output directory
    ZipContents,
    /// Zip containing the output directory as a single top-level tree
    ZipTree,
    /// Gzip-compressed tar with entry names relative to the build root
    TarGz,
}

impl ArchiveKind {
    /// Suffix appended to the output directory path to form the
    /// destination archive path
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::ZipContents | Self::ZipTree => ".zip",
            Self::TarGz => ".tar.gz",
        }
    }
}

/// Packaging and naming rules for one platform target
#[derive(Debug, Clone, Copy)]
pub struct TargetPolicy {
    /// Canonical executable extension, or `None` when the engine treats
    /// the output directory itself as the artifact location
    pub executable_extension: Option<&'static str>,
    /// Archive layout for this target
    pub archive: ArchiveKind,
    /// Support-module directory probed by the capability check
    pub module_dir: &'static str,
    /// Target name understood by the engine's batch mode
    pub engine_name: &'static str,
}

const WINDOWS: TargetPolicy = TargetPolicy {
    executable_extension: Some("exe"),
    archive: ArchiveKind::ZipTree,
    module_dir: "WindowsStandaloneSupport",
    engine_name: "Win",
};

const WINDOWS64: TargetPolicy = TargetPolicy {
    executable_extension: Some("exe"),
    archive: ArchiveKind::ZipTree,
    module_dir: "WindowsStandaloneSupport",
    engine_name: "Win64",
};

const MACOS: TargetPolicy = TargetPolicy {
    executable_extension: Some("app"),
    archive: ArchiveKind::TarGz,
    module_dir: "MacStandaloneSupport",
    engine_name: "OSXUniversal",
};

const LINUX64: TargetPolicy = TargetPolicy {
    executable_extension: Some("x86_64"),
    archive: ArchiveKind::TarGz,
    module_dir: "LinuxStandaloneSupport",
    engine_name: "Linux64",
};

const ANDROID: TargetPolicy = TargetPolicy {
    executable_extension: Some("apk"),
    archive: ArchiveKind::TarGz,
    module_dir: "AndroidPlayer",
    engine_name: "Android",
};

const WEBGL: TargetPolicy = TargetPolicy {
    executable_extension: None,
    archive: ArchiveKind::ZipContents,
    module_dir: "WebGLSupport",
    engine_name: "WebGL",
};

/// Look up the packaging policy for a target.
///
/// `None` for the unset sentinel and for platforms this tool has no
/// packaging rules for; callers treat that as an unrecoverable
/// configuration error, raised before the engine is invoked.
pub fn policy_for(target: PlatformTarget) -> Option<&'static TargetPolicy> {
    match target {
        PlatformTarget::Windows => Some(&WINDOWS),
        PlatformTarget::Windows64 => Some(&WINDOWS64),
        PlatformTarget::MacOs => Some(&MACOS),
        PlatformTarget::Linux64 => Some(&LINUX64),
        PlatformTarget::Android => Some(&ANDROID),
        PlatformTarget::WebGl => Some(&WEBGL),
        PlatformTarget::None | PlatformTarget::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_extensions() {
        assert_eq!(
            policy_for(PlatformTarget::Android).unwrap().executable_extension,
            Some("apk")
        );
        assert_eq!(
            policy_for(PlatformTarget::Windows).unwrap().executable_extension,
            Some("exe")
        );
        assert_eq!(
            policy_for(PlatformTarget::Windows64).unwrap().executable_extension,
            Some("exe")
        );
        assert_eq!(
            policy_for(PlatformTarget::MacOs).unwrap().executable_extension,
            Some("app")
        );
        assert_eq!(
            policy_for(PlatformTarget::Linux64).unwrap().executable_extension,
            Some("x86_64")
        );
        assert_eq!(
            policy_for(PlatformTarget::WebGl).unwrap().executable_extension,
            None
        );
    }

    #[test]
    fn test_archive_kinds() {
        assert_eq!(
            policy_for(PlatformTarget::Windows).unwrap().archive,
            ArchiveKind::ZipTree
        );
        assert_eq!(
            policy_for(PlatformTarget::Windows64).unwrap().archive,
            ArchiveKind::ZipTree
        );
        assert_eq!(
            policy_for(PlatformTarget::WebGl).unwrap().archive,
            ArchiveKind::ZipContents
        );
        assert_eq!(
            policy_for(PlatformTarget::Linux64).unwrap().archive,
            ArchiveKind::TarGz
        );
        assert_eq!(
            policy_for(PlatformTarget::MacOs).unwrap().archive,
            ArchiveKind::TarGz
        );
        assert_eq!(
            policy_for(PlatformTarget::Android).unwrap().archive,
            ArchiveKind::TarGz
        );
    }

    #[test]
    fn test_unmapped_targets_have_no_policy() {
        assert!(policy_for(PlatformTarget::None).is_none());
        assert!(policy_for(PlatformTarget::Other(9)).is_none());
    }

    #[test]
    fn test_archive_suffixes() {
        assert_eq!(ArchiveKind::ZipTree.suffix(), ".zip");
        assert_eq!(ArchiveKind::ZipContents.suffix(), ".zip");
        assert_eq!(ArchiveKind::TarGz.suffix(), ".tar.gz");
    }
}
