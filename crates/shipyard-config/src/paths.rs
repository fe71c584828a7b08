//! Fixed project-relative locations
//!
//! Every path the tool touches hangs off the project root at a fixed
//! offset. Nothing here is persisted; the paths are recomputed per
//! invocation.

use std::path::{Path, PathBuf};

/// Directory under the project root that receives build output
pub const BUILD_DIR: &str = "Builds";

/// Profile list document, relative to the project root
pub const PROFILES_FILE: &str = "ProjectSettings/BuildProfiles.json";

/// Scene list document, relative to the project root
pub const SCENES_FILE: &str = "ProjectSettings/SceneList.json";

/// Root directory all build output lands under. Created on demand by the
/// pipeline, not here.
pub fn build_root(project_root: &Path) -> PathBuf {
    project_root.join(BUILD_DIR)
}

/// Location of the profile list document
pub fn profiles_path(project_root: &Path) -> PathBuf {
    project_root.join(PROFILES_FILE)
}

/// Location of the scene list document
pub fn scenes_path(project_root: &Path) -> PathBuf {
    project_root.join(SCENES_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_hang_off_project_root() {
        let root = Path::new("/work/game");
        assert_eq!(build_root(root), Path::new("/work/game/Builds"));
        assert_eq!(
            profiles_path(root),
            Path::new("/work/game/ProjectSettings/BuildProfiles.json")
        );
        assert_eq!(
            scenes_path(root),
            Path::new("/work/game/ProjectSettings/SceneList.json")
        );
    }
}
