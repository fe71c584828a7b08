//! Scene list settings
//!
//! The scene list belongs to the project editor; the pipeline only reads
//! it and hands it to the engine verbatim. Stored as `{"scenes": [...]}`
//! next to the profile list, with the same tolerant load semantics.

use crate::error::{ConfigError, ConfigResult};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct SceneDocument {
    #[serde(default)]
    scenes: Vec<String>,
}

/// Read-only view of the project's scene list.
pub struct SceneList {
    path: PathBuf,
}

impl SceneList {
    /// Create a scene list backed by the given document path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a scene list at the project's fixed settings location
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(paths::scenes_path(project_root))
    }

    /// Load the scene paths, in order. Missing document → empty list;
    /// malformed document → recoverable parse error.
    pub fn load(&self) -> ConfigResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json =
            fs::read_to_string(&self.path).map_err(|e| ConfigError::read(&self.path, e))?;
        let doc: SceneDocument =
            serde_json::from_str(&json).map_err(|e| ConfigError::parse(&self.path, e))?;

        Ok(doc.scenes)
    }
}
