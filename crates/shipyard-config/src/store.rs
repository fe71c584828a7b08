//! Profile list persistence
//!
//! The profile list is stored as a single JSON document: one object with a
//! `profiles` array, never a bare top-level array. Order is significant and
//! preserved — batch runs execute profiles in stored order.

use crate::error::{ConfigError, ConfigResult};
use crate::paths;
use crate::profile::BuildProfile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk document wrapper
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfileDocument {
    #[serde(default)]
    profiles: Vec<BuildProfile>,
}

/// Ordered profile list persisted at a fixed path.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Create a store backed by the given document path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the project's fixed settings location
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(paths::profiles_path(project_root))
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored profiles, in order.
    ///
    /// A missing document is an empty list, not an error. A malformed
    /// document is a recoverable [`ConfigError::Parse`]; callers log it and
    /// fall back to an empty list.
    pub fn load(&self) -> ConfigResult<Vec<BuildProfile>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json =
            fs::read_to_string(&self.path).map_err(|e| ConfigError::read(&self.path, e))?;
        let doc: ProfileDocument =
            serde_json::from_str(&json).map_err(|e| ConfigError::parse(&self.path, e))?;

        Ok(doc.profiles)
    }

    /// Save the profile list, creating parent directories as needed.
    pub fn save(&self, profiles: &[BuildProfile]) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::write(&self.path, e))?;
        }

        let doc = ProfileDocument {
            profiles: profiles.to_vec(),
        };
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| ConfigError::parse(&self.path, e))?;

        fs::write(&self.path, json).map_err(|e| ConfigError::write(&self.path, e))
    }
}
