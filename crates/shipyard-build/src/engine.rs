//! Build engine seam
//!
//! The platform compiler/linker is an external engine, not part of this
//! tool. The pipeline talks to it through [`BuildEngine`]: a cheap
//! installed-module query and one blocking build call. [`CommandEngine`]
//! adapts an engine installed on this machine via its batch-mode command
//! line; tests substitute their own implementations.

use crate::error::EngineError;
use crate::policy;
use shipyard_config::{BuildFlags, PlatformTarget};
use std::path::{Path, PathBuf};
use std::process::Command;

/// One build request handed to the engine
#[derive(Debug, Clone)]
pub struct BuildRequest<'a> {
    /// Target platform
    pub target: PlatformTarget,
    /// Artifact location: the executable path, or the output directory
    /// for targets that treat the directory as the artifact
    pub location: &'a Path,
    /// Scenes to include, in order
    pub scenes: &'a [String],
    /// Engine build options; bits that don't apply to the target are
    /// ignored by the engine
    pub flags: BuildFlags,
}

/// External build engine capability.
///
/// `is_module_installed` is a pure query with no side effects, cheap to
/// call repeatedly. `build_player` is a single blocking call with no
/// cancellation hook — once invoked it runs to completion or reports an
/// error.
pub trait BuildEngine {
    /// Whether platform support for `target` is installed
    fn is_module_installed(&self, target: PlatformTarget) -> bool;

    /// Build one player. The caller has already confirmed capability and
    /// removed any stale output at the destination.
    fn build_player(&self, request: &BuildRequest<'_>) -> Result<(), EngineError>;
}

impl<E: BuildEngine + ?Sized> BuildEngine for &E {
    fn is_module_installed(&self, target: PlatformTarget) -> bool {
        (**self).is_module_installed(target)
    }

    fn build_player(&self, request: &BuildRequest<'_>) -> Result<(), EngineError> {
        (**self).build_player(request)
    }
}

/// Adapter for an engine installed on this machine, driven through its
/// batch-mode command line.
pub struct CommandEngine {
    program: PathBuf,
    project_dir: PathBuf,
    modules_dir: PathBuf,
}

impl CommandEngine {
    /// Create an adapter for the engine binary at `program` building the
    /// project at `project_dir`. Installed modules are probed under the
    /// `PlaybackEngines` directory beside the binary unless overridden.
    pub fn new(program: impl Into<PathBuf>, project_dir: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let modules_dir = program
            .parent()
            .map(|dir| dir.join("PlaybackEngines"))
            .unwrap_or_else(|| PathBuf::from("PlaybackEngines"));

        Self {
            program,
            project_dir: project_dir.into(),
            modules_dir,
        }
    }

    /// Override the directory probed for installed support modules
    pub fn with_modules_dir(mut self, modules_dir: impl Into<PathBuf>) -> Self {
        self.modules_dir = modules_dir.into();
        self
    }
}

impl BuildEngine for CommandEngine {
    fn is_module_installed(&self, target: PlatformTarget) -> bool {
        policy::policy_for(target)
            .map(|policy| self.modules_dir.join(policy.module_dir).is_dir())
            .unwrap_or(false)
    }

    fn build_player(&self, request: &BuildRequest<'_>) -> Result<(), EngineError> {
        let policy = policy::policy_for(request.target).ok_or_else(|| {
            EngineError::new(format!("no engine target name for {}", request.target))
        })?;

        let mut command = Command::new(&self.program);
        command
            .arg("-batchmode")
            .arg("-quit")
            .arg("-projectPath")
            .arg(&self.project_dir)
            .arg("-buildTarget")
            .arg(policy.engine_name)
            .arg("-buildOutput")
            .arg(request.location);
        for scene in request.scenes {
            command.arg("-scene").arg(scene);
        }
        for (name, _) in request.flags.iter_names() {
            command.arg("-buildFlag").arg(name);
        }

        let output = command.output().map_err(|e| {
            EngineError::new(format!(
                "failed to launch {}: {}",
                self.program.display(),
                e
            ))
        })?;

        if output.status.success() {
            return Ok(());
        }

        // Engine diagnostics end up on stderr; surface the last line
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("no diagnostic output");
        Err(EngineError::new(format!(
            "engine exited with {}: {}",
            output.status, detail
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_module_probe() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("PlaybackEngines/WindowsStandaloneSupport")).unwrap();
        fs::write(dir.path().join("engine"), "").unwrap();

        let engine = CommandEngine::new(dir.path().join("engine"), dir.path());

        assert!(engine.is_module_installed(PlatformTarget::Windows));
        assert!(engine.is_module_installed(PlatformTarget::Windows64));
        assert!(!engine.is_module_installed(PlatformTarget::Linux64));
    }

    #[test]
    fn test_unmapped_targets_never_installed() {
        let dir = tempfile::tempdir().unwrap();
        let engine = CommandEngine::new(dir.path().join("engine"), dir.path());

        assert!(!engine.is_module_installed(PlatformTarget::None));
        assert!(!engine.is_module_installed(PlatformTarget::Other(9)));
    }

    #[test]
    fn test_modules_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("modules/LinuxStandaloneSupport")).unwrap();

        let engine = CommandEngine::new("/opt/engine/engine", dir.path())
            .with_modules_dir(dir.path().join("modules"));

        assert!(engine.is_module_installed(PlatformTarget::Linux64));
        assert!(!engine.is_module_installed(PlatformTarget::WebGl));
    }
}
