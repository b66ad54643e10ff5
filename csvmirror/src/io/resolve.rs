//! Path resolution against the working directory and the install root.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::path::normalize;

/// Resolves user-supplied paths, falling back to the directory that holds
/// the running executable.
///
/// Resolution only reports existence; it never creates anything.
#[derive(Debug, Clone)]
pub struct PathResolver {
    install_root: PathBuf,
}

impl PathResolver {
    pub fn new(install_root: impl Into<PathBuf>) -> Self {
        Self {
            install_root: install_root.into(),
        }
    }

    /// Use the directory of the current executable as the install root.
    pub fn from_current_exe() -> Result<Self> {
        let exe = env::current_exe().context("locate current executable")?;
        let exe = exe.canonicalize().unwrap_or(exe);
        let root = exe
            .parent()
            .with_context(|| format!("executable has no parent {}", exe.display()))?;
        Ok(Self::new(root))
    }

    /// Normalize `path` and, when `must_exist` is set, check that it exists.
    ///
    /// With `must_exist == false` the filesystem is never consulted. With
    /// `must_exist == true`, `None` means the path exists neither as given
    /// nor relative to the install root. A path found only under the install
    /// root is returned joined onto it, not as the bare relative path.
    pub fn resolve(&self, path: &Path, must_exist: bool) -> Option<PathBuf> {
        let fixed = normalize(path);
        if !must_exist || fixed.exists() {
            return Some(fixed);
        }

        let under_root = self.install_root.join(&fixed);
        if under_root.exists() {
            debug!(path = %fixed.display(), root = %self.install_root.display(), "resolved under install root");
            return Some(normalize(&under_root));
        }
        None
    }

    /// Resolution without an existence requirement.
    pub fn normalize(&self, path: &Path) -> PathBuf {
        normalize(path)
    }
}
