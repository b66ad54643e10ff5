//! Copier configuration (optional TOML file passed with `--config`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Placeholder replaced by the thread count in [`MirrorConfig::thread_arg`].
pub const THREADS_PLACEHOLDER: &str = "{threads}";

/// Copier configuration (TOML).
///
/// Missing fields default to the Windows `robocopy` invocation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CopyConfig {
    pub mirror: MirrorConfig,
}

/// How the external mirror command is invoked for each folder.
///
/// The command line is `<program> <src> <dst> <args...> <thread_arg>`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MirrorConfig {
    /// Executable to run (looked up on `PATH`).
    pub program: String,

    /// Flags requesting mirror semantics and progress output.
    pub args: Vec<String>,

    /// Worker threads requested from the mirror tool.
    pub threads: u32,

    /// Flag template carrying the thread count, e.g. `/mt:{threads}`.
    pub thread_arg: String,

    /// Echo the mirror tool's stdout to the console while it runs.
    pub echo: bool,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            program: "robocopy".to_string(),
            args: vec!["/mir".to_string(), "/eta".to_string(), "/tee".to_string()],
            threads: 32,
            thread_arg: "/mt:{threads}".to_string(),
            echo: false,
        }
    }
}

impl MirrorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(anyhow!("mirror.program must be non-empty"));
        }
        if !(1..=128).contains(&self.threads) {
            return Err(anyhow!("mirror.threads must be within 1..=128"));
        }
        if !self.thread_arg.is_empty() && !self.thread_arg.contains(THREADS_PLACEHOLDER) {
            return Err(anyhow!(
                "mirror.thread_arg must contain {THREADS_PLACEHOLDER} or be empty"
            ));
        }
        Ok(())
    }

    /// Rendered thread flag, or `None` when `thread_arg` is empty.
    pub fn rendered_thread_arg(&self) -> Option<String> {
        if self.thread_arg.is_empty() {
            return None;
        }
        Some(
            self.thread_arg
                .replace(THREADS_PLACEHOLDER, &self.threads.to_string()),
        )
    }
}

impl CopyConfig {
    pub fn validate(&self) -> Result<()> {
        self.mirror.validate()
    }
}

/// Load config from an optional TOML file.
///
/// Without a path, returns `CopyConfig::default()`. An explicit path must be readable.
pub fn load_config(path: Option<&Path>) -> Result<CopyConfig> {
    let Some(path) = path else {
        let cfg = CopyConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    };
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CopyConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
