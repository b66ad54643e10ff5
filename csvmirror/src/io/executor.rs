//! Executor abstraction for the external mirror tool.
//!
//! The [`MirrorExecutor`] trait decouples copy orchestration from the actual
//! transfer backend (by default `robocopy`). Tests use recording executors
//! that return canned output without spawning processes.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::io::config::MirrorConfig;
use crate::io::process::run_command;

/// What the mirror tool reported for one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorOutput {
    /// Exit code, `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard output, appended byte for byte to the run log.
    /// robocopy writes in the console code page, so this is not assumed to be UTF-8.
    pub stdout: Vec<u8>,
}

/// Abstraction over mirror backends.
pub trait MirrorExecutor {
    /// Make `dst` mirror `src`. Errors mean the tool could not be run at all;
    /// a tool that ran and failed is reported through [`MirrorOutput::exit_code`].
    fn execute(&self, src: &Path, dst: &Path) -> Result<MirrorOutput>;
}

/// Executor that spawns the configured mirror command.
pub struct CommandMirrorExecutor {
    config: MirrorConfig,
}

impl CommandMirrorExecutor {
    pub fn new(config: MirrorConfig) -> Self {
        Self { config }
    }

    /// Build the command line for one folder pair.
    pub fn command(&self, src: &Path, dst: &Path) -> Command {
        let mut cmd = Command::new(&self.config.program);
        cmd.arg(src).arg(dst).args(&self.config.args);
        if let Some(thread_arg) = self.config.rendered_thread_arg() {
            cmd.arg(thread_arg);
        }
        cmd
    }
}

impl MirrorExecutor for CommandMirrorExecutor {
    fn execute(&self, src: &Path, dst: &Path) -> Result<MirrorOutput> {
        debug!(src = %src.display(), dst = %dst.display(), "running mirror command");
        let cmd = self.command(src, dst);
        let output = run_command(cmd, self.config.echo)
            .with_context(|| format!("run {}", self.config.program))?;

        if !output.stderr.is_empty() {
            debug!(stderr = %String::from_utf8_lossy(&output.stderr), "mirror stderr");
        }
        if !output.status.success() {
            // robocopy uses non-zero codes for successful copies too.
            warn!(exit_code = ?output.status.code(), "mirror command exited non-zero");
        }

        Ok(MirrorOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
        })
    }
}
