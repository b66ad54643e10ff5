//! Test-only helpers: a recording mirror executor and temp folder trees.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tempfile::TempDir;

use crate::io::executor::{MirrorExecutor, MirrorOutput};
use crate::logging::LogContext;

/// Fixed audit identity for tests.
pub fn test_log() -> LogContext {
    LogContext::new("127.0.0.1", "tester")
}

/// Executor that records every `(src, dst)` pair instead of spawning a process.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: RefCell<Vec<(PathBuf, PathBuf)>>,
    fail: bool,
}

impl RecordingExecutor {
    /// Executor whose every call fails as if the mirror tool were missing.
    pub fn failing() -> Self {
        Self {
            calls: RefCell::default(),
            fail: true,
        }
    }

    /// Pairs passed to [`MirrorExecutor::execute`], in call order.
    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.borrow().clone()
    }

    /// Canned stdout produced for a given source folder.
    pub fn stdout_for(src: &Path) -> String {
        format!("mirrored {}\n", src.display())
    }
}

impl MirrorExecutor for RecordingExecutor {
    fn execute(&self, src: &Path, dst: &Path) -> Result<MirrorOutput> {
        if self.fail {
            return Err(anyhow!("mirror tool not found"));
        }
        self.calls
            .borrow_mut()
            .push((src.to_path_buf(), dst.to_path_buf()));
        Ok(MirrorOutput {
            exit_code: Some(0),
            stdout: Self::stdout_for(src).into_bytes(),
        })
    }
}

/// Temporary layout: `src/` with the given folders, plus unused
/// `dest/`, `folders.csv` and `copy.log` locations.
pub struct TestTree {
    temp: TempDir,
}

impl TestTree {
    pub fn new(source_folders: &[&str]) -> Result<Self> {
        let temp = tempfile::tempdir()?;
        let tree = Self { temp };
        fs::create_dir_all(tree.source_root())?;
        for folder in source_folders {
            fs::create_dir_all(tree.source_root().join(folder))?;
        }
        Ok(tree)
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn source_root(&self) -> PathBuf {
        self.path().join("src")
    }

    pub fn dest_root(&self) -> PathBuf {
        self.path().join("dest")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path().join("folders.csv")
    }

    pub fn log_path(&self) -> PathBuf {
        self.path().join("copy.log")
    }

    /// Write one manifest row per folder.
    pub fn write_manifest(&self, rows: &[&str]) -> Result<PathBuf> {
        let mut contents = String::new();
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        let path = self.manifest_path();
        fs::write(&path, contents)?;
        Ok(path)
    }
}
