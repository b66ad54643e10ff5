//! Manifest-driven copy orchestration.
//!
//! Entries are processed strictly in manifest order, one at a time. A missing
//! source folder is skipped; anything else that goes wrong (directory
//! creation, mirror launch, log writes, unreadable manifest rows) aborts the
//! run. There is no retry and no resume: a re-run starts from the first row.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::context::RunContext;
use crate::io::executor::MirrorExecutor;
use crate::io::manifest::Manifest;
use crate::io::resolve::PathResolver;
use crate::logging::LogContext;

/// What happened to one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Source folder did not exist; nothing was run.
    Skipped { folder: String },
    /// The mirror command ran for this folder.
    Copied {
        folder: String,
        source: PathBuf,
        destination: PathBuf,
        /// The destination directory was created before mirroring.
        created_destination: bool,
        exit_code: Option<i32>,
    },
}

impl EntryOutcome {
    pub fn folder(&self) -> &str {
        match self {
            Self::Skipped { folder } | Self::Copied { folder, .. } => folder,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Borrowed collaborators shared by every entry of a run.
pub struct CopyJob<'a, E: MirrorExecutor> {
    pub ctx: &'a RunContext,
    pub resolver: &'a PathResolver,
    pub executor: &'a E,
    pub log: &'a LogContext,
}

impl<E: MirrorExecutor> CopyJob<'_, E> {
    /// Open the log file for appending and copy every manifest entry.
    pub fn run(&self) -> Result<Vec<EntryOutcome>> {
        let manifest = Manifest::open(&self.ctx.manifest_path)?;
        let mut log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.ctx.log_path)
            .with_context(|| format!("open log file {}", self.ctx.log_path.display()))?;
        self.copy_manifest(&manifest, &mut log_file)
    }

    /// Copy every entry of `manifest` in order, appending mirror output to `sink`.
    pub fn copy_manifest<W: Write>(
        &self,
        manifest: &Manifest,
        sink: &mut W,
    ) -> Result<Vec<EntryOutcome>> {
        let mut outcomes = Vec::new();
        for entry in manifest.entries()? {
            let folder = entry?;
            outcomes.push(self.copy_folder(&folder, sink)?);
        }
        debug!(
            entries = outcomes.len(),
            skipped = outcomes.iter().filter(|o| o.is_skipped()).count(),
            "manifest finished"
        );
        Ok(outcomes)
    }

    /// Resolve, prepare and mirror a single folder.
    pub fn copy_folder<W: Write>(&self, folder: &str, sink: &mut W) -> Result<EntryOutcome> {
        let source = self
            .resolver
            .resolve(&self.ctx.source_root.join(folder), true);
        let destination = self.resolver.normalize(&self.ctx.dest_root.join(folder));

        let Some(source) = source else {
            self.log.warn(format_args!("Skipped Path: {folder}"));
            return Ok(EntryOutcome::Skipped {
                folder: folder.to_string(),
            });
        };

        self.log.info(format_args!("Copy Path: {folder}"));
        let created_destination = ensure_dir(&destination)?;

        let output = self
            .executor
            .execute(&source, &destination)
            .with_context(|| format!("mirror {}", folder))?;
        sink.write_all(&output.stdout)
            .and_then(|()| sink.flush())
            .with_context(|| format!("append mirror output for {}", folder))?;

        self.log.info(format_args!("Done Path: {folder}"));
        Ok(EntryOutcome::Copied {
            folder: folder.to_string(),
            source,
            destination,
            created_destination,
            exit_code: output.exit_code,
        })
    }
}

/// Create `path` (and parents) unless it already exists. Returns whether it was created.
fn ensure_dir(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))?;
    Ok(true)
}
