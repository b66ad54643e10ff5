//! Startup validation of the four top-level paths.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::io::resolve::PathResolver;
use crate::logging::LogContext;

/// Raw paths as given on the command line.
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub csv: PathBuf,
    pub src: PathBuf,
    pub dest: PathBuf,
    pub log: PathBuf,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{label}: not found!")]
    NotFound { label: &'static str, path: PathBuf },
    #[error("create destination root {path}")]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Validated paths, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub manifest_path: PathBuf,
    pub source_root: PathBuf,
    pub dest_root: PathBuf,
    pub log_path: PathBuf,
}

impl RunContext {
    /// Resolve and check the run parameters.
    ///
    /// The manifest and source root must exist. The destination root is
    /// created if missing; the log file is left for the copier to create.
    pub fn validate(
        args: &RunArgs,
        resolver: &PathResolver,
        log: &LogContext,
    ) -> Result<Self, StartupError> {
        log.info(format_args!("CSV Path: {}", args.csv.display()));
        log.info(format_args!("Source Path: {}", args.src.display()));
        log.info(format_args!("Destination Path: {}", args.dest.display()));
        log.info(format_args!("Log Path: {}", args.log.display()));

        let manifest_path = require(resolver, log, "CSV Path", &args.csv)?;
        let source_root = require(resolver, log, "Source Path", &args.src)?;
        let dest_root = resolver.normalize(&args.dest);
        let log_path = resolver.normalize(&args.log);

        if !dest_root.exists() {
            debug!(path = %dest_root.display(), "creating destination root");
            fs::create_dir_all(&dest_root).map_err(|source| StartupError::CreateDestination {
                path: dest_root.clone(),
                source,
            })?;
        }

        Ok(Self {
            manifest_path,
            source_root,
            dest_root,
            log_path,
        })
    }
}

fn require(
    resolver: &PathResolver,
    log: &LogContext,
    label: &'static str,
    path: &Path,
) -> Result<PathBuf, StartupError> {
    resolver.resolve(path, true).ok_or_else(|| {
        log.error(format_args!("{label}: not found!"));
        StartupError::NotFound {
            label,
            path: path.to_path_buf(),
        }
    })
}
