//! Folder manifest: a header-less, single-column CSV file.

use std::fs::File;
use std::path::PathBuf;

use csv::{Reader, ReaderBuilder, StringRecordsIntoIter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("open manifest {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("parse manifest {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("manifest {path} line {line}: expected 1 column, found {found}")]
    Columns {
        path: PathBuf,
        line: u64,
        found: usize,
    },
    #[error("manifest {path} line {line}: empty folder name")]
    EmptyRow { path: PathBuf, line: u64 },
}

/// Handle to a manifest file. Every call to [`Manifest::entries`] re-reads
/// the file from the start.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    /// Check that `path` can be opened as a manifest.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let manifest = Self { path: path.into() };
        manifest.reader()?;
        Ok(manifest)
    }

    /// Lazily yield folder names in file order.
    pub fn entries(&self) -> Result<ManifestEntries, ManifestError> {
        Ok(ManifestEntries {
            path: self.path.clone(),
            records: self.reader()?.into_records(),
        })
    }

    fn reader(&self) -> Result<Reader<File>, ManifestError> {
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|source| ManifestError::Open {
                path: self.path.clone(),
                source,
            })
    }
}

/// Iterator over manifest rows.
pub struct ManifestEntries {
    path: PathBuf,
    records: StringRecordsIntoIter<File>,
}

impl Iterator for ManifestEntries {
    type Item = Result<String, ManifestError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(source) => {
                return Some(Err(ManifestError::Parse {
                    path: self.path.clone(),
                    source,
                }));
            }
        };

        let line = record.position().map_or(0, |pos| pos.line());
        if record.len() != 1 {
            return Some(Err(ManifestError::Columns {
                path: self.path.clone(),
                line,
                found: record.len(),
            }));
        }
        // An empty name would join to the roots themselves and mirror the whole tree.
        if record[0].trim().is_empty() {
            return Some(Err(ManifestError::EmptyRow {
                path: self.path.clone(),
                line,
            }));
        }
        Some(Ok(record[0].to_string()))
    }
}
