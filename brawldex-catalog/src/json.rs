//! Loading and replacing JSON record documents.
//!
//! A document is a JSON array of objects. Anything else (missing file,
//! unreadable file, malformed JSON, non-array root) is an error; an empty
//! list is only ever returned for a document that really is `[]`.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Could not serialize records for {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },
    #[error("I/O error writing {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

impl CatalogError {
    /// True for failures that mean the document can't be served right now.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Parse { .. })
    }
}

/// Load every record from a JSON array document.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let records: Vec<T> = serde_json::from_str(&contents).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Replace a document with `records`, pretty-printed with two-space indent.
///
/// The data is written to a temporary file next to `path` and renamed over
/// it, so a concurrent reader sees either the old or the new document.
/// Parent directories are created as needed.
pub fn write_records_atomic<T: Serialize>(path: &Path, records: &[T]) -> Result<(), CatalogError> {
    let write_err = |e: std::io::Error| CatalogError::Write {
        path: path.display().to_string(),
        source: e,
    };

    let mut body = serde_json::to_string_pretty(records).map_err(|e| CatalogError::Serialize {
        path: path.display().to_string(),
        source: e,
    })?;
    body.push('\n');

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(body.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    log::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
