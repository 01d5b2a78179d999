//! Standard data directory layout.
//!
//! ```text
//! data_dir/
//!   maps.json       hand-maintained
//!   brawlers.json   written by `brawldex refresh`
//! ```

use std::path::{Path, PathBuf};

use brawldex_core::{BrawlerRecord, MapRecord};

use crate::json::{CatalogError, load_records, write_records_atomic};

pub const MAPS_FILE: &str = "maps.json";
pub const BRAWLERS_FILE: &str = "brawlers.json";

/// A directory holding the backing documents.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn maps_path(&self) -> PathBuf {
        self.root.join(MAPS_FILE)
    }

    pub fn brawlers_path(&self) -> PathBuf {
        self.root.join(BRAWLERS_FILE)
    }

    pub fn load_maps(&self) -> Result<Vec<MapRecord>, CatalogError> {
        load_records(&self.maps_path())
    }

    pub fn load_brawlers(&self) -> Result<Vec<BrawlerRecord>, CatalogError> {
        load_records(&self.brawlers_path())
    }

    /// Atomically replace the brawlers document.
    pub fn write_brawlers(&self, brawlers: &[BrawlerRecord]) -> Result<PathBuf, CatalogError> {
        let path = self.brawlers_path();
        write_records_atomic(&path, brawlers)?;
        Ok(path)
    }
}
