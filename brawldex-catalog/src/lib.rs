//! JSON document access for the brawldex catalog.
//!
//! The site treats its documents as read-only sources of truth: every page
//! load re-reads the relevant file. The only writer is the brawler refresh,
//! which replaces a document atomically so readers never see a partial file.

pub mod data_dir;
pub mod json;

pub use data_dir::{BRAWLERS_FILE, DataDir, MAPS_FILE};
pub use json::{CatalogError, load_records, write_records_atomic};
