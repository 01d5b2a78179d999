//! Brawler data refresh from BrawlAPI.
//!
//! Fetches the public brawler list, converts each entry into a
//! [`BrawlerRecord`](brawldex_core::BrawlerRecord) and atomically replaces
//! the brawlers document. Any failure before the write leaves the existing
//! document untouched.

pub mod client;
pub mod error;
pub mod refresh;
pub mod types;

pub use client::{BrawlApiClient, DEFAULT_API_URL};
pub use error::FetchError;
pub use refresh::{RefreshSummary, refresh_brawlers, to_record, to_records};
pub use types::{ApiBrawler, BrawlerListResponse, NamedRef};
