//! Core types for brawldex.
//!
//! This crate owns the slug codec that turns display names into URL path
//! segments, the map and brawler record models, and the filters used by
//! listing pages. It has no I/O; loading documents lives in
//! `brawldex-catalog`.

pub mod filter;
pub mod index;
pub mod record;
pub mod slug;

pub use filter::{ALL_SENTINEL, Filter, distinct_values};
pub use index::{SlugIndex, SlugIssue};
pub use record::{BrawlerRecord, MapRecord, Record, Slugged};
pub use slug::{is_canonical, resolve, slugify};
