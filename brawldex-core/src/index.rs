//! Precomputed slug lookup for a loaded collection.
//!
//! Same contract as [`resolve`](crate::resolve): the first record with a
//! given slug wins, and an empty slug never matches. Building the index also
//! surfaces the data problems the linear scan silently tolerates.

use std::collections::HashMap;
use std::fmt;

use crate::record::Record;
use crate::slug::slugify;

/// A problem with a collection's names found while indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugIssue {
    /// The name encodes to an empty slug and can never be linked to.
    Empty { position: usize, name: String },
    /// Two names share a slug; only `first` is reachable.
    Collision {
        slug: String,
        first: usize,
        duplicate: usize,
        name: String,
    },
}

impl fmt::Display for SlugIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { position, name } => {
                write!(f, "record #{position} ({name:?}) has no usable slug")
            }
            Self::Collision {
                slug,
                first,
                duplicate,
                name,
            } => write!(
                f,
                "record #{duplicate} ({name:?}) reuses slug '{slug}' from record #{first}"
            ),
        }
    }
}

/// Slug → position map over one collection.
#[derive(Debug, Default)]
pub struct SlugIndex {
    positions: HashMap<String, usize>,
    issues: Vec<SlugIssue>,
}

impl SlugIndex {
    pub fn build<R: Record>(records: &[R]) -> Self {
        let mut index = Self::default();
        for (position, record) in records.iter().enumerate() {
            let slug = slugify(record.name());
            if slug.is_empty() {
                index.issues.push(SlugIssue::Empty {
                    position,
                    name: record.name().to_string(),
                });
                continue;
            }
            match index.positions.get(&slug) {
                Some(&first) => index.issues.push(SlugIssue::Collision {
                    slug,
                    first,
                    duplicate: position,
                    name: record.name().to_string(),
                }),
                None => {
                    index.positions.insert(slug, position);
                }
            }
        }
        index
    }

    /// Position of the record with this slug in the indexed collection.
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.positions.get(slug).copied()
    }

    /// Look a slug up in `records`, which must be the collection this index
    /// was built from.
    pub fn get<'a, R>(&self, slug: &str, records: &'a [R]) -> Option<&'a R> {
        self.position(slug).and_then(|i| records.get(i))
    }

    pub fn issues(&self) -> &[SlugIssue] {
        &self.issues
    }

    /// True when every record has a unique, non-empty slug.
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of reachable slugs.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MapRecord;
    use crate::slug::resolve;

    fn maps(names: &[&str]) -> Vec<MapRecord> {
        names
            .iter()
            .map(|n| MapRecord {
                name: n.to_string(),
                mode: "Gem Grab".to_string(),
                extra: Default::default(),
            })
            .collect()
    }

    #[test]
    fn agrees_with_linear_resolve() {
        let records = maps(&["Hard Rock Mine", "Crystal Arcade", "Double Swoosh"]);
        let index = SlugIndex::build(&records);
        assert!(index.is_consistent());
        assert_eq!(index.len(), 3);
        for record in &records {
            let slug = record.slug();
            assert_eq!(index.get(&slug, &records), resolve(&slug, &records));
        }
        assert_eq!(index.get("nowhere", &records), None);
    }

    #[test]
    fn collision_keeps_first_match() {
        let records = maps(&["Ring of Fire", "Ring-of-Fire", "Ring of fire!"]);
        let index = SlugIndex::build(&records);
        assert_eq!(index.position("ring-of-fire"), Some(0));
        assert_eq!(index.issues().len(), 2);
        assert_eq!(
            index.issues()[0],
            SlugIssue::Collision {
                slug: "ring-of-fire".to_string(),
                first: 0,
                duplicate: 1,
                name: "Ring-of-Fire".to_string(),
            }
        );
        assert!(!index.is_consistent());
    }

    #[test]
    fn empty_slug_is_reported_and_unreachable() {
        let records = maps(&["???", "Pinball Dreams"]);
        let index = SlugIndex::build(&records);
        assert_eq!(
            index.issues(),
            &[SlugIssue::Empty {
                position: 0,
                name: "???".to_string()
            }]
        );
        assert_eq!(index.position(""), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn issue_display_names_the_record() {
        let issue = SlugIssue::Empty {
            position: 3,
            name: "&".to_string(),
        };
        assert_eq!(issue.to_string(), "record #3 (\"&\") has no usable slug");
    }
}
