//! Record models for the two backing documents.
//!
//! Both kinds keep any keys they don't know about in an `extra` map, so a
//! hand-edited document round-trips through the site without losing fields.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::slug::slugify;

/// Common view over map and brawler records.
pub trait Record {
    /// Display name; the source of the record's slug.
    fn name(&self) -> &str;

    /// String value of a named field, if present and a string.
    fn field(&self, key: &str) -> Option<&str>;

    /// Derived URL slug. Computed on demand, never stored.
    fn slug(&self) -> String {
        slugify(self.name())
    }
}

// ── Map ─────────────────────────────────────────────────────────────────────

/// A game map from the hand-maintained maps document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRecord {
    pub name: String,
    /// Game mode category (e.g., "Gem Grab", "Brawl Ball").
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for MapRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            "mode" => Some(&self.mode),
            _ => extra_str(&self.extra, key),
        }
    }
}

// ── Brawler ─────────────────────────────────────────────────────────────────

/// A playable character from the brawlers document.
///
/// `best_build` and `best_modes` are placeholders the refresh command writes
/// empty; they are filled in by hand afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrawlerRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rarity: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub best_build: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub best_modes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Image filename, relative to the brawler image directory.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for BrawlerRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            "rarity" => Some(&self.rarity),
            "role" => Some(&self.role),
            "class" => Some(&self.class),
            "best_build" => Some(&self.best_build),
            "description" => Some(&self.description),
            "image" => Some(&self.image),
            _ => extra_str(&self.extra, key),
        }
    }
}

/// Read an absent or `null` value as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn extra_str<'a>(extra: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    extra.get(key).and_then(Value::as_str)
}

// ── Presentation ────────────────────────────────────────────────────────────

/// A record paired with its derived slug, serialized as one flat object.
#[derive(Debug, Serialize)]
pub struct Slugged<'a, R> {
    #[serde(flatten)]
    pub record: &'a R,
    pub slug: String,
}

impl<'a, R: Record> Slugged<'a, R> {
    pub fn new(record: &'a R) -> Self {
        Self {
            slug: record.slug(),
            record,
        }
    }

    /// Wrap every record of a collection, preserving order.
    pub fn all<I>(records: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a R>,
    {
        records.into_iter().map(Self::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keeps_unknown_fields_in_order() {
        let json = r#"{"name":"Hard Rock Mine","mode":"Gem Grab","size":"medium","environment":"Mine"}"#;
        let map: MapRecord = serde_json::from_str(json).unwrap();
        assert_eq!(map.mode, "Gem Grab");
        let keys: Vec<&str> = map.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["size", "environment"]);
        assert_eq!(map.field("environment"), Some("Mine"));
        assert_eq!(map.field("missing"), None);
    }

    #[test]
    fn brawler_missing_optional_fields_default_empty() {
        let brawler: BrawlerRecord = serde_json::from_str(r#"{"name":"Shelly"}"#).unwrap();
        assert_eq!(brawler.rarity, "");
        assert!(brawler.best_modes.is_empty());
        assert!(brawler.extra.is_empty());
    }

    #[test]
    fn null_placeholders_read_as_empty() {
        let json = r#"{"name":"Colt","rarity":null,"best_build":null,"best_modes":null,"description":null}"#;
        let brawler: BrawlerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(brawler.rarity, "");
        assert_eq!(brawler.best_build, "");
        assert!(brawler.best_modes.is_empty());
        assert_eq!(brawler.description, "");
        assert!(brawler.extra.is_empty());

        let map: MapRecord = serde_json::from_str(r#"{"name":"Gem Fort","mode":null}"#).unwrap();
        assert_eq!(map.mode, "");
    }

    #[test]
    fn brawler_requires_name() {
        let result: Result<BrawlerRecord, _> = serde_json::from_str(r#"{"rarity":"Rare"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn non_string_extra_field_is_not_filterable() {
        let map: MapRecord =
            serde_json::from_str(r#"{"name":"Snake Prairie","mode":"Bounty","players":6}"#).unwrap();
        assert_eq!(map.field("players"), None);
    }

    #[test]
    fn slugged_serializes_flat() {
        let brawler: BrawlerRecord =
            serde_json::from_str(r#"{"name":"El Primo","rarity":"Rare"}"#).unwrap();
        let value = serde_json::to_value(Slugged::new(&brawler)).unwrap();
        assert_eq!(value["slug"], "el-primo");
        assert_eq!(value["name"], "El Primo");
        assert_eq!(value["rarity"], "Rare");
    }
}
