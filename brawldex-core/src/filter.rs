//! Exact-match filtering for listing pages.

use crate::record::Record;

/// Query value meaning "show everything".
pub const ALL_SENTINEL: &str = "ALL";

/// A listing filter on one named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    /// Keep records whose field equals this value exactly (case-sensitive).
    Equals(String),
}

impl Filter {
    /// Interpret a query-string value. Absent, empty and [`ALL_SENTINEL`]
    /// all mean no filter.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL_SENTINEL) => Self::All,
            Some(v) => Self::Equals(v.to_string()),
        }
    }

    /// The value being filtered on, if any.
    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Equals(v) => Some(v),
        }
    }

    pub fn matches<R: Record>(&self, record: &R, field: &str) -> bool {
        match self {
            Self::All => true,
            Self::Equals(v) => record.field(field) == Some(v.as_str()),
        }
    }

    /// Order-preserving subsequence of `records` that pass this filter.
    pub fn apply<'a, R: Record>(&self, records: &'a [R], field: &str) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r, field)).collect()
    }
}

/// Distinct non-empty values of `field`, in first-seen order.
pub fn distinct_values<R: Record>(records: &[R], field: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in records.iter().filter_map(|r| r.field(field)) {
        if !value.is_empty() && !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}
