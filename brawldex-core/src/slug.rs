//! URL slug derivation and slug-to-record resolution.
//!
//! Slugs are published in page URLs, so the transform must stay stable:
//! any change to [`SUBSTITUTIONS`] or to the separator rules breaks
//! existing links.

use crate::record::Record;

/// Characters rewritten after lowercasing, before separators are collapsed.
///
/// Turkish letters fold to their ASCII base, `&` becomes a separator and
/// straight apostrophes vanish so "Jessie's" stays one word.
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('ş', "s"),
    ('ı', "i"),
    ('ö', "o"),
    ('ü', "u"),
    ('ğ', "g"),
    ('ç', "c"),
    ('&', "-"),
    ('\'', ""),
];

/// Convert a display name into its canonical URL slug.
///
/// The result contains only `[a-z0-9-]`, never starts or ends with a hyphen
/// and never contains two hyphens in a row. A name made only of punctuation
/// produces an empty string, which callers must treat as "no valid slug".
///
/// ```
/// use brawldex_core::slugify;
///
/// assert_eq!(slugify("Larry & Lawrie"), "larry-lawrie");
/// assert_eq!(slugify("8-Bit"), "8-bit");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();

    let mut substituted = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => substituted.push_str(to),
            None => substituted.push(c),
        }
    }

    let mut result = String::with_capacity(substituted.len());
    let mut last_was_separator = false;
    for c in substituted.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            last_was_separator = false;
        } else if !last_was_separator {
            result.push('-');
            last_was_separator = true;
        }
    }

    result.trim_matches('-').to_string()
}

/// Returns true if `slug` is non-empty and already in canonical form.
pub fn is_canonical(slug: &str) -> bool {
    !slug.is_empty() && slugify(slug) == slug
}

/// Find the first record whose name encodes to `slug`.
///
/// This is a linear scan that re-encodes every candidate. Collections are
/// tens of entries and each request reloads its document anyway; see
/// [`SlugIndex`](crate::SlugIndex) for the precomputed alternative.
/// An empty slug never matches, even a record whose name encodes to "".
pub fn resolve<'a, R: Record>(slug: &str, records: &'a [R]) -> Option<&'a R> {
    if slug.is_empty() {
        return None;
    }
    records.iter().find(|r| slugify(r.name()) == slug)
}

#[cfg(test)]
#[path = "tests/slug_tests.rs"]
mod tests;
