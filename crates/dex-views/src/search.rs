//! Client-side name search.
//!
//! Both the query and each candidate name are lowercased, canonically
//! decomposed (NFD) with combining marks stripped, and trimmed. An entry
//! matches when its normalized english or french name contains the normalized
//! query.

use dex_core::Entry;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Diacritic- and case-insensitive form of `input`.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalized query, or `None` when the input means "not searching".
#[must_use]
pub fn search_query(raw: &str) -> Option<String> {
    let query = normalize(raw);
    (!query.is_empty()).then_some(query)
}

/// Whether `entry` matches an already-normalized query.
#[must_use]
pub fn matches(entry: &Entry, normalized_query: &str) -> bool {
    normalize(&entry.name.english).contains(normalized_query)
        || normalize(&entry.name.french).contains(normalized_query)
}

/// Keep the entries matching `raw_query`, in their original order.
///
/// A blank query keeps everything.
#[must_use]
pub fn filter_entries(entries: Vec<Entry>, raw_query: &str) -> Vec<Entry> {
    let Some(query) = search_query(raw_query) else {
        return entries;
    };
    entries
        .into_iter()
        .filter(|entry| matches(entry, &query))
        .collect()
}
