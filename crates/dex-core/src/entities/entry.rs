use serde::{Deserialize, Deserializer, Serialize};

use super::stats::BaseStats;
use crate::errors::CoreError;

/// Localized names of an entry. `english` is the canonical identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryName {
    pub english: String,
    #[serde(default)]
    pub french: String,
}

impl EntryName {
    /// Name shown to users: french when present, english otherwise.
    #[must_use]
    pub fn display(&self) -> &str {
        if self.french.trim().is_empty() {
            &self.english
        } else {
            &self.french
        }
    }
}

/// A catalog record as returned by the data store.
///
/// The client never owns entries; each view holds a transient copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Store-side document id.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<serde_json::Value>,
    /// Dataset id (the national dex number in the stock dataset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub name: EntryName,
    #[serde(rename = "type", default)]
    pub types: Vec<String>,
    pub base: BaseStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Shown when present, never verified. Blank values decode as absent.
    #[serde(
        default,
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub integrity_hash: Option<String>,
}

impl Entry {
    /// Canonical identity used for lookups, updates, deletes and lock matching.
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        &self.name.english
    }
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty()))
}

/// Payload for creating an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub name: EntryName,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub base: BaseStats,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity_hash: Option<String>,
}

impl NewEntry {
    /// Client-side checks run before the create request is issued.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the english name is blank, the
    /// type list does not hold one or two non-blank tags, or a stat is out of
    /// range.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.english.trim().is_empty() {
            return Err(CoreError::Validation("english name is required".into()));
        }
        if !(1..=2).contains(&self.types.len()) {
            return Err(CoreError::Validation(format!(
                "an entry has one or two types, got {}",
                self.types.len()
            )));
        }
        if self.types.iter().any(|tag| tag.trim().is_empty()) {
            return Err(CoreError::Validation("type tags cannot be blank".into()));
        }
        self.base.validate()
    }
}
