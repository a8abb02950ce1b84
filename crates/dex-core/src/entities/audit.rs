use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One mutating event recorded by the data store for an entry.
///
/// Read-only on the client. Fields the store adds beyond the known ones are
/// kept in `extra` so rendering never drops information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    #[serde(default, alias = "eventType")]
    pub event: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
