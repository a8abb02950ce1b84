//! General client behavior.

use serde::{Deserialize, Serialize};

/// Number of audit entries rendered on the detail view.
const fn default_audit_limit() -> u32 {
    30
}

/// Search input quiescence window, in milliseconds.
const fn default_debounce_ms() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default = "default_audit_limit")]
    pub audit_limit: u32,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            audit_limit: default_audit_limit(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub const fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
