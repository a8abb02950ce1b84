use std::time::Duration;

use dex_config::GeneralConfig;

/// Knobs the views read at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    /// Audit records shown on the detail view.
    pub audit_limit: u32,
    /// Search input quiescence window.
    pub debounce: Duration,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from(&GeneralConfig::default())
    }
}

impl From<&GeneralConfig> for ViewSettings {
    fn from(config: &GeneralConfig) -> Self {
        Self {
            audit_limit: config.audit_limit,
            debounce: config.debounce(),
        }
    }
}

/// Shared collaborators for every screen: the data gateway and the lock store.
#[derive(Debug)]
pub struct Session<G, S> {
    pub gateway: G,
    pub locks: S,
    pub settings: ViewSettings,
}

impl<G, S> Session<G, S> {
    pub fn new(gateway: G, locks: S) -> Self {
        Self::with_settings(gateway, locks, ViewSettings::default())
    }

    pub const fn with_settings(gateway: G, locks: S, settings: ViewSettings) -> Self {
        Self {
            gateway,
            locks,
            settings,
        }
    }
}
