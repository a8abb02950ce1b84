//! # dex-config
//!
//! Layered configuration loading for the Pokédex client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`POKEDEX_*` prefix, `__` as separator)
//! 2. `VITE_API_URL`, kept for deployments configured for the web client
//! 3. Project-level `.pokedex/config.toml`
//! 4. User-level `~/.config/pokedex/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `POKEDEX_API__URL` -> `api.url`, `POKEDEX_GENERAL__AUDIT_LIMIT`
//! -> `general.audit_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use dex_config::DexConfig;
//!
//! let config = DexConfig::load_with_dotenv().expect("config");
//! println!("data store: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod general;
mod lock;

pub use api::{ApiConfig, DEFAULT_API_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use lock::LockConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DexConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub lock: LockConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DexConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`load_with_dotenv`](Self::load_with_dotenv)
    /// for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".pokedex/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&["VITE_API_URL"])
                    .map(|_| "api.url".into()),
            )
            .merge(Env::prefixed("POKEDEX_").split("__"))
    }

    /// Reject values the client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-HTTP base URL, a zero
    /// request timeout or a zero audit limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.api.url),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.general.audit_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.audit_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pokedex").join("config.toml"))
    }
}
