use anyhow::Context;
use dex_client::DexClient;
use dex_config::DexConfig;
use dex_lock::FileLockStore;
use dex_views::{Session, ViewSettings};

use crate::cli::GlobalFlags;

pub type AppSession = Session<DexClient, FileLockStore>;

/// The session every command runs against, built from loaded configuration.
pub struct AppContext {
    pub session: AppSession,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let mut config =
            DexConfig::load_with_dotenv().context("failed to load pokedex configuration")?;

        if let Some(url) = &flags.api_url {
            config.api.url.clone_from(url);
            config.validate().context("invalid --api-url")?;
        }

        let settings = settings_for(&config, flags);
        let lock_path = config.lock.resolved_path();
        tracing::debug!(
            api = %config.api.base_url(),
            lock = %lock_path.display(),
            audit_limit = settings.audit_limit,
            "session configured"
        );

        let session = Session::with_settings(
            DexClient::from_config(&config.api),
            FileLockStore::new(lock_path),
            settings,
        );
        Ok(Self { session })
    }
}

fn settings_for(config: &DexConfig, flags: &GlobalFlags) -> ViewSettings {
    let mut settings = ViewSettings::from(&config.general);
    if let Some(limit) = flags.limit.filter(|limit| *limit > 0) {
        settings.audit_limit = limit;
    }
    settings
}
