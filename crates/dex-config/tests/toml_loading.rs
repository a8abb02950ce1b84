//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use dex_config::DexConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
url = "http://dex.internal:4000"
timeout_secs = 3

[lock]
path = "/var/lib/pokedex/lock.json"

[general]
audit_limit = 12
debounce_ms = 150
"#,
        )?;

        let config: DexConfig = Figment::from(Serialized::defaults(DexConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.url, "http://dex.internal:4000");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.lock.path, "/var/lib/pokedex/lock.json");
        assert_eq!(config.general.audit_limit, 12);
        assert_eq!(config.general.debounce_ms, 150);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\naudit_limit = 5\n")?;

        let config: DexConfig = Figment::from(Serialized::defaults(DexConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.audit_limit, 5);
        assert_eq!(config.general.debounce_ms, 300);
        assert_eq!(config.api.url, "http://localhost:3000");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".pokedex")?;
        jail.create_file(
            ".pokedex/config.toml",
            "[api]\nurl = \"http://project.local:3000\"\n",
        )?;

        let config = DexConfig::load().expect("config loads");
        assert_eq!(config.api.url, "http://project.local:3000");
        Ok(())
    });
}

#[test]
fn invalid_values_fail_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".pokedex")?;
        jail.create_file(".pokedex/config.toml", "[general]\naudit_limit = 0\n")?;

        assert!(DexConfig::load().is_err());
        Ok(())
    });
}
