use dex_config::DexConfig;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn prefixed_env_overrides_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("POKEDEX_API__URL", "https://dex.example.com");
        jail.set_env("POKEDEX_GENERAL__DEBOUNCE_MS", "500");

        let config = DexConfig::load().expect("config loads");
        assert_eq!(config.api.url, "https://dex.example.com");
        assert_eq!(config.general.debounce_ms, 500);
        Ok(())
    });
}

#[test]
fn vite_api_url_is_honored() {
    Jail::expect_with(|jail| {
        jail.set_env("VITE_API_URL", "http://legacy.local:3000");

        let config = DexConfig::load().expect("config loads");
        assert_eq!(config.api.url, "http://legacy.local:3000");
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_vite_api_url() {
    Jail::expect_with(|jail| {
        jail.set_env("VITE_API_URL", "http://legacy.local:3000");
        jail.set_env("POKEDEX_API__URL", "http://preferred.local:3000");

        let config = DexConfig::load().expect("config loads");
        assert_eq!(config.api.url, "http://preferred.local:3000");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".pokedex")?;
        jail.create_file(".pokedex/config.toml", "[general]\naudit_limit = 10\n")?;
        jail.set_env("POKEDEX_GENERAL__AUDIT_LIMIT", "7");

        let config = DexConfig::load().expect("config loads");
        assert_eq!(config.general.audit_limit, 7);
        Ok(())
    });
}

#[test]
fn zero_timeout_from_env_fails_to_load() {
    Jail::expect_with(|jail| {
        jail.set_env("POKEDEX_API__TIMEOUT_SECS", "0");

        let err = DexConfig::load().unwrap_err();
        assert!(err.to_string().contains("api.timeout_secs"));
        Ok(())
    });
}
