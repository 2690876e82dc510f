//! Integration tests for TOML and environment layering.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use roster_config::RosterConfig;
use roster_core::enums::IdStrategy;

#[test]
fn loads_storage_and_general_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
data_dir = "/var/lib/roster"
key = "staff"

[general]
id_strategy = "random"
default_format = "table"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(RosterConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = RosterConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.storage.data_dir, "/var/lib/roster");
        assert_eq!(config.storage.key, "staff");
        assert_eq!(config.general.id_strategy, IdStrategy::Random);
        assert_eq!(config.general.default_format, "table");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[storage]\nkey = \"staff\"\n")?;
        jail.set_env("ROSTER_STORAGE__KEY", "people");

        let figment = Figment::from(Serialized::defaults(RosterConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ROSTER_").split("__"));
        let config = RosterConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.storage.key, "people");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".roster")?;
        jail.create_file(".roster/config.toml", "[general]\nid_strategy = \"random\"\n")?;

        let config = RosterConfig::load().expect("config loads");
        assert_eq!(config.general.id_strategy, IdStrategy::Random);
        Ok(())
    });
}

#[test]
fn invalid_strategy_is_an_error() {
    Jail::expect_with(|jail| {
        jail.set_env("ROSTER_GENERAL__ID_STRATEGY", "sequential");
        assert!(RosterConfig::load().is_err());
        Ok(())
    });
}
