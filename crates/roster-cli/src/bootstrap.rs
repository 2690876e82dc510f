use roster_config::RosterConfig;
use roster_store::RosterService;

/// Load layered configuration (with `.env` support) and apply the
/// `--data-dir` override.
pub fn load_config(data_dir: Option<&str>) -> anyhow::Result<RosterConfig> {
    let mut config = RosterConfig::load_with_dotenv()?;
    if let Some(dir) = data_dir {
        config.storage.data_dir = dir.to_string();
    }
    tracing::debug!(
        data_dir = %config.storage.resolved_data_dir().display(),
        key = %config.storage.key,
        id_strategy = %config.general.id_strategy,
        "configuration loaded"
    );
    Ok(config)
}

pub fn open_service(config: &RosterConfig) -> RosterService {
    RosterService::from_config(config)
}
