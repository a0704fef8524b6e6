use palisade_dns_domain::Config;
use tracing::info;

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<Config> {
    let config = Config::load(config_path)?;
    config.validate()?;
    Ok(config)
}

pub fn log_summary(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("builtin defaults"),
        safe_search_enabled = config.safe_search.is_enabled(),
        list_sources = config.lists.sources.len(),
        "Configuration loaded"
    );
}
