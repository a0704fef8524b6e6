use palisade_dns_domain::Config;
use tracing::info;

pub fn init_logging(config: &Config, override_level: Option<&str>) {
    let level = override_level.unwrap_or(&config.logging.level);
    let log_level = level.parse().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(true)
        .init();

    info!("Logging initialized at level: {}", level);
}
