//! Structured logging for Wildtrek.
//!
//! Installs a `tracing` subscriber with a console layer and, in debug builds,
//! a JSON file layer. Library crates log through the `log` facade, which
//! `tracing-subscriber` forwards into the same pipeline.

use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wildtrek_config::Config;

/// File name of the JSON log written into the log directory.
pub const LOG_FILE_NAME: &str = "wildtrek.log";

const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. The JSON file layer is only
/// added when `debug_build` is set and `log_dir` can be created.
///
/// # Examples
///
/// ```no_run
/// use wildtrek_config::Config;
/// use wildtrek_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    // Console layer: human-readable, timestamps relative to startup
    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The filter directive used when `RUST_LOG` is unset.
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_without_config() {
        assert_eq!(filter_directive(None), "info");
    }

    #[test]
    fn test_directive_from_config() {
        let mut config = Config::default();
        config.debug.log_level = " wildtrek_encounter=debug,warn ".to_string();
        assert_eq!(filter_directive(Some(&config)), "wildtrek_encounter=debug,warn");
    }

    #[test]
    fn test_blank_config_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "   ".to_string();
        assert_eq!(filter_directive(Some(&config)), "info");
    }
}
