//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the output format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "CALCORDER_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Unrecognized values fall back to JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directives, e.g. `info` or `calcorder_sales=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl TracingConfig {
    /// Read `RUST_LOG` and [`LOG_FORMAT_ENV`], falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(defaults.filter),
            format: format.as_deref().map_or(defaults.format, LogFormat::parse),
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). An invalid
/// filter falls back to `info`.
pub fn init_with(config: &TracingConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_info_and_json() {
        let config = TracingConfig::from_vars(None, None);
        assert_eq!(config, TracingConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn vars_override_defaults() {
        let config = TracingConfig::from_vars(
            Some("calcorder_sales=debug".to_string()),
            Some("Pretty".to_string()),
        );
        assert_eq!(config.filter, "calcorder_sales=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_is_ignored() {
        let config = TracingConfig::from_vars(Some("  ".to_string()), Some("xml".to_string()));
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn init_twice_is_harmless() {
        crate::init();
        init_with(&TracingConfig::default());
        init_with(&TracingConfig {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Pretty,
        });
    }
}
