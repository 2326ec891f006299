use serde::Deserialize;

use gathering_rules::StorageConfig;

/// Top-level configuration for the gathering rules server, loaded from
/// a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct GatheringConfig {
    /// HTTP server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Rule storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server bind configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Graceful shutdown timeout in seconds.
    ///
    /// The maximum time in-flight requests get to drain after a
    /// shutdown signal before the process exits anyway.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_seconds: default_shutdown_timeout(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
    8080
}

fn default_shutdown_timeout() -> u64 {
    30
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Default log level directive when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_owned()
}

/// Log output format.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable line format.
    #[default]
    Text,
    /// One JSON record per line.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: GatheringConfig = toml::from_str("").expect("should parse");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.shutdown_timeout_seconds, 30);
        assert_eq!(config.storage.rules_path, "rules");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn sections_override_defaults() {
        let config: GatheringConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9090
            shutdown_timeout_seconds = 5

            [storage]
            rules_path = "/etc/gathering/rules"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .expect("should parse");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.shutdown_timeout_seconds, 5);
        assert_eq!(config.storage.rules_path, "/etc/gathering/rules");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: GatheringConfig = toml::from_str(
            r#"
            [server]
            port = 3000
            "#,
        )
        .expect("should parse");

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.rules_path, "rules");
    }
}
