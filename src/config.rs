use crate::ingestion::types::EngineConfig;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// HTTP bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Simulated processing latency per document, in milliseconds
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    /// Interval between store stats log lines, in seconds (0 disables)
    #[serde(default = "default_stats_interval_secs")]
    pub stats_interval_secs: u64,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            processing_delay_ms: default_processing_delay_ms(),
            stats_interval_secs: default_stats_interval_secs(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `ingestion` config file, then
    /// `INGESTION__*` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("ingestion").required(false))
            .add_source(config::Environment::with_prefix("INGESTION").separator("__"));

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.bind_addr.parse()?)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn stats_interval(&self) -> Option<Duration> {
        (self.stats_interval_secs > 0).then(|| Duration::from_secs(self.stats_interval_secs))
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            processing_delay: self.processing_delay(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_processing_delay_ms() -> u64 {
    300
}

fn default_stats_interval_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr, "127.0.0.1:8000");
        assert_eq!(cfg.processing_delay(), Duration::from_millis(300));
        assert_eq!(cfg.stats_interval(), Some(Duration::from_secs(30)));
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.engine_config().processing_delay, Duration::from_millis(300));
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn test_zero_stats_interval_disables_reporter() {
        let cfg = ServerConfig {
            stats_interval_secs: 0,
            ..ServerConfig::default()
        };
        assert!(cfg.stats_interval().is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: ServerConfig =
            serde_json::from_str(r#"{"processing_delay_ms": 5}"#).unwrap();
        assert_eq!(cfg.processing_delay_ms, 5);
        assert_eq!(cfg.bind_addr, "127.0.0.1:8000");
    }
}
