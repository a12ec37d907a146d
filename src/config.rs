use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use crate::api::{SimulatorSettings, UnknownRoutePolicy, WriteMode};

#[derive(Parser, Debug)]
#[command(name = "skiclub-mock", about = "Mock backend for the ski club member portal")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Simulated network latency per call, in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Keep simulated writes in memory instead of discarding them
    #[arg(long)]
    pub apply_writes: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub simulator: SimulatorConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimulatorConfig {
    pub latency_ms: u64,
    pub write_mode: WriteMode,
    pub unknown_routes: UnknownRoutePolicy,
    /// JSON fixture file replacing the built-in dataset
    pub fixtures: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        let defaults = SimulatorSettings::default();
        Self {
            latency_ms: u64::try_from(defaults.latency.as_millis()).unwrap_or(300),
            write_mode: defaults.write_mode,
            unknown_routes: defaults.unknown_routes,
            fixtures: None,
        }
    }
}

impl SimulatorConfig {
    pub fn settings(&self) -> SimulatorSettings {
        SimulatorSettings {
            latency: Duration::from_millis(self.latency_ms),
            write_mode: self.write_mode,
            unknown_routes: self.unknown_routes,
        }
    }
}

impl Config {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = cli.config.clone().or_else(Self::default_path);

        let mut config = match config_path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?
            }
            _ => Config::default(),
        };

        // CLI overrides
        if let Some(ref host) = cli.host {
            config.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            config.server.port = port;
        }
        if let Some(latency_ms) = cli.latency_ms {
            config.simulator.latency_ms = latency_ms;
        }
        if cli.apply_writes {
            config.simulator.write_mode = WriteMode::Apply;
        }

        Ok(config)
    }

    /// `<config dir>/skiclub-mock/config.toml`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skiclub-mock").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(config: Option<PathBuf>) -> Cli {
        Cli {
            config,
            host: None,
            port: None,
            latency_ms: None,
            apply_writes: false,
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.simulator.latency_ms, 300);
        assert_eq!(config.simulator.write_mode, WriteMode::Discard);
        assert_eq!(config.simulator.unknown_routes, UnknownRoutePolicy::EmptySuccess);
        assert!(config.simulator.fixtures.is_none());
    }

    #[test]
    fn default_path_ends_in_app_dir() {
        if let Some(path) = Config::default_path() {
            assert!(path.ends_with("skiclub-mock/config.toml"));
        }
    }

    #[test]
    fn load_with_missing_config_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load(&cli(Some(tmp.path().join("absent.toml")))).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.simulator.settings(), SimulatorSettings::default());
    }

    #[test]
    fn load_applies_cli_overrides() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = Cli {
            host: Some("0.0.0.0".to_string()),
            port: Some(8080),
            latency_ms: Some(0),
            apply_writes: true,
            ..cli(Some(tmp.path().join("absent.toml")))
        };
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.simulator.settings().latency, Duration::ZERO);
        assert_eq!(config.simulator.write_mode, WriteMode::Apply);
    }

    #[test]
    fn load_reads_toml_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[server]
host = "192.168.1.1"
port = 9000

[simulator]
latency_ms = 50
write_mode = "apply"
unknown_routes = "not-found"
fixtures = "/srv/skiclub/fixtures.json"
"#,
        )
        .unwrap();

        let config = Config::load(&cli(Some(config_path))).unwrap();
        assert_eq!(config.server.host, "192.168.1.1");
        assert_eq!(config.server.port, 9000);

        let settings = config.simulator.settings();
        assert_eq!(settings.latency, Duration::from_millis(50));
        assert_eq!(settings.write_mode, WriteMode::Apply);
        assert_eq!(settings.unknown_routes, UnknownRoutePolicy::NotFound);
        assert_eq!(
            config.simulator.fixtures,
            Some(PathBuf::from("/srv/skiclub/fixtures.json"))
        );
    }

    #[test]
    fn cli_overrides_beat_toml_values() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[server]
port = 9000

[simulator]
latency_ms = 50
"#,
        )
        .unwrap();

        let cli = Cli {
            port: Some(4000),
            latency_ms: Some(5),
            ..cli(Some(config_path))
        };
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.simulator.latency_ms, 5);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(&config_path, "[simulator]\nwrite_mode = \"sometimes\"\n").unwrap();
        assert!(Config::load(&cli(Some(config_path))).is_err());
    }
}
