use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub collectors: CollectorsConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logging is off unless a file is given; the terminal belongs to the dashboard.
    pub file: Option<PathBuf>,
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: None,
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CollectorsConfig {
    pub command_timeout_ms: u64,
}

impl Default for CollectorsConfig {
    fn default() -> Self {
        CollectorsConfig {
            command_timeout_ms: 1000,
        }
    }
}

impl CollectorsConfig {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("glyphdash").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert!(config.logging.file.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(
            config.collectors.command_timeout(),
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[collectors]
command_timeout_ms = 250
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.collectors.command_timeout_ms, 250);
        assert!(config.logging.file.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[logging]
file = "/tmp/glyphdash.log"
level = "debug"
format = "json"

[collectors]
command_timeout_ms = 3000
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.logging.file.as_deref(),
            Some(Path::new("/tmp/glyphdash.log"))
        );
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.collectors.command_timeout_ms, 3000);
    }

    #[test]
    fn unknown_format_falls_back_to_defaults() {
        let config: Config =
            toml::from_str("[logging]\nformat = \"xml\"\n").unwrap_or_default();
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.collectors.command_timeout_ms, 1000);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("glyphdash_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.collectors.command_timeout_ms, 1000);
        let _ = std::fs::remove_file(&temp);
    }
}
