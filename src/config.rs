use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::core::locator::{Locator, DEFAULT_MAP_SEARCH_BASE, DEFAULT_ZOOM};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub locator: LocatorSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct LocatorSettings {
    #[serde(default = "default_map_search_base")]
    pub map_search_base: String,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Unset: wait for the browser's own geolocation timeout
    pub position_timeout_ms: Option<u64>,
    #[serde(default = "default_place_types")]
    pub place_types: Vec<String>,
}

impl Default for LocatorSettings {
    fn default() -> Self {
        Self {
            map_search_base: default_map_search_base(),
            zoom: default_zoom(),
            position_timeout_ms: None,
            place_types: default_place_types(),
        }
    }
}

impl LocatorSettings {
    pub fn build_locator(&self) -> Locator {
        Locator::new(
            self.map_search_base.clone(),
            self.zoom,
            self.position_timeout_ms.map(Duration::from_millis),
        )
    }
}

fn default_map_search_base() -> String { DEFAULT_MAP_SEARCH_BASE.to_string() }
fn default_zoom() -> u8 { DEFAULT_ZOOM }
fn default_place_types() -> Vec<String> {
    vec!["hospital".to_string(), "pharmacy".to_string(), "gym".to_string()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with WELLCHECK_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., WELLCHECK__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("WELLCHECK")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("locator.place_types")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.locator.zoom, 15);
        assert_eq!(settings.locator.map_search_base, "https://www.google.com/maps/search");
        assert!(settings.locator.position_timeout_ms.is_none());
        assert_eq!(settings.locator.place_types.len(), 3);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_partial_override() {
        let settings: Settings = Config::builder()
            .set_override("locator.zoom", 12)
            .unwrap()
            .set_override("server.port", 9000)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.locator.zoom, 12);
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "127.0.0.1");
    }

    #[test]
    fn test_build_locator() {
        let locator = LocatorSettings {
            map_search_base: "https://maps.example/search".to_string(),
            zoom: 11,
            position_timeout_ms: Some(500),
            place_types: vec![],
        }
        .build_locator();

        let search = crate::core::MapSearch::PlaceOnly {
            place: crate::core::PlaceType::new("clinic").unwrap(),
        };
        assert_eq!(locator.url_for(&search), "https://maps.example/search/clinic/");
    }
}
