use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::generators::password::{self, DEFAULT_LENGTH};

// Configuration for the password checker
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Values rejected while loading, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_LENGTH,

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing or unusable values.
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>().map(password::validate_length) {
                Ok(Ok(length)) => config.default_password_length = length,
                Ok(Err(e)) => config
                    .warnings
                    .push(format!("Ignoring DEFAULT_PASSWORD_LENGTH: {}", e)),
                Err(_) => config
                    .warnings
                    .push(format!("Ignoring DEFAULT_PASSWORD_LENGTH '{}': not a number", val)),
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => config
                    .warnings
                    .push(format!("Ignoring WEB_PORT '{}': not a valid port", val)),
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {
                    let warning = format!("Unknown log level '{}', using {}", level, config.log_level);
                    config.warnings.push(warning);
                }
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// Logs the values rejected by `load_from`. Call after the logger exists.
    pub fn report_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = load(&[]);
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.web_address, "127.0.0.1");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            ("DEFAULT_PASSWORD_LENGTH", "20"),
            ("WEB_PORT", "8080"),
            ("WEB_ADDRESS", "0.0.0.0"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "logs/app.log"),
        ]);
        assert_eq!(config.default_password_length, 20);
        assert_eq!(config.web_port, 8080);
        assert_eq!(config.web_address, "0.0.0.0");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/app.log")));
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn out_of_range_length_keeps_default() {
        assert_eq!(load(&[("DEFAULT_PASSWORD_LENGTH", "64")]).default_password_length, 12);
        assert_eq!(load(&[("DEFAULT_PASSWORD_LENGTH", "5")]).default_password_length, 12);
        assert_eq!(load(&[("DEFAULT_PASSWORD_LENGTH", "twelve")]).default_password_length, 12);
    }

    #[test]
    fn rejected_values_are_kept_for_reporting() {
        let config = load(&[("DEFAULT_PASSWORD_LENGTH", "64"), ("WEB_PORT", "notaport"), ("LOG_LEVEL", "loud")]);
        assert_eq!(config.warnings.len(), 3);
        assert!(config.warnings[0].starts_with("Ignoring DEFAULT_PASSWORD_LENGTH"));
        assert!(config.warnings[0].contains("got 64"));
        assert!(config.warnings[1].contains("notaport"));
        assert!(config.warnings[2].contains("'loud'"));
    }

    #[test]
    fn garbage_values_are_ignored() {
        let config = load(&[("WEB_PORT", "99999"), ("LOG_LEVEL", "loud"), ("LOG_FILE", " ")]);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
    }
}
