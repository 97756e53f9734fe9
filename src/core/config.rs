// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;

use crate::models::PasswordGenerationOptions;

/// Shortest password the front end will ask the generator for.
pub const MIN_PASSWORD_LENGTH: usize = 4;

// Configuration for the generator front end
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,
    pub default_exclude_chars: String,

    // Clipboard
    pub clipboard_clear_after: Option<Duration>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,
            default_include_uppercase: true,
            default_include_lowercase: true,
            default_include_numbers: true,
            default_include_symbols: false,
            default_exclude_chars: String::new(),

            // Clipboard
            clipboard_clear_after: Some(Duration::from_secs(10)),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

fn parse_into<T: FromStr>(key: &str, raw: &str, target: &mut T) {
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => log::warn!("Ignoring invalid value '{}' for {}", raw, key),
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            parse_into("DEFAULT_PASSWORD_LENGTH", &val, &mut config.default_password_length);
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_UPPERCASE") {
            parse_into("DEFAULT_INCLUDE_UPPERCASE", &val, &mut config.default_include_uppercase);
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_LOWERCASE") {
            parse_into("DEFAULT_INCLUDE_LOWERCASE", &val, &mut config.default_include_lowercase);
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_NUMBERS") {
            parse_into("DEFAULT_INCLUDE_NUMBERS", &val, &mut config.default_include_numbers);
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_SYMBOLS") {
            parse_into("DEFAULT_INCLUDE_SYMBOLS", &val, &mut config.default_include_symbols);
        }

        if let Some(val) = lookup("DEFAULT_EXCLUDE_CHARS") {
            config.default_exclude_chars = val;
        }

        // Clipboard
        if let Some(val) = lookup("CLIPBOARD_CLEAR_SECONDS") {
            match val.trim().parse::<u64>() {
                Ok(0) => config.clipboard_clear_after = None,
                Ok(secs) => config.clipboard_clear_after = Some(Duration::from_secs(secs)),
                Err(_) => log::warn!("Ignoring invalid value '{}' for CLIPBOARD_CLEAR_SECONDS", val),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    // Generation options seeded from the configured defaults
    pub fn default_generation_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.default_password_length,
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
            exclude_chars: self.default_exclude_chars.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.default_generation_options(), PasswordGenerationOptions::default());
        assert_eq!(config.clipboard_clear_after, Some(Duration::from_secs(10)));
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("DEFAULT_INCLUDE_SYMBOLS", "true"),
            ("DEFAULT_INCLUDE_LOWERCASE", "false"),
            ("DEFAULT_EXCLUDE_CHARS", "Il1O0"),
            ("CLIPBOARD_CLEAR_SECONDS", "0"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "/tmp/passforge.log"),
        ]);

        let options = config.default_generation_options();
        assert_eq!(options.length, 24);
        assert!(options.include_symbols);
        assert!(!options.include_lowercase);
        assert_eq!(options.exclude_chars, "Il1O0");
        assert_eq!(config.clipboard_clear_after, None);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/passforge.log")));
    }

    #[test]
    fn test_malformed_values_keep_defaults() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "twelve"),
            ("DEFAULT_INCLUDE_UPPERCASE", "yes please"),
            ("CLIPBOARD_CLEAR_SECONDS", "-3"),
            ("LOG_LEVEL", "loud"),
        ]);

        assert_eq!(config.default_password_length, 12);
        assert!(config.default_include_uppercase);
        assert_eq!(config.clipboard_clear_after, Some(Duration::from_secs(10)));
        assert_eq!(config.log_level, LevelFilter::Warn);
    }
}
