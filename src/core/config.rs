// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::{CharacterClass, CharacterSets, GenerationPolicy, SYMBOLS};

// Configuration for the generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub max_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,
    pub default_exclude_similar: bool,
    pub default_exclude_ambiguous: bool,
    pub symbol_set: String,

    // History
    pub history_file: PathBuf,

    // Clipboard
    pub copy_command: String,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            max_password_length: 128,
            default_include_uppercase: true,
            default_include_lowercase: true,
            default_include_numbers: true,
            default_include_symbols: true,
            default_exclude_similar: false,
            default_exclude_ambiguous: false,
            symbol_set: SYMBOLS.to_string(),

            // History
            history_file: PathBuf::from("./history.json"),

            // Clipboard
            copy_command: "xclip -selection clipboard".to_string(),

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Self::load_from(|key| env::var(key).ok());

        if env::var("HISTORY_FILE").is_err() {
            if let Some(dir) = crate::utils::get_app_data_dir() {
                config.history_file = dir.join("history.json");
            }
        }

        config
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.max_password_length = length;
            }
        }

        for (key, target) in [
            ("DEFAULT_INCLUDE_UPPERCASE", &mut config.default_include_uppercase),
            ("DEFAULT_INCLUDE_LOWERCASE", &mut config.default_include_lowercase),
            ("DEFAULT_INCLUDE_NUMBERS", &mut config.default_include_numbers),
            ("DEFAULT_INCLUDE_SYMBOLS", &mut config.default_include_symbols),
            ("DEFAULT_EXCLUDE_SIMILAR", &mut config.default_exclude_similar),
            ("DEFAULT_EXCLUDE_AMBIGUOUS", &mut config.default_exclude_ambiguous),
        ] {
            if let Some(val) = lookup(key) {
                match val.parse() {
                    Ok(flag) => *target = flag,
                    Err(_) => log::warn!("Ignoring non-boolean {}='{}'", key, val),
                }
            }
        }

        if let Some(symbols) = lookup("SYMBOL_SET") {
            let kept: String = symbols
                .chars()
                .filter(|c| CharacterClass::Symbol.matches(*c))
                .collect();
            if kept.len() != symbols.len() {
                log::warn!("Dropping letters and digits from SYMBOL_SET='{}'", symbols);
            }
            if kept.is_empty() {
                log::warn!("SYMBOL_SET has no symbols, keeping the default symbols");
            } else {
                config.symbol_set = kept;
            }
        }

        // History
        if let Some(file) = lookup("HISTORY_FILE") {
            config.history_file = PathBuf::from(file);
        }

        // Clipboard
        if let Some(command) = lookup("COPY_COMMAND") {
            config.copy_command = command;
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
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
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    /// The policy used when a request does not override anything.
    pub fn default_policy(&self) -> GenerationPolicy {
        GenerationPolicy {
            length: self.default_password_length,
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
            exclude_similar: self.default_exclude_similar,
            exclude_ambiguous: self.default_exclude_ambiguous,
        }
    }

    pub fn character_sets(&self) -> CharacterSets {
        CharacterSets {
            symbols: self.symbol_set.clone(),
        }
    }
}
