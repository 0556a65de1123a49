// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

// Configuration for the checker service
#[derive(Debug, Clone)]
pub struct Config {
    // Dictionaries
    pub common_passwords_path: PathBuf,
    pub word_list_path: PathBuf,

    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub default_password_length: usize,

    // Diagnostic study
    pub study_rounds: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Dictionaries
            common_passwords_path: PathBuf::from("common_passwords.txt"),
            word_list_path: PathBuf::from("word_list.txt"),

            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Password Generation
            default_password_length: 12,

            // Diagnostic study
            study_rounds: 5,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

// Parse an env var, keeping the current value when it is absent or malformed.
// Logging is not up yet while config loads, so problems are collected for the caller.
fn parse_var<T: FromStr>(name: &str, target: &mut T, warnings: &mut Vec<String>) {
    if let Ok(val) = env::var(name) {
        match val.parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => warnings.push(format!("Ignoring invalid value '{}' for {}", val, name)),
        }
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

impl Config {
    // Load configuration from environment variables, along with a warning for every
    // value that was ignored
    pub fn load() -> (Self, Vec<String>) {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Dictionaries
        if let Ok(path) = env::var("COMMON_PASSWORDS_PATH") {
            config.common_passwords_path = PathBuf::from(path);
        }

        if let Ok(path) = env::var("WORD_LIST_PATH") {
            config.word_list_path = PathBuf::from(path);
        }

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        parse_var("WEB_PORT", &mut config.web_port, &mut warnings);

        // Password Generation
        parse_var(
            "DEFAULT_PASSWORD_LENGTH",
            &mut config.default_password_length,
            &mut warnings,
        );

        // Diagnostic study
        parse_var("STUDY_ROUNDS", &mut config.study_rounds, &mut warnings);

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match parse_level(&level) {
                Some(filter) => config.log_level = filter,
                None => warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        (config, warnings)
    }
}
