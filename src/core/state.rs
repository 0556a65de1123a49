// src/core/state.rs
use std::sync::Arc;

use crate::checker::StrengthChecker;
use crate::core::config::Config;
use crate::dictionary::Dictionaries;
use crate::generators::PasswordGenerator;
use crate::history::GenerationLog;

/// Services shared by the HTTP handlers and the CLI commands.
#[derive(Debug, Clone)]
pub struct AppState {
    pub checker: StrengthChecker,
    pub generator: PasswordGenerator,
    pub log: Arc<GenerationLog>,
    pub default_length: usize,
}

impl AppState {
    pub fn new(dictionaries: Dictionaries, config: &Config) -> Self {
        let checker = StrengthChecker::new(Arc::clone(&dictionaries.common_passwords));
        let log = Arc::new(GenerationLog::new());
        let generator = PasswordGenerator::new(
            checker.clone(),
            Arc::clone(&dictionaries.words),
            Arc::clone(&log),
        );

        Self {
            checker,
            generator,
            log,
            default_length: config.default_password_length,
        }
    }
}
