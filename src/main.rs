use clap::Parser;
use std::path::Path;
use std::io;

mod cli;
mod api;
mod core;
mod utils;
mod models;
mod checker;
mod dictionary;
mod generators;
mod history;
mod study;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::core::AppState;
use crate::dictionary::Dictionaries;

fn init_logging(config: &Config) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true);

    // RUST_LOG, when set, takes precedence over LOG_LEVEL
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();
}

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let (mut config, warnings) = Config::load();
    args.apply_to(&mut config);

    init_logging(&config);
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let state = AppState::new(Dictionaries::load(&config), &config);

    let result = match args.command {
        Some(CliCommand::Study { .. }) => cli::handlers::handle_study(&state, config.study_rounds),
        Some(CliCommand::Check { password }) => cli::handlers::handle_check(&state, &password),
        Some(CliCommand::Generate { length, words }) => {
            cli::handlers::handle_generate(&state, length, words)
        }
        Some(CliCommand::Serve { .. }) | None => {
            return api::start_server(state, &config.web_address, config.web_port)
                .await
                .map_err(|e| {
                    log::error!("API server failed: {}", e);
                    e
                });
        }
    };

    result.map_err(|e| {
        log::error!("{}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })
}
