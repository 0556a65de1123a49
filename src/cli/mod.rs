// src/cli/mod.rs
use std::path::PathBuf;
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

use crate::core::config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Newline-delimited list of common passwords
    #[arg(long, global = true, env = "COMMON_PASSWORDS_PATH")]
    pub common_passwords: Option<PathBuf>,

    /// Newline-delimited word list used for word-based passwords
    #[arg(long, global = true, env = "WORD_LIST_PATH")]
    pub word_list: Option<PathBuf>,

    /// Command to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    /// Applies command line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.common_passwords {
            config.common_passwords_path = path.clone();
        }

        if let Some(path) = &self.word_list {
            config.word_list_path = path.clone();
        }

        if let Some(CliCommand::Serve { address, port }) = &self.command {
            if let Some(address) = address {
                config.web_address = address.clone();
            }
            if let Some(port) = port {
                config.web_port = *port;
            }
        }

        if let Some(CliCommand::Study { rounds: Some(rounds) }) = &self.command {
            config.study_rounds = *rounds;
        }
    }
}
