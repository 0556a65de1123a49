// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Start the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long)]
        address: Option<String>,

        /// Port to listen on
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Run the diagnostic study and print its report
    Study {
        /// Generations per mode
        #[arg(long)]
        rounds: Option<usize>,
    },

    /// Evaluate a password
    Check {
        /// Password to evaluate
        #[arg(required = true)]
        password: String,
    },

    /// Generate a password
    Generate {
        /// Password length (minimum 8)
        #[arg(long, short)]
        length: Option<usize>,

        /// Build the password from dictionary words
        #[arg(long)]
        words: bool,
    },
}
