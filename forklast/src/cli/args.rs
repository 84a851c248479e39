//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Forklast - replay the last assistant message of an opencode session into a new one
#[derive(Parser, Debug)]
#[command(name = "forklast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the opencode server
    #[arg(long, global = true)]
    pub server_url: Option<String>,

    /// Project directory to scope host requests to
    #[arg(long, global = true)]
    pub directory: Option<String>,

    /// Config file path (default: ~/.config/forklast/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the last assistant message into a new session titled "Exec plan"
    ExecPlan {
        /// Source session ID
        session_id: String,
    },

    /// Fork the last assistant message into a new session titled after it
    ForkLastMessage {
        /// Source session ID
        session_id: String,
    },

    /// Print the command registry entries this tool contributes
    Commands,

    /// Serve the hook bridge for the host-side shim
    Serve {
        /// Port to listen on (default from config, 4097)
        #[arg(short, long)]
        port: Option<u16>,

        /// Only handle these commands (repeatable)
        #[arg(long = "only", value_parser = ["exec-plan", "fork-last-message"])]
        only: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fork_command_with_globals() {
        let cli = Cli::parse_from([
            "forklast",
            "fork-last-message",
            "ses_1",
            "--server-url",
            "http://localhost:5000",
            "-d",
        ]);
        assert!(cli.debug);
        assert_eq!(cli.server_url.as_deref(), Some("http://localhost:5000"));
        assert!(matches!(
            cli.command,
            Commands::ForkLastMessage { ref session_id } if session_id == "ses_1"
        ));
    }

    #[test]
    fn serve_only_rejects_unknown_commands() {
        let ok = Cli::try_parse_from(["forklast", "serve", "--only", "exec-plan", "-p", "9000"])
            .unwrap();
        match ok.command {
            Commands::Serve { port, only } => {
                assert_eq!(port, Some(9000));
                assert_eq!(only, ["exec-plan"]);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(Cli::try_parse_from(["forklast", "serve", "--only", "compact"]).is_err());
    }
}
