//! CLI command execution.
//!
//! Every fork goes through the same hook the host would call, so a command
//! run from the terminal behaves exactly like the slash command.

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::fork::{ForkCommand, ForkOutcome};
use crate::host::OpencodeClient;
use crate::plugin::{CommandInvocation, HookOutcome, Plugin};
use crate::server;

use super::args::{Cli, Commands};

/// Resolve configuration: file, then environment, then CLI flags.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.override_server_url(cli.server_url.clone());
    if cli.directory.is_some() {
        config.host.directory.clone_from(&cli.directory);
    }
    Ok(config)
}

fn build_plugin(config: &Config, commands: Vec<ForkCommand>) -> Plugin {
    let client = OpencodeClient::new(&config.host.server_url, config.host.directory.clone());
    Plugin::new(Arc::new(client), commands)
}

/// Pick the commands the bridge should handle; empty means all.
fn select_commands(only: &[String], title_max_chars: usize) -> Result<Vec<ForkCommand>> {
    if only.is_empty() {
        return Ok(ForkCommand::builtin(title_max_chars));
    }
    only.iter()
        .map(|name| {
            ForkCommand::by_name(name, title_max_chars)
                .with_context(|| format!("Unknown command: {name}"))
        })
        .collect()
}

// === Command Execution ===

pub async fn execute(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let max_chars = config.fork.title_max_chars;

    match cli.command {
        Commands::ExecPlan { ref session_id } => {
            run_command(&config, ForkCommand::exec_plan(), session_id).await
        }
        Commands::ForkLastMessage { ref session_id } => {
            run_command(&config, ForkCommand::fork_last_message(max_chars), session_id).await
        }
        Commands::Commands => print_commands(&config),
        Commands::Serve { port, ref only } => {
            let commands = select_commands(only, max_chars)?;
            let plugin = Arc::new(build_plugin(&config, commands));
            server::start_server(plugin, port.unwrap_or(config.bridge.listen_port)).await
        }
    }
}

async fn run_command(config: &Config, command: ForkCommand, session_id: &str) -> Result<()> {
    let name = command.name;
    let plugin = build_plugin(config, vec![command]);
    let invocation = CommandInvocation::new(name, session_id);

    match plugin.before_execute(&invocation).await {
        HookOutcome::Handled(Some(ForkOutcome::Forked {
            new_session_id,
            title,
        })) => {
            println!("{new_session_id}");
            tracing::debug!(%title, "forked");
            Ok(())
        }
        HookOutcome::Handled(Some(ForkOutcome::NoAssistantText)) => {
            bail!("No assistant text found in session {session_id}")
        }
        HookOutcome::Handled(Some(ForkOutcome::SessionNotCreated)) => {
            bail!("The host did not create a new session")
        }
        HookOutcome::Handled(None) => bail!("/{name} failed; see the host log"),
        HookOutcome::PassThrough => bail!("/{name} was not handled"),
    }
}

fn print_commands(config: &Config) -> Result<()> {
    let plugin = build_plugin(config, ForkCommand::builtin(config.fork.title_max_chars));
    let json = serde_json::to_string_pretty(&plugin.contribution())
        .context("Failed to serialize command registry")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_by_default() {
        let commands = select_commands(&[], 50).unwrap();
        let names: Vec<_> = commands.iter().map(|c| c.name).collect();
        assert_eq!(names, ["exec-plan", "fork-last-message"]);
    }

    #[test]
    fn select_subset() {
        let commands = select_commands(&["fork-last-message".to_string()], 12).unwrap();
        assert_eq!(commands, vec![ForkCommand::fork_last_message(12)]);
        assert!(select_commands(&["nope".to_string()], 50).is_err());
    }
}
