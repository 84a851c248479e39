//! Command registration and the pre-execution hook.
//!
//! The host calls `config` once at startup and `before_execute` ahead of
//! every slash command. Our commands are fully handled here; the host's own
//! command pipeline never runs for them.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::fork::{ForkCommand, ForkOutcome, SessionForker};
use crate::host::{HostClient, LogLevel};

/// One entry of the host's command registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEntry {
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fields we do not interpret (agent, model, ...), kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The host's command registry: name -> entry.
pub type CommandConfig = BTreeMap<String, CommandEntry>;

/// A slash command about to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInvocation {
    pub command: String,
    #[serde(rename = "sessionID")]
    pub session_id: String,
}

impl CommandInvocation {
    pub fn new(command: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            session_id: session_id.into(),
        }
    }
}

/// What the host should do after the hook ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Not ours; continue normal command processing.
    PassThrough,
    /// Ours; skip normal processing. `None` when the fork failed.
    Handled(Option<ForkOutcome>),
}

impl HookOutcome {
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

/// The fork commands bound to a host.
pub struct Plugin {
    host: Arc<dyn HostClient>,
    commands: Vec<ForkCommand>,
}

impl Plugin {
    pub fn new(host: Arc<dyn HostClient>, commands: Vec<ForkCommand>) -> Self {
        Self { host, commands }
    }

    pub fn commands(&self) -> &[ForkCommand] {
        &self.commands
    }

    /// Register our commands, replacing same-named entries only.
    pub fn config(&self, config: &mut CommandConfig) {
        for command in &self.commands {
            config.insert(
                command.name.to_string(),
                CommandEntry {
                    template: String::new(),
                    description: Some(command.description.to_string()),
                    extra: Map::new(),
                },
            );
        }
    }

    /// Registry entries contributed by this plugin alone.
    pub fn contribution(&self) -> CommandConfig {
        let mut config = CommandConfig::new();
        self.config(&mut config);
        config
    }

    /// Intercept a command before the host executes it.
    ///
    /// Our own commands always come back `Handled`, even when forking failed;
    /// failures only reach the log.
    pub async fn before_execute(&self, invocation: &CommandInvocation) -> HookOutcome {
        let Some(command) = self
            .commands
            .iter()
            .find(|command| command.name == invocation.command)
        else {
            return HookOutcome::PassThrough;
        };

        let forker = SessionForker::new(self.host.as_ref(), command);
        match forker.fork(&invocation.session_id).await {
            Ok(outcome) => HookOutcome::Handled(Some(outcome)),
            Err(e) => {
                forker
                    .emit(
                        LogLevel::Error,
                        &format!("Failed to execute /{}", command.name),
                        Some(json!({ "error": e.to_string() })),
                    )
                    .await;
                HookOutcome::Handled(None)
            }
        }
    }
}
