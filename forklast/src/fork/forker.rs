//! The fork sequence: read the source session, create a new one, replay the text.

use serde_json::{json, Value};

use super::lookup::latest_assistant_text;
use super::policy::{NoticePolicy, TitlePolicy};
use crate::host::{HostClient, HostError, LogEntry, LogLevel, PromptBody, Toast, ToastVariant};

/// A slash command that forks the last assistant message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkCommand {
    /// Command name without the leading slash.
    pub name: &'static str,
    pub description: &'static str,
    /// `service` field of host log records.
    pub service: &'static str,
    pub title: TitlePolicy,
    pub notice: NoticePolicy,
}

impl ForkCommand {
    pub const EXEC_PLAN: &'static str = "exec-plan";
    pub const FORK_LAST_MESSAGE: &'static str = "fork-last-message";

    /// Copies the last answer (typically a plan) into a session titled "Exec plan".
    pub const fn exec_plan() -> Self {
        Self {
            name: Self::EXEC_PLAN,
            description: "Create a new session with the last message",
            service: "exec-plan-plugin",
            title: TitlePolicy::Fixed("Exec plan"),
            notice: NoticePolicy::Fixed("New session created. Select to open."),
        }
    }

    /// Copies the last answer into a session titled after its first characters.
    pub const fn fork_last_message(title_max_chars: usize) -> Self {
        Self {
            name: Self::FORK_LAST_MESSAGE,
            description: "Fork the last assistant message into a new session",
            service: "fork-last-message-plugin",
            title: TitlePolicy::Truncate {
                max_chars: title_max_chars,
            },
            notice: NoticePolicy::WithSessionId(
                "Forked last message to session {session_id}. Select to open.",
            ),
        }
    }

    /// Both commands, `fork-last-message` titled with the given limit.
    pub fn builtin(title_max_chars: usize) -> Vec<Self> {
        vec![Self::exec_plan(), Self::fork_last_message(title_max_chars)]
    }

    /// Look up a built-in command by name.
    pub fn by_name(name: &str, title_max_chars: usize) -> Option<Self> {
        Self::builtin(title_max_chars)
            .into_iter()
            .find(|command| command.name == name)
    }
}

/// How a fork attempt ended when no host call failed outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForkOutcome {
    /// Source session has no assistant text to copy.
    NoAssistantText,
    /// Host declined to create the new session.
    SessionNotCreated,
    Forked {
        new_session_id: String,
        title: String,
    },
}

/// Runs one fork for one command against one host. Holds no state between runs.
pub struct SessionForker<'a> {
    host: &'a dyn HostClient,
    command: &'a ForkCommand,
}

impl<'a> SessionForker<'a> {
    pub fn new(host: &'a dyn HostClient, command: &'a ForkCommand) -> Self {
        Self { host, command }
    }

    /// Fork the newest assistant text of `source_session_id` into a new session.
    ///
    /// Listing and prompt failures are returned as errors. A missing text or a
    /// refused session creation is logged and reported as an outcome instead.
    pub async fn fork(&self, source_session_id: &str) -> Result<ForkOutcome, HostError> {
        let messages = self.host.messages(source_session_id).await?;

        let Some(text) = latest_assistant_text(&messages) else {
            self.emit(
                LogLevel::Warn,
                "No assistant text message found to copy",
                Some(json!({ "sessionID": source_session_id })),
            )
            .await;
            return Ok(ForkOutcome::NoAssistantText);
        };

        let title = self.command.title.derive(text);
        let Some(session) = self.host.create_session(&title).await? else {
            self.emit(LogLevel::Error, "Failed to create new session", None).await;
            return Ok(ForkOutcome::SessionNotCreated);
        };
        tracing::debug!(session = %session.id, title = %session.title, "session created");

        self.host
            .prompt(&session.id, &PromptBody::silent_text(text))
            .await?;

        self.emit(
            LogLevel::Info,
            "Created new session with last message",
            Some(json!({
                "sourceSessionID": source_session_id,
                "newSessionID": session.id,
            })),
        )
        .await;

        self.notify(&session.id).await;

        Ok(ForkOutcome::Forked {
            new_session_id: session.id,
            title,
        })
    }

    /// Reveal the sessions list and confirm. Both are best effort: failures
    /// are logged and the fork still counts as done.
    async fn notify(&self, new_session_id: &str) {
        if let Err(e) = self.host.open_sessions().await {
            self.emit(
                LogLevel::Error,
                "Failed to open sessions list",
                Some(json!({ "error": e.to_string() })),
            )
            .await;
        }

        let toast = Toast {
            message: self.command.notice.render(new_session_id),
            variant: ToastVariant::Success,
        };
        if let Err(e) = self.host.show_toast(&toast).await {
            self.emit(
                LogLevel::Error,
                "Failed to show toast",
                Some(json!({ "error": e.to_string() })),
            )
            .await;
        }
    }

    /// Record a diagnostic locally and in the host log.
    pub async fn emit(&self, level: LogLevel, message: &str, extra: Option<Value>) {
        let command = self.command.name;
        let fields = extra.as_ref().map(ToString::to_string).unwrap_or_default();
        match level {
            LogLevel::Info => tracing::info!(command, extra = %fields, "{message}"),
            LogLevel::Warn => tracing::warn!(command, extra = %fields, "{message}"),
            LogLevel::Error => tracing::error!(command, extra = %fields, "{message}"),
        }

        let mut entry = LogEntry::new(self.command.service, level, message);
        if let Some(extra) = extra {
            entry = entry.with_extra(extra);
        }
        if let Err(e) = self.host.log(&entry).await {
            tracing::warn!(error = %e, "host log sink rejected record");
        }
    }
}
