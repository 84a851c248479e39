//! Hook bridge - exposes the plugin to the host over HTTP.
//!
//! A small shim registered inside the host forwards its plugin hooks here,
//! so the fork logic runs in this process while the host keeps ownership of
//! sessions and the TUI.
//!
//! Endpoints:
//! - GET  /health - Liveness probe
//! - GET  /commands - Command registry entries contributed by the plugin
//! - POST /hooks/config - Merge our commands into the host's registry
//! - POST /hooks/command-execute-before - Run the pre-execution hook

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::plugin::{CommandConfig, CommandInvocation, Plugin};

/// Hook response understood by the shim.
#[derive(Debug, Serialize)]
struct HookResponse {
    /// `true` tells the host to skip its own command handling.
    handled: bool,
}

/// Build the bridge router.
pub fn router(plugin: Arc<Plugin>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/commands", get(list_commands))
        .route("/hooks/config", post(merge_config))
        .route("/hooks/command-execute-before", post(command_execute_before))
        .with_state(plugin)
}

/// Serve the bridge until the process is stopped.
pub async fn start_server(plugin: Arc<Plugin>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let names: Vec<_> = plugin.commands().iter().map(|c| c.name).collect();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, commands = ?names, "hook bridge listening");

    axum::serve(listener, router(plugin))
        .await
        .context("Server error")
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_commands(State(plugin): State<Arc<Plugin>>) -> Json<CommandConfig> {
    Json(plugin.contribution())
}

async fn merge_config(
    State(plugin): State<Arc<Plugin>>,
    Json(mut config): Json<CommandConfig>,
) -> Json<CommandConfig> {
    plugin.config(&mut config);
    Json(config)
}

async fn command_execute_before(
    State(plugin): State<Arc<Plugin>>,
    Json(invocation): Json<CommandInvocation>,
) -> Json<HookResponse> {
    tracing::debug!(
        command = %invocation.command,
        session = %invocation.session_id,
        "hook invoked"
    );
    let outcome = plugin.before_execute(&invocation).await;
    Json(HookResponse {
        handled: outcome.is_handled(),
    })
}
