//! Forklast - fork the last assistant message of an opencode session.
//!
//! Reads the newest assistant answer of a session, opens a fresh session and
//! records that answer in it without asking the model to reply.
//!
//! Architecture:
//! - The opencode server owns sessions, messages, logs and the TUI
//! - `host` talks to it over HTTP; `fork` holds the sequence itself
//! - `plugin` wraps the sequence as slash commands with a pre-execution hook
//! - `server` exposes that hook to a host-side shim over HTTP

mod cli;
mod config;
mod fork;
mod host;
mod logging;
mod models;
mod plugin;
mod server;

use anyhow::Result;
use clap::Parser;

use cli::{execute, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);
    execute(cli).await
}
