// crates/notevault-cli/src/main.rs - CLI Application Entry Point
//
// notevault is an interactive prompt over a directory of Markdown notes:
//
// ```text
// > setvault ~/notes
// > new ideas
// > write ideas
// > search IDEA
// > push
// > quit
// ```
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   stdin lines   │───▶│   repl (table    │───▶│  Command Handlers   │
// │                 │    │   + dispatcher)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │ notevault-core +    │
//                        │ (vault + config) │    │ services (editor)   │
//                        └──────────────────┘    └─────────────────────┘
//
// Logs go to stderr (RUST_LOG, default "warn") so they never mix with the
// prompt on stdout.

use anyhow::Result;
use clap::Parser;
use notevault_core::{ConfigStore, SystemGateway};
use std::io;
use tracing_subscriber::EnvFilter;

mod cli; // Process arguments
mod commands; // Command implementations
mod context; // Session state passed to handlers
mod output; // Styled user-facing messages
mod repl; // Prompt loop and command table
mod services; // Editor and GUI launcher

#[cfg(test)]
mod testing;

use cli::Cli;
use context::Context;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let store = cli
        .config
        .map(ConfigStore::new)
        .unwrap_or_else(ConfigStore::at_default_location);
    let mut ctx = Context::new(store, Box::new(SystemGateway));
    tracing::debug!(config = %ctx.store().path().display(), "starting session");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A broken config file must not keep the user out of the session
    if let Err(e) = ctx.reload() {
        output::failure(&mut out, format_args!("Failed to load configuration: {e}"))?;
    }

    repl::run(&mut ctx, io::stdin().lock(), &mut out)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
