use clap::Parser;
use std::path::PathBuf;

/// Process arguments
///
/// Everything else happens at the interactive prompt; the only switch is
/// where the persisted configuration lives.
#[derive(Parser, Debug)]
#[command(name = "notevault")]
#[command(about = "Interactive manager for a vault of Markdown notes")]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of ~/.vaultconfig.json
    #[arg(long, env = "NOTEVAULT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}
