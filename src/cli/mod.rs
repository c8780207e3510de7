// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod input;

#[derive(Parser, Debug)]
#[command(name = "cs2import", about = "Import Steam Market history into CS2 Tracker")]
pub struct Cli {
    /// User ID to import for (skips the prompt)
    #[arg(long)]
    pub user_id: Option<String>,

    /// Path to the settings file
    #[arg(long, default_value = "settings.json")]
    pub settings: PathBuf,

    /// Explicit path to a Firefox cookies.sqlite
    #[arg(long)]
    pub cookie_db: Option<PathBuf>,

    /// CS2 Tracker server URL (overrides the settings file)
    #[arg(long)]
    pub server: Option<String>,

    /// Skip the automatic import even if it is enabled in the settings
    #[arg(long)]
    pub no_auto: bool,
}
