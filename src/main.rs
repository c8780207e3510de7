// src/main.rs
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use tokio::time::sleep;

use cs2import::api::import::MarketImportRequester;
use cs2import::cli::{input, Cli};
use cs2import::config::files::{JsonSettingsStore, SettingsStore};
use cs2import::cookies::firefox::FirefoxCookieSource;
use cs2import::core::import_flow::ImportFlow;
use cs2import::core::status::ConsoleStatus;

const AUTO_IMPORT_DELAY: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    let cli = Cli::parse();

    println!("{}", "🚀 CS2 Tracker - Steam Market import".bold().cyan());

    let store = Arc::new(JsonSettingsStore::new(cli.settings.clone()));
    let settings = store.load().await?;

    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| settings.server_url().to_string());
    let requester = MarketImportRequester::new(server_url);
    let cookie_source = Arc::new(FirefoxCookieSource::new(cli.cookie_db.clone()));
    let flow = ImportFlow::new(
        requester,
        cookie_source,
        store.clone(),
        settings.import_count(),
    );

    let mut status = ConsoleStatus;

    if let Some(user_id) = cli.user_id {
        let _ = flow.run(&user_id, &mut status).await;
        return Ok(());
    }

    if let Some(saved) = settings.user_id.clone() {
        if settings.auto_import() && !cli.no_auto {
            println!(
                "{}",
                format!("⚙️  Auto-import enabled for user {}", saved.bold()).blue()
            );
            sleep(AUTO_IMPORT_DELAY).await;
            let _ = flow.run(&saved, &mut status).await;
            return Ok(());
        }
    }

    let user_id = input::get_user_id(settings.user_id.as_deref())?;
    let _ = flow.run(&user_id, &mut status).await;

    Ok(())
}
