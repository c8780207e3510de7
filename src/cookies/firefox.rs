// src/cookies/firefox.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use super::CookieSource;

pub struct FirefoxCookieSource {
    db_path: Option<PathBuf>,
}

impl FirefoxCookieSource {
    pub fn new(db_path: Option<PathBuf>) -> Self {
        FirefoxCookieSource { db_path }
    }

    fn find_cookie_db(&self) -> Result<PathBuf> {
        if let Some(path) = &self.db_path {
            if path.is_file() {
                return Ok(path.clone());
            }
            return Err(anyhow!("Cookie database not found at {}", path.display()));
        }

        let mut candidates = Vec::new();
        for root in profile_roots() {
            let direct = root.join("cookies.sqlite");
            if direct.is_file() {
                candidates.push(direct);
            }
            if let Ok(entries) = fs::read_dir(&root) {
                for entry in entries.flatten() {
                    let db = entry.path().join("cookies.sqlite");
                    if db.is_file() {
                        candidates.push(db);
                    }
                }
            }
        }

        newest_path(candidates).ok_or_else(|| anyhow!("Firefox cookies database not found"))
    }
}

#[async_trait]
impl CookieSource for FirefoxCookieSource {
    async fn get(&self, url: &str, name: &str) -> Result<Option<String>> {
        let host = reqwest::Url::parse(url)
            .with_context(|| format!("Invalid cookie origin: {}", url))?
            .host_str()
            .ok_or_else(|| anyhow!("Cookie origin has no host: {}", url))?
            .to_string();

        let db = self.find_cookie_db()?;
        let name = name.to_string();
        tokio::task::spawn_blocking(move || read_cookie(&db, &host, &name)).await?
    }
}

fn read_cookie(db: &Path, host: &str, name: &str) -> Result<Option<String>> {
    // Firefox keeps the live database locked; query a copy.
    let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
    let temp_db = temp_dir.path().join("cookies.sqlite");
    fs::copy(db, &temp_db)
        .with_context(|| format!("Failed to copy cookies DB {}", db.display()))?;

    let conn = Connection::open(&temp_db)
        .with_context(|| format!("Failed to open cookies DB {}", db.display()))?;

    let value = conn
        .query_row(
            "SELECT value FROM moz_cookies
             WHERE name = ?1 AND (host = ?2 OR host = ?3)
             ORDER BY LENGTH(host) DESC LIMIT 1",
            params![name, host, format!(".{}", host)],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .context("Failed to query Firefox cookies")?;

    Ok(value)
}

fn profile_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join(".mozilla/firefox"));
        roots.push(home.join("Library/Application Support/Firefox/Profiles"));
    }
    if let Some(config) = dirs::config_dir() {
        roots.push(config.join("Mozilla/Firefox/Profiles"));
    }
    roots
}

fn newest_path(candidates: Vec<PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().max_by_key(|path| {
        path.metadata()
            .and_then(|meta| meta.modified())
            .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
    })
}
