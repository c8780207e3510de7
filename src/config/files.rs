// src/config/files.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const DEFAULT_IMPORT_COUNT: u32 = 500;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_import: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_count: Option<u32>,
}

impl Settings {
    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn import_count(&self) -> u32 {
        self.import_count.unwrap_or(DEFAULT_IMPORT_COUNT)
    }

    pub fn auto_import(&self) -> bool {
        self.auto_import.unwrap_or(false)
    }
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self) -> Result<Settings>;
    async fn save_user_id(&self, user_id: &str) -> Result<()>;
}

pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        JsonSettingsStore { path }
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let settings = serde_json::from_str(&contents).with_context(|| {
            format!(
                "⚠️  Failed to parse {} - Invalid JSON format",
                self.path.display()
            )
        })?;
        Ok(settings)
    }

    async fn save_user_id(&self, user_id: &str) -> Result<()> {
        // Other fields (auto_import, server overrides) are preserved as-is.
        let mut settings = self.load().await.unwrap_or_default();
        settings.user_id = Some(user_id.to_string());
        let contents = serde_json::to_string_pretty(&settings)?;
        tokio::fs::write(&self.path, contents)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
