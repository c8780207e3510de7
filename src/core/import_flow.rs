// src/core/import_flow.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::api::import::MarketImportRequester;
use crate::api::models::ImportResponse;
use crate::config::files::SettingsStore;
use crate::cookies::{self, CookieSource};
use crate::error::ImportError;

use super::status::{StatusKind, StatusSink};

const RESULT_DETAIL_DELAY: Duration = Duration::from_secs(1);

pub struct ImportFlow {
    requester: MarketImportRequester,
    cookies: Arc<dyn CookieSource>,
    settings: Arc<dyn SettingsStore>,
    count: u32,
    in_flight: AtomicBool,
}

impl ImportFlow {
    pub fn new(
        requester: MarketImportRequester,
        cookies: Arc<dyn CookieSource>,
        settings: Arc<dyn SettingsStore>,
        count: u32,
    ) -> Self {
        ImportFlow {
            requester,
            cookies,
            settings,
            count,
            in_flight: AtomicBool::new(false),
        }
    }

    pub async fn run(
        &self,
        user_id: &str,
        status: &mut dyn StatusSink,
    ) -> Result<ImportResponse, ImportError> {
        if user_id.trim().is_empty() {
            status.set(StatusKind::Error, "⚠️ Please enter your User ID");
            return Err(ImportError::MissingUserId);
        }

        // Taken before the first await so a racing trigger is rejected
        // instead of starting a second flow.
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::warn!("Import already running, ignoring trigger");
            return Err(ImportError::AlreadyRunning);
        }
        let _guard = FlightGuard {
            flag: &self.in_flight,
        };

        let store = Arc::clone(&self.settings);
        let saved_id = user_id.to_string();
        tokio::spawn(async move {
            if let Err(e) = store.save_user_id(&saved_id).await {
                log::warn!("Failed to save user id: {}", e);
            }
        });

        let result = self.import(user_id, status).await;
        if let Err(e) = &result {
            log::error!("Import error: {}", e);
            status.set(StatusKind::Error, &format!("❌ Error: {}", e));
        }
        result
    }

    async fn import(
        &self,
        user_id: &str,
        status: &mut dyn StatusSink,
    ) -> Result<ImportResponse, ImportError> {
        status.set(StatusKind::Neutral, "⏳ Extracting cookies...");

        let cookie_string = match cookies::extract_session_cookies(self.cookies.as_ref()).await {
            Some(cookie_string) => cookie_string,
            None => return Err(ImportError::CookieExtraction),
        };

        status.set(StatusKind::Neutral, "📡 Sending to CS2 Tracker...");

        let result = self
            .requester
            .import_market_history(user_id, &cookie_string, self.count)
            .await?;

        status.set(
            StatusKind::Success,
            &format!("✅ Imported {} transactions!", result.imported),
        );

        sleep(RESULT_DETAIL_DELAY).await;
        status.set(
            StatusKind::Success,
            &format!(
                "✅ Success!\nImported: {}\nSkipped: {}\nTotal: {}",
                result.imported, result.skipped, result.total
            ),
        );

        Ok(result)
    }
}

// Clears the in-flight flag on every exit path.
struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
