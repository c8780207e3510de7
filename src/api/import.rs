// src/api/import.rs
use crate::error::ImportError;

use super::models::{ApiError, ImportRequest, ImportResponse};

pub struct MarketImportRequester {
    server_url: String,
    client: reqwest::Client,
}

impl MarketImportRequester {
    pub fn new(server_url: String) -> Self {
        MarketImportRequester {
            server_url: server_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn import_market_history(
        &self,
        user_id: &str,
        cookies: &str,
        count: u32,
    ) -> Result<ImportResponse, ImportError> {
        let url = format!("{}/api/import/steam-market", self.server_url);

        let response = self
            .client
            .post(&url)
            .query(&[("user_id", user_id)])
            .json(&ImportRequest { cookies, count })
            .send()
            .await?;

        if !response.status().is_success() {
            let detail = response
                .json::<ApiError>()
                .await
                .ok()
                .and_then(|error| error.detail);
            return Err(ImportError::Server(
                detail.unwrap_or_else(|| "Import failed".to_string()),
            ));
        }

        Ok(response.json::<ImportResponse>().await?)
    }
}
