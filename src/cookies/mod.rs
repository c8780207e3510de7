// src/cookies/mod.rs
use anyhow::Result;
use async_trait::async_trait;

pub mod firefox;


pub const STEAM_COMMUNITY_URL: &str = "https://steamcommunity.com";

const SESSION_ID_COOKIE: &str = "sessionid";
const LOGIN_SECURE_COOKIE: &str = "steamLoginSecure";
const COUNTRY_COOKIE: &str = "steamCountry";

/// Read access to named cookies of a single origin.
#[async_trait]
pub trait CookieSource: Send + Sync {
    async fn get(&self, url: &str, name: &str) -> Result<Option<String>>;
}

/// Builds the Steam session cookie string, or nothing if either
/// required cookie is unavailable.
pub async fn extract_session_cookies(source: &dyn CookieSource) -> Option<String> {
    let lookups = async {
        let session_id = source.get(STEAM_COMMUNITY_URL, SESSION_ID_COOKIE).await?;
        let login_secure = source.get(STEAM_COMMUNITY_URL, LOGIN_SECURE_COOKIE).await?;
        let country = source.get(STEAM_COMMUNITY_URL, COUNTRY_COOKIE).await?;
        anyhow::Ok((session_id, login_secure, country))
    };

    let (session_id, login_secure, country) = match lookups.await {
        Ok(values) => values,
        Err(e) => {
            log::error!("Error getting cookies: {}", e);
            return None;
        }
    };

    let (session_id, login_secure) = match (session_id, login_secure) {
        (Some(session_id), Some(login_secure)) => (session_id, login_secure),
        _ => {
            log::error!("Missing essential cookies");
            return None;
        }
    };

    let mut cookie_string = format!(
        "sessionid={}; steamLoginSecure={}",
        session_id, login_secure
    );
    if let Some(country) = country {
        cookie_string.push_str(&format!("; steamCountry={}", country));
    }

    Some(cookie_string)
}
