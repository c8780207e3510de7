// src/api/models.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct ImportRequest<'a> {
    pub cookies: &'a str,
    pub count: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ImportResponse {
    pub imported: u32,
    pub skipped: u32,
    pub total: u32,
}

#[derive(Deserialize, Debug)]
pub struct ApiError {
    #[serde(default)]
    pub detail: Option<String>,
}
