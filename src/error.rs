// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Please enter your User ID")]
    MissingUserId,

    #[error("Could not extract Steam cookies. Make sure you are logged into Steam.")]
    CookieExtraction,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Server(String),

    #[error("an import is already running")]
    AlreadyRunning,
}
