use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("network error: {0}")]
    Network(String),
    #[error("provider returned {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("missing field: {0}")]
    MissingField(String),
    #[error("invalid season '{0}': expected a four-digit year or 'current'")]
    InvalidSeason(String),
    #[error("invalid round '{0}': expected a positive number")]
    InvalidRound(String),
    #[error("invalid driver id '{0}': expected a provider slug such as 'max_verstappen'")]
    InvalidDriver(String),
    #[error("config error: {0}")]
    Config(String),
}

/// Failure cause inside the stats client. Never leaves the client; every
/// accessor logs it and hands back `None`.
pub type FetchError = AppError;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
