use async_trait::async_trait;
use thiserror::Error;

use crate::domain::*;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("connection error: {0}")]
    ConnectionError(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("parse error: {0}")]
    ParseError(String),
    #[error("config error: {0}")]
    ConfigError(String),
    #[error("timeout")]
    Timeout,
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Provider of the unfiltered holiday list for one year.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch_holidays(&self, year: u16) -> ClientResult<Vec<HolidayRecord>>;
}
