use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' was not successful, status code: {status}")]
    RequestNotOk { url: String, status: StatusCode },
}
