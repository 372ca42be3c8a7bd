use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors raised while retrieving the corpus from the content API.
///
/// All of these leave the fetch gate retryable; the caller logs them and
/// waits for the next trigger.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("malformed record in payload: {0}")]
    Payload(String),

    #[error("collection `{0}` missing from response")]
    MissingCollection(String),
}
