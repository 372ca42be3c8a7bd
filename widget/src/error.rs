use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("fetch error: {0}")]
    Fetch(#[from] ghost_search_core::FetchError),

    #[error("query error: {0}")]
    Query(#[from] ghost_search::QueryError),
}

/// Configuration problems detected at initialization.
///
/// Any of these aborts initialization: the diagnostic is logged and no
/// binding is installed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("content api host missing; set the host without a trailing slash")]
    MissingHost,

    #[error("content api key missing; copy it from the integrations screen")]
    MissingKey,

    #[error("element not found: {0}")]
    ElementNotFound(String),
}
