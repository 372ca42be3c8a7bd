use thiserror::Error;

/// Errors raised while executing a query.
///
/// Any of these aborts the whole query; the caller logs the error and
/// renders nothing.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query of {len} chars exceeds the {max} char pattern limit")]
    PatternTooLong { len: usize, max: usize },

    #[error("chunk search task failed: {0}")]
    Task(String),
}
