pub mod api;
pub mod error;
pub mod fetch;
pub mod types;

pub use error::{FetchError, Result};
pub use types::Record;
