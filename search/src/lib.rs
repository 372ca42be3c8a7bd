//! Fuzzy query orchestration for the search widget.
//!
//! # Design
//!
//! - Every query builds ephemeral per-chunk indexes; nothing persists
//!   between queries. The corpus itself is pinned by the fetch gate in
//!   `ghost_search_core`.
//! - Two strategies behind one entry point: a single whole-corpus index, or
//!   chunked execution where every chunk is searched concurrently and the
//!   per-chunk rankings are merged with a stable best-first sort.
//! - Scores follow nucleo's convention: higher is better. Equal scores keep
//!   corpus order.
//! - A failing chunk fails the whole query; partial rankings are never
//!   returned.

mod config;
mod engine;
mod error;
mod index;
mod results;

pub use config::{CaseMatching, QueryMode, SearchOptions};
pub use engine::QueryOrchestrator;
pub use error::QueryError;
pub use results::{MatchResult, RankedMatches};

#[cfg(test)]
mod tests;
