//! Query execution over the corpus.

use crate::config::{QueryMode, SearchOptions};
use crate::error::QueryError;
use crate::index::FuzzyIndex;
use crate::results::RankedMatches;
use futures_util::future::try_join_all;
use ghost_search_core::Record;

/// Executes queries over a fetched corpus.
///
/// The strategy is fixed at construction from the resolved configuration:
/// one whole-corpus index, or concurrent per-chunk searches merged into a
/// single stable best-first ranking.
#[derive(Debug, Clone)]
pub struct QueryOrchestrator {
    options: SearchOptions,
}

impl QueryOrchestrator {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Runs `query` against `corpus`, returning the ranked result list.
    ///
    /// An empty corpus yields an empty ranking without touching the engine.
    /// A failing chunk fails the whole call; partial rankings are never
    /// returned.
    pub async fn query(&self, corpus: &[Record], query: &str) -> Result<RankedMatches, QueryError> {
        if corpus.is_empty() {
            return Ok(RankedMatches::new());
        }

        match self.options.mode {
            QueryMode::Sync => FuzzyIndex::new(corpus, &self.options).search(query),
            QueryMode::Chunked { chunk_size } => {
                self.query_chunked(corpus, query, chunk_size.get()).await
            }
        }
    }

    async fn query_chunked(
        &self,
        corpus: &[Record],
        query: &str,
        chunk_size: usize,
    ) -> Result<RankedMatches, QueryError> {
        let tasks: Vec<_> = corpus
            .chunks(chunk_size)
            .map(|chunk| {
                let chunk: Vec<Record> = chunk.to_vec();
                let options = self.options.clone();
                let query = query.to_string();
                tokio::task::spawn_blocking(move || FuzzyIndex::new(&chunk, &options).search(&query))
            })
            .collect();

        // Join the whole task set before merging. Chunks may finish in any
        // order; the concatenation below is in corpus order regardless.
        let per_chunk = try_join_all(tasks)
            .await
            .map_err(|err| QueryError::Task(err.to_string()))?;

        let mut merged = RankedMatches::new();
        for chunk_matches in per_chunk {
            merged.extend(chunk_matches?);
        }
        // Stable sort: equal scores keep concatenation order.
        merged.sort_by(|a, b| b.score().cmp(&a.score()));
        Ok(merged)
    }
}
