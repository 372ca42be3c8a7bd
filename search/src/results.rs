//! Query result types.

use ghost_search_core::Record;

/// One ranked match from the fuzzy engine.
///
/// Ephemeral: recomputed per query, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    record: Record,
    score: u32,
    matched: Option<Vec<u32>>,
}

impl MatchResult {
    pub(crate) fn new(record: Record, score: u32, matched: Option<Vec<u32>>) -> Self {
        Self {
            record,
            score,
            matched,
        }
    }

    /// The underlying record, unwrapped from any match metadata.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Match quality as reported by the engine; higher is better.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Matched character indices into the best-scoring field, when
    /// collected.
    pub fn matched_indices(&self) -> Option<&[u32]> {
        self.matched.as_deref()
    }
}

/// Globally ranked, best-first result list.
pub type RankedMatches = Vec<MatchResult>;
