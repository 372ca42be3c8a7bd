use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Case matching behavior, mapped onto nucleo's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMatching {
    Sensitive,
    Insensitive,
    /// Case-insensitive unless the query contains uppercase.
    #[default]
    Smart,
}

/// Strategy for executing a query over the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// One index over the whole corpus, searched in place.
    Sync,
    /// Consecutive chunks of `chunk_size` records, searched concurrently.
    /// The last chunk may be shorter.
    Chunked { chunk_size: NonZeroUsize },
}

impl Default for QueryMode {
    /// Chunked execution with single-record chunks.
    fn default() -> Self {
        Self::Chunked {
            chunk_size: NonZeroUsize::MIN,
        }
    }
}

/// Matching options consumed by every per-chunk index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Record fields searched for matches. The best-scoring field ranks the
    /// record.
    pub keys: Vec<String>,
    /// Display limit applied by the renderer; rankings are computed in full.
    pub limit: usize,
    pub mode: QueryMode,
    pub case_matching: CaseMatching,
    pub unicode_normalization: bool,
    /// Whitespace-separated query atoms that must all match.
    pub tokenize: bool,
    /// Collect matched character indices alongside each result.
    pub include_matches: bool,
    /// Non-empty queries shorter than this match nothing.
    pub min_match_char_length: usize,
    /// Queries longer than this are rejected.
    pub max_pattern_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            keys: vec!["title".to_string()],
            limit: 10,
            mode: QueryMode::default(),
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
            tokenize: true,
            include_matches: true,
            min_match_char_length: 2,
            max_pattern_length: 32,
        }
    }
}
