//! Ephemeral fuzzy index over one corpus chunk.

use crate::config::{CaseMatching, SearchOptions};
use crate::error::QueryError;
use crate::results::MatchResult;
use ghost_search_core::Record;
use nucleo::pattern::{AtomKind, CaseMatching as PatternCase, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};

/// Per-chunk fuzzy index.
///
/// Built fresh for every query. Scores each record across the configured
/// keys and keeps the best-scoring field per record; results come back
/// ranked best-first with ties in chunk order.
pub(crate) struct FuzzyIndex<'a> {
    records: &'a [Record],
    options: &'a SearchOptions,
}

impl<'a> FuzzyIndex<'a> {
    pub(crate) fn new(records: &'a [Record], options: &'a SearchOptions) -> Self {
        Self { records, options }
    }

    /// Runs `query` over the chunk.
    ///
    /// An empty query matches every record (the engine scores an empty
    /// pattern as a universal match); a non-empty query shorter than
    /// `min_match_char_length` matches nothing.
    pub(crate) fn search(&self, query: &str) -> Result<Vec<MatchResult>, QueryError> {
        let len = query.chars().count();
        if len > self.options.max_pattern_length {
            return Err(QueryError::PatternTooLong {
                len,
                max: self.options.max_pattern_length,
            });
        }
        if !query.is_empty() && len < self.options.min_match_char_length {
            return Ok(Vec::new());
        }

        let pattern = self.pattern(query);
        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);
        let mut buf = Vec::new();
        let mut indices = Vec::new();
        let mut matches = Vec::new();

        for record in self.records {
            let mut best: Option<(u32, Option<Vec<u32>>)> = None;

            for key in &self.options.keys {
                let Some(text) = record.text(key) else {
                    continue;
                };
                let haystack = Utf32Str::new(text, &mut buf);

                let scored = if self.options.include_matches {
                    indices.clear();
                    pattern.indices(haystack, &mut matcher, &mut indices).map(|score| {
                        indices.sort_unstable();
                        indices.dedup();
                        (score, Some(indices.clone()))
                    })
                } else {
                    pattern.score(haystack, &mut matcher).map(|score| (score, None))
                };

                if let Some((score, matched)) = scored {
                    if best.as_ref().is_none_or(|(top, _)| score > *top) {
                        best = Some((score, matched));
                    }
                }
            }

            if let Some((score, matched)) = best {
                matches.push(MatchResult::new(record.clone(), score, matched));
            }
        }

        matches.sort_by(|a, b| b.score().cmp(&a.score()));
        Ok(matches)
    }

    fn pattern(&self, query: &str) -> Pattern {
        let case_matching = match self.options.case_matching {
            CaseMatching::Sensitive => PatternCase::Respect,
            CaseMatching::Insensitive => PatternCase::Ignore,
            CaseMatching::Smart => PatternCase::Smart,
        };
        let normalization = if self.options.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        if self.options.tokenize {
            Pattern::parse(query, case_matching, normalization)
        } else {
            Pattern::new(query, case_matching, normalization, AtomKind::Fuzzy)
        }
    }
}
