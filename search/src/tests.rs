use super::*;
use common::{chunked, record, records, run, sync, titles};
use ghost_search_core::Record;
use std::num::NonZeroUsize;

mod common {
    use super::*;

    pub(super) fn record(title: &str, slug: &str) -> Record {
        serde_json::from_value(serde_json::json!({ "title": title, "slug": slug })).unwrap()
    }

    pub(super) fn records(titles: &[&str]) -> Vec<Record> {
        titles
            .iter()
            .map(|title| record(title, &title.to_lowercase().replace(' ', "-")))
            .collect()
    }

    pub(super) fn sync() -> SearchOptions {
        SearchOptions {
            mode: QueryMode::Sync,
            ..SearchOptions::default()
        }
    }

    pub(super) fn chunked(chunk_size: usize) -> SearchOptions {
        SearchOptions {
            mode: QueryMode::Chunked {
                chunk_size: NonZeroUsize::new(chunk_size).unwrap(),
            },
            ..SearchOptions::default()
        }
    }

    pub(super) async fn run(options: SearchOptions, corpus: &[Record], query: &str) -> RankedMatches {
        QueryOrchestrator::new(options)
            .query(corpus, query)
            .await
            .unwrap()
    }

    pub(super) fn titles(matches: &RankedMatches) -> Vec<String> {
        matches
            .iter()
            .map(|m| m.record().text("title").unwrap().to_string())
            .collect()
    }
}

mod sync_mode {
    use super::*;

    #[tokio::test]
    async fn test_sync_ranks_best_first() {
        let corpus = records(&["grape", "apple", "application", "pear"]);

        let matches = run(sync(), &corpus, "app").await;

        assert!(!matches.is_empty());
        for pair in matches.windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
        assert!(!titles(&matches).contains(&"pear".to_string()));
    }

    #[tokio::test]
    async fn test_sync_empty_query_matches_all() {
        let corpus = records(&["alpha", "beta", "gamma"]);

        let matches = run(sync(), &corpus, "").await;

        assert_eq!(matches.len(), 3);
    }

    #[tokio::test]
    async fn test_sync_no_matches() {
        let corpus = records(&["alpha", "beta"]);

        let matches = run(sync(), &corpus, "zzzz").await;

        assert!(matches.is_empty());
    }
}

mod chunked_mode {
    use super::*;

    #[tokio::test]
    async fn test_chunked_matches_sync_result_set() {
        let corpus = records(&["apple pie", "snapple", "application", "grape", "pear tart"]);

        let from_sync = run(sync(), &corpus, "app").await;
        let from_chunks = run(chunked(2), &corpus, "app").await;

        let mut sync_titles = titles(&from_sync);
        let mut chunk_titles = titles(&from_chunks);
        sync_titles.sort();
        chunk_titles.sort();
        assert_eq!(sync_titles, chunk_titles);

        for pair in from_chunks.windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
    }

    #[tokio::test]
    async fn test_chunked_last_chunk_may_be_shorter() {
        let corpus = records(&["alpha", "alpine", "albatross", "almond", "algae"]);

        let matches = run(chunked(2), &corpus, "al").await;

        assert_eq!(matches.len(), 5);
    }

    #[tokio::test]
    async fn test_chunked_equal_scores_keep_corpus_order() {
        let corpus = vec![
            record("alpha", "first"),
            record("alpha", "second"),
            record("alpha", "third"),
        ];

        let matches = run(chunked(1), &corpus, "alpha").await;

        let slugs: Vec<&str> = matches
            .iter()
            .map(|m| m.record().text("slug").unwrap())
            .collect();
        assert_eq!(slugs, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_chunked_empty_corpus_yields_empty_ranking() {
        let matches = run(chunked(1), &[], "anything").await;

        assert!(matches.is_empty());
    }

    /// Corpus `[Alpha, Beta, Gamma]`, query `alph`, single-record chunks:
    /// the `Alpha` record ranks first.
    #[tokio::test]
    async fn test_chunked_single_record_chunks_rank_prefix_match_first() {
        let corpus = records(&["Alpha", "Beta", "Gamma"]);

        let matches = run(chunked(1), &corpus, "alph").await;

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].record().text("title"), Some("Alpha"));
    }
}

mod guards {
    use super::*;

    #[tokio::test]
    async fn test_query_over_pattern_limit_fails_whole_query() {
        let corpus = records(&["alpha"]);
        let long_query = "a".repeat(33);

        let sync_result = QueryOrchestrator::new(sync()).query(&corpus, &long_query).await;
        let chunked_result = QueryOrchestrator::new(chunked(1))
            .query(&corpus, &long_query)
            .await;

        assert!(matches!(
            sync_result,
            Err(QueryError::PatternTooLong { len: 33, max: 32 })
        ));
        assert!(matches!(
            chunked_result,
            Err(QueryError::PatternTooLong { len: 33, max: 32 })
        ));
    }

    #[tokio::test]
    async fn test_query_below_min_match_length_matches_nothing() {
        let corpus = records(&["alpha"]);

        let matches = run(chunked(1), &corpus, "a").await;

        assert!(matches.is_empty());
    }
}

mod matching {
    use super::*;

    #[tokio::test]
    async fn test_best_scoring_key_ranks_the_record() {
        let corpus = vec![record("Release notes", "alpha-release")];
        let options = SearchOptions {
            keys: vec!["title".to_string(), "slug".to_string()],
            ..chunked(1)
        };

        let matches = run(options, &corpus, "alpha").await;

        assert_eq!(matches.len(), 1);
    }

    #[tokio::test]
    async fn test_tokenized_query_requires_every_atom() {
        let corpus = records(&["alpha gamma", "alpha", "gamma"]);

        let matches = run(chunked(1), &corpus, "alpha gamma").await;

        assert_eq!(titles(&matches), ["alpha gamma"]);
    }

    #[tokio::test]
    async fn test_matched_indices_collected_when_enabled() {
        let corpus = records(&["alphabet"]);

        let matches = run(chunked(1), &corpus, "alpha").await;

        let indices = matches[0].matched_indices().unwrap();
        assert!(!indices.is_empty());
        assert!(indices.iter().all(|index| (*index as usize) < "alphabet".len()));
    }

    #[tokio::test]
    async fn test_matched_indices_skipped_when_disabled() {
        let corpus = records(&["alphabet"]);
        let options = SearchOptions {
            include_matches: false,
            ..chunked(1)
        };

        let matches = run(options, &corpus, "alpha").await;

        assert!(matches[0].matched_indices().is_none());
    }
}
