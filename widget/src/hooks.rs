//! Lifecycle hooks.

use ghost_search::MatchResult;
use ghost_search_core::Record;

/// Side-channel lifecycle notifications.
///
/// Every call point has a no-op default. Implementations observe; their
/// return values are ignored and they never alter control flow.
pub trait Hooks {
    /// Fires when a trigger begins processing, before anything else runs.
    fn before_display(&self) {}

    /// Fires after rendering, with the truncated ranked list.
    fn after_display(&self, _results: &[MatchResult]) {}

    /// Fires immediately before the one-time corpus fetch.
    fn before_fetch(&self) {}

    /// Fires once the corpus fetch completes successfully.
    fn after_fetch(&self, _corpus: &[Record]) {}

    /// Fires before query execution.
    fn before_search(&self) {}
}

/// Hook implementation that observes nothing.
pub struct NoopHooks;

impl Hooks for NoopHooks {}
