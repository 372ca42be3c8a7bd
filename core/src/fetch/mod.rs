//! One-shot fetch latch.
//!
//! # Design
//!
//! - Three states: `Pending`, `InFlight`, `Fetched`.
//! - The fetch function runs only on the `Pending` -> `InFlight` transition,
//!   so concurrent triggers cannot start a duplicate network call.
//! - A failed fetch returns the gate to `Pending`; the next trigger retries.
//! - A successful fetch pins the corpus for the lifetime of the gate.

use crate::error::Result;
use crate::types::Record;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;

/// The corpus pinned by a successful fetch. Immutable from then on.
pub type Corpus = Arc<Vec<Record>>;

#[derive(Clone, Debug, Default)]
enum GateState {
    #[default]
    Pending,
    InFlight,
    Fetched(Corpus),
}

/// One-shot latch around the corpus fetch.
///
/// The lock guards only the state word; it is never held across the fetch
/// itself.
#[derive(Debug, Default)]
pub struct FetchGate {
    state: Mutex<GateState>,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the corpus once a fetch has completed successfully.
    pub fn corpus(&self) -> Option<Corpus> {
        match &*self.state.lock() {
            GateState::Fetched(corpus) => Some(corpus.clone()),
            _ => None,
        }
    }

    /// Runs `fetch` unless a fetch already succeeded or is in flight.
    ///
    /// Returns the corpus once it is available (whether this call fetched it
    /// or an earlier one did), `Ok(None)` when another caller's fetch is
    /// still outstanding (the call coalesces rather than duplicating the
    /// network request), and the fetch error otherwise. After an error the
    /// gate is `Pending` again and the next call retries.
    pub async fn ensure_fetched<F, Fut>(&self, fetch: F) -> Result<Option<Corpus>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Record>>>,
    {
        {
            let mut state = self.state.lock();
            match &*state {
                GateState::Fetched(corpus) => return Ok(Some(corpus.clone())),
                GateState::InFlight => return Ok(None),
                GateState::Pending => *state = GateState::InFlight,
            }
        }

        match fetch().await {
            Ok(records) => {
                let corpus: Corpus = Arc::new(records);
                *self.state.lock() = GateState::Fetched(corpus.clone());
                Ok(Some(corpus))
            }
            Err(err) => {
                *self.state.lock() = GateState::Pending;
                Err(err)
            }
        }
    }
}
