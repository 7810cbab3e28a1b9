//! Request lifecycle and last-issued-wins result slot.

use ceylon_core::Error;
use std::future::Future;
use tokio::sync::Mutex;

/// Lifecycle of one service call as seen by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Requesting,
    Succeeded(T),
    /// Holds the human-readable failure message.
    Failed(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_requesting(&self) -> bool {
        matches!(self, RequestState::Requesting)
    }

    /// Terminal state for a finished call.
    pub fn from_result(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => RequestState::Succeeded(value),
            Err(e) => RequestState::Failed(e.to_string()),
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug)]
struct SlotInner<T> {
    latest: u64,
    state: RequestState<T>,
}

/// Shared result slot where only the most recently issued request may write.
///
/// Overlapping requests are allowed. A completion whose ticket has been
/// superseded by a later [`ResultSlot::begin`] is discarded, regardless of
/// the order in which the requests finish.
#[derive(Debug)]
pub struct ResultSlot<T> {
    inner: Mutex<SlotInner<T>>,
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResultSlot<T> {
    pub fn new() -> Self {
        Self { inner: Mutex::new(SlotInner { latest: 0, state: RequestState::Idle }) }
    }

    /// Issue a new request, superseding any in flight, and move to `Requesting`.
    pub async fn begin(&self) -> Ticket {
        let mut inner = self.inner.lock().await;
        inner.latest += 1;
        inner.state = RequestState::Requesting;
        Ticket(inner.latest)
    }

    /// Apply a result if `ticket` is still the latest request.
    ///
    /// Returns whether the result was applied.
    pub async fn complete(&self, ticket: Ticket, result: Result<T, Error>) -> bool {
        let mut inner = self.inner.lock().await;
        if ticket.0 != inner.latest {
            tracing::debug!(ticket = ticket.0, latest = inner.latest, "discarding superseded result");
            return false;
        }

        inner.state = RequestState::from_result(result);
        true
    }

    /// Run `request` as a newly issued request and apply its result if still current.
    pub async fn run<F>(&self, request: F) -> bool
    where
        F: Future<Output = Result<T, Error>>,
    {
        let ticket = self.begin().await;
        let result = request.await;
        self.complete(ticket, result).await
    }

    /// Whether `ticket` is still the latest request.
    pub async fn is_current(&self, ticket: Ticket) -> bool {
        self.inner.lock().await.latest == ticket.0
    }

    /// Take the current state, leaving the slot `Idle`.
    pub async fn take(&self) -> RequestState<T> {
        std::mem::take(&mut self.inner.lock().await.state)
    }
}

impl<T: Clone> ResultSlot<T> {
    /// Snapshot of the current state.
    pub async fn state(&self) -> RequestState<T> {
        self.inner.lock().await.state.clone()
    }
}
