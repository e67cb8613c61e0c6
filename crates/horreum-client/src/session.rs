//! Guards a comparison view against results of superseded invocations.
//!
//! Each time the datasets or the active view change, the caller starts a new
//! invocation with [`ComparisonSession::begin`] and keeps the returned token
//! with the in-flight comparison. When the comparison settles the result is
//! handed back through [`ComparisonSession::apply`]; anything carrying an
//! older token is dropped.

use horreum_store::Alert;
use tracing::debug;

use crate::error::{AlertCategory, CompareError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvocationToken(u64);

impl InvocationToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonState<T> {
    Idle,
    Loading(InvocationToken),
    Ready(T),
    /// The last invocation failed. No partial result is kept.
    Failed(Alert),
}

/// What [`ComparisonSession::apply`] did with a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A newer invocation has started; the result was discarded.
    Stale,
    Ready,
    /// The result was an error; the alert should be shown once.
    Failed(Alert),
}

#[derive(Debug, Clone)]
pub struct ComparisonSession<T> {
    latest: u64,
    state: ComparisonState<T>,
    category: AlertCategory,
}

impl<T> ComparisonSession<T> {
    pub fn new(category: AlertCategory) -> Self {
        Self {
            latest: 0,
            state: ComparisonState::Idle,
            category,
        }
    }

    /// Session for label comparisons.
    pub fn labels() -> Self {
        Self::new(AlertCategory::LoadLabels)
    }

    /// Session for view comparisons.
    pub fn view() -> Self {
        Self::new(AlertCategory::FetchView)
    }

    pub fn begin(&mut self) -> InvocationToken {
        self.latest += 1;
        let token = InvocationToken(self.latest);
        debug!(token = self.latest, "comparison started");
        self.state = ComparisonState::Loading(token);
        token
    }

    pub fn is_current(&self, token: InvocationToken) -> bool {
        token.0 == self.latest
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ComparisonState::Loading(_))
    }

    pub fn state(&self) -> &ComparisonState<T> {
        &self.state
    }

    pub fn result(&self) -> Option<&T> {
        match &self.state {
            ComparisonState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn apply(&mut self, token: InvocationToken, result: Result<T, CompareError>) -> Applied {
        if !self.is_current(token) {
            debug!(token = token.0, latest = self.latest, "discarding stale comparison");
            return Applied::Stale;
        }
        match result {
            Ok(value) => {
                self.state = ComparisonState::Ready(value);
                Applied::Ready
            }
            Err(err) => {
                let alert = err.alert(self.category);
                self.state = ComparisonState::Failed(alert.clone());
                Applied::Failed(alert)
            }
        }
    }
}
