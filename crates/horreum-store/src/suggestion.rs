//! Typeahead bookkeeping.
//!
//! At most one request is considered in flight (the oldest entry) and one
//! more query is remembered as the latest the user typed. Every response
//! replaces the visible suggestions; only a final response for the oldest
//! query retires it.

/// Upper bound on tracked queries.
pub const MAX_PENDING: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionQueue {
    pending: Vec<String>,
    suggestions: Vec<String>,
}

impl SuggestionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.pending.truncate(1);
        self.pending.push(query);
    }

    pub fn resolve(&mut self, options: Vec<String>, is_final_for_oldest: bool) {
        self.suggestions = options;
        if is_final_for_oldest && !self.pending.is_empty() {
            self.pending.remove(0);
        }
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Query whose response is awaited.
    pub fn in_flight(&self) -> Option<&str> {
        self.pending.first().map(String::as_str)
    }

    /// Query the user typed last.
    pub fn latest(&self) -> Option<&str> {
        self.pending.last().map(String::as_str)
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}
