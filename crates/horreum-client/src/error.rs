use std::error::Error as StdError;

use horreum_store::Alert;
use thiserror::Error;

/// Category under which a failure is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertCategory {
    LoadLabels,
    FetchView,
    FetchTest,
    FetchActions,
    FetchRun,
    FetchRuns,
}

impl AlertCategory {
    pub fn code(self) -> &'static str {
        match self {
            AlertCategory::LoadLabels => "LOAD_LABELS",
            AlertCategory::FetchView => "FETCH_VIEW",
            AlertCategory::FetchTest => "FETCH_TEST",
            AlertCategory::FetchActions => "FETCH_ACTIONS",
            AlertCategory::FetchRun => "FETCH_RUN",
            AlertCategory::FetchRuns => "FETCH_RUNS",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AlertCategory::LoadLabels => "Failed to load labels for one of the datasets.",
            AlertCategory::FetchView => "Failed to fetch view for one of datasets.",
            AlertCategory::FetchTest => "Failed to fetch test",
            AlertCategory::FetchActions => "Failed to fetch actions",
            AlertCategory::FetchRun => "Failed to fetch run",
            AlertCategory::FetchRuns => "Failed to fetch runs",
        }
    }

    pub fn alert(self, err: &dyn StdError) -> Alert {
        Alert::from_error(self.code(), self.title(), err)
    }
}

/// Failure reported by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("failed to fetch dataset {dataset_id}: {source}")]
    Fetch { dataset_id: i64, source: ApiError },
    #[error("failed to fetch test {test_id}: {source}")]
    Test { test_id: i64, source: ApiError },
    #[error("invalid dataset reference '{0}'")]
    InvalidDatasetRef(String),
}

impl CompareError {
    /// User-visible report for this failure.
    pub fn alert(&self, category: AlertCategory) -> Alert {
        category.alert(self)
    }
}
