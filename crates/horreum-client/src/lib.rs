//! horreum-client - the asynchronous side of the horreum dashboard core.
//!
//! The server is reached only through the [`DashboardApi`] trait. On top of
//! it this crate builds the dataset [`ComparisonEngine`], the
//! [`ComparisonSession`] that drops results of superseded comparisons, and
//! loaders that turn API responses into store events.

pub mod api;
pub mod chart;
pub mod classify;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod loaders;
pub mod session;
pub mod view;

pub use api::{
    DashboardApi, DatasetSummary, LabelValue, PageRequest, RunFilters, RunsPage, Test, View,
    ViewComponent,
};
pub use chart::{chart_data, BarChartData, BarSeries};
pub use classify::{classify, is_numeric, Cell, ComparisonRow, RowKind};
pub use config::{ComparisonConfig, FailurePolicy, DEFAULT_PALETTE, DEFAULT_VIEW_NAME};
pub use dataset::{comparison_headers, parse_datasets, sort_datasets, DatasetRef};
pub use engine::{
    build_label_rows, ComparisonEngine, LabelComparison, LabelRow, RowDisplay, ViewComparison,
};
pub use error::{AlertCategory, ApiError, CompareError};
pub use session::{Applied, ComparisonSession, ComparisonState, InvocationToken};
pub use view::{PlainRenderer, Renderer, ViewCell, ViewRow};
