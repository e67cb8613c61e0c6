//! Dataset comparison: concurrent per-dataset fetches joined into a pivoted
//! table.
//!
//! Every comparison issues one request per dataset and waits for all of them
//! before building anything. Rows and columns are laid out from the input
//! dataset order and the label sort order only, so the order in which the
//! requests complete never shows in the result.

use std::sync::Arc;

use futures::future::join_all;
use horreum_util::locale_cmp;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::api::{DashboardApi, LabelValue, View};
use crate::chart::{chart_data, BarChartData};
use crate::classify::{classify, Cell, ComparisonRow, RowKind};
use crate::config::{ComparisonConfig, FailurePolicy};
use crate::dataset::{comparison_headers, DatasetRef};
use crate::error::CompareError;
use crate::view::{build_view_rows, Renderer, ViewRow};

/// How a label row is shown below its raw cells.
#[derive(Debug, Clone, PartialEq)]
pub enum RowDisplay {
    Chart(BarChartData),
    Raw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelRow {
    pub row: ComparisonRow,
    pub rendered: Vec<String>,
    pub display: RowDisplay,
}

impl LabelRow {
    fn new(row: ComparisonRow, datasets: &[DatasetRef], config: &ComparisonConfig) -> Self {
        let display = match classify(&row) {
            RowKind::Numeric => {
                chart_data(&row, datasets, config).map_or(RowDisplay::Raw, RowDisplay::Chart)
            }
            RowKind::Raw => RowDisplay::Raw,
        };
        Self {
            rendered: row.rendered(),
            row,
            display,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.display, RowDisplay::Chart(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelComparison {
    pub headers: Vec<String>,
    pub rows: Vec<LabelRow>,
    /// Datasets left out under [`FailurePolicy::Partial`].
    pub failures: Vec<CompareError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewComparison {
    pub headers: Vec<String>,
    pub rows: Vec<ViewRow>,
    pub failures: Vec<CompareError>,
}

pub struct ComparisonEngine<A: ?Sized> {
    api: Arc<A>,
    config: ComparisonConfig,
}

impl<A: DashboardApi + ?Sized> ComparisonEngine<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self::with_config(api, ComparisonConfig::default())
    }

    pub fn with_config(api: Arc<A>, config: ComparisonConfig) -> Self {
        Self { api, config }
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Label comparison of `datasets`, which must already be in comparison
    /// order (see [`crate::dataset::sort_datasets`]).
    pub async fn compare_labels(
        &self,
        datasets: &[DatasetRef],
    ) -> Result<LabelComparison, CompareError> {
        debug!(datasets = datasets.len(), "fetching label values");
        let results = join_all(datasets.iter().map(|ds| async move {
            self.api
                .fetch_label_values(ds.id)
                .await
                .map_err(|source| CompareError::Fetch {
                    dataset_id: ds.id,
                    source,
                })
        }))
        .await;
        let (columns, failures) = settle(results, self.config.failure_policy)?;
        let rows: Vec<LabelRow> = build_label_rows(&columns)
            .into_iter()
            .map(|row| LabelRow::new(row, datasets, &self.config))
            .collect();
        debug!(rows = rows.len(), failed = failures.len(), "label comparison ready");
        Ok(LabelComparison {
            headers: comparison_headers(datasets),
            rows,
            failures,
        })
    }

    /// Compares `datasets` through `view`. Cells are produced by `renderer`.
    pub async fn compare_view(
        &self,
        datasets: &[DatasetRef],
        view: &View,
        renderer: &dyn Renderer,
    ) -> Result<ViewComparison, CompareError> {
        debug!(datasets = datasets.len(), view_id = view.id, "fetching view summaries");
        let view_id = view.id;
        let results = join_all(datasets.iter().map(|ds| async move {
            self.api
                .get_view_summary(ds.id, view_id)
                .await
                .map_err(|source| CompareError::Fetch {
                    dataset_id: ds.id,
                    source,
                })
        }))
        .await;
        let (summaries, failures) = settle(results, self.config.failure_policy)?;
        let rows = build_view_rows(view, &summaries, renderer);
        debug!(rows = rows.len(), failed = failures.len(), "view comparison ready");
        Ok(ViewComparison {
            headers: comparison_headers(datasets),
            rows,
            failures,
        })
    }
}

type Settled<T> = (Vec<Option<T>>, Vec<CompareError>);

/// Applies the failure policy to the fan-in. Results arrive in dataset order,
/// so the reported error is the first failing dataset in that order.
fn settle<T>(
    results: Vec<Result<T, CompareError>>,
    policy: FailurePolicy,
) -> Result<Settled<T>, CompareError> {
    let total = results.len();
    let mut columns = Vec::with_capacity(total);
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(value) => columns.push(Some(value)),
            Err(err) => {
                warn!(error = %err, "dataset fetch failed");
                if policy == FailurePolicy::AllOrNothing {
                    return Err(err);
                }
                columns.push(None);
                failures.push(err);
            }
        }
    }
    if total > 0 && failures.len() == total {
        return Err(failures.swap_remove(0));
    }
    Ok((columns, failures))
}

/// Pivots per-dataset label lists into rows keyed by label name, sorted by
/// name. `None` stands for a dataset whose labels could not be fetched; its
/// column stays missing in every row.
pub fn build_label_rows(columns: &[Option<Vec<LabelValue>>]) -> Vec<ComparisonRow> {
    let width = columns.len();
    let mut by_name: IndexMap<&str, Vec<Cell>> = IndexMap::new();
    for (index, labels) in columns.iter().enumerate() {
        for label in labels.iter().flatten() {
            by_name
                .entry(label.name.as_str())
                .or_insert_with(|| vec![Cell::Missing; width])[index] =
                Cell::Present(label.value.clone());
        }
    }
    let mut rows: Vec<ComparisonRow> = by_name
        .into_iter()
        .map(|(name, cells)| ComparisonRow {
            name: name.to_owned(),
            cells,
        })
        .collect();
    rows.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    rows
}
