use crate::classify::{is_numeric, ComparisonRow};
use crate::config::ComparisonConfig;
use crate::dataset::DatasetRef;

/// One bar: the value of a single dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Column index of the dataset.
    pub key: usize,
    pub legend: String,
    pub value: f64,
    pub color: String,
}

/// A single chart category holding one bar per dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartData {
    pub series: Vec<BarSeries>,
}

/// Reshapes a numeric row into bar-chart data. Returns `None` for rows that
/// are not uniformly numeric.
pub fn chart_data(
    row: &ComparisonRow,
    datasets: &[DatasetRef],
    config: &ComparisonConfig,
) -> Option<BarChartData> {
    if !is_numeric(row) {
        return None;
    }
    let series = row
        .cells
        .iter()
        .zip(datasets)
        .enumerate()
        .map(|(key, (cell, ds))| {
            Some(BarSeries {
                key,
                legend: ds.legend(),
                value: cell.as_f64()?,
                color: config.color(key).to_owned(),
            })
        })
        .collect::<Option<Vec<_>>>()?;
    Some(BarChartData { series })
}
