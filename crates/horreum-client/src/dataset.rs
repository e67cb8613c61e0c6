//! References to the datasets being compared.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompareError;

/// One dataset extracted from a run, addressed by `(run_id, ordinal)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRef {
    pub id: i64,
    pub run_id: i64,
    pub ordinal: u32,
}

impl DatasetRef {
    pub fn new(id: i64, run_id: i64, ordinal: u32) -> Self {
        Self { id, run_id, ordinal }
    }

    /// Human label `"<runId>/<ordinal + 1>"`.
    pub fn legend(&self) -> String {
        format!("{}/{}", self.run_id, u64::from(self.ordinal) + 1)
    }
}

/// Parses the `<id>_<runId>_<ordinal>` form used in comparison links.
impl FromStr for DatasetRef {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CompareError::InvalidDatasetRef(s.to_owned());
        let mut parts = s.split('_');
        let (Some(id), Some(run_id), Some(ordinal), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        Ok(Self {
            id: id.parse().map_err(|_| invalid())?,
            run_id: run_id.parse().map_err(|_| invalid())?,
            ordinal: ordinal.parse().map_err(|_| invalid())?,
        })
    }
}

/// Orders datasets by run, then by ordinal within the run.
pub fn sort_datasets(datasets: &mut [DatasetRef]) {
    datasets.sort_by_key(|ds| (ds.run_id, ds.ordinal));
}

/// Parses every `ds` parameter and returns the datasets in comparison
/// order. One malformed reference rejects the whole list.
pub fn parse_datasets<'a, I>(params: I) -> Result<Vec<DatasetRef>, CompareError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut datasets = params
        .into_iter()
        .map(str::parse)
        .collect::<Result<Vec<DatasetRef>, _>>()?;
    sort_datasets(&mut datasets);
    Ok(datasets)
}

/// Column headers of a comparison table.
pub fn comparison_headers(datasets: &[DatasetRef]) -> Vec<String> {
    std::iter::once("Name".to_owned())
        .chain(datasets.iter().map(DatasetRef::legend))
        .collect()
}
