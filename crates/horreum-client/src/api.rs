//! The remote API consumed by the dashboard core.
//!
//! Transport and authentication live behind [`DashboardApi`]; this crate only
//! sees decoded responses.

use async_trait::async_trait;
use horreum_store::Entity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// One label value computed for a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelValue {
    pub name: String,
    pub value: Value,
}

impl LabelValue {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A dataset rendered through one view: component id -> value, plus the
/// dataset snapshot fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    #[serde(default)]
    pub view: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub snapshot: Map<String, Value>,
}

impl DatasetSummary {
    pub fn component_value(&self, component_id: i64) -> Option<&Value> {
        self.view.as_ref()?.get(&component_id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewComponent {
    pub id: i64,
    pub header_name: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub render: Option<String>,
}

impl ViewComponent {
    /// The label this component shows, when it binds exactly one.
    pub fn single_label(&self) -> Option<&str> {
        match self.labels.as_slice() {
            [label] => Some(label.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub components: Vec<ViewComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub views: Vec<View>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Test {
    pub fn view_named(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunsPage {
    pub runs: Vec<Entity>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    pub sort: Option<String>,
    pub descending: bool,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            sort: None,
            descending: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFilters {
    pub trashed: bool,
    pub roles: Option<String>,
}

#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn fetch_label_values(&self, dataset_id: i64) -> Result<Vec<LabelValue>, ApiError>;

    async fn get_view_summary(
        &self,
        dataset_id: i64,
        view_id: i64,
    ) -> Result<DatasetSummary, ApiError>;

    async fn get_test(&self, test_id: i64) -> Result<Test, ApiError>;

    async fn list_actions(&self) -> Result<Vec<Entity>, ApiError>;

    async fn get_run(&self, run_id: i64) -> Result<Entity, ApiError>;

    async fn list_runs_for_test(
        &self,
        test_id: i64,
        page: &PageRequest,
        filters: &RunFilters,
    ) -> Result<RunsPage, ApiError>;
}
