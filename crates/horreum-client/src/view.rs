//! Rendering seam for view-based comparisons.

use serde_json::Value;

use crate::api::{DatasetSummary, View};
use crate::classify::Cell;

/// Everything a renderer gets to turn one component of one dataset into text.
#[derive(Debug, Clone, Copy)]
pub struct ViewCell<'a> {
    /// `summary.view[component.id]`, if the dataset has it.
    pub value: Option<&'a Value>,
    /// The bound label, when the component binds exactly one.
    pub label: Option<&'a str>,
    /// The component's render descriptor.
    pub render: Option<&'a str>,
    pub summary: &'a DatasetSummary,
}

pub trait Renderer: Send + Sync {
    fn render(&self, cell: &ViewCell<'_>) -> String;
}

/// Ignores render descriptors and prints the raw value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, cell: &ViewCell<'_>) -> String {
        match cell.value {
            Some(value) => Cell::Present(value.clone()).render(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    pub header_name: String,
    pub cells: Vec<String>,
}

/// One row per component, in the order the view declares them. A dataset
/// without a summary renders as an empty cell.
pub fn build_view_rows(
    view: &View,
    summaries: &[Option<DatasetSummary>],
    renderer: &dyn Renderer,
) -> Vec<ViewRow> {
    view.components
        .iter()
        .map(|component| ViewRow {
            header_name: component.header_name.clone(),
            cells: summaries
                .iter()
                .map(|summary| match summary {
                    Some(summary) => renderer.render(&ViewCell {
                        value: summary.component_value(component.id),
                        label: component.single_label(),
                        render: component.render.as_deref(),
                        summary,
                    }),
                    None => String::new(),
                })
                .collect(),
        })
        .collect()
}
