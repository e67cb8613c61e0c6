//! Comparison rows and numeric-series classification.

use horreum_util::stable::stringify;
use serde_json::Value;

/// Value of one dataset in a comparison row. `Missing` means the dataset
/// has no such label, which is different from a label whose value is `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Present(Value),
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Present(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    /// Text shown in the table: objects and arrays in canonical JSON form,
    /// strings verbatim, other primitives in their JSON spelling, and
    /// nothing for a missing value.
    pub fn render(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Present(Value::String(s)) => s.clone(),
            Cell::Present(v) => stringify(v),
        }
    }
}

/// `[name, cell_0, .., cell_n]`, one cell per dataset in comparison order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl ComparisonRow {
    pub fn rendered(&self) -> Vec<String> {
        self.cells.iter().map(Cell::render).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Every cell is a present number: drawn as a bar chart.
    Numeric,
    /// Shown as an expandable raw value.
    Raw,
}

pub fn is_numeric(row: &ComparisonRow) -> bool {
    row.cells
        .iter()
        .all(|cell| matches!(cell, Cell::Present(Value::Number(_))))
}

pub fn classify(row: &ComparisonRow) -> RowKind {
    if is_numeric(row) {
        RowKind::Numeric
    } else {
        RowKind::Raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(cells: Vec<Cell>) -> ComparisonRow {
        ComparisonRow {
            name: "r".into(),
            cells,
        }
    }

    #[test]
    fn all_numbers_is_numeric() {
        let r = row(vec![Cell::Present(json!(1)), Cell::Present(json!(2.5))]);
        assert_eq!(classify(&r), RowKind::Numeric);
    }

    #[test]
    fn missing_forces_raw() {
        let r = row(vec![Cell::Present(json!(2)), Cell::Missing]);
        assert_eq!(classify(&r), RowKind::Raw);
    }

    #[test]
    fn null_and_strings_force_raw() {
        assert_eq!(classify(&row(vec![Cell::Present(json!(null))])), RowKind::Raw);
        assert_eq!(classify(&row(vec![Cell::Present(json!("5"))])), RowKind::Raw);
        assert_eq!(
            classify(&row(vec![Cell::Present(json!(1)), Cell::Present(json!([1]))])),
            RowKind::Raw
        );
    }

    #[test]
    fn rendering() {
        assert_eq!(Cell::Missing.render(), "");
        assert_eq!(Cell::Present(json!(null)).render(), "null");
        assert_eq!(Cell::Present(json!("text")).render(), "text");
        assert_eq!(Cell::Present(json!(4.25)).render(), "4.25");
        assert_eq!(Cell::Present(json!(false)).render(), "false");
        assert_eq!(Cell::Present(json!({"b": 1, "a": 2})).render(), r#"{"a":2,"b":1}"#);
    }
}
