use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// How a column's values are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKind {
    /// Native string ordering of the text rendering, missing as ""
    #[default]
    Text,
    /// Numbers as-is, booleans as 0/1, numeric strings parsed, anything else 0
    Numeric,
}

fn numeric_key(record: &Record, field: &str) -> f64 {
    match record.lookup(field) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        Some(Value::Bool(false)) => 0.0,
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Compare two records on a single field, ascending
pub fn compare_by_field(a: &Record, b: &Record, field: &str, kind: SortKind) -> Ordering {
    match kind {
        SortKind::Text => a.text(field).cmp(&b.text(field)),
        SortKind::Numeric => numeric_key(a, field).total_cmp(&numeric_key(b, field)),
    }
}

/// Stable single-key sort: records with equal keys keep their input order,
/// so sorting already sorted input again is a no-op.
pub fn sort_records(records: &mut [Record], field: &str, direction: SortDirection, kind: SortKind) {
    if field.is_empty() {
        return;
    }
    records.sort_by(|a, b| {
        let cmp = compare_by_field(a, b, field, kind);
        if direction.is_ascending() { cmp } else { cmp.reverse() }
    });
}
