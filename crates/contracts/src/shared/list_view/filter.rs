use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::record::Record;
use super::sort::SortDirection;

/// User-controlled list state: free-text search, dropdown filters and the sort key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    /// field path -> expected value; empty values are inactive
    pub equality: BTreeMap<String, String>,
    pub sort_field: String,
    pub sort_direction: SortDirection,
}

impl FilterState {
    pub fn sorted_by(field: impl Into<String>) -> Self {
        Self {
            sort_field: field.into(),
            ..Self::default()
        }
    }

    /// Set or clear (empty value) a dropdown filter
    pub fn set_equality(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.equality.remove(field);
        } else {
            self.equality.insert(field.to_string(), value.to_string());
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.query.trim().is_empty() || self.equality.values().any(|v| !v.is_empty())
    }

    /// Header click: same field flips direction, another field starts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggle();
        } else {
            self.sort_field = field.to_string();
            self.sort_direction = SortDirection::Ascending;
        }
    }
}

/// Does the record contain `query_lower` in any of the search fields?
pub fn matches_query(record: &Record, query_lower: &str, search_fields: &[&str]) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    search_fields
        .iter()
        .any(|field| record.text(field).to_lowercase().contains(query_lower))
}

/// Are all non-empty equality filters satisfied?
pub fn matches_equality(record: &Record, equality: &BTreeMap<String, String>) -> bool {
    equality
        .iter()
        .filter(|(_, expected)| !expected.is_empty())
        .all(|(field, expected)| record.filter_value(field).as_deref() == Some(expected.as_str()))
}

/// Keep the records matching the free-text query AND every equality filter.
/// Relative order of the input is preserved.
pub fn apply_filter(records: &[Record], state: &FilterState, search_fields: &[&str]) -> Vec<Record> {
    let query = state.query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| matches_query(r, &query, search_fields) && matches_equality(r, &state.equality))
        .cloned()
        .collect()
}
