//! Static description of one list page: where its records live, which
//! fields are searched, filtered, sorted, shown, edited and required.

use std::collections::BTreeMap;

use contracts::shared::list_view::{ExportColumn, Record, RequiredField, SortKind};

/// Reference lists loaded next to the main collection, by reference key
pub type ReferenceData = BTreeMap<&'static str, Vec<Record>>;

#[derive(Debug)]
pub struct PageSpec {
    /// Tab key, also used in DOM ids
    pub key: &'static str,
    pub title: &'static str,
    pub endpoint: &'static str,
    pub search_fields: &'static [&'static str],
    pub search_placeholder: &'static str,
    pub filters: &'static [FilterSpec],
    pub columns: &'static [ColumnSpec],
    pub default_sort: &'static str,
    pub form_fields: &'static [FormField],
    pub required: &'static [RequiredField],
    pub references: &'static [ReferenceSpec],
    /// Field toggled in place through PATCH (`active`, `is_active`)
    pub flag_field: Option<&'static str>,
    pub export_file: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub header: &'static str,
    pub field: &'static str,
    /// `None` for columns without a sortable header
    pub sort: Option<SortKind>,
    pub format: CellFormat,
}

impl ColumnSpec {
    pub const fn text(header: &'static str, field: &'static str) -> Self {
        Self { header, field, sort: Some(SortKind::Text), format: CellFormat::Text }
    }

    pub const fn flag(header: &'static str, field: &'static str) -> Self {
        Self { header, field, sort: Some(SortKind::Numeric), format: CellFormat::Flag }
    }

    pub const fn datetime(header: &'static str, field: &'static str) -> Self {
        Self { header, field, sort: Some(SortKind::Text), format: CellFormat::DateTime }
    }

    pub const fn plain(header: &'static str, field: &'static str) -> Self {
        Self { header, field, sort: None, format: CellFormat::Text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    Flag,
    DateTime,
}

/// Dropdown equality filter
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub options: OptionSource,
}

/// Where the choices of a dropdown come from
#[derive(Debug, Clone, Copy)]
pub enum OptionSource {
    /// (value, label)
    Static(&'static [(&'static str, &'static str)]),
    Reference {
        key: &'static str,
        value_field: &'static str,
        label_field: &'static str,
    },
}

impl OptionSource {
    pub fn resolve(&self, references: &ReferenceData) -> Vec<(String, String)> {
        match self {
            OptionSource::Static(options) => options
                .iter()
                .map(|(value, label)| (value.to_string(), label.to_string()))
                .collect(),
            OptionSource::Reference { key, value_field, label_field } => references
                .get(key)
                .map(|records| {
                    records
                        .iter()
                        .filter_map(|r| {
                            let value = r.filter_value(value_field)?;
                            Some((value, r.text(label_field)))
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSpec {
    pub key: &'static str,
    pub endpoint: &'static str,
}

/// One input of the create/edit modal
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    /// Key in the submitted payload
    pub field: &'static str,
    /// Record path used to prefill the input when editing
    pub source: &'static str,
    pub label: &'static str,
    pub input: FormInput,
}

impl FormField {
    pub const fn text(field: &'static str, label: &'static str) -> Self {
        Self { field, source: field, label, input: FormInput::Text }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FormInput {
    Text,
    TextArea,
    Checkbox,
    Select(OptionSource),
}

impl PageSpec {
    pub fn sort_kind(&self, field: &str) -> SortKind {
        self.columns
            .iter()
            .find(|c| c.field == field)
            .and_then(|c| c.sort)
            .unwrap_or_default()
    }

    pub fn export_columns(&self) -> Vec<ExportColumn> {
        self.columns
            .iter()
            .map(|c| ExportColumn { header: c.header, field: c.field })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_options_skip_records_without_value() {
        let mut references = ReferenceData::new();
        references.insert(
            "modules",
            vec![
                Record::from_value(json!({"id": 1, "name": "Compta"})).unwrap(),
                Record::from_value(json!({"name": "Sans id"})).unwrap(),
                Record::from_value(json!({"id": 2, "name": "Achats"})).unwrap(),
            ],
        );
        let source = OptionSource::Reference { key: "modules", value_field: "id", label_field: "name" };
        assert_eq!(
            source.resolve(&references),
            vec![("1".to_string(), "Compta".to_string()), ("2".to_string(), "Achats".to_string())]
        );
        assert!(OptionSource::Reference { key: "missing", value_field: "id", label_field: "name" }
            .resolve(&references)
            .is_empty());
    }
}
