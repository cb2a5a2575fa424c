use contracts::shared::list_view::Record;
use serde_json::Value;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_view::{CellFormat, ColumnSpec};

/// Display text of one table cell
pub fn format_cell(record: &Record, column: &ColumnSpec) -> String {
    match column.format {
        CellFormat::Text => {
            let text = record.text(column.field);
            if text.is_empty() { "-".to_string() } else { text }
        }
        CellFormat::Flag => match record.lookup(column.field) {
            Some(Value::Bool(true)) => "Oui".to_string(),
            Some(Value::Bool(false)) => "Non".to_string(),
            _ => "-".to_string(),
        },
        CellFormat::DateTime => {
            let text = record.text(column.field);
            if text.is_empty() { "-".to_string() } else { format_datetime(&text) }
        }
    }
}

/// Value of a boolean field, missing reads as `false`
pub fn flag_value(record: &Record, field: &str) -> bool {
    matches!(record.lookup(field), Some(Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_cells() {
        let record = Record::from_value(json!({
            "name": "Ventes",
            "active": false,
            "created_at": "2024-03-15T14:02:26Z",
            "type": {"name": "Vente"}
        }))
        .unwrap();
        assert_eq!(format_cell(&record, &ColumnSpec::text("Type", "type.name")), "Vente");
        assert_eq!(format_cell(&record, &ColumnSpec::text("Note", "note")), "-");
        assert_eq!(format_cell(&record, &ColumnSpec::flag("Actif", "active")), "Non");
        assert_eq!(
            format_cell(&record, &ColumnSpec::datetime("Créé", "created_at")),
            "15/03/2024 14:02"
        );
        assert!(!flag_value(&record, "active"));
    }
}
