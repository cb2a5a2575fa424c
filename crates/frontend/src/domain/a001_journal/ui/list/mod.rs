use contracts::resources::{JOURNALS, JOURNAL_TYPES};
use contracts::shared::list_view::RequiredField;
use leptos::prelude::*;

use crate::shared::components::record_list::RecordListPage;
use crate::shared::list_view::{
    ColumnSpec, FilterSpec, FormField, FormInput, OptionSource, PageSpec, ReferenceSpec,
};

const JOURNAL_TYPE_OPTIONS: OptionSource = OptionSource::Reference {
    key: "journal_types",
    value_field: "code",
    label_field: "name",
};

pub static JOURNAL_LIST: PageSpec = PageSpec {
    key: "a001_journal",
    title: "Journaux",
    endpoint: JOURNALS,
    search_fields: &["name", "code", "type.name", "default_account.name", "note"],
    search_placeholder: "Rechercher un journal (nom, code, type, compte, note)",
    filters: &[
        FilterSpec { field: "type.code", label: "Type", options: JOURNAL_TYPE_OPTIONS },
        FilterSpec {
            field: "active",
            label: "Statut",
            options: OptionSource::Static(&[("true", "Actif"), ("false", "Inactif")]),
        },
    ],
    columns: &[
        ColumnSpec::text("Code", "code"),
        ColumnSpec::text("Nom", "name"),
        ColumnSpec::text("Type", "type.name"),
        ColumnSpec::text("Compte par défaut", "default_account.name"),
        ColumnSpec::plain("Note", "note"),
        ColumnSpec::flag("Actif", "active"),
    ],
    default_sort: "code",
    form_fields: &[
        FormField::text("code", "Code"),
        FormField::text("name", "Nom"),
        FormField {
            field: "type_id",
            source: "type.id",
            label: "Type",
            input: FormInput::Select(OptionSource::Reference {
                key: "journal_types",
                value_field: "id",
                label_field: "name",
            }),
        },
        FormField { field: "note", source: "note", label: "Note", input: FormInput::TextArea },
        FormField { field: "active", source: "active", label: "Actif", input: FormInput::Checkbox },
    ],
    required: &[
        RequiredField::new("code", "Code"),
        RequiredField::new("name", "Nom"),
        RequiredField::new("type_id", "Type"),
    ],
    references: &[ReferenceSpec { key: "journal_types", endpoint: JOURNAL_TYPES }],
    flag_field: Some("active"),
    export_file: "journaux.csv",
};

#[component]
pub fn JournalList() -> impl IntoView {
    view! { <RecordListPage spec=&JOURNAL_LIST /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_view::{apply_filter, FilterState, Record};
    use serde_json::json;

    fn journals() -> Vec<Record> {
        [
            json!({"id": 1, "code": "VT", "name": "Ventes", "type": {"code": "sale", "name": "Vente"}, "active": true}),
            json!({"id": 2, "code": "BAN1", "name": "Banque principale", "type": {"code": "bank", "name": "Banque"}, "active": true}),
            json!({"id": 3, "code": "CAI", "name": "Caisse", "type": {"code": "cash", "name": "Espèces"},
                   "default_account": {"name": "Banque de dépôt"}, "active": false}),
            json!({"id": 4, "code": "OD", "name": "Opérations diverses", "type": {"code": "general", "name": "Divers"},
                   "note": "Reprise Banque 2023", "active": true}),
            json!({"id": 5, "code": "AC", "name": "Achats", "type": null, "active": true}),
        ]
        .into_iter()
        .filter_map(Record::from_value)
        .collect()
    }

    fn ids(records: &[Record]) -> Vec<String> {
        records.iter().filter_map(Record::id).collect()
    }

    #[test]
    fn test_free_text_covers_nested_fields() {
        let state = FilterState { query: "BAN".to_string(), ..FilterState::default() };
        let filtered = apply_filter(&journals(), &state, JOURNAL_LIST.search_fields);
        assert_eq!(ids(&filtered), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_type_and_status_filters() {
        let mut state = FilterState::default();
        state.set_equality("type.code", "bank");
        assert_eq!(ids(&apply_filter(&journals(), &state, JOURNAL_LIST.search_fields)), vec!["2"]);

        let mut state = FilterState::default();
        state.set_equality("active", "false");
        assert_eq!(ids(&apply_filter(&journals(), &state, JOURNAL_LIST.search_fields)), vec!["3"]);
    }
}
