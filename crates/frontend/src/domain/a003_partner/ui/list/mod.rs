use contracts::resources::PARTNERS;
use contracts::shared::list_view::RequiredField;
use leptos::prelude::*;

use crate::shared::components::record_list::RecordListPage;
use crate::shared::list_view::{ColumnSpec, FilterSpec, FormField, FormInput, OptionSource, PageSpec};

const TYPE_OPTIONS: &[(&str, &str)] = &[
    ("customer", "Client"),
    ("supplier", "Fournisseur"),
    ("both", "Client et fournisseur"),
];

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("active", "Actif"),
    ("inactive", "Inactif"),
    ("blocked", "Bloqué"),
];

pub static PARTNER_LIST: PageSpec = PageSpec {
    key: "a003_partner",
    title: "Partenaires",
    endpoint: PARTNERS,
    search_fields: &["name", "code", "email", "phone"],
    search_placeholder: "Rechercher un partenaire (nom, code, e-mail, téléphone)",
    filters: &[
        FilterSpec { field: "type", label: "Type", options: OptionSource::Static(TYPE_OPTIONS) },
        FilterSpec { field: "status", label: "Statut", options: OptionSource::Static(STATUS_OPTIONS) },
    ],
    columns: &[
        ColumnSpec::text("Code", "code"),
        ColumnSpec::text("Nom", "name"),
        ColumnSpec::text("Type", "type"),
        ColumnSpec::text("E-mail", "email"),
        ColumnSpec::text("Téléphone", "phone"),
        ColumnSpec::text("Statut", "status"),
        ColumnSpec::datetime("Créé le", "created_at"),
    ],
    default_sort: "name",
    form_fields: &[
        FormField::text("code", "Code"),
        FormField::text("name", "Nom"),
        FormField {
            field: "type",
            source: "type",
            label: "Type",
            input: FormInput::Select(OptionSource::Static(TYPE_OPTIONS)),
        },
        FormField::text("email", "E-mail"),
        FormField::text("phone", "Téléphone"),
        FormField { field: "address", source: "address", label: "Adresse", input: FormInput::TextArea },
        FormField {
            field: "status",
            source: "status",
            label: "Statut",
            input: FormInput::Select(OptionSource::Static(STATUS_OPTIONS)),
        },
    ],
    required: &[RequiredField::new("name", "Nom"), RequiredField::new("type", "Type")],
    references: &[],
    flag_field: None,
    export_file: "partenaires.csv",
};

#[component]
pub fn PartnerList() -> impl IntoView {
    view! { <RecordListPage spec=&PARTNER_LIST /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_view::{apply_filter, validate_required, FilterState, Record};
    use serde_json::json;

    #[test]
    fn test_search_and_type_filter_combine() {
        let partners: Vec<Record> = [
            json!({"id": 1, "name": "Dupont SA", "type": "customer", "email": "contact@dupont.fr"}),
            json!({"id": 2, "name": "Martin", "type": "supplier", "email": "martin@dupont.fr"}),
            json!({"id": 3, "name": "Durand", "type": "customer", "phone": "01 23 45 67 89"}),
        ]
        .into_iter()
        .filter_map(Record::from_value)
        .collect();

        let mut state = FilterState { query: "dupont".to_string(), ..FilterState::default() };
        state.set_equality("type", "customer");
        let ids: Vec<String> = apply_filter(&partners, &state, PARTNER_LIST.search_fields)
            .iter()
            .filter_map(Record::id)
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_type_is_required() {
        let payload = Record::from_value(json!({"name": "Dupont SA", "type": null})).unwrap();
        let err = validate_required(&payload, PARTNER_LIST.required).unwrap_err();
        assert_eq!(err.to_string(), "Le champ « Type » est obligatoire");
    }
}
