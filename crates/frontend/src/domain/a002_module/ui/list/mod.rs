use contracts::resources::MODULES;
use contracts::shared::list_view::RequiredField;
use leptos::prelude::*;

use crate::shared::components::record_list::RecordListPage;
use crate::shared::list_view::{ColumnSpec, FilterSpec, FormField, FormInput, OptionSource, PageSpec};

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("installed", "Installé"),
    ("available", "Disponible"),
    ("disabled", "Désactivé"),
];

pub static MODULE_LIST: PageSpec = PageSpec {
    key: "a002_module",
    title: "Modules",
    endpoint: MODULES,
    search_fields: &["name", "code", "description"],
    search_placeholder: "Rechercher un module",
    filters: &[FilterSpec { field: "status", label: "Statut", options: OptionSource::Static(STATUS_OPTIONS) }],
    columns: &[
        ColumnSpec::text("Code", "code"),
        ColumnSpec::text("Nom", "name"),
        ColumnSpec::text("Description", "description"),
        ColumnSpec::text("Version", "version"),
        ColumnSpec::text("Statut", "status"),
    ],
    default_sort: "name",
    form_fields: &[
        FormField::text("code", "Code"),
        FormField::text("name", "Nom"),
        FormField { field: "description", source: "description", label: "Description", input: FormInput::TextArea },
        FormField::text("version", "Version"),
        FormField {
            field: "status",
            source: "status",
            label: "Statut",
            input: FormInput::Select(OptionSource::Static(STATUS_OPTIONS)),
        },
    ],
    required: &[RequiredField::new("code", "Code"), RequiredField::new("name", "Nom")],
    references: &[],
    flag_field: None,
    export_file: "modules.csv",
};

#[component]
pub fn ModuleList() -> impl IntoView {
    view! { <RecordListPage spec=&MODULE_LIST /> }
}
