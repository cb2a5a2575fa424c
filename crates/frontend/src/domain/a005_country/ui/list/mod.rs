use contracts::resources::COUNTRIES;
use contracts::shared::list_view::RequiredField;
use leptos::prelude::*;

use crate::shared::components::record_list::RecordListPage;
use crate::shared::list_view::{ColumnSpec, FormField, FormInput, PageSpec};

pub static COUNTRY_LIST: PageSpec = PageSpec {
    key: "a005_country",
    title: "Pays",
    endpoint: COUNTRIES,
    search_fields: &["name", "code"],
    search_placeholder: "Rechercher un pays",
    filters: &[],
    columns: &[
        ColumnSpec::text("Code", "code"),
        ColumnSpec::text("Nom", "name"),
        ColumnSpec::flag("Actif", "active"),
    ],
    default_sort: "name",
    form_fields: &[
        FormField::text("code", "Code"),
        FormField::text("name", "Nom"),
        FormField { field: "active", source: "active", label: "Actif", input: FormInput::Checkbox },
    ],
    required: &[RequiredField::new("code", "Code"), RequiredField::new("name", "Nom")],
    references: &[],
    flag_field: Some("active"),
    export_file: "pays.csv",
};

#[component]
pub fn CountryList() -> impl IntoView {
    view! { <RecordListPage spec=&COUNTRY_LIST /> }
}
