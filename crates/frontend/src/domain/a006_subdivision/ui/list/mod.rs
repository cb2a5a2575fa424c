use contracts::resources::{COUNTRIES, SUBDIVISIONS};
use contracts::shared::list_view::RequiredField;
use leptos::prelude::*;

use crate::shared::components::record_list::RecordListPage;
use crate::shared::list_view::{
    ColumnSpec, FilterSpec, FormField, FormInput, OptionSource, PageSpec, ReferenceSpec,
};

const COUNTRY_OPTIONS: OptionSource = OptionSource::Reference {
    key: "pays",
    value_field: "id",
    label_field: "name",
};

pub static SUBDIVISION_LIST: PageSpec = PageSpec {
    key: "a006_subdivision",
    title: "Subdivisions",
    endpoint: SUBDIVISIONS,
    search_fields: &["name", "code", "pays.name"],
    search_placeholder: "Rechercher une subdivision",
    filters: &[FilterSpec { field: "pays.id", label: "Pays", options: COUNTRY_OPTIONS }],
    columns: &[
        ColumnSpec::text("Code", "code"),
        ColumnSpec::text("Nom", "name"),
        ColumnSpec::text("Pays", "pays.name"),
    ],
    default_sort: "name",
    form_fields: &[
        FormField::text("code", "Code"),
        FormField::text("name", "Nom"),
        FormField {
            field: "pays_id",
            source: "pays.id",
            label: "Pays",
            input: FormInput::Select(COUNTRY_OPTIONS),
        },
    ],
    required: &[RequiredField::new("name", "Nom"), RequiredField::new("pays_id", "Pays")],
    references: &[ReferenceSpec { key: "pays", endpoint: COUNTRIES }],
    flag_field: None,
    export_file: "subdivisions.csv",
};

#[component]
pub fn SubdivisionList() -> impl IntoView {
    view! { <RecordListPage spec=&SUBDIVISION_LIST /> }
}
