use contracts::resources::{MODULES, PERMISSIONS};
use contracts::shared::list_view::RequiredField;
use leptos::prelude::*;

use crate::shared::components::record_list::RecordListPage;
use crate::shared::list_view::{
    ColumnSpec, FilterSpec, FormField, FormInput, OptionSource, PageSpec, ReferenceSpec,
};

const MODULE_OPTIONS: OptionSource = OptionSource::Reference {
    key: "modules",
    value_field: "id",
    label_field: "name",
};

pub static PERMISSION_LIST: PageSpec = PageSpec {
    key: "a004_permission",
    title: "Permissions",
    endpoint: PERMISSIONS,
    search_fields: &["name", "codename", "module.name"],
    search_placeholder: "Rechercher une permission",
    filters: &[FilterSpec { field: "module.id", label: "Module", options: MODULE_OPTIONS }],
    columns: &[
        ColumnSpec::text("Code", "codename"),
        ColumnSpec::text("Nom", "name"),
        ColumnSpec::text("Module", "module.name"),
    ],
    default_sort: "codename",
    form_fields: &[
        FormField::text("codename", "Code"),
        FormField::text("name", "Nom"),
        FormField {
            field: "module_id",
            source: "module.id",
            label: "Module",
            input: FormInput::Select(MODULE_OPTIONS),
        },
    ],
    required: &[
        RequiredField::new("codename", "Code"),
        RequiredField::new("name", "Nom"),
        RequiredField::new("module_id", "Module"),
    ],
    references: &[ReferenceSpec { key: "modules", endpoint: MODULES }],
    flag_field: None,
    export_file: "permissions.csv",
};

#[component]
pub fn PermissionList() -> impl IntoView {
    view! { <RecordListPage spec=&PERMISSION_LIST /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_view::{apply_filter, FilterState, Record};
    use serde_json::json;

    #[test]
    fn test_module_filter_matches_numeric_id() {
        let permissions: Vec<Record> = [
            json!({"id": 1, "codename": "view_journal", "module": {"id": 3, "name": "Comptabilité"}}),
            json!({"id": 2, "codename": "view_user", "module": {"id": 7, "name": "Utilisateurs"}}),
            json!({"id": 3, "codename": "orphan", "module": null}),
        ]
        .into_iter()
        .filter_map(Record::from_value)
        .collect();

        let mut state = FilterState::default();
        state.set_equality("module.id", "3");
        let filtered = apply_filter(&permissions, &state, PERMISSION_LIST.search_fields);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text("codename"), "view_journal");
    }
}
