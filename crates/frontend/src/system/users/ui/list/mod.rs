use contracts::resources::USERS;
use contracts::shared::list_view::RequiredField;
use leptos::prelude::*;

use crate::shared::components::record_list::RecordListPage;
use crate::shared::list_view::{ColumnSpec, FilterSpec, FormField, FormInput, OptionSource, PageSpec};

const YES_NO: &[(&str, &str)] = &[("true", "Oui"), ("false", "Non")];

pub static USER_LIST: PageSpec = PageSpec {
    key: "sys_users",
    title: "Utilisateurs",
    endpoint: USERS,
    search_fields: &["username", "email", "full_name"],
    search_placeholder: "Rechercher un utilisateur (identifiant, e-mail, nom)",
    filters: &[
        FilterSpec { field: "is_active", label: "Actif", options: OptionSource::Static(YES_NO) },
        FilterSpec { field: "is_staff", label: "Administrateur", options: OptionSource::Static(YES_NO) },
    ],
    columns: &[
        ColumnSpec::text("Identifiant", "username"),
        ColumnSpec::text("Nom complet", "full_name"),
        ColumnSpec::text("E-mail", "email"),
        ColumnSpec::flag("Administrateur", "is_staff"),
        ColumnSpec::flag("Actif", "is_active"),
        ColumnSpec::datetime("Dernière connexion", "last_login"),
    ],
    default_sort: "username",
    form_fields: &[
        FormField::text("username", "Identifiant"),
        FormField::text("full_name", "Nom complet"),
        FormField::text("email", "E-mail"),
        FormField { field: "is_staff", source: "is_staff", label: "Administrateur", input: FormInput::Checkbox },
        FormField { field: "is_active", source: "is_active", label: "Actif", input: FormInput::Checkbox },
    ],
    required: &[
        RequiredField::new("username", "Identifiant"),
        RequiredField::new("email", "E-mail"),
    ],
    references: &[],
    flag_field: Some("is_active"),
    export_file: "utilisateurs.csv",
};

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! { <RecordListPage spec=&USER_LIST /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_view::{apply_filter, sort_records, FilterState, Record, SortDirection};
    use serde_json::json;

    fn users() -> Vec<Record> {
        [
            json!({"id": 1, "username": "admin", "is_active": true, "is_staff": true}),
            json!({"id": 2, "username": "compta", "is_active": false, "is_staff": false}),
            json!({"id": 3, "username": "ventes", "is_active": true, "is_staff": false}),
            json!({"id": 4, "username": "invite"}),
        ]
        .into_iter()
        .filter_map(Record::from_value)
        .collect()
    }

    #[test]
    fn test_boolean_filter_skips_missing_flag() {
        let mut state = FilterState::default();
        state.set_equality("is_active", "false");
        let ids: Vec<String> = apply_filter(&users(), &state, USER_LIST.search_fields)
            .iter()
            .filter_map(Record::id)
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_active_column_sorts_numerically() {
        let mut records = users();
        sort_records(&mut records, "is_active", SortDirection::Descending, USER_LIST.sort_kind("is_active"));
        let ids: Vec<String> = records.iter().filter_map(Record::id).collect();
        assert_eq!(ids, vec!["1", "3", "2", "4"]);
    }
}
