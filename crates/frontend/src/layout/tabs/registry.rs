//! Tab key → page. Every page of the console is listed here.

use crate::domain::a001_journal::ui::list::{JournalList, JOURNAL_LIST};
use crate::domain::a002_module::ui::list::{ModuleList, MODULE_LIST};
use crate::domain::a003_partner::ui::list::{PartnerList, PARTNER_LIST};
use crate::domain::a004_permission::ui::list::{PermissionList, PERMISSION_LIST};
use crate::domain::a005_country::ui::list::{CountryList, COUNTRY_LIST};
use crate::domain::a006_subdivision::ui::list::{SubdivisionList, SUBDIVISION_LIST};
use crate::shared::list_view::PageSpec;
use crate::system::users::ui::list::{UsersListPage, USER_LIST};
use leptos::prelude::*;

const PAGES: &[&PageSpec] = &[
    &JOURNAL_LIST,
    &MODULE_LIST,
    &PARTNER_LIST,
    &PERMISSION_LIST,
    &COUNTRY_LIST,
    &SUBDIVISION_LIST,
    &USER_LIST,
];

pub fn page_spec(key: &str) -> Option<&'static PageSpec> {
    PAGES.iter().copied().find(|spec| spec.key == key)
}

/// Tab title for a key, `None` for keys no page answers to
pub fn tab_label_for_key(key: &str) -> Option<&'static str> {
    page_spec(key).map(|spec| spec.title)
}

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_journal" => view! { <JournalList /> }.into_any(),
        "a002_module" => view! { <ModuleList /> }.into_any(),
        "a003_partner" => view! { <PartnerList /> }.into_any(),
        "a004_permission" => view! { <PermissionList /> }.into_any(),
        "a005_country" => view! { <CountryList /> }.into_any(),
        "a006_subdivision" => view! { <SubdivisionList /> }.into_any(),
        "sys_users" => view! { <UsersListPage /> }.into_any(),
        _ => {
            log::warn!("No page registered for tab '{}'", key);
            view! { <div class="placeholder">{format!("Page inconnue : {}", key)}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_page_keys_are_unique_and_resolvable() {
        let keys: BTreeSet<&str> = PAGES.iter().map(|spec| spec.key).collect();
        assert_eq!(keys.len(), PAGES.len());
        assert_eq!(tab_label_for_key("a005_country"), Some("Pays"));
        assert_eq!(tab_label_for_key("unknown_page"), None);
    }

    #[test]
    fn test_sortable_columns_and_defaults() {
        for spec in PAGES {
            assert!(spec.endpoint.starts_with('/') && spec.endpoint.ends_with('/'), "{}", spec.key);
            assert!(
                spec.columns.iter().any(|c| c.field == spec.default_sort && c.sort.is_some()),
                "{}: default sort must be a sortable column",
                spec.key
            );
            for filter in spec.filters {
                if let crate::shared::list_view::OptionSource::Reference { key, .. } = filter.options {
                    assert!(spec.references.iter().any(|r| r.key == key), "{}: {}", spec.key, key);
                }
            }
        }
    }
}
