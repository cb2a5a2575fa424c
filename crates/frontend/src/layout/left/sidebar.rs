//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: &'static [(&'static str, &'static str)], // (tab key, icon)
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        id: "accounting",
        label: "Comptabilité",
        icon: "book",
        items: &[("a001_journal", "book")],
    },
    MenuGroup {
        id: "references",
        label: "Référentiels",
        icon: "globe",
        items: &[("a003_partner", "contact"), ("a005_country", "globe"), ("a006_subdivision", "map")],
    },
    MenuGroup {
        id: "administration",
        label: "Administration",
        icon: "shield",
        items: &[("a002_module", "package"), ("a004_permission", "shield"), ("sys_users", "users")],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(MENU_GROUPS.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {MENU_GROUPS.iter().map(|group| {
                let group_id = group.id;
                let is_expanded = move || expanded_groups.with(|ids| ids.contains(&group_id));
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| expanded_groups.update(|ids| {
                                if let Some(pos) = ids.iter().position(|id| *id == group_id) {
                                    ids.remove(pos);
                                } else {
                                    ids.push(group_id);
                                }
                            })
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|(key, icon_name)| {
                                    let key = *key;
                                    let label = tab_label_for_key(key).unwrap_or(key);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.active.get().as_deref() == Some(key)
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
