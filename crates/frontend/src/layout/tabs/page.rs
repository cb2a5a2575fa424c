use super::registry::render_tab_content;
use leptos::prelude::*;

/// Content of the active tab.
///
/// Only the active tab is mounted: switching tabs remounts the page, so its
/// search, filters, paging and selection start over.
#[component]
pub fn TabPage(tab_key: String) -> impl IntoView {
    log::debug!("tab '{}' mounted", tab_key);
    let key_for_cleanup = tab_key.clone();
    on_cleanup(move || log::debug!("tab '{}' unmounted", key_for_cleanup));

    let content = render_tab_content(&tab_key);

    view! {
        <div class="tabs__item" data-tab-key=tab_key>
            {content}
        </div>
    }
}
