use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::tabs::{tab_label_for_key, TabBar, TabPage};
use crate::layout::Shell;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    tabs_store.init_url_sync(tab_label_for_key);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar tabs_store=tabs_store />
                    <div class="app-tabs">
                        {move || match tabs_store.active.get() {
                            Some(tab_key) => view! { <TabPage tab_key=tab_key /> }.into_any(),
                            None => view! {
                                <div class="placeholder">"Choisissez une page dans le menu."</div>
                            }
                            .into_any(),
                        }}
                    </div>
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!("API on port {} with prefix '{}'", config.api.port, config.api.prefix);

    provide_context(config);
    provide_context(AppGlobalContext::new());

    view! { <MainLayout /> }
}
