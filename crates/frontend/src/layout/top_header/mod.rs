//! Top bar: sidebar toggle, console title and session state

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::storage::{clear_access_token, get_access_token};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let signed_in = RwSignal::new(get_access_token().is_some());

    let sign_out = move |_| {
        clear_access_token();
        signed_in.set(false);
        log::info!("Stored token cleared");
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Masquer la navigation" } else { "Afficher la navigation" }
                >
                    {icon("filter")}
                </button>
                <span class="top-header__title">"Console ERP"</span>
            </div>
            <div class="top-header__actions">
                <Show
                    when=move || signed_in.get()
                    fallback=|| view! { <span class="top-header__user">"Non connecté"</span> }
                >
                    <span class="top-header__user">{icon("users")}"Session active"</span>
                    <button class="top-header__icon-btn" on:click=sign_out title="Déconnexion">
                        {icon("x")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
