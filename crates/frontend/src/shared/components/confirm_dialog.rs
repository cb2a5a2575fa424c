use leptos::prelude::*;
use thaw::*;

use crate::shared::list_view::PendingConfirmation;
use crate::shared::modal_frame::ModalFrame;

/// Text asking to confirm a delete of one or several records
pub fn confirmation_message(pending: &PendingConfirmation) -> String {
    match pending.ids.len() {
        1 => "Supprimer cet élément ? Cette action est irréversible.".to_string(),
        n => format!("Supprimer les {} éléments sélectionnés ? Cette action est irréversible.", n),
    }
}

/// Second step of a delete: nothing is sent before `on_confirm`
#[component]
pub fn ConfirmDialog(
    pending: PendingConfirmation,
    #[prop(into)] busy: Signal<bool>,
    /// Receives the confirmation token
    on_confirm: Callback<u64>,
    /// Receives the confirmation token
    on_cancel: Callback<u64>,
) -> impl IntoView {
    let token = pending.token;
    let message = confirmation_message(&pending);

    view! {
        <ModalFrame
            title="Confirmer la suppression"
            on_close=Callback::new(move |_| on_cancel.run(token))
            modal_class="modal--confirm"
        >
            <p class="confirm__message">{message}</p>
            <div class="form__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(token)
                >
                    "Annuler"
                </Button>
                <button
                    class="button button--danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.run(token)
                >
                    {move || if busy.get() { "Suppression..." } else { "Supprimer" }}
                </button>
            </div>
        </ModalFrame>
    }
}
