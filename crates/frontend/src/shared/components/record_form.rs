//! Create / edit modal driven by a page's form fields

use contracts::shared::list_view::Record;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use crate::shared::list_view::{FormField, FormInput, PageSpec, ReferenceData};
use crate::shared::modal_frame::ModalFrame;

/// Form values for a new record, or prefilled from the edited one
pub fn initial_payload(fields: &[FormField], record: Option<&Record>) -> Record {
    let mut payload = Record::default();
    for field in fields {
        let value = match field.input {
            FormInput::Checkbox => {
                Value::Bool(record.and_then(|r| r.lookup(field.source)).and_then(Value::as_bool).unwrap_or(true))
            }
            FormInput::Select(_) => record
                .and_then(|r| r.filter_value(field.source))
                .map(Value::String)
                .unwrap_or(Value::Null),
            FormInput::Text | FormInput::TextArea => {
                Value::String(record.map(|r| r.text(field.source)).unwrap_or_default())
            }
        };
        payload.set(field.field, value);
    }
    payload
}

#[component]
pub fn RecordForm(
    spec: &'static PageSpec,
    /// Record being edited; `None` creates a new one
    record: Option<Record>,
    #[prop(into)] references: Signal<ReferenceData>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<Record>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = match &record {
        Some(_) => format!("{} : modifier", spec.title),
        None => format!("{} : nouveau", spec.title),
    };
    let payload = RwSignal::new(initial_payload(spec.form_fields, record.as_ref()));

    let set_field = move |field: &'static str, value: Value| {
        payload.update(|p| p.set(field, value));
    };

    let text_of = move |field: &'static str| {
        payload.with(|p| p.text(field))
    };

    let inputs = spec
        .form_fields
        .iter()
        .map(|f| {
            let field = f.field;
            let control = match f.input {
                FormInput::Text => view! {
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || text_of(field)
                        on:input=move |ev| set_field(field, Value::String(event_target_value(&ev)))
                    />
                }
                .into_any(),
                FormInput::TextArea => view! {
                    <textarea
                        class="form__textarea"
                        rows="3"
                        prop:value=move || text_of(field)
                        on:input=move |ev| set_field(field, Value::String(event_target_value(&ev)))
                    ></textarea>
                }
                .into_any(),
                FormInput::Checkbox => view! {
                    <input
                        type="checkbox"
                        prop:checked=move || payload.with(|p| matches!(p.lookup(field), Some(Value::Bool(true))))
                        on:change=move |ev| set_field(field, Value::Bool(event_target_checked(&ev)))
                    />
                }
                .into_any(),
                FormInput::Select(source) => view! {
                    <select
                        class="form__select"
                        prop:value=move || text_of(field)
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_field(field, if value.is_empty() { Value::Null } else { Value::String(value) });
                        }
                    >
                        <option value="">"-"</option>
                        {move || references.with(|refs| source.resolve(refs)).into_iter().map(|(value, label)| {
                            let selected = text_of(field) == value;
                            view! { <option value=value selected=selected>{label}</option> }
                        }).collect_view()}
                    </select>
                }
                .into_any(),
            };
            let required = spec.required.iter().any(|r| r.field == field);
            view! {
                <label class="form__row">
                    <span class="form__label">
                        {f.label}
                        {required.then_some(" *")}
                    </span>
                    {control}
                </label>
            }
        })
        .collect_view();

    view! {
        <ModalFrame title=title on_close=on_close>
            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.run(payload.get_untracked());
                }
            >
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {inputs}
                <div class="form__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Annuler"
                    </Button>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Enregistrement..." } else { "Enregistrer" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
