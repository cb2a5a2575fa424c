//! Generic list page: toolbar, search, filters, sortable table, selection,
//! pagination, create/edit modal and delete confirmation.

use std::future::Future;
use std::rc::Rc;

use contracts::shared::list_view::{match_ranges, Record, SortDirection};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::api_base;
use crate::shared::cell_format::{flag_value, format_cell};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::record_form::RecordForm;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::config::{default_config, ConsoleConfig};
use crate::shared::data_access::HttpDataAccess;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::list_view::{
    CellFormat, ColumnSpec, ListViewController, ListViewError, ListViewState, LoadPhase, PageSpec,
    PendingConfirmation,
};
use crate::system::auth::storage::{clear_access_token, LocalStorageCredentials};

type PageController = ListViewController<HttpDataAccess<LocalStorageCredentials>>;

#[derive(Debug, Clone, PartialEq)]
enum FormMode {
    Create,
    Edit(Record),
}

/// Split `text` into (segment, is_match) parts for the search highlight
pub fn highlight_segments(text: &str, query: &str) -> Vec<(String, bool)> {
    let mut segments = Vec::new();
    let mut last = 0;
    for range in match_ranges(text, query) {
        if range.start > last {
            segments.push((text[last..range.start].to_string(), false));
        }
        segments.push((text[range.clone()].to_string(), true));
        last = range.end;
    }
    if last < text.len() || segments.is_empty() {
        segments.push((text[last..].to_string(), false));
    }
    segments
}

fn sort_marker(state: &ListViewState, field: &str) -> &'static str {
    if state.filter.sort_field != field {
        return "";
    }
    match state.filter.sort_direction {
        SortDirection::Ascending => " ▲",
        SortDirection::Descending => " ▼",
    }
}

fn handle_unauthorized(error: &ListViewError) {
    if matches!(error, ListViewError::Remote { status: 401, .. }) {
        log::warn!("Session expired, clearing stored token");
        clear_access_token();
    }
}

/// Reactive handles of one mounted page. All of them are `Copy`, the
/// controller itself stays in local (non-`Send`) storage.
#[derive(Clone, Copy)]
struct PageHandle {
    controller: StoredValue<Rc<PageController>, LocalStorage>,
    state: RwSignal<ListViewState>,
    busy: RwSignal<usize>,
}

impl PageHandle {
    fn update(&self, f: impl FnOnce(&mut ListViewState)) {
        if let Some(controller) = self.controller.try_get_value() {
            controller.update(f);
            self.state.try_set(controller.snapshot());
        }
    }

    /// Run an async controller call and publish the state it leaves behind
    fn spawn<Fut>(&self, task: impl FnOnce(Rc<PageController>) -> Fut + 'static)
    where
        Fut: Future<Output = ()> + 'static,
    {
        let Some(controller) = self.controller.try_get_value() else {
            return;
        };
        let handle = *self;
        handle.busy.update(|n| *n += 1);
        spawn_local(async move {
            task(controller.clone()).await;
            handle.state.try_set(controller.snapshot());
            handle.busy.try_update(|n| *n = n.saturating_sub(1));
        });
    }

    fn is_busy(&self) -> bool {
        self.busy.get() > 0
    }
}

#[component]
pub fn RecordListPage(spec: &'static PageSpec) -> impl IntoView {
    let config = use_context::<ConsoleConfig>().unwrap_or_else(default_config);
    let access = Rc::new(HttpDataAccess::new(api_base(&config.api), LocalStorageCredentials));
    let controller = Rc::new(ListViewController::new(spec, access, config.list.page_size));

    let page = PageHandle {
        state: RwSignal::new(controller.snapshot()),
        controller: StoredValue::new_local(controller),
        busy: RwSignal::new(0),
    };
    let state = page.state;
    let view_data = Memo::new(move |_| state.with(|s| s.view()));

    let form = RwSignal::new(None::<FormMode>);
    let form_error = RwSignal::new(None::<String>);
    let confirm = RwSignal::new(None::<PendingConfirmation>);

    page.spawn(|c| async move { c.load().await });

    let refresh = move || page.spawn(|c| async move {
        c.refresh().await;
    });

    let open_form = move |mode: FormMode| {
        form_error.set(None);
        form.set(Some(mode));
    };

    let on_submit = Callback::new(move |payload: Record| {
        let mode = form.get_untracked();
        page.spawn(move |c| async move {
            let result = match mode {
                Some(FormMode::Edit(record)) => match record.id() {
                    Some(id) => c.update_record(&id, payload).await,
                    None => Err(ListViewError::Format("record without id".to_string())),
                },
                _ => c.create(payload).await,
            };
            match result {
                Ok(()) => {
                    form.try_set(None);
                }
                Err(e) => {
                    handle_unauthorized(&e);
                    form_error.try_set(Some(e.to_string()));
                }
            }
        });
    });

    let request_delete = move |id: Option<String>| {
        let Some(controller) = page.controller.try_get_value() else {
            return;
        };
        let pending = match id {
            Some(id) => controller.request_delete(&id),
            None => controller.request_delete_selected(),
        };
        confirm.set(pending);
    };

    let on_confirm = Callback::new(move |token: u64| {
        page.spawn(move |c| async move {
            if let Err(e) = c.confirm_delete(token).await {
                handle_unauthorized(&e);
            }
            confirm.try_set(None);
        });
    });

    let on_cancel = Callback::new(move |token: u64| {
        if let Some(controller) = page.controller.try_get_value() {
            controller.cancel_delete(token);
        }
        confirm.set(None);
    });

    let toggle_flag = move |id: String, value: bool| {
        page.spawn(move |c| async move {
            if let Err(e) = c.set_flag(&id, value).await {
                handle_unauthorized(&e);
            }
        });
    };

    let export = move || {
        let csv = state.with_untracked(|s| s.export_csv());
        match csv {
            Ok(content) => {
                if let Err(e) = download_csv(&content, spec.export_file) {
                    log::error!("{}: export failed: {}", spec.key, e);
                }
            }
            Err(e) => log::error!("{}: export failed: {}", spec.key, e),
        }
    };

    let filters = spec
        .filters
        .iter()
        .map(|filter| {
            let field = filter.field;
            let source = filter.options;
            view! {
                <label class="filter">
                    <span class="filter__label">{filter.label}</span>
                    <select
                        class="filter__select"
                        prop:value=move || state.with(|s| s.filter.equality.get(field).cloned().unwrap_or_default())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            page.update(|s| s.set_equality_filter(field, &value));
                        }
                    >
                        <option value="">"Tous"</option>
                        {move || state.with(|s| source.resolve(&s.references)).into_iter().map(|(value, label)| {
                            view! { <option value=value>{label}</option> }
                        }).collect_view()}
                    </select>
                </label>
            }
        })
        .collect_view();

    let headers = spec
        .columns
        .iter()
        .map(|column| {
            let field = column.field;
            let header = column.header;
            if column.sort.is_some() {
                view! {
                    <th
                        class="table__header-cell table__header-cell--sortable"
                        on:click=move |_| page.update(|s| s.toggle_sort(field))
                    >
                        {header}
                        {move || state.with(|s| sort_marker(s, field))}
                    </th>
                }
                .into_any()
            } else {
                view! { <th class="table__header-cell">{header}</th> }.into_any()
            }
        })
        .collect_view();

    let render_cell = move |record: &Record, column: &ColumnSpec, query: &str| {
        let text = format_cell(record, column);
        let searchable = column.format == CellFormat::Text && spec.search_fields.contains(&column.field);
        if !searchable {
            return view! { <td class="table__cell">{text}</td> }.into_any();
        }
        let segments = highlight_segments(&text, query);
        view! {
            <td class="table__cell">
                {segments.into_iter().map(|(part, hit)| {
                    if hit {
                        view! { <mark class="highlight">{part}</mark> }.into_any()
                    } else {
                        part.into_any()
                    }
                }).collect_view()}
            </td>
        }
        .into_any()
    };

    let rows = move || {
        let query = state.with(|s| s.filter.query.clone());
        view_data
            .get()
            .items
            .into_iter()
            .map(|record| {
                let id = record.id().unwrap_or_default();
                let id_for_check = id.clone();
                let id_for_toggle = id.clone();
                let id_for_delete = id.clone();
                let id_for_flag = id.clone();
                let edit_record = record.clone();
                let flag = spec.flag_field.map(|f| flag_value(&record, f));
                let cells = spec.columns.iter().map(|c| render_cell(&record, c, &query)).collect_view();
                view! {
                    <tr class="table__row" class:table__row--selected=move || state.with(|s| s.selection.contains(&id))>
                        <TableCheckbox
                            checked=Signal::derive(move || state.with(|s| s.selection.contains(&id_for_check)))
                            on_change=Callback::new(move |_| page.update(|s| s.toggle_selection(&id_for_toggle)))
                        />
                        {cells}
                        <td class="table__cell table__cell--actions">
                            <button class="icon-button" title="Modifier" on:click=move |_| open_form(FormMode::Edit(edit_record.clone()))>
                                {icon("edit")}
                            </button>
                            {flag.map(|value| view! {
                                <button
                                    class="icon-button"
                                    title={if value { "Désactiver" } else { "Activer" }}
                                    on:click=move |_| toggle_flag(id_for_flag.clone(), !value)
                                >
                                    {icon("toggle")}
                                </button>
                            })}
                            <button class="icon-button icon-button--danger" title="Supprimer" on:click=move |_| request_delete(Some(id_for_delete.clone()))>
                                {icon("trash")}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let column_count = spec.columns.len() + 2;

    view! {
        <div class="page" id=format!("page-{}", spec.key)>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{spec.title}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_form(FormMode::Create)>
                        {icon("plus")}
                        "Nouveau"
                    </button>
                    <button class="button button--secondary" on:click=move |_| refresh() disabled=move || page.is_busy()>
                        {icon("refresh")}
                        "Actualiser"
                    </button>
                    <button class="button button--secondary" on:click=move |_| export()>
                        {icon("download")}
                        "Exporter"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| request_delete(None)
                        disabled=move || state.with(|s| s.selection.is_empty())
                    >
                        {icon("trash")}
                        {move || format!("Supprimer ({})", state.with(|s| s.selection.len()))}
                    </button>
                </div>
            </div>

            <div class="filter-bar">
                <input
                    type="search"
                    class="filter-bar__search"
                    placeholder=spec.search_placeholder
                    prop:value=move || state.with(|s| s.filter.query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        page.update(|s| s.set_query(&query));
                    }
                />
                {filters}
                <Show when=move || state.with(|s| s.filter.has_active_filters())>
                    <button class="button button--ghost" on:click=move |_| page.update(|s| s.clear_filters())>
                        {icon("x")}
                        "Réinitialiser"
                    </button>
                </Show>
            </div>

            {move || state.with(|s| s.error.clone()).map(|e| {
                let errored = state.with(|s| s.phase == LoadPhase::Errored);
                view! {
                    <div class="alert alert--error">
                        <span class="alert__text">{e.to_string()}</span>
                        {if errored {
                            view! {
                                <button class="button button--secondary" on:click=move |_| page.spawn(|c| async move {
                                    c.retry().await;
                                })>
                                    "Réessayer"
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <button class="button button--ghost" on:click=move |_| page.update(|s| s.dismiss_error())>
                                    "Fermer"
                                </button>
                            }.into_any()
                        }}
                    </div>
                }
            })}

            {move || state.with(|s| s.notice.clone()).map(|notice| view! {
                <div class="alert alert--warning">{notice.to_string()}</div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    prop:checked=move || {
                                        let items = view_data.with(|v| v.items.clone());
                                        !items.is_empty() && state.with(|s| items.iter().filter_map(Record::id).all(|id| s.selection.contains(&id)))
                                    }
                                    on:change=move |_| page.update(|s| s.toggle_select_page())
                                />
                            </th>
                            {headers}
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows}
                        <Show when=move || view_data.with(|v| v.items.is_empty()) && !page.is_busy()>
                            <tr class="table__row table__row--empty">
                                <td class="table__cell" colspan=column_count.to_string()>"Aucun élément"</td>
                            </tr>
                        </Show>
                        <Show when=move || page.is_busy() && view_data.with(|v| v.items.is_empty())>
                            <tr class="table__row table__row--loading">
                                <td class="table__cell" colspan=column_count.to_string()>"Chargement..."</td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || view_data.with(|v| v.current_page))
                total_pages=Signal::derive(move || view_data.with(|v| v.total_pages))
                total_count=Signal::derive(move || view_data.with(|v| v.total_count))
                page_size=Signal::derive(move || state.with(|s| s.page.page_size))
                on_page_change=Callback::new(move |p: usize| page.update(|s| s.go_to_page(p)))
                on_page_size_change=Callback::new(move |size: usize| page.update(|s| s.set_page_size(size)))
                page_size_options=config.list.page_size_options.clone()
            />

            {move || form.get().map(|mode| {
                let record = match mode {
                    FormMode::Edit(record) => Some(record),
                    FormMode::Create => None,
                };
                view! {
                    <RecordForm
                        spec=spec
                        record=record
                        references=Signal::derive(move || state.with(|s| s.references.clone()))
                        error=form_error
                        busy=Signal::derive(move || page.is_busy())
                        on_submit=on_submit
                        on_close=Callback::new(move |_| form.set(None))
                    />
                }
            })}

            {move || confirm.get().map(|pending| view! {
                <ConfirmDialog
                    pending=pending
                    busy=Signal::derive(move || page.is_busy())
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_segments() {
        assert_eq!(
            highlight_segments("Banque Populaire", "ban"),
            vec![("Ban".to_string(), true), ("que Populaire".to_string(), false)]
        );
        assert_eq!(highlight_segments("Caisse", ""), vec![("Caisse".to_string(), false)]);
        assert_eq!(highlight_segments("", "x"), vec![(String::new(), false)]);
    }
}
