use contracts::shared::list_view::{
    apply_filter, paginate, records_to_csv, sort_records, FilterState, PageState, Record,
    SelectionSet,
};

use super::error::ListViewError;
use super::fetcher::Fetched;
use super::page_spec::{PageSpec, ReferenceData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// What the table renders
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub items: Vec<Record>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// State of one mounted list page.
///
/// Filtering, sorting and paging are synchronous and never touch the
/// network. Loads are tagged with a generation so that only the answer to
/// the latest request is applied.
#[derive(Debug, Clone)]
pub struct ListViewState {
    pub spec: &'static PageSpec,
    pub phase: LoadPhase,
    pub filter: FilterState,
    pub page: PageState,
    pub selection: SelectionSet,
    pub references: ReferenceData,
    /// Load or mutation failure shown in the banner
    pub error: Option<ListViewError>,
    /// Non-fatal problem with the last response (unknown envelope)
    pub notice: Option<ListViewError>,
    records: Vec<Record>,
    visible: Vec<Record>,
    generation: u64,
}

impl ListViewState {
    pub fn new(spec: &'static PageSpec, page_size: usize) -> Self {
        Self {
            spec,
            phase: LoadPhase::Idle,
            filter: FilterState::sorted_by(spec.default_sort),
            page: PageState::new(page_size),
            selection: SelectionSet::new(),
            references: ReferenceData::new(),
            error: None,
            notice: None,
            records: Vec::new(),
            visible: Vec::new(),
            generation: 0,
        }
    }

    /// Enter `Loading` and return the generation the answer must carry
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.error = None;
        self.generation
    }

    /// Apply a fetch result. Answers to superseded requests are dropped and
    /// `false` is returned.
    pub fn apply_fetch(&mut self, generation: u64, result: Result<Fetched, ListViewError>) -> bool {
        if generation != self.generation {
            log::debug!(
                "{}: dropping stale response {} (latest {})",
                self.spec.key,
                generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(fetched) => {
                self.records = fetched.records;
                self.notice = fetched.format_error;
                self.error = None;
                self.selection.clear();
                self.phase = LoadPhase::Loaded;
                self.refresh_view();
            }
            Err(e) => {
                log::warn!("{}: load failed: {}", self.spec.key, e);
                self.error = Some(e);
                self.phase = LoadPhase::Errored;
            }
        }
        true
    }

    pub fn set_references(&mut self, references: ReferenceData) {
        self.references = references;
    }

    /// Surface a mutation failure without touching the list
    pub fn set_error(&mut self, error: ListViewError) {
        self.error = Some(error);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
        self.notice = None;
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
        self.page.current_page = 1;
        self.refresh_view();
    }

    pub fn set_equality_filter(&mut self, field: &str, value: &str) {
        self.filter.set_equality(field, value);
        self.page.current_page = 1;
        self.refresh_view();
    }

    pub fn clear_filters(&mut self) {
        self.filter.query.clear();
        self.filter.equality.clear();
        self.page.current_page = 1;
        self.refresh_view();
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.filter.toggle_sort(field);
        self.refresh_view();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page.current_page = page;
        self.page.clamp(self.total_pages());
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page.set_page_size(page_size);
        self.page.clamp(self.total_pages());
    }

    pub fn toggle_selection(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Header checkbox over the rows of the current page
    pub fn toggle_select_page(&mut self) {
        let ids: Vec<String> = self.view().items.iter().filter_map(Record::id).collect();
        self.selection.toggle_all(ids.iter().map(String::as_str));
    }

    /// All fetched records, before filtering
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Filtered and sorted records, all pages
    pub fn visible(&self) -> &[Record] {
        &self.visible
    }

    pub fn total_pages(&self) -> usize {
        contracts::shared::list_view::total_pages(self.visible.len(), self.page.page_size)
    }

    pub fn view(&self) -> ListView {
        let slice = paginate(&self.visible, self.page.current_page, self.page.page_size);
        ListView {
            items: slice.items,
            current_page: self.page.current_page,
            total_pages: slice.total_pages,
            total_count: self.visible.len(),
        }
    }

    pub fn export_csv(&self) -> Result<String, csv::Error> {
        records_to_csv(&self.visible, &self.spec.export_columns())
    }

    // Recompute the filtered/sorted list and put the page back in range;
    // filters and deletions both change the number of pages.
    fn refresh_view(&mut self) {
        let mut visible = apply_filter(&self.records, &self.filter, self.spec.search_fields);
        let field = self.filter.sort_field.clone();
        sort_records(
            &mut visible,
            &field,
            self.filter.sort_direction,
            self.spec.sort_kind(&field),
        );
        self.visible = visible;
        self.page.clamp(self.total_pages());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::page_spec::{ColumnSpec, FilterSpec, OptionSource};
    use contracts::shared::list_view::SortDirection;
    use serde_json::json;

    static SPEC: PageSpec = PageSpec {
        key: "test_list",
        title: "Test",
        endpoint: "/tests/",
        search_fields: &["name", "code"],
        search_placeholder: "",
        filters: &[FilterSpec {
            field: "status",
            label: "Statut",
            options: OptionSource::Static(&[("active", "Actif")]),
        }],
        columns: &[
            ColumnSpec::text("Nom", "name"),
            ColumnSpec::text("Code", "code"),
            ColumnSpec::flag("Actif", "active"),
        ],
        default_sort: "",
        form_fields: &[],
        required: &[],
        references: &[],
        flag_field: None,
        export_file: "tests.csv",
    };

    fn items(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| {
                Record::from_value(json!({
                    "id": i,
                    "name": format!("Item {:02}", i),
                    "code": format!("C{}", i),
                    "status": if i % 2 == 0 { "active" } else { "archived" },
                    "active": i % 2 == 0,
                }))
                .unwrap()
            })
            .collect()
    }

    fn fetched(records: Vec<Record>) -> Result<Fetched, ListViewError> {
        Ok(Fetched { records, format_error: None })
    }

    fn loaded(count: usize, page_size: usize) -> ListViewState {
        let mut state = ListViewState::new(&SPEC, page_size);
        let generation = state.begin_load();
        assert!(state.apply_fetch(generation, fetched(items(count))));
        state
    }

    #[test]
    fn test_load_transitions() {
        let mut state = ListViewState::new(&SPEC, 10);
        assert_eq!(state.phase, LoadPhase::Idle);
        let generation = state.begin_load();
        assert_eq!(state.phase, LoadPhase::Loading);
        state.apply_fetch(generation, Err(ListViewError::Network("down".to_string())));
        assert_eq!(state.phase, LoadPhase::Errored);
        assert!(state.error.is_some());

        let retry = state.begin_load();
        assert!(state.error.is_none());
        state.apply_fetch(retry, fetched(items(3)));
        assert_eq!(state.phase, LoadPhase::Loaded);
        assert_eq!(state.view().total_count, 3);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = ListViewState::new(&SPEC, 10);
        let first = state.begin_load();
        let second = state.begin_load();
        assert!(state.apply_fetch(second, fetched(items(2))));
        assert!(!state.apply_fetch(first, fetched(items(7))));
        assert_eq!(state.records().len(), 2);
        assert_eq!(state.phase, LoadPhase::Loaded);
    }

    #[test]
    fn test_paging_scenario() {
        let mut state = loaded(25, 10);
        assert_eq!(state.view().total_pages, 3);
        state.go_to_page(3);
        assert_eq!(state.view().items.len(), 5);
        state.go_to_page(99);
        assert_eq!(state.page.current_page, 3);
    }

    #[test]
    fn test_refetch_after_delete_reclamps_page() {
        let mut state = loaded(21, 10);
        state.go_to_page(3);
        assert_eq!(state.view().items.len(), 1);

        let generation = state.begin_load();
        state.apply_fetch(generation, fetched(items(20)));
        let view = state.view();
        assert_eq!(view.current_page, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 10);
    }

    #[test]
    fn test_filter_resets_page_and_keeps_order() {
        let mut state = loaded(25, 10);
        state.go_to_page(2);
        state.set_equality_filter("status", "active");
        assert_eq!(state.page.current_page, 1);
        let ids: Vec<String> = state.visible().iter().filter_map(Record::id).collect();
        assert_eq!(ids.first().map(String::as_str), Some("2"));
        assert_eq!(ids.len(), 12);
        assert!(ids.windows(2).all(|w| w[0].parse::<u32>().unwrap() < w[1].parse::<u32>().unwrap()));
    }

    #[test]
    fn test_sort_toggle_uses_column_kind() {
        let mut state = loaded(4, 10);
        state.toggle_sort("active");
        state.toggle_sort("active");
        assert_eq!(state.filter.sort_direction, SortDirection::Descending);
        let ids: Vec<String> = state.visible().iter().filter_map(Record::id).collect();
        assert_eq!(ids, vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_selection_cleared_on_refetch() {
        let mut state = loaded(5, 2);
        state.toggle_select_page();
        assert_eq!(state.selection.ids(), vec!["1", "2"]);
        let generation = state.begin_load();
        state.apply_fetch(generation, fetched(items(5)));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_unknown_envelope_renders_empty_with_notice() {
        let mut state = loaded(5, 10);
        let generation = state.begin_load();
        state.apply_fetch(
            generation,
            Ok(Fetched {
                records: Vec::new(),
                format_error: Some(ListViewError::Format("/tests/".to_string())),
            }),
        );
        assert_eq!(state.phase, LoadPhase::Loaded);
        let view = state.view();
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 1);
        assert!(state.notice.is_some());
    }

    #[test]
    fn test_export_uses_visible_rows() {
        let mut state = loaded(3, 1);
        state.set_query("item 02");
        let csv = state.export_csv().unwrap();
        assert_eq!(csv, "\u{FEFF}Nom;Code;Actif\nItem 02;C2;true\n");
    }
}
