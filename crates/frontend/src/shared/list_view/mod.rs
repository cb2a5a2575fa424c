//! Reusable list page machinery: fetch, filter, sort, paginate, mutate, refetch.

pub mod controller;
pub mod error;
pub mod fetcher;
pub mod mutation;
pub mod page_spec;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::ListViewController;
pub use error::ListViewError;
pub use fetcher::{DataFetcher, Fetched};
pub use mutation::{DeleteReport, MutationDispatcher, PendingConfirmation};
pub use page_spec::{
    CellFormat, ColumnSpec, FilterSpec, FormField, FormInput, OptionSource, PageSpec,
    ReferenceData, ReferenceSpec,
};
pub use state::{ListView, ListViewState, LoadPhase};
