//! Client-side list view engine: search, dropdown filters, single-key sort
//! and pagination over collections fetched from the REST API.
//!
//! Everything here is synchronous and target independent; the browser
//! crate owns fetching and mutations.

pub mod envelope;
pub mod export;
pub mod filter;
pub mod highlight;
pub mod pagination;
pub mod record;
pub mod selection;
pub mod sort;
pub mod validation;

pub use envelope::Envelope;
pub use export::{records_to_csv, ExportColumn};
pub use filter::{apply_filter, FilterState};
pub use highlight::match_ranges;
pub use pagination::{paginate, total_pages, PageSlice, PageState};
pub use record::Record;
pub use selection::SelectionSet;
pub use sort::{sort_records, SortDirection, SortKind};
pub use validation::{validate_required, RequiredField, ValidationError};
