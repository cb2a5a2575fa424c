use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::list_view::Record;
use serde_json::Value;

use super::error::ListViewError;
use super::fetcher::DataFetcher;
use super::mutation::{MutationDispatcher, PendingConfirmation};
use super::page_spec::PageSpec;
use super::state::ListViewState;
use crate::shared::data_access::{DataAccess, QueryParams};

/// Drives one list page: loads the collection and its reference lists,
/// runs mutations and reloads after each successful one.
///
/// The state sits behind a `RefCell` that is never borrowed across an
/// `.await`, so overlapping loads only race on the generation check.
pub struct ListViewController<A: ?Sized> {
    spec: &'static PageSpec,
    fetcher: DataFetcher<A>,
    dispatcher: MutationDispatcher<A>,
    state: RefCell<ListViewState>,
}

impl<A: DataAccess + ?Sized> ListViewController<A> {
    pub fn new(spec: &'static PageSpec, access: Rc<A>, page_size: usize) -> Self {
        Self {
            spec,
            fetcher: DataFetcher::new(access.clone()),
            dispatcher: MutationDispatcher::new(access, spec.endpoint, spec.required),
            state: RefCell::new(ListViewState::new(spec, page_size)),
        }
    }

    pub fn snapshot(&self) -> ListViewState {
        self.state.borrow().clone()
    }

    /// Synchronous state change (search, filters, sort, paging, selection)
    pub fn update<R>(&self, f: impl FnOnce(&mut ListViewState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    /// First load on mount: reference lists and records side by side
    pub async fn load(&self) {
        let (references, _) = futures::join!(
            self.fetcher.fetch_references(self.spec.references),
            self.refresh()
        );
        self.state.borrow_mut().set_references(references);
    }

    /// Reload the collection. Returns `false` when a newer load overtook this one.
    pub async fn refresh(&self) -> bool {
        let generation = self.state.borrow_mut().begin_load();
        let result = self.fetcher.fetch(self.spec.endpoint, &QueryParams::new()).await;
        self.state.borrow_mut().apply_fetch(generation, result)
    }

    pub async fn retry(&self) -> bool {
        self.refresh().await
    }

    pub async fn create(&self, payload: Record) -> Result<(), ListViewError> {
        self.dispatcher.create(&payload).await?;
        self.refresh().await;
        Ok(())
    }

    pub async fn update_record(&self, id: &str, payload: Record) -> Result<(), ListViewError> {
        self.dispatcher.update(id, &payload).await?;
        self.refresh().await;
        Ok(())
    }

    /// Flip the page's flag field (`active`, `is_active`) of one record
    pub async fn set_flag(&self, id: &str, value: bool) -> Result<(), ListViewError> {
        let field = self.spec.flag_field.ok_or(ListViewError::NoFlagField)?;
        if let Err(e) = self.dispatcher.patch_field(id, field, Value::Bool(value)).await {
            self.state.borrow_mut().set_error(e.clone());
            return Err(e);
        }
        self.refresh().await;
        Ok(())
    }

    pub fn request_delete(&self, id: &str) -> Option<PendingConfirmation> {
        self.dispatcher.request_delete(vec![id.to_string()])
    }

    /// Ask to delete every selected record; `None` when nothing is selected
    pub fn request_delete_selected(&self) -> Option<PendingConfirmation> {
        let ids = self.state.borrow().selection.ids();
        self.dispatcher.request_delete(ids)
    }

    pub fn pending_delete(&self) -> Option<PendingConfirmation> {
        self.dispatcher.pending()
    }

    pub fn cancel_delete(&self, token: u64) -> bool {
        self.dispatcher.cancel_delete(token)
    }

    /// Run the confirmed delete, reload if anything was removed and report
    /// the first failure (or a stale token) in the banner
    pub async fn confirm_delete(&self, token: u64) -> Result<(), ListViewError> {
        let error = match self.dispatcher.confirm_delete(token).await {
            Ok(report) => {
                if report.deleted > 0 {
                    self.refresh().await;
                }
                report.error
            }
            Err(e) => Some(e),
        };
        match error {
            Some(e) => {
                self.state.borrow_mut().set_error(e.clone());
                Err(e)
            }
            None => Ok(()),
        }
    }
}
