use std::cell::{Cell, RefCell};
use std::rc::Rc;

use contracts::resources::item_path;
use contracts::shared::list_view::{validate_required, Record, RequiredField};
use serde_json::{Map, Value};

use super::error::ListViewError;
use crate::shared::data_access::DataAccess;

/// A delete waiting for the user's answer. Nothing is sent until
/// [`MutationDispatcher::confirm_delete`] is called with its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub token: u64,
    pub ids: Vec<String>,
}

/// Result of a confirmed delete. Bulk deletes run one by one and stop at
/// the first failure, so some ids may be gone even when `error` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteReport {
    pub requested: usize,
    pub deleted: usize,
    pub error: Option<ListViewError>,
}

/// Create/update/delete calls for one collection.
///
/// Required fields are checked before anything leaves the browser; failures
/// are returned as-is and never retried.
pub struct MutationDispatcher<A: ?Sized> {
    access: Rc<A>,
    endpoint: &'static str,
    required: &'static [RequiredField],
    pending: RefCell<Option<PendingConfirmation>>,
    next_token: Cell<u64>,
}

impl<A: DataAccess + ?Sized> MutationDispatcher<A> {
    pub fn new(access: Rc<A>, endpoint: &'static str, required: &'static [RequiredField]) -> Self {
        Self {
            access,
            endpoint,
            required,
            pending: RefCell::new(None),
            next_token: Cell::new(1),
        }
    }

    fn item(&self, id: &str) -> String {
        item_path(self.endpoint, &urlencoding::encode(id))
    }

    pub async fn create(&self, payload: &Record) -> Result<Value, ListViewError> {
        validate_required(payload, self.required)?;
        let created = self.access.post(self.endpoint, &payload.clone().into_value()).await?;
        log::info!("{}: record created", self.endpoint);
        Ok(created)
    }

    pub async fn update(&self, id: &str, payload: &Record) -> Result<Value, ListViewError> {
        validate_required(payload, self.required)?;
        let updated = self.access.put(&self.item(id), &payload.clone().into_value()).await?;
        log::info!("{}: record {} updated", self.endpoint, id);
        Ok(updated)
    }

    /// Partial update of a single field (activate / deactivate)
    pub async fn patch_field(&self, id: &str, field: &str, value: Value) -> Result<Value, ListViewError> {
        let mut body = Map::new();
        body.insert(field.to_string(), value);
        self.access.patch(&self.item(id), &Value::Object(body)).await
    }

    /// First phase of a delete: remember what to delete and hand out a token.
    /// A new request replaces any earlier unanswered one.
    pub fn request_delete(&self, ids: Vec<String>) -> Option<PendingConfirmation> {
        if ids.is_empty() {
            return None;
        }
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        let pending = PendingConfirmation { token, ids };
        *self.pending.borrow_mut() = Some(pending.clone());
        Some(pending)
    }

    pub fn pending(&self) -> Option<PendingConfirmation> {
        self.pending.borrow().clone()
    }

    /// Drop the pending delete; returns whether `token` was the pending one
    pub fn cancel_delete(&self, token: u64) -> bool {
        let mut pending = self.pending.borrow_mut();
        if pending.as_ref().is_some_and(|p| p.token == token) {
            *pending = None;
            true
        } else {
            false
        }
    }

    /// Second phase: issue the deletes of the pending request matching `token`
    pub async fn confirm_delete(&self, token: u64) -> Result<DeleteReport, ListViewError> {
        let matches = self.pending.borrow().as_ref().is_some_and(|p| p.token == token);
        let pending = matches
            .then(|| self.pending.borrow_mut().take())
            .flatten()
            .ok_or(ListViewError::NoPendingConfirmation)?;

        let mut report = DeleteReport {
            requested: pending.ids.len(),
            deleted: 0,
            error: None,
        };
        for id in &pending.ids {
            match self.access.delete(&self.item(id)).await {
                Ok(()) => report.deleted += 1,
                Err(e) => {
                    log::warn!("{}: delete of {} failed: {}", self.endpoint, id, e);
                    report.error = Some(e);
                    break;
                }
            }
        }
        log::info!("{}: {} of {} deleted", self.endpoint, report.deleted, report.requested);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::testing::FakeDataAccess;
    use contracts::shared::list_view::ValidationError;
    use futures::executor::block_on;
    use serde_json::json;

    const REQUIRED: &[RequiredField] = &[
        RequiredField::new("name", "Nom"),
        RequiredField::new("code", "Code"),
    ];

    fn dispatcher(access: &Rc<FakeDataAccess>) -> MutationDispatcher<FakeDataAccess> {
        MutationDispatcher::new(access.clone(), "/compta/journals/", REQUIRED)
    }

    fn payload(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_validation_short_circuits_before_network() {
        let access = Rc::new(FakeDataAccess::new());
        let err = block_on(dispatcher(&access).create(&payload(json!({"code": "VT"})))).unwrap_err();
        assert_eq!(
            err,
            ListViewError::Validation(ValidationError::MissingField {
                field: "name".to_string(),
                label: "Nom".to_string()
            })
        );
        assert!(access.calls().is_empty());
    }

    #[test]
    fn test_create_and_update_paths() {
        let access = Rc::new(FakeDataAccess::new());
        let d = dispatcher(&access);
        let body = payload(json!({"name": "Ventes", "code": "VT"}));
        block_on(d.create(&body)).unwrap();
        block_on(d.update("12", &body)).unwrap();

        let writes = access.writes();
        assert_eq!(writes[0].method, "POST");
        assert_eq!(writes[0].path, "/compta/journals/");
        assert_eq!(writes[1].method, "PUT");
        assert_eq!(writes[1].path, "/compta/journals/12/");
        assert_eq!(writes[1].body, Some(json!({"name": "Ventes", "code": "VT"})));
    }

    #[test]
    fn test_remote_error_surfaces() {
        let access = Rc::new(FakeDataAccess::new());
        access.script(
            "POST",
            "/compta/journals/",
            Err(ListViewError::Remote { status: 400, message: "code: déjà utilisé".to_string() }),
        );
        let err = block_on(dispatcher(&access).create(&payload(json!({"name": "A", "code": "B"})))).unwrap_err();
        assert_eq!(err.to_string(), "code: déjà utilisé");
    }

    #[test]
    fn test_cancelled_delete_sends_nothing() {
        let access = Rc::new(FakeDataAccess::new());
        let d = dispatcher(&access);
        let pending = d.request_delete(vec!["3".to_string()]).unwrap();
        assert!(d.cancel_delete(pending.token));
        assert_eq!(
            block_on(d.confirm_delete(pending.token)).unwrap_err(),
            ListViewError::NoPendingConfirmation
        );
        assert!(access.calls().is_empty());
    }

    #[test]
    fn test_confirm_requires_latest_token() {
        let access = Rc::new(FakeDataAccess::new());
        let d = dispatcher(&access);
        let first = d.request_delete(vec!["1".to_string()]).unwrap();
        let second = d.request_delete(vec!["2".to_string()]).unwrap();
        assert!(block_on(d.confirm_delete(first.token)).is_err());

        let report = block_on(d.confirm_delete(second.token)).unwrap();
        assert_eq!(report.deleted, 1);
        assert_eq!(access.writes()[0].path, "/compta/journals/2/");
        assert!(d.pending().is_none());
    }

    #[test]
    fn test_bulk_delete_stops_at_first_failure() {
        let access = Rc::new(FakeDataAccess::new());
        access.script(
            "DELETE",
            "/compta/journals/b/",
            Err(ListViewError::Remote { status: 409, message: "utilisé".to_string() }),
        );
        let d = dispatcher(&access);
        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let pending = d.request_delete(ids).unwrap();
        let report = block_on(d.confirm_delete(pending.token)).unwrap();
        assert_eq!(report.requested, 3);
        assert_eq!(report.deleted, 1);
        assert!(report.error.is_some());
        assert_eq!(access.writes().len(), 2);
    }

    #[test]
    fn test_patch_field_and_id_encoding() {
        let access = Rc::new(FakeDataAccess::new());
        block_on(dispatcher(&access).patch_field("a b", "active", json!(false))).unwrap();
        let call = &access.writes()[0];
        assert_eq!(call.method, "PATCH");
        assert_eq!(call.path, "/compta/journals/a%20b/");
        assert_eq!(call.body, Some(json!({"active": false})));
    }

    #[test]
    fn test_empty_delete_request_is_ignored() {
        let access = Rc::new(FakeDataAccess::new());
        assert!(dispatcher(&access).request_delete(Vec::new()).is_none());
    }
}
