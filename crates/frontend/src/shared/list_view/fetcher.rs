use std::rc::Rc;

use contracts::shared::list_view::{Envelope, Record};
use futures::future::join_all;

use super::error::ListViewError;
use super::page_spec::{ReferenceData, ReferenceSpec};
use crate::shared::data_access::{DataAccess, QueryParams};

/// Records of one collection fetch
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub records: Vec<Record>,
    /// Set when the body was not a known envelope; `records` is then empty
    pub format_error: Option<ListViewError>,
}

/// Reads collections through the data-access collaborator and flattens
/// their envelopes. Stores nothing; the caller keeps the result.
pub struct DataFetcher<A: ?Sized> {
    access: Rc<A>,
}

impl<A: DataAccess + ?Sized> DataFetcher<A> {
    pub fn new(access: Rc<A>) -> Self {
        Self { access }
    }

    pub async fn fetch(&self, endpoint: &str, params: &QueryParams) -> Result<Fetched, ListViewError> {
        let body = self.access.get(endpoint, params).await?;
        let envelope = Envelope::decode(body);

        if envelope.is_unknown() {
            log::warn!("{}: response is neither a list nor a results/data envelope", endpoint);
            return Ok(Fetched {
                records: Vec::new(),
                format_error: Some(ListViewError::Format(format!(
                    "{} n'a pas renvoyé de liste",
                    endpoint
                ))),
            });
        }

        let records = envelope.into_records();
        log::debug!("{}: {} records", endpoint, records.len());
        Ok(Fetched { records, format_error: None })
    }

    /// Load all reference lists at once. A failing list is replaced by an
    /// empty one so the page still renders.
    pub async fn fetch_references(&self, references: &[ReferenceSpec]) -> ReferenceData {
        let params = QueryParams::new();
        let results = join_all(references.iter().map(|r| self.fetch(r.endpoint, &params))).await;

        references
            .iter()
            .zip(results)
            .map(|(reference, result)| {
                let records = match result {
                    Ok(fetched) => fetched.records,
                    Err(e) => {
                        log::warn!("Reference {} unavailable: {}", reference.endpoint, e);
                        Vec::new()
                    }
                };
                (reference.key, records)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::testing::FakeDataAccess;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_fetch_flattens_envelopes() {
        let access = Rc::new(FakeDataAccess::new());
        access.respond("/modules/", Ok(json!({"results": [{"id": 1}, {"id": 2}]})));
        let fetcher = DataFetcher::new(access);

        let fetched = block_on(fetcher.fetch("/modules/", &QueryParams::new())).unwrap();
        assert_eq!(fetched.records.len(), 2);
        assert!(fetched.format_error.is_none());
    }

    #[test]
    fn test_malformed_body_is_empty_with_format_error() {
        let access = Rc::new(FakeDataAccess::new());
        access.respond("/pays/", Ok(json!({"detail": "ok", "items": [{"id": 1}]})));
        let fetcher = DataFetcher::new(access);

        let fetched = block_on(fetcher.fetch("/pays/", &QueryParams::new())).unwrap();
        assert!(fetched.records.is_empty());
        assert!(matches!(fetched.format_error, Some(ListViewError::Format(_))));
    }

    #[test]
    fn test_transport_error_propagates() {
        let access = Rc::new(FakeDataAccess::new());
        access.respond("/users/", Err(ListViewError::Network("offline".to_string())));
        let fetcher = DataFetcher::new(access);

        let err = block_on(fetcher.fetch("/users/", &QueryParams::new())).unwrap_err();
        assert_eq!(err, ListViewError::Network("offline".to_string()));
    }

    #[test]
    fn test_failed_reference_becomes_empty() {
        let access = Rc::new(FakeDataAccess::new());
        access.respond("/modules/", Ok(json!([{"id": 1, "name": "Compta"}])));
        access.respond("/pays/", Err(ListViewError::Remote { status: 500, message: "boom".to_string() }));
        let fetcher = DataFetcher::new(access.clone());

        let refs = [
            ReferenceSpec { key: "modules", endpoint: "/modules/" },
            ReferenceSpec { key: "pays", endpoint: "/pays/" },
        ];
        let data = block_on(fetcher.fetch_references(&refs));
        assert_eq!(data["modules"].len(), 1);
        assert!(data["pays"].is_empty());
        assert_eq!(access.calls().len(), 2);
    }
}
