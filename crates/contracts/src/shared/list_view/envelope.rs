use serde_json::Value;

use super::record::Record;

/// Shape of a collection response.
///
/// Resources answer with a bare array, a paginated `{"results": [...]}` or
/// a wrapped `{"data": [...]}`. The envelope is decoded once at the fetch
/// boundary and the records are passed on as a flat sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Bare(Vec<Record>),
    Results(Vec<Record>),
    Data(Vec<Record>),
    Unknown,
}

impl Envelope {
    /// Classify a response body. `results` wins over `data` when both exist.
    pub fn decode(body: Value) -> Self {
        match body {
            Value::Array(items) => Envelope::Bare(collect_records(items)),
            // A `results` key that is not a list is a malformed page, not a
            // cue to look at `data`.
            Value::Object(mut map) => match (map.remove("results"), map.remove("data")) {
                (Some(Value::Array(items)), _) => Envelope::Results(collect_records(items)),
                (None, Some(Value::Array(items))) => Envelope::Data(collect_records(items)),
                _ => Envelope::Unknown,
            },
            _ => Envelope::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Envelope::Unknown)
    }

    /// Flatten into records; `Unknown` becomes an empty list
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Envelope::Bare(records) | Envelope::Results(records) | Envelope::Data(records) => {
                records
            }
            Envelope::Unknown => Vec::new(),
        }
    }
}

// Non-object items carry no fields to show and are skipped.
fn collect_records(items: Vec<Value>) -> Vec<Record> {
    items.into_iter().filter_map(Record::from_value).collect()
}
