//! In-memory collaborator for list view tests

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::Value;

use super::error::ListViewError;
use crate::shared::data_access::{DataAccess, QueryParams};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Answers are queued per `METHOD path`; the last queued answer repeats.
/// Unscripted GETs return `[]`, unscripted writes return `null`.
#[derive(Default)]
pub struct FakeDataAccess {
    responses: RefCell<HashMap<String, VecDeque<Result<Value, ListViewError>>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeDataAccess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a GET answer
    pub fn respond(&self, path: &str, result: Result<Value, ListViewError>) {
        self.script("GET", path, result);
    }

    pub fn script(&self, method: &str, path: &str, result: Result<Value, ListViewError>) {
        self.responses
            .borrow_mut()
            .entry(format!("{} {}", method, path))
            .or_default()
            .push_back(result);
    }

    /// Drop earlier answers for `METHOD path` and script a new one
    pub fn replace(&self, method: &str, path: &str, result: Result<Value, ListViewError>) {
        self.responses
            .borrow_mut()
            .insert(format!("{} {}", method, path), VecDeque::from([result]));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.method != "GET").collect()
    }

    fn answer(&self, method: &'static str, path: &str, body: Option<&Value>) -> Result<Value, ListViewError> {
        self.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        let mut responses = self.responses.borrow_mut();
        match responses.get_mut(&format!("{} {}", method, path)) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(Ok(Value::Null)),
            Some(queue) => queue.front().cloned().unwrap_or(Ok(Value::Null)),
            None if method == "GET" => Ok(Value::Array(Vec::new())),
            None => Ok(Value::Null),
        }
    }
}

#[async_trait(?Send)]
impl DataAccess for FakeDataAccess {
    async fn get(&self, path: &str, _params: &QueryParams) -> Result<Value, ListViewError> {
        self.answer("GET", path, None)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ListViewError> {
        self.answer("POST", path, Some(body))
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, ListViewError> {
        self.answer("PUT", path, Some(body))
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Value, ListViewError> {
        self.answer("PATCH", path, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<(), ListViewError> {
        self.answer("DELETE", path, None).map(|_| ())
    }
}
