//! Data-access collaborator: the only place that talks HTTP.
//!
//! List pages depend on the [`DataAccess`] trait, the browser build plugs in
//! [`HttpDataAccess`] and tests plug in an in-memory fake.

use std::collections::BTreeMap;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;

use crate::shared::list_view::ListViewError;
use crate::system::auth::storage::CredentialProvider;

pub type QueryParams = BTreeMap<String, String>;

#[async_trait(?Send)]
pub trait DataAccess {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Value, ListViewError>;
    async fn post(&self, path: &str, body: &Value) -> Result<Value, ListViewError>;
    async fn put(&self, path: &str, body: &Value) -> Result<Value, ListViewError>;
    async fn patch(&self, path: &str, body: &Value) -> Result<Value, ListViewError>;
    async fn delete(&self, path: &str) -> Result<(), ListViewError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// REST client over `fetch`, bearer token supplied by a [`CredentialProvider`]
pub struct HttpDataAccess<C> {
    base_url: String,
    credentials: C,
}

impl<C: CredentialProvider> HttpDataAccess<C> {
    pub fn new(base_url: impl Into<String>, credentials: C) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }

    fn url(&self, path: &str, params: &QueryParams) -> Result<String, ListViewError> {
        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            let query = serde_qs::to_string(params)
                .map_err(|e| ListViewError::Network(format!("Failed to encode query: {}", e)))?;
            url.push('?');
            url.push_str(&query);
        }
        Ok(url)
    }

    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        };
        match bearer_header(&self.credentials) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &QueryParams,
        body: Option<&Value>,
    ) -> Result<Value, ListViewError> {
        let url = self.url(path, params)?;
        let builder = self.builder(method, &url);

        let response = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ListViewError::Network(format!("Failed to serialize request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ListViewError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ListViewError::Network(format!("Failed to read response: {}", e)))?;

        if !response.ok() {
            log::warn!("{:?} {} -> {}", method, path, status);
            return Err(ListViewError::Remote {
                status,
                message: remote_message(status, &text),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| ListViewError::Format(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait(?Send)]
impl<C: CredentialProvider> DataAccess for HttpDataAccess<C> {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Value, ListViewError> {
        self.send(Method::Get, path, params, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ListViewError> {
        self.send(Method::Post, path, &QueryParams::new(), Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, ListViewError> {
        self.send(Method::Put, path, &QueryParams::new(), Some(body)).await
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Value, ListViewError> {
        self.send(Method::Patch, path, &QueryParams::new(), Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<(), ListViewError> {
        self.send(Method::Delete, path, &QueryParams::new(), None)
            .await
            .map(|_| ())
    }
}

/// `Authorization` header value, `None` when no token is available
pub fn bearer_header(credentials: &impl CredentialProvider) -> Option<String> {
    credentials
        .access_token()
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {}", token))
}

/// Human readable message of an error response.
///
/// Looks for `detail`, `message` or `error`, then for a field error map
/// (`{"code": ["already exists"]}`), and falls back to the status line.
pub fn remote_message(status: u16, body: &str) -> String {
    let fallback = format!("HTTP {}", status);
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return fallback;
    };

    for key in ["detail", "message", "error"] {
        if let Some(Value::String(message)) = map.get(key) {
            return message.clone();
        }
    }

    map.iter()
        .find_map(|(field, value)| match value {
            Value::Array(items) => items
                .iter()
                .find_map(Value::as_str)
                .map(|msg| format!("{}: {}", field, msg)),
            Value::String(msg) => Some(format!("{}: {}", field, msg)),
            _ => None,
        })
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::StaticCredentials;

    #[test]
    fn test_bearer_header_from_credentials() {
        let signed_in = StaticCredentials(Some("abc123".to_string()));
        assert_eq!(bearer_header(&signed_in).as_deref(), Some("Bearer abc123"));
        assert_eq!(bearer_header(&StaticCredentials(None)), None);
        assert_eq!(bearer_header(&StaticCredentials(Some(String::new()))), None);
    }

    #[test]
    fn test_remote_message_detail() {
        assert_eq!(remote_message(403, r#"{"detail": "Permission refusée"}"#), "Permission refusée");
        assert_eq!(remote_message(400, r#"{"message": "bad"}"#), "bad");
    }

    #[test]
    fn test_remote_message_field_errors() {
        assert_eq!(
            remote_message(400, r#"{"code": ["Ce code existe déjà."]}"#),
            "code: Ce code existe déjà."
        );
    }

    #[test]
    fn test_remote_message_fallback() {
        assert_eq!(remote_message(502, "<html>Bad gateway</html>"), "HTTP 502");
        assert_eq!(remote_message(500, ""), "HTTP 500");
        assert_eq!(remote_message(400, r#"{"count": 3}"#), "HTTP 400");
    }
}
