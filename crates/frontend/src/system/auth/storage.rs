use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

/// Source of the bearer token attached to API requests.
///
/// Request code asks the provider instead of reading browser storage itself.
pub trait CredentialProvider {
    fn access_token(&self) -> Option<String>;
}

/// Token kept in `localStorage` by the login flow
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCredentials;

impl CredentialProvider for LocalStorageCredentials {
    fn access_token(&self) -> Option<String> {
        get_access_token()
    }
}

/// Fixed token, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(pub Option<String>);

impl CredentialProvider for StaticCredentials {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

/// Clear the stored token (after a 401 the console asks to log in again)
pub fn clear_access_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
