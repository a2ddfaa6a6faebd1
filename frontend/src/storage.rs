//! Typed access to the persisted browser keys.
//!
//! Local storage is a cache, not a source of truth: every getter tolerates a
//! missing window/storage (SSR, lockdown modes) by returning `None`, and
//! every setter fails silently for the same reason.

use web_sys::window;

use crate::config::storage_keys;

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Read one raw string value.
pub fn get(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Write one raw string value.
pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Remove one key.
pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Stored bearer token, if any.
pub fn auth_token() -> Option<String> {
    get(storage_keys::AUTH_TOKEN).filter(|token| !token.trim().is_empty())
}

/// Persist the bearer token.
pub fn set_auth_token(token: &str) {
    set(storage_keys::AUTH_TOKEN, token);
}

/// Cached user JSON, if any.
pub fn cached_user_json() -> Option<String> {
    get(storage_keys::USER)
}

/// Persist the cached user JSON.
pub fn set_cached_user_json(json: &str) {
    set(storage_keys::USER, json);
}

/// Drop every credential key. Used on logout and on a failed session
/// restore so a corrupted half-authenticated state cannot survive a reload.
pub fn clear_credentials() {
    remove(storage_keys::AUTH_TOKEN);
    remove(storage_keys::USER);
}

/// Remember the route the viewer last visited.
pub fn set_last_page(path: &str) {
    set(storage_keys::LAST_PAGE, path);
}

/// Route the viewer last visited, if recorded.
pub fn last_page() -> Option<String> {
    get(storage_keys::LAST_PAGE)
}
