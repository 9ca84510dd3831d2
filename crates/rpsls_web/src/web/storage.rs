use super::{API_BASE_KEY, PLAYER_NAME_KEY};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn local_storage_set_string(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(key, value);
    }
}

/// The stored display name, if a non-blank one exists.
pub(super) fn load_player_name() -> Option<String> {
    local_storage_get_string(PLAYER_NAME_KEY).filter(|s| !s.trim().is_empty())
}

pub(super) fn store_player_name(name: &str) {
    local_storage_set_string(PLAYER_NAME_KEY, name.trim());
}

/// Deployment override for the API origin; absent means the compiled
/// default.
pub(super) fn load_api_base() -> Option<String> {
    local_storage_get_string(API_BASE_KEY).filter(|s| !s.trim().is_empty())
}
