//! Small `localStorage` wrapper for UI preferences.
use web_sys::window;

pub const SIDEBAR_OPEN_KEY: &str = "rfid_monitor_sidebar_open";
pub const SELECTED_LINE_KEY: &str = "rfid_monitor_selected_line";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Stored flag; anything but "false" counts as true
pub fn get_flag(key: &str, default: bool) -> bool {
    get_item(key).map(|v| v != "false").unwrap_or(default)
}

pub fn set_flag(key: &str, value: bool) {
    set_item(key, if value { "true" } else { "false" });
}
