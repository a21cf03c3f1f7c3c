//! Key-value persistence. The browser build talks to `window.localStorage`;
//! unit tests use an in-memory map.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

pub const SAVED_PLACES_KEY: &str = "savedPlaces";
pub const DARK_THEME_KEY: &str = "darkTheme";
pub const CONFIG_KEY: &str = "explorerConfig";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// `window.localStorage`. Missing window or storage (private mode, tests on the
/// host) degrades to a store that forgets everything.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
        if inner.is_none() {
            warn!("localStorage unavailable; nothing will persist");
        }
        Self { inner }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(store) = &self.inner {
            if store.set_item(key, value).is_err() {
                warn!(key, "localStorage write rejected");
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Read and decode a JSON value. Absent keys give `None`; undecodable ones are
/// logged and also give `None`.
pub fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(err) => {
            warn!(key, %err, "ignoring unreadable stored value");
            None
        }
    }
}

pub fn write_json<T: Serialize>(store: &mut impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => store.set(key, &s),
        Err(err) => warn!(key, %err, "failed to encode value for storage"),
    }
}

pub fn read_flag(store: &impl KeyValueStore, key: &str) -> bool {
    store.get(key).is_some_and(|v| v == "true")
}

pub fn write_flag(store: &mut impl KeyValueStore, key: &str, value: bool) {
    store.set(key, if value { "true" } else { "false" });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_reads_as_none() {
        let mut store = MemoryStorage::default();
        store.set("k", "{not json");
        assert_eq!(read_json::<Vec<u32>>(&store, "k"), None);
        assert_eq!(read_json::<Vec<u32>>(&store, "missing"), None);
    }

    #[test]
    fn flags_use_stringified_booleans() {
        let mut store = MemoryStorage::default();
        assert!(!read_flag(&store, DARK_THEME_KEY));
        write_flag(&mut store, DARK_THEME_KEY, true);
        assert_eq!(store.get(DARK_THEME_KEY).as_deref(), Some("true"));
        assert!(read_flag(&store, DARK_THEME_KEY));
        write_flag(&mut store, DARK_THEME_KEY, false);
        assert!(!read_flag(&store, DARK_THEME_KEY));
    }
}
