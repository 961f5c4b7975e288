//! The key-value boundary the gallery persists through.

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// Key holding the artist collection.
pub const ARTISTS_KEY: &str = "artists";
/// Key holding the artwork collection.
pub const ARTWORKS_KEY: &str = "artworks";
/// Key holding the exhibition collection.
pub const EXHIBITIONS_KEY: &str = "exhibitions";
/// Key holding the evaluation collection.
pub const EVALUATIONS_KEY: &str = "evaluations";

/// A namespaced store of JSON values.
///
/// Durability and format are up to the implementation; the gallery only
/// relies on a read after a write returning the written value.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if nothing was written.
    fn read(&self, key: &str) -> Result<Option<Value>>;

    /// Replace the value under `key`.
    fn write(&mut self, key: &str, value: Value) -> Result<()>;
}

/// Typed helpers over any [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and deserialize `key`, falling back to `T::default()` when absent.
    fn read_or_default<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.read(key)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(T::default()),
        }
    }

    /// Serialize and write `value` under `key`.
    fn write_value<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        self.write(key, serde_json::to_value(value)?)
    }

    /// Read `key`, apply `updater` and write the result back.
    fn update<T, F>(&mut self, key: &str, updater: F) -> Result<()>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(T) -> T,
    {
        let current: T = self.read_or_default(key)?;
        self.write_value(key, &updater(current))
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// An in-process store, mostly useful for tests and scratch sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: IndexMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys written so far, in first-write order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_key_defaults() {
        let store = MemoryStore::new();
        let values: Vec<String> = store.read_or_default("artists").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_update_applies_to_current_value() {
        let mut store = MemoryStore::new();
        store.write_value("counts", &vec![1, 2]).unwrap();

        store
            .update("counts", |mut v: Vec<i32>| {
                v.push(3);
                v
            })
            .unwrap();

        let counts: Vec<i32> = store.read_or_default("counts").unwrap();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let mut store = MemoryStore::new();
        store.write("artists", Value::String("oops".into())).unwrap();
        let result: Result<Vec<i32>> = store.read_or_default("artists");
        assert!(result.is_err());
    }
}
