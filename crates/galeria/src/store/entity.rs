//! Ordered, id-addressed collections of one record type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{GaleriaError, Result};
use crate::model::{Artist, Artwork, Evaluation, Exhibition};

use super::kv::{
    ARTISTS_KEY, ARTWORKS_KEY, EVALUATIONS_KEY, EXHIBITIONS_KEY, KeyValueStore, KeyValueStoreExt,
};

/// A record that can live in an [`EntityStore`].
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Name used in error messages.
    const KIND: &'static str;
    /// Key the collection is persisted under.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
}

impl Record for Artist {
    const KIND: &'static str = "Artist";
    const COLLECTION: &'static str = ARTISTS_KEY;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Artwork {
    const KIND: &'static str = "Artwork";
    const COLLECTION: &'static str = ARTWORKS_KEY;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Exhibition {
    const KIND: &'static str = "Exhibition";
    const COLLECTION: &'static str = EXHIBITIONS_KEY;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Evaluation {
    const KIND: &'static str = "Evaluation";
    const COLLECTION: &'static str = EVALUATIONS_KEY;

    fn id(&self) -> &str {
        &self.id
    }
}

/// An ordered collection of records, addressed by id.
///
/// Records keep their append order. Every mutation is visible to the next
/// read; there is no batching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityStore<T> {
    records: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing records as loaded, without re-checking ids.
    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Load the collection from `kv`; an absent key is an empty collection.
    pub fn load<S: KeyValueStore + ?Sized>(kv: &S) -> Result<Self> {
        let records: Vec<T> = kv.read_or_default(T::COLLECTION)?;
        Ok(Self { records })
    }

    /// Write the collection to `kv`.
    pub fn store<S: KeyValueStore + ?Sized>(&self, kv: &mut S) -> Result<()> {
        kv.write_value(T::COLLECTION, &self.records)
    }

    pub fn get_all(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Get a record or fail with `NotFound`.
    pub fn require(&self, id: &str) -> Result<&T> {
        self.get(id)
            .ok_or_else(|| GaleriaError::not_found(T::KIND, id))
    }

    /// Find the first record matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.records.iter().find(|r| predicate(r))
    }

    /// Append a record at the end of the collection.
    pub fn append(&mut self, record: T) -> Result<&T> {
        if self.contains(record.id()) {
            return Err(GaleriaError::Validation(format!(
                "{} '{}' already exists",
                T::KIND,
                record.id()
            )));
        }
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Apply `patch` to the record with `id`.
    ///
    /// Fields the patch does not touch are preserved. A patch may not change
    /// the record's id; if it does, the record is restored and the call fails.
    pub fn update_where<F>(&mut self, id: &str, patch: F) -> Result<&T>
    where
        F: FnOnce(&mut T),
    {
        let index = self.position(id)?;
        let original = self.records[index].clone();
        patch(&mut self.records[index]);

        if self.records[index].id() != id {
            self.records[index] = original;
            return Err(GaleriaError::Validation(format!(
                "{} id cannot be changed by an update",
                T::KIND
            )));
        }

        Ok(&self.records[index])
    }

    /// Remove and return the record with `id`.
    pub fn remove_where(&mut self, id: &str) -> Result<T> {
        let index = self.position(id)?;
        Ok(self.records.remove(index))
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| GaleriaError::not_found(T::KIND, id))
    }
}

impl<'a, T> IntoIterator for &'a EntityStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
