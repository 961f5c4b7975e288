//! Storage for the four gallery collections.
//!
//! Collections are held in [`EntityStore`]s and persisted through the
//! [`KeyValueStore`] boundary under four fixed keys.
//!
//! # Usage
//!
//! ```no_run
//! use galeria::Gallery;
//! use galeria::store::JsonFileStore;
//!
//! let mut file = JsonFileStore::open("gallery.json").unwrap();
//! let mut gallery = Gallery::from_store(&file).unwrap();
//!
//! // ... mutate the gallery ...
//!
//! gallery.write_to(&mut file).unwrap();
//! file.save_with_history().unwrap();
//! ```

mod entity;
mod file;
mod kv;

pub use entity::{EntityStore, Record};
pub use file::{GALERIA_VERSION, JsonFileStore};
pub use kv::{
    ARTISTS_KEY, ARTWORKS_KEY, EVALUATIONS_KEY, EXHIBITIONS_KEY, KeyValueStore, KeyValueStoreExt,
    MemoryStore,
};
