//! Configuration for opening and saving a gallery.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{GaleriaError, Result};
use crate::gallery::Gallery;
use crate::status::today_utc;
use crate::store::JsonFileStore;

/// Default location of the gallery document.
pub const DEFAULT_DATA_PATH: &str = "gallery.json";

/// Configuration for a gallery session.
#[derive(Debug, Clone)]
pub struct GaleriaConfig {
    /// Path to the gallery document.
    pub data_path: PathBuf,
    /// Archive the previous document on every save.
    pub keep_history: bool,
    /// Date used to derive exhibition statuses (None = today, UTC).
    pub today: Option<NaiveDate>,
}

impl Default for GaleriaConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            keep_history: true,
            today: None,
        }
    }
}

impl GaleriaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_history(mut self, keep_history: bool) -> Self {
        self.keep_history = keep_history;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The date statuses are derived against.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(today_utc)
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(GaleriaError::Config("data path is empty".to_string()));
        }
        if self.data_path.is_dir() {
            return Err(GaleriaError::Config(format!(
                "data path '{}' is a directory",
                self.data_path.display()
            )));
        }
        Ok(())
    }

    /// Open the configured document and load the gallery from it.
    pub fn open(&self) -> Result<(JsonFileStore, Gallery)> {
        self.validate()?;
        let store = JsonFileStore::open(&self.data_path)?;
        let gallery = Gallery::from_store(&store)?;
        Ok((store, gallery))
    }

    /// Write the gallery into `store` and save it, archiving if configured.
    pub fn save(&self, store: &mut JsonFileStore, gallery: &Gallery) -> Result<()> {
        gallery.write_to(store)?;
        if self.keep_history {
            store.save_with_history()
        } else {
            store.save()
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}
