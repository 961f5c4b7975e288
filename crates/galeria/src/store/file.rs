//! A key-value store backed by a single JSON document on disk.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::Utc;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{GaleriaError, Result};

use super::kv::KeyValueStore;

/// Current version of the gallery document format.
pub const GALERIA_VERSION: &str = "1.0.0";

const VERSION_KEY: &str = "galeria_version";

/// A JSON document of named collections.
///
/// Writes change the in-memory document; nothing reaches disk until
/// [`JsonFileStore::save`] or [`JsonFileStore::save_with_history`].
///
/// ```text
/// data/
/// ├── gallery.json                    # Current document
/// └── gallery.history/
///     └── 2026-10-18T10-00-00.json    # Previous versions
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    document: IndexMap<String, Value>,
}

impl JsonFileStore {
    /// Open the document at `path`. A missing file opens as an empty document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            debug!(path = %path.display(), "gallery document not found, starting empty");
            return Ok(Self {
                path,
                document: IndexMap::new(),
            });
        }

        let document = read_document(&path)?;
        info!(path = %path.display(), keys = document.len(), "loaded gallery document");

        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Version recorded in the document, if any.
    pub fn version(&self) -> Option<&str> {
        self.document.get(VERSION_KEY).and_then(Value::as_str)
    }

    /// Write the document to its path, creating parent directories as needed.
    pub fn save(&mut self) -> Result<()> {
        self.document
            .insert(VERSION_KEY.to_string(), Value::from(GALERIA_VERSION));
        write_document(&self.path, &self.document)?;
        info!(path = %self.path.display(), "saved gallery document");
        Ok(())
    }

    /// Save, first copying any existing file into the history directory.
    pub fn save_with_history(&mut self) -> Result<()> {
        if self.path.exists() {
            self.archive_current()?;
        }
        self.save()
    }

    fn archive_current(&self) -> Result<()> {
        let history_dir = history_directory(&self.path);

        if !history_dir.exists() {
            fs::create_dir_all(&history_dir).map_err(|e| {
                GaleriaError::Persistence(format!(
                    "Failed to create history directory '{}': {}",
                    history_dir.display(),
                    e
                ))
            })?;
        }

        let existing = read_document(&self.path)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let history_file = history_dir.join(format!("{}.json", timestamp));

        write_document(&history_file, &existing)?;
        debug!(path = %history_file.display(), "archived previous gallery document");
        Ok(())
    }

    /// List the archived versions of the document at `path`, newest first.
    pub fn list_history(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let history_dir = history_directory(path.as_ref());

        if !history_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<PathBuf> = fs::read_dir(&history_dir)
            .map_err(|e| GaleriaError::Io {
                path: history_dir.clone(),
                source: e,
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();

        // Timestamped names sort chronologically
        entries.sort_by(|a, b| b.cmp(a));

        Ok(entries)
    }

    /// Open an archived version; index 0 is the most recent.
    pub fn open_history(path: impl AsRef<Path>, index: usize) -> Result<Self> {
        let history = Self::list_history(&path)?;

        let history_path = history.get(index).ok_or_else(|| {
            GaleriaError::Persistence(format!(
                "History version {} not found (only {} versions available)",
                index,
                history.len()
            ))
        })?;

        Self::open(history_path)
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.document.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: Value) -> Result<()> {
        self.document.insert(key.to_string(), value);
        Ok(())
    }
}

fn read_document(path: &Path) -> Result<IndexMap<String, Value>> {
    let file = File::open(path).map_err(|e| GaleriaError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        GaleriaError::Persistence(format!(
            "Failed to parse gallery document '{}': {}",
            path.display(),
            e
        ))
    })
}

fn write_document(path: &Path, document: &IndexMap<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                GaleriaError::Persistence(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(path).map_err(|e| GaleriaError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, document).map_err(|e| {
        GaleriaError::Persistence(format!("Failed to serialize gallery document: {}", e))
    })
}

/// Get the history directory for a gallery document.
fn history_directory(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let parent = path.parent().unwrap_or(Path::new("."));

    parent.join(format!("{}.history", stem))
}
