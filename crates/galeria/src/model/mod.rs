//! Gallery records and the drafts used to create or edit them.
//!
//! Every record carries an opaque string `id` and a `created_at` timestamp,
//! both assigned once at creation and never changed by edits. Field names
//! serialize in camelCase so documents written by earlier versions of the
//! gallery load unchanged.

mod artist;
mod artwork;
mod evaluation;
mod exhibition;
mod types;

use std::sync::atomic::{AtomicU64, Ordering};

pub use artist::{Artist, ArtistDraft};
pub use artwork::{Artwork, ArtworkDraft, Dimensions};
pub use evaluation::{Evaluation, EvaluationDraft, MAX_RATING, MIN_RATING};
pub use exhibition::{Exhibition, ExhibitionDraft};
pub use types::{ArtworkStatus, Category, ExhibitionStatus};

use crate::error::{GaleriaError, Result};

/// Generate a unique record ID.
///
/// A process-wide counter keeps IDs distinct within a run; the random
/// suffix keeps them distinct from IDs loaded from earlier runs.
pub(crate) fn generate_id(prefix: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    format!(
        "{}_{:04}{:08x}",
        prefix,
        COUNTER.fetch_add(1, Ordering::SeqCst),
        fastrand::u32(..)
    )
}

/// Reject blank required text fields.
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GaleriaError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Blank optional strings are stored as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
