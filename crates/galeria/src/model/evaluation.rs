use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GaleriaError, Result};

use super::{generate_id, non_blank};

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 1.0;
/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

/// A rating given to an artwork in the context of one exhibition.
///
/// At most one evaluation exists per (exhibition, artwork) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: String,
    pub exhibition_id: String,
    pub artwork_id: String,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Evaluation {
    pub(crate) fn from_draft(draft: EvaluationDraft) -> Self {
        Self {
            id: generate_id("eval"),
            exhibition_id: draft.exhibition_id,
            artwork_id: draft.artwork_id,
            rating: draft.rating,
            notes: non_blank(draft.notes),
            created_at: Utc::now(),
        }
    }

    /// Whether this evaluation is keyed to the given pair.
    pub fn is_for(&self, exhibition_id: &str, artwork_id: &str) -> bool {
        self.exhibition_id == exhibition_id && self.artwork_id == artwork_id
    }

    /// Take the rating and notes of a resubmission.
    pub(crate) fn revise(&mut self, draft: EvaluationDraft) {
        self.rating = draft.rating;
        self.notes = non_blank(draft.notes);
    }
}

/// Form input for an evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationDraft {
    pub exhibition_id: String,
    pub artwork_id: String,
    pub rating: f64,
    pub notes: Option<String>,
}

impl EvaluationDraft {
    pub fn new(exhibition_id: impl Into<String>, artwork_id: impl Into<String>, rating: f64) -> Self {
        Self {
            exhibition_id: exhibition_id.into(),
            artwork_id: artwork_id.into(),
            rating,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.exhibition_id.trim().is_empty() || self.artwork_id.trim().is_empty() {
            return Err(GaleriaError::Validation(
                "Please select exhibition and artwork".to_string(),
            ));
        }

        if !self.rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(GaleriaError::Validation(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        Ok(())
    }
}
