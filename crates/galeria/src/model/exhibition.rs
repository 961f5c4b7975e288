use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GaleriaError, Result};
use crate::status::derive_status;

use super::types::ExhibitionStatus;
use super::{generate_id, require};

/// An exhibition showing a selection of artworks over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    pub id: String,
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub artwork_ids: Vec<String>,
    /// Status as of the last create, edit or explicit refresh.
    pub status: ExhibitionStatus,
    pub created_at: DateTime<Utc>,
}

impl Exhibition {
    pub(crate) fn from_draft(draft: ExhibitionDraft, today: NaiveDate) -> Self {
        let status = derive_status(draft.start_date, draft.end_date, today);
        Self {
            id: generate_id("exhibition"),
            name: draft.name,
            location: draft.location,
            start_date: draft.start_date,
            end_date: draft.end_date,
            description: draft.description,
            artwork_ids: draft.artwork_ids,
            status,
            created_at: Utc::now(),
        }
    }

    /// Replace the editable fields and recompute the status.
    pub(crate) fn apply(&mut self, draft: ExhibitionDraft, today: NaiveDate) {
        self.status = derive_status(draft.start_date, draft.end_date, today);
        self.name = draft.name;
        self.location = draft.location;
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
        self.description = draft.description;
        self.artwork_ids = draft.artwork_ids;
    }

    /// Recompute the status for `today`. Returns true if it changed.
    pub(crate) fn refresh_status(&mut self, today: NaiveDate) -> bool {
        let status = derive_status(self.start_date, self.end_date, today);
        let changed = status != self.status;
        self.status = status;
        changed
    }

    pub fn includes(&self, artwork_id: &str) -> bool {
        self.artwork_ids.iter().any(|id| id == artwork_id)
    }
}

/// Form input for creating or editing an exhibition.
#[derive(Debug, Clone)]
pub struct ExhibitionDraft {
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub artwork_ids: Vec<String>,
}

impl ExhibitionDraft {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            start_date,
            end_date,
            description: String::new(),
            artwork_ids: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_artwork(mut self, artwork_id: impl Into<String>) -> Self {
        self.artwork_ids.push(artwork_id.into());
        self
    }

    pub fn with_artworks<I, S>(mut self, artwork_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artwork_ids = artwork_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("Name", &self.name)?;
        require("Location", &self.location)?;

        if self.end_date < self.start_date {
            return Err(GaleriaError::Validation(
                "End date must be after start date".to_string(),
            ));
        }

        if self.artwork_ids.is_empty() {
            return Err(GaleriaError::Validation(
                "Please select at least one artwork".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.artwork_ids.iter().find(|id| !seen.insert(id.as_str())) {
            return Err(GaleriaError::Validation(format!(
                "Artwork '{}' is selected more than once",
                dup
            )));
        }

        Ok(())
    }
}

impl From<&Exhibition> for ExhibitionDraft {
    fn from(exhibition: &Exhibition) -> Self {
        Self {
            name: exhibition.name.clone(),
            location: exhibition.location.clone(),
            start_date: exhibition.start_date,
            end_date: exhibition.end_date,
            description: exhibition.description.clone(),
            artwork_ids: exhibition.artwork_ids.clone(),
        }
    }
}
