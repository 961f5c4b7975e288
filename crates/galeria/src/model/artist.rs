use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{generate_id, non_blank, require};

/// An artist represented by the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Artist {
    /// Create a new artist from a validated draft.
    pub(crate) fn from_draft(draft: ArtistDraft) -> Self {
        Self {
            id: generate_id("artist"),
            name: draft.name,
            nationality: draft.nationality,
            biography: draft.biography,
            style: draft.style,
            image_url: non_blank(draft.image_url),
            created_at: Utc::now(),
        }
    }

    /// Replace the editable fields, keeping `id` and `created_at`.
    pub(crate) fn apply(&mut self, draft: ArtistDraft) {
        self.name = draft.name;
        self.nationality = draft.nationality;
        self.biography = draft.biography;
        self.style = draft.style;
        self.image_url = non_blank(draft.image_url);
    }
}

/// Form input for creating or editing an artist.
#[derive(Debug, Clone, Default)]
pub struct ArtistDraft {
    pub name: String,
    pub nationality: String,
    pub biography: String,
    pub style: String,
    pub image_url: Option<String>,
}

impl ArtistDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    pub fn with_biography(mut self, biography: impl Into<String>) -> Self {
        self.biography = biography.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("Name", &self.name)
    }
}

/// Pre-fill an edit form with the stored values.
impl From<&Artist> for ArtistDraft {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            nationality: artist.nationality.clone(),
            biography: artist.biography.clone(),
            style: artist.style.clone(),
            image_url: artist.image_url.clone(),
        }
    }
}
