use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GaleriaError, Result};

use super::types::{ArtworkStatus, Category};
use super::{generate_id, non_blank, require};

/// Physical size of an artwork, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl Dimensions {
    pub fn new(height: f64, width: f64) -> Self {
        Self {
            height,
            width,
            depth: None,
        }
    }

    /// Set the depth. A zero depth means a flat work and is stored as absent.
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = if depth == 0.0 { None } else { Some(depth) };
        self
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [("Height", self.height), ("Width", self.width)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GaleriaError::Validation(format!(
                    "{} must be a positive number",
                    field
                )));
            }
        }
        if let Some(depth) = self.depth {
            if !depth.is_finite() || depth <= 0.0 {
                return Err(GaleriaError::Validation(
                    "Depth must be a positive number".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// A work held or handled by the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist_id: String,
    pub year: i32,
    pub category: Category,
    #[serde(default)]
    pub technique: String,
    #[serde(default)]
    pub description: String,
    pub dimensions: Dimensions,
    pub status: ArtworkStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Artwork {
    pub(crate) fn from_draft(draft: ArtworkDraft) -> Self {
        Self {
            id: generate_id("artwork"),
            title: draft.title,
            artist_id: draft.artist_id,
            year: draft.year,
            category: draft.category,
            technique: draft.technique,
            description: draft.description,
            dimensions: draft.dimensions,
            status: draft.status,
            image_url: non_blank(draft.image_url),
            created_at: Utc::now(),
        }
    }

    pub(crate) fn apply(&mut self, draft: ArtworkDraft) {
        self.title = draft.title;
        self.artist_id = draft.artist_id;
        self.year = draft.year;
        self.category = draft.category;
        self.technique = draft.technique;
        self.description = draft.description;
        self.dimensions = draft.dimensions;
        self.status = draft.status;
        self.image_url = non_blank(draft.image_url);
    }
}

/// Form input for creating or editing an artwork.
#[derive(Debug, Clone)]
pub struct ArtworkDraft {
    pub title: String,
    pub artist_id: String,
    pub year: i32,
    pub category: Category,
    pub technique: String,
    pub description: String,
    pub dimensions: Dimensions,
    pub status: ArtworkStatus,
    pub image_url: Option<String>,
}

impl ArtworkDraft {
    /// Start a draft with the form defaults: current year, painting, available.
    pub fn new(title: impl Into<String>, artist_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist_id: artist_id.into(),
            year: Utc::now().year(),
            category: Category::default(),
            technique: String::new(),
            description: String::new(),
            dimensions: Dimensions::default(),
            status: ArtworkStatus::default(),
            image_url: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_technique(mut self, technique: impl Into<String>) -> Self {
        self.technique = technique.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_status(mut self, status: ArtworkStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Check the fields that do not depend on other collections.
    ///
    /// Whether `artist_id` names an existing artist is checked by the
    /// integrity guard.
    pub fn validate(&self) -> Result<()> {
        require("Title", &self.title)?;
        if self.artist_id.trim().is_empty() {
            return Err(GaleriaError::Validation(
                "Please select an artist".to_string(),
            ));
        }
        self.dimensions.validate()
    }
}

impl From<&Artwork> for ArtworkDraft {
    fn from(artwork: &Artwork) -> Self {
        Self {
            title: artwork.title.clone(),
            artist_id: artwork.artist_id.clone(),
            year: artwork.year,
            category: artwork.category,
            technique: artwork.technique.clone(),
            description: artwork.description.clone(),
            dimensions: artwork.dimensions,
            status: artwork.status,
            image_url: artwork.image_url.clone(),
        }
    }
}
