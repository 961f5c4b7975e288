//! Enumerations shared by the gallery records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Painting,
    Sculpture,
    Photography,
    Installation,
    Digital,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Painting,
        Category::Sculpture,
        Category::Photography,
        Category::Installation,
        Category::Digital,
    ];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Painting => "Painting",
            Category::Sculpture => "Sculpture",
            Category::Photography => "Photography",
            Category::Installation => "Installation",
            Category::Digital => "Digital",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Category::Painting => "painting",
            Category::Sculpture => "sculpture",
            Category::Photography => "photography",
            Category::Installation => "installation",
            Category::Digital => "digital",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| {
                format!(
                    "Unknown category: {}. Use painting, sculpture, photography, installation, or digital.",
                    s
                )
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability of an artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtworkStatus {
    #[default]
    Available,
    InExhibition,
    OnLoan,
    Sold,
}

impl ArtworkStatus {
    pub const ALL: [ArtworkStatus; 4] = [
        ArtworkStatus::Available,
        ArtworkStatus::InExhibition,
        ArtworkStatus::OnLoan,
        ArtworkStatus::Sold,
    ];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ArtworkStatus::Available => "Available",
            ArtworkStatus::InExhibition => "In Exhibition",
            ArtworkStatus::OnLoan => "On Loan",
            ArtworkStatus::Sold => "Sold",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ArtworkStatus::Available => "available",
            ArtworkStatus::InExhibition => "in-exhibition",
            ArtworkStatus::OnLoan => "on-loan",
            ArtworkStatus::Sold => "sold",
        }
    }
}

impl FromStr for ArtworkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('_', "-");
        ArtworkStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown status: {}. Use available, in-exhibition, on-loan, or sold.",
                    s
                )
            })
    }
}

impl fmt::Display for ArtworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of an exhibition, derived from its date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionStatus {
    /// Starts in the future.
    Planned,
    /// Running today.
    Active,
    /// Already ended.
    Completed,
}

impl ExhibitionStatus {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ExhibitionStatus::Planned => "Planned",
            ExhibitionStatus::Active => "Active",
            ExhibitionStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ExhibitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExhibitionStatus::Planned => f.write_str("planned"),
            ExhibitionStatus::Active => f.write_str("active"),
            ExhibitionStatus::Completed => f.write_str("completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_status_wire_format() {
        let json = serde_json::to_string(&ArtworkStatus::InExhibition).unwrap();
        assert_eq!(json, "\"in-exhibition\"");

        let parsed: ArtworkStatus = serde_json::from_str("\"on-loan\"").unwrap();
        assert_eq!(parsed, ArtworkStatus::OnLoan);
    }

    #[test]
    fn test_parse_from_cli_strings() {
        assert_eq!("Sculpture".parse::<Category>().unwrap(), Category::Sculpture);
        assert_eq!(
            "in_exhibition".parse::<ArtworkStatus>().unwrap(),
            ArtworkStatus::InExhibition
        );
        assert!("oil".parse::<Category>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ArtworkStatus::OnLoan.label(), "On Loan");
        assert_eq!(ExhibitionStatus::Completed.label(), "Completed");
        assert_eq!(Category::Digital.to_string(), "digital");
    }
}
