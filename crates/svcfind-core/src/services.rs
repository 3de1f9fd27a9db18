//! Rows from the backing data service: provider categories and providers.

use serde::{Deserialize, Serialize};

use crate::location::Coordinate;

/// A provider category row from the `service_type` resource (GP surgery,
/// dentist, optician, school).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceType {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ServiceType {
    /// Resolves the stored icon name to a renderable glyph. Unknown or missing
    /// names fall back to the stethoscope.
    #[must_use]
    pub fn category_icon(&self) -> CategoryIcon {
        CategoryIcon::from_name(self.icon.as_deref())
    }
}

/// The closed set of glyphs a surface can render for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Stethoscope,
    Tooth,
    Glasses,
    School,
}

impl CategoryIcon {
    /// Maps a stored icon name to a glyph. Names the set does not know, and
    /// absent names, resolve to [`CategoryIcon::Stethoscope`].
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("Tooth" | "Smile") => Self::Tooth,
            Some("Glasses" | "Eye") => Self::Glasses,
            Some("School" | "GraduationCap") => Self::School,
            _ => Self::Stethoscope,
        }
    }

    /// Stable lowercase name, usable as an asset key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Stethoscope => "stethoscope",
            Self::Tooth => "tooth",
            Self::Glasses => "glasses",
            Self::School => "school",
        }
    }
}

/// A provider row from the `service` resource.
///
/// Latitude and longitude arrive as raw nullable floats; use
/// [`Service::coordinate`] for a validated position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub address: String,
    pub telephone: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub service_type_id: String,
    pub postcode: String,
}

impl Service {
    /// The provider's position, when the row carries a usable pair. Rows with
    /// a missing or out-of-range component have no position.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.latitude?, self.longitude?).ok()
    }
}
