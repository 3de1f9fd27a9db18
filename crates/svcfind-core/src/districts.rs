//! District-to-postcode mapping loaded from a YAML data file.
//!
//! Reverse geocoding yields district or county names, not postcodes. This
//! table bridges the two. It is maintained data, editable without touching
//! code, and is validated on load.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::validate::Postcode;

/// One entry of the districts file: a district or county name and the
/// postcode it maps to.
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictEntry {
    pub name: String,
    pub postcode: String,
}

#[derive(Debug, Deserialize)]
struct DistrictsFile {
    districts: Vec<DistrictEntry>,
}

/// Case-insensitive district/county name lookup.
#[derive(Debug, Clone, Default)]
pub struct DistrictMap {
    by_name: HashMap<String, String>,
}

impl DistrictMap {
    /// Loads and validates the districts file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DistrictsFileIo`] when the file cannot be read,
    /// [`ConfigError::DistrictsFileParse`] when it is not valid YAML, and
    /// [`ConfigError::Validation`] when an entry is empty, carries an invalid
    /// postcode, or repeats a name.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::DistrictsFileIo {
            path: path.display().to_string(),
            source,
        })?;
        let file: DistrictsFile = serde_yaml::from_str(&raw)?;
        Self::from_entries(&file.districts)
    }

    /// Builds a map from already-parsed entries, applying the same validation
    /// as [`DistrictMap::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] on empty names, invalid postcodes,
    /// or duplicate names (compared case-insensitively).
    pub fn from_entries(entries: &[DistrictEntry]) -> Result<Self, ConfigError> {
        let mut by_name = HashMap::with_capacity(entries.len());
        for entry in entries {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(ConfigError::Validation(
                    "district entry with an empty name".to_owned(),
                ));
            }
            Postcode::parse(&entry.postcode).map_err(|err| {
                ConfigError::Validation(format!("district {name:?}: {err}"))
            })?;
            let key = name.to_lowercase();
            if by_name
                .insert(key, entry.postcode.trim().to_owned())
                .is_some()
            {
                return Err(ConfigError::Validation(format!(
                    "duplicate district name {name:?}"
                )));
            }
        }
        Ok(Self { by_name })
    }

    /// Postcode for a district or county name, ignoring case and surrounding
    /// whitespace. `None` when the name is not in the table.
    #[must_use]
    pub fn postcode_for(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
