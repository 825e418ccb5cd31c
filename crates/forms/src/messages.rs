//! User-facing validation messages.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FormsError;

/// Catalog of every message a validator can emit.
///
/// The default catalog is Romanian, matching the rest of the application.
/// A JSON document may override any subset of keys; keys it leaves out keep
/// their default text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    /// Classroom `name` missing or empty.
    pub name_required: String,
    /// Classroom `capacity` not a non-negative integer.
    pub capacity_invalid: String,
    /// `learningCycle` outside the accepted set.
    pub learning_cycle_invalid: String,
    /// Academic year `start` unparsable or before the minimum year.
    pub start_invalid: String,
    /// Academic year `end` unparsable or before the minimum year.
    pub end_invalid: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            name_required: "Numele sălii este obligatoriu".to_string(),
            capacity_invalid: "Capacitatea trebuie să fie un număr întreg mai mare sau egal cu 0"
                .to_string(),
            learning_cycle_invalid: "Ciclul de învățământ trebuie să fie Licenta sau Master"
                .to_string(),
            start_invalid: "Anul de început trebuie să fie cel puțin 2000".to_string(),
            end_invalid: "Anul de sfârșit trebuie să fie cel puțin 2000".to_string(),
        }
    }
}

impl Messages {
    /// Parses a (possibly partial) catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, FormsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a (possibly partial) catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FormsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FormsError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
