//! The persisted input fields and their parse step.

use super::{StateError, StateResult};
use serde::{Deserialize, Serialize};

/// Schema version for the persisted inputs
/// Version 1: tags, prefix, secret, letters, missing, suffix
/// Version 2: Added poll_heading
pub const INPUTS_SCHEMA_VERSION: u32 = 2;

pub const DEFAULT_TAGS: &str = "@galgodon@fedigroups.social #galgenmasto #galgenfedi";

/// The operator's raw text fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelperInputs {
    /// Absent in files written before versioning
    #[serde(default)]
    pub schema_version: Option<u32>,
    pub tags: String,
    pub prefix: String,
    pub secret: String,
    /// Letters revealed so far
    pub letters: String,
    /// Label for known letters absent from the secret
    pub missing: String,
    pub suffix: String,
    #[serde(default)]
    pub poll_heading: String,
    /// Last save (ISO8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl HelperInputs {
    /// A filled-in example round
    pub fn example() -> Self {
        Self {
            schema_version: Some(INPUTS_SCHEMA_VERSION),
            tags: DEFAULT_TAGS.to_string(),
            prefix: "Das R habt Ihr also gewählt.\nDas ist ein Treffer.".to_string(),
            secret: "Schöne Grüße".to_string(),
            letters: "espätör".to_string(),
            missing: "Nicht vorhanden:".to_string(),
            suffix: "(6 + 5 Zeichen; ÄÖÜß nicht aufgelöst)".to_string(),
            poll_heading: String::new(),
            saved_at: None,
        }
    }

    /// Empty fields, keeping only the tag line
    pub fn cleared() -> Self {
        Self {
            schema_version: Some(INPUTS_SCHEMA_VERSION),
            tags: DEFAULT_TAGS.to_string(),
            ..Self::default()
        }
    }

    /// Parse persisted inputs, rejecting anything of the wrong shape
    pub fn from_json(json: &str) -> StateResult<Self> {
        let inputs: Self = serde_json::from_str(json)
            .map_err(|e| StateError::NeedsReset(format!("Malformed state: {}", e)))?;
        inputs.validate()?;
        Ok(inputs)
    }

    pub fn to_json(&self) -> StateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> StateResult<()> {
        match self.schema_version {
            Some(version) if version > INPUTS_SCHEMA_VERSION => Err(StateError::NeedsReset(format!(
                "State schema version {} is newer than supported version {}",
                version, INPUTS_SCHEMA_VERSION
            ))),
            _ => Ok(()),
        }
    }

    /// Stamp with the current schema version and time before saving
    pub(crate) fn stamped(&self) -> Self {
        Self {
            schema_version: Some(INPUTS_SCHEMA_VERSION),
            saved_at: Some(chrono::Utc::now().to_rfc3339()),
            ..self.clone()
        }
    }
}
