//! House plans loaded from TOML or JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PatternError, Result};
use crate::house::{House, HouseBuilder};

/// Declarative description of a house. Missing optional parts fall back to
/// the builder defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HousePlan {
    pub walls: String,
    pub roof: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<i32>,
    #[serde(default, alias = "floorType", skip_serializing_if = "Option::is_none")]
    pub floor_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garden: Option<bool>,
}

impl HousePlan {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads a plan, picking the format from the extension and sniffing the
    /// content when the extension is missing or unknown.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        debug!(path = %path.display(), format = ?format, "loading house plan");

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_toml_str(&content)
                }
            }
        }
    }

    pub fn into_house(self) -> Result<House> {
        Ok(HouseBuilder::from_plan(&self)?.build())
    }
}
