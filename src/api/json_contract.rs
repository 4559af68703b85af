use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartConfiguration, Theme};
use crate::error::{ThemeError, ThemeResult};

use super::theme_registry::validate_theme_name;
use super::{RegisterOptions, ThemeEngine};

pub const THEME_SET_JSON_SCHEMA_V1: u32 = 1;

/// Versioned batch of named themes, optionally naming the one to activate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSetJsonContractV1 {
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
    pub themes: IndexMap<String, Theme>,
}

impl ThemeSetJsonContractV1 {
    pub fn from_json_str(input: &str) -> ThemeResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ThemeError::InvalidData(format!("failed to parse theme set json payload: {e}"))
        })?;
        if payload.schema_version != THEME_SET_JSON_SCHEMA_V1 {
            return Err(ThemeError::InvalidData(format!(
                "unsupported theme set schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }

    pub fn to_json_pretty(&self) -> ThemeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ThemeError::InvalidData(format!("failed to serialize theme set contract v1: {e}"))
        })
    }
}

impl Theme {
    pub fn from_json_str(input: &str) -> ThemeResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ThemeError::InvalidData(format!("failed to parse theme json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ThemeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ThemeError::InvalidData(format!("failed to serialize theme json: {e}")))
    }
}

impl ChartConfiguration {
    pub fn from_json_str(input: &str) -> ThemeResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ThemeError::InvalidData(format!("failed to parse chart configuration json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ThemeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ThemeError::InvalidData(format!("failed to serialize chart configuration json: {e}"))
        })
    }
}

impl ThemeEngine {
    /// Registers every theme of a v1 theme-set payload.
    ///
    /// The payload is validated as a whole first (names, schema version and
    /// the `active` entry), so a rejected payload leaves the registry
    /// untouched. Returns the number of themes registered.
    pub fn import_theme_set_json(&mut self, input: &str) -> ThemeResult<usize> {
        let payload = ThemeSetJsonContractV1::from_json_str(input)?;
        for name in payload.themes.keys() {
            validate_theme_name(name)?;
        }
        if let Some(active) = payload.active.as_deref() {
            if !payload.themes.contains_key(active) && !self.has_theme(active) {
                return Err(ThemeError::NotFound {
                    name: active.to_owned(),
                });
            }
        }

        let count = payload.themes.len();
        for (name, theme) in payload.themes {
            self.register_theme_with(&name, theme, RegisterOptions::default())?;
        }
        if let Some(active) = payload.active.as_deref() {
            self.set_active_theme(active)?;
        }
        debug!(count, active = ?payload.active, "imported theme set");
        Ok(count)
    }

    /// Serializes every registered theme plus the active name.
    pub fn export_theme_set_json_pretty(&self) -> ThemeResult<String> {
        ThemeSetJsonContractV1 {
            schema_version: THEME_SET_JSON_SCHEMA_V1,
            active: Some(self.active_theme_name.clone()),
            themes: self.themes.clone(),
        }
        .to_json_pretty()
    }
}
