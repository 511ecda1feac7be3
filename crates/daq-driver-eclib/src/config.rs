//! TOML configuration for technique parameter lists.
//!
//! # Example Configuration
//!
//! ```toml
//! technique = "ocv"
//!
//! [hardware]
//! connection = "standard"
//! ground = "floating"
//!
//! [[params]]
//! label = "Rest_time_T"
//! type = "single"
//! value = 10.0
//!
//! [[params]]
//! label = "E_Range"
//! type = "int32"
//! value = 2
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{EcLibError, Result};
use crate::hardware::HardwareConfig;
use crate::params::{EccParam, EccParams, ParamValue};
use crate::types::{ParamType, TechniqueId};

/// Technique parameters as written in a configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct TechniqueConfig {
    /// Technique the parameters are meant for
    #[serde(default)]
    pub technique: Option<TechniqueId>,

    /// Electrode configuration to apply alongside the technique
    #[serde(default)]
    pub hardware: Option<HardwareConfig>,

    /// Parameters in file order
    #[serde(default)]
    pub params: Vec<ParamEntry>,
}

/// One `[[params]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ParamEntry {
    /// Vendor parameter label
    pub label: String,

    /// Storage type the value is checked against
    #[serde(rename = "type")]
    pub param_type: ParamType,

    /// Value as written
    pub value: ParamLiteral,

    /// 0-based step index (default 0)
    #[serde(default)]
    pub index: i32,
}

/// Untyped value as it appears in the document.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum ParamLiteral {
    /// TOML boolean
    Bool(bool),
    /// TOML integer
    Int(i64),
    /// TOML float
    Float(f64),
}

impl ParamEntry {
    /// Convert to a validated parameter of the declared type.
    pub fn to_param(&self) -> Result<EccParam> {
        let value = match (self.param_type, self.value) {
            (ParamType::Int32, ParamLiteral::Int(v)) => {
                ParamValue::Int32(i32::try_from(v).map_err(|_| self.invalid("out of INT32 range"))?)
            }
            (ParamType::Boolean, ParamLiteral::Bool(v)) => ParamValue::Boolean(v),
            (ParamType::Single, ParamLiteral::Float(v)) => ParamValue::Single(v as f32),
            (ParamType::Single, ParamLiteral::Int(v)) => ParamValue::Single(v as f32),
            (expected, _) => return Err(self.invalid(&format!("expected a {} value", expected))),
        };
        EccParam::new(self.label.clone(), value, self.index)
    }

    fn invalid(&self, reason: &str) -> EcLibError {
        EcLibError::InvalidConfig {
            message: format!("parameter '{}': {}", self.label, reason),
        }
    }
}

impl TechniqueConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| EcLibError::InvalidConfig {
            message: e.to_string(),
        })?;
        debug!(
            technique = ?config.technique,
            n_params = config.params.len(),
            "parsed technique configuration"
        );
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded technique configuration");
        Ok(config)
    }

    /// Validate every entry and build the raw parameter array.
    pub fn to_params(&self) -> Result<EccParams> {
        let mut params = EccParams::new();
        for entry in &self.params {
            params.push(&entry.to_param()?)?;
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ElectrodeConnection, GroundMode};

    const OCV: &str = r#"
technique = "ocv"

[hardware]
ground = "floating"

[[params]]
label = "Rest_time_T"
type = "single"
value = 10

[[params]]
label = "Record_every_dE"
type = "single"
value = 0.01

[[params]]
label = "E_Range"
type = "int32"
value = 2
index = 0
"#;

    #[test]
    fn test_parse_ocv() {
        let config = TechniqueConfig::from_toml_str(OCV).unwrap();
        assert_eq!(config.technique, Some(TechniqueId::Ocv));
        let hardware = config.hardware.unwrap();
        assert_eq!(hardware.connection, ElectrodeConnection::Standard);
        assert_eq!(hardware.ground, GroundMode::Floating);

        let params = config.to_params().unwrap();
        assert_eq!(params.len(), 3);
        let decoded = params.to_params().unwrap();
        assert_eq!(decoded[0].value, ParamValue::Single(10.0));
        assert_eq!(decoded[2].value, ParamValue::Int32(2));
    }

    #[test]
    fn test_type_mismatch() {
        let config = TechniqueConfig::from_toml_str(
            r#"
[[params]]
label = "vs_initial"
type = "boolean"
value = 1
"#,
        )
        .unwrap();
        let err = config.to_params().unwrap_err();
        assert!(err.to_string().contains("vs_initial"));
        assert!(err.to_string().contains("PARAM_BOOLEAN"));
    }

    #[test]
    fn test_int_out_of_range() {
        let config = TechniqueConfig::from_toml_str(
            r#"
[[params]]
label = "N_Cycles"
type = "int32"
value = 3000000000
"#,
        )
        .unwrap();
        assert!(matches!(
            config.to_params(),
            Err(EcLibError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_unknown_param_type() {
        let err = TechniqueConfig::from_toml_str(
            r#"
[[params]]
label = "x"
type = "double"
value = 1.0
"#,
        )
        .unwrap_err();
        assert!(matches!(err, EcLibError::InvalidConfig { .. }));
    }

    #[test]
    fn test_empty_document() {
        let config = TechniqueConfig::from_toml_str("").unwrap();
        assert!(config.technique.is_none());
        assert!(config.to_params().unwrap().is_empty());
    }
}
