//! Scenario Catalog
//!
//! Loads and validates the set of scenarios a user can explore. A catalog is
//! a JSON document:
//!
//! ```json
//! { "version": "1.0", "scenarios": [ { "id": "card-purchase", ... } ] }
//! ```
//!
//! The built-in catalog is embedded in the library. Alternative catalogs can
//! be loaded from disk with [`Catalog::load`].
//!
//! # Critical Invariants
//!
//! 1. Every scenario in a catalog passes [`Scenario::validate`]
//! 2. Scenario ids are unique within a catalog
//! 3. A catalog is immutable once loaded

use crate::models::scenario::{Scenario, ScenarioError};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("builtin.json");

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(#[from] ScenarioError),

    #[error("Duplicate scenario id: {0}")]
    DuplicateScenario(String),

    #[error("Catalog serialization failed: {0}")]
    Serialization(String),
}

/// Catalog document shape, before validation
#[derive(Deserialize)]
struct CatalogDoc {
    version: String,
    scenarios: Vec<Scenario>,
}

/// An immutable, validated set of scenarios
///
/// Deserializing goes through [`TryFrom<Value>`], so a `Catalog` obtained
/// from serde has been validated exactly like one from [`Catalog::from_json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Catalog {
    version: String,
    scenarios: Vec<Scenario>,
    #[serde(skip_serializing)]
    fingerprint: String,
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.scenarios == other.scenarios
    }
}

impl TryFrom<Value> for Catalog {
    type Error = CatalogError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let fingerprint = fingerprint_value(&value)?;
        let doc: CatalogDoc =
            serde_json::from_value(value).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::assemble(doc.version, doc.scenarios, Some(fingerprint))
    }
}

impl Catalog {
    /// Build a catalog from already-constructed scenarios
    ///
    /// # Errors
    /// Returns the first validation failure or duplicate id found.
    pub fn new(version: impl Into<String>, scenarios: Vec<Scenario>) -> Result<Self, CatalogError> {
        Self::assemble(version.into(), scenarios, None)
    }

    /// The catalog shipped with the library
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let catalog = Self::try_from(value)?;

        tracing::info!(
            version = %catalog.version,
            scenarios = catalog.scenarios.len(),
            fingerprint = %catalog.fingerprint,
            "loaded scenario catalog"
        );
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Common construction path: drop unusable economics, validate, fingerprint
    fn assemble(
        version: String,
        mut scenarios: Vec<Scenario>,
        fingerprint: Option<String>,
    ) -> Result<Self, CatalogError> {
        for scenario in &mut scenarios {
            scenario.discard_unusable_economics();
        }

        let mut catalog = Self {
            version,
            scenarios,
            fingerprint: String::new(),
        };
        catalog.validate()?;

        catalog.fingerprint = match fingerprint {
            Some(fingerprint) => fingerprint,
            None => {
                let value = serde_json::to_value(&catalog)
                    .map_err(|e| CatalogError::Serialization(e.to_string()))?;
                fingerprint_value(&value)?
            }
        };
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.scenarios.len());
        for scenario in &self.scenarios {
            scenario.validate()?;
            if !seen.insert(scenario.id.as_str()) {
                return Err(CatalogError::DuplicateScenario(scenario.id.clone()));
            }
        }
        Ok(())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.id.as_str()).collect()
    }

    /// Scenarios that carry economics and therefore have a cost simulator
    pub fn with_simulator(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter().filter(|s| s.has_simulator())
    }

    /// SHA-256 of the source document's canonical JSON
    ///
    /// Computed from the JSON as loaded, so content the parser does not keep
    /// (such as the fields of an unrecognised fee model) still changes it.
    /// Object keys are sorted and numbers normalised, so `2` and `2.0` or a
    /// different key order give the same fingerprint.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn fingerprint_value(value: &Value) -> Result<String, CatalogError> {
    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            Value::Number(n) => match n.as_f64().and_then(Number::from_f64) {
                Some(normalized) => Value::Number(normalized),
                None => Value::Number(n),
            },
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value.clone()))
        .map_err(|e| CatalogError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.version(), "1.0");
        assert!(catalog.get("card-purchase").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_builtin_has_one_informational_scenario() {
        let catalog = Catalog::builtin().unwrap();
        let without: Vec<&str> = catalog
            .scenarios()
            .iter()
            .filter(|s| !s.has_simulator())
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(without, vec!["cheque-deposit"]);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_fingerprint_ignores_key_order_and_number_form() {
        let a = Catalog::from_json(r#"{"version": "1.0", "scenarios": []}"#).unwrap();
        let b = Catalog::from_json(r#"{"scenarios": [], "version": "1.0"}"#).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());

        let built = Catalog::new("1.0", Vec::new()).unwrap();
        assert_eq!(built.fingerprint(), a.fingerprint());
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = Catalog::builtin().unwrap();
        let b = Catalog::builtin().unwrap();
        let fp = a.fingerprint();
        assert_eq!(fp, b.fingerprint());
        assert_eq!(fp.len(), 64);
    }
}
