//! Loading registries from structured documents.
//!
//! The builtin table covers the ecosystems the crate ships with; a
//! document lets callers carry the same shape of data for systems the
//! builtin table doesn't know, or trim it down to the ecosystems they
//! care about. Documents are JSON or YAML with two top-level lists:
//!
//! ```yaml
//! variants:
//!   - { family: cap, ecosystem: svg, name: butt }
//!   - { family: cap, ecosystem: plot-style, name: butt, code: 0 }
//! equivalences:
//!   - family: cap
//!     concept: butt
//!     members:
//!       - { ecosystem: svg, name: butt }
//!       - { ecosystem: plot-style, name: butt }
//! ```
//!
//! Member confidence defaults to `high`; write `confidence: low` to carry
//! an uncertain pairing. Loaded registries are validated before being
//! returned, so a document violating the uniqueness or referential
//! invariants is rejected instead of producing a registry that answers
//! queries inconsistently.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EquivalenceClass, StyleRegistry};
use crate::{RegistryError, StyleVariant};

/// Serde model for a registry document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryDoc {
    /// The variant tables, flattened into one list.
    #[serde(default)]
    pub variants: Vec<StyleVariant>,
    /// The equivalence classes.
    #[serde(default)]
    pub equivalences: Vec<EquivalenceClass>,
}

impl RegistryDoc {
    /// Converts the document into a validated registry.
    pub fn into_registry(self) -> Result<StyleRegistry, RegistryError> {
        let mut registry = StyleRegistry::new();
        for variant in self.variants {
            registry = registry.variant(variant);
        }
        for class in self.equivalences {
            registry = registry.class(class);
        }
        registry.validate()?;
        Ok(registry)
    }
}

impl From<&StyleRegistry> for RegistryDoc {
    fn from(registry: &StyleRegistry) -> Self {
        RegistryDoc {
            variants: registry.iter().cloned().collect(),
            equivalences: registry.classes().to_vec(),
        }
    }
}

impl StyleRegistry {
    /// Builds a validated registry from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed documents (including
    /// unknown ecosystem or family keys, which serde rejects) and the
    /// relevant validation error for documents that parse but violate the
    /// registry invariants.
    pub fn from_json(json: &str) -> Result<StyleRegistry, RegistryError> {
        let doc: RegistryDoc = serde_json::from_str(json).map_err(|e| RegistryError::Parse {
            message: e.to_string(),
        })?;
        doc.into_registry()
    }

    /// Builds a validated registry from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<StyleRegistry, RegistryError> {
        let doc: RegistryDoc = serde_yaml::from_str(yaml).map_err(|e| RegistryError::Parse {
            message: e.to_string(),
        })?;
        doc.into_registry()
    }

    /// Reads a registry document from disk, dispatching on extension.
    ///
    /// `.json` parses as JSON; `.yaml` and `.yml` parse as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Read`] when the file cannot be read or the
    /// extension is not one of the recognized three, otherwise the same
    /// errors as [`StyleRegistry::from_json`] / [`StyleRegistry::from_yaml`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<StyleRegistry, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RegistryError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => StyleRegistry::from_json(&content),
            Some("yaml") | Some("yml") => StyleRegistry::from_yaml(&content),
            _ => Err(RegistryError::Read {
                path: path.to_path_buf(),
                message: "unrecognized extension, expected .json, .yaml, or .yml".to_string(),
            }),
        }
    }
}
