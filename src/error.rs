//! Registry errors.

use std::path::PathBuf;

use crate::{Ecosystem, StyleFamily};

/// Error type for registry construction, loading, and string-keyed lookup.
///
/// Code-based lookups never error; a missing code is an expected outcome
/// and surfaces as `None` from [`StyleRegistry::by_code`].
///
/// [`StyleRegistry::by_code`]: crate::StyleRegistry::by_code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A string key did not name any known ecosystem or alias.
    UnknownEcosystem { name: String },

    /// A string key did not name a style family ("cap" or "join").
    UnknownFamily { name: String },

    /// Two variants in one (family, ecosystem) pair share a name.
    DuplicateName {
        family: StyleFamily,
        ecosystem: Ecosystem,
        name: String,
    },

    /// Two variants in one (family, ecosystem) pair share a numeric code.
    DuplicateCode {
        family: StyleFamily,
        ecosystem: Ecosystem,
        code: u32,
    },

    /// An equivalence class member references a variant that doesn't exist.
    UnresolvedEquivalence {
        concept: String,
        family: StyleFamily,
        ecosystem: Ecosystem,
        name: String,
    },

    /// A registry document failed to deserialize.
    Parse { message: String },

    /// A registry document file could not be read or has an unrecognized
    /// extension.
    Read { path: PathBuf, message: String },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::UnknownEcosystem { name } => {
                write!(f, "unknown ecosystem: \"{}\"", name)
            }
            RegistryError::UnknownFamily { name } => {
                write!(f, "unknown style family: \"{}\"", name)
            }
            RegistryError::DuplicateName {
                family,
                ecosystem,
                name,
            } => {
                write!(
                    f,
                    "duplicate {} style name \"{}\" for ecosystem {}",
                    family, name, ecosystem
                )
            }
            RegistryError::DuplicateCode {
                family,
                ecosystem,
                code,
            } => {
                write!(
                    f,
                    "duplicate {} style code {} for ecosystem {}",
                    family, code, ecosystem
                )
            }
            RegistryError::UnresolvedEquivalence {
                concept,
                family,
                ecosystem,
                name,
            } => {
                write!(
                    f,
                    "equivalence class \"{}\" references unknown {} style {}/{}",
                    concept, family, ecosystem, name
                )
            }
            RegistryError::Parse { message } => {
                write!(f, "failed to parse registry document: {}", message)
            }
            RegistryError::Read { path, message } => {
                write!(
                    f,
                    "failed to read registry document \"{}\": {}",
                    path.display(),
                    message
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}
