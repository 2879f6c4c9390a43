//! Style families: the two independent attribute axes of a stroked line.

use serde::{Deserialize, Serialize};

/// Which end-of-line attribute a style variant belongs to.
///
/// Cap and join variants live in separate namespaces: "round" as a cap
/// style and "round" as a join style are distinct records, usually with
/// different numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleFamily {
    /// How the open end of a stroked line is rendered (butt, round, ...).
    Cap,
    /// How two connected segments' outlines merge at a vertex (miter, ...).
    Join,
}

impl StyleFamily {
    /// All families, in a fixed order. Useful for exhaustive iteration.
    pub const ALL: [StyleFamily; 2] = [StyleFamily::Cap, StyleFamily::Join];

    /// The lowercase label used in documents and display output.
    pub fn label(self) -> &'static str {
        match self {
            StyleFamily::Cap => "cap",
            StyleFamily::Join => "join",
        }
    }
}

impl std::fmt::Display for StyleFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for StyleFamily {
    type Err = crate::RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cap" => Ok(StyleFamily::Cap),
            "join" => Ok(StyleFamily::Join),
            _ => Err(crate::RegistryError::UnknownFamily {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_labels() {
        assert_eq!(StyleFamily::Cap.label(), "cap");
        assert_eq!(StyleFamily::Join.to_string(), "join");
    }

    #[test]
    fn test_family_from_str() {
        assert_eq!("cap".parse::<StyleFamily>().unwrap(), StyleFamily::Cap);
        assert_eq!("Join".parse::<StyleFamily>().unwrap(), StyleFamily::Join);
        assert!("caps".parse::<StyleFamily>().is_err());
    }

    #[test]
    fn test_family_serde_lowercase() {
        let json = serde_json::to_string(&StyleFamily::Cap).unwrap();
        assert_eq!(json, "\"cap\"");
        let back: StyleFamily = serde_json::from_str("\"join\"").unwrap();
        assert_eq!(back, StyleFamily::Join);
    }
}
