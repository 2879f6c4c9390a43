//! Style variant records and confidence markers.

use serde::{Deserialize, Serialize};

use crate::{Ecosystem, StyleFamily};

/// How certain a cross-ecosystem equivalence is.
///
/// The source material this data was compiled from leaves several mappings
/// explicitly uncertain (annotated "???"), e.g. which cap style, if any,
/// matches the plot-style file's `END_STYLE_DIAMOND`. Those survive here as
/// [`Confidence::Low`] instead of being guessed away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// The mapping is unambiguous across both ecosystems.
    High,
    /// The mapping was flagged uncertain at the source; treat as a hint.
    Low,
}

impl Confidence {
    /// Combines two confidences: the result is only as strong as the
    /// weaker side.
    pub fn combine(self, other: Confidence) -> Confidence {
        match (self, other) {
            (Confidence::High, Confidence::High) => Confidence::High,
            _ => Confidence::Low,
        }
    }
}

/// One named cap or join style as a single ecosystem defines it.
///
/// A variant belongs to exactly one (family, ecosystem) pair. Within that
/// pair its name is unique, and its numeric code, where the ecosystem
/// assigns one, is unique too. String-keyed ecosystems (matplotlib, SVG)
/// have no codes.
///
/// # Example
///
/// ```rust
/// use capjoin::{Ecosystem, StyleFamily, StyleVariant};
///
/// let v = StyleVariant::new(StyleFamily::Cap, Ecosystem::PlotStyle, "round")
///     .code(2)
///     .describe("END_STYLE_ROUND");
/// assert_eq!(v.code, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleVariant {
    /// The style family this variant belongs to.
    pub family: StyleFamily,
    /// The ecosystem that defines it.
    pub ecosystem: Ecosystem,
    /// Canonical lowercase name within the (family, ecosystem) pair.
    pub name: String,
    /// Numeric code, for ecosystems that enumerate styles by number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u32>,
    /// The ecosystem's own spelling of the variant, e.g. `Qt::RoundCap`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StyleVariant {
    /// Creates a variant with no code and no description.
    pub fn new(family: StyleFamily, ecosystem: Ecosystem, name: &str) -> Self {
        Self {
            family,
            ecosystem,
            name: name.to_string(),
            code: None,
            description: None,
        }
    }

    /// Sets the numeric code, returning the variant for chaining.
    pub fn code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets the description, returning the variant for chaining.
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

impl std::fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.family, self.ecosystem, self.name)?;
        if let Some(code) = self.code {
            write!(f, " ({})", code)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_combine() {
        assert_eq!(
            Confidence::High.combine(Confidence::High),
            Confidence::High
        );
        assert_eq!(Confidence::High.combine(Confidence::Low), Confidence::Low);
        assert_eq!(Confidence::Low.combine(Confidence::High), Confidence::Low);
        assert_eq!(Confidence::Low.combine(Confidence::Low), Confidence::Low);
    }

    #[test]
    fn test_variant_builder() {
        let v = StyleVariant::new(StyleFamily::Join, Ecosystem::PlotStyle, "bevel")
            .code(1)
            .describe("JOIN_STYLE_BEVEL");
        assert_eq!(v.name, "bevel");
        assert_eq!(v.code, Some(1));
        assert_eq!(v.description.as_deref(), Some("JOIN_STYLE_BEVEL"));
    }

    #[test]
    fn test_variant_display() {
        let v = StyleVariant::new(StyleFamily::Cap, Ecosystem::Svg, "butt");
        assert_eq!(v.to_string(), "cap/svg/butt");

        let coded = StyleVariant::new(StyleFamily::Cap, Ecosystem::Dxf, "round").code(1);
        assert_eq!(coded.to_string(), "cap/dxf/round (1)");
    }

    #[test]
    fn test_variant_serde_omits_empty_fields() {
        let v = StyleVariant::new(StyleFamily::Cap, Ecosystem::Svg, "butt");
        let json = serde_json::to_string(&v).unwrap();
        assert!(!json.contains("code"));
        assert!(!json.contains("description"));

        let back: StyleVariant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
