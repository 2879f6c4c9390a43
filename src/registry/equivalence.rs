//! Cross-ecosystem equivalence annotations.
//!
//! Equivalence is layered over the variant tables rather than stored on the
//! variants themselves: the source material marks several pairings as
//! uncertain, so a variant can sit in more than one class (at low
//! confidence) or in none at all. A class groups the variants that render
//! the same stroke feature under one concept name, e.g. the "square" cap
//! concept covers the plot-style `END_STYLE_SQUARE`, matplotlib's
//! `projecting`, Qt's `SquareCap`, and SVG's `square`.

use serde::{Deserialize, Serialize};

use crate::{Confidence, Ecosystem, StyleFamily, StyleVariant};

/// One variant's membership in an equivalence class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// The ecosystem the member variant belongs to.
    pub ecosystem: Ecosystem,
    /// The member variant's canonical name.
    pub name: String,
    /// How certain the pairing with this class is.
    #[serde(default = "high")]
    pub confidence: Confidence,
}

fn high() -> Confidence {
    Confidence::High
}

/// A set of variants across ecosystems that name the same rendering
/// concept.
///
/// # Example
///
/// ```rust
/// use capjoin::{Ecosystem, EquivalenceClass, StyleFamily};
///
/// let class = EquivalenceClass::new(StyleFamily::Cap, "round")
///     .member(Ecosystem::PlotStyle, "round")
///     .member(Ecosystem::Svg, "round");
/// assert_eq!(class.members.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceClass {
    /// The family all members belong to; classes never span cap and join.
    pub family: StyleFamily,
    /// A short label for the shared concept, e.g. "butt" or "miter".
    pub concept: String,
    /// The member variants, in registration order.
    pub members: Vec<Membership>,
}

impl EquivalenceClass {
    /// Creates an empty class for the given family and concept.
    pub fn new(family: StyleFamily, concept: &str) -> Self {
        Self {
            family,
            concept: concept.to_string(),
            members: Vec::new(),
        }
    }

    /// Adds a member at high confidence, returning the class for chaining.
    pub fn member(self, ecosystem: Ecosystem, name: &str) -> Self {
        self.member_with(ecosystem, name, Confidence::High)
    }

    /// Adds a member whose pairing the source flagged as uncertain.
    pub fn member_low(self, ecosystem: Ecosystem, name: &str) -> Self {
        self.member_with(ecosystem, name, Confidence::Low)
    }

    /// Adds a member at an explicit confidence.
    pub fn member_with(mut self, ecosystem: Ecosystem, name: &str, confidence: Confidence) -> Self {
        self.members.push(Membership {
            ecosystem,
            name: name.to_string(),
            confidence,
        });
        self
    }

    /// Finds this class's membership record for the given variant, if any.
    pub fn membership_of(&self, ecosystem: Ecosystem, name: &str) -> Option<&Membership> {
        self.members
            .iter()
            .find(|m| m.ecosystem == ecosystem && m.name == name)
    }
}

/// One result of an equivalence lookup: a variant from another ecosystem
/// plus the effective confidence of the pairing.
///
/// The effective confidence is the weaker of the two memberships involved:
/// if either the queried variant or the returned variant sits in the class
/// uncertainly, the pairing as a whole is uncertain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equivalent<'a> {
    /// The equivalent variant.
    pub variant: &'a StyleVariant,
    /// Effective confidence of the pairing.
    pub confidence: Confidence,
    /// The concept name of the class that produced this pairing.
    pub concept: &'a str,
}
