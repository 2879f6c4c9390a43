//! The style registry: immutable reference data plus a query layer.
//!
//! This module provides:
//!
//! - [`StyleRegistry`]: variant tables per (family, ecosystem) pair plus
//!   equivalence classes, built fluently and read-only afterwards
//! - [`EquivalenceClass`] / [`Membership`]: cross-ecosystem annotations
//! - [`Equivalent`]: the result type of equivalence lookups
//! - [`StyleRegistry::builtin`]: the compiled-in reference data
//!
//! Registries are populated once, validated, and never mutated; a shared
//! `&StyleRegistry` is safe across any number of concurrent readers.

mod builtin;
mod equivalence;
mod load;

pub use equivalence::{EquivalenceClass, Equivalent, Membership};
pub use load::RegistryDoc;

use std::collections::HashMap;

use crate::{Confidence, Ecosystem, RegistryError, StyleFamily, StyleVariant};

const NO_VARIANTS: &[StyleVariant] = &[];

/// Registry of known cap/join style variants and their cross-ecosystem
/// equivalences.
///
/// # Example
///
/// ```rust
/// use capjoin::{Ecosystem, StyleFamily, StyleRegistry};
///
/// let registry = StyleRegistry::builtin();
/// let round = registry
///     .by_code(StyleFamily::Cap, Ecosystem::PlotStyle, 2)
///     .unwrap();
/// assert_eq!(round.name, "round");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    /// Variant tables, ordered as registered within each pair.
    variants: HashMap<(StyleFamily, Ecosystem), Vec<StyleVariant>>,
    /// Equivalence classes, layered over the variant tables.
    classes: Vec<EquivalenceClass>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variant, returning the registry for chaining.
    ///
    /// Uniqueness of names and codes within the (family, ecosystem) pair is
    /// not checked here; call [`StyleRegistry::validate`] after
    /// construction.
    pub fn variant(mut self, variant: StyleVariant) -> Self {
        self.variants
            .entry((variant.family, variant.ecosystem))
            .or_default()
            .push(variant);
        self
    }

    /// Adds an equivalence class, returning the registry for chaining.
    pub fn class(mut self, class: EquivalenceClass) -> Self {
        self.classes.push(class);
        self
    }

    /// The variants one ecosystem defines for one family, in registration
    /// order.
    ///
    /// Returns an empty slice when the registry holds no data for the
    /// pair, which for the builtin registry never happens.
    pub fn variants(&self, family: StyleFamily, ecosystem: Ecosystem) -> &[StyleVariant] {
        self.variants
            .get(&(family, ecosystem))
            .map(Vec::as_slice)
            .unwrap_or(NO_VARIANTS)
    }

    /// String-keyed variant listing, accepting ecosystem aliases.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownEcosystem`] when the key names no
    /// known ecosystem.
    pub fn variants_named(
        &self,
        family: StyleFamily,
        ecosystem: &str,
    ) -> Result<&[StyleVariant], RegistryError> {
        let ecosystem: Ecosystem = ecosystem.parse()?;
        Ok(self.variants(family, ecosystem))
    }

    /// Resolves a numeric code to a variant.
    ///
    /// Returns `None` when the ecosystem assigns no such code; an absent
    /// code is an expected outcome, never a fault.
    pub fn by_code(
        &self,
        family: StyleFamily,
        ecosystem: Ecosystem,
        code: u32,
    ) -> Option<&StyleVariant> {
        self.variants(family, ecosystem)
            .iter()
            .find(|v| v.code == Some(code))
    }

    /// Resolves a canonical name to a variant.
    pub fn by_name(
        &self,
        family: StyleFamily,
        ecosystem: Ecosystem,
        name: &str,
    ) -> Option<&StyleVariant> {
        self.variants(family, ecosystem)
            .iter()
            .find(|v| v.name == name)
    }

    /// Best-effort equivalents of a variant across all other ecosystems.
    ///
    /// Walks every equivalence class containing the named variant and
    /// collects the members from other ecosystems, resolved against the
    /// variant tables.
    /// Each result carries the effective [`Confidence`] of the pairing:
    /// `Low` when either side's membership was flagged uncertain at the
    /// source. A variant reachable through more than one class is returned
    /// once, at the strongest pairing found.
    ///
    /// Returns an empty vector for unknown names and for variants that
    /// belong to no class (e.g. the plot-style "object" styles).
    pub fn equivalents_of(
        &self,
        family: StyleFamily,
        ecosystem: Ecosystem,
        name: &str,
    ) -> Vec<Equivalent<'_>> {
        let mut results: Vec<Equivalent<'_>> = Vec::new();

        for class in self.classes.iter().filter(|c| c.family == family) {
            let Some(queried) = class.membership_of(ecosystem, name) else {
                continue;
            };

            for member in &class.members {
                // Only other ecosystems; a class can hold several variants
                // of one ecosystem (Qt's miter and svg-miter).
                if member.ecosystem == ecosystem {
                    continue;
                }
                let Some(variant) = self.by_name(family, member.ecosystem, &member.name) else {
                    continue;
                };
                let confidence = queried.confidence.combine(member.confidence);

                match results.iter_mut().find(|eq| {
                    eq.variant.ecosystem == variant.ecosystem && eq.variant.name == variant.name
                }) {
                    Some(existing) => {
                        // Keep the strongest pairing seen across classes.
                        if existing.confidence == Confidence::Low
                            && confidence == Confidence::High
                        {
                            existing.confidence = confidence;
                            existing.concept = &class.concept;
                        }
                    }
                    None => results.push(Equivalent {
                        variant,
                        confidence,
                        concept: &class.concept,
                    }),
                }
            }
        }

        results
    }

    /// The equivalence classes, in registration order.
    pub fn classes(&self) -> &[EquivalenceClass] {
        &self.classes
    }

    /// Returns true if the registry holds no variants at all.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Total number of variants across all (family, ecosystem) pairs.
    pub fn len(&self) -> usize {
        self.variants.values().map(Vec::len).sum()
    }

    /// Iterates over every variant in the registry, in unspecified pair
    /// order but registration order within each pair.
    pub fn iter(&self) -> impl Iterator<Item = &StyleVariant> {
        self.variants.values().flatten()
    }

    /// Validates the registry's structural invariants.
    ///
    /// Checks that within each (family, ecosystem) pair names are unique
    /// and codes, where present, are unique, and that every equivalence
    /// class member resolves to a registered variant of the class's family.
    ///
    /// The builtin registry is validated by its test suite; call this
    /// explicitly after building a registry from a document or by hand.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for ((family, ecosystem), variants) in &self.variants {
            for (i, variant) in variants.iter().enumerate() {
                for earlier in &variants[..i] {
                    if earlier.name == variant.name {
                        return Err(RegistryError::DuplicateName {
                            family: *family,
                            ecosystem: *ecosystem,
                            name: variant.name.clone(),
                        });
                    }
                    if earlier.code.is_some() && earlier.code == variant.code {
                        return Err(RegistryError::DuplicateCode {
                            family: *family,
                            ecosystem: *ecosystem,
                            code: variant.code.unwrap_or_default(),
                        });
                    }
                }
            }
        }

        for class in &self.classes {
            for member in &class.members {
                if self
                    .by_name(class.family, member.ecosystem, &member.name)
                    .is_none()
                {
                    return Err(RegistryError::UnresolvedEquivalence {
                        concept: class.concept.clone(),
                        family: class.family,
                        ecosystem: member.ecosystem,
                        name: member.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
