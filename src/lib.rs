//! Cross-ecosystem registry of line cap and join styles.
//!
//! CAD plotting, drawing file formats, plotting libraries, GUI toolkits,
//! and vector markup all describe the same two stroke attributes (how a
//! line ends, and how two segments join) with different names and
//! different numeric codes. This crate holds those vocabularies as
//! immutable reference data and answers three questions:
//!
//! - which variants does ecosystem X define for caps or joins?
//! - which variant does numeric code N mean in ecosystem X?
//! - what is the nearest equivalent of this variant elsewhere?
//!
//! Equivalence is best effort on purpose. The notes this table was
//! compiled from flag several pairings as uncertain, and those come back
//! as [`Confidence::Low`] rather than being presented as fact.
//!
//! # Example
//!
//! ```rust
//! use capjoin::{Confidence, Ecosystem, StyleFamily, StyleRegistry};
//!
//! let registry = StyleRegistry::builtin();
//!
//! // Code 2 in a CTB plot-style file is the round end cap.
//! let cap = registry
//!     .by_code(StyleFamily::Cap, Ecosystem::PlotStyle, 2)
//!     .unwrap();
//! assert_eq!(cap.name, "round");
//!
//! // SVG's stroke-linecap="butt" maps cleanly to plot-style code 0 ...
//! let eqs = registry.equivalents_of(StyleFamily::Cap, Ecosystem::Svg, "butt");
//! assert!(eqs
//!     .iter()
//!     .any(|eq| eq.variant.ecosystem == Ecosystem::PlotStyle
//!         && eq.variant.code == Some(0)
//!         && eq.confidence == Confidence::High));
//!
//! // ... while the plot-style diamond cap only has uncertain guesses.
//! let diamonds = registry.equivalents_of(StyleFamily::Cap, Ecosystem::PlotStyle, "diamond");
//! assert!(diamonds.iter().all(|eq| eq.confidence == Confidence::Low));
//! ```
//!
//! # Custom registries
//!
//! The builtin table can be replaced or extended by building a
//! [`StyleRegistry`] fluently, or by loading a JSON/YAML document via
//! [`StyleRegistry::from_json`], [`StyleRegistry::from_yaml`], or
//! [`StyleRegistry::from_path`]. Loaded registries are validated: names
//! and codes must be unique per (family, ecosystem) pair, and every
//! equivalence member must name a registered variant.

mod ecosystem;
mod error;
mod family;
mod registry;
mod variant;

pub use ecosystem::Ecosystem;
pub use error::RegistryError;
pub use family::StyleFamily;
pub use registry::{EquivalenceClass, Equivalent, Membership, RegistryDoc, StyleRegistry};
pub use variant::{Confidence, StyleVariant};
