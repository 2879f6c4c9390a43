//! The compiled-in reference data.
//!
//! Variant tables follow each ecosystem's own documentation:
//!
//! - Plot-style files: the `END_STYLE_*` and `JOIN_STYLE_*` constants.
//!   Note the join codes skip 4; `JOIN_STYLE_OBJECT` is 5.
//! - DXF: the `$ENDCAPS` and `$JOINSTYLE` header variables. The meaning of
//!   value 2, "angle", is poorly documented for both variables and every
//!   pairing involving it is recorded at low confidence.
//! - matplotlib: `capstyle` / `joinstyle` keyword strings, no codes.
//! - Qt: `Qt::PenCapStyle` / `Qt::PenJoinStyle` flag values.
//! - SVG: `stroke-linecap` / `stroke-linejoin` keywords, no codes.
//!
//! The equivalence classes carry forward the uncertainty markers from the
//! notes this table was compiled from: the plot-style "diamond" cap has no
//! confirmed counterpart anywhere, and the DXF join value "angle" could
//! plausibly mean either miter or bevel, so it sits in both classes at low
//! confidence. The plot-style "object" styles (use the object's own
//! setting) belong to no class.

use once_cell::sync::Lazy;

use super::{EquivalenceClass, StyleRegistry};
use crate::Ecosystem::{Dxf, Matplotlib, PlotStyle, Qt, Svg};
use crate::StyleFamily::{Cap, Join};
use crate::StyleVariant;

static BUILTIN: Lazy<StyleRegistry> = Lazy::new(build);

impl StyleRegistry {
    /// The builtin reference registry, built on first use and shared
    /// thereafter.
    pub fn builtin() -> &'static StyleRegistry {
        &BUILTIN
    }
}

fn build() -> StyleRegistry {
    StyleRegistry::new()
        // Plot-style file cap styles.
        .variant(StyleVariant::new(Cap, PlotStyle, "butt").code(0).describe("END_STYLE_BUTT"))
        .variant(StyleVariant::new(Cap, PlotStyle, "square").code(1).describe("END_STYLE_SQUARE"))
        .variant(StyleVariant::new(Cap, PlotStyle, "round").code(2).describe("END_STYLE_ROUND"))
        .variant(StyleVariant::new(Cap, PlotStyle, "diamond").code(3).describe("END_STYLE_DIAMOND"))
        .variant(StyleVariant::new(Cap, PlotStyle, "object").code(4).describe("END_STYLE_OBJECT"))
        // Plot-style file join styles.
        .variant(StyleVariant::new(Join, PlotStyle, "miter").code(0).describe("JOIN_STYLE_MITER"))
        .variant(StyleVariant::new(Join, PlotStyle, "bevel").code(1).describe("JOIN_STYLE_BEVEL"))
        .variant(StyleVariant::new(Join, PlotStyle, "round").code(2).describe("JOIN_STYLE_ROUND"))
        .variant(
            StyleVariant::new(Join, PlotStyle, "diamond").code(3).describe("JOIN_STYLE_DIAMOND"),
        )
        .variant(StyleVariant::new(Join, PlotStyle, "object").code(5).describe("JOIN_STYLE_OBJECT"))
        // DXF $ENDCAPS.
        .variant(StyleVariant::new(Cap, Dxf, "none").code(0).describe("$ENDCAPS 0"))
        .variant(StyleVariant::new(Cap, Dxf, "round").code(1).describe("$ENDCAPS 1"))
        .variant(StyleVariant::new(Cap, Dxf, "angle").code(2).describe("$ENDCAPS 2"))
        .variant(StyleVariant::new(Cap, Dxf, "square").code(3).describe("$ENDCAPS 3"))
        // DXF $JOINSTYLE.
        .variant(StyleVariant::new(Join, Dxf, "none").code(0).describe("$JOINSTYLE 0"))
        .variant(StyleVariant::new(Join, Dxf, "round").code(1).describe("$JOINSTYLE 1"))
        .variant(StyleVariant::new(Join, Dxf, "angle").code(2).describe("$JOINSTYLE 2"))
        .variant(StyleVariant::new(Join, Dxf, "flat").code(3).describe("$JOINSTYLE 3"))
        // matplotlib.
        .variant(StyleVariant::new(Cap, Matplotlib, "butt").describe("capstyle='butt'"))
        .variant(StyleVariant::new(Cap, Matplotlib, "round").describe("capstyle='round'"))
        .variant(
            StyleVariant::new(Cap, Matplotlib, "projecting").describe("capstyle='projecting'"),
        )
        .variant(StyleVariant::new(Join, Matplotlib, "miter").describe("joinstyle='miter'"))
        .variant(StyleVariant::new(Join, Matplotlib, "round").describe("joinstyle='round'"))
        .variant(StyleVariant::new(Join, Matplotlib, "bevel").describe("joinstyle='bevel'"))
        // Qt pen styles.
        .variant(StyleVariant::new(Cap, Qt, "flat").code(0x00).describe("Qt::FlatCap"))
        .variant(StyleVariant::new(Cap, Qt, "square").code(0x10).describe("Qt::SquareCap"))
        .variant(StyleVariant::new(Cap, Qt, "round").code(0x20).describe("Qt::RoundCap"))
        .variant(StyleVariant::new(Join, Qt, "miter").code(0x00).describe("Qt::MiterJoin"))
        .variant(StyleVariant::new(Join, Qt, "bevel").code(0x40).describe("Qt::BevelJoin"))
        .variant(StyleVariant::new(Join, Qt, "round").code(0x80).describe("Qt::RoundJoin"))
        .variant(StyleVariant::new(Join, Qt, "svg-miter").code(0x100).describe("Qt::SvgMiterJoin"))
        // SVG.
        .variant(StyleVariant::new(Cap, Svg, "butt").describe("stroke-linecap=\"butt\""))
        .variant(StyleVariant::new(Cap, Svg, "round").describe("stroke-linecap=\"round\""))
        .variant(StyleVariant::new(Cap, Svg, "square").describe("stroke-linecap=\"square\""))
        .variant(StyleVariant::new(Join, Svg, "miter").describe("stroke-linejoin=\"miter\""))
        .variant(StyleVariant::new(Join, Svg, "round").describe("stroke-linejoin=\"round\""))
        .variant(StyleVariant::new(Join, Svg, "bevel").describe("stroke-linejoin=\"bevel\""))
        // Cap equivalence classes.
        .class(
            EquivalenceClass::new(Cap, "butt")
                .member(PlotStyle, "butt")
                .member(Matplotlib, "butt")
                .member(Qt, "flat")
                .member(Svg, "butt")
                // DXF calls it "none"; rendering matches a butt cap but
                // the notes never confirmed it.
                .member_low(Dxf, "none"),
        )
        .class(
            EquivalenceClass::new(Cap, "round")
                .member(PlotStyle, "round")
                .member(Dxf, "round")
                .member(Matplotlib, "round")
                .member(Qt, "round")
                .member(Svg, "round"),
        )
        .class(
            EquivalenceClass::new(Cap, "square")
                .member(PlotStyle, "square")
                .member(Dxf, "square")
                .member(Matplotlib, "projecting")
                .member(Qt, "square")
                .member(Svg, "square"),
        )
        .class(
            // The "???" pairing: nothing outside plot-style files has a
            // confirmed diamond cap, and DXF's "angle" is only a guess.
            EquivalenceClass::new(Cap, "diamond")
                .member(PlotStyle, "diamond")
                .member_low(Dxf, "angle"),
        )
        // Join equivalence classes.
        .class(
            EquivalenceClass::new(Join, "miter")
                .member(PlotStyle, "miter")
                .member(Matplotlib, "miter")
                .member(Qt, "miter")
                .member(Qt, "svg-miter")
                .member(Svg, "miter")
                .member_low(Dxf, "angle"),
        )
        .class(
            EquivalenceClass::new(Join, "bevel")
                .member(PlotStyle, "bevel")
                .member(Matplotlib, "bevel")
                .member(Qt, "bevel")
                .member(Svg, "bevel")
                .member_low(Dxf, "angle")
                .member_low(Dxf, "flat"),
        )
        .class(
            EquivalenceClass::new(Join, "round")
                .member(PlotStyle, "round")
                .member(Dxf, "round")
                .member(Matplotlib, "round")
                .member(Qt, "round")
                .member(Svg, "round"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Confidence, StyleFamily};

    #[test]
    fn test_builtin_validates() {
        assert!(StyleRegistry::builtin().validate().is_ok());
    }

    #[test]
    fn test_builtin_covers_every_pair() {
        let registry = StyleRegistry::builtin();
        for family in StyleFamily::ALL {
            for ecosystem in crate::Ecosystem::ALL {
                assert!(
                    !registry.variants(family, ecosystem).is_empty(),
                    "no {} variants for {}",
                    family,
                    ecosystem
                );
            }
        }
    }

    #[test]
    fn test_builtin_plot_style_codes() {
        let registry = StyleRegistry::builtin();
        let round = registry.by_code(Cap, PlotStyle, 2).unwrap();
        assert_eq!(round.name, "round");
        assert_eq!(round.description.as_deref(), Some("END_STYLE_ROUND"));

        let bevel = registry.by_code(Join, PlotStyle, 1).unwrap();
        assert_eq!(bevel.name, "bevel");
    }

    #[test]
    fn test_builtin_join_object_skips_code_four() {
        let registry = StyleRegistry::builtin();
        assert!(registry.by_code(Join, PlotStyle, 4).is_none());
        assert_eq!(registry.by_code(Join, PlotStyle, 5).unwrap().name, "object");
    }

    #[test]
    fn test_builtin_diamond_equivalents_are_uncertain() {
        let registry = StyleRegistry::builtin();
        let eqs = registry.equivalents_of(Cap, PlotStyle, "diamond");
        assert!(!eqs.is_empty());
        assert!(eqs.iter().all(|eq| eq.confidence == Confidence::Low));
    }

    #[test]
    fn test_builtin_object_styles_have_no_equivalents() {
        let registry = StyleRegistry::builtin();
        assert!(registry.equivalents_of(Cap, PlotStyle, "object").is_empty());
        assert!(registry.equivalents_of(Join, PlotStyle, "object").is_empty());
        assert!(registry
            .equivalents_of(Join, PlotStyle, "diamond")
            .is_empty());
    }

    #[test]
    fn test_builtin_dxf_angle_join_is_ambiguous() {
        // "angle" sits in both the miter and the bevel class, each time at
        // low confidence.
        let registry = StyleRegistry::builtin();
        let eqs = registry.equivalents_of(Join, Dxf, "angle");
        let names: Vec<&str> = eqs.iter().map(|eq| eq.variant.name.as_str()).collect();
        assert!(names.contains(&"miter"));
        assert!(names.contains(&"bevel"));
        assert!(eqs.iter().all(|eq| eq.confidence == Confidence::Low));
    }
}
