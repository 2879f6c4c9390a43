//! Integration tests for the builtin reference registry.
//!
//! These exercise the shipped tables end to end: coverage of every
//! (family, ecosystem) pair, the documented plot-style codes, and the
//! preserved uncertainty of the ambiguous pairings.

use std::collections::HashSet;

use capjoin::{Confidence, Ecosystem, StyleFamily, StyleRegistry};

#[test]
fn every_pair_has_unique_names_and_codes() {
    let registry = StyleRegistry::builtin();

    for family in StyleFamily::ALL {
        for ecosystem in Ecosystem::ALL {
            let variants = registry.variants(family, ecosystem);
            assert!(
                !variants.is_empty(),
                "expected {} variants for {}",
                family,
                ecosystem
            );

            let names: HashSet<&str> = variants.iter().map(|v| v.name.as_str()).collect();
            assert_eq!(names.len(), variants.len());

            let codes: Vec<u32> = variants.iter().filter_map(|v| v.code).collect();
            let unique_codes: HashSet<u32> = codes.iter().copied().collect();
            assert_eq!(unique_codes.len(), codes.len());
        }
    }
}

#[test]
fn plot_style_codes_match_the_file_format() {
    let registry = StyleRegistry::builtin();

    let round_cap = registry
        .by_code(StyleFamily::Cap, Ecosystem::PlotStyle, 2)
        .expect("END_STYLE_ROUND");
    assert_eq!(round_cap.name, "round");

    let bevel_join = registry
        .by_code(StyleFamily::Join, Ecosystem::PlotStyle, 1)
        .expect("JOIN_STYLE_BEVEL");
    assert_eq!(bevel_join.name, "bevel");
}

#[test]
fn absent_codes_are_not_found() {
    let registry = StyleRegistry::builtin();

    assert!(registry
        .by_code(StyleFamily::Cap, Ecosystem::PlotStyle, 17)
        .is_none());
    // String-keyed ecosystems define no codes at all.
    assert!(registry
        .by_code(StyleFamily::Cap, Ecosystem::Matplotlib, 0)
        .is_none());
    assert!(registry
        .by_code(StyleFamily::Join, Ecosystem::Svg, 0)
        .is_none());
}

#[test]
fn every_coded_variant_round_trips_through_by_code() {
    let registry = StyleRegistry::builtin();

    for variant in registry.iter() {
        if let Some(code) = variant.code {
            let found = registry
                .by_code(variant.family, variant.ecosystem, code)
                .expect("coded variant must be findable by its own code");
            assert_eq!(found, variant);
        }
    }
}

#[test]
fn svg_butt_cap_maps_cleanly_to_plot_style() {
    let registry = StyleRegistry::builtin();
    let eqs = registry.equivalents_of(StyleFamily::Cap, Ecosystem::Svg, "butt");

    let plot = eqs
        .iter()
        .find(|eq| eq.variant.ecosystem == Ecosystem::PlotStyle)
        .expect("plot-style equivalent of the butt cap");
    assert_eq!(plot.variant.code, Some(0));
    assert_eq!(plot.confidence, Confidence::High);
}

#[test]
fn diamond_cap_equivalents_stay_uncertain() {
    let registry = StyleRegistry::builtin();
    let eqs = registry.equivalents_of(StyleFamily::Cap, Ecosystem::PlotStyle, "diamond");

    assert!(!eqs.is_empty());
    assert!(eqs.iter().all(|eq| eq.confidence == Confidence::Low));
}

#[test]
fn qt_alias_reaches_the_same_table() {
    let registry = StyleRegistry::builtin();

    let via_qt = registry.variants_named(StyleFamily::Join, "qt").unwrap();
    let via_pyqt = registry.variants_named(StyleFamily::Join, "pyqt").unwrap();
    assert_eq!(via_qt, via_pyqt);
    assert!(via_qt.iter().any(|v| v.name == "svg-miter"));
}

#[test]
fn unknown_ecosystem_key_fails_string_lookup() {
    let registry = StyleRegistry::builtin();
    let err = registry
        .variants_named(StyleFamily::Cap, "postscript")
        .unwrap_err();
    assert!(err.to_string().contains("postscript"));
}

#[test]
fn equivalents_come_from_other_ecosystems_only() {
    let registry = StyleRegistry::builtin();

    for variant in registry.iter() {
        let eqs = registry.equivalents_of(variant.family, variant.ecosystem, &variant.name);
        for eq in &eqs {
            assert_eq!(eq.variant.family, variant.family);
            assert_ne!(
                eq.variant.ecosystem, variant.ecosystem,
                "{} returned an equivalent from its own ecosystem",
                variant
            );
        }
    }
}
