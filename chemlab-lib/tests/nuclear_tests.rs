use approx::assert_relative_eq;
use chemlab::chemlab_data::DecayMode;
use chemlab::decay::{ChainCursor, chain, chains, decay_curve, fraction_remaining, preset};
use chemlab::nuclides::{daughter, isotopes_of, nuclide, nuclides};
use chemlab::binding::{BINDING_CURVE, binding_energy, isotope, isotopes};
use chemlab::ChemLabError;

// ── Half-life curve ──

#[test]
fn test_fraction_remaining_halves_per_half_life() {
    assert_relative_eq!(fraction_remaining(0.0, 5730.0).unwrap(), 1.0);
    assert_relative_eq!(fraction_remaining(5730.0, 5730.0).unwrap(), 0.5);
    assert_relative_eq!(fraction_remaining(11460.0, 5730.0).unwrap(), 0.25);
    // Times before zero read as the initial population.
    assert_relative_eq!(fraction_remaining(-10.0, 5730.0).unwrap(), 1.0);
}

#[test]
fn test_non_positive_half_life_rejected() {
    assert!(matches!(
        fraction_remaining(1.0, 0.0),
        Err(ChemLabError::NonPositiveHalfLife(_))
    ));
    assert!(matches!(
        fraction_remaining(1.0, -5.0),
        Err(ChemLabError::NonPositiveHalfLife(_))
    ));
}

#[test]
fn test_decay_curve_endpoints() {
    let curve = decay_curve(5730.0, 11460.0, 101).unwrap();
    assert_eq!(curve.len(), 101);
    assert_relative_eq!(curve[0].0, 0.0);
    assert_relative_eq!(curve[0].1, 1.0);
    assert_relative_eq!(curve[100].0, 11460.0);
    assert_relative_eq!(curve[100].1, 0.25, epsilon = 1e-12);
    assert!(decay_curve(5730.0, 100.0, 0).unwrap().is_empty());
}

#[test]
fn test_presets() {
    let c14 = preset("C-14").unwrap();
    assert_relative_eq!(c14.half_life, 5730.0);
    assert_eq!(c14.time_unit, "years");
    assert!(matches!(
        preset("Unobtainium-999"),
        Err(ChemLabError::UnknownIsotope(_))
    ));
}

// ── Decay chains ──

#[test]
fn test_uranium_series_shape() {
    let uranium = chain("U-238").unwrap();
    assert_eq!(uranium.steps.len(), 15);
    assert_eq!(uranium.start, "²³⁸U");
    assert_eq!(uranium.end, "²⁰⁶Pb");

    let first = &uranium.steps[0];
    assert_eq!(first.from, "²³⁸U");
    assert_eq!(first.to.as_deref(), Some("²³⁴Th"));
    assert_eq!(first.mode, DecayMode::Alpha);
}

#[test]
fn test_every_chain_terminates() {
    for c in chains() {
        let last = c.steps.last().unwrap();
        assert!(last.to.is_none(), "chain '{}' does not terminate", c.id);
        assert_eq!(last.from, c.end);
        // Each step hands off to the next.
        for pair in c.steps.windows(2) {
            assert_eq!(pair[0].to.as_deref(), Some(pair[1].from.as_str()));
        }
    }
}

#[test]
fn test_chain_cursor_walks_to_stable_end() {
    let uranium = chain("U-238").unwrap();
    let mut cursor = ChainCursor::new(uranium);
    assert_eq!(cursor.position(), 0);
    assert!(!cursor.is_complete());

    let mut hops = 0;
    while cursor.advance() {
        hops += 1;
    }
    assert_eq!(hops, 14);
    assert!(cursor.is_complete());
    assert_eq!(cursor.current().from, "²⁰⁶Pb");
    assert!(!cursor.advance());

    assert!(cursor.back());
    assert!(!cursor.is_complete());
}

#[test]
fn test_unknown_chain() {
    assert!(matches!(
        chain("Fm-257"),
        Err(ChemLabError::UnknownChain(_))
    ));
}

// ── Nuclide chart ──

#[test]
fn test_nuclide_lookup() {
    let tritium = nuclide(1, 2).unwrap();
    assert_eq!(tritium.symbol, "H");
    assert_eq!(tritium.mass_number, 3);
    assert_eq!(tritium.decay_mode, DecayMode::BetaMinus);
    assert_eq!(tritium.half_life_text.as_deref(), Some("12.32 y"));

    assert!(matches!(
        nuclide(92, 146),
        Err(ChemLabError::UnknownNuclide { .. })
    ));
}

#[test]
fn test_chart_covers_first_twenty_elements() {
    assert!(nuclides().len() > 60);
    for z in 1..=20 {
        assert!(!isotopes_of(z).is_empty(), "no isotopes charted for Z={z}");
    }
}

#[test]
fn test_daughter_rules() {
    // ³H --β−--> ³He
    assert_eq!(daughter(1, 2).unwrap(), Some((2, 1)));
    // ⁷Be --EC--> ⁷Li
    assert_eq!(daughter(4, 3).unwrap(), Some((3, 4)));
    // Stable nuclides have no daughter.
    assert_eq!(daughter(6, 6).unwrap(), None);
}

// ── Binding energy ──

#[test]
fn test_iron_56_binding_energy() {
    let be = binding_energy("Fe-56").unwrap();
    assert_relative_eq!(be.total_mev, 478.97, epsilon = 0.05);
    assert_relative_eq!(be.per_nucleon_mev, 8.553, epsilon = 0.005);
    assert!(be.mass_defect_u > 0.5);
}

#[test]
fn test_helium_4_binding_energy() {
    let be = binding_energy("He-4").unwrap();
    assert_relative_eq!(be.total_mev, 27.27, epsilon = 0.02);
    assert_relative_eq!(be.mass_defect_u, 0.02928, epsilon = 1e-4);
}

#[test]
fn test_curve_peaks_near_iron() {
    let iron = binding_energy("Fe-56").unwrap().per_nucleon_mev;
    let deuterium = binding_energy("H-2").unwrap().per_nucleon_mev;
    let uranium = binding_energy("U-238").unwrap().per_nucleon_mev;
    assert!(iron > deuterium);
    assert!(iron > uranium);
}

#[test]
fn test_all_isotopes_bound() {
    for record in isotopes() {
        let be = binding_energy(&record.id).unwrap();
        if record.mass_number > 1 {
            assert!(
                be.mass_defect_u > 0.0,
                "{} reports an unbound nucleus",
                record.id
            );
        }
    }
}

#[test]
fn test_isotope_lookup() {
    let fe = isotope("Fe-56").unwrap();
    assert_eq!(fe.z, 26);
    assert_eq!(fe.n, 30);
    assert_eq!(fe.mass_number, 56);
    assert!(matches!(
        isotope("Xx-1"),
        Err(ChemLabError::UnknownIsotope(_))
    ));
}

#[test]
fn test_reference_curve_cites_iron_peak() {
    let peak = BINDING_CURVE
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    // The tabulated peak is Ni-62, a hair above Fe-56.
    assert_eq!(peak.0, 62);
}
