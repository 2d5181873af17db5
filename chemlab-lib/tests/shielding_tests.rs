use approx::assert_relative_eq;
use chemlab::shielding::{
    half_value_layer, material, materials, thickness_for_transmission, transmitted_fraction,
};
use chemlab::{ChemLabError, RadiationKind};

#[test]
fn test_zero_thickness_transmits_everything() {
    for m in materials() {
        for kind in [RadiationKind::Alpha, RadiationKind::Beta, RadiationKind::Gamma] {
            assert_relative_eq!(transmitted_fraction(&m.id, kind, 0.0).unwrap(), 1.0);
        }
    }
}

#[test]
fn test_half_value_layer_halves_intensity() {
    let hvl = half_value_layer("lead", RadiationKind::Gamma).unwrap();
    let transmitted = transmitted_fraction("lead", RadiationKind::Gamma, hvl).unwrap();
    assert_relative_eq!(transmitted, 0.5, epsilon = 1e-12);
    // Lead's gamma HVL at 662 keV is around half a centimeter.
    assert_relative_eq!(hvl, 0.56, epsilon = 0.01);
}

#[test]
fn test_transmission_decreases_with_thickness() {
    let thin = transmitted_fraction("concrete", RadiationKind::Gamma, 1.0).unwrap();
    let thick = transmitted_fraction("concrete", RadiationKind::Gamma, 10.0).unwrap();
    assert!(thick < thin);
    assert!(thin < 1.0);
}

#[test]
fn test_denser_material_shields_better() {
    let lead = transmitted_fraction("lead", RadiationKind::Gamma, 2.0).unwrap();
    let water = transmitted_fraction("water", RadiationKind::Gamma, 2.0).unwrap();
    assert!(lead < water);
}

#[test]
fn test_paper_stops_alpha_but_not_gamma() {
    // A single sheet is roughly 0.01 cm.
    let alpha = transmitted_fraction("paper", RadiationKind::Alpha, 0.01).unwrap();
    let gamma = transmitted_fraction("paper", RadiationKind::Gamma, 0.01).unwrap();
    assert!(alpha < 1e-4);
    assert!(gamma > 0.999);
}

#[test]
fn test_millimeters_of_metal_stop_beta() {
    let through_aluminum = transmitted_fraction("aluminum", RadiationKind::Beta, 0.3).unwrap();
    assert!(through_aluminum < 0.01);
    let through_paper = transmitted_fraction("paper", RadiationKind::Beta, 0.01).unwrap();
    assert!(through_paper > 0.9);
}

#[test]
fn test_thickness_for_transmission_inverts() {
    let x = thickness_for_transmission("lead", RadiationKind::Gamma, 0.5).unwrap();
    assert_relative_eq!(
        x,
        half_value_layer("lead", RadiationKind::Gamma).unwrap(),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        transmitted_fraction("lead", RadiationKind::Gamma, x).unwrap(),
        0.5,
        epsilon = 1e-12
    );
}

#[test]
fn test_degenerate_inputs_rejected() {
    assert!(matches!(
        transmitted_fraction("lead", RadiationKind::Gamma, -1.0),
        Err(ChemLabError::NegativeThickness(_))
    ));
    assert!(matches!(
        transmitted_fraction("cheese", RadiationKind::Gamma, 1.0),
        Err(ChemLabError::UnknownMaterial(_))
    ));
    assert!(matches!(
        thickness_for_transmission("lead", RadiationKind::Gamma, 0.0),
        Err(ChemLabError::DataError(_))
    ));
    assert!(matches!(
        thickness_for_transmission("lead", RadiationKind::Gamma, 1.5),
        Err(ChemLabError::DataError(_))
    ));
}

#[test]
fn test_material_table() {
    assert_eq!(materials().len(), 6);
    let lead = material("lead").unwrap();
    assert_relative_eq!(lead.density, 11.34);
    assert!(lead.mu_gamma > material("aluminum").unwrap().mu_gamma);
}
