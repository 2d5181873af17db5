use approx::assert_relative_eq;
use chemlab::gas::{compute_gas_state, ideal_gas_volume_l};
use chemlab::{BeakerEntry, ChemLabError};

#[test]
fn test_two_moles_at_room_conditions() {
    // 2 mol at 25 °C and 1 atm: 2 × 0.0821 × 298.15 ≈ 48.96 L
    let volume = ideal_gas_volume_l(2.0, 25.0, 1.0).unwrap();
    assert_relative_eq!(volume, 48.96, epsilon = 0.01);
}

#[test]
fn test_volume_scales_with_pressure_and_temperature() {
    let base = ideal_gas_volume_l(1.0, 25.0, 1.0).unwrap();
    assert_relative_eq!(
        ideal_gas_volume_l(1.0, 25.0, 2.0).unwrap(),
        base / 2.0,
        epsilon = 1e-9
    );
    assert!(ideal_gas_volume_l(1.0, 100.0, 1.0).unwrap() > base);
}

#[test]
fn test_gas_state_sums_species() {
    let gases = vec![BeakerEntry::moles("CO2", 1.5), BeakerEntry::moles("H2", 0.5)];
    let state = compute_gas_state(&gases, 25.0, 1.0).unwrap();
    assert_relative_eq!(state.total_moles, 2.0);
    assert_relative_eq!(state.volume_l, 48.96, epsilon = 0.01);
    assert_eq!(state.gases.len(), 2);
    assert_relative_eq!(state.temperature_c, 25.0);
    assert_relative_eq!(state.pressure_atm, 1.0);
}

#[test]
fn test_non_positive_pressure_rejected() {
    assert!(matches!(
        ideal_gas_volume_l(1.0, 25.0, 0.0),
        Err(ChemLabError::NonPositivePressure(_))
    ));
    assert!(matches!(
        compute_gas_state(&[BeakerEntry::moles("H2", 1.0)], 25.0, -0.5),
        Err(ChemLabError::NonPositivePressure(_))
    ));
}
