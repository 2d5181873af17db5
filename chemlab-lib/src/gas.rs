use serde::{Deserialize, Serialize};

use crate::constants::{CELSIUS_OFFSET_K, GAS_CONSTANT_L_ATM};
use crate::error::{ChemLabError, Result};
use crate::units::BeakerEntry;

/// State of the gas collected from one resolution pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasProperties {
    pub total_moles: f64,
    pub volume_l: f64,
    pub temperature_c: f64,
    pub pressure_atm: f64,
    pub gases: Vec<BeakerEntry>,
}

/// Ideal gas law: V = nRT / P, in liters.
///
/// Pressures at or below zero are rejected rather than clamped; a
/// degenerate input should surface instead of producing an infinite volume.
pub fn ideal_gas_volume_l(moles: f64, temperature_c: f64, pressure_atm: f64) -> Result<f64> {
    if pressure_atm <= 0.0 {
        return Err(ChemLabError::NonPositivePressure(pressure_atm));
    }
    Ok(moles * GAS_CONSTANT_L_ATM * (temperature_c + CELSIUS_OFFSET_K) / pressure_atm)
}

/// Derives the collected-gas state for the gaseous products of a reaction.
///
/// Quantities are taken as moles; the resolver only ever emits mole
/// entries. Callers skip this entirely for condensed-phase reactions.
pub fn compute_gas_state(
    gases_produced: &[BeakerEntry],
    temperature_c: f64,
    pressure_atm: f64,
) -> Result<GasProperties> {
    let total_moles: f64 = gases_produced.iter().map(|g| g.quantity).sum();
    let volume_l = ideal_gas_volume_l(total_moles, temperature_c, pressure_atm)?;
    Ok(GasProperties {
        total_moles,
        volume_l,
        temperature_c,
        pressure_atm,
        gases: gases_produced.to_vec(),
    })
}
