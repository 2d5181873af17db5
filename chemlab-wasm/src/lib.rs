//! WASM bindings for the chemlab simulation core.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p chemlab-wasm
//! ```
//!
//! Structured values cross the JS boundary as JSON strings; scalar
//! calculators return plain numbers.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use chemlab::gas::ideal_gas_volume_l;
use chemlab::units::to_moles as entry_to_moles;
use chemlab::visual::derive_visual_state;
use chemlab::{BeakerEntry, Catalog, LabBench, RadiationKind, RunOutcome, Unit};

fn to_js(e: chemlab::ChemLabError) -> JsError {
    JsError::new(&e.to_string())
}

fn json<T: Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

fn parse_unit(unit: &str) -> Result<Unit, JsError> {
    match unit {
        "mol" => Ok(Unit::Mole),
        "g" => Ok(Unit::Gram),
        _ => Err(JsError::new(&format!("unknown unit: {unit}"))),
    }
}

fn parse_radiation(kind: &str) -> Result<RadiationKind, JsError> {
    match kind.to_lowercase().as_str() {
        "alpha" => Ok(RadiationKind::Alpha),
        "beta" => Ok(RadiationKind::Beta),
        "gamma" => Ok(RadiationKind::Gamma),
        _ => Err(JsError::new(&format!("unknown radiation kind: {kind}"))),
    }
}

fn parse_beaker(beaker_json: &str) -> Result<Vec<BeakerEntry>, JsError> {
    serde_json::from_str(beaker_json).map_err(|e| JsError::new(&e.to_string()))
}

// ── Catalog lookups ──

/// The entire embedded reference data set as one JSON document.
#[wasm_bindgen]
pub fn database_json() -> Result<String, JsError> {
    json(&chemlab::database())
}

#[wasm_bindgen]
pub fn chemicals_json() -> Result<String, JsError> {
    json(&Catalog::builtin().chemicals())
}

#[wasm_bindgen]
pub fn reactions_json() -> Result<String, JsError> {
    json(&Catalog::builtin().reactions())
}

#[wasm_bindgen]
pub fn chemical_json(id: &str) -> Result<String, JsError> {
    json(&Catalog::builtin().chemical(id).map_err(to_js)?)
}

#[wasm_bindgen]
pub fn molar_mass(id: &str) -> Result<f64, JsError> {
    Catalog::builtin().molar_mass(id).map_err(to_js)
}

/// Converts a quantity of a catalog chemical to moles. `unit` is "mol" or "g".
#[wasm_bindgen]
pub fn to_moles(id: &str, quantity: f64, unit: &str) -> Result<f64, JsError> {
    let entry = BeakerEntry {
        chemical_id: id.to_string(),
        quantity,
        unit: parse_unit(unit)?,
    };
    entry_to_moles(&entry, Catalog::builtin())
        .ok_or_else(|| JsError::new(&format!("unknown chemical: {id}")))
}

// ── Simulation ──

#[derive(Serialize)]
struct SimulationOutcome<'a> {
    outcome: &'static str,
    result: Option<&'a chemlab::SimulationResult>,
    gas: Option<&'a chemlab::GasProperties>,
    beaker: &'a [BeakerEntry],
}

/// Runs one resolution pass over the supplied beaker.
///
/// `beaker_json` is an array of `{chemical_id, quantity, unit}` entries.
/// Returns `{outcome, result, gas, beaker}` where `outcome` is one of
/// "resolved", "no-species-match", or "nothing-reacted" and `beaker` is the
/// contents after the pass.
#[wasm_bindgen]
pub fn simulate(
    beaker_json: &str,
    temperature_c: f64,
    pressure_atm: f64,
) -> Result<String, JsError> {
    let mut bench = LabBench::builtin();
    for entry in parse_beaker(beaker_json)? {
        bench.add_entry(entry);
    }
    bench.set_temperature_c(temperature_c);
    bench.set_pressure_atm(pressure_atm);

    let outcome = match bench.run().map_err(to_js)? {
        RunOutcome::Resolved => "resolved",
        RunOutcome::NoSpeciesMatch => "no-species-match",
        RunOutcome::NothingReacted => "nothing-reacted",
    };
    json(&SimulationOutcome {
        outcome,
        result: bench.result(),
        gas: bench.gas_properties(),
        beaker: bench.beaker(),
    })
}

/// Beaker visuals for the supplied contents, without running a reaction.
#[wasm_bindgen]
pub fn visual_state_json(beaker_json: &str, temperature_c: f64) -> Result<String, JsError> {
    let entries = parse_beaker(beaker_json)?;
    json(&derive_visual_state(
        &entries,
        None,
        temperature_c,
        Catalog::builtin(),
    ))
}

/// Ideal gas volume in liters for `moles` of gas.
#[wasm_bindgen]
pub fn gas_volume_l(moles: f64, temperature_c: f64, pressure_atm: f64) -> Result<f64, JsError> {
    ideal_gas_volume_l(moles, temperature_c, pressure_atm).map_err(to_js)
}

// ── Compound explorer ──

/// Formula weight in g/mol, e.g. `formula_weight("CuSO4")`.
#[wasm_bindgen]
pub fn formula_weight(formula: &str) -> Result<f64, JsError> {
    chemlab::formula::formula_weight(formula).map_err(to_js)
}

#[wasm_bindgen]
pub fn validate_formula(formula: &str) -> bool {
    chemlab::formula::validate_formula(formula)
}

// ── Half-life and decay chains ──

#[wasm_bindgen]
pub fn fraction_remaining(elapsed: f64, half_life: f64) -> Result<f64, JsError> {
    chemlab::decay::fraction_remaining(elapsed, half_life).map_err(to_js)
}

#[wasm_bindgen]
pub fn decay_curve_json(half_life: f64, max_time: f64, samples: u32) -> Result<String, JsError> {
    let curve = chemlab::decay::decay_curve(half_life, max_time, samples as usize).map_err(to_js)?;
    json(&curve)
}

#[wasm_bindgen]
pub fn decay_chains_json() -> Result<String, JsError> {
    json(&chemlab::decay::chains())
}

#[wasm_bindgen]
pub fn decay_chain_json(id: &str) -> Result<String, JsError> {
    json(&chemlab::decay::chain(id).map_err(to_js)?)
}

// ── Nuclide chart ──

#[wasm_bindgen]
pub fn nuclides_json() -> Result<String, JsError> {
    json(&chemlab::nuclides::nuclides())
}

#[wasm_bindgen]
pub fn nuclide_json(z: u16, n: u16) -> Result<String, JsError> {
    json(&chemlab::nuclides::nuclide(z, n).map_err(to_js)?)
}

/// Daughter coordinates `[Z, N]`, or `None` for stable nuclides.
#[wasm_bindgen]
pub fn nuclide_daughter(z: u16, n: u16) -> Result<Option<Vec<u16>>, JsError> {
    let daughter = chemlab::nuclides::daughter(z, n).map_err(to_js)?;
    Ok(daughter.map(|(dz, dn)| vec![dz, dn]))
}

// ── Binding energy ──

#[wasm_bindgen]
pub fn isotopes_json() -> Result<String, JsError> {
    json(&chemlab::binding::isotopes())
}

#[wasm_bindgen]
pub fn binding_energy_json(id: &str) -> Result<String, JsError> {
    json(&chemlab::binding::binding_energy(id).map_err(to_js)?)
}

#[wasm_bindgen]
pub fn binding_curve_json() -> Result<String, JsError> {
    json(&chemlab::binding::BINDING_CURVE)
}

// ── Shielding ──

#[wasm_bindgen]
pub fn shield_materials_json() -> Result<String, JsError> {
    json(&chemlab::shielding::materials())
}

/// Transmitted fraction through `thickness_cm` of a material.
/// `kind` is one of: "alpha", "beta", "gamma".
#[wasm_bindgen]
pub fn shield_transmission(
    material_id: &str,
    kind: &str,
    thickness_cm: f64,
) -> Result<f64, JsError> {
    let kind = parse_radiation(kind)?;
    chemlab::shielding::transmitted_fraction(material_id, kind, thickness_cm).map_err(to_js)
}

#[wasm_bindgen]
pub fn shield_half_value_layer(material_id: &str, kind: &str) -> Result<f64, JsError> {
    let kind = parse_radiation(kind)?;
    chemlab::shielding::half_value_layer(material_id, kind).map_err(to_js)
}
