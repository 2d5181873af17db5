#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// The complete chemlab reference data set.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChemLabDatabase {
    pub chemicals: Vec<ChemicalRecord>,
    pub reactions: Vec<ReactionRecord>,
    pub nuclides: Vec<NuclideRecord>,
    pub decay_chains: Vec<DecayChainRecord>,
    pub isotope_masses: Vec<IsotopeMassRecord>,
    pub shield_materials: Vec<ShieldMaterialRecord>,
}

/// Physical state of a species at lab conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "s")]
    Solid,
    #[serde(rename = "l")]
    Liquid,
    #[serde(rename = "g")]
    Gas,
    #[serde(rename = "aq")]
    Aqueous,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChemicalRecord {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub phase: Phase,
    /// g/mol
    pub molar_mass: f64,
    /// g/cm³, where tabulated
    pub density: Option<f64>,
}

/// One side of a balanced equation: a species and its coefficient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionTerm {
    pub chemical_id: String,
    pub coefficient: f64,
}

/// Closed range used by reaction conditions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConditionRange {
    pub min: f64,
    pub max: f64,
}

/// Temperature/pressure windows a reaction nominally requires.
///
/// Carried as reference data only; the matcher does not consult them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReactionConditions {
    pub temp_c: Option<ConditionRange>,
    pub pressure_atm: Option<ConditionRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionRecord {
    pub id: String,
    pub name: Option<String>,
    pub reactants: Vec<ReactionTerm>,
    pub products: Vec<ReactionTerm>,
    pub equation: String,
    pub description: String,
    pub warning: Option<String>,
    pub conditions: Option<ReactionConditions>,
}

/// How a nuclide decays (or that it doesn't).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecayMode {
    Stable,
    Alpha,
    BetaMinus,
    EcBetaPlus,
    Gamma,
    ProtonEmission,
    NeutronEmission,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NuclideRecord {
    pub z: u16,
    pub n: u16,
    pub symbol: String,
    pub mass_number: u16,
    pub decay_mode: DecayMode,
    pub half_life_sec: Option<f64>,
    pub half_life_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayStepRecord {
    pub from: String,
    /// `None` marks the stable end of the chain.
    pub to: Option<String>,
    pub mode: DecayMode,
    pub half_life_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayChainRecord {
    pub id: String,
    pub name: String,
    pub start: String,
    pub end: String,
    pub description: Option<String>,
    pub steps: Vec<DecayStepRecord>,
}

/// Measured atomic mass of one isotope, for binding-energy calculations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsotopeMassRecord {
    pub id: String,
    pub name: String,
    pub element_name: String,
    pub symbol: String,
    pub z: u16,
    pub n: u16,
    pub mass_number: u16,
    pub atomic_mass_u: f64,
}

/// Shielding material with effective linear attenuation coefficients.
///
/// Coefficients are 1/cm; the gamma value is for ~662 keV photons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShieldMaterialRecord {
    pub id: String,
    pub name: String,
    /// g/cm³
    pub density: f64,
    pub mu_alpha: f64,
    pub mu_beta: f64,
    pub mu_gamma: f64,
}
