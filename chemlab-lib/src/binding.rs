use std::sync::OnceLock;

use serde::Serialize;

use chemlab_data::IsotopeMassRecord;

use crate::constants::{NEUTRON_MASS_U, PROTON_MASS_U, U_TO_MEV};
use crate::error::{ChemLabError, Result};

// (id, name, element, symbol, Z, N, measured atomic mass in u)
const ISOTOPES: &[(&str, &str, &str, &str, u16, u16, f64)] = &[
    ("H-1", "Protium", "Hydrogen", "¹H", 1, 0, 1.007825032),
    ("H-2", "Deuterium", "Hydrogen", "²H", 1, 1, 2.01410178),
    ("H-3", "Tritium", "Hydrogen", "³H", 1, 2, 3.01604928),
    ("He-3", "Helium-3", "Helium", "³He", 2, 1, 3.01602932),
    ("He-4", "Helium-4", "Helium", "⁴He", 2, 2, 4.00260325),
    ("Li-6", "Lithium-6", "Lithium", "⁶Li", 3, 3, 6.01512289),
    ("Li-7", "Lithium-7", "Lithium", "⁷Li", 3, 4, 7.01600344),
    ("Be-9", "Beryllium-9", "Beryllium", "⁹Be", 4, 5, 9.01218307),
    ("B-10", "Boron-10", "Boron", "¹⁰B", 5, 5, 10.0129370),
    ("B-11", "Boron-11", "Boron", "¹¹B", 5, 6, 11.0093054),
    ("C-12", "Carbon-12", "Carbon", "¹²C", 6, 6, 12.0000000),
    ("C-13", "Carbon-13", "Carbon", "¹³C", 6, 7, 13.00335484),
    ("C-14", "Carbon-14", "Carbon", "¹⁴C", 6, 8, 14.00324199),
    ("N-14", "Nitrogen-14", "Nitrogen", "¹⁴N", 7, 7, 14.00307400),
    ("N-15", "Nitrogen-15", "Nitrogen", "¹⁵N", 7, 8, 15.00010889),
    ("O-16", "Oxygen-16", "Oxygen", "¹⁶O", 8, 8, 15.99491462),
    ("O-17", "Oxygen-17", "Oxygen", "¹⁷O", 8, 9, 16.99913176),
    ("O-18", "Oxygen-18", "Oxygen", "¹⁸O", 8, 10, 17.99915961),
    ("F-19", "Fluorine-19", "Fluorine", "¹⁹F", 9, 10, 18.99840316),
    ("Ne-20", "Neon-20", "Neon", "²⁰Ne", 10, 10, 19.99244018),
    ("Na-23", "Sodium-23", "Sodium", "²³Na", 11, 12, 22.98976928),
    ("Mg-24", "Magnesium-24", "Magnesium", "²⁴Mg", 12, 12, 23.98504170),
    ("Al-27", "Aluminum-27", "Aluminum", "²⁷Al", 13, 14, 26.98153853),
    ("Si-28", "Silicon-28", "Silicon", "²⁸Si", 14, 14, 27.97692653),
    ("P-31", "Phosphorus-31", "Phosphorus", "³¹P", 15, 16, 30.97376199),
    ("S-32", "Sulfur-32", "Sulfur", "³²S", 16, 16, 31.97207117),
    ("Cl-35", "Chlorine-35", "Chlorine", "³⁵Cl", 17, 18, 34.96885268),
    ("Ar-40", "Argon-40", "Argon", "⁴⁰Ar", 18, 22, 39.96238312),
    ("K-39", "Potassium-39", "Potassium", "³⁹K", 19, 20, 38.96370649),
    ("Ca-40", "Calcium-40", "Calcium", "⁴⁰Ca", 20, 20, 39.9625909),
    ("Fe-54", "Iron-54", "Iron", "⁵⁴Fe", 26, 28, 53.9396090),
    ("Fe-56", "Iron-56", "Iron", "⁵⁶Fe", 26, 30, 55.9349363),
    ("Pb-206", "Lead-206", "Lead", "²⁰⁶Pb", 82, 124, 205.974465),
    ("U-235", "Uranium-235", "Uranium", "²³⁵U", 92, 143, 235.043930),
    ("U-238", "Uranium-238", "Uranium", "²³⁸U", 92, 146, 238.050788),
];

/// Reference points of the binding-energy curve: (mass number, MeV/nucleon).
/// Fe-56 is the famously cited peak; the true peak is Ni-62.
pub const BINDING_CURVE: &[(u16, f64)] = &[
    (1, 0.0),
    (2, 1.112),
    (3, 2.573),
    (4, 7.074),
    (6, 5.332),
    (12, 7.680),
    (16, 7.976),
    (20, 8.032),
    (28, 8.448),
    (40, 8.551),
    (56, 8.790),
    (62, 8.795),
    (84, 8.714),
    (100, 8.611),
    (120, 8.517),
    (140, 8.384),
    (160, 8.243),
    (180, 8.089),
    (208, 7.867),
    (235, 7.591),
    (238, 7.570),
];

static RECORDS: OnceLock<Vec<IsotopeMassRecord>> = OnceLock::new();

/// The embedded isotope-mass table.
pub fn isotopes() -> &'static [IsotopeMassRecord] {
    RECORDS.get_or_init(|| {
        ISOTOPES
            .iter()
            .map(
                |&(id, name, element_name, symbol, z, n, atomic_mass_u)| IsotopeMassRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    element_name: element_name.to_string(),
                    symbol: symbol.to_string(),
                    z,
                    n,
                    mass_number: z + n,
                    atomic_mass_u,
                },
            )
            .collect()
    })
}

pub fn isotope(id: &str) -> Result<&'static IsotopeMassRecord> {
    isotopes()
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| ChemLabError::UnknownIsotope(id.to_string()))
}

/// Mass defect and binding energy of one isotope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BindingEnergy {
    pub mass_defect_u: f64,
    pub total_mev: f64,
    pub per_nucleon_mev: f64,
}

/// Computes the binding energy from the nucleon masses and the measured
/// atomic mass: Δm = Z·mp + N·mn − m, E = Δm · 931.494 MeV/u.
pub fn binding_energy_of(record: &IsotopeMassRecord) -> BindingEnergy {
    let nucleon_mass = record.z as f64 * PROTON_MASS_U + record.n as f64 * NEUTRON_MASS_U;
    let mass_defect_u = nucleon_mass - record.atomic_mass_u;
    let total_mev = mass_defect_u * U_TO_MEV;
    BindingEnergy {
        mass_defect_u,
        total_mev,
        per_nucleon_mev: total_mev / record.mass_number as f64,
    }
}

pub fn binding_energy(id: &str) -> Result<BindingEnergy> {
    Ok(binding_energy_of(isotope(id)?))
}
