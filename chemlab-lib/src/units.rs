use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Unit a beaker quantity is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "mol")]
    Mole,
    #[serde(rename = "g")]
    Gram,
}

/// One species currently present in the beaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeakerEntry {
    pub chemical_id: String,
    pub quantity: f64,
    pub unit: Unit,
}

impl BeakerEntry {
    pub fn moles(chemical_id: impl Into<String>, quantity: f64) -> Self {
        BeakerEntry {
            chemical_id: chemical_id.into(),
            quantity,
            unit: Unit::Mole,
        }
    }

    pub fn grams(chemical_id: impl Into<String>, quantity: f64) -> Self {
        BeakerEntry {
            chemical_id: chemical_id.into(),
            quantity,
            unit: Unit::Gram,
        }
    }
}

/// Converts an entry to moles.
///
/// Returns `None` when the chemical id is not in the catalog; unknown
/// species cannot participate in stoichiometry and contribute nothing.
pub fn to_moles(entry: &BeakerEntry, catalog: &Catalog) -> Option<f64> {
    match entry.unit {
        Unit::Mole => {
            if catalog.contains_chemical(&entry.chemical_id) {
                Some(entry.quantity)
            } else {
                None
            }
        }
        Unit::Gram => catalog
            .molar_mass(&entry.chemical_id)
            .ok()
            .map(|m| entry.quantity / m),
    }
}

/// Sums the beaker into a chemical-id → total-moles map.
///
/// Entries that do not resolve against the catalog are skipped.
pub fn beaker_moles(entries: &[BeakerEntry], catalog: &Catalog) -> HashMap<String, f64> {
    let mut moles = HashMap::new();
    for entry in entries {
        if let Some(m) = to_moles(entry, catalog) {
            *moles.entry(entry.chemical_id.clone()).or_insert(0.0) += m;
        }
    }
    moles
}
