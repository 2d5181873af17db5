use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use chemlab_data::{Phase, ReactionRecord};

use crate::catalog::Catalog;
use crate::constants::MOLE_EPSILON;
use crate::units::BeakerEntry;

/// Outcome of one resolution pass over a matched reaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub reaction: ReactionRecord,
    /// Condensed-phase products, in moles.
    pub products: Vec<BeakerEntry>,
    /// Unreacted reactant portions above epsilon, in moles.
    pub leftovers: Vec<BeakerEntry>,
    /// Gaseous products, collected separately from the beaker.
    pub gases_produced: Vec<BeakerEntry>,
    pub limiting_reagent_id: Option<String>,
    pub notes: Vec<String>,
}

/// Runs a matched reaction to completion against the available moles.
///
/// The extent is the minimum of `available / coefficient` over the
/// reactants; the reactant achieving it is the limiting reagent, ties going
/// to the lexicographically smallest chemical id. Returns `None` when the
/// extent is below epsilon: the reaction matched but nothing reacted.
pub fn resolve(
    reaction: &ReactionRecord,
    beaker_moles: &HashMap<String, f64>,
    catalog: &Catalog,
) -> Option<SimulationResult> {
    let mut extent = f64::INFINITY;
    let mut limiting: Option<&str> = None;

    for term in &reaction.reactants {
        let available = beaker_moles.get(&term.chemical_id).copied().unwrap_or(0.0);
        let multiplier = available / term.coefficient;
        let replace = match limiting {
            None => true,
            Some(cur) => {
                multiplier < extent
                    || (multiplier == extent && term.chemical_id.as_str() < cur)
            }
        };
        if replace {
            extent = multiplier;
            limiting = Some(&term.chemical_id);
        }
    }

    let limiting = limiting?;
    if !extent.is_finite() || extent <= MOLE_EPSILON {
        return None;
    }

    let mut products = Vec::new();
    let mut gases_produced = Vec::new();
    for term in &reaction.products {
        let Ok(phase) = catalog.phase(&term.chemical_id) else {
            continue;
        };
        let entry = BeakerEntry::moles(term.chemical_id.clone(), term.coefficient * extent);
        if phase == Phase::Gas {
            gases_produced.push(entry);
        } else {
            products.push(entry);
        }
    }

    let mut leftovers = Vec::new();
    for term in &reaction.reactants {
        let available = beaker_moles.get(&term.chemical_id).copied().unwrap_or(0.0);
        let remaining = available - term.coefficient * extent;
        if remaining > MOLE_EPSILON {
            leftovers.push(BeakerEntry::moles(term.chemical_id.clone(), remaining));
        }
    }

    Some(SimulationResult {
        reaction: reaction.clone(),
        products,
        leftovers,
        gases_produced,
        limiting_reagent_id: Some(limiting.to_string()),
        notes: Vec::new(),
    })
}
