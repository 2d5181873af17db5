use std::collections::{HashMap, HashSet};

use chemlab_data::ReactionRecord;

use crate::catalog::Catalog;

/// Finds the reaction whose reactant species set exactly equals the set of
/// species in the beaker.
///
/// Matching ignores quantities and ordering; subsets and supersets never
/// match. When several catalog entries share the same reactant set, the
/// reaction with the lexicographically smallest id wins, so the outcome
/// does not depend on catalog ordering.
pub fn find_reaction<'a>(
    beaker_moles: &HashMap<String, f64>,
    catalog: &'a Catalog,
) -> Option<&'a ReactionRecord> {
    if beaker_moles.is_empty() {
        return None;
    }
    let species: HashSet<&str> = beaker_moles.keys().map(String::as_str).collect();

    let mut found: Option<&ReactionRecord> = None;
    for reaction in catalog.reactions() {
        let reactant_ids: HashSet<&str> = reaction
            .reactants
            .iter()
            .map(|t| t.chemical_id.as_str())
            .collect();
        if reactant_ids.len() != species.len() || !reactant_ids.is_subset(&species) {
            continue;
        }
        match found {
            Some(prev) if reaction.id >= prev.id => {}
            _ => found = Some(reaction),
        }
    }
    found
}
