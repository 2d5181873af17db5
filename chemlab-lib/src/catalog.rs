use std::collections::HashMap;
use std::sync::OnceLock;

use chemlab_data::{ChemicalRecord, Phase, ReactionRecord};

use crate::catalog_db;
use crate::error::{ChemLabError, Result};

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Read-only table of chemical species and reactions.
///
/// Supplied once at startup and never mutated. Lookups by id are O(1).
pub struct Catalog {
    chemicals: Vec<ChemicalRecord>,
    reactions: Vec<ReactionRecord>,
    chemical_index: HashMap<String, usize>,
    reaction_index: HashMap<String, usize>,
}

impl Catalog {
    /// The embedded educational data set, materialized on first use.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            Catalog::from_records(
                catalog_db::chemical_records(),
                catalog_db::reaction_records(),
            )
        })
    }

    /// Build a catalog from caller-supplied tables.
    pub fn from_records(
        chemicals: Vec<ChemicalRecord>,
        reactions: Vec<ReactionRecord>,
    ) -> Catalog {
        let chemical_index = chemicals
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        let reaction_index = reactions
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Catalog {
            chemicals,
            reactions,
            chemical_index,
            reaction_index,
        }
    }

    pub fn chemical(&self, id: &str) -> Result<&ChemicalRecord> {
        self.chemical_index
            .get(id)
            .map(|&i| &self.chemicals[i])
            .ok_or_else(|| ChemLabError::UnknownChemical(id.to_string()))
    }

    pub fn contains_chemical(&self, id: &str) -> bool {
        self.chemical_index.contains_key(id)
    }

    pub fn molar_mass(&self, id: &str) -> Result<f64> {
        Ok(self.chemical(id)?.molar_mass)
    }

    pub fn phase(&self, id: &str) -> Result<Phase> {
        Ok(self.chemical(id)?.phase)
    }

    pub fn density(&self, id: &str) -> Result<Option<f64>> {
        Ok(self.chemical(id)?.density)
    }

    pub fn chemicals(&self) -> &[ChemicalRecord] {
        &self.chemicals
    }

    pub fn reaction(&self, id: &str) -> Result<&ReactionRecord> {
        self.reaction_index
            .get(id)
            .map(|&i| &self.reactions[i])
            .ok_or_else(|| ChemLabError::UnknownReaction(id.to_string()))
    }

    pub fn reactions(&self) -> &[ReactionRecord] {
        &self.reactions
    }
}
