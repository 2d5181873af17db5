use serde::Serialize;

use chemlab_data::Phase;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::explain::{ExplanationProvider, NoopExplanation};
use crate::gas::{GasProperties, compute_gas_state};
use crate::matcher::find_reaction;
use crate::stoich::{SimulationResult, resolve};
use crate::units::{BeakerEntry, Unit, beaker_moles};
use crate::visual::{VisualState, derive_visual_state};

const DEFAULT_TEMPERATURE_C: f64 = 25.0;
const DEFAULT_PRESSURE_ATM: f64 = 1.0;

/// Default quantity when a chemical is added from the shelf: solids are
/// weighed, everything else is measured in moles.
const DEFAULT_SOLID_GRAMS: f64 = 10.0;
const DEFAULT_MOLES: f64 = 1.0;

/// What a resolution attempt did.
///
/// All three surface to the UI as either a result card or "no reaction
/// occurred", but the distinction between an unmatched species set and a
/// matched reaction with nothing to consume is kept observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No catalog reaction has exactly this species set.
    NoSpeciesMatch,
    /// A reaction matched but its extent was zero.
    NothingReacted,
    Resolved,
}

/// Transient visual effect latched after a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReactionEffect {
    Bubble,
    Explosion,
}

/// The lab-bench state container.
///
/// Owns the beaker and ambient conditions exclusively; every mutation goes
/// through one of the transition methods below, and derived views are
/// recomputed rather than cached.
pub struct LabBench<'a> {
    catalog: &'a Catalog,
    beaker: Vec<BeakerEntry>,
    temperature_c: f64,
    pressure_atm: f64,
    result: Option<SimulationResult>,
    gas: Option<GasProperties>,
    effect: Option<ReactionEffect>,
    attempted: bool,
    provider: Box<dyn ExplanationProvider>,
}

impl<'a> LabBench<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        LabBench {
            catalog,
            beaker: Vec::new(),
            temperature_c: DEFAULT_TEMPERATURE_C,
            pressure_atm: DEFAULT_PRESSURE_ATM,
            result: None,
            gas: None,
            effect: None,
            attempted: false,
            provider: Box::new(NoopExplanation),
        }
    }

    /// A bench over the embedded catalog.
    pub fn builtin() -> LabBench<'static> {
        LabBench::new(Catalog::builtin())
    }

    /// Replaces the explanation provider notified after each resolution.
    pub fn set_explanation_provider(&mut self, provider: Box<dyn ExplanationProvider>) {
        self.provider = provider;
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn beaker(&self) -> &[BeakerEntry] {
        &self.beaker
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn pressure_atm(&self) -> f64 {
        self.pressure_atm
    }

    pub fn result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    pub fn gas_properties(&self) -> Option<&GasProperties> {
        self.gas.as_ref()
    }

    pub fn effect(&self) -> Option<ReactionEffect> {
        self.effect
    }

    /// Whether a resolution has been attempted since the last reset.
    pub fn attempted(&self) -> bool {
        self.attempted
    }

    /// Adds a catalog chemical with its default quantity.
    ///
    /// Adding a species already in the beaker is a no-op, matching the
    /// shelf behavior of only listing each chemical once.
    pub fn add_chemical(&mut self, chemical_id: &str) -> Result<()> {
        if self.beaker.iter().any(|e| e.chemical_id == chemical_id) {
            return Ok(());
        }
        let chemical = self.catalog.chemical(chemical_id)?;
        let entry = if chemical.phase == Phase::Solid {
            BeakerEntry::grams(chemical_id, DEFAULT_SOLID_GRAMS)
        } else {
            BeakerEntry::moles(chemical_id, DEFAULT_MOLES)
        };
        self.beaker.push(entry);
        Ok(())
    }

    /// Inserts an entry as-is, replacing any entry with the same id.
    ///
    /// Unlike [`add_chemical`](Self::add_chemical) this does not validate
    /// the id against the catalog; unresolvable entries simply never
    /// contribute to resolution.
    pub fn add_entry(&mut self, entry: BeakerEntry) {
        self.beaker.retain(|e| e.chemical_id != entry.chemical_id);
        self.beaker.push(entry);
    }

    pub fn remove_chemical(&mut self, chemical_id: &str) {
        self.beaker.retain(|e| e.chemical_id != chemical_id);
    }

    /// Updates quantity and unit of a beaker entry; negative quantities
    /// clamp to zero.
    pub fn set_quantity(&mut self, chemical_id: &str, quantity: f64, unit: Unit) {
        if let Some(entry) = self
            .beaker
            .iter_mut()
            .find(|e| e.chemical_id == chemical_id)
        {
            entry.quantity = quantity.max(0.0);
            entry.unit = unit;
        }
    }

    pub fn set_temperature_c(&mut self, temperature_c: f64) {
        self.temperature_c = temperature_c;
    }

    pub fn set_pressure_atm(&mut self, pressure_atm: f64) {
        self.pressure_atm = pressure_atm;
    }

    /// Attempts to resolve the current beaker contents.
    ///
    /// On `Resolved` the beaker is replaced wholesale by products plus
    /// leftovers, gases are collected into the gas state, the reaction
    /// effect is latched, and the explanation provider is notified once.
    /// On any other outcome the beaker is untouched. The only error is a
    /// non-positive pressure while gaseous products exist; nothing is
    /// mutated in that case either.
    pub fn run(&mut self) -> Result<RunOutcome> {
        self.attempted = true;
        self.result = None;
        self.gas = None;
        self.effect = None;

        let moles = beaker_moles(&self.beaker, self.catalog);
        let Some(reaction) = find_reaction(&moles, self.catalog) else {
            return Ok(RunOutcome::NoSpeciesMatch);
        };
        let Some(result) = resolve(reaction, &moles, self.catalog) else {
            return Ok(RunOutcome::NothingReacted);
        };

        let gas = if result.gases_produced.is_empty() {
            None
        } else {
            Some(compute_gas_state(
                &result.gases_produced,
                self.temperature_c,
                self.pressure_atm,
            )?)
        };

        self.effect = Some(effect_for(&result));
        self.beaker = result
            .products
            .iter()
            .chain(&result.leftovers)
            .cloned()
            .collect();
        self.provider.reaction_resolved(&result);
        self.gas = gas;
        self.result = Some(result);
        Ok(RunOutcome::Resolved)
    }

    /// Clears the transient effect once the UI has played it out.
    pub fn clear_effect(&mut self) {
        self.effect = None;
    }

    /// Returns the bench to its pristine state.
    pub fn reset(&mut self) {
        self.beaker.clear();
        self.temperature_c = DEFAULT_TEMPERATURE_C;
        self.pressure_atm = DEFAULT_PRESSURE_ATM;
        self.result = None;
        self.gas = None;
        self.effect = None;
        self.attempted = false;
    }

    /// Current beaker visuals, derived fresh on every call.
    pub fn visual_state(&self) -> VisualState {
        derive_visual_state(
            &self.beaker,
            self.result.as_ref(),
            self.temperature_c,
            self.catalog,
        )
    }
}

fn effect_for(result: &SimulationResult) -> ReactionEffect {
    let warning = result.reaction.warning.as_deref().unwrap_or("");
    if warning.contains("Explosive") || warning.contains("Violent") {
        ReactionEffect::Explosion
    } else {
        ReactionEffect::Bubble
    }
}
