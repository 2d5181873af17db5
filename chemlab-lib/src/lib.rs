pub mod binding;
pub mod catalog;
pub(crate) mod catalog_db;
pub mod constants;
pub mod decay;
pub mod error;
pub mod explain;
pub mod formula;
pub mod gas;
pub mod lab;
pub mod matcher;
pub mod nuclides;
pub mod shielding;
pub mod stoich;
pub mod units;
pub mod visual;

use chemlab_data::ChemLabDatabase;

/// Assembles every embedded reference table into one serializable value,
/// for hosts that want to ship the data set to a front end in one piece.
pub fn database() -> ChemLabDatabase {
    let catalog = Catalog::builtin();
    ChemLabDatabase {
        chemicals: catalog.chemicals().to_vec(),
        reactions: catalog.reactions().to_vec(),
        nuclides: nuclides::nuclides().to_vec(),
        decay_chains: decay::chains().to_vec(),
        isotope_masses: binding::isotopes().to_vec(),
        shield_materials: shielding::materials().to_vec(),
    }
}

pub use binding::BindingEnergy;
pub use catalog::Catalog;
pub use chemlab_data;
pub use decay::{ChainCursor, DecayPreset};
pub use error::{ChemLabError, Result};
pub use explain::{ExplanationProvider, NoopExplanation};
pub use gas::GasProperties;
pub use lab::{LabBench, ReactionEffect, RunOutcome};
pub use shielding::RadiationKind;
pub use stoich::SimulationResult;
pub use units::{BeakerEntry, Unit};
pub use visual::{LiquidLayer, SolidLayer, VisualState};
