use serde::Serialize;

use chemlab_data::Phase;

use crate::catalog::Catalog;
use crate::stoich::SimulationResult;
use crate::units::{BeakerEntry, to_moles};

/// Beaker height fraction the liquid column may occupy (percent).
const LIQUID_LEVEL_CAP: f64 = 80.0;
/// Maximum liquid opacity (percent).
const LIQUID_OPACITY_CAP: f64 = 90.0;
/// Maximum combined height of the solid stack (percent of beaker height).
const SOLID_STACK_CAP: f64 = 30.0;
/// Maximum vapor opacity.
const VAPOR_OPACITY_CAP: f64 = 0.5;

/// Builtin-catalog id of liquid water, the only species that steams.
const WATER_ID: &str = "H2O";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidLayer {
    /// Fill level, 0–80 percent of beaker height.
    pub level: f64,
    /// 0–90 percent.
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolidLayer {
    pub chemical_id: String,
    /// 0–30 percent of beaker height.
    pub height: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VisualState {
    pub liquid_layer: Option<LiquidLayer>,
    pub solid_layers: Vec<SolidLayer>,
    /// 0–0.5; nonzero only for liquid water above 100 °C.
    pub vapor_opacity: f64,
}

/// Derives the layered beaker visuals from the current contents.
///
/// Pure function of its inputs, recomputed on every relevant state change.
/// Gases never appear here; they are shown by the separate gas collection
/// display. Entries that do not resolve against the catalog are ignored.
pub fn derive_visual_state(
    entries: &[BeakerEntry],
    result: Option<&SimulationResult>,
    temperature_c: f64,
    catalog: &Catalog,
) -> VisualState {
    let fresh_products = result.map(|r| r.products.as_slice()).unwrap_or(&[]);
    let all: Vec<&BeakerEntry> = entries.iter().chain(fresh_products).collect();

    let mole_of = |e: &BeakerEntry| to_moles(e, catalog);
    let total_moles: f64 = all.iter().filter_map(|e| mole_of(e)).sum();
    if total_moles <= 0.0 {
        return VisualState::default();
    }

    let phase_of = |e: &BeakerEntry| catalog.phase(&e.chemical_id).ok();
    let liquids: Vec<&BeakerEntry> = all
        .iter()
        .filter(|e| matches!(phase_of(e), Some(Phase::Liquid | Phase::Aqueous)))
        .copied()
        .collect();
    let solids: Vec<&BeakerEntry> = all
        .iter()
        .filter(|e| matches!(phase_of(e), Some(Phase::Solid)))
        .copied()
        .collect();

    let total_solid_moles: f64 = solids.iter().filter_map(|e| mole_of(e)).sum();
    let mut solid_layers = Vec::with_capacity(solids.len());
    for entry in &solids {
        let moles = mole_of(entry).unwrap_or(0.0);
        let height = if total_solid_moles > 0.0 {
            moles / total_solid_moles * SOLID_STACK_CAP
        } else {
            0.0
        };
        solid_layers.push(SolidLayer {
            chemical_id: entry.chemical_id.clone(),
            height,
        });
    }

    let liquid_layer = if liquids.is_empty() {
        None
    } else {
        let liquid_moles: f64 = liquids.iter().filter_map(|e| mole_of(e)).sum();
        let mut distinct: Vec<&str> = liquids.iter().map(|e| e.chemical_id.as_str()).collect();
        distinct.sort_unstable();
        distinct.dedup();

        let level = (liquid_moles / total_moles * LIQUID_LEVEL_CAP).min(LIQUID_LEVEL_CAP);
        let opacity = (30.0 + distinct.len() as f64 * 20.0).min(LIQUID_OPACITY_CAP);
        Some(LiquidLayer { level, opacity })
    };

    let water_present = liquids.iter().any(|e| e.chemical_id == WATER_ID);
    let vapor_opacity = if water_present && temperature_c > 100.0 {
        ((temperature_c - 100.0) / 100.0).min(1.0) * VAPOR_OPACITY_CAP
    } else {
        0.0
    };

    VisualState {
        liquid_layer,
        solid_layers,
        vapor_opacity,
    }
}
