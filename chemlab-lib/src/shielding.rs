use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use chemlab_data::ShieldMaterialRecord;

use crate::error::{ChemLabError, Result};

/// Radiation kind tested against a shield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadiationKind {
    Alpha,
    Beta,
    Gamma,
}

// (id, name, density g/cm³, μ_alpha, μ_beta, μ_gamma) — all μ in 1/cm.
// Gamma values are effective coefficients for ~662 keV (Cs-137) photons;
// alpha and beta values are coarse effective coefficients chosen so that a
// sheet of paper stops alphas and a few mm of metal stop betas.
const MATERIALS: &[(&str, &str, f64, f64, f64, f64)] = &[
    ("paper", "Paper", 0.9, 1000.0, 6.0, 0.072),
    ("water", "Water", 1.0, 1200.0, 7.0, 0.0857),
    ("concrete", "Concrete", 2.3, 2500.0, 16.0, 0.178),
    ("aluminum", "Aluminum", 2.70, 3000.0, 19.0, 0.202),
    ("steel", "Steel", 7.87, 9000.0, 55.0, 0.582),
    ("lead", "Lead", 11.34, 12000.0, 80.0, 1.23),
];

static RECORDS: OnceLock<Vec<ShieldMaterialRecord>> = OnceLock::new();

/// The embedded shielding material table.
pub fn materials() -> &'static [ShieldMaterialRecord] {
    RECORDS.get_or_init(|| {
        MATERIALS
            .iter()
            .map(
                |&(id, name, density, mu_alpha, mu_beta, mu_gamma)| ShieldMaterialRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    density,
                    mu_alpha,
                    mu_beta,
                    mu_gamma,
                },
            )
            .collect()
    })
}

pub fn material(id: &str) -> Result<&'static ShieldMaterialRecord> {
    materials()
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| ChemLabError::UnknownMaterial(id.to_string()))
}

/// Effective linear attenuation coefficient (1/cm) of a material for one
/// radiation kind.
pub fn attenuation_coefficient(material: &ShieldMaterialRecord, kind: RadiationKind) -> f64 {
    match kind {
        RadiationKind::Alpha => material.mu_alpha,
        RadiationKind::Beta => material.mu_beta,
        RadiationKind::Gamma => material.mu_gamma,
    }
}

/// Fraction of incident intensity transmitted through `thickness_cm` of a
/// material: I/I₀ = exp(−μx). Negative thickness is rejected.
pub fn transmitted_fraction(
    material_id: &str,
    kind: RadiationKind,
    thickness_cm: f64,
) -> Result<f64> {
    if thickness_cm < 0.0 {
        return Err(ChemLabError::NegativeThickness(thickness_cm));
    }
    let mu = attenuation_coefficient(material(material_id)?, kind);
    Ok((-mu * thickness_cm).exp())
}

/// Thickness (cm) that halves the intensity: ln 2 / μ.
pub fn half_value_layer(material_id: &str, kind: RadiationKind) -> Result<f64> {
    let mu = attenuation_coefficient(material(material_id)?, kind);
    Ok(std::f64::consts::LN_2 / mu)
}

/// Thickness (cm) needed to attenuate down to `fraction` of the incident
/// intensity. `fraction` must be in (0, 1].
pub fn thickness_for_transmission(
    material_id: &str,
    kind: RadiationKind,
    fraction: f64,
) -> Result<f64> {
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(ChemLabError::DataError(format!(
            "transmission fraction must be in (0, 1], got {fraction}"
        )));
    }
    let mu = attenuation_coefficient(material(material_id)?, kind);
    Ok(-fraction.ln() / mu)
}
