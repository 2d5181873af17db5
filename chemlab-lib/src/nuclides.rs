use std::sync::OnceLock;

use chemlab_data::{DecayMode, NuclideRecord};

use crate::error::{ChemLabError, Result};

// Curated nuclides for the first 20 elements; simplified for teaching.
// (z, n, symbol, decay mode, half-life seconds, half-life text)
const NUCLIDES: &[(
    u16,
    u16,
    &str,
    DecayMode,
    Option<f64>,
    Option<&str>,
)] = &[
    (1, 0, "H", DecayMode::Stable, None, None),
    (1, 1, "H", DecayMode::Stable, None, None),
    (1, 2, "H", DecayMode::BetaMinus, Some(3.888e8), Some("12.32 y")),
    (2, 1, "He", DecayMode::Stable, None, None),
    (2, 2, "He", DecayMode::Stable, None, None),
    (2, 4, "He", DecayMode::BetaMinus, Some(0.8067), Some("806.7 ms")),
    (3, 3, "Li", DecayMode::Stable, None, None),
    (3, 4, "Li", DecayMode::Stable, None, None),
    (3, 5, "Li", DecayMode::BetaMinus, Some(0.840), Some("840 ms")),
    (4, 3, "Be", DecayMode::EcBetaPlus, Some(4.618e6), Some("53.22 d")),
    (4, 5, "Be", DecayMode::Stable, None, None),
    (4, 6, "Be", DecayMode::BetaMinus, Some(4.858e13), Some("1.51 My")),
    (5, 3, "B", DecayMode::EcBetaPlus, Some(0.770), Some("770 ms")),
    (5, 5, "B", DecayMode::Stable, None, None),
    (5, 6, "B", DecayMode::Stable, None, None),
    (5, 7, "B", DecayMode::BetaMinus, Some(0.0202), Some("20.2 ms")),
    (6, 5, "C", DecayMode::EcBetaPlus, Some(1222.2), Some("20.37 min")),
    (6, 6, "C", DecayMode::Stable, None, None),
    (6, 7, "C", DecayMode::Stable, None, None),
    (6, 8, "C", DecayMode::BetaMinus, Some(1.806e11), Some("5730 y")),
    (7, 6, "N", DecayMode::EcBetaPlus, Some(597.9), Some("9.965 min")),
    (7, 7, "N", DecayMode::Stable, None, None),
    (7, 8, "N", DecayMode::Stable, None, None),
    (7, 9, "N", DecayMode::BetaMinus, Some(7.13), Some("7.13 s")),
    (8, 7, "O", DecayMode::EcBetaPlus, Some(122.24), Some("122.24 s")),
    (8, 8, "O", DecayMode::Stable, None, None),
    (8, 9, "O", DecayMode::Stable, None, None),
    (8, 10, "O", DecayMode::Stable, None, None),
    (8, 11, "O", DecayMode::BetaMinus, Some(26.91), Some("26.91 s")),
    (9, 9, "F", DecayMode::EcBetaPlus, Some(6586.2), Some("109.77 min")),
    (9, 10, "F", DecayMode::Stable, None, None),
    (9, 11, "F", DecayMode::BetaMinus, Some(11.0), Some("11.0 s")),
    (10, 9, "Ne", DecayMode::EcBetaPlus, Some(17.22), Some("17.22 s")),
    (10, 10, "Ne", DecayMode::Stable, None, None),
    (10, 11, "Ne", DecayMode::Stable, None, None),
    (10, 12, "Ne", DecayMode::Stable, None, None),
    (11, 11, "Na", DecayMode::EcBetaPlus, Some(8.219e7), Some("2.605 y")),
    (11, 12, "Na", DecayMode::Stable, None, None),
    (11, 13, "Na", DecayMode::BetaMinus, Some(53892.0), Some("14.97 h")),
    (12, 11, "Mg", DecayMode::EcBetaPlus, Some(11.317), Some("11.317 s")),
    (12, 12, "Mg", DecayMode::Stable, None, None),
    (12, 13, "Mg", DecayMode::Stable, None, None),
    (12, 14, "Mg", DecayMode::Stable, None, None),
    (13, 13, "Al", DecayMode::EcBetaPlus, Some(2.29e13), Some("7.2e5 y")),
    (13, 14, "Al", DecayMode::Stable, None, None),
    (13, 15, "Al", DecayMode::BetaMinus, Some(134.4), Some("2.24 min")),
    (14, 14, "Si", DecayMode::Stable, None, None),
    (14, 15, "Si", DecayMode::Stable, None, None),
    (14, 16, "Si", DecayMode::Stable, None, None),
    (14, 18, "Si", DecayMode::BetaMinus, Some(4.418e9), Some("140 y")),
    (15, 15, "P", DecayMode::EcBetaPlus, Some(150.0), Some("2.5 min")),
    (15, 16, "P", DecayMode::Stable, None, None),
    (15, 17, "P", DecayMode::BetaMinus, Some(1.236e6), Some("14.29 d")),
    (16, 16, "S", DecayMode::Stable, None, None),
    (16, 17, "S", DecayMode::Stable, None, None),
    (16, 18, "S", DecayMode::Stable, None, None),
    (16, 19, "S", DecayMode::BetaMinus, Some(7.55e6), Some("87.4 d")),
    (16, 20, "S", DecayMode::Stable, None, None),
    (17, 18, "Cl", DecayMode::Stable, None, None),
    (17, 19, "Cl", DecayMode::BetaMinus, Some(9.5e12), Some("3.01e5 y")),
    (17, 20, "Cl", DecayMode::Stable, None, None),
    (18, 18, "Ar", DecayMode::Stable, None, None),
    (18, 20, "Ar", DecayMode::Stable, None, None),
    (18, 21, "Ar", DecayMode::BetaMinus, Some(8.48e9), Some("269 y")),
    (18, 22, "Ar", DecayMode::Stable, None, None),
    (19, 20, "K", DecayMode::Stable, None, None),
    (19, 21, "K", DecayMode::BetaMinus, Some(3.94e16), Some("1.25e9 y")),
    (19, 22, "K", DecayMode::Stable, None, None),
    (20, 20, "Ca", DecayMode::Stable, None, None),
    (20, 21, "Ca", DecayMode::EcBetaPlus, Some(3.25e12), Some("1.03e5 y")),
    (20, 22, "Ca", DecayMode::Stable, None, None),
    (20, 23, "Ca", DecayMode::Stable, None, None),
    (20, 24, "Ca", DecayMode::Stable, None, None),
    (20, 25, "Ca", DecayMode::BetaMinus, Some(1.41e7), Some("163 d")),
    (20, 26, "Ca", DecayMode::Stable, None, None),
    (20, 28, "Ca", DecayMode::Stable, None, None),
];

static RECORDS: OnceLock<Vec<NuclideRecord>> = OnceLock::new();

/// The embedded nuclide chart (Z ≤ 20).
pub fn nuclides() -> &'static [NuclideRecord] {
    RECORDS.get_or_init(|| {
        NUCLIDES
            .iter()
            .map(|&(z, n, symbol, decay_mode, half_life_sec, half_life_text)| NuclideRecord {
                z,
                n,
                symbol: symbol.to_string(),
                mass_number: z + n,
                decay_mode,
                half_life_sec,
                half_life_text: half_life_text.map(str::to_string),
            })
            .collect()
    })
}

pub fn nuclide(z: u16, n: u16) -> Result<&'static NuclideRecord> {
    nuclides()
        .iter()
        .find(|r| r.z == z && r.n == n)
        .ok_or(ChemLabError::UnknownNuclide { z, n })
}

/// All charted isotopes of one element.
pub fn isotopes_of(z: u16) -> Vec<&'static NuclideRecord> {
    nuclides().iter().filter(|r| r.z == z).collect()
}

/// Coordinates of the daughter a nuclide decays into.
///
/// `None` for stable nuclides and for gamma transitions, which leave Z and
/// N unchanged. The daughter is not guaranteed to be charted.
pub fn daughter(z: u16, n: u16) -> Result<Option<(u16, u16)>> {
    let record = nuclide(z, n)?;
    Ok(match record.decay_mode {
        DecayMode::Stable | DecayMode::Gamma => None,
        DecayMode::Alpha => Some((z - 2, n - 2)),
        DecayMode::BetaMinus => Some((z + 1, n - 1)),
        DecayMode::EcBetaPlus => Some((z - 1, n + 1)),
        DecayMode::ProtonEmission => Some((z - 1, n)),
        DecayMode::NeutronEmission => Some((z, n - 1)),
    })
}
