use std::sync::OnceLock;

use chemlab_data::{DecayChainRecord, DecayMode, DecayStepRecord};

use crate::error::{ChemLabError, Result};

/// Fraction of a radioactive population remaining after `elapsed` time.
///
/// Classic half-life law: N/N₀ = (1/2)^(t/t½). Both arguments share one
/// time unit. Times before zero read as the initial population.
pub fn fraction_remaining(elapsed: f64, half_life: f64) -> Result<f64> {
    if half_life <= 0.0 {
        return Err(ChemLabError::NonPositiveHalfLife(half_life));
    }
    Ok(0.5_f64.powf(elapsed.max(0.0) / half_life))
}

/// Samples the decay curve on `[0, max_time]` as (time, fraction) pairs.
pub fn decay_curve(half_life: f64, max_time: f64, samples: usize) -> Result<Vec<(f64, f64)>> {
    let mut points = Vec::with_capacity(samples);
    if samples == 0 {
        return Ok(points);
    }
    let step = max_time / (samples.saturating_sub(1)).max(1) as f64;
    for i in 0..samples {
        let t = i as f64 * step;
        points.push((t, fraction_remaining(t, half_life)?));
    }
    Ok(points)
}

/// Isotope preset offered by the half-life curve page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub half_life: f64,
    /// Plot range, in the same unit as the half-life.
    pub max_time: f64,
    pub time_unit: &'static str,
}

pub const DECAY_PRESETS: &[DecayPreset] = &[
    DecayPreset {
        id: "C-14",
        name: "Carbon-14",
        half_life: 5730.0,
        max_time: 50_000.0,
        time_unit: "years",
    },
    DecayPreset {
        id: "I-131",
        name: "Iodine-131",
        half_life: 8.02,
        max_time: 60.0,
        time_unit: "days",
    },
    DecayPreset {
        id: "U-238",
        name: "Uranium-238",
        half_life: 4.5,
        max_time: 10.0,
        time_unit: "billion years",
    },
];

pub fn preset(id: &str) -> Result<&'static DecayPreset> {
    DECAY_PRESETS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ChemLabError::UnknownIsotope(id.to_string()))
}

struct RawStep {
    from: &'static str,
    to: Option<&'static str>,
    mode: DecayMode,
    half_life: &'static str,
}

struct RawChain {
    id: &'static str,
    name: &'static str,
    start: &'static str,
    end: &'static str,
    description: Option<&'static str>,
    steps: &'static [RawStep],
}

const fn step(
    from: &'static str,
    to: &'static str,
    mode: DecayMode,
    half_life: &'static str,
) -> RawStep {
    RawStep {
        from,
        to: Some(to),
        mode,
        half_life,
    }
}

const fn terminus(from: &'static str) -> RawStep {
    RawStep {
        from,
        to: None,
        mode: DecayMode::Stable,
        half_life: "Stable",
    }
}

use DecayMode::{Alpha, BetaMinus, Gamma};

const CHAINS: &[RawChain] = &[
    RawChain {
        id: "U-238",
        name: "Uranium Series",
        start: "²³⁸U",
        end: "²⁰⁶Pb",
        description: Some(
            "The most common decay chain, starting with Uranium-238 and ending in stable Lead-206.",
        ),
        steps: &[
            step("²³⁸U", "²³⁴Th", Alpha, "4.468 billion years"),
            step("²³⁴Th", "²³⁴Pa", BetaMinus, "24.1 days"),
            step("²³⁴Pa", "²³⁴U", BetaMinus, "1.17 minutes"),
            step("²³⁴U", "²³⁰Th", Alpha, "245,500 years"),
            step("²³⁰Th", "²²⁶Ra", Alpha, "75,380 years"),
            step("²²⁶Ra", "²²²Rn", Alpha, "1,600 years"),
            step("²²²Rn", "²¹⁸Po", Alpha, "3.82 days"),
            step("²¹⁸Po", "²¹⁴Pb", Alpha, "3.10 minutes"),
            step("²¹⁴Pb", "²¹⁴Bi", BetaMinus, "26.8 minutes"),
            step("²¹⁴Bi", "²¹⁴Po", BetaMinus, "19.9 minutes"),
            step("²¹⁴Po", "²¹⁰Pb", Alpha, "164.3 µs"),
            step("²¹⁰Pb", "²¹⁰Bi", BetaMinus, "22.3 years"),
            step("²¹⁰Bi", "²¹⁰Po", BetaMinus, "5.01 days"),
            step("²¹⁰Po", "²⁰⁶Pb", Alpha, "138.4 days"),
            terminus("²⁰⁶Pb"),
        ],
    },
    RawChain {
        id: "Th-232",
        name: "Thorium Series",
        start: "²³²Th",
        end: "²⁰⁸Pb",
        description: Some(
            "The decay series starting with Thorium-232, the most abundant thorium isotope.",
        ),
        steps: &[
            step("²³²Th", "²²⁸Ra", Alpha, "14.05 billion years"),
            step("²²⁸Ra", "²²⁸Ac", BetaMinus, "5.75 years"),
            step("²²⁸Ac", "²²⁸Th", BetaMinus, "6.15 hours"),
            step("²²⁸Th", "²²⁴Ra", Alpha, "1.91 years"),
            step("²²⁴Ra", "²²⁰Rn", Alpha, "3.66 days"),
            step("²²⁰Rn", "²¹⁶Po", Alpha, "55.6 seconds"),
            step("²¹⁶Po", "²¹²Pb", Alpha, "0.145 seconds"),
            step("²¹²Pb", "²¹²Bi", BetaMinus, "10.64 hours"),
            // Major branch (64%)
            step("²¹²Bi", "²¹²Po", BetaMinus, "60.55 minutes"),
            step("²¹²Po", "²⁰⁸Pb", Alpha, "299 nanoseconds"),
            terminus("²⁰⁸Pb"),
        ],
    },
    RawChain {
        id: "U-235",
        name: "Actinium Series",
        start: "²³⁵U",
        end: "²⁰⁷Pb",
        description: Some(
            "The decay series for Uranium-235, a fissile isotope used in nuclear power.",
        ),
        steps: &[
            step("²³⁵U", "²³¹Th", Alpha, "704 million years"),
            step("²³¹Th", "²³¹Pa", BetaMinus, "25.5 hours"),
            step("²³¹Pa", "²²⁷Ac", Alpha, "32,760 years"),
            // Major branch (98.6%)
            step("²²⁷Ac", "²²⁷Th", BetaMinus, "21.77 years"),
            step("²²⁷Th", "²²³Ra", Alpha, "18.7 days"),
            step("²²³Ra", "²¹⁹Rn", Alpha, "11.4 days"),
            step("²¹⁹Rn", "²¹⁵Po", Alpha, "3.96 seconds"),
            step("²¹⁵Po", "²¹¹Pb", Alpha, "1.78 milliseconds"),
            step("²¹¹Pb", "²¹¹Bi", BetaMinus, "36.1 minutes"),
            step("²¹¹Bi", "²⁰⁷Tl", Alpha, "2.14 minutes"),
            step("²⁰⁷Tl", "²⁰⁷Pb", BetaMinus, "4.77 minutes"),
            terminus("²⁰⁷Pb"),
        ],
    },
    RawChain {
        id: "H-3",
        name: "Tritium",
        start: "³H",
        end: "³He",
        description: None,
        steps: &[step("³H", "³He", BetaMinus, "12.32 years"), terminus("³He")],
    },
    RawChain {
        id: "C-14",
        name: "Carbon-14",
        start: "¹⁴C",
        end: "¹⁴N",
        description: None,
        steps: &[step("¹⁴C", "¹⁴N", BetaMinus, "5,730 years"), terminus("¹⁴N")],
    },
    RawChain {
        id: "K-40",
        name: "Potassium-40",
        start: "⁴⁰K",
        end: "⁴⁰Ca",
        description: Some(
            "Potassium-40 has a branching decay. The most common path (89%) is shown.",
        ),
        steps: &[
            step("⁴⁰K", "⁴⁰Ca", BetaMinus, "1.25 billion years"),
            terminus("⁴⁰Ca"),
        ],
    },
    RawChain {
        id: "Co-60",
        name: "Cobalt-60",
        start: "⁶⁰Co",
        end: "⁶⁰Ni",
        description: Some("Used in radiation therapy and sterilization."),
        steps: &[
            step("⁶⁰Co", "⁶⁰Ni", BetaMinus, "5.27 years"),
            terminus("⁶⁰Ni"),
        ],
    },
    RawChain {
        id: "I-131",
        name: "Iodine-131",
        start: "¹³¹I",
        end: "¹³¹Xe",
        description: Some("A short-lived fission product used in thyroid medicine."),
        steps: &[
            step("¹³¹I", "¹³¹Xe", BetaMinus, "8.02 days"),
            terminus("¹³¹Xe"),
        ],
    },
    RawChain {
        id: "Mo-99",
        name: "Molybdenum-99",
        start: "⁹⁹Mo",
        end: "⁹⁹Tc",
        description: Some(
            "⁹⁹Mo is used in generators to produce ⁹⁹ᵐTc, the most common medical radioisotope.",
        ),
        steps: &[
            step("⁹⁹Mo", "⁹⁹ᵐTc", BetaMinus, "66 hours"),
            step("⁹⁹ᵐTc", "⁹⁹Tc", Gamma, "6 hours"),
            RawStep {
                from: "⁹⁹Tc",
                to: None,
                mode: DecayMode::Stable,
                half_life: "Effectively Stable (211,000 years)",
            },
        ],
    },
];

static CHAIN_RECORDS: OnceLock<Vec<DecayChainRecord>> = OnceLock::new();

/// All embedded decay chains.
pub fn chains() -> &'static [DecayChainRecord] {
    CHAIN_RECORDS.get_or_init(|| {
        CHAINS
            .iter()
            .map(|c| DecayChainRecord {
                id: c.id.to_string(),
                name: c.name.to_string(),
                start: c.start.to_string(),
                end: c.end.to_string(),
                description: c.description.map(str::to_string),
                steps: c
                    .steps
                    .iter()
                    .map(|s| DecayStepRecord {
                        from: s.from.to_string(),
                        to: s.to.map(str::to_string),
                        mode: s.mode,
                        half_life_text: s.half_life.to_string(),
                    })
                    .collect(),
            })
            .collect()
    })
}

pub fn chain(id: &str) -> Result<&'static DecayChainRecord> {
    chains()
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| ChemLabError::UnknownChain(id.to_string()))
}

/// Steps through a decay chain one transition at a time.
pub struct ChainCursor<'a> {
    chain: &'a DecayChainRecord,
    index: usize,
}

impl<'a> ChainCursor<'a> {
    pub fn new(chain: &'a DecayChainRecord) -> Self {
        ChainCursor { chain, index: 0 }
    }

    pub fn chain(&self) -> &'a DecayChainRecord {
        self.chain
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'a DecayStepRecord {
        &self.chain.steps[self.index]
    }

    /// True once the cursor sits on the stable end of the chain.
    pub fn is_complete(&self) -> bool {
        self.current().to.is_none()
    }

    /// Moves one step down the chain; returns false at the stable end.
    pub fn advance(&mut self) -> bool {
        if self.index + 1 < self.chain.steps.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves one step back up the chain; returns false at the start.
    pub fn back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }
}
