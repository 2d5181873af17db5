//! Embedded educational chemical and reaction tables.

use chemlab_data::{
    ChemicalRecord, ConditionRange, Phase, ReactionConditions, ReactionRecord, ReactionTerm,
};

pub(crate) struct RawChemical {
    id: &'static str,
    name: &'static str,
    formula: &'static str,
    phase: Phase,
    molar_mass: f64,
    density: Option<f64>,
}

pub(crate) struct RawReaction {
    id: &'static str,
    name: Option<&'static str>,
    reactants: &'static [(&'static str, f64)],
    products: &'static [(&'static str, f64)],
    equation: &'static str,
    description: &'static str,
    warning: Option<&'static str>,
    temp_c: Option<(f64, f64)>,
    pressure_atm: Option<(f64, f64)>,
}

const fn chem(
    id: &'static str,
    name: &'static str,
    formula: &'static str,
    phase: Phase,
    molar_mass: f64,
    density: Option<f64>,
) -> RawChemical {
    RawChemical {
        id,
        name,
        formula,
        phase,
        molar_mass,
        density,
    }
}

pub(crate) const CHEMICALS: &[RawChemical] = &[
    // Gases
    chem("H2", "Hydrogen", "H₂", Phase::Gas, 2.016, None),
    chem("O2", "Oxygen", "O₂", Phase::Gas, 31.998, None),
    chem("N2", "Nitrogen", "N₂", Phase::Gas, 28.014, None),
    chem("Cl2", "Chlorine", "Cl₂", Phase::Gas, 70.906, None),
    chem("CO2", "Carbon dioxide", "CO₂", Phase::Gas, 44.009, None),
    chem("CH4", "Methane", "CH₄", Phase::Gas, 16.043, None),
    chem("NH3", "Ammonia", "NH₃", Phase::Gas, 17.031, None),
    // Liquids
    chem("H2O", "Water", "H₂O", Phase::Liquid, 18.015, Some(1.0)),
    chem("CH3COOH", "Acetic acid", "CH₃COOH", Phase::Liquid, 60.052, Some(1.049)),
    // Aqueous solutions
    chem("HCl", "Hydrochloric acid", "HCl", Phase::Aqueous, 36.461, None),
    chem("H2SO4", "Sulfuric acid", "H₂SO₄", Phase::Aqueous, 98.079, None),
    chem("NaCl", "Sodium chloride", "NaCl", Phase::Aqueous, 58.443, None),
    chem("CH3COONa", "Sodium acetate", "CH₃COONa", Phase::Aqueous, 82.034, None),
    chem("NaNO3", "Sodium nitrate", "NaNO₃", Phase::Aqueous, 84.995, None),
    chem("Na2SO4", "Sodium sulfate", "Na₂SO₄", Phase::Aqueous, 142.042, None),
    chem("ZnCl2", "Zinc chloride", "ZnCl₂", Phase::Aqueous, 136.286, None),
    chem("AgNO3", "Silver nitrate", "AgNO₃", Phase::Aqueous, 169.873, None),
    // Solids
    chem("Na", "Sodium", "Na", Phase::Solid, 22.990, Some(0.968)),
    chem("NaOH", "Sodium hydroxide", "NaOH", Phase::Solid, 39.997, Some(2.13)),
    chem("NaHCO3", "Sodium bicarbonate", "NaHCO₃", Phase::Solid, 84.007, Some(2.20)),
    chem("Mg", "Magnesium", "Mg", Phase::Solid, 24.305, Some(1.738)),
    chem("MgO", "Magnesium oxide", "MgO", Phase::Solid, 40.304, Some(3.58)),
    chem("C", "Carbon (graphite)", "C", Phase::Solid, 12.011, Some(2.26)),
    chem("CaCO3", "Calcium carbonate", "CaCO₃", Phase::Solid, 100.087, Some(2.71)),
    chem("CaO", "Calcium oxide", "CaO", Phase::Solid, 56.077, Some(3.34)),
    chem("Zn", "Zinc", "Zn", Phase::Solid, 65.38, Some(7.14)),
    chem("Fe", "Iron", "Fe", Phase::Solid, 55.845, Some(7.87)),
    chem("S", "Sulfur", "S", Phase::Solid, 32.065, Some(2.07)),
    chem("FeS", "Iron(II) sulfide", "FeS", Phase::Solid, 87.910, Some(4.84)),
    chem("AgCl", "Silver chloride", "AgCl", Phase::Solid, 143.321, Some(5.56)),
];

pub(crate) const REACTIONS: &[RawReaction] = &[
    RawReaction {
        id: "hydrogen-combustion",
        name: Some("Combustion of hydrogen"),
        reactants: &[("H2", 2.0), ("O2", 1.0)],
        products: &[("H2O", 2.0)],
        equation: "2H₂ + O₂ → 2H₂O",
        description: "Hydrogen burns in oxygen to form water, releasing a large amount of energy.",
        warning: Some("Explosive: hydrogen-oxygen mixtures ignite violently."),
        temp_c: None,
        pressure_atm: None,
    },
    RawReaction {
        id: "methane-combustion",
        name: Some("Combustion of methane"),
        reactants: &[("CH4", 1.0), ("O2", 2.0)],
        products: &[("CO2", 1.0), ("H2O", 2.0)],
        equation: "CH₄ + 2O₂ → CO₂ + 2H₂O",
        description: "Complete combustion of natural gas, producing carbon dioxide and water.",
        warning: Some("Flammable gas."),
        temp_c: None,
        pressure_atm: None,
    },
    RawReaction {
        id: "carbon-combustion",
        name: Some("Combustion of carbon"),
        reactants: &[("C", 1.0), ("O2", 1.0)],
        products: &[("CO2", 1.0)],
        equation: "C + O₂ → CO₂",
        description: "Carbon burns in excess oxygen to form carbon dioxide.",
        warning: None,
        temp_c: None,
        pressure_atm: None,
    },
    RawReaction {
        id: "magnesium-combustion",
        name: Some("Combustion of magnesium"),
        reactants: &[("Mg", 2.0), ("O2", 1.0)],
        products: &[("MgO", 2.0)],
        equation: "2Mg + O₂ → 2MgO",
        description: "Magnesium burns with an intense white light, forming magnesium oxide.",
        warning: Some("Emits intense UV light; do not look directly at burning magnesium."),
        temp_c: None,
        pressure_atm: None,
    },
    RawReaction {
        id: "neutralization-hcl-naoh",
        name: Some("Acid-base neutralization"),
        reactants: &[("HCl", 1.0), ("NaOH", 1.0)],
        products: &[("NaCl", 1.0), ("H2O", 1.0)],
        equation: "HCl + NaOH → NaCl + H₂O",
        description: "A strong acid and a strong base neutralize to salt and water.",
        warning: None,
        temp_c: None,
        pressure_atm: None,
    },
    RawReaction {
        id: "neutralization-h2so4-naoh",
        name: Some("Sulfuric acid neutralization"),
        reactants: &[("H2SO4", 1.0), ("NaOH", 2.0)],
        products: &[("Na2SO4", 1.0), ("H2O", 2.0)],
        equation: "H₂SO₄ + 2NaOH → Na₂SO₄ + 2H₂O",
        description: "A diprotic acid consumes two equivalents of base.",
        warning: None,
        temp_c: None,
        pressure_atm: None,
    },
    RawReaction {
        id: "sodium-water",
        name: Some("Sodium in water"),
        reactants: &[("Na", 2.0), ("H2O", 2.0)],
        products: &[("NaOH", 2.0), ("H2", 1.0)],
        equation: "2Na + 2H₂O → 2NaOH + H₂",
        description: "An alkali metal displaces hydrogen from water, forming the hydroxide.",
        warning: Some("Violent: sodium reacts explosively with water."),
        temp_c: None,
        pressure_atm: None,
    },
    RawReaction {
        id: "zinc-hydrochloric",
        name: Some("Zinc in hydrochloric acid"),
        reactants: &[("Zn", 1.0), ("HCl", 2.0)],
        products: &[("ZnCl2", 1.0), ("H2", 1.0)],
        equation: "Zn + 2HCl → ZnCl₂ + H₂",
        description: "A single-displacement reaction evolving hydrogen gas.",
        warning: None,
        temp_c: None,
        pressure_atm: None,
    },
    RawReaction {
        id: "calcium-carbonate-decomposition",
        name: Some("Thermal decomposition of limestone"),
        reactants: &[("CaCO3", 1.0)],
        products: &[("CaO", 1.0), ("CO2", 1.0)],
        equation: "CaCO₃ → CaO + CO₂",
        description: "Limestone decomposes into quicklime and carbon dioxide when heated.",
        warning: None,
        temp_c: Some((825.0, 1200.0)),
        pressure_atm: None,
    },
    RawReaction {
        id: "iron-sulfur-synthesis",
        name: Some("Synthesis of iron sulfide"),
        reactants: &[("Fe", 1.0), ("S", 1.0)],
        products: &[("FeS", 1.0)],
        equation: "Fe + S → FeS",
        description: "Iron and sulfur combine into iron(II) sulfide when heated.",
        warning: None,
        temp_c: Some((250.0, 600.0)),
        pressure_atm: None,
    },
    RawReaction {
        id: "baking-soda-vinegar",
        name: Some("Baking soda and vinegar"),
        reactants: &[("NaHCO3", 1.0), ("CH3COOH", 1.0)],
        products: &[("CH3COONa", 1.0), ("H2O", 1.0), ("CO2", 1.0)],
        equation: "NaHCO₃ + CH₃COOH → CH₃COONa + H₂O + CO₂",
        description: "The classic kitchen reaction, fizzing as carbon dioxide escapes.",
        warning: None,
        temp_c: None,
        pressure_atm: None,
    },
    RawReaction {
        id: "haber-ammonia",
        name: Some("Haber process"),
        reactants: &[("N2", 1.0), ("H2", 3.0)],
        products: &[("NH3", 2.0)],
        equation: "N₂ + 3H₂ → 2NH₃",
        description: "Industrial ammonia synthesis over an iron catalyst.",
        warning: None,
        temp_c: Some((400.0, 500.0)),
        pressure_atm: Some((150.0, 300.0)),
    },
    RawReaction {
        id: "silver-chloride-precipitation",
        name: Some("Silver chloride precipitation"),
        reactants: &[("AgNO3", 1.0), ("NaCl", 1.0)],
        products: &[("AgCl", 1.0), ("NaNO3", 1.0)],
        equation: "AgNO₃ + NaCl → AgCl↓ + NaNO₃",
        description: "A double-displacement reaction dropping a white curdy precipitate.",
        warning: None,
        temp_c: None,
        pressure_atm: None,
    },
];

pub(crate) fn chemical_records() -> Vec<ChemicalRecord> {
    CHEMICALS
        .iter()
        .map(|c| ChemicalRecord {
            id: c.id.to_string(),
            name: c.name.to_string(),
            formula: c.formula.to_string(),
            phase: c.phase,
            molar_mass: c.molar_mass,
            density: c.density,
        })
        .collect()
}

fn terms(raw: &[(&str, f64)]) -> Vec<ReactionTerm> {
    raw.iter()
        .map(|&(id, coefficient)| ReactionTerm {
            chemical_id: id.to_string(),
            coefficient,
        })
        .collect()
}

pub(crate) fn reaction_records() -> Vec<ReactionRecord> {
    REACTIONS
        .iter()
        .map(|r| {
            let conditions = if r.temp_c.is_some() || r.pressure_atm.is_some() {
                Some(ReactionConditions {
                    temp_c: r.temp_c.map(|(min, max)| ConditionRange { min, max }),
                    pressure_atm: r.pressure_atm.map(|(min, max)| ConditionRange { min, max }),
                })
            } else {
                None
            };
            ReactionRecord {
                id: r.id.to_string(),
                name: r.name.map(str::to_string),
                reactants: terms(r.reactants),
                products: terms(r.products),
                equation: r.equation.to_string(),
                description: r.description.to_string(),
                warning: r.warning.map(str::to_string),
                conditions,
            }
        })
        .collect()
}
