use std::thread;

use approx::assert_relative_eq;
use chemlab::chemlab_data::Phase;
use chemlab::{Catalog, ChemLabError};

#[test]
fn test_builtin_counts() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.chemicals().len(), 30);
    assert_eq!(catalog.reactions().len(), 13);
}

#[test]
fn test_chemical_lookup() {
    let catalog = Catalog::builtin();
    let water = catalog.chemical("H2O").unwrap();
    assert_eq!(water.name, "Water");
    assert_eq!(water.phase, Phase::Liquid);
    assert_relative_eq!(water.molar_mass, 18.015, epsilon = 0.001);
    assert_eq!(water.density, Some(1.0));
}

#[test]
fn test_molar_mass_lookup() {
    let catalog = Catalog::builtin();
    assert_relative_eq!(catalog.molar_mass("NaOH").unwrap(), 39.997, epsilon = 0.001);
    assert_relative_eq!(catalog.molar_mass("CaCO3").unwrap(), 100.087, epsilon = 0.001);
}

#[test]
fn test_unknown_chemical() {
    let catalog = Catalog::builtin();
    assert!(matches!(
        catalog.chemical("unobtainium"),
        Err(ChemLabError::UnknownChemical(_))
    ));
    assert!(!catalog.contains_chemical("unobtainium"));
}

#[test]
fn test_reaction_lookup() {
    let catalog = Catalog::builtin();
    let r = catalog.reaction("hydrogen-combustion").unwrap();
    assert_eq!(r.equation, "2H₂ + O₂ → 2H₂O");
    assert!(r.warning.as_deref().unwrap().contains("Explosive"));
    assert!(matches!(
        catalog.reaction("philosophers-stone"),
        Err(ChemLabError::UnknownReaction(_))
    ));
}

#[test]
fn test_reactions_reference_known_chemicals() {
    let catalog = Catalog::builtin();
    for reaction in catalog.reactions() {
        for term in reaction.reactants.iter().chain(&reaction.products) {
            assert!(
                catalog.contains_chemical(&term.chemical_id),
                "reaction '{}' references unknown chemical '{}'",
                reaction.id,
                term.chemical_id
            );
            assert!(term.coefficient > 0.0);
        }
    }
}

#[test]
fn test_conditions_carried_as_data() {
    let catalog = Catalog::builtin();
    let haber = catalog.reaction("haber-ammonia").unwrap();
    let conditions = haber.conditions.unwrap();
    assert_relative_eq!(conditions.temp_c.unwrap().min, 400.0);
    assert_relative_eq!(conditions.pressure_atm.unwrap().min, 150.0);
    assert!(catalog.reaction("neutralization-hcl-naoh").unwrap().conditions.is_none());
}

#[test]
fn test_database_export_is_complete() {
    let db = chemlab::database();
    assert_eq!(db.chemicals.len(), 30);
    assert_eq!(db.reactions.len(), 13);
    assert!(!db.nuclides.is_empty());
    assert!(!db.decay_chains.is_empty());
    assert!(!db.isotope_masses.is_empty());
    assert_eq!(db.shield_materials.len(), 6);
}

#[test]
fn test_concurrent_builtin_lookup() {
    let mut handles = Vec::new();
    for _ in 0..8 {
        handles.push(thread::spawn(|| {
            let catalog = Catalog::builtin();
            assert_eq!(catalog.chemical("Fe").unwrap().name, "Iron");
            assert!(catalog.molar_mass("Zn").unwrap() > 65.0);
            assert_eq!(catalog.reaction("haber-ammonia").unwrap().products.len(), 1);
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}
