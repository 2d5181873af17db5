use std::fmt;

#[derive(Debug)]
pub enum ChemLabError {
    UnknownChemical(String),
    UnknownReaction(String),
    UnknownElement(String),
    UnknownNuclide { z: u16, n: u16 },
    UnknownIsotope(String),
    UnknownChain(String),
    UnknownMaterial(String),
    InvalidFormula(String),
    NonPositivePressure(f64),
    NonPositiveHalfLife(f64),
    NegativeThickness(f64),
    DataError(String),
}

pub type Result<T> = std::result::Result<T, ChemLabError>;

impl fmt::Display for ChemLabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownChemical(id) => write!(f, "unknown chemical: {id}"),
            Self::UnknownReaction(id) => write!(f, "unknown reaction: {id}"),
            Self::UnknownElement(sym) => write!(f, "unknown element: {sym}"),
            Self::UnknownNuclide { z, n } => write!(f, "unknown nuclide: Z={z}, N={n}"),
            Self::UnknownIsotope(id) => write!(f, "unknown isotope: {id}"),
            Self::UnknownChain(id) => write!(f, "unknown decay chain: {id}"),
            Self::UnknownMaterial(id) => write!(f, "unknown shield material: {id}"),
            Self::InvalidFormula(msg) => write!(f, "invalid chemical formula: {msg}"),
            Self::NonPositivePressure(p) => {
                write!(f, "pressure must be positive, got {p} atm")
            }
            Self::NonPositiveHalfLife(hl) => {
                write!(f, "half-life must be positive, got {hl}")
            }
            Self::NegativeThickness(x) => write!(f, "thickness must be >= 0, got {x} cm"),
            Self::DataError(msg) => write!(f, "data error: {msg}"),
        }
    }
}

impl std::error::Error for ChemLabError {}
