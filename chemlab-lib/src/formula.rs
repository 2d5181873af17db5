use crate::error::{ChemLabError, Result};

/// Standard atomic weights (g/mol) for the elements the lab works with.
const ELEMENT_MASSES: &[(&str, f64)] = &[
    ("H", 1.008),
    ("He", 4.0026),
    ("Li", 6.94),
    ("Be", 9.0122),
    ("B", 10.81),
    ("C", 12.011),
    ("N", 14.007),
    ("O", 15.999),
    ("F", 18.998),
    ("Ne", 20.180),
    ("Na", 22.990),
    ("Mg", 24.305),
    ("Al", 26.982),
    ("Si", 28.085),
    ("P", 30.974),
    ("S", 32.06),
    ("Cl", 35.45),
    ("Ar", 39.948),
    ("K", 39.098),
    ("Ca", 40.078),
    ("Sc", 44.956),
    ("Ti", 47.867),
    ("V", 50.942),
    ("Cr", 51.996),
    ("Mn", 54.938),
    ("Fe", 55.845),
    ("Co", 58.933),
    ("Ni", 58.693),
    ("Cu", 63.546),
    ("Zn", 65.38),
    ("Br", 79.904),
    ("Sr", 87.62),
    ("Mo", 95.95),
    ("Ag", 107.87),
    ("Sn", 118.71),
    ("I", 126.90),
    ("Ba", 137.33),
    ("W", 183.84),
    ("Pt", 195.08),
    ("Au", 196.97),
    ("Hg", 200.59),
    ("Pb", 207.2),
    ("U", 238.03),
];

/// Atomic weight of one element symbol.
pub fn element_mass(symbol: &str) -> Result<f64> {
    ELEMENT_MASSES
        .iter()
        .find(|&&(sym, _)| sym == symbol)
        .map(|&(_, mass)| mass)
        .ok_or_else(|| ChemLabError::UnknownElement(symbol.to_string()))
}

/// Computes the formula weight (g/mol) of a chemical formula.
///
/// Supports nested parentheses and fractional or scientific-notation
/// subscripts, e.g. `"Mn(SO4)2(H2O)7"` or `"Fe0.7Mg0.3O"`.
pub fn formula_weight(formula: &str) -> Result<f64> {
    let stripped: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(ChemLabError::InvalidFormula("empty formula".to_string()));
    }
    let mut parser = Parser {
        chars: stripped.chars().collect(),
        pos: 0,
    };
    let weight = parser.group()?;
    if parser.pos != parser.chars.len() {
        return Err(ChemLabError::InvalidFormula(format!(
            "unexpected '{}' at position {}",
            parser.chars[parser.pos], parser.pos
        )));
    }
    Ok(weight)
}

/// Returns true if the formula parses.
pub fn validate_formula(formula: &str) -> bool {
    formula_weight(formula).is_ok()
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Parses a run of `Element count` and `( group ) count` terms.
    fn group(&mut self) -> Result<f64> {
        let mut weight = 0.0;
        loop {
            match self.peek() {
                Some('(') => {
                    self.pos += 1;
                    let inner = self.group()?;
                    if self.peek() != Some(')') {
                        return Err(ChemLabError::InvalidFormula(
                            "expected closing parenthesis".to_string(),
                        ));
                    }
                    self.pos += 1;
                    weight += inner * self.count()?;
                }
                Some(c) if c.is_ascii_uppercase() => {
                    let symbol = self.symbol();
                    weight += element_mass(&symbol)? * self.count()?;
                }
                _ => break,
            }
        }
        Ok(weight)
    }

    fn symbol(&mut self) -> String {
        let start = self.pos;
        self.pos += 1;
        while matches!(self.peek(), Some(c) if c.is_ascii_lowercase()) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// Optional subscript after an element or group; defaults to 1.
    fn count(&mut self) -> Result<f64> {
        if !matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            return Ok(1.0);
        }
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.peek() == Some('.') {
            self.pos += 1;
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some('+' | '-')) {
                self.pos += 1;
            }
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        let raw: String = self.chars[start..self.pos].iter().collect();
        // A bare leading dot reads as "0.x"
        let raw = if raw.starts_with('.') {
            format!("0{raw}")
        } else {
            raw
        };
        raw.parse::<f64>()
            .map_err(|_| ChemLabError::InvalidFormula(format!("invalid count '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_water() {
        assert_relative_eq!(formula_weight("H2O").unwrap(), 18.015, epsilon = 0.001);
    }

    #[test]
    fn test_single_atoms() {
        assert_relative_eq!(formula_weight("NaCl").unwrap(), 58.44, epsilon = 0.01);
    }

    #[test]
    fn test_nested_parens() {
        // Mn + 2*(S + 4*O) + 7*(2*H + O)
        let expected = 54.938 + 2.0 * (32.06 + 4.0 * 15.999) + 7.0 * (2.0 * 1.008 + 15.999);
        assert_relative_eq!(
            formula_weight("Mn(SO4)2(H2O)7").unwrap(),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_fractional_subscript() {
        let expected = 0.7 * 55.845 + 0.3 * 24.305 + 15.999;
        assert_relative_eq!(
            formula_weight("Fe0.7Mg0.3O").unwrap(),
            expected,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            formula_weight("Fe.7Mg.3O").unwrap(),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_scientific_notation() {
        let expected = 1e-5 * 65.38 + 3.0 * 55.845 + 4.0 * 15.999;
        assert_relative_eq!(
            formula_weight("Zn1.e-5Fe3O4").unwrap(),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_case_matters() {
        // CO = carbon monoxide, Co = cobalt
        assert_relative_eq!(formula_weight("CO").unwrap(), 28.01, epsilon = 0.01);
        assert_relative_eq!(formula_weight("Co").unwrap(), 58.933, epsilon = 0.001);
    }

    #[test]
    fn test_invalid() {
        assert!(formula_weight("co").is_err());
        assert!(formula_weight("Xx").is_err());
        assert!(formula_weight("(H2O").is_err());
        assert!(formula_weight("").is_err());
    }

    #[test]
    fn test_validate() {
        assert!(validate_formula("CaCO3"));
        assert!(!validate_formula("Qq2"));
    }
}
