/// Ideal gas constant (L·atm/(mol·K))
pub const GAS_CONSTANT_L_ATM: f64 = 0.0821;

/// 0 °C in kelvin
pub const CELSIUS_OFFSET_K: f64 = 273.15;

/// Mole quantities below this are treated as zero.
pub const MOLE_EPSILON: f64 = 1e-6;

/// Proton rest mass (u)
pub const PROTON_MASS_U: f64 = 1.00727647;

/// Neutron rest mass (u)
pub const NEUTRON_MASS_U: f64 = 1.00866492;

/// Mass-energy conversion (MeV per u)
pub const U_TO_MEV: f64 = 931.494102;
