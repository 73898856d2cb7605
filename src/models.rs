use serde::{Deserialize, Serialize};

/// A single seawater state sample.
///
/// Fields follow the crate-wide unit conventions:
/// - `sa`: Absolute Salinity [g/kg]
/// - `ct`: Conservative Temperature (ITS-90) [°C]
/// - `p`: sea pressure [dbar] (absolute pressure − 10.1325 dbar)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct State {
    pub sa: f64,
    pub ct: f64,
    pub p: f64,
}

/// Result of the 55-term Boussinesq density fit.
///
/// Satisfies `rho == r0 + r` exactly, in the evaluation order used to
/// construct it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoussinesqDensity {
    /// In-situ density [kg/m³].
    pub rho: f64,
    /// Boussinesq thermal expansion, −∂ρ/∂CT [kg/m³/K].
    pub a: f64,
    /// Boussinesq haline contraction, ∂ρ/∂SA [kg/m³/(g/kg)].
    pub b: f64,
    /// Vertical reference density profile, r0(0) = 0 [kg/m³].
    pub r0: f64,
    /// Density anomaly [kg/m³].
    pub r: f64,
}

/// Result of the 55-term stiffened density fit.
///
/// Satisfies `rho == r1 * rdot` exactly, in the evaluation order used to
/// construct it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StiffenedDensity {
    /// In-situ density [kg/m³].
    pub rho: f64,
    /// Boussinesq thermal expansion, −∂ρ/∂CT [kg/m³/K].
    pub a: f64,
    /// Boussinesq haline contraction, ∂ρ/∂SA [kg/m³/(g/kg)].
    pub b: f64,
    /// Vertical reference ratio, dimensionless, r1(0) = 1.
    pub r1: f64,
    /// Stiffened density [kg/m³].
    pub rdot: f64,
}

/// Result of the 55- or 75-term specific volume fits.
///
/// Satisfies `v == v0 + delta` exactly, in the evaluation order used to
/// construct it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpecificVolume {
    /// Specific volume [m³/kg].
    pub v: f64,
    /// Thermal expansion, (∂v/∂CT)/v [1/K].
    pub alpha: f64,
    /// Haline contraction, −(∂v/∂SA)/v [1/(g/kg)].
    pub beta: f64,
    /// Vertical reference specific volume profile, v0(0) = 0 [m³/kg].
    pub v0: f64,
    /// Specific volume anomaly [m³/kg].
    pub delta: f64,
}
