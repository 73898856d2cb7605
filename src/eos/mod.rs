//! Polynomial TEOS-10 equation of state (Roquet et al., 2014).
//!
//! This module provides the four closed-form polynomial fits to the TEOS-10
//! reference equation of state:
//! - [`boussinesq::density_boussinesq`]: in-situ density, 55-term fit, additive
//!   decomposition ρ = r0 + r (Boussinesq ocean models)
//! - [`stiffened::density_stiffened`]: in-situ density, 55-term fit,
//!   multiplicative decomposition ρ = r1·ṙ (stiffened ocean models)
//! - [`specvol55::specific_volume_55`]: specific volume, 55-term fit, v = v0 + δ
//! - [`specvol75::specific_volume_75`]: specific volume, 75-term fit, v = v0 + δ
//!
//! Units conventions:
//! - SA: Absolute Salinity [g/kg]
//! - CT: Conservative Temperature (ITS-90) [°C]
//! - p: sea pressure [dbar], i.e. absolute pressure − 10.1325 dbar
//! - density outputs in kg/m³, specific volume in m³/kg
//!
//! The fits were made in a restricted region of (SA, CT, p) space, the
//! "oceanographic funnel" of McDougall et al. (2011). None of the evaluators
//! validate funnel membership: out-of-domain input propagates as NaN/Inf per
//! IEEE arithmetic (SA below −ΔS makes the salinity root undefined, and
//! SA = −ΔS makes the haline coefficients singular; ΔS is 32 g/kg for the
//! density fits and 24 g/kg for the specific-volume fits). Callers needing a
//! funnel check should apply one before evaluation, e.g. GSW `infunnel`.
//!
//! The evaluation order of every polynomial (Horner nesting per pressure
//! layer) is fixed by the published code. It is not a free simplification:
//! reassociating the arithmetic changes the last digits that the published
//! check values validate.
//!
//! # References
//! - Roquet, F., Madec, G., McDougall, T. J., Barker, P. M., 2014: Accurate
//!   polynomial expressions for the density and specific volume of seawater
//!   using the TEOS-10 standard. Ocean Modelling.
//! - McDougall, T. J., D. R. Jackett, D. G. Wright and R. Feistel, 2003:
//!   Accurate and computationally efficient algorithms for potential
//!   temperature and density of seawater. J. Atmos. Oceanic Technol., 20.

pub mod boussinesq;
pub mod specvol55;
pub mod specvol75;
pub mod stiffened;

/// Salinity reduction scale SAu = 40·35.16504/35 [g/kg].
pub const SAU: f64 = 40.0 * 35.16504 / 35.0;
/// Temperature reduction scale CTu [°C].
pub const CTU: f64 = 40.0;
/// Pressure reduction scale Zu [dbar].
pub const ZU: f64 = 1e4;
/// Salinity offset ΔS of the density fits [g/kg]; keeps the salinity root
/// real down to SA = −32.
pub const DELTA_S: f64 = 32.0;
/// Salinity offset of the specific-volume fits [g/kg]. The two families were
/// fitted with different offsets (GSW uses the same 24 g/kg in its 75-term
/// `specvol`); the published check values are only reproduced with this one.
pub const DELTA_S_SPECVOL: f64 = 24.0;

/// Reduced state variables: x = sqrt((SA+ΔS)/SAu), y = CT/CTu, z = p/Zu.
/// For SA < −ΔS the square root argument is negative and x is NaN; that NaN
/// is deliberately allowed to propagate through the downstream polynomials.
#[inline]
fn reduced_with_offset(sa: f64, ct: f64, p: f64, delta_s: f64) -> (f64, f64, f64) {
    let x = ((sa + delta_s) / SAU).sqrt();
    let y = ct / CTU;
    let z = p / ZU;
    (x, y, z)
}

/// Reduced variables for the density fits (ΔS = 32 g/kg).
#[inline]
pub(crate) fn reduced(sa: f64, ct: f64, p: f64) -> (f64, f64, f64) {
    reduced_with_offset(sa, ct, p, DELTA_S)
}

/// Reduced variables for the specific-volume fits (ΔS = 24 g/kg).
#[inline]
pub(crate) fn reduced_specvol(sa: f64, ct: f64, p: f64) -> (f64, f64, f64) {
    reduced_with_offset(sa, ct, p, DELTA_S_SPECVOL)
}

// Vertical reference profile of specific volume, shared verbatim by the
// 55- and 75-term fits.
const V00: f64 = -4.4015007269e-05;
const V01: f64 = 6.9232335784e-06;
const V02: f64 = -7.5004675975e-07;
const V03: f64 = 1.7009109288e-08;
const V04: f64 = -1.6884162004e-08;
const V05: f64 = 1.9613503930e-09;

/// Vertical reference profile of specific volume v0(z) [m³/kg], with
/// v0(0) = 0. `z` is reduced pressure p/Zu.
#[inline]
pub(crate) fn specvol_ref_profile(z: f64) -> f64 {
    (((((V05 * z + V04) * z + V03) * z + V02) * z + V01) * z + V00) * z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_variables_at_check_point() {
        let (x, y, z) = reduced(30.0, 10.0, 1000.0);
        // (30+32)/(40*35.16504/35) = 1.542..., sqrt ~ 1.242
        assert!((x - (62.0 / SAU).sqrt()).abs() < 1e-15);
        assert!((y - 0.25).abs() < 1e-15);
        assert!((z - 0.1).abs() < 1e-15);
    }

    #[test]
    fn salinity_root_is_nan_below_minus_delta_s() {
        let (x, _, _) = reduced(-33.0, 0.0, 0.0);
        assert!(x.is_nan());
        let (x, _, _) = reduced_specvol(-25.0, 0.0, 0.0);
        assert!(x.is_nan());
    }

    #[test]
    fn families_use_their_own_salinity_offset() {
        let (x, _, _) = reduced(-32.0, 0.0, 0.0);
        assert_eq!(x, 0.0);
        let (x, _, _) = reduced_specvol(-24.0, 0.0, 0.0);
        assert_eq!(x, 0.0);
    }

    #[test]
    fn reference_profile_vanishes_at_surface() {
        assert_eq!(specvol_ref_profile(0.0), 0.0);
    }
}
