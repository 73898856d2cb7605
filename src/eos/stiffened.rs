//! 55-term in-situ density fit, stiffened (multiplicative) decomposition.

use super::reduced;
use crate::models::StiffenedDensity;

// Vertical reference ratio, r1(z) with r1(0) = 1 (dimensionless).
const R10: f64 = 4.5238001132e-02;
const R11: f64 = -5.0691457704e-03;
const R12: f64 = 2.1990865986e-04;
const R13: f64 = 6.2587720090e-05;
const R14: f64 = 1.5194795322e-05;
const R15: f64 = -1.6777531159e-06;

// Stiffened density, 55 terms. An independent fit; the coefficients differ
// from the Boussinesq anomaly tables even where the roles match.
const R000: f64 = 8.0185969881e+02;
const R100: f64 = 8.6694399997e+02;
const R200: f64 = -1.7869886805e+03;
const R300: f64 = 2.0381548497e+03;
const R400: f64 = -1.2853207957e+03;
const R500: f64 = 4.3240996619e+02;
const R600: f64 = -6.0597695001e+01;
const R010: f64 = 2.6018938392e+01;
const R110: f64 = -6.5349779146e+01;
const R210: f64 = 8.1938301569e+01;
const R310: f64 = -5.7075042739e+01;
const R410: f64 = 1.7778970855e+01;
const R510: f64 = -1.9385269480e+00;
const R020: f64 = -3.7047586837e+01;
const R120: f64 = 6.1469677558e+01;
const R220: f64 = -6.0273564480e+01;
const R320: f64 = 2.9086147388e+01;
const R420: f64 = -5.4641145446e+00;
const R030: f64 = 2.1645370860e+01;
const R130: f64 = -3.3415215649e+01;
const R230: f64 = 1.9694119706e+01;
const R330: f64 = -3.1710494147e+00;
const R040: f64 = -8.3587258634e+00;
const R140: f64 = 1.1301873278e+01;
const R240: f64 = -5.3494903247e+00;
const R050: f64 = 5.4258499460e-01;
const R150: f64 = 4.7964098705e-01;
const R060: f64 = -1.9098981559e-01;
const R001: f64 = 2.1989266031e+01;
const R101: f64 = -4.2043785414e+01;
const R201: f64 = 4.8565183521e+01;
const R301: f64 = -3.0473875108e+01;
const R401: f64 = 6.5025796369e+00;
const R011: f64 = -1.3731593003e+01;
const R111: f64 = -4.3667263842e+00;
const R211: f64 = 5.2899298884e+00;
const R311: f64 = -7.1323826203e-01;
const R021: f64 = 7.4843325711e+00;
const R121: f64 = 3.1442996192e+00;
const R221: f64 = -1.8141771987e+00;
const R031: f64 = -2.6010182316e+00;
const R131: f64 = -4.9866739215e-01;
const R041: f64 = 5.5882364387e-01;
const R002: f64 = 1.1144125393e+00;
const R102: f64 = -4.5413502768e+00;
const R202: f64 = 2.7242121539e+00;
const R012: f64 = 2.8508446713e+00;
const R112: f64 = -4.4471361300e-01;
const R022: f64 = -1.5059302816e+00;
const R003: f64 = 1.9817079368e-01;
const R103: f64 = -1.7905369937e-01;
const R013: f64 = 2.5254165600e-01;

// Thermal expansion; the assembled polynomial is scaled by r1.
const ALP000: f64 = -6.5047345980e-01;
const ALP100: f64 = 1.6337444787e+00;
const ALP200: f64 = -2.0484575392e+00;
const ALP300: f64 = 1.4268760685e+00;
const ALP400: f64 = -4.4447427136e-01;
const ALP500: f64 = 4.8463173700e-02;
const ALP010: f64 = 1.8523793418e+00;
const ALP110: f64 = -3.0734838779e+00;
const ALP210: f64 = 3.0136782240e+00;
const ALP310: f64 = -1.4543073694e+00;
const ALP410: f64 = 2.7320572723e-01;
const ALP020: f64 = -1.6234028145e+00;
const ALP120: f64 = 2.5061411737e+00;
const ALP220: f64 = -1.4770589780e+00;
const ALP320: f64 = 2.3782870611e-01;
const ALP030: f64 = 8.3587258634e-01;
const ALP130: f64 = -1.1301873278e+00;
const ALP230: f64 = 5.3494903247e-01;
const ALP040: f64 = -6.7823124325e-02;
const ALP140: f64 = -5.9955123381e-02;
const ALP050: f64 = 2.8648472338e-02;
const ALP001: f64 = 3.4328982507e-01;
const ALP101: f64 = 1.0916815960e-01;
const ALP201: f64 = -1.3224824721e-01;
const ALP301: f64 = 1.7830956551e-02;
const ALP011: f64 = -3.7421662855e-01;
const ALP111: f64 = -1.5721498096e-01;
const ALP211: f64 = 9.0708859933e-02;
const ALP021: f64 = 1.9507636737e-01;
const ALP121: f64 = 3.7400054411e-02;
const ALP031: f64 = -5.5882364387e-02;
const ALP002: f64 = -7.1271116782e-02;
const ALP102: f64 = 1.1117840325e-02;
const ALP012: f64 = 7.5296514078e-02;
const ALP003: f64 = -6.3135413999e-03;

// Haline contraction; the assembled polynomial is scaled by r1/x.
const BET000: f64 = 1.0785939671e+01;
const BET100: f64 = -4.4465045269e+01;
const BET200: f64 = 7.6072094337e+01;
const BET300: f64 = -6.3964420131e+01;
const BET400: f64 = 2.6898783594e+01;
const BET500: f64 = -4.5234968986e+00;
const BET010: f64 = -8.1303841476e-01;
const BET110: f64 = 2.0388435182e+00;
const BET210: f64 = -2.1302689715e+00;
const BET310: f64 = 8.8477644261e-01;
const BET410: f64 = -1.2058930400e-01;
const BET020: f64 = 7.6476477580e-01;
const BET120: f64 = -1.4997670675e+00;
const BET220: f64 = 1.0856114040e+00;
const BET320: f64 = -2.7192349143e-01;
const BET030: f64 = -4.1572985119e-01;
const BET130: f64 = 4.9004223351e-01;
const BET230: f64 = -1.1835625260e-01;
const BET040: f64 = 1.4061037779e-01;
const BET140: f64 = -1.3310958936e-01;
const BET050: f64 = 5.9673736141e-03;
const BET001: f64 = -5.2308076768e-01;
const BET101: f64 = 1.2084313165e+00;
const BET201: f64 = -1.1374069553e+00;
const BET301: f64 = 3.2360305476e-01;
const BET011: f64 = -5.4327900468e-02;
const BET111: f64 = 1.3162756682e-01;
const BET211: f64 = -2.6620905846e-02;
const BET021: f64 = 3.9119281064e-02;
const BET121: f64 = -4.5141568126e-02;
const BET031: f64 = -6.2040874705e-03;
const BET002: f64 = -5.6500454603e-02;
const BET102: f64 = 6.7785665385e-02;
const BET012: f64 = -5.5328304955e-03;
const BET003: f64 = -2.2276668383e-03;

/// In-situ density from the 55-term polynomial fit, in the multiplicative
/// (stiffened) decomposition ρ = r1·ṙ.
///
/// # Arguments
/// * `sa` - Absolute Salinity [g/kg]
/// * `ct` - Conservative Temperature (ITS-90) [°C]
/// * `p` - sea pressure [dbar]
///
/// # Returns
/// [`StiffenedDensity`] with in-situ density ρ, thermal expansion
/// a = −∂ρ/∂CT, haline contraction b = ∂ρ/∂SA, the dimensionless pressure
/// reference ratio r1 and the stiffened density ṙ.
///
/// Check values at SA = 30 g/kg, CT = 10 °C, p = 1000 dbar:
/// ρ = 1027.45140, a = 0.179649406, b = 0.765554495, r1 = 1.00447333,
/// ṙ = 1022.87574.
pub fn density_stiffened(sa: f64, ct: f64, p: f64) -> StiffenedDensity {
    let (x, y, z) = reduced(sa, ct, p);

    // vertical reference ratio
    let r1 = (((((R15 * z + R14) * z + R13) * z + R12) * z + R11) * z + R10) * z + 1.0;

    // stiffened density, Horner-nested per pressure layer
    let rz3 = R013 * y + R103 * x + R003;
    let rz2 = (R022 * y + R112 * x + R012) * y + (R202 * x + R102) * x + R002;
    let rz1 = (((R041 * y + R131 * x + R031) * y + (R221 * x + R121) * x + R021) * y
        + ((R311 * x + R211) * x + R111) * x
        + R011)
        * y
        + (((R401 * x + R301) * x + R201) * x + R101) * x
        + R001;
    let rz0 = (((((R060 * y + R150 * x + R050) * y + (R240 * x + R140) * x + R040) * y
        + ((R330 * x + R230) * x + R130) * x
        + R030)
        * y
        + (((R420 * x + R320) * x + R220) * x + R120) * x
        + R020)
        * y
        + ((((R510 * x + R410) * x + R310) * x + R210) * x + R110) * x
        + R010)
        * y
        + (((((R600 * x + R500) * x + R400) * x + R300) * x + R200) * x + R100) * x
        + R000;
    let rdot = ((rz3 * z + rz2) * z + rz1) * z + rz0;

    let rho = r1 * rdot;

    // thermal expansion a, scaled by the reference ratio
    let a = r1
        * (((ALP003 * z + ALP012 * y + ALP102 * x + ALP002) * z
            + ((ALP031 * y + ALP121 * x + ALP021) * y + (ALP211 * x + ALP111) * x + ALP011) * y
            + ((ALP301 * x + ALP201) * x + ALP101) * x
            + ALP001)
            * z
            + ((((ALP050 * y + ALP140 * x + ALP040) * y + (ALP230 * x + ALP130) * x + ALP030)
                * y
                + ((ALP320 * x + ALP220) * x + ALP120) * x
                + ALP020)
                * y
                + (((ALP410 * x + ALP310) * x + ALP210) * x + ALP110) * x
                + ALP010)
                * y
            + ((((ALP500 * x + ALP400) * x + ALP300) * x + ALP200) * x + ALP100) * x
            + ALP000);

    // haline contraction b, scaled by r1 and divided by x
    let b = ((BET003 * z + BET012 * y + BET102 * x + BET002) * z
        + ((BET031 * y + BET121 * x + BET021) * y + (BET211 * x + BET111) * x + BET011) * y
        + ((BET301 * x + BET201) * x + BET101) * x
        + BET001)
        * z
        + ((((BET050 * y + BET140 * x + BET040) * y + (BET230 * x + BET130) * x + BET030) * y
            + ((BET320 * x + BET220) * x + BET120) * x
            + BET020)
            * y
            + (((BET410 * x + BET310) * x + BET210) * x + BET110) * x
            + BET010)
            * y
        + ((((BET500 * x + BET400) * x + BET300) * x + BET200) * x + BET100) * x
        + BET000;
    let b = b * r1 / x;

    StiffenedDensity { rho, a, b, r1, rdot }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matches_published_check_values() {
        let d = density_stiffened(30.0, 10.0, 1000.0);
        assert_relative_eq!(d.rho, 1027.45140, max_relative = 1e-8);
        assert_relative_eq!(d.a, 0.179649406, max_relative = 1e-8);
        assert_relative_eq!(d.b, 0.765554495, max_relative = 1e-8);
        assert_relative_eq!(d.r1, 1.00447333, max_relative = 1e-8);
        assert_relative_eq!(d.rdot, 1022.87574, max_relative = 1e-8);
    }

    #[test]
    fn decomposition_is_exact() {
        let d = density_stiffened(35.0, 4.0, 2000.0);
        assert_eq!(d.rho, d.r1 * d.rdot);
    }

    #[test]
    fn reference_ratio_is_one_at_surface() {
        let d = density_stiffened(34.0, 12.0, 0.0);
        assert_eq!(d.r1, 1.0);
        assert_eq!(d.rho, d.rdot);
    }

    #[test]
    fn reference_ratio_grows_with_pressure() {
        let shallow = density_stiffened(35.0, 10.0, 100.0);
        let deep = density_stiffened(35.0, 10.0, 4000.0);
        assert!(deep.r1 > shallow.r1);
        assert!(shallow.r1 > 1.0);
    }
}
