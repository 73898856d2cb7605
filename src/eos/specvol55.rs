//! 55-term specific volume fit.

use super::{reduced_specvol, specvol_ref_profile};
use crate::models::SpecificVolume;

// Specific volume anomaly, 55 terms. VIJK multiplies x^I y^J z^K.
const V000: f64 = 1.0772899069e-03;
const V100: f64 = -3.1263658781e-04;
const V200: f64 = 6.7615860683e-04;
const V300: f64 = -8.6127884515e-04;
const V400: f64 = 5.9010812596e-04;
const V500: f64 = -2.1503943538e-04;
const V600: f64 = 3.2678954455e-05;
const V010: f64 = -1.4949652640e-05;
const V110: f64 = 3.1866349188e-05;
const V210: f64 = -3.8070687610e-05;
const V310: f64 = 2.9818473563e-05;
const V410: f64 = -1.0011321965e-05;
const V510: f64 = 1.0751931163e-06;
const V020: f64 = 2.7546851539e-05;
const V120: f64 = -3.6597334199e-05;
const V220: f64 = 3.4489154625e-05;
const V320: f64 = -1.7663254122e-05;
const V420: f64 = 3.5965131935e-06;
const V030: f64 = -1.6506828994e-05;
const V130: f64 = 2.4412359055e-05;
const V230: f64 = -1.4606740723e-05;
const V330: f64 = 2.3293406656e-06;
const V040: f64 = 6.7896174634e-06;
const V140: f64 = -8.7951832993e-06;
const V240: f64 = 4.4249040774e-06;
const V050: f64 = -7.2535743349e-07;
const V150: f64 = -3.4680559205e-07;
const V060: f64 = 1.9041365570e-07;
const V001: f64 = -1.6889436589e-05;
const V101: f64 = 2.1106556158e-05;
const V201: f64 = -2.1322804368e-05;
const V301: f64 = 1.7347655458e-05;
const V401: f64 = -4.3209400767e-06;
const V011: f64 = 1.5355844621e-05;
const V111: f64 = 2.0914122241e-06;
const V211: f64 = -5.7751479725e-06;
const V311: f64 = 1.0767234341e-06;
const V021: f64 = -9.6659393016e-06;
const V121: f64 = -7.0686982208e-07;
const V221: f64 = 1.4488066593e-06;
const V031: f64 = 3.1134283336e-06;
const V131: f64 = 7.9562529879e-08;
const V041: f64 = -5.6590253863e-07;
const V002: f64 = 1.0500241168e-06;
const V102: f64 = 1.9600661704e-06;
const V202: f64 = -2.1666693382e-06;
const V012: f64 = -3.8541359685e-06;
const V112: f64 = 1.0157632247e-06;
const V022: f64 = 1.7178343158e-06;
const V003: f64 = -4.1503454190e-07;
const V103: f64 = 3.5627020989e-07;
const V013: f64 = -1.1293871415e-07;

// Thermal expansion; the assembled raw polynomial is divided by v.
const A000: f64 = -3.7374131601e-07;
const A100: f64 = 7.9665872970e-07;
const A200: f64 = -9.5176719025e-07;
const A300: f64 = 7.4546183908e-07;
const A400: f64 = -2.5028304913e-07;
const A500: f64 = 2.6879827908e-08;
const A010: f64 = 1.3773425769e-06;
const A110: f64 = -1.8298667100e-06;
const A210: f64 = 1.7244577313e-06;
const A310: f64 = -8.8316270612e-07;
const A410: f64 = 1.7982565968e-07;
const A020: f64 = -1.2380121746e-06;
const A120: f64 = 1.8309269291e-06;
const A220: f64 = -1.0955055542e-06;
const A320: f64 = 1.7470054992e-07;
const A030: f64 = 6.7896174634e-07;
const A130: f64 = -8.7951832993e-07;
const A230: f64 = 4.4249040774e-07;
const A040: f64 = -9.0669679187e-08;
const A140: f64 = -4.3350699006e-08;
const A050: f64 = 2.8562048354e-08;
const A001: f64 = 3.8389611552e-07;
const A101: f64 = 5.2285305603e-08;
const A201: f64 = -1.4437869931e-07;
const A301: f64 = 2.6918085852e-08;
const A011: f64 = -4.8329696508e-07;
const A111: f64 = -3.5343491104e-08;
const A211: f64 = 7.2440332965e-08;
const A021: f64 = 2.3350712502e-07;
const A121: f64 = 5.9671897409e-09;
const A031: f64 = -5.6590253863e-08;
const A002: f64 = -9.6353399212e-08;
const A102: f64 = 2.5394080617e-08;
const A012: f64 = 8.5891715792e-08;
const A003: f64 = -2.8234678537e-09;

// Haline contraction; the assembled raw polynomial is divided by x·v.
const B000: f64 = 3.8896161405e-06;
const B100: f64 = -1.6824629831e-05;
const B200: f64 = 3.2146372768e-05;
const B300: f64 = -2.9366928644e-05;
const B400: f64 = 1.3376886957e-05;
const B500: f64 = -2.4394186796e-06;
const B010: f64 = -3.9645988657e-07;
const B110: f64 = 9.4730026353e-07;
const B210: f64 = -1.1129447472e-06;
const B310: f64 = 4.9821679257e-07;
const B410: f64 = -6.6884182186e-08;
const B020: f64 = 4.5531965020e-07;
const B120: f64 = -8.5818216892e-07;
const B220: f64 = 6.5926332049e-07;
const B320: f64 = -1.7898168433e-07;
const B030: f64 = -3.0372230734e-07;
const B130: f64 = 3.6345467351e-07;
const B230: f64 = -8.6940314119e-08;
const B040: f64 = 1.0942381108e-07;
const B140: f64 = -1.1010341714e-07;
const B050: f64 = 4.3147241272e-09;
const B001: f64 = -2.6259371009e-07;
const B101: f64 = 5.3056825249e-07;
const B201: f64 = -6.4748391553e-07;
const B301: f64 = 2.1503303093e-07;
const B011: f64 = -2.6019957550e-08;
const B111: f64 = 1.4370108710e-07;
const B211: f64 = -4.0187626893e-08;
const B021: f64 = 8.7944033950e-09;
const B121: f64 = -3.6050174460e-08;
const B031: f64 = -9.8986399054e-10;
const B002: f64 = -2.4385837456e-08;
const B102: f64 = 5.3912512852e-08;
const B012: f64 = -1.2637449319e-08;
const B003: f64 = -4.4324765969e-09;

/// Specific volume from the 55-term polynomial fit, v = v0 + δ.
///
/// # Arguments
/// * `sa` - Absolute Salinity [g/kg]
/// * `ct` - Conservative Temperature (ITS-90) [°C]
/// * `p` - sea pressure [dbar]
///
/// # Returns
/// [`SpecificVolume`] with specific volume v, thermal expansion
/// α = (∂v/∂CT)/v, haline contraction β = −(∂v/∂SA)/v, the pressure-only
/// reference profile v0 and the specific volume anomaly δ. Unlike the
/// density fits, α and β are normalized by v.
///
/// Check values at SA = 30 g/kg, CT = 10 °C, p = 1000 dbar:
/// v = 9.732820466e-04, α = 1.748553121e-04, β = 7.450974025e-04,
/// v0 = -4.333016903e-06, δ = 9.776150635e-04.
pub fn specific_volume_55(sa: f64, ct: f64, p: f64) -> SpecificVolume {
    let (x, y, z) = reduced_specvol(sa, ct, p);

    let v0 = specvol_ref_profile(z);

    // specific volume anomaly, Horner-nested per pressure layer
    let vp3 = V013 * y + V103 * x + V003;
    let vp2 = (V022 * y + V112 * x + V012) * y + (V202 * x + V102) * x + V002;
    let vp1 = (((V041 * y + V131 * x + V031) * y + (V221 * x + V121) * x + V021) * y
        + ((V311 * x + V211) * x + V111) * x
        + V011)
        * y
        + (((V401 * x + V301) * x + V201) * x + V101) * x
        + V001;
    let vp0 = (((((V060 * y + V150 * x + V050) * y + (V240 * x + V140) * x + V040) * y
        + ((V330 * x + V230) * x + V130) * x
        + V030)
        * y
        + (((V420 * x + V320) * x + V220) * x + V120) * x
        + V020)
        * y
        + ((((V510 * x + V410) * x + V310) * x + V210) * x + V110) * x
        + V010)
        * y
        + (((((V600 * x + V500) * x + V400) * x + V300) * x + V200) * x + V100) * x
        + V000;
    let delta = ((vp3 * z + vp2) * z + vp1) * z + vp0;

    let v = v0 + delta;

    // alpha
    let ap3 = A003;
    let ap2 = A012 * y + A102 * x + A002;
    let ap1 = ((A031 * y + A121 * x + A021) * y + (A211 * x + A111) * x + A011) * y
        + ((A301 * x + A201) * x + A101) * x
        + A001;
    let ap0 = ((((A050 * y + A140 * x + A040) * y + (A230 * x + A130) * x + A030) * y
        + ((A320 * x + A220) * x + A120) * x
        + A020)
        * y
        + (((A410 * x + A310) * x + A210) * x + A110) * x
        + A010)
        * y
        + ((((A500 * x + A400) * x + A300) * x + A200) * x + A100) * x
        + A000;
    let a = ((ap3 * z + ap2) * z + ap1) * z + ap0;
    let alpha = a / v;

    // beta
    let bp3 = B003;
    let bp2 = B012 * y + B102 * x + B002;
    let bp1 = ((B031 * y + B121 * x + B021) * y + (B211 * x + B111) * x + B011) * y
        + ((B301 * x + B201) * x + B101) * x
        + B001;
    let bp0 = ((((B050 * y + B140 * x + B040) * y + (B230 * x + B130) * x + B030) * y
        + ((B320 * x + B220) * x + B120) * x
        + B020)
        * y
        + (((B410 * x + B310) * x + B210) * x + B110) * x
        + B010)
        * y
        + ((((B500 * x + B400) * x + B300) * x + B200) * x + B100) * x
        + B000;
    let b = ((bp3 * z + bp2) * z + bp1) * z + bp0;
    let beta = b / x / v;

    SpecificVolume {
        v,
        alpha,
        beta,
        v0,
        delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matches_published_check_values() {
        let sv = specific_volume_55(30.0, 10.0, 1000.0);
        assert_relative_eq!(sv.v, 9.732820466e-04, max_relative = 1e-8);
        assert_relative_eq!(sv.alpha, 1.748553121e-04, max_relative = 1e-8);
        assert_relative_eq!(sv.beta, 7.450974025e-04, max_relative = 1e-8);
        assert_relative_eq!(sv.v0, -4.333016903e-06, max_relative = 1e-8);
        assert_relative_eq!(sv.delta, 9.776150635e-04, max_relative = 1e-8);
    }

    #[test]
    fn decomposition_is_exact() {
        let sv = specific_volume_55(35.0, 4.0, 2000.0);
        assert_eq!(sv.v, sv.v0 + sv.delta);
    }

    #[test]
    fn expansion_contraction_signs_in_funnel() {
        let sv = specific_volume_55(35.0, 15.0, 500.0);
        assert!(sv.alpha > 0.0);
        assert!(sv.beta > 0.0);
    }
}
