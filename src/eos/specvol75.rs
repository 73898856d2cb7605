//! 75-term specific volume fit.
//!
//! Same output shape and decomposition as the 55-term fit, but with an extra
//! two pressure layers and higher-order (x, y) cross terms. This is the fit
//! the GSW reference library uses for its `specvol`/`rho` routines.

use super::{reduced_specvol, specvol_ref_profile};
use crate::models::SpecificVolume;

// Specific volume anomaly, 75 terms. VIJK multiplies x^I y^J z^K.
const V000: f64 = 1.0769995862e-03;
const V100: f64 = -3.1038981976e-04;
const V200: f64 = 6.6928067038e-04;
const V300: f64 = -8.5047933937e-04;
const V400: f64 = 5.8086069943e-04;
const V500: f64 = -2.1092370507e-04;
const V600: f64 = 3.1932457305e-05;
const V010: f64 = -1.5649734675e-05;
const V110: f64 = 3.5009599764e-05;
const V210: f64 = -4.3592678561e-05;
const V310: f64 = 3.4532461828e-05;
const V410: f64 = -1.1959409788e-05;
const V510: f64 = 1.3864594581e-06;
const V020: f64 = 2.7762106484e-05;
const V120: f64 = -3.7435842344e-05;
const V220: f64 = 3.5907822760e-05;
const V320: f64 = -1.8698584187e-05;
const V420: f64 = 3.8595339244e-06;
const V030: f64 = -1.6521159259e-05;
const V130: f64 = 2.4141479483e-05;
const V230: f64 = -1.4353633048e-05;
const V330: f64 = 2.2863324556e-06;
const V040: f64 = 6.9111322702e-06;
const V140: f64 = -8.7595873154e-06;
const V240: f64 = 4.3703680598e-06;
const V050: f64 = -8.0539615540e-07;
const V150: f64 = -3.3052758900e-07;
const V060: f64 = 2.0543094268e-07;
const V001: f64 = -1.6784136540e-05;
const V101: f64 = 2.4262468747e-05;
const V201: f64 = -3.4792460974e-05;
const V301: f64 = 3.7470777305e-05;
const V401: f64 = -1.7322218612e-05;
const V501: f64 = 3.0927427253e-06;
const V011: f64 = 1.8505765429e-05;
const V111: f64 = -9.5677088156e-06;
const V211: f64 = 1.1100834765e-05;
const V311: f64 = -9.8447117844e-06;
const V411: f64 = 2.5909225260e-06;
const V021: f64 = -1.1716606853e-05;
const V121: f64 = -2.3678308361e-07;
const V221: f64 = 2.9283346295e-06;
const V321: f64 = -4.8826139200e-07;
const V031: f64 = 7.9279656173e-06;
const V131: f64 = -3.4558773655e-06;
const V231: f64 = 3.1655306078e-07;
const V041: f64 = -3.4102187482e-06;
const V141: f64 = 1.2956717783e-06;
const V051: f64 = 5.0736766814e-07;
const V002: f64 = 3.0623833435e-06;
const V102: f64 = -5.8484432984e-07;
const V202: f64 = -4.8122251597e-06;
const V302: f64 = 4.9263106998e-06;
const V402: f64 = -1.7811974727e-06;
const V012: f64 = -1.1736386731e-06;
const V112: f64 = -5.5699154557e-06;
const V212: f64 = 5.4620748834e-06;
const V312: f64 = -1.3544185627e-06;
const V022: f64 = 2.1305028740e-06;
const V122: f64 = 3.9137387080e-07;
const V222: f64 = -6.5731104067e-07;
const V032: f64 = -4.6132540037e-07;
const V132: f64 = 7.7618888092e-09;
const V042: f64 = -6.3352916514e-08;
const V003: f64 = -3.8088938393e-07;
const V103: f64 = 3.6310188515e-07;
const V203: f64 = 1.6746303780e-08;
const V013: f64 = -3.6527006553e-07;
const V113: f64 = -2.7295696237e-07;
const V023: f64 = 2.8695905159e-07;
const V004: f64 = 8.8302421514e-08;
const V104: f64 = -1.1147125423e-07;
const V014: f64 = 3.1454099902e-07;
const V005: f64 = 4.2369007180e-09;

// Thermal expansion; the assembled raw polynomial is divided by v.
const A000: f64 = -3.9124336688e-07;
const A100: f64 = 8.7523999410e-07;
const A200: f64 = -1.0898169640e-06;
const A300: f64 = 8.6331154570e-07;
const A400: f64 = -2.9898524469e-07;
const A500: f64 = 3.4661486454e-08;
const A010: f64 = 1.3881053242e-06;
const A110: f64 = -1.8717921172e-06;
const A210: f64 = 1.7953911380e-06;
const A310: f64 = -9.3492920933e-07;
const A410: f64 = 1.9297669622e-07;
const A020: f64 = -1.2390869444e-06;
const A120: f64 = 1.8106109612e-06;
const A220: f64 = -1.0765224786e-06;
const A320: f64 = 1.7147493417e-07;
const A030: f64 = 6.9111322702e-07;
const A130: f64 = -8.7595873154e-07;
const A230: f64 = 4.3703680598e-07;
const A040: f64 = -1.0067451943e-07;
const A140: f64 = -4.1315948624e-08;
const A050: f64 = 3.0814641402e-08;
const A001: f64 = 4.6264413572e-07;
const A101: f64 = -2.3919272039e-07;
const A201: f64 = 2.7752086911e-07;
const A301: f64 = -2.4611779461e-07;
const A401: f64 = 6.4773063150e-08;
const A011: f64 = -5.8583034263e-07;
const A111: f64 = -1.1839154180e-08;
const A211: f64 = 1.4641673148e-07;
const A311: f64 = -2.4413069600e-08;
const A021: f64 = 5.9459742130e-07;
const A121: f64 = -2.5919080242e-07;
const A221: f64 = 2.3741479559e-08;
const A031: f64 = -3.4102187482e-07;
const A131: f64 = 1.2956717783e-07;
const A041: f64 = 6.3420958518e-08;
const A002: f64 = -2.9340966828e-08;
const A102: f64 = -1.3924788639e-07;
const A202: f64 = 1.3655187208e-07;
const A302: f64 = -3.3860464067e-08;
const A012: f64 = 1.0652514370e-07;
const A112: f64 = 1.9568693540e-08;
const A212: f64 = -3.2865552033e-08;
const A022: f64 = -3.4599405028e-08;
const A122: f64 = 5.8214166069e-10;
const A032: f64 = -6.3352916514e-09;
const A003: f64 = -9.1317516382e-09;
const A103: f64 = -6.8239240593e-09;
const A013: f64 = 1.4347952579e-08;
const A004: f64 = 7.8635249756e-09;

// Haline contraction; the assembled raw polynomial is divided by x·v.
const B000: f64 = 3.8616633493e-06;
const B100: f64 = -1.6653488424e-05;
const B200: f64 = 3.1743292000e-05;
const B300: f64 = -2.8906727363e-05;
const B400: f64 = 1.3120861084e-05;
const B500: f64 = -2.3836941584e-06;
const B010: f64 = -4.3556611614e-07;
const B110: f64 = 1.0847021286e-06;
const B210: f64 = -1.2888896515e-06;
const B310: f64 = 5.9516403589e-07;
const B410: f64 = -8.6247024451e-08;
const B020: f64 = 4.6575180991e-07;
const B120: f64 = -8.9348241648e-07;
const B220: f64 = 6.9790598120e-07;
const B320: f64 = -1.9207099914e-07;
const B030: f64 = -3.0035220418e-07;
const B130: f64 = 3.5715667939e-07;
const B230: f64 = -8.5335075632e-08;
const B040: f64 = 1.0898094956e-07;
const B140: f64 = -1.0874641554e-07;
const B050: f64 = 4.1122040579e-09;
const B001: f64 = -3.0185747199e-07;
const B101: f64 = 8.6572923996e-07;
const B201: f64 = -1.3985593422e-06;
const B301: f64 = 8.6204601419e-07;
const B401: f64 = -1.9238922270e-07;
const B011: f64 = 1.1903505888e-07;
const B111: f64 = -2.7621838107e-07;
const B211: f64 = 3.6744403581e-07;
const B311: f64 = -1.2893812777e-07;
const B021: f64 = 2.9458973764e-09;
const B121: f64 = -7.2864777086e-08;
const B221: f64 = 1.8223868848e-08;
const B031: f64 = 4.2995723805e-08;
const B131: f64 = -7.8766845761e-09;
const B041: f64 = -1.6119885062e-08;
const B002: f64 = 7.2762435164e-09;
const B102: f64 = 1.1974099887e-07;
const B202: f64 = -1.8386962715e-07;
const B302: f64 = 8.8641889138e-08;
const B012: f64 = 6.9297177307e-08;
const B112: f64 = -1.3591099350e-07;
const B212: f64 = 5.0552320246e-08;
const B022: f64 = -4.8692129590e-09;
const B122: f64 = 1.6355652107e-08;
const B032: f64 = -9.6568249433e-11;
const B003: f64 = -4.5174717490e-09;
const B103: f64 = -4.1669270980e-10;
const B013: f64 = 3.3959486762e-09;
const B004: f64 = 1.3868510806e-09;

/// Specific volume from the 75-term polynomial fit, v = v0 + δ.
///
/// # Arguments
/// * `sa` - Absolute Salinity [g/kg]
/// * `ct` - Conservative Temperature (ITS-90) [°C]
/// * `p` - sea pressure [dbar]
///
/// # Returns
/// [`SpecificVolume`] with specific volume v, thermal expansion
/// α = (∂v/∂CT)/v, haline contraction β = −(∂v/∂SA)/v, the pressure-only
/// reference profile v0 (identical to the 55-term fit) and the specific
/// volume anomaly δ.
///
/// Check values at SA = 30 g/kg, CT = 10 °C, p = 1000 dbar:
/// v = 9.732819628e-04, α = 1.748435536e-04, β = 7.451196687e-04,
/// v0 = -4.333016903e-06, δ = 9.776149797e-04.
///
/// The published header quotes α = 1.748439401e-04 and β = 7.451213159e-04;
/// the tables as published (and the GSW reference library) yield the values
/// above, 2.2e-6 away in relative terms. v, v0 and δ agree with the header
/// to all printed digits.
pub fn specific_volume_75(sa: f64, ct: f64, p: f64) -> SpecificVolume {
    let (x, y, z) = reduced_specvol(sa, ct, p);

    let v0 = specvol_ref_profile(z);

    // specific volume anomaly, six pressure layers
    let vp5 = V005;
    let vp4 = V014 * y + V104 * x + V004;
    let vp3 = (V023 * y + V113 * x + V013) * y + (V203 * x + V103) * x + V003;
    let vp2 = (((V042 * y + V132 * x + V032) * y + (V222 * x + V122) * x + V022) * y
        + ((V312 * x + V212) * x + V112) * x
        + V012)
        * y
        + (((V402 * x + V302) * x + V202) * x + V102) * x
        + V002;
    let vp1 = ((((V051 * y + V141 * x + V041) * y + (V231 * x + V131) * x + V031) * y
        + ((V321 * x + V221) * x + V121) * x
        + V021)
        * y
        + (((V411 * x + V311) * x + V211) * x + V111) * x
        + V011)
        * y
        + ((((V501 * x + V401) * x + V301) * x + V201) * x + V101) * x
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
    let delta = ((((vp5 * z + vp4) * z + vp3) * z + vp2) * z + vp1) * z + vp0;

    let v = v0 + delta;

    // alpha
    let ap4 = A004;
    let ap3 = A013 * y + A103 * x + A003;
    let ap2 = ((A032 * y + A122 * x + A022) * y + (A212 * x + A112) * x + A012) * y
        + ((A302 * x + A202) * x + A102) * x
        + A002;
    let ap1 = (((A041 * y + A131 * x + A031) * y + (A221 * x + A121) * x + A021) * y
        + ((A311 * x + A211) * x + A111) * x
        + A011)
        * y
        + (((A401 * x + A301) * x + A201) * x + A101) * x
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
    let a = (((ap4 * z + ap3) * z + ap2) * z + ap1) * z + ap0;
    let alpha = a / v;

    // beta
    let bp4 = B004;
    let bp3 = B013 * y + B103 * x + B003;
    let bp2 = ((B032 * y + B122 * x + B022) * y + (B212 * x + B112) * x + B012) * y
        + ((B302 * x + B202) * x + B102) * x
        + B002;
    let bp1 = (((B041 * y + B131 * x + B031) * y + (B221 * x + B121) * x + B021) * y
        + ((B311 * x + B211) * x + B111) * x
        + B011)
        * y
        + (((B401 * x + B301) * x + B201) * x + B101) * x
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
    let b = (((bp4 * z + bp3) * z + bp2) * z + bp1) * z + bp0;
    let beta = b / x / v;

    SpecificVolume {
        v,
        alpha,
        beta,
        v0,
        delta,
    }
}
