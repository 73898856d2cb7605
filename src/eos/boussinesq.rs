//! 55-term in-situ density fit, Boussinesq (additive) decomposition.

use super::reduced;
use crate::models::BoussinesqDensity;

// Vertical reference profile of density, r0(z) with r0(0) = 0.
const R00: f64 = 4.6494977072e+01;
const R01: f64 = -5.2099962525e+00;
const R02: f64 = 2.2601900708e-01;
const R03: f64 = 6.4326772569e-02;
const R04: f64 = 1.5616995503e-02;
const R05: f64 = -1.7243708991e-03;

// Density anomaly, 55 terms. RIJK multiplies x^I y^J z^K.
const R000: f64 = 8.0189615746e+02;
const R100: f64 = 8.6672408165e+02;
const R200: f64 = -1.7864682637e+03;
const R300: f64 = 2.0375295546e+03;
const R400: f64 = -1.2849161071e+03;
const R500: f64 = 4.3227585684e+02;
const R600: f64 = -6.0579916612e+01;
const R010: f64 = 2.6010145068e+01;
const R110: f64 = -6.5281885265e+01;
const R210: f64 = 8.1770425108e+01;
const R310: f64 = -5.6888046321e+01;
const R410: f64 = 1.7681814114e+01;
const R510: f64 = -1.9193502195e+00;
const R020: f64 = -3.7074170417e+01;
const R120: f64 = 6.1548258127e+01;
const R220: f64 = -6.0362551501e+01;
const R320: f64 = 2.9130021253e+01;
const R420: f64 = -5.4723692739e+00;
const R030: f64 = 2.1661789529e+01;
const R130: f64 = -3.3449108469e+01;
const R230: f64 = 1.9717078466e+01;
const R330: f64 = -3.1742946532e+00;
const R040: f64 = -8.3627885467e+00;
const R140: f64 = 1.1311538584e+01;
const R240: f64 = -5.3563304045e+00;
const R050: f64 = 5.4048723791e-01;
const R150: f64 = 4.8169980163e-01;
const R060: f64 = -1.9083568888e-01;
const R001: f64 = 1.9681925209e+01;
const R101: f64 = -4.2549998214e+01;
const R201: f64 = 5.0774768218e+01;
const R301: f64 = -3.0938076334e+01;
const R401: f64 = 6.6051753097e+00;
const R011: f64 = -1.3336301113e+01;
const R111: f64 = -4.4870114575e+00;
const R211: f64 = 5.0042598061e+00;
const R311: f64 = -6.5399043664e-01;
const R021: f64 = 6.7080479603e+00;
const R121: f64 = 3.5063081279e+00;
const R221: f64 = -1.8795372996e+00;
const R031: f64 = -2.4649669534e+00;
const R131: f64 = -5.5077101279e-01;
const R041: f64 = 5.5927935970e-01;
const R002: f64 = 2.0660924175e+00;
const R102: f64 = -4.9527603989e+00;
const R202: f64 = 2.5019633244e+00;
const R012: f64 = 2.0564311499e+00;
const R112: f64 = -2.1311365518e-01;
const R022: f64 = -1.2419983026e+00;
const R003: f64 = -2.3342758797e-02;
const R103: f64 = -1.8507636718e-02;
const R013: f64 = 3.7969820455e-01;

// Thermal expansion, independently fitted (not a derivative of the tables
// above term by term).
const ALP000: f64 = -6.5025362670e-01;
const ALP100: f64 = 1.6320471316e+00;
const ALP200: f64 = -2.0442606277e+00;
const ALP300: f64 = 1.4222011580e+00;
const ALP400: f64 = -4.4204535284e-01;
const ALP500: f64 = 4.7983755487e-02;
const ALP010: f64 = 1.8537085209e+00;
const ALP110: f64 = -3.0774129064e+00;
const ALP210: f64 = 3.0181275751e+00;
const ALP310: f64 = -1.4565010626e+00;
const ALP410: f64 = 2.7361846370e-01;
const ALP020: f64 = -1.6246342147e+00;
const ALP120: f64 = 2.5086831352e+00;
const ALP220: f64 = -1.4787808849e+00;
const ALP320: f64 = 2.3807209899e-01;
const ALP030: f64 = 8.3627885467e-01;
const ALP130: f64 = -1.1311538584e+00;
const ALP230: f64 = 5.3563304045e-01;
const ALP040: f64 = -6.7560904739e-02;
const ALP140: f64 = -6.0212475204e-02;
const ALP050: f64 = 2.8625353333e-02;
const ALP001: f64 = 3.3340752782e-01;
const ALP101: f64 = 1.1217528644e-01;
const ALP201: f64 = -1.2510649515e-01;
const ALP301: f64 = 1.6349760916e-02;
const ALP011: f64 = -3.3540239802e-01;
const ALP111: f64 = -1.7531540640e-01;
const ALP211: f64 = 9.3976864981e-02;
const ALP021: f64 = 1.8487252150e-01;
const ALP121: f64 = 4.1307825959e-02;
const ALP031: f64 = -5.5927935970e-02;
const ALP002: f64 = -5.1410778748e-02;
const ALP102: f64 = 5.3278413794e-03;
const ALP012: f64 = 6.2099915132e-02;
const ALP003: f64 = -9.4924551138e-03;

// Haline contraction; the assembled polynomial is divided by x at the end.
const BET000: f64 = 1.0783203594e+01;
const BET100: f64 = -4.4452095908e+01;
const BET200: f64 = 7.6048755820e+01;
const BET300: f64 = -6.3944280668e+01;
const BET400: f64 = 2.6890441098e+01;
const BET500: f64 = -4.5221697773e+00;
const BET010: f64 = -8.1219372432e-01;
const BET110: f64 = 2.0346663041e+00;
const BET210: f64 = -2.1232895170e+00;
const BET310: f64 = 8.7994140485e-01;
const BET410: f64 = -1.1939638360e-01;
const BET020: f64 = 7.6574242289e-01;
const BET120: f64 = -1.5019813020e+00;
const BET220: f64 = 1.0872489522e+00;
const BET320: f64 = -2.7233429080e-01;
const BET030: f64 = -4.1615152308e-01;
const BET130: f64 = 4.9061350869e-01;
const BET230: f64 = -1.1847737788e-01;
const BET040: f64 = 1.4073062708e-01;
const BET140: f64 = -1.3327978879e-01;
const BET050: f64 = 5.9929880134e-03;
const BET001: f64 = -5.2937873009e-01;
const BET101: f64 = 1.2634116779e+00;
const BET201: f64 = -1.1547328025e+00;
const BET301: f64 = 3.2870876279e-01;
const BET011: f64 = -5.5824407214e-02;
const BET111: f64 = 1.2451933313e-01;
const BET211: f64 = -2.4409539932e-02;
const BET021: f64 = 4.3623149752e-02;
const BET121: f64 = -4.6767901790e-02;
const BET031: f64 = -6.8523260060e-03;
const BET002: f64 = -6.1618945251e-02;
const BET102: f64 = 6.2255521644e-02;
const BET012: f64 = -2.6514181169e-03;
const BET003: f64 = -2.3025968587e-04;

/// In-situ density from the 55-term polynomial fit, in the additive
/// (Boussinesq) decomposition ρ = r0 + r.
///
/// # Arguments
/// * `sa` - Absolute Salinity [g/kg]
/// * `ct` - Conservative Temperature (ITS-90) [°C]
/// * `p` - sea pressure [dbar]
///
/// # Returns
/// [`BoussinesqDensity`] with in-situ density ρ, thermal expansion
/// a = −∂ρ/∂CT, haline contraction b = ∂ρ/∂SA, the pressure-only reference
/// profile r0 and the density anomaly r.
///
/// Check values at SA = 30 g/kg, CT = 10 °C, p = 1000 dbar:
/// ρ = 1027.45140, a = 0.179646281, b = 0.765555368, r0 = 4.59763035,
/// r = 1022.85377.
pub fn density_boussinesq(sa: f64, ct: f64, p: f64) -> BoussinesqDensity {
    let (x, y, z) = reduced(sa, ct, p);

    // vertical reference profile of density
    let r0 = (((((R05 * z + R04) * z + R03) * z + R02) * z + R01) * z + R00) * z;

    // density anomaly, Horner-nested per pressure layer
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
    let r = ((rz3 * z + rz2) * z + rz1) * z + rz0;

    let rho = r + r0;

    // thermal expansion a
    let a = ((ALP003 * z + ALP012 * y + ALP102 * x + ALP002) * z
        + ((ALP031 * y + ALP121 * x + ALP021) * y + (ALP211 * x + ALP111) * x + ALP011) * y
        + ((ALP301 * x + ALP201) * x + ALP101) * x
        + ALP001)
        * z
        + ((((ALP050 * y + ALP140 * x + ALP040) * y + (ALP230 * x + ALP130) * x + ALP030) * y
            + ((ALP320 * x + ALP220) * x + ALP120) * x
            + ALP020)
            * y
            + (((ALP410 * x + ALP310) * x + ALP210) * x + ALP110) * x
            + ALP010)
            * y
        + ((((ALP500 * x + ALP400) * x + ALP300) * x + ALP200) * x + ALP100) * x
        + ALP000;

    // haline contraction b; singular as x -> 0 (SA -> -32 g/kg)
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
    let b = b / x;

    BoussinesqDensity { rho, a, b, r0, r }
}
