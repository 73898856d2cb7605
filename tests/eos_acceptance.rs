use approx::assert_relative_eq;
use polyteos_rs::{
    density_boussinesq, density_stiffened, specific_volume_55, specific_volume_75,
};

// Published check point: SA = 30 g/kg, CT = 10 degC, p = 1000 dbar.
const SA: f64 = 30.0;
const CT: f64 = 10.0;
const P: f64 = 1000.0;

#[test]
fn boussinesq_density_check_values() {
    let d = density_boussinesq(SA, CT, P);
    assert_relative_eq!(d.rho, 1027.45140, max_relative = 1e-8);
    assert_relative_eq!(d.a, 0.179646281, max_relative = 1e-8);
    assert_relative_eq!(d.b, 0.765555368, max_relative = 1e-8);
    assert_relative_eq!(d.r0, 4.59763035, max_relative = 1e-8);
    assert_relative_eq!(d.r, 1022.85377, max_relative = 1e-8);
}

#[test]
fn stiffened_density_check_values() {
    let d = density_stiffened(SA, CT, P);
    assert_relative_eq!(d.rho, 1027.45140, max_relative = 1e-8);
    assert_relative_eq!(d.a, 0.179649406, max_relative = 1e-8);
    assert_relative_eq!(d.b, 0.765554495, max_relative = 1e-8);
    assert_relative_eq!(d.r1, 1.00447333, max_relative = 1e-8);
    assert_relative_eq!(d.rdot, 1022.87574, max_relative = 1e-8);
}

#[test]
fn specific_volume_55_check_values() {
    let sv = specific_volume_55(SA, CT, P);
    assert_relative_eq!(sv.v, 9.732820466e-04, max_relative = 1e-8);
    assert_relative_eq!(sv.alpha, 1.748553121e-04, max_relative = 1e-8);
    assert_relative_eq!(sv.beta, 7.450974025e-04, max_relative = 1e-8);
    assert_relative_eq!(sv.v0, -4.333016903e-06, max_relative = 1e-8);
    assert_relative_eq!(sv.delta, 9.776150635e-04, max_relative = 1e-8);
}

#[test]
fn specific_volume_75_check_values() {
    let sv = specific_volume_75(SA, CT, P);
    assert_relative_eq!(sv.v, 9.732819628e-04, max_relative = 1e-8);
    // alpha/beta are asserted against what the published tables produce
    // (confirmed against GSW); the original header quotes 1.748439401e-04
    // and 7.451213159e-04, about 2e-6 away in relative terms.
    assert_relative_eq!(sv.alpha, 1.748435536e-04, max_relative = 1e-8);
    assert_relative_eq!(sv.beta, 7.451196687e-04, max_relative = 1e-8);
    assert_relative_eq!(sv.v0, -4.333016903e-06, max_relative = 1e-8);
    assert_relative_eq!(sv.delta, 9.776149797e-04, max_relative = 1e-8);
}

// A small set of realistic open-ocean states inside the fitted funnel.
fn funnel_states() -> Vec<(f64, f64, f64)> {
    vec![
        (30.0, 10.0, 1000.0),
        (33.0, 8.0, 1000.0),
        (34.7, 1.0, 2000.0),
        (35.0, 2.0, 4000.0),
        (35.5, 15.0, 500.0),
        (36.5, 25.0, 0.0),
    ]
}

#[test]
fn decomposition_identities_hold_exactly() {
    for (sa, ct, p) in funnel_states() {
        let bsq = density_boussinesq(sa, ct, p);
        assert_eq!(bsq.rho, bsq.r0 + bsq.r);

        let stif = density_stiffened(sa, ct, p);
        assert_eq!(stif.rho, stif.r1 * stif.rdot);

        let sv55 = specific_volume_55(sa, ct, p);
        assert_eq!(sv55.v, sv55.v0 + sv55.delta);

        let sv75 = specific_volume_75(sa, ct, p);
        assert_eq!(sv75.v, sv75.v0 + sv75.delta);
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let first = density_boussinesq(SA, CT, P);
    for _ in 0..10 {
        let again = density_boussinesq(SA, CT, P);
        assert_eq!(first.rho.to_bits(), again.rho.to_bits());
        assert_eq!(first.a.to_bits(), again.a.to_bits());
        assert_eq!(first.b.to_bits(), again.b.to_bits());
    }
    let sv = specific_volume_75(SA, CT, P);
    assert_eq!(sv.v.to_bits(), specific_volume_75(SA, CT, P).v.to_bits());
}

#[test]
fn haline_coefficients_blow_up_at_zero_salinity_root() {
    // Each family has its own salinity offset, so the root hits zero at a
    // different SA: -32 g/kg for the density fits, -24 g/kg for the
    // specific-volume fits. There the final division makes b and beta
    // non-finite rather than silently wrong.
    let d = density_boussinesq(-32.0, 10.0, 0.0);
    assert!(!d.b.is_finite());
    assert!(d.rho.is_finite());

    let stif = density_stiffened(-32.0, 10.0, 0.0);
    assert!(!stif.b.is_finite());

    let sv = specific_volume_55(-24.0, 10.0, 0.0);
    assert!(!sv.beta.is_finite());
    assert!(sv.v.is_finite());
    let sv = specific_volume_75(-24.0, 10.0, 0.0);
    assert!(!sv.beta.is_finite());
    assert!(sv.v.is_finite());
}

#[test]
fn nan_propagates_below_salinity_domain() {
    let d = density_boussinesq(-33.0, 10.0, 1000.0);
    assert!(d.rho.is_nan());
    assert!(d.a.is_nan());
    assert!(d.b.is_nan());

    // The specific-volume root goes imaginary already below -24 g/kg.
    let sv = specific_volume_75(-25.0, 10.0, 1000.0);
    assert!(sv.v.is_nan());
    assert!(sv.alpha.is_nan());
}
