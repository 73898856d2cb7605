//! Cross-family consistency: the four fits approximate the same reference
//! equation of state, so they must agree within the fit tolerances even
//! though none of them are algebraic transforms of another.

use approx::assert_relative_eq;
use polyteos_rs::{
    density_boussinesq, density_boussinesq_batch, density_stiffened, specific_volume_55,
    specific_volume_75,
};

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
fn boussinesq_and_stiffened_densities_agree() {
    for (sa, ct, p) in funnel_states() {
        let bsq = density_boussinesq(sa, ct, p);
        let stif = density_stiffened(sa, ct, p);
        assert_relative_eq!(bsq.rho, stif.rho, max_relative = 1e-4);
    }
}

#[test]
fn density_and_specific_volume_are_near_reciprocal() {
    // Independent fits, not algebraic inverses: expect agreement to a few
    // parts in 1e4, not machine precision.
    for (sa, ct, p) in funnel_states() {
        let rho = density_boussinesq(sa, ct, p).rho;
        let v = specific_volume_75(sa, ct, p).v;
        assert_relative_eq!(rho * v, 1.0, max_relative = 5e-4);
    }
}

#[test]
fn density_and_volume_expansion_coefficients_are_consistent() {
    // a/rho (density fit) and alpha (volume fit) estimate the same physical
    // thermal expansion; same for b/rho and beta.
    for (sa, ct, p) in funnel_states() {
        let d = density_boussinesq(sa, ct, p);
        let sv = specific_volume_55(sa, ct, p);
        assert_relative_eq!(d.a / d.rho, sv.alpha, max_relative = 5e-3);
        assert_relative_eq!(d.b / d.rho, sv.beta, max_relative = 5e-3);
    }
}

#[test]
fn matches_gsw_reference_density() {
    // The GSW library's rho uses the same 75-term specific volume fit.
    for (sa, ct, p) in funnel_states() {
        let rho_gsw = gsw::volume::rho(sa, ct, p).unwrap();
        let v = specific_volume_75(sa, ct, p).v;
        assert_relative_eq!(1.0 / v, rho_gsw, max_relative = 1e-6);
    }
}

#[test]
fn batch_results_match_scalar_evaluation() {
    let states = funnel_states();
    let sa: Vec<f64> = states.iter().map(|s| s.0).collect();
    let ct: Vec<f64> = states.iter().map(|s| s.1).collect();
    let p: Vec<f64> = states.iter().map(|s| s.2).collect();

    let out = density_boussinesq_batch(&sa, &ct, &p).unwrap();
    assert_eq!(out.len(), sa.len());
    for (i, d) in out.iter().enumerate() {
        assert_eq!(*d, density_boussinesq(sa[i], ct[i], p[i]));
    }
}
