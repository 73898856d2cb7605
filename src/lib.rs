//! Polynomial TEOS-10 equation of state for seawater (Roquet et al., 2014).
//!
//! Four closed-form fits to the TEOS-10 reference equation of state, each
//! returning the state quantity together with its expansion/contraction
//! coefficients and decomposition terms:
//! - [`density_boussinesq`]: 55-term in-situ density, ρ = r0 + r
//! - [`density_stiffened`]: 55-term in-situ density, ρ = r1·ṙ
//! - [`specific_volume_55`] and [`specific_volume_75`]: v = v0 + δ
//!
//! Inputs are Absolute Salinity [g/kg], Conservative Temperature [°C] and
//! sea pressure [dbar]. The fits are only accurate inside the oceanographic
//! funnel of McDougall et al. (2011); no validation is performed, and
//! out-of-range input propagates as NaN/Inf per IEEE arithmetic. See
//! [`eos`] for the fit details and references.
//!
//! [`batch`] adds slice evaluation with scalar broadcast, and the optional
//! `cli` feature builds a small command-line front end.

pub mod adapters;
pub mod batch;
pub mod eos;
pub mod error;
pub mod models;

pub use crate::batch::{
    Arg, density_boussinesq_batch, density_stiffened_batch, specific_volume_55_batch,
    specific_volume_75_batch,
};
pub use crate::eos::boussinesq::density_boussinesq;
pub use crate::eos::specvol55::specific_volume_55;
pub use crate::eos::specvol75::specific_volume_75;
pub use crate::eos::stiffened::density_stiffened;
pub use crate::error::BroadcastError;
pub use crate::models::{BoussinesqDensity, SpecificVolume, State, StiffenedDensity};
