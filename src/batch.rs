//! Element-wise evaluation over paired input arrays.
//!
//! High-throughput callers (model columns, gridded sections) hand in slices
//! of SA, CT and p and get one result struct per element. Scalars broadcast
//! against slices, matching the array contract of the published fits: inputs
//! are positionally paired, with no reshaping beyond scalar broadcast.
//!
//! Mismatched slice lengths are the only failure mode and are reported as a
//! [`BroadcastError`] rather than a panic; numeric domain violations still
//! propagate as NaN/Inf per element, exactly as in the scalar evaluators.

use crate::eos::boussinesq::density_boussinesq;
use crate::eos::specvol55::specific_volume_55;
use crate::eos::specvol75::specific_volume_75;
use crate::eos::stiffened::density_stiffened;
use crate::error::BroadcastError;
use crate::models::{BoussinesqDensity, SpecificVolume, StiffenedDensity};

/// One input argument of a batch call: a scalar broadcast to every element,
/// or a slice paired element-wise with the other inputs.
#[derive(Clone, Copy, Debug)]
pub enum Arg<'a> {
    Scalar(f64),
    Slice(&'a [f64]),
}

impl From<f64> for Arg<'_> {
    fn from(v: f64) -> Self {
        Arg::Scalar(v)
    }
}

impl<'a> From<&'a [f64]> for Arg<'a> {
    fn from(s: &'a [f64]) -> Self {
        Arg::Slice(s)
    }
}

impl<'a> From<&'a Vec<f64>> for Arg<'a> {
    fn from(s: &'a Vec<f64>) -> Self {
        Arg::Slice(s.as_slice())
    }
}

impl Arg<'_> {
    #[inline]
    fn get(&self, i: usize) -> f64 {
        match *self {
            Arg::Scalar(v) => v,
            Arg::Slice(s) => s[i],
        }
    }
}

/// Common broadcast length of the three arguments: every slice must have the
/// same length, scalars adapt. Three scalars broadcast to a single element.
fn broadcast_len(sa: &Arg<'_>, ct: &Arg<'_>, p: &Arg<'_>) -> Result<usize, BroadcastError> {
    let mut len: Option<usize> = None;
    for arg in [sa, ct, p] {
        if let Arg::Slice(s) = arg {
            match len {
                None => len = Some(s.len()),
                Some(l) if l == s.len() => {}
                Some(l) => {
                    return Err(BroadcastError::MismatchedLengths {
                        left: l,
                        right: s.len(),
                    });
                }
            }
        }
    }
    Ok(len.unwrap_or(1))
}

macro_rules! batch_fn {
    ($(#[$doc:meta])* $name:ident, $scalar:path, $out:ty) => {
        $(#[$doc])*
        pub fn $name<'a>(
            sa: impl Into<Arg<'a>>,
            ct: impl Into<Arg<'a>>,
            p: impl Into<Arg<'a>>,
        ) -> Result<Vec<$out>, BroadcastError> {
            let (sa, ct, p) = (sa.into(), ct.into(), p.into());
            let n = broadcast_len(&sa, &ct, &p)?;
            Ok((0..n)
                .map(|i| $scalar(sa.get(i), ct.get(i), p.get(i)))
                .collect())
        }
    };
}

batch_fn!(
    /// Element-wise [`density_boussinesq`] over broadcastable inputs.
    density_boussinesq_batch,
    density_boussinesq,
    BoussinesqDensity
);

batch_fn!(
    /// Element-wise [`density_stiffened`] over broadcastable inputs.
    density_stiffened_batch,
    density_stiffened,
    StiffenedDensity
);

batch_fn!(
    /// Element-wise [`specific_volume_55`] over broadcastable inputs.
    specific_volume_55_batch,
    specific_volume_55,
    SpecificVolume
);

batch_fn!(
    /// Element-wise [`specific_volume_75`] over broadcastable inputs.
    specific_volume_75_batch,
    specific_volume_75,
    SpecificVolume
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcasts_scalar_against_slice() {
        let p = vec![0.0, 500.0, 1000.0, 2000.0];
        let out = density_boussinesq_batch(35.0, 10.0, &p).unwrap();
        assert_eq!(out.len(), 4);
        for (i, d) in out.iter().enumerate() {
            assert_eq!(*d, density_boussinesq(35.0, 10.0, p[i]));
        }
    }

    #[test]
    fn all_scalars_yield_one_element() {
        let out = specific_volume_75_batch(35.0, 10.0, 1000.0).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], specific_volume_75(35.0, 10.0, 1000.0));
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let sa = vec![34.0, 35.0, 36.0];
        let ct = vec![10.0, 12.0];
        let err = density_stiffened_batch(&sa, &ct, 0.0).unwrap_err();
        assert_eq!(err, BroadcastError::MismatchedLengths { left: 3, right: 2 });
    }

    #[test]
    fn pairs_slices_element_wise() {
        let sa = [34.0, 35.5];
        let ct = [4.0, 18.0];
        let p = [4000.0, 10.0];
        let out = specific_volume_55_batch(&sa[..], &ct[..], &p[..]).unwrap();
        assert_eq!(out[0], specific_volume_55(34.0, 4.0, 4000.0));
        assert_eq!(out[1], specific_volume_55(35.5, 18.0, 10.0));
    }
}
