//! Finite-difference slope between two samples.

use rc_core::{Real, ensure_finite};

use crate::error::{SimError, SimResult};

/// Backward difference `(v2 - v1) / (t2 - t1)`.
///
/// Equal sample times give an infinite or NaN result; use
/// [`try_derivative`] when the samples are not known to be distinct.
pub fn derivative(v1: Real, v2: Real, t1: Real, t2: Real) -> Real {
    (v2 - v1) / (t2 - t1)
}

/// [`derivative`] that rejects coincident or non-finite samples.
pub fn try_derivative(v1: Real, v2: Real, t1: Real, t2: Real) -> SimResult<Real> {
    if t1 == t2 {
        return Err(SimError::InvalidArg {
            what: "derivative samples must have distinct times",
        });
    }
    Ok(ensure_finite(derivative(v1, v2, t1, t2), "derivative")?)
}
