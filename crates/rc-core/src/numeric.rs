use crate::{RcError, RcResult};

/// Floating point type used throughout the simulator
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-15,
            rel: 1e-12,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> RcResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RcError::NonFinite { what, value: v })
    }
}

/// Strictly positive and finite, as required of physical parameters like r and C.
pub fn ensure_positive(v: Real, what: &'static str) -> RcResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(RcError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn default_tolerance_resolves_picoscale_values() {
        // capacitances live around 1e-10, so the abs floor must sit well below that
        let tol = Tolerances::default();
        assert!(!nearly_equal(100e-12, 101e-12, tol));
        assert!(nearly_equal(100e-12, 100e-12, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert_eq!(ensure_positive(1e3, "r"), Ok(1e3));
        assert_eq!(
            ensure_positive(0.0, "r"),
            Err(RcError::InvalidArg { what: "r" })
        );
        assert!(ensure_positive(-1.0, "c").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "c"),
            Err(RcError::NonFinite { .. })
        ));
    }
}
