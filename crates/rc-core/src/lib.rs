//! rc-core: shared foundation for rcflow.
//!
//! Contains:
//! - units (uom SI electrical types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{RcError, RcResult};
pub use numeric::*;
pub use units::*;
