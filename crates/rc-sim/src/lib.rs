//! Fixed-step transient simulation of a series RC circuit.
//!
//! Provides:
//! - Shared electrical state (time, voltage, current) composed into each element
//! - Capacitor and resistor elements with explicit Euler update rules
//! - Finite-difference derivative helper
//! - Circuit driver and fixed-step run loop with progress reporting

pub mod capacitor;
pub mod circuit;
pub mod derivative;
pub mod element;
pub mod error;
pub mod resistor;
pub mod sim;

pub use capacitor::Capacitor;
pub use circuit::{RcCircuit, RcParams, Sample};
pub use derivative::{derivative, try_derivative};
pub use element::{Element, ElectricalState};
pub use error::{SimError, SimResult};
pub use resistor::Resistor;
pub use sim::{
    SimOptions, SimRecord, UninitializedPolicy, run_sim, run_sim_with_progress, step_count,
};
