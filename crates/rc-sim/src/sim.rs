//! Simulation runner and result recording.

use rc_core::Real;
use tracing::{debug, warn};

use crate::circuit::{RcCircuit, Sample};
use crate::error::{SimError, SimResult};

/// What the run loop does when an element update finds missing state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UninitializedPolicy {
    /// Leave the element unchanged and keep stepping.
    #[default]
    Skip,
    /// Stop and return the error.
    Abort,
}

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: Real,
    /// Final simulation time (seconds)
    pub t_end: Real,
    /// Report every N-th step (decimation)
    pub report_every: usize,
    /// Handling of uninitialized element state
    pub on_uninitialized: UninitializedPolicy,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 1e-10,
            t_end: 5e-6,
            report_every: 200,
            on_uninitialized: UninitializedPolicy::default(),
        }
    }
}

impl SimOptions {
    fn validate(&self) -> SimResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "dt must be positive",
            });
        }
        if !self.t_end.is_finite() || self.t_end < 0.0 {
            return Err(SimError::InvalidArg {
                what: "t_end must be non-negative",
            });
        }
        if self.report_every == 0 {
            return Err(SimError::InvalidArg {
                what: "report_every must be positive",
            });
        }
        // usize::MAX rounds up to 2^64, so anything at or above it would saturate
        let ratio = self.t_end / self.dt;
        if !ratio.is_finite() || ratio >= usize::MAX as Real {
            return Err(SimError::InvalidArg {
                what: "t_end / dt exceeds the representable step count",
            });
        }
        Ok(())
    }
}

/// Record of simulation results.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimRecord {
    /// Reported samples, one per `report_every` steps
    pub samples: Vec<Sample>,
    /// Update pairs executed
    pub steps: usize,
    /// Steps in which at least one element update was skipped
    pub skipped: usize,
}

/// Number of fixed steps covering `t_end`, truncated toward zero.
pub fn step_count(dt: Real, t_end: Real) -> usize {
    let n = (t_end / dt).trunc();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Run the circuit for `floor(t_end / dt)` steps.
pub fn run_sim(circuit: &mut RcCircuit, opts: &SimOptions) -> SimResult<SimRecord> {
    run_sim_with_progress(circuit, opts, None)
}

/// Run the circuit, handing every reported sample to `progress` as it is taken.
///
/// After step `i` (zero based) with `i % report_every == 0`, a sample is
/// taken at `time = i * dt`. Elements are stamped with `(i + 1) * dt`.
pub fn run_sim_with_progress(
    circuit: &mut RcCircuit,
    opts: &SimOptions,
    mut progress: Option<&mut dyn FnMut(&Sample)>,
) -> SimResult<SimRecord> {
    opts.validate()?;

    let steps = step_count(opts.dt, opts.t_end);
    debug!(
        steps,
        dt = opts.dt,
        t_end = opts.t_end,
        tau = ?circuit.time_constant(),
        "starting RC transient"
    );

    let mut record = SimRecord::default();

    for i in 0..steps {
        if let Err(e) = circuit.step(opts.dt) {
            match (opts.on_uninitialized, &e) {
                (UninitializedPolicy::Skip, SimError::UninitializedState { .. }) => {
                    record.skipped += 1;
                }
                _ => {
                    warn!(step = i, error = %e, "aborting run");
                    return Err(e);
                }
            }
        }
        circuit.set_time((i + 1) as Real * opts.dt);
        record.steps += 1;

        if i % opts.report_every == 0 {
            let sample = circuit.sample(i as Real * opts.dt);
            if let Some(cb) = progress.as_deref_mut() {
                cb(&sample);
            }
            record.samples.push(sample);
        }
    }

    debug!(
        steps = record.steps,
        skipped = record.skipped,
        "RC transient finished"
    );

    Ok(record)
}
