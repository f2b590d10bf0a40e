//! YAML run configuration with command-line overrides.

use std::path::Path;

use rc_core::{Tolerances, ensure_positive, nearly_equal};
use rc_sim::{RcParams, SimOptions, UninitializedPolicy, step_count};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CliError, CliResult};

/// Everything needed for one run. Missing keys fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitConfig {
    pub circuit: RcParams,
    pub sim: SimSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// Fixed time step (s)
    pub dt: f64,
    /// Final time (s)
    pub t_end: f64,
    /// Print a trace line every N steps
    pub report_every: usize,
    pub on_uninitialized: UninitializedPolicy,
}

impl Default for SimSettings {
    fn default() -> Self {
        let opts = SimOptions::default();
        Self {
            dt: opts.dt,
            t_end: opts.t_end,
            report_every: opts.report_every,
            on_uninitialized: opts.on_uninitialized,
        }
    }
}

impl SimSettings {
    pub fn to_options(&self) -> SimOptions {
        SimOptions {
            dt: self.dt,
            t_end: self.t_end,
            report_every: self.report_every,
            on_uninitialized: self.on_uninitialized,
        }
    }
}

/// Values given on the command line; `Some` wins over the file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub dt: Option<f64>,
    pub t_end: Option<f64>,
    pub report_every: Option<usize>,
    pub v0: Option<f64>,
    pub i0: Option<f64>,
    pub capacitance: Option<f64>,
    pub resistance: Option<f64>,
}

impl CircuitConfig {
    pub fn from_yaml(content: &str) -> CliResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse config YAML: {}", e)))
    }

    pub fn to_yaml(&self) -> CliResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    pub fn apply(&mut self, o: &Overrides) {
        if let Some(v) = o.dt {
            self.sim.dt = v;
        }
        if let Some(v) = o.t_end {
            self.sim.t_end = v;
        }
        if let Some(v) = o.report_every {
            self.sim.report_every = v;
        }
        if let Some(v) = o.v0 {
            self.circuit.v0 = v;
        }
        if let Some(v) = o.i0 {
            self.circuit.i0 = v;
        }
        if let Some(v) = o.capacitance {
            self.circuit.capacitance = v;
        }
        if let Some(v) = o.resistance {
            self.circuit.resistance = v;
        }
    }

    /// Log parameters the elements will accept but that give non-physical results.
    ///
    /// Returns the number of warnings emitted.
    pub fn warn_degenerate(&self) -> usize {
        let checks = [
            ("capacitance", self.circuit.capacitance),
            ("resistance", self.circuit.resistance),
        ];
        let mut count = 0;
        for (what, value) in checks {
            if let Err(e) = ensure_positive(value, what) {
                warn!(parameter = what, value, "{e}; results will not be physical");
                count += 1;
            }
        }

        let tau = self.circuit.resistance * self.circuit.capacitance;
        if tau > 0.0 && self.sim.dt >= tau {
            warn!(
                dt = self.sim.dt,
                tau, "time step is not smaller than r*C; explicit Euler will overshoot"
            );
            count += 1;
        }

        let steps = step_count(self.sim.dt, self.sim.t_end);
        let reached = steps as f64 * self.sim.dt;
        if self.sim.t_end > 0.0 && !nearly_equal(reached, self.sim.t_end, Tolerances::default()) {
            warn!(
                t_end = self.sim.t_end,
                reached, steps, "t_end is not a whole number of steps; the run stops short"
            );
            count += 1;
        }
        count
    }
}

/// Load a config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> CliResult<CircuitConfig> {
    let Some(path) = path else {
        return Ok(CircuitConfig::default());
    };
    let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    CircuitConfig::from_yaml(&content)
}
