//! Series RC circuit fed by a constant current source.

use rc_core::Real;

use crate::capacitor::Capacitor;
use crate::element::{Element, require};
use crate::error::{SimError, SimResult};
use crate::resistor::Resistor;

/// Initial conditions and physical parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RcParams {
    /// Initial capacitor voltage (V)
    pub v0: Real,
    /// Source current, also the resistor's initial current (A)
    pub i0: Real,
    /// Capacitance (F)
    pub capacitance: Real,
    /// Resistance (Ω)
    pub resistance: Real,
}

impl Default for RcParams {
    fn default() -> Self {
        Self {
            v0: 0.0,
            i0: 1e-2,
            capacitance: 100e-12,
            resistance: 1e3,
        }
    }
}

/// Snapshot reported by the run loop.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Report time (s)
    pub time: Real,
    /// Capacitor voltage (V), `None` if unset
    pub voltage: Option<Real>,
    /// Resistor current (A), `None` if unset
    pub current: Option<Real>,
}

/// Capacitor and resistor owned together for the whole run.
#[derive(Clone, Debug, PartialEq)]
pub struct RcCircuit {
    capacitor: Capacitor,
    resistor: Resistor,
}

impl RcCircuit {
    pub fn new(params: &RcParams) -> Self {
        Self {
            capacitor: Capacitor::new(0.0, params.v0, params.i0, params.capacitance),
            resistor: Resistor::new(0.0, 0.0, params.i0, params.resistance),
        }
    }

    /// Assemble from elements built elsewhere, possibly partially initialized.
    pub fn from_elements(capacitor: Capacitor, resistor: Resistor) -> Self {
        Self {
            capacitor,
            resistor,
        }
    }

    pub fn capacitor(&self) -> &Capacitor {
        &self.capacitor
    }

    pub fn capacitor_mut(&mut self) -> &mut Capacitor {
        &mut self.capacitor
    }

    pub fn resistor(&self) -> &Resistor {
        &self.resistor
    }

    pub fn resistor_mut(&mut self) -> &mut Resistor {
        &mut self.resistor
    }

    /// τ = r·C (s), `None` if either parameter is unset.
    pub fn time_constant(&self) -> Option<Real> {
        self.capacitor
            .capacitance()
            .and_then(|c| self.resistor.time_constant(c))
    }

    /// Perform one update pair: capacitor voltage, then resistor current.
    ///
    /// Both updates are always attempted. A failed update leaves its element
    /// untouched; the first failure is returned.
    pub fn step(&mut self, dt: Real) -> SimResult<()> {
        let voltage = require(self.capacitor.current(), Capacitor::KIND, "current")
            .and_then(|i| self.capacitor.update_voltage(i, dt));

        let capacitance = match (&voltage, self.capacitor.capacitance()) {
            (_, Some(c)) => Ok(c),
            // already reported by the capacitor update
            (Err(e @ SimError::UninitializedState { quantity: "capacitance", .. }), None) => {
                Err(e.clone())
            }
            (_, None) => require(None, Capacitor::KIND, "capacitance"),
        };
        let current = capacitance.and_then(|c| self.resistor.update_current(dt, c));

        voltage.and(current)
    }

    /// Stamp both elements with the elapsed time.
    pub fn set_time(&mut self, time: Real) {
        self.capacitor.set_time(time);
        self.resistor.set_time(time);
    }

    pub fn sample(&self, time: Real) -> Sample {
        Sample {
            time,
            voltage: self.capacitor.voltage(),
            current: self.resistor.current(),
        }
    }
}
