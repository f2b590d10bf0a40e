//! Capacitor element: voltage accumulates from the current driven through it.

use rc_core::Real;

use crate::element::{Element, ElectricalState, require};
use crate::error::SimResult;

/// Ideal capacitor.
///
/// Constitutive relation `I = C·dV/dt`, advanced with forward Euler:
///
/// ```text
/// V_{n+1} = V_n + I_n·Δt / C
/// ```
///
/// Capacitance is not range checked. Zero gives a non-finite voltage,
/// a negative value inverts the charging direction.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capacitor {
    state: ElectricalState,
    /// Capacitance (F)
    capacitance: Option<Real>,
}

impl Capacitor {
    pub fn new(time: Real, voltage: Real, current: Real, capacitance: Real) -> Self {
        Self {
            state: ElectricalState::new(time, voltage, current),
            capacitance: Some(capacitance),
        }
    }

    pub fn capacitance(&self) -> Option<Real> {
        self.capacitance
    }

    pub fn set_capacitance(&mut self, capacitance: Real) {
        self.capacitance = Some(capacitance);
    }

    pub fn clear_capacitance(&mut self) {
        self.capacitance = None;
    }

    /// Current implied by a voltage slope, `C·dV/dt`.
    pub fn calculate_current(&self, dv_dt: Real) -> Option<Real> {
        self.capacitance.map(|c| c * dv_dt)
    }

    /// Advance the stored voltage by one explicit Euler step.
    ///
    /// # Errors
    /// [`SimError::UninitializedState`](crate::SimError::UninitializedState)
    /// if voltage or capacitance is unset. The state is left untouched.
    pub fn update_voltage(&mut self, current: Real, dt: Real) -> SimResult<()> {
        let v = require(self.state.voltage(), Self::KIND, "voltage")?;
        let c = require(self.capacitance, Self::KIND, "capacitance")?;

        self.state.set_voltage(v + current * dt / c);
        Ok(())
    }
}

impl Element for Capacitor {
    const KIND: &'static str = "capacitor";

    fn state(&self) -> &ElectricalState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ElectricalState {
        &mut self.state
    }
}
