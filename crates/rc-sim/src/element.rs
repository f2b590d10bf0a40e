//! Electrical state shared by every two-terminal element.

use rc_core::Real;
use tracing::warn;

use crate::error::{SimError, SimResult};

/// Time, voltage and current of a two-terminal element.
///
/// Each quantity may be absent. Elements built through their `new`
/// constructors are fully initialized; absence only arises from
/// `Default` or an explicit `clear_*` call.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElectricalState {
    /// Elapsed simulation time (s)
    time: Option<Real>,
    /// Voltage across the element (V)
    voltage: Option<Real>,
    /// Current through the element (A)
    current: Option<Real>,
}

impl ElectricalState {
    pub fn new(time: Real, voltage: Real, current: Real) -> Self {
        Self {
            time: Some(time),
            voltage: Some(voltage),
            current: Some(current),
        }
    }

    pub fn time(&self) -> Option<Real> {
        self.time
    }

    pub fn voltage(&self) -> Option<Real> {
        self.voltage
    }

    pub fn current(&self) -> Option<Real> {
        self.current
    }

    pub fn set_time(&mut self, time: Real) {
        self.time = Some(time);
    }

    pub fn set_voltage(&mut self, voltage: Real) {
        self.voltage = Some(voltage);
    }

    pub fn set_current(&mut self, current: Real) {
        self.current = Some(current);
    }

    pub fn clear_time(&mut self) {
        self.time = None;
    }

    pub fn clear_voltage(&mut self) {
        self.voltage = None;
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }
}

/// Common read/write surface over an element's [`ElectricalState`].
///
/// Only concrete element types are ever stepped, so this trait is used
/// for static dispatch and shared accessors, never as `dyn Element`.
pub trait Element {
    /// Short name used in diagnostics ("capacitor", "resistor").
    const KIND: &'static str;

    fn state(&self) -> &ElectricalState;

    fn state_mut(&mut self) -> &mut ElectricalState;

    fn time(&self) -> Option<Real> {
        self.state().time()
    }

    fn voltage(&self) -> Option<Real> {
        self.state().voltage()
    }

    fn current(&self) -> Option<Real> {
        self.state().current()
    }

    fn set_time(&mut self, time: Real) {
        self.state_mut().set_time(time);
    }

    fn set_voltage(&mut self, voltage: Real) {
        self.state_mut().set_voltage(voltage);
    }

    fn set_current(&mut self, current: Real) {
        self.state_mut().set_current(current);
    }
}

/// Unwrap a quantity needed by an update rule.
///
/// A missing quantity is reported on the log channel and returned as
/// [`SimError::UninitializedState`]; the caller must not mutate state.
pub(crate) fn require(
    value: Option<Real>,
    element: &'static str,
    quantity: &'static str,
) -> SimResult<Real> {
    value.ok_or_else(|| {
        warn!(element, quantity, "update skipped: {quantity} is not initialized");
        SimError::UninitializedState { element, quantity }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_fully_initialized() {
        let state = ElectricalState::new(0.0, 1.5, 2e-3);
        assert_eq!(state.time(), Some(0.0));
        assert_eq!(state.voltage(), Some(1.5));
        assert_eq!(state.current(), Some(2e-3));
    }

    #[test]
    fn default_state_is_empty() {
        let state = ElectricalState::default();
        assert_eq!(state.time(), None);
        assert_eq!(state.voltage(), None);
        assert_eq!(state.current(), None);
    }

    #[test]
    fn setters_replace_only_their_field() {
        let mut state = ElectricalState::new(0.0, 1.0, 1.0);
        state.set_voltage(3.0);
        assert_eq!(state, ElectricalState::new(0.0, 3.0, 1.0));

        state.set_time(1e-9);
        state.set_current(-0.5);
        assert_eq!(state, ElectricalState::new(1e-9, 3.0, -0.5));
    }

    #[test]
    fn clear_makes_quantity_absent() {
        let mut state = ElectricalState::new(0.0, 1.0, 1.0);
        state.clear_current();
        assert_eq!(state.current(), None);
        assert_eq!(state.voltage(), Some(1.0));

        state.clear_voltage();
        state.clear_time();
        assert_eq!(state, ElectricalState::default());
    }

    #[test]
    fn require_reports_missing_quantity() {
        assert_eq!(require(Some(2.0), "capacitor", "voltage"), Ok(2.0));
        assert_eq!(
            require(None, "resistor", "resistance"),
            Err(SimError::UninitializedState {
                element: "resistor",
                quantity: "resistance",
            })
        );
    }
}
