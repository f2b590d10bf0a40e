//! Resistor element: current decays with the RC time constant.

use rc_core::Real;

use crate::element::{Element, ElectricalState, require};
use crate::error::SimResult;

/// Ideal resistor discharging through a series capacitor.
///
/// ```text
/// I_{n+1} = I_n - (I_n / (r·C))·Δt
/// ```
///
/// `C` belongs to the capacitor and is passed in on every update; the
/// resistor never stores it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resistor {
    state: ElectricalState,
    /// Resistance (Ω)
    resistance: Option<Real>,
}

impl Resistor {
    pub fn new(time: Real, voltage: Real, current: Real, resistance: Real) -> Self {
        Self {
            state: ElectricalState::new(time, voltage, current),
            resistance: Some(resistance),
        }
    }

    pub fn resistance(&self) -> Option<Real> {
        self.resistance
    }

    pub fn set_resistance(&mut self, resistance: Real) {
        self.resistance = Some(resistance);
    }

    pub fn clear_resistance(&mut self) {
        self.resistance = None;
    }

    /// τ = r·C for the given capacitance (s).
    pub fn time_constant(&self, capacitance: Real) -> Option<Real> {
        self.resistance.map(|r| r * capacitance)
    }

    /// Advance the stored current by one explicit Euler step of `dI/dt = -I/(rC)`.
    ///
    /// # Errors
    /// [`SimError::UninitializedState`](crate::SimError::UninitializedState)
    /// if current or resistance is unset. The state is left untouched.
    pub fn update_current(&mut self, dt: Real, capacitance: Real) -> SimResult<()> {
        let i = require(self.state.current(), Self::KIND, "current")?;
        let r = require(self.resistance, Self::KIND, "resistance")?;

        self.state.set_current(i - (i / (r * capacitance)) * dt);
        Ok(())
    }
}

impl Element for Resistor {
    const KIND: &'static str = "resistor";

    fn state(&self) -> &ElectricalState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ElectricalState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn decay_step_matches_formula() {
        let mut res = Resistor::new(0.0, 0.0, 1e-2, 1e3);
        res.update_current(1e-10, 100e-12).unwrap();

        // dt/τ = 1e-3, so one step removes a thousandth of the current
        let i = res.current().unwrap();
        assert!((i - 9.99e-3).abs() < 1e-15);
    }

    #[test]
    fn capacitance_is_taken_from_caller() {
        let mut a = Resistor::new(0.0, 0.0, 1.0, 10.0);
        let mut b = a.clone();
        a.update_current(0.1, 1.0).unwrap();
        b.update_current(0.1, 2.0).unwrap();

        assert_eq!(a.current(), Some(1.0 - (1.0 / 10.0) * 0.1));
        assert_eq!(b.current(), Some(1.0 - (1.0 / 20.0) * 0.1));
    }

    #[test]
    fn time_constant_is_r_times_c() {
        let res = Resistor::new(0.0, 0.0, 0.0, 1e3);
        let tau = res.time_constant(100e-12).unwrap();
        assert!((tau - 1e-7).abs() < 1e-20);
        assert_eq!(Resistor::default().time_constant(1.0), None);
    }

    #[test]
    fn missing_current_is_a_noop() {
        let mut res = Resistor::new(0.0, 0.0, 1e-2, 1e3);
        res.state_mut().clear_current();
        let before = res.clone();

        let err = res.update_current(1e-10, 100e-12).unwrap_err();
        assert_eq!(
            err,
            SimError::UninitializedState {
                element: "resistor",
                quantity: "current",
            }
        );
        assert_eq!(res, before);
    }

    #[test]
    fn missing_resistance_is_a_noop() {
        let mut res = Resistor::new(0.0, 0.0, 1e-2, 1e3);
        res.clear_resistance();
        let before = res.clone();

        assert!(res.update_current(1e-10, 100e-12).is_err());
        assert_eq!(res, before);
    }

    #[test]
    fn monotone_decay_for_small_step() {
        let c = 100e-12;
        let mut res = Resistor::new(0.0, 0.0, 1e-2, 1e3);
        let mut prev = res.current().unwrap();

        for _ in 0..10_000 {
            res.update_current(1e-10, c).unwrap();
            let next = res.current().unwrap();
            assert!(next < prev);
            assert!(next > 0.0);
            prev = next;
        }
    }

    #[test]
    fn negative_current_decays_toward_zero_from_below() {
        let mut res = Resistor::new(0.0, 0.0, -2.0, 1.0);
        res.update_current(0.25, 1.0).unwrap();
        assert_eq!(res.current(), Some(-1.5));
    }
}
