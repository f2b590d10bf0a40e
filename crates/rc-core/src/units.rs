// rc-core/src/units.rs

use uom::si::f64::{
    Capacitance as UomCapacitance, ElectricalResistance as UomElectricalResistance,
    Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Capacitance = UomCapacitance;
pub type Resistance = UomElectricalResistance;
pub type Time = UomTime;

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn farads(v: f64) -> Capacitance {
    use uom::si::capacitance::farad;
    Capacitance::new::<farad>(v)
}

#[inline]
pub fn ohms(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

/// Characteristic time of a series RC pair, τ = r·C.
#[inline]
pub fn time_constant(r: Resistance, c: Capacitance) -> Time {
    r * c
}

/// Raw SI values of typed quantities.
pub mod si {
    use super::*;

    #[inline]
    pub fn seconds(t: Time) -> f64 {
        t.get::<uom::si::time::second>()
    }
}
