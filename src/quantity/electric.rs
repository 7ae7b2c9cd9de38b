//! Nameplate units of a battery bank.

use std::ops::Mul;

use crate::quantity::energy::WattHours;

quantity!(AmpereHours, via: f64, suffix: "Ah", precision: 1);
quantity!(Volts, via: f64, suffix: "V", precision: 1);

impl Mul<Volts> for AmpereHours {
    type Output = WattHours;

    fn mul(self, voltage: Volts) -> Self::Output {
        WattHours(self.0 * voltage.0)
    }
}

impl Mul<AmpereHours> for Volts {
    type Output = WattHours;

    fn mul(self, capacity: AmpereHours) -> Self::Output {
        capacity * self
    }
}
