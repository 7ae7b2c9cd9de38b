use bon::Builder;
use serde::Serialize;

use crate::quantity::{
    electric::{AmpereHours, Volts},
    energy::WattHours,
    power::Watts,
    proportions::Percentage,
};

/// Inputs of a single runtime estimation.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Builder, Serialize)]
pub struct EstimationRequest {
    /// Current state of charge.
    #[builder(default = EstimationRequest::DEFAULT.current_percentage)]
    pub current_percentage: Percentage,

    /// Instantaneous power draw.
    #[builder(default = EstimationRequest::DEFAULT.discharge_rate)]
    pub discharge_rate: Watts,

    /// Nameplate capacity.
    #[builder(default = EstimationRequest::DEFAULT.battery_capacity)]
    pub battery_capacity: AmpereHours,

    /// Nominal system voltage.
    #[builder(default = EstimationRequest::DEFAULT.voltage)]
    pub voltage: Volts,

    /// State of charge at which the battery is considered empty.
    #[builder(default = EstimationRequest::DEFAULT.low_threshold)]
    pub low_threshold: Percentage,
}

impl EstimationRequest {
    /// Values the form starts with and returns to on reset.
    pub const DEFAULT: Self = Self {
        current_percentage: Percentage(0.0),
        discharge_rate: Watts(0.0),
        battery_capacity: AmpereHours(50.0),
        voltage: Volts(48.0),
        low_threshold: Percentage(10.0),
    };

    /// Share of the capacity between the current charge and the low threshold.
    #[must_use]
    pub fn usable_ratio(&self) -> f64 {
        (self.current_percentage - self.low_threshold).to_ratio()
    }

    pub fn stored_energy(&self) -> WattHours {
        self.battery_capacity * self.voltage
    }

    pub fn usable_energy(&self) -> WattHours {
        self.stored_energy() * self.usable_ratio()
    }
}

impl Default for EstimationRequest {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn defaults() {
        let request = EstimationRequest::default();
        assert_eq!(request.current_percentage, Percentage(0.0));
        assert_eq!(request.discharge_rate, Watts(0.0));
        assert_eq!(request.battery_capacity, AmpereHours(50.0));
        assert_eq!(request.voltage, Volts(48.0));
        assert_eq!(request.low_threshold, Percentage(10.0));
    }

    #[test]
    fn builder_falls_back_to_defaults() {
        let request = EstimationRequest::builder().current_percentage(Percentage(50.0)).build();
        assert_eq!(request.current_percentage, Percentage(50.0));
        assert_eq!(request.battery_capacity, AmpereHours(50.0));
        assert_eq!(request.low_threshold, Percentage(10.0));
    }

    #[test]
    fn energy() {
        let request = EstimationRequest::builder()
            .current_percentage(Percentage(50.0))
            .discharge_rate(Watts(100.0))
            .build();
        assert_abs_diff_eq!(request.usable_ratio(), 0.4);
        assert_eq!(request.stored_energy(), WattHours(2400.0));
        assert_abs_diff_eq!(request.usable_energy().0, 960.0);
    }
}
