use serde::Serialize;

use crate::{
    core::request::EstimationRequest,
    quantity::{
        Zero,
        electric::{AmpereHours, Volts},
        power::Watts,
    },
};

/// Why the entered values do not make a meaningful estimate.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Serialize,
    derive_more::Display,
    derive_more::Error,
)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationError {
    #[display("Battery low.")]
    BatteryLow,

    #[display("Power usage must be greater than 0W")]
    NoPowerUsage,

    #[display("Battery capacity must be greater than 0Ah")]
    NoCapacity,

    #[display("Battery voltage must be greater than 0V")]
    NoVoltage,
}

impl ValidationError {
    /// Check the request, reporting only the first failed rule.
    ///
    /// The rules are checked in this order: charge above the threshold, positive power draw,
    /// positive capacity, and positive voltage.
    #[must_use]
    pub fn check(request: &EstimationRequest) -> Option<Self> {
        if request.current_percentage <= request.low_threshold {
            Some(Self::BatteryLow)
        } else if request.discharge_rate <= Watts::ZERO {
            Some(Self::NoPowerUsage)
        } else if request.battery_capacity <= AmpereHours::ZERO {
            Some(Self::NoCapacity)
        } else if request.voltage <= Volts::ZERO {
            Some(Self::NoVoltage)
        } else {
            None
        }
    }
}
