use std::str::FromStr;

use crate::{
    core::{
        estimator::{Estimate, estimate},
        request::EstimationRequest,
    },
    prelude::*,
    quantity::{
        electric::{AmpereHours, Volts},
        power::Watts,
        proportions::Percentage,
    },
};

/// Editable input of the form.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Field {
    #[display("current-percentage")]
    CurrentPercentage,

    #[display("discharge-rate")]
    DischargeRate,

    #[display("battery-capacity")]
    BatteryCapacity,

    #[display("voltage")]
    Voltage,

    #[display("low-threshold")]
    LowThreshold,
}

impl Field {
    pub const ALL: [Self; 5] = [
        Self::CurrentPercentage,
        Self::DischargeRate,
        Self::BatteryCapacity,
        Self::Voltage,
        Self::LowThreshold,
    ];

    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::CurrentPercentage => "percentage",
            Self::DischargeRate => "power",
            Self::BatteryCapacity => "capacity",
            Self::Voltage => "volts",
            Self::LowThreshold => "threshold",
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        let name = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|field| field.to_string() == name || field.alias() == name)
            .with_context(|| format!("unknown field `{name}`"))
    }
}

/// In-memory form state: every change is followed by a recalculation.
#[must_use]
pub struct Form {
    request: EstimationRequest,
    estimate: Estimate,
}

impl Default for Form {
    fn default() -> Self {
        Self::new(EstimationRequest::DEFAULT)
    }
}

impl Form {
    pub fn new(request: EstimationRequest) -> Self {
        Self { request, estimate: estimate(&request) }
    }

    pub const fn request(&self) -> &EstimationRequest {
        &self.request
    }

    pub const fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::CurrentPercentage => self.request.current_percentage = Percentage(value),
            Field::DischargeRate => self.request.discharge_rate = Watts(value),
            Field::BatteryCapacity => self.request.battery_capacity = AmpereHours(value),
            Field::Voltage => self.request.voltage = Volts(value),
            Field::LowThreshold => self.request.low_threshold = Percentage(value),
        }
        debug!(%field, value, "updated");
        self.recalculate();
    }

    pub fn reset(&mut self) {
        self.request = EstimationRequest::DEFAULT;
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.estimate = estimate(&self.request);
    }
}
