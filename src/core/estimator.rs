use serde::Serialize;

use crate::{
    core::{request::EstimationRequest, runtime::Runtime, validation::ValidationError},
    prelude::*,
    quantity::{Zero, power::Watts, time::Hours},
};

/// Shown instead of the runtime while the inputs do not validate.
pub const ERROR_PLACEHOLDER: &str = "00:00";

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Estimate {
    pub runtime: Runtime,

    /// The estimate is still calculated when the request does not validate.
    pub error: Option<ValidationError>,
}

impl Estimate {
    #[must_use]
    pub fn duration_text(&self) -> String {
        self.runtime.to_string()
    }

    /// Duration text, or the placeholder if the request did not validate.
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.error.is_some() { ERROR_PLACEHOLDER.to_string() } else { self.duration_text() }
    }
}

/// Validate the request and estimate the remaining runtime.
pub fn estimate(request: &EstimationRequest) -> Estimate {
    let error = ValidationError::check(request);
    let hours = remaining_hours(request);
    let runtime = Runtime::from_hours(hours);
    debug!(?hours, %runtime, ?error, "estimated");
    Estimate { runtime, error }
}

/// Linear depletion of the energy above the low threshold at the current power draw.
pub fn remaining_hours(request: &EstimationRequest) -> Hours {
    if request.current_percentage <= request.low_threshold || request.discharge_rate <= Watts::ZERO
    {
        return Hours::ZERO;
    }
    request.usable_energy() / request.discharge_rate
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{
        electric::{AmpereHours, Volts},
        proportions::Percentage,
    };

    #[test]
    fn typical() {
        let request = EstimationRequest::builder()
            .current_percentage(Percentage(50.0))
            .discharge_rate(Watts(100.0))
            .battery_capacity(AmpereHours(50.0))
            .voltage(Volts(48.0))
            .low_threshold(Percentage(10.0))
            .build();
        assert_abs_diff_eq!(remaining_hours(&request).0, 9.6, epsilon = 1e-9);

        let estimate = estimate(&request);
        assert_eq!(estimate.duration_text(), "9h 36m");
        assert_eq!(estimate.display_text(), "9h 36m");
        assert_eq!(estimate.error, None);
    }

    #[test]
    fn battery_low() {
        let request = EstimationRequest::builder()
            .current_percentage(Percentage(10.0))
            .discharge_rate(Watts(100.0))
            .build();
        let estimate = estimate(&request);
        assert_eq!(estimate.duration_text(), "0h 0m");
        assert_eq!(estimate.error, Some(ValidationError::BatteryLow));
        assert_eq!(estimate.display_text(), ERROR_PLACEHOLDER);
    }

    #[test]
    fn no_power_usage() {
        let request = EstimationRequest::builder().current_percentage(Percentage(80.0)).build();
        let estimate = estimate(&request);
        assert_eq!(estimate.duration_text(), "0h 0m");
        assert_eq!(estimate.error, Some(ValidationError::NoPowerUsage));
    }

    /// The runtime is still computed while the capacity is rejected.
    #[test]
    fn computed_despite_error() {
        let request = EstimationRequest::builder()
            .current_percentage(Percentage(60.0))
            .discharge_rate(Watts(100.0))
            .battery_capacity(AmpereHours(-50.0))
            .build();
        let estimate = estimate(&request);
        assert_eq!(estimate.error, Some(ValidationError::NoCapacity));
        assert_eq!(estimate.runtime, Runtime::ZERO);
        assert_eq!(estimate.display_text(), ERROR_PLACEHOLDER);

        let request = EstimationRequest { voltage: Volts(0.0), ..request };
        assert_eq!(remaining_hours(&request), Hours::ZERO);
    }

    /// Matches the closed-form `capacity × voltage × (current − threshold) / 100 / power`.
    #[test]
    fn closed_form() {
        for (current, threshold, power, capacity, voltage) in [
            (100.0, 0.0, 1200.0, 100.0, 12.0),
            (73.0, 20.0, 350.0, 200.0, 24.0),
            (11.0, 10.0, 5.0, 50.0, 48.0),
            (99.5, 12.5, 2500.0, 280.0, 51.2),
        ] {
            let request = EstimationRequest {
                current_percentage: Percentage(current),
                discharge_rate: Watts(power),
                battery_capacity: AmpereHours(capacity),
                voltage: Volts(voltage),
                low_threshold: Percentage(threshold),
            };
            let expected = capacity * voltage * (current - threshold) / 100.0 / power;
            assert_abs_diff_eq!(remaining_hours(&request).0, expected, epsilon = 1e-9);

            let runtime = estimate(&request).runtime;
            assert!(runtime.minutes < 60);
            #[expect(clippy::cast_precision_loss)]
            let total_minutes = runtime.hours as f64 * 60.0 + f64::from(runtime.minutes);
            assert_abs_diff_eq!(total_minutes, expected * 60.0, epsilon = 0.5 + 1e-9);
        }
    }

    #[test]
    fn tiny_power_draw_caps_runtime() {
        let request = EstimationRequest::builder()
            .current_percentage(Percentage(50.0))
            .discharge_rate(Watts(1e-320))
            .build();
        let estimate = estimate(&request);
        assert_eq!(estimate.error, None);
        assert_eq!(estimate.runtime, Runtime::MAX);
    }

    #[test]
    fn carries_full_hour() {
        // 1.999 hours: 0.9995 × 2400 Wh ≈ 2398.8 Wh at 1200 W.
        let request = EstimationRequest {
            current_percentage: Percentage(99.95),
            discharge_rate: Watts(1200.0),
            battery_capacity: AmpereHours(50.0),
            voltage: Volts(48.0),
            low_threshold: Percentage(0.0),
        };
        assert_abs_diff_eq!(remaining_hours(&request).0, 1.999, epsilon = 1e-9);
        assert_eq!(estimate(&request).duration_text(), "2h 0m");
    }
}
