//! Estimation inputs shared by the commands.

use clap::Parser;

use crate::{
    core::request::EstimationRequest,
    prelude::*,
    quantity::{
        electric::{AmpereHours, Volts},
        parse_finite,
        power::Watts,
        proportions::Percentage,
    },
};

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct RequestArgs {
    /// Current battery state of charge in percent.
    #[clap(
        long = "battery-percentage",
        default_value = "0",
        env = "BATTERY_PERCENTAGE",
        allow_negative_numbers = true,
        value_parser = finite::<Percentage>
    )]
    pub current_percentage: Percentage,

    /// Power consumption in watts.
    #[clap(
        long = "power-usage-watts",
        default_value = "0",
        env = "POWER_USAGE_WATTS",
        allow_negative_numbers = true,
        value_parser = finite::<Watts>
    )]
    pub discharge_rate: Watts,

    /// Battery nameplate capacity in ampere-hours.
    #[clap(
        long = "battery-capacity-ampere-hours",
        default_value = "50",
        env = "BATTERY_CAPACITY_AMPERE_HOURS",
        allow_negative_numbers = true,
        value_parser = finite::<AmpereHours>
    )]
    pub battery_capacity: AmpereHours,

    /// Nominal battery voltage in volts.
    #[clap(
        long = "battery-voltage",
        default_value = "48",
        env = "BATTERY_VOLTAGE",
        allow_negative_numbers = true,
        value_parser = finite::<Volts>
    )]
    pub voltage: Volts,

    /// State of charge in percent at which the battery is considered empty.
    #[clap(
        long = "low-threshold-percentage",
        default_value = "10",
        env = "LOW_THRESHOLD_PERCENTAGE",
        allow_negative_numbers = true,
        value_parser = finite::<Percentage>
    )]
    pub low_threshold: Percentage,
}

impl From<RequestArgs> for EstimationRequest {
    fn from(args: RequestArgs) -> Self {
        Self::builder()
            .current_percentage(args.current_percentage)
            .discharge_rate(args.discharge_rate)
            .battery_capacity(args.battery_capacity)
            .voltage(args.voltage)
            .low_threshold(args.low_threshold)
            .build()
    }
}

fn finite<T: From<f64>>(text: &str) -> Result<T> {
    parse_finite(text).map(T::from)
}
