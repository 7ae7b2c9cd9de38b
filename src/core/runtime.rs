use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{Zero, time::Hours},
};

/// Remaining runtime rounded to whole minutes.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Runtime {
    pub hours: u64,

    /// Always within `0..60`.
    pub minutes: u8,
}

impl Runtime {
    pub const ZERO: Self = Self { hours: 0, minutes: 0 };

    /// Longest representable runtime, anything beyond is capped to it.
    pub const MAX: Self = Self { hours: u64::MAX, minutes: 0 };

    /// Split the fractional hours into whole hours and rounded minutes.
    ///
    /// Minutes that round up to a full hour are carried over, so `1.999 h` becomes `2h 0m`.
    /// Negative and `NaN` durations collapse to zero, durations past [`Runtime::MAX`] are capped.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn from_hours(hours: Hours) -> Self {
        if hours.0.is_nan() || hours <= Hours::ZERO {
            return Self::ZERO;
        }
        // `u64::MAX as f64` rounds up to 2⁶⁴, the first value that does not fit.
        if hours.0 >= u64::MAX as f64 {
            warn!(?hours, "runtime is out of range, capping");
            return Self::MAX;
        }
        let whole_hours = hours.0.floor();
        let minutes = ((hours.0 - whole_hours) * 60.0).round();
        let (whole_hours, minutes) = (whole_hours as u64, minutes as u8);
        if minutes >= 60 {
            Self { hours: whole_hours.saturating_add(1), minutes: 0 }
        } else {
            Self { hours: whole_hours, minutes }
        }
    }
}

impl Display for Runtime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}
