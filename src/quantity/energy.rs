use std::ops::Div;

use crate::quantity::{power::Watts, time::Hours};

quantity!(WattHours, via: f64, suffix: "Wh", precision: 1);

impl Div<Watts> for WattHours {
    type Output = Hours;

    fn div(self, power: Watts) -> Self::Output {
        Hours(self.0 / power.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn drain_time() {
        assert_abs_diff_eq!((WattHours(960.0) / Watts(100.0)).0, 9.6);
    }

    #[test]
    fn display() {
        assert_eq!(WattHours(2400.0).to_string(), "2400.0 Wh");
        assert_eq!(format!("{:?}", WattHours(2400.0)), "2400.0Wh");
    }
}
