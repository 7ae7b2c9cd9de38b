quantity!(Percentage, via: f64, suffix: "%", precision: 1);

impl Percentage {
    /// Convert the percentage into a ratio, `100 %` being `1.0`.
    pub const fn to_ratio(self) -> f64 {
        0.01 * self.0
    }
}
