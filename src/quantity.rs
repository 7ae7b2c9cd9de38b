#[macro_use]
mod macros;

pub mod electric;
pub mod energy;
pub mod power;
pub mod proportions;
pub mod time;
mod zero;

pub use self::zero::Zero;
use crate::prelude::*;

/// Parse a user-supplied number.
///
/// An empty input reads as zero, the same way a cleared numeric field does.
/// Non-finite values are refused so that nothing downstream has to care about them.
pub fn parse_finite(text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = text.parse().with_context(|| format!("`{text}` is not a number"))?;
    ensure!(value.is_finite(), "`{text}` is not a finite number");
    Ok(value)
}
