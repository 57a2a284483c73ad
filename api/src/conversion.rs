//! The conversion engine: turns a quantity in one unit into the other at the current rate.

use std::fmt;

use crate::unit::Unit;

/// Decimal places of the intermediate rounding step used for BTC results.
const BTC_INTERMEDIATE_DECIMALS: u8 = 7;

/// A converted amount, denominated in the counterpart of the input unit.
///
/// The value is already rounded to the unit's precision. `Display` renders it
/// as fixed-point with exactly [`Unit::decimals`] places (e.g. "100000.00",
/// "0.002000"). A non-numeric input yields a `NaN` value, which displays as "NaN".
/// An input too large for `f64` (e.g. "1e400") yields infinity, which displays as "inf".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputAmount {
    value: f64,
    unit: Unit,
}

impl OutputAmount {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit the amount is denominated in.
    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl fmt::Display for OutputAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", self.unit.decimals() as usize, self.value)
    }
}

/// Converts `amount`, denominated in `unit`, at `rate` USD per BTC.
///
/// Returns `None` while the rate is zero or otherwise unusable; callers keep
/// whatever they displayed before.
///
/// - BTC -> USD: `amount * rate`, rounded to 2 decimals.
/// - USD -> BTC: `amount / rate`, rounded to 7 decimals, then to 6 decimals.
pub fn convert(amount: f64, unit: Unit, rate: f64) -> Option<OutputAmount> {
    if rate.is_nan() || rate <= 0.0 {
        return None;
    }

    let target = unit.counterpart();
    let value = match unit {
        Unit::BTC => round_half_up(amount * rate, target.decimals()),
        Unit::USD => {
            let intermediate = round_half_up(amount / rate, BTC_INTERMEDIATE_DECIMALS);
            round_half_up(intermediate, target.decimals())
        }
    };

    Some(OutputAmount {
        value,
        unit: target,
    })
}

/// Rounds to `decimals` places, with halves going toward positive infinity.
///
/// `round_half_up(-0.125, 2)` is `-0.12`, unlike `f64::round` which rounds
/// halves away from zero.
pub fn round_half_up(value: f64, decimals: u8) -> f64 {
    let multiplier = 10_f64.powi(decimals as i32);
    let scaled = value * multiplier;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / multiplier
}

/// Coerces user-entered text into a quantity.
///
/// Surrounding whitespace is ignored and empty text counts as zero. Anything
/// that is not a number becomes `NaN`, which is left to flow through the
/// arithmetic untouched.
pub fn parse_quantity(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
