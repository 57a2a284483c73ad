//! Renderer-independent core of the BTC/USD converter: units, the conversion
//! engine, spot-rate polling state and the price providers it polls.

pub mod conversion;
pub mod error;
pub mod prefs;
pub mod price_providers;
pub mod spot_rate;
pub mod unit;
