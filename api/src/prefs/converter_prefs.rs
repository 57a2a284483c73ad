use crate::price_providers::PriceProviderKind;
use crate::unit::Unit;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// How often the spot price is polled unless overridden.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;

/// Everything about the converter that can be set from outside.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ConverterPrefs {
    /// Where spot prices come from.
    provider: PriceProviderKind,

    /// Delay between the end of one fetch and the start of the next.
    poll_interval_secs: u64,

    /// The unit the quantity field starts out in.
    input_unit: Unit,
}

impl ConverterPrefs {
    /// Creates a ConverterPrefs instance from environment variables,
    /// falling back to the in-code defaults.
    ///
    /// # Environment Variables
    /// - `PRICE_PROVIDER`: "coinbase" or "coingecko".
    /// - `POLL_INTERVAL_SECS`: whole seconds, at least 1.
    /// - `INPUT_UNIT`: "BTC" or "USD".
    ///
    /// In the browser there is no process environment and the defaults apply.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let provider = lookup("PRICE_PROVIDER")
            .and_then(|s| PriceProviderKind::from_str(s.trim()).ok())
            .unwrap_or_default();

        let poll_interval_secs = lookup("POLL_INTERVAL_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs >= 1)
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        let input_unit = lookup("INPUT_UNIT")
            .and_then(|s| Unit::from_str(s.trim()).ok())
            .unwrap_or_default();

        Self {
            provider,
            poll_interval_secs,
            input_unit,
        }
    }

    pub fn provider(&self) -> PriceProviderKind {
        self.provider
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn input_unit(&self) -> Unit {
        self.input_unit
    }
}

impl Default for ConverterPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prefs_from(vars: &[(&str, &str)]) -> ConverterPrefs {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConverterPrefs::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let prefs = prefs_from(&[]);
        assert_eq!(prefs.provider(), PriceProviderKind::Coinbase);
        assert_eq!(prefs.poll_interval(), Duration::from_secs(3));
        assert_eq!(prefs.input_unit(), Unit::BTC);
    }

    #[test]
    fn reads_all_variables() {
        let prefs = prefs_from(&[
            ("PRICE_PROVIDER", "CoinGecko"),
            ("POLL_INTERVAL_SECS", "10"),
            ("INPUT_UNIT", "usd"),
        ]);
        assert_eq!(prefs.provider(), PriceProviderKind::CoinGecko);
        assert_eq!(prefs.poll_interval(), Duration::from_secs(10));
        assert_eq!(prefs.input_unit(), Unit::USD);
    }

    #[test]
    fn bad_values_fall_back() {
        let prefs = prefs_from(&[
            ("PRICE_PROVIDER", "kraken"),
            ("POLL_INTERVAL_SECS", "0"),
            ("INPUT_UNIT", "EUR"),
        ]);
        assert_eq!(prefs, prefs_from(&[]));

        let prefs = prefs_from(&[("POLL_INTERVAL_SECS", "soon")]);
        assert_eq!(prefs.poll_interval(), Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS));
    }
}
