//! Defines the two denominations a quantity can be entered in.

/// The unit a user-entered quantity is denominated in.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Unit {
    #[default]
    BTC, // Bitcoin
    USD, // United States Dollar
}

impl Unit {
    /// The unit a quantity in `self` converts into.
    pub fn counterpart(&self) -> Self {
        match self {
            Self::BTC => Self::USD,
            Self::USD => Self::BTC,
        }
    }

    /// Flips to the counterpart unit. The quantity itself is left alone.
    pub fn toggle(&mut self) {
        *self = self.counterpart();
    }

    /// Number of decimal places shown for an amount in this unit.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::BTC => 6,
            Self::USD => 2,
        }
    }

    /// Returns the ticker code (e.g., "BTC").
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BTC => "Bitcoin",
            Self::USD => "United States Dollar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn toggling_twice_returns_to_start() {
        for start in Unit::iter() {
            let mut unit = start;
            unit.toggle();
            assert_ne!(unit, start);
            unit.toggle();
            assert_eq!(unit, start);
        }
    }

    #[test]
    fn counterpart_is_the_other_unit() {
        assert_eq!(Unit::BTC.counterpart(), Unit::USD);
        assert_eq!(Unit::USD.counterpart(), Unit::BTC);
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Unit::from_str("usd"), Ok(Unit::USD));
        assert_eq!(Unit::from_str("Btc"), Ok(Unit::BTC));
        assert!(Unit::from_str("eur").is_err());
    }

    #[test]
    fn defaults_to_btc() {
        assert_eq!(Unit::default(), Unit::BTC);
        assert_eq!(Unit::default().code(), "BTC");
    }
}
