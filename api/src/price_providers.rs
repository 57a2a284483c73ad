//! Defines traits and implementations for external spot price providers.

use crate::error::SpotPriceError;
use serde::Deserialize;

/// A trait for any service that can quote the BTC price in USD.
pub trait PriceProvider {
    /// Fetches the latest spot price, in USD per BTC.
    async fn get_spot_price(&self) -> Result<f64, SpotPriceError>;
}

/// The selectable price data providers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PriceProviderKind {
    #[default]
    #[strum(serialize = "coinbase")]
    Coinbase,
    #[strum(serialize = "coingecko")]
    CoinGecko,
}

impl PriceProviderKind {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl PriceProvider for PriceProviderKind {
    async fn get_spot_price(&self) -> Result<f64, SpotPriceError> {
        match self {
            Self::Coinbase => coinbase::Coinbase.get_spot_price().await,
            Self::CoinGecko => coin_gecko::CoinGecko.get_spot_price().await,
        }
    }
}

/// Rejects amounts that cannot be a price.
fn checked_price(amount: f64) -> Result<f64, SpotPriceError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(SpotPriceError::Malformed(format!(
            "{amount} is not a usable price"
        )))
    }
}

/// Issues the GET and hands back the body of a successful response.
async fn fetch_body(url: &str) -> Result<String, SpotPriceError> {
    let client = reqwest::Client::new();
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

/// Provides the spot price from the public Coinbase API.
pub mod coinbase {
    use super::*;

    pub const URL: &str = "https://api.coinbase.com/v2/prices/spot?currency=USD";

    /// The structure of the JSON response from Coinbase's spot price API.
    ///
    /// The API quotes the amount as a string, e.g. `{"data":{"amount":"50000.12", ...}}`.
    #[derive(Deserialize, Debug)]
    struct SpotResponse {
        data: SpotData,
    }

    #[derive(Deserialize, Debug)]
    struct SpotData {
        amount: String,
    }

    /// An implementation of the `PriceProvider` trait for Coinbase.
    pub struct Coinbase;

    impl Coinbase {
        /// Extracts the price from a response body.
        pub fn parse_body(body: &str) -> Result<f64, SpotPriceError> {
            let resp: SpotResponse = serde_json::from_str(body)?;
            let amount = resp.data.amount.trim().parse::<f64>().map_err(|_| {
                SpotPriceError::Malformed(format!(
                    "amount {:?} is not numeric",
                    resp.data.amount
                ))
            })?;
            checked_price(amount)
        }
    }

    impl PriceProvider for Coinbase {
        async fn get_spot_price(&self) -> Result<f64, SpotPriceError> {
            let body = fetch_body(URL).await?;
            Self::parse_body(&body)
        }
    }
}

/// Provides the spot price from the public CoinGecko API.
pub mod coin_gecko {
    use super::*;
    use std::collections::HashMap;

    pub const URL: &str =
        "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd";

    /// The structure of the JSON response from CoinGecko's simple price API.
    #[derive(Deserialize, Debug)]
    struct SimplePriceResponse {
        bitcoin: HashMap<String, f64>,
    }

    /// An implementation of the `PriceProvider` trait for CoinGecko.
    pub struct CoinGecko;

    impl CoinGecko {
        pub fn parse_body(body: &str) -> Result<f64, SpotPriceError> {
            let resp: SimplePriceResponse = serde_json::from_str(body)?;
            let price = resp
                .bitcoin
                .get("usd")
                .copied()
                .ok_or_else(|| SpotPriceError::Malformed("no usd quote for bitcoin".into()))?;
            checked_price(price)
        }
    }

    impl PriceProvider for CoinGecko {
        async fn get_spot_price(&self) -> Result<f64, SpotPriceError> {
            let body = fetch_body(URL).await?;
            Self::parse_body(&body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::coin_gecko::CoinGecko;
    use super::coinbase::Coinbase;
    use super::*;
    use std::str::FromStr;

    #[test]
    fn coinbase_parses_string_amount() {
        let body = r#"{"data":{"base":"BTC","currency":"USD","amount":"50123.45"}}"#;
        assert_eq!(Coinbase::parse_body(body).unwrap(), 50123.45);
    }

    #[test]
    fn coinbase_rejects_wrong_shape() {
        for body in [
            r#"{"amount":"50123.45"}"#,
            r#"{"data":{}}"#,
            r#"{"data":{"amount":50123.45}}"#,
            r#"{"errors":[{"id":"not_found","message":"Invalid currency"}]}"#,
            "<html>rate limited</html>",
            "",
        ] {
            let err = Coinbase::parse_body(body).unwrap_err();
            assert!(matches!(err, SpotPriceError::Malformed(_)), "{body}");
        }
    }

    #[test]
    fn coinbase_rejects_unusable_amounts() {
        for amount in ["abc", "", "-1", "NaN", "inf"] {
            let body = format!(r#"{{"data":{{"amount":"{amount}"}}}}"#);
            assert!(Coinbase::parse_body(&body).is_err(), "{amount}");
        }
    }

    #[test]
    fn coin_gecko_parses_usd_quote() {
        let body = r#"{"bitcoin":{"usd":61000.5}}"#;
        assert_eq!(CoinGecko::parse_body(body).unwrap(), 61000.5);
    }

    #[test]
    fn coin_gecko_requires_usd_quote() {
        let body = r#"{"bitcoin":{"eur":56000.0}}"#;
        assert!(matches!(
            CoinGecko::parse_body(body),
            Err(SpotPriceError::Malformed(_))
        ));
    }

    #[test]
    fn provider_kind_from_str() {
        assert_eq!(
            PriceProviderKind::from_str("CoinGecko"),
            Ok(PriceProviderKind::CoinGecko)
        );
        assert_eq!(
            PriceProviderKind::from_str("coinbase"),
            Ok(PriceProviderKind::Coinbase)
        );
        assert!(PriceProviderKind::from_str("kraken").is_err());
        assert_eq!(PriceProviderKind::default().name(), "coinbase");
    }
}
