//! Currency exchange rate model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::resource::Resource;

/// The rate GoCardless applies when converting between two currencies.
///
/// Fields the API leaves out decode to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyExchangeRate {
    /// Units of `target` per unit of `source`
    #[serde(default)]
    pub rate: Decimal,
    /// ISO 4217 code of the currency converted from
    #[serde(default)]
    pub source: String,
    /// ISO 4217 code of the currency converted to
    #[serde(default)]
    pub target: String,
    /// When the rate was published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

impl Resource for CurrencyExchangeRate {
    const PATH: &'static str = "/currency_exchange_rates";
    const KEY: &'static str = "currency_exchange_rates";
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_rate_string() {
        let rate: CurrencyExchangeRate = serde_json::from_str(
            r#"{
                "rate": "1.1234567890",
                "source": "GBP",
                "target": "EUR",
                "time": "2014-01-01T12:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(rate.rate, dec!(1.1234567890));
        assert_eq!(rate.source, "GBP");
        assert_eq!(rate.time.unwrap().to_rfc3339(), "2014-01-01T12:00:00+00:00");
    }

    #[test]
    fn test_deserialize_sparse_rate() {
        let rate: CurrencyExchangeRate = serde_json::from_str(r#"{"target": "EUR"}"#).unwrap();
        assert_eq!(rate.target, "EUR");
        assert!(rate.source.is_empty());
        assert!(rate.rate.is_zero());
        assert!(rate.time.is_none());
    }
}
