//! Wire models for the upstream finance API.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One currency block as reported by the upstream API.
///
/// Unknown sibling fields are ignored so additive upstream changes do not
/// break a fetch cycle.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CurrencyRate {
    pub name: String,
    pub buy: Decimal,
    pub sell: Decimal,
    pub variation: Decimal,
}

/// The two quotes a successful fetch cycle yields.
#[derive(Debug, Clone)]
pub struct RateSnapshot {
    pub dollar: CurrencyRate,
    pub euro: CurrencyRate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_rate_parses_upstream_block() {
        let json = r#"{"name": "Dollar", "buy": 5.3297, "sell": 5.3301, "variation": -0.344}"#;
        let rate: CurrencyRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.name, "Dollar");
        assert_eq!(rate.buy, dec!(5.3297));
        assert_eq!(rate.sell, dec!(5.3301));
        assert_eq!(rate.variation, dec!(-0.344));
    }

    #[test]
    fn currency_rate_ignores_unknown_fields() {
        let json = r#"{"name": "Euro", "buy": 6.1, "sell": 6.2, "variation": 0.12, "source": "BCB", "rank": 2}"#;
        let rate: CurrencyRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.name, "Euro");
        assert_eq!(rate.sell, dec!(6.2));
    }

    #[test]
    fn currency_rate_rejects_missing_sell() {
        let json = r#"{"name": "Dollar", "buy": 5.3, "variation": 0.1}"#;
        assert!(serde_json::from_str::<CurrencyRate>(json).is_err());
    }
}
