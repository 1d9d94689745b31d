//! Security domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of instrument a security definition describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstrumentKind {
    Stock,
    Call,
    Put,
}

impl InstrumentKind {
    /// True for CALL and PUT definitions.
    pub fn is_option(&self) -> bool {
        matches!(self, InstrumentKind::Call | InstrumentKind::Put)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKind::Stock => "STOCK",
            InstrumentKind::Call => "CALL",
            InstrumentKind::Put => "PUT",
        }
    }
}

/// Immutable definition of a tradeable security.
///
/// Strike and maturity are present exactly when the instrument is an option;
/// the constructors enforce this so downstream pricing can rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityDefinition {
    pub symbol: String,
    pub kind: InstrumentKind,
    pub strike: Option<Decimal>,
    pub maturity: Option<NaiveDate>,
}

impl SecurityDefinition {
    /// Creates a plain equity definition.
    pub fn stock(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            kind: InstrumentKind::Stock,
            strike: None,
            maturity: None,
        }
    }

    /// Creates an option definition with its contract terms.
    pub fn option(
        symbol: impl Into<String>,
        kind: InstrumentKind,
        strike: Decimal,
        maturity: NaiveDate,
    ) -> Self {
        debug_assert!(kind.is_option());
        Self {
            symbol: symbol.into(),
            kind,
            strike: Some(strike),
            maturity: Some(maturity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_stock_definition_has_no_contract_terms() {
        let def = SecurityDefinition::stock("AAPL");
        assert_eq!(def.kind, InstrumentKind::Stock);
        assert!(def.strike.is_none());
        assert!(def.maturity.is_none());
    }

    #[test]
    fn test_option_definition_carries_contract_terms() {
        let maturity = NaiveDate::from_ymd_opt(2027, 1, 15).unwrap();
        let def = SecurityDefinition::option("AAPL270115C", InstrumentKind::Call, dec!(150), maturity);
        assert!(def.kind.is_option());
        assert_eq!(def.strike, Some(dec!(150)));
        assert_eq!(def.maturity, Some(maturity));
    }

    #[test]
    fn test_definition_serialization() {
        let def = SecurityDefinition::stock("MSFT");
        let json = serde_json::to_string(&def).unwrap();
        assert!(json.contains("\"STOCK\""));

        let back: SecurityDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, def);
    }
}
