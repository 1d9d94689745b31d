//! Loader domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::securities::InstrumentKind;

/// One parsed row of the position feed.
///
/// Equity rows carry only symbol and size; derivative rows additionally
/// carry the contract terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub symbol: String,
    pub kind: InstrumentKind,
    pub quantity: Decimal,
    pub strike: Option<Decimal>,
    pub maturity: Option<NaiveDate>,
}

impl PositionRecord {
    /// An equity row: (Symbol, Size).
    pub fn equity(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            kind: InstrumentKind::Stock,
            quantity,
            strike: None,
            maturity: None,
        }
    }

    /// A derivative row: (Symbol, Type, Size, Strike, Maturity).
    pub fn derivative(
        symbol: impl Into<String>,
        kind: InstrumentKind,
        quantity: Decimal,
        strike: Decimal,
        maturity: NaiveDate,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            kind,
            quantity,
            strike: Some(strike),
            maturity: Some(maturity),
        }
    }
}

/// What a successful load produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub loaded: usize,
    pub symbols: Vec<String>,
}
