//! Portfolio domain models.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::PricingError;

/// A holding of a given signed size in a given security.
///
/// A position refers to its security by symbol only; it never owns or
/// mutates the definition. The only mutation a position ever sees is a
/// replacement of its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    pub quantity: Decimal,
}

impl Position {
    pub fn new(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
        }
    }
}

/// Market value of one position at the snapshot it was recalculated under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionValue {
    pub symbol: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub market_value: Decimal,
}

/// Why a position was excluded from NAV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// Symbol not present in the security catalog.
    UnresolvedSecurity,
    /// No price observed for the symbol in the applied snapshot.
    MissingPrice,
    /// Valuation failed (expired option, missing contract terms).
    Pricing(PricingError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnresolvedSecurity => write!(f, "security not found in catalog"),
            SkipReason::MissingPrice => write!(f, "no price in snapshot"),
            SkipReason::Pricing(err) => write!(f, "{}", err),
        }
    }
}

/// A position excluded from the NAV of one recalculation, with its reason.
/// Flagged, never silently valued at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedPosition {
    pub symbol: String,
    pub reason: SkipReason,
}

/// The fully-applied result of one NAV recalculation.
///
/// Outcomes are published whole; readers never observe a NAV that mixes
/// old and new prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalculationOutcome {
    pub nav: Decimal,
    pub position_values: Vec<PositionValue>,
    pub skipped: Vec<SkippedPosition>,
    pub calculated_at: DateTime<Utc>,
}
