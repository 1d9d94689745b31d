use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while valuing a single position.
///
/// These are per-position failures: a recalculation cycle records them as
/// skips and keeps going, it never aborts on one.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PricingError {
    #[error("Option {symbol} matured on {maturity}, before valuation date {as_of}")]
    Expired {
        symbol: String,
        maturity: NaiveDate,
        as_of: NaiveDate,
    },

    #[error("Option {0} has no strike price")]
    MissingStrike(String),

    #[error("Option {0} has no maturity date")]
    MissingMaturity(String),
}
