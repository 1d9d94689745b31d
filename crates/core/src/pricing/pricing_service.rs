//! Pricing engine trait and the shipped intrinsic-value implementation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::PricingError;
use crate::securities::{InstrumentKind, SecurityDefinition};

/// Values a position of `quantity` units of `definition` at `price`.
///
/// Implementations are pure computations over `Decimal`; monetary values
/// never pass through floating point, so repeated valuations at the same
/// inputs are bit-for-bit identical.
pub trait PricingEngineTrait: Send + Sync {
    fn value(
        &self,
        definition: &SecurityDefinition,
        quantity: Decimal,
        price: Decimal,
        as_of: NaiveDate,
    ) -> Result<Decimal, PricingError>;
}

/// Intrinsic-value pricing.
///
/// Equities value linearly. Options value at intrinsic:
/// `max(price - strike, 0)` per unit for calls, `max(strike - price, 0)`
/// for puts, so a long option position is never negative. Time value is
/// deliberately ignored; a closed-form model would pull monetary math
/// through `f64` transcendentals.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntrinsicPricingEngine;

impl IntrinsicPricingEngine {
    pub fn new() -> Self {
        Self
    }

    fn option_terms(
        definition: &SecurityDefinition,
        as_of: NaiveDate,
    ) -> Result<Decimal, PricingError> {
        let strike = definition
            .strike
            .ok_or_else(|| PricingError::MissingStrike(definition.symbol.clone()))?;
        let maturity = definition
            .maturity
            .ok_or_else(|| PricingError::MissingMaturity(definition.symbol.clone()))?;
        if maturity < as_of {
            return Err(PricingError::Expired {
                symbol: definition.symbol.clone(),
                maturity,
                as_of,
            });
        }
        Ok(strike)
    }
}

impl PricingEngineTrait for IntrinsicPricingEngine {
    fn value(
        &self,
        definition: &SecurityDefinition,
        quantity: Decimal,
        price: Decimal,
        as_of: NaiveDate,
    ) -> Result<Decimal, PricingError> {
        let unit_value = match definition.kind {
            InstrumentKind::Stock => price,
            InstrumentKind::Call => {
                let strike = Self::option_terms(definition, as_of)?;
                (price - strike).max(Decimal::ZERO)
            }
            InstrumentKind::Put => {
                let strike = Self::option_terms(definition, as_of)?;
                (strike - price).max(Decimal::ZERO)
            }
        };
        Ok(quantity * unit_value)
    }
}
