//! Portfolio service - position bookkeeping and NAV recalculation.

use std::sync::{Arc, RwLock};

use chrono::{NaiveDate, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;

use super::{Position, PositionValue, RecalculationOutcome, SkipReason, SkippedPosition};
use crate::market_data::PriceSnapshot;
use crate::pricing::PricingEngineTrait;
use crate::securities::SecurityCatalog;

/// An ordered collection of positions with an on-demand NAV.
///
/// Insertion order is preserved for display. The last recalculation outcome
/// is published atomically: `nav()` readers either see the previous outcome
/// or the new one, never a partially summed value. Per-position failures
/// degrade to skip records; recalculation itself never fails.
pub struct Portfolio {
    catalog: Arc<SecurityCatalog>,
    engine: Arc<dyn PricingEngineTrait>,
    positions: RwLock<Vec<Position>>,
    published: RwLock<Option<Arc<RecalculationOutcome>>>,
}

impl Portfolio {
    pub fn new(catalog: Arc<SecurityCatalog>, engine: Arc<dyn PricingEngineTrait>) -> Self {
        Self {
            catalog,
            engine,
            positions: RwLock::new(Vec::new()),
            published: RwLock::new(None),
        }
    }

    /// Adds a position, or replaces the quantity of an existing one in place.
    /// Re-adding a symbol keeps its original display slot.
    pub fn add_position(&self, symbol: impl Into<String>, quantity: Decimal) {
        let symbol = symbol.into();
        let mut positions = self.positions.write().unwrap();
        match positions.iter_mut().find(|p| p.symbol == symbol) {
            Some(existing) => existing.quantity = quantity,
            None => positions.push(Position::new(symbol, quantity)),
        }
    }

    /// Removes the position for `symbol`. Returns whether one existed.
    pub fn remove_position(&self, symbol: &str) -> bool {
        let mut positions = self.positions.write().unwrap();
        let before = positions.len();
        positions.retain(|p| p.symbol != symbol);
        positions.len() != before
    }

    /// Positions in insertion order.
    pub fn positions(&self) -> Vec<Position> {
        self.positions.read().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.positions.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.read().unwrap().is_empty()
    }

    /// Revalues every position against `snapshot` and publishes the outcome.
    ///
    /// Positions whose symbol does not resolve, whose symbol has no price in
    /// the snapshot, or whose valuation fails are excluded from NAV and
    /// recorded in `skipped` exactly once. Recalculating twice against an
    /// unchanged snapshot yields a bit-identical NAV.
    pub fn recalculate(
        &self,
        snapshot: &PriceSnapshot,
        as_of: NaiveDate,
    ) -> Arc<RecalculationOutcome> {
        let positions = self.positions.read().unwrap().clone();

        let mut nav = Decimal::ZERO;
        let mut position_values = Vec::with_capacity(positions.len());
        let mut skipped = Vec::new();

        for position in &positions {
            let definition = match self.catalog.resolve(&position.symbol) {
                Some(definition) => definition,
                None => {
                    warn!(
                        "Skipping position {}: security not found in catalog",
                        position.symbol
                    );
                    skipped.push(SkippedPosition {
                        symbol: position.symbol.clone(),
                        reason: SkipReason::UnresolvedSecurity,
                    });
                    continue;
                }
            };

            let price = match snapshot.price(&position.symbol) {
                Some(price) => price,
                None => {
                    warn!(
                        "Skipping position {}: no price in snapshot",
                        position.symbol
                    );
                    skipped.push(SkippedPosition {
                        symbol: position.symbol.clone(),
                        reason: SkipReason::MissingPrice,
                    });
                    continue;
                }
            };

            match self.engine.value(&definition, position.quantity, price, as_of) {
                Ok(market_value) => {
                    nav += market_value;
                    position_values.push(PositionValue {
                        symbol: position.symbol.clone(),
                        quantity: position.quantity,
                        price,
                        market_value,
                    });
                }
                Err(err) => {
                    warn!("Skipping position {}: {}", position.symbol, err);
                    skipped.push(SkippedPosition {
                        symbol: position.symbol.clone(),
                        reason: SkipReason::Pricing(err),
                    });
                }
            }
        }

        let outcome = Arc::new(RecalculationOutcome {
            nav,
            position_values,
            skipped,
            calculated_at: Utc::now(),
        });

        debug!(
            "Recalculated NAV {} over {} position(s), {} skipped",
            outcome.nav,
            outcome.position_values.len(),
            outcome.skipped.len()
        );

        *self.published.write().unwrap() = Some(outcome.clone());
        outcome
    }

    /// Last published NAV, if a recalculation has completed.
    pub fn nav(&self) -> Option<Decimal> {
        self.published
            .read()
            .unwrap()
            .as_ref()
            .map(|outcome| outcome.nav)
    }

    /// Last fully-published recalculation outcome.
    pub fn published(&self) -> Option<Arc<RecalculationOutcome>> {
        self.published.read().unwrap().clone()
    }
}
