//! Portfolio monitor service.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use log::info;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::events::{EventBus, MonitorEvent};
use crate::market_data::{ChangeSummary, PriceChangeDetector, PriceTick};
use crate::portfolio::{Portfolio, RecalculationOutcome};

/// Where an update cycle currently is. Exposed for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CycleState {
    Idle,
    Detecting,
    Recalculating,
    Publishing,
}

/// What one update cycle produced.
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    /// Detection found no UP/DOWN/NEW movement; recalculation and
    /// publication were suppressed.
    NoChange { summary: ChangeSummary },

    /// The portfolio was revalued and events were published.
    Recalculated {
        outcome: Arc<RecalculationOutcome>,
        summary: ChangeSummary,
    },
}

/// Drives the update cycle: Detecting, then Recalculating, then Publishing.
///
/// Cycles are serialized on an internal mutex; ticks submitted concurrently
/// queue up and run as whole cycles, never interleaved. Readers of
/// `nav()`/`state()` do not take the cycle lock and only ever observe
/// fully-published values.
pub struct PortfolioMonitor {
    portfolio: Arc<Portfolio>,
    detector: PriceChangeDetector,
    bus: Arc<EventBus>,
    cycle: Mutex<()>,
    state: Mutex<CycleState>,
}

impl PortfolioMonitor {
    pub fn new(portfolio: Arc<Portfolio>, bus: Arc<EventBus>) -> Self {
        Self {
            portfolio,
            detector: PriceChangeDetector::new(),
            bus,
            cycle: Mutex::new(()),
            state: Mutex::new(CycleState::Idle),
        }
    }

    /// Runs one full update cycle over `ticks`.
    ///
    /// If detection yields only SAME classifications the cycle returns to
    /// idle without recalculating or publishing. Otherwise the portfolio is
    /// revalued against the new snapshot, one `MarketDataUpdate` is
    /// published per changed symbol, and a single `PortfolioRecalculated`
    /// closes the cycle.
    pub fn apply_ticks(&self, ticks: &[PriceTick]) -> CycleOutcome {
        let _cycle = self.cycle.lock().unwrap();

        self.set_state(CycleState::Detecting);
        let detection = self.detector.detect(ticks);

        if !detection.summary.has_changes() {
            self.set_state(CycleState::Idle);
            return CycleOutcome::NoChange {
                summary: detection.summary,
            };
        }

        self.set_state(CycleState::Recalculating);
        let as_of = Utc::now().date_naive();
        let outcome = self.portfolio.recalculate(&detection.snapshot, as_of);

        self.set_state(CycleState::Publishing);
        for change in detection.changed() {
            self.bus.publish(&MonitorEvent::market_data_update(
                change.symbol.clone(),
                change.old_price,
                change.new_price,
            ));
        }
        self.bus.publish(&MonitorEvent::portfolio_recalculated(
            outcome.nav,
            detection.changes.clone(),
        ));

        info!(
            "Update cycle complete: NAV {} ({})",
            outcome.nav.round_dp(DISPLAY_DECIMAL_PRECISION),
            detection.summary
        );

        self.set_state(CycleState::Idle);
        CycleOutcome::Recalculated {
            outcome,
            summary: detection.summary,
        }
    }

    /// Convenience for the single-tick feed path.
    pub fn apply_tick(&self, tick: PriceTick) -> CycleOutcome {
        self.apply_ticks(std::slice::from_ref(&tick))
    }

    /// Last published NAV, untouched by any in-flight cycle.
    pub fn nav(&self) -> Option<Decimal> {
        self.portfolio.nav()
    }

    pub fn portfolio(&self) -> &Arc<Portfolio> {
        &self.portfolio
    }

    pub fn state(&self) -> CycleState {
        *self.state.lock().unwrap()
    }

    fn set_state(&self, state: CycleState) {
        *self.state.lock().unwrap() = state;
    }
}
