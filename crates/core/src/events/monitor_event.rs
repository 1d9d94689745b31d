//! Monitor event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::market_data::ChangeRecord;

/// Events published by the monitor during an update cycle.
///
/// These represent facts about observed market data and completed
/// recalculations. Listeners (presenters, loggers, downstream feeds)
/// translate them into their own actions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MonitorEvent {
    /// A tracked symbol moved (UP, DOWN, or first observation).
    MarketDataUpdate {
        symbol: String,
        old_price: Option<Decimal>,
        new_price: Decimal,
    },

    /// The portfolio NAV was recalculated after a detection cycle.
    PortfolioRecalculated {
        nav: Decimal,
        changes: Vec<ChangeRecord>,
    },
}

/// Subscription key: which kind of event a listener wants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    MarketDataUpdate,
    PortfolioRecalculated,
}

impl MonitorEvent {
    /// Creates a MarketDataUpdate event.
    pub fn market_data_update(
        symbol: impl Into<String>,
        old_price: Option<Decimal>,
        new_price: Decimal,
    ) -> Self {
        Self::MarketDataUpdate {
            symbol: symbol.into(),
            old_price,
            new_price,
        }
    }

    /// Creates a PortfolioRecalculated event.
    pub fn portfolio_recalculated(nav: Decimal, changes: Vec<ChangeRecord>) -> Self {
        Self::PortfolioRecalculated { nav, changes }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            MonitorEvent::MarketDataUpdate { .. } => EventKind::MarketDataUpdate,
            MonitorEvent::PortfolioRecalculated { .. } => EventKind::PortfolioRecalculated,
        }
    }
}
