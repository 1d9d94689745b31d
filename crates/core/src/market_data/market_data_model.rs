//! Market data domain models.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single price update for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTick {
    pub symbol: String,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl PriceTick {
    pub fn new(symbol: impl Into<String>, price: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            timestamp,
        }
    }
}

/// Latest observed price for a symbol, with the price it superseded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub last: Decimal,
    pub previous: Option<Decimal>,
    pub as_of: DateTime<Utc>,
}

/// The set of last-known prices across all tracked symbols.
///
/// Snapshots are applied whole: a recalculation cycle only ever sees a
/// snapshot that was fully built by the detector, never a half-applied one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    points: HashMap<String, PricePoint>,
}

impl PriceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, point: PricePoint) {
        self.points.insert(symbol.into(), point);
    }

    /// Last-known price for a symbol, if any tick has been observed for it.
    pub fn price(&self, symbol: &str) -> Option<Decimal> {
        self.points.get(symbol).map(|point| point.last)
    }

    pub fn point(&self, symbol: &str) -> Option<&PricePoint> {
        self.points.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PricePoint)> {
        self.points.iter()
    }
}

/// Classification of a price relative to the previous snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriceMovement {
    Up,
    Down,
    Same,
    New,
}

impl PriceMovement {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceMovement::Up => "UP",
            PriceMovement::Down => "DOWN",
            PriceMovement::Same => "SAME",
            PriceMovement::New => "NEW",
        }
    }

    /// Whether this movement counts as a change for recalculation purposes.
    /// SAME is reported but does not trigger a cycle on its own.
    pub fn is_change(&self) -> bool {
        !matches!(self, PriceMovement::Same)
    }
}

/// One classified price observation, produced per update cycle. Ephemeral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub symbol: String,
    pub movement: PriceMovement,
    pub old_price: Option<Decimal>,
    pub new_price: Decimal,
}

/// Counts of movements across one detection cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSummary {
    pub up: usize,
    pub down: usize,
    pub new: usize,
    pub same: usize,
}

impl ChangeSummary {
    pub fn of(records: &[ChangeRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            match record.movement {
                PriceMovement::Up => summary.up += 1,
                PriceMovement::Down => summary.down += 1,
                PriceMovement::New => summary.new += 1,
                PriceMovement::Same => summary.same += 1,
            }
        }
        summary
    }

    /// True when the cycle carried at least one UP, DOWN, or NEW movement.
    /// An all-SAME cycle is suppressed: no recalculation, no events.
    pub fn has_changes(&self) -> bool {
        self.up + self.down + self.new > 0
    }
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Changes: {} UP, {} DOWN, {} NEW",
            self.up, self.down, self.new
        )
    }
}

/// Result of one detection pass: the snapshot that was applied, every
/// classified record in tick order, and the movement counts.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    pub snapshot: PriceSnapshot,
    pub changes: Vec<ChangeRecord>,
    pub summary: ChangeSummary,
}

impl DetectionResult {
    /// Records that actually changed (UP/DOWN/NEW); SAME records are kept in
    /// `changes` for reporting but filtered out here.
    pub fn changed(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.changes.iter().filter(|record| record.movement.is_change())
    }
}
