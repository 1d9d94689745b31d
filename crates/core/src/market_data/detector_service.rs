//! Price change detection service.

use std::sync::Mutex;

use log::debug;

use super::{ChangeRecord, ChangeSummary, DetectionResult, PricePoint, PriceMovement, PriceSnapshot, PriceTick};

/// Classifies incoming ticks against the previously observed snapshot.
///
/// The detector holds the previous snapshot behind a mutex; a detection pass
/// classifies every tick and swaps the new snapshot in while still holding
/// the lock, so concurrent `detect` calls always see a fully applied
/// predecessor.
#[derive(Debug, Default)]
pub struct PriceChangeDetector {
    previous: Mutex<PriceSnapshot>,
}

impl PriceChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `ticks` against the previous snapshot and makes the
    /// resulting snapshot the new baseline.
    ///
    /// Symbols absent before are NEW; otherwise prices compare at full
    /// decimal precision, never at a rounded display value. Symbols not
    /// present in `ticks` carry their last-known price forward.
    pub fn detect(&self, ticks: &[PriceTick]) -> DetectionResult {
        let mut previous = self.previous.lock().unwrap();

        let mut snapshot = previous.clone();
        let mut changes = Vec::with_capacity(ticks.len());

        for tick in ticks {
            let old_price = previous.price(&tick.symbol);
            let movement = match old_price {
                None => PriceMovement::New,
                Some(old) if tick.price > old => PriceMovement::Up,
                Some(old) if tick.price < old => PriceMovement::Down,
                Some(_) => PriceMovement::Same,
            };

            snapshot.insert(
                tick.symbol.clone(),
                PricePoint {
                    last: tick.price,
                    previous: old_price,
                    as_of: tick.timestamp,
                },
            );
            changes.push(ChangeRecord {
                symbol: tick.symbol.clone(),
                movement,
                old_price,
                new_price: tick.price,
            });
        }

        *previous = snapshot.clone();

        let summary = ChangeSummary::of(&changes);
        debug!("Detected {} tick(s): {}", ticks.len(), summary);

        DetectionResult {
            snapshot,
            changes,
            summary,
        }
    }

    /// The snapshot as of the last completed detection pass.
    pub fn snapshot(&self) -> PriceSnapshot {
        self.previous.lock().unwrap().clone()
    }
}
