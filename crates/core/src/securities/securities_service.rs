//! Symbol catalog service.

use dashmap::DashMap;

use super::SecurityDefinition;

/// Resolves symbols to security definitions.
///
/// Unknown symbols resolve to `None`; the catalog never fails a caller.
/// Lookups are lock-free so recalculation cycles can resolve concurrently
/// with catalog maintenance.
#[derive(Debug, Default)]
pub struct SecurityCatalog {
    definitions: DashMap<String, SecurityDefinition>,
}

impl SecurityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, replacing any previous one for the symbol.
    pub fn insert(&self, definition: SecurityDefinition) {
        self.definitions
            .insert(definition.symbol.clone(), definition);
    }

    /// Resolves a symbol to its definition. `None` for unknown symbols.
    pub fn resolve(&self, symbol: &str) -> Option<SecurityDefinition> {
        self.definitions
            .get(symbol)
            .map(|entry| entry.value().clone())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.definitions.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns all registered symbols, in no particular order.
    pub fn symbols(&self) -> Vec<String> {
        self.definitions
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }
}
