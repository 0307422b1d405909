//! Inventory ledger
//!
//! Authoritative per-item stock mapping. Uses BTreeMap so snapshots
//! iterate in a deterministic order.

use std::collections::BTreeMap;
use types::errors::LedgerError;
use types::ids::ItemId;

/// Authoritative source of stock levels
///
/// Quantities never go below zero; `decrement` is the only mutating
/// operation and refuses to overdraw.
#[derive(Debug, Clone)]
pub struct Ledger {
    stock: BTreeMap<ItemId, u32>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            stock: BTreeMap::new(),
        }
    }

    /// Create a ledger from a starting stock snapshot
    ///
    /// # Panics
    /// Panics if any item name is empty
    pub fn with_stock<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            stock: items
                .into_iter()
                .map(|(item, quantity)| (ItemId::new(item), quantity))
                .collect(),
        }
    }

    /// Current stock for an item; 0 for unknown items
    pub fn get(&self, item: &ItemId) -> u32 {
        self.stock.get(item).copied().unwrap_or(0)
    }

    /// True iff current stock covers the requested quantity
    pub fn has(&self, item: &ItemId, quantity: u32) -> bool {
        self.get(item) >= quantity
    }

    /// Reduce stock for an item by `quantity`
    ///
    /// Fails with `InsufficientStock` if stock is short; the ledger is
    /// left untouched in that case. Items decremented to zero stay
    /// tracked so snapshots keep reporting them.
    pub fn decrement(&mut self, item: &ItemId, quantity: u32) -> Result<(), LedgerError> {
        let available = self.get(item);
        if available < quantity {
            return Err(LedgerError::InsufficientStock {
                item: item.to_string(),
                requested: quantity,
                available,
            });
        }
        self.stock.insert(item.clone(), available - quantity);
        Ok(())
    }

    /// Owned copy of all tracked items and quantities, for reporting
    pub fn snapshot(&self) -> BTreeMap<String, u32> {
        self.stock
            .iter()
            .map(|(item, quantity)| (item.as_str().to_string(), *quantity))
            .collect()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
