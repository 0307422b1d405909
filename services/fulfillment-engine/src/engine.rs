//! Fulfillment engine core
//!
//! Owns the pending order set, validates submissions, and selects the
//! best fulfillable order against the inventory ledger.

use chrono::{DateTime, Utc};
use types::errors::{EngineError, ValidationError};
use types::ids::ItemId;
use types::order::{Category, Order};

use crate::ledger::Ledger;

/// Main fulfillment engine
///
/// All mutations go through `&mut self`, so a caller that serializes
/// access (one request at a time, or a lock held across the call) gets
/// one coherent state transition per operation.
pub struct FulfillmentEngine {
    /// Authoritative stock levels
    ledger: Ledger,
    /// Submitted, not-yet-fulfilled orders in submission order
    pending: Vec<Order>,
    /// Monotonic counter assigned to orders at submission
    sequence_counter: u64,
}

impl FulfillmentEngine {
    /// Create a new engine over a starting stock snapshot
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            pending: Vec::new(),
            sequence_counter: 0,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Validate and enqueue an order
    ///
    /// Performs no inventory check: an order may be accepted even if it
    /// is currently unfulfillable, to be revisited as stock changes.
    /// Quantity arrives as `i64` so that non-positive values are reported
    /// as validation failures rather than rejected at decode time.
    pub fn submit(
        &mut self,
        item: &str,
        quantity: i64,
        category: &str,
        timestamp: &str,
    ) -> Result<Order, EngineError> {
        let item = ItemId::try_new(item).ok_or(ValidationError::Item)?;

        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(ValidationError::Quantity { quantity })?;

        let category: Category = category.parse().map_err(|()| ValidationError::Category {
            value: category.to_string(),
        })?;

        let submitted_at = DateTime::parse_from_rfc3339(timestamp)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| ValidationError::Timestamp {
                value: timestamp.to_string(),
            })?;

        let order = Order::new(item, quantity, category, submitted_at, self.next_sequence());
        self.pending.push(order.clone());

        Ok(order)
    }

    /// Select, consume, and return the best fulfillable pending order
    ///
    /// Selection is the minimum of the composite key
    /// (category rank, timestamp, sequence) over the subset of pending
    /// orders the ledger can currently satisfy. Unfulfillable orders are
    /// never selected regardless of urgency.
    pub fn next_order(&mut self) -> Result<Order, EngineError> {
        if self.pending.is_empty() {
            return Err(EngineError::EmptyQueue);
        }

        let winner = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, order)| self.ledger.has(&order.item, order.quantity))
            .min_by_key(|(_, order)| order.selection_key())
            .map(|(index, _)| index);

        let Some(index) = winner else {
            return Err(EngineError::NoFulfillableOrder);
        };

        let order = self.pending.remove(index);

        // The availability filter above already proved stock covers this
        // order; a shortfall here means the engine state is corrupt.
        self.ledger
            .decrement(&order.item, order.quantity)
            .expect("stock verified before selection");

        Ok(order)
    }

    /// Read-only stock snapshot, for reporting
    pub fn inventory_view(&self) -> std::collections::BTreeMap<String, u32> {
        self.ledger.snapshot()
    }

    /// Read-only view of the pending set
    pub fn pending_orders(&self) -> &[Order] {
        &self.pending
    }

    /// Number of pending orders
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
