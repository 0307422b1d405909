//! Order lifecycle types
//!
//! An order is validated once at submission, immutable afterwards, and
//! removed from the pending set exactly when it is fulfilled.

use crate::ids::{ItemId, OrderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency category of an order
///
/// Drives the primary selection key: `Perishable` outranks every other
/// category; all non-perishable categories are equal-ranked beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Time-sensitive stock, always served first
    Perishable,
    /// Everything else
    Standard,
}

impl Category {
    /// Selection rank; lower rank wins
    pub fn rank(&self) -> u8 {
        match self {
            Category::Perishable => 0,
            Category::Standard => 1,
        }
    }

    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Perishable => "perishable",
            Category::Standard => "standard",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    /// `non_perishable` is accepted as an alias for `standard`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perishable" => Ok(Category::Perishable),
            "standard" | "non_perishable" => Ok(Category::Standard),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A submitted warehouse order
///
/// `sequence` is assigned by the engine at submission and tie-breaks
/// orders whose timestamps collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub item: ItemId,
    pub quantity: u32,
    pub category: Category,
    pub submitted_at: DateTime<Utc>,
    pub sequence: u64,
}

impl Order {
    /// Create a new order with a fresh OrderId
    pub fn new(
        item: ItemId,
        quantity: u32,
        category: Category,
        submitted_at: DateTime<Utc>,
        sequence: u64,
    ) -> Self {
        Self {
            order_id: OrderId::new(),
            item,
            quantity,
            category,
            submitted_at,
            sequence,
        }
    }

    /// Composite selection key: (category rank, timestamp, sequence)
    ///
    /// The minimum key over the fulfillable subset wins.
    pub fn selection_key(&self) -> (u8, DateTime<Utc>, u64) {
        (self.category.rank(), self.submitted_at, self.sequence)
    }
}
