//! Identifier types for warehouse entities
//!
//! Order identifiers use UUID v7 for time-sortable ordering, enabling
//! chronological queries over fulfillment history. Item identifiers are
//! plain non-empty strings as they arrive from upstream catalog systems.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an order
///
/// Uses UUID v7 for time-based sorting. Orders can be efficiently
/// queried in chronological order using the embedded timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Create a new OrderId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item identifier (stock-keeping name)
///
/// Must be non-empty. Item names are compared exactly; no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new ItemId from a string
    ///
    /// # Panics
    /// Panics if the name is empty
    pub fn new(name: impl Into<String>) -> Self {
        let s = name.into();
        assert!(!s.is_empty(), "ItemId must be non-empty");
        Self(s)
    }

    /// Try to create an ItemId, returning None if empty
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let s = name.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Get the item name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_creation() {
        let id1 = OrderId::new();
        let id2 = OrderId::new();
        assert_ne!(id1, id2, "OrderIds should be unique");
    }

    #[test]
    fn test_order_id_serialization() {
        let id = OrderId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_item_id_creation() {
        let item = ItemId::new("milk");
        assert_eq!(item.as_str(), "milk");
    }

    #[test]
    fn test_item_id_try_new() {
        assert!(ItemId::try_new("bread").is_some());
        assert!(ItemId::try_new("").is_none());
    }

    #[test]
    #[should_panic(expected = "ItemId must be non-empty")]
    fn test_item_id_empty_panics() {
        ItemId::new("");
    }

    #[test]
    fn test_item_id_serialization() {
        let item = ItemId::new("eggs");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, "\"eggs\"");

        let deserialized: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
