use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use types::order::Order;

/// Submission payload
///
/// Fields arrive loosely typed on purpose: the engine owns validation and
/// reports the offending field, instead of the decoder rejecting the body.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOrderRequest {
    pub item: String,
    pub quantity: i64,
    pub category: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitOrderResponse {
    pub order: Order,
}

/// Selected order plus the inventory state after the decrement
#[derive(Debug, Clone, Serialize)]
pub struct NextOrderResponse {
    pub order: Order,
    pub inventory: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryResponse {
    pub inventory: BTreeMap<String, u32>,
}
