//! Fulfillment Engine Service
//!
//! Selects the single best pending order to fulfill next given current
//! stock, urgency category, and submission time.
//!
//! **Key Invariants:**
//! - Category-time-sequence priority strictly enforced
//! - Deterministic selection (same inputs → same outputs)
//! - An order whose quantity exceeds current stock is never selected
//! - Ledger quantities never go negative
//! - A fulfilled order is never observed again

pub mod engine;
pub mod ledger;

pub use engine::FulfillmentEngine;
pub use ledger::Ledger;
