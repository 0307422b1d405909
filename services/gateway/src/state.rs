use fulfillment_engine::FulfillmentEngine;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state
///
/// One engine instance behind a mutex: every mutation holds the lock for
/// the full validation+selection+decrement, so concurrent requests never
/// double-select an order or observe a half-applied decrement.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<FulfillmentEngine>>,
}

impl AppState {
    pub fn new(engine: FulfillmentEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}
