use fulfillment_engine::{FulfillmentEngine, Ledger};
use gateway::{AppState, create_router};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Stock snapshot the service starts from
const STARTING_STOCK: [(&str, u32); 3] = [("apple", 29), ("bread", 12), ("milk", 5)];

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting fulfillment gateway service");

    // Initialize application state
    let engine = FulfillmentEngine::new(Ledger::with_stock(STARTING_STOCK));
    let state = AppState::new(engine);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
