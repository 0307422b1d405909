//! HTTP gateway for the warehouse fulfillment service
//!
//! Thin transport shell: translates JSON requests into engine calls and
//! engine errors into status codes. No decision logic lives here.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
