use crate::models::InventoryResponse;
use crate::state::AppState;
use axum::{Json, extract::State};

pub async fn get_inventory(State(state): State<AppState>) -> Json<InventoryResponse> {
    let engine = state.engine.lock().await;

    Json(InventoryResponse {
        inventory: engine.inventory_view(),
    })
}
