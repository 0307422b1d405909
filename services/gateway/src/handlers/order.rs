use crate::error::AppError;
use crate::models::{NextOrderResponse, SubmitOrderRequest, SubmitOrderResponse};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

pub async fn submit_order(
    State(state): State<AppState>,
    Json(payload): Json<SubmitOrderRequest>,
) -> Result<(StatusCode, Json<SubmitOrderResponse>), AppError> {
    let mut engine = state.engine.lock().await;

    let order = engine.submit(
        &payload.item,
        payload.quantity,
        &payload.category,
        &payload.timestamp,
    )?;

    tracing::info!(
        order_id = %order.order_id,
        item = %order.item,
        quantity = order.quantity,
        category = %order.category,
        "order submitted"
    );

    Ok((StatusCode::CREATED, Json(SubmitOrderResponse { order })))
}

pub async fn next_order(
    State(state): State<AppState>,
) -> Result<Json<NextOrderResponse>, AppError> {
    let mut engine = state.engine.lock().await;

    let order = engine.next_order()?;
    // Snapshot under the same lock so the reported inventory matches the
    // state right after this fulfillment.
    let inventory = engine.inventory_view();

    tracing::info!(
        order_id = %order.order_id,
        item = %order.item,
        quantity = order.quantity,
        "order fulfilled"
    );

    Ok(Json(NextOrderResponse { order, inventory }))
}
