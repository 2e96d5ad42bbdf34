use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::transaction_controller::TransactionController;
use crate::dto::common::{ApiListResponse, ApiResponse};
use crate::dto::transaction_dto::{NewTransactionRequest, TransactionView};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_transaction_router() -> Router<AppState> {
    Router::new()
        .route("/add", post(create_transaction))
        .route("/get_by_id/:id", get(get_transaction))
        .route("/get_all", get(list_transactions))
}

async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<NewTransactionRequest>,
) -> Result<ApiResponse<i32>, AppError> {
    let controller =
        TransactionController::new(state.pool.clone(), state.config.reopen_delay());
    let id = controller.reserve(request).await?;
    Ok(ApiResponse::ok(id))
}

async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<TransactionView>, AppError> {
    let controller =
        TransactionController::new(state.pool.clone(), state.config.reopen_delay());
    let transaction = controller.get_by_id(id).await?;
    Ok(ApiResponse::ok(transaction))
}

async fn list_transactions(
    State(state): State<AppState>,
) -> Result<ApiListResponse<TransactionView>, AppError> {
    let controller =
        TransactionController::new(state.pool.clone(), state.config.reopen_delay());
    let transactions = controller.list().await?;
    Ok(ApiListResponse::ok(transactions))
}
