use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::client_type_controller::ClientTypeController;
use crate::dto::client_type_dto::{ClientTypeView, NewClientTypeRequest, UpdateDiscountRequest};
use crate::dto::common::{ApiListResponse, ApiResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_client_type_router() -> Router<AppState> {
    Router::new()
        .route("/add", post(create_client_type))
        .route("/get_by_id/:id", get(get_client_type))
        .route("/get_all", get(list_client_types))
        .route("/update_discount", put(update_discount))
}

async fn create_client_type(
    State(state): State<AppState>,
    Json(request): Json<NewClientTypeRequest>,
) -> Result<ApiResponse<i32>, AppError> {
    let controller = ClientTypeController::new(state.pool.clone());
    let id = controller.create(request).await?;
    Ok(ApiResponse::ok(id))
}

async fn get_client_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<ClientTypeView>, AppError> {
    let controller = ClientTypeController::new(state.pool.clone());
    let client_type = controller.get_by_id(id).await?;
    Ok(ApiResponse::ok(client_type))
}

async fn list_client_types(
    State(state): State<AppState>,
) -> Result<ApiListResponse<ClientTypeView>, AppError> {
    let controller = ClientTypeController::new(state.pool.clone());
    let client_types = controller.list().await?;
    Ok(ApiListResponse::ok(client_types))
}

async fn update_discount(
    State(state): State<AppState>,
    Json(request): Json<UpdateDiscountRequest>,
) -> Result<ApiResponse<bool>, AppError> {
    let controller = ClientTypeController::new(state.pool.clone());
    controller.update_discount(request).await?;
    Ok(ApiResponse::ok(true))
}
