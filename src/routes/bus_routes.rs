use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::bus_controller::BusController;
use crate::dto::bus_dto::{BusView, NewBusRequest, SetPriceRequest, SetStatusRequest};
use crate::dto::common::{ApiListResponse, ApiResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_bus_router() -> Router<AppState> {
    Router::new()
        .route("/add", post(create_bus))
        .route("/get_by_id/:id", get(get_bus))
        .route("/get_all", get(list_buses))
        .route("/set_price", put(set_price))
        .route("/set_status", put(set_status))
        .route("/:id", delete(delete_bus))
}

async fn create_bus(
    State(state): State<AppState>,
    Json(request): Json<NewBusRequest>,
) -> Result<ApiResponse<i32>, AppError> {
    let controller = BusController::new(state.pool.clone());
    let id = controller.create(request).await?;
    Ok(ApiResponse::ok(id))
}

async fn get_bus(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<BusView>, AppError> {
    let controller = BusController::new(state.pool.clone());
    let bus = controller.get_by_id(id).await?;
    Ok(ApiResponse::ok(bus))
}

async fn list_buses(
    State(state): State<AppState>,
) -> Result<ApiListResponse<BusView>, AppError> {
    let controller = BusController::new(state.pool.clone());
    let buses = controller.list().await?;
    Ok(ApiListResponse::ok(buses))
}

async fn set_price(
    State(state): State<AppState>,
    Json(request): Json<SetPriceRequest>,
) -> Result<ApiResponse<bool>, AppError> {
    let controller = BusController::new(state.pool.clone());
    controller.set_price(request).await?;
    Ok(ApiResponse::ok(true))
}

async fn set_status(
    State(state): State<AppState>,
    Json(request): Json<SetStatusRequest>,
) -> Result<ApiResponse<bool>, AppError> {
    let controller = BusController::new(state.pool.clone());
    controller.set_status(request).await?;
    Ok(ApiResponse::ok(true))
}

async fn delete_bus(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<bool>, AppError> {
    let controller = BusController::new(state.pool.clone());
    let deleted = controller.delete(id).await?;
    Ok(ApiResponse::ok(deleted))
}
