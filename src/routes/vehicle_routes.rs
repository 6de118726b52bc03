use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::dto::vehicle_dto::{VehicleRequest, VehicleResponse, VehicleSearchQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(search_vehicles).post(create_vehicle))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

async fn get_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<VehicleResponse>, AppError> {
    let Path(id) = id?;
    let response = state.vehicles.get_by_id(id).await?;
    Ok(Json(response))
}

async fn search_vehicles(
    State(state): State<AppState>,
    query: Result<Query<VehicleSearchQuery>, QueryRejection>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let Query(query) = query?;
    let response = state.vehicles.search(query).await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    request: Result<Json<VehicleRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = request?;
    let response = state.vehicles.create(request).await?;
    let location = format!("/vehicles/{}", response.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    )
        .into_response())
}

async fn update_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    request: Result<Json<VehicleRequest>, JsonRejection>,
) -> Result<Json<VehicleResponse>, AppError> {
    let Path(id) = id?;
    let Json(request) = request?;
    let response = state.vehicles.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.vehicles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
