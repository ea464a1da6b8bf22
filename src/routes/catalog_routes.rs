//! Rutas del catálogo

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::catalog_controller::CatalogController;
use crate::dto::catalog_dto::{PackageResponse, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/categories/:id/packages", get(list_packages))
        .route("/vehicles/:id", get(get_vehicle))
}

async fn list_packages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<PackageResponse>>, AppError> {
    let controller = CatalogController::new(state);
    let response = controller.list_packages(id).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = CatalogController::new(state);
    let response = controller.get_vehicle(id).await?;
    Ok(Json(response))
}
