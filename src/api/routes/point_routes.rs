//! Point routes (e.g., /api/points/*)

use axum::{routing::get, Router};

use crate::api::controller::point::PointController;
use crate::app_state::AppState;

pub fn point_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/points",
            get(PointController::get_all_points).post(PointController::create_point),
        )
        .route(
            "/points/{id}",
            get(PointController::get_point)
                .put(PointController::update_point)
                .patch(PointController::partial_update_point)
                .delete(PointController::delete_point),
        )
        .route("/_search/points", get(PointController::search_points))
}
