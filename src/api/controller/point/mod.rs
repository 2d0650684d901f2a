use axum::extract::{Path, RawQuery, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::api::dto::point_dto::PointListQuery;
use crate::api::util::headers;
use crate::app_state::AppState;
use crate::core::persistence::point::point_entity::Point;
use crate::domain::point::service::point_service::ENTITY_NAME;
use crate::errors::AppError;

/// Handlers for `/api/points` and `/api/_search/points`.
pub struct PointController;

impl PointController {
    pub async fn create_point(
        State(state): State<AppState>,
        Json(payload): Json<Point>,
    ) -> Result<impl IntoResponse, AppError> {
        let result = state.point_service.create(payload)?;

        let id = result.id.unwrap_or_default().to_string();
        let mut headers = headers::entity_creation_alert(&state.app_name, ENTITY_NAME, &id);
        if let Ok(location) = HeaderValue::from_str(&format!("/api/points/{id}")) {
            headers.insert(header::LOCATION, location);
        }
        Ok((StatusCode::CREATED, headers, Json(result)))
    }

    pub async fn update_point(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<Point>,
    ) -> Result<impl IntoResponse, AppError> {
        let result = state.point_service.update(id, payload)?;
        let headers = headers::entity_update_alert(&state.app_name, ENTITY_NAME, &id.to_string());
        Ok((headers, Json(result)))
    }

    /// Merge-patch: fields absent from the body are left as stored.
    pub async fn partial_update_point(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<Point>,
    ) -> Result<impl IntoResponse, AppError> {
        let result = state.point_service.partial_update(id, payload)?;
        let headers = headers::entity_update_alert(&state.app_name, ENTITY_NAME, &id.to_string());
        Ok((headers, Json(result)))
    }

    pub async fn get_all_points(
        State(state): State<AppState>,
        RawQuery(raw): RawQuery,
    ) -> Result<impl IntoResponse, AppError> {
        let page = PointListQuery::from_raw(raw.as_deref()).page_request();
        let result = state.point_service.find_all(&page)?;

        let headers = headers::pagination("/api/points", &[], &page, result.total_count);
        Ok((headers, Json(result.items)))
    }

    pub async fn get_point(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<Point>, AppError> {
        Ok(Json(state.point_service.find_one(id)?))
    }

    pub async fn delete_point(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<impl IntoResponse, AppError> {
        state.point_service.delete(id)?;
        let headers = headers::entity_deletion_alert(&state.app_name, ENTITY_NAME, &id.to_string());
        Ok((StatusCode::NO_CONTENT, headers))
    }

    /// `query` is mandatory; paging and sorting follow the list endpoint.
    pub async fn search_points(
        State(state): State<AppState>,
        RawQuery(raw): RawQuery,
    ) -> Result<impl IntoResponse, AppError> {
        let query = PointListQuery::from_raw(raw.as_deref());
        let page = query.page_request();
        let text = query.query.ok_or_else(|| {
            AppError::bad_request_alert("Search query is required", ENTITY_NAME, "querymissing")
        })?;

        let result = state.point_service.search(&text, &page)?;
        let headers = headers::pagination(
            "/api/_search/points",
            &[("query", text.as_str())],
            &page,
            result.total_count,
        );
        Ok((headers, Json(result.items)))
    }
}
