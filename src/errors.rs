use axum::{
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("{message}")]
    BadRequestAlert {
        message: String,
        entity_name: String,
        error_key: String,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn bad_request_alert(message: &str, entity_name: &str, error_key: &str) -> Self {
        AppError::BadRequestAlert {
            message: message.to_string(),
            entity_name: entity_name.to_string(),
            error_key: error_key.to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequestAlert { .. } => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Attached to the response of a [`AppError::BadRequestAlert`]; turned into
/// `X-<app>-error` / `X-<app>-params` headers by the alert layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorAlert {
    pub entity_name: String,
    pub error_key: String,
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        let body = match &self {
            AppError::BadRequestAlert {
                entity_name,
                error_key,
                ..
            } => json!({
                "message": format!("error.{error_key}"),
                "title": self.to_string(),
                "entityName": entity_name,
                "errorKey": error_key,
                "status": status.as_u16(),
            }),
            AppError::Validation(errors) => json!({
                "message": "error.validation",
                "fieldErrors": errors,
                "status": status.as_u16(),
            }),
            _ => json!({
                "message": self.to_string(),
                "status": status.as_u16(),
            }),
        };

        let mut response = (status, Json(body)).into_response();
        if let AppError::BadRequestAlert {
            entity_name,
            error_key,
            ..
        } = self
        {
            response.extensions_mut().insert(ErrorAlert {
                entity_name,
                error_key,
            });
        }
        response
    }
}
