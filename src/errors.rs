use crate::validation::FieldError;
use axum::{http::StatusCode, response::IntoResponse, Json};

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub fields: Vec<FieldError>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn invalid(fields: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "request has invalid fields".to_string(),
            fields,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if self.fields.is_empty() {
            return (self.status, self.message).into_response();
        }
        let body = serde_json::json!({
            "message": self.message,
            "errors": self.fields,
        });
        (self.status, Json(body)).into_response()
    }
}
