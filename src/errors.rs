//! errors.rs
//! Errores que un request puede devolver al cliente.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::message_model::ErrorResponse;

#[derive(Debug, Error)]
pub enum ScheduledError {
    #[error("No scheduled message exists with id '{0}'")]
    NotFound(String),

    #[error("Invalid request body: {0}")]
    BadRequest(String),
}

impl ResponseError for ScheduledError {
    fn status_code(&self) -> StatusCode {
        match self {
            ScheduledError::NotFound(_) => StatusCode::NOT_FOUND,
            ScheduledError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.to_string(),
        })
    }
}
