//! errors.rs
//! Errores de la API y su traducción a respuestas HTTP.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::parse_model::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("File must be a PDF")]
    InvalidFile,

    #[error("No file uploaded")]
    MissingFile,

    #[error("File size must be less than {0}")]
    FileTooLarge(String),

    #[error("Invalid upload: {0}")]
    Upload(String),

    #[error("Parsing failed: {0:#}")]
    Parsing(anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidFile
            | ApiError::MissingFile
            | ApiError::FileTooLarge(_)
            | ApiError::Upload(_) => StatusCode::BAD_REQUEST,
            ApiError::Parsing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}
