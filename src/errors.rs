use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use ethers::providers::ProviderError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Invalid Ethereum Address: {0}")]
    InvalidAddressError(String),

    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("Provider error: {0}")]
    ProviderError(#[from] ProviderError),

    #[error("Provider error: {0}")]
    StringifiedProviderError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// Error body returned on every non-2xx response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::InvalidAddressError(_) => StatusCode::BAD_REQUEST,
            CustomError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CustomError::ProviderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::StringifiedProviderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiError {
            message: self.to_string(),
        })
    }
}
