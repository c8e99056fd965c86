use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use payment_gateway_engine::{MerchantApiError, TransactionApiError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Failed to proceed")]
    BackendError(String),
    #[error("Bad request param")]
    InvalidRequestBody(String),
    #[error("Unauthorized")]
    Unauthorized(String),
    #[error("Not found")]
    NoRecordFound(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "message": self.to_string() }).to_string())
    }
}

impl From<MerchantApiError> for ServerError {
    fn from(e: MerchantApiError) -> Self {
        match e {
            MerchantApiError::DatabaseError(e) => Self::BackendError(e),
        }
    }
}

impl From<TransactionApiError> for ServerError {
    fn from(e: TransactionApiError) -> Self {
        match e {
            TransactionApiError::DatabaseError(e) => Self::BackendError(e),
            TransactionApiError::Unauthorized(edge) => Self::Unauthorized(edge.to_string()),
            TransactionApiError::TransactionNotFound(id) => Self::NoRecordFound(format!("transaction {id}")),
        }
    }
}
