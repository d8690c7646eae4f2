use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use paypal_tools::PayPalApiError;
use stripe_tools::StripeApiError;
use suit_store_engine::{
    traits::{CatalogApiError, OrderApiError},
    AccountError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("Could not read request body: {0}")]
    InvalidRequestBody(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    DuplicateEmail(String),
    #[error("The data was not found. {0}")]
    NoRecordFound(String),
    #[error("Payment provider error. {0}")]
    PaymentProviderError(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::DuplicateEmail(_) => StatusCode::CONFLICT,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PaymentProviderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<CatalogApiError> for ServerError {
    fn from(e: CatalogApiError) -> Self {
        match e {
            CatalogApiError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

impl From<AccountError> for ServerError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::EmailTaken(_) => Self::DuplicateEmail("User already exists".to_string()),
            AccountError::UserNotFound => Self::NoRecordFound("Email not found".to_string()),
            AccountError::InvalidCredentials => Self::Unauthorized("Email and password do not match".to_string()),
            AccountError::PasswordHash(e) => Self::BackendError(format!("Password hashing error: {e}")),
            AccountError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

impl From<OrderApiError> for ServerError {
    fn from(e: OrderApiError) -> Self {
        match e {
            OrderApiError::EmptyOrder => Self::InvalidRequestBody(e.to_string()),
            OrderApiError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

impl From<StripeApiError> for ServerError {
    fn from(e: StripeApiError) -> Self {
        Self::PaymentProviderError(e.to_string())
    }
}

impl From<PayPalApiError> for ServerError {
    fn from(e: PayPalApiError) -> Self {
        Self::PaymentProviderError(e.to_string())
    }
}
