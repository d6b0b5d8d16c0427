use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use dietcoach_model::{advice::AdviceResponse, metrics::ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidMetrics(#[from] ValidationError),
    #[error("{0}")]
    Unhandled(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidMetrics(_) => StatusCode::BAD_REQUEST,
            ApiError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(AdviceResponse::Error(self.to_string()))
    }
}
