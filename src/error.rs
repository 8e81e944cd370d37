use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::web::models::ErrorResponse;

/// Every failure the relay can hand back to a client.
///
/// `Display` carries the detail for the logs; the client only ever sees
/// [`RelayError::public_message`].
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("invalid request body: {0}")]
    InvalidInput(String),

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("upstream rejected the credential (status {0})")]
    UpstreamAuthFailure(u16),

    #[error("upstream returned no usable completion")]
    UpstreamEmptyResult,
}

impl RelayError {
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::InvalidInput(_) => "invalid request body",
            RelayError::UpstreamUnavailable(_) => "upstream unavailable",
            RelayError::UpstreamAuthFailure(_) => "internal server error",
            RelayError::UpstreamEmptyResult => "no reply generated",
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL so request details stay out of the message
        RelayError::UpstreamUnavailable(err.without_url().to_string())
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RelayError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            RelayError::UpstreamAuthFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::UpstreamEmptyResult => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message().to_string(),
        })
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
