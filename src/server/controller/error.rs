use actix_web::http::StatusCode;
use actix_web::{error, HttpResponse};
use serde::Serialize;

use crate::server::service::error::ServiceError;

/// JSON error body, `{"detail": "..."}` on the wire.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorDetail {
    pub detail: String,
}

impl error::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            // running dry is a state conflict, not a missing resource
            ServiceError::OutOfStock { .. } => StatusCode::CONFLICT,
            ServiceError::OrderNotFound
            | ServiceError::BeerNotFound
            | ServiceError::RoundNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDetail {
            detail: self.to_string(),
        })
    }
}
