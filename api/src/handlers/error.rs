//! Maps domain errors onto HTTP responses.
//!
//! Error bodies are plain text, taken straight from the error's
//! display string. Storage and internal failures never leak their
//! detail to clients; it goes to the log instead.

use actix_web::HttpResponse;

use td_core::errors::DomainError;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Converts a domain error into the corresponding HTTP response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation(_) | DomainError::Conflict { .. } => HttpResponse::BadRequest()
            .content_type(TEXT_PLAIN)
            .body(error.to_string()),

        DomainError::Auth(_) | DomainError::Token(_) => HttpResponse::Unauthorized()
            .content_type(TEXT_PLAIN)
            .body(error.to_string()),

        DomainError::NotFound { .. } => HttpResponse::NotFound()
            .content_type(TEXT_PLAIN)
            .body(error.to_string()),

        DomainError::Database(_) | DomainError::Internal { .. } => {
            log::error!("internal error while handling request: {}", error);
            HttpResponse::InternalServerError()
                .content_type(TEXT_PLAIN)
                .body("Internal server error")
        }
    }
}
