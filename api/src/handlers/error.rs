//! Mapping from domain errors to HTTP responses

use actix_web::HttpResponse;

use ic_core::errors::{DomainError, VerificationError};

use crate::dto::ErrorResponse;

/// Convert a domain error into the wire error envelope.
///
/// Validation and verification failures carry their user-facing message.
/// Dependency failures collapse to a generic 500 so internals never leak;
/// the detail is logged for operators.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Verification(verification_error) => match verification_error {
            VerificationError::ResendCooldown { .. } => HttpResponse::TooManyRequests()
                .json(ErrorResponse::new(verification_error.to_string())),
            _ => {
                HttpResponse::BadRequest().json(ErrorResponse::new(verification_error.to_string()))
            }
        },
        DomainError::Store { .. } | DomainError::Dispatch { .. } => {
            log::error!("Dependency failure: {:?}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Verification service temporarily unavailable",
            ))
        }
        DomainError::ProfileUpdate { .. } => {
            log::error!("Profile update failure: {:?}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to update profile verification status",
            ))
        }
        DomainError::NotFound { .. } | DomainError::Internal { .. } => {
            log::error!("Internal error: {:?}", error);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("An internal error occurred"))
        }
    }
}
