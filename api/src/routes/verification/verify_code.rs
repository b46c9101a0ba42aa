use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use ic_core::repositories::{ProfileRepository, VerificationRepository};
use ic_core::services::verification::EmailSenderTrait;

use crate::dto::{ErrorResponse, VerificationResponse, VerifyCodeRequest};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for POST /api/v1/verification/verify-code
///
/// Checks a submitted code against the user's most recent pending
/// verification and promotes the profile's verified flag on success.
///
/// # Request Body
///
/// ```json
/// {
///     "userId": "550e8400-e29b-41d4-a716-446655440000",
///     "otp": "482913"
/// }
/// ```
///
/// # Responses
///
/// - `200` `{ "success": true, "message": "Email verified successfully" }`
/// - `400` `{ "error": "..." }` - no pending verification, expired, or wrong code
/// - `500` `{ "error": "..." }` - record store or identity store failure
pub async fn verify_code<E, V, P>(
    state: web::Data<AppState<E, V, P>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    E: EmailSenderTrait + 'static,
    V: VerificationRepository + 'static,
    P: ProfileRepository + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing verify-code request for user {}",
        request_id,
        request.user_id
    );

    if request.0.validate().is_err() {
        log::warn!("[{}] Rejected verify-code request with invalid fields", request_id);
        return HttpResponse::BadRequest().json(ErrorResponse::new("Missing userId or otp"));
    }

    match state
        .verification_service
        .verify_code(&request.user_id, &request.otp)
        .await
    {
        Ok(result) => {
            log::info!(
                "[{}] Email verified for user {} (record {})",
                request_id,
                request.user_id,
                result.record_id
            );
            HttpResponse::Ok().json(VerificationResponse::ok("Email verified successfully"))
        }
        Err(error) => {
            log::warn!(
                "[{}] Verification failed for user {}: {}",
                request_id,
                request.user_id,
                error
            );
            domain_error_response(&error)
        }
    }
}
