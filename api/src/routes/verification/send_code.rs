use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use ic_core::repositories::{ProfileRepository, VerificationRepository};
use ic_core::services::verification::EmailSenderTrait;
use ic_shared::utils::email::mask_email;

use crate::dto::{ErrorResponse, SendCodeRequest, VerificationResponse};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for POST /api/v1/verification/send-code
///
/// Issues a verification code and dispatches it to the user's
/// institutional email.
///
/// # Request Body
///
/// ```json
/// {
///     "userId": "550e8400-e29b-41d4-a716-446655440000",
///     "email": "rohan@iitb.ac.in"
/// }
/// ```
///
/// # Responses
///
/// - `200` `{ "success": true, "message": "OTP sent successfully" }`
/// - `400` `{ "error": "..." }` - missing fields or non-institutional email
/// - `429` `{ "error": "..." }` - re-send requested inside the cooldown
/// - `500` `{ "error": "..." }` - record store or email dispatch failure
pub async fn send_code<E, V, P>(
    state: web::Data<AppState<E, V, P>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    E: EmailSenderTrait + 'static,
    V: VerificationRepository + 'static,
    P: ProfileRepository + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing send-code request for {}",
        request_id,
        mask_email(&request.email)
    );

    if request.0.validate().is_err() {
        log::warn!("[{}] Rejected send-code request with missing fields", request_id);
        return HttpResponse::BadRequest().json(ErrorResponse::new("Missing userId or email"));
    }

    match state
        .verification_service
        .issue_code(&request.user_id, &request.email)
        .await
    {
        Ok(result) => {
            log::info!(
                "[{}] Verification code sent to {}, message_id: {}",
                request_id,
                mask_email(&request.email),
                result.message_id
            );
            HttpResponse::Ok().json(VerificationResponse::ok("OTP sent successfully"))
        }
        Err(error) => {
            log::warn!(
                "[{}] Failed to send verification code to {}: {}",
                request_id,
                mask_email(&request.email),
                error
            );
            domain_error_response(&error)
        }
    }
}
