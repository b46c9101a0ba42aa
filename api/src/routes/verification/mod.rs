//! Email verification endpoints

pub mod send_code;
pub mod verify_code;

use std::sync::Arc;

use ic_core::repositories::{ProfileRepository, VerificationRepository};
use ic_core::services::verification::{EmailSenderTrait, VerificationService};

pub use send_code::send_code;
pub use verify_code::verify_code;

/// Application state shared by the verification handlers
pub struct AppState<E, V, P>
where
    E: EmailSenderTrait,
    V: VerificationRepository,
    P: ProfileRepository,
{
    pub verification_service: Arc<VerificationService<E, V, P>>,
}
