//! Unit tests for the verification service

use std::sync::Arc;

use chrono::Duration;

use crate::domain::entities::verification_record::CODE_LENGTH;
use crate::errors::{DomainError, ValidationError, VerificationError};
use crate::repositories::{MockProfileRepository, MockVerificationRepository};
use crate::services::verification::mock::MockEmailSender;
use crate::services::verification::{VerificationService, VerificationServiceConfig};

use super::mocks::{FailingProfileRepository, FailingVerificationRepository};

const EMAIL: &str = "rohan@iitb.ac.in";

fn config_without_cooldown() -> VerificationServiceConfig {
    VerificationServiceConfig {
        resend_cooldown_seconds: 0,
        ..Default::default()
    }
}

fn service(
    config: VerificationServiceConfig,
) -> (
    VerificationService<MockEmailSender, MockVerificationRepository, MockProfileRepository>,
    Arc<MockEmailSender>,
    Arc<MockVerificationRepository>,
    Arc<MockProfileRepository>,
) {
    let sender = Arc::new(MockEmailSender::new());
    let records = Arc::new(MockVerificationRepository::new());
    let profiles = Arc::new(MockProfileRepository::new());
    let svc = VerificationService::new(
        sender.clone(),
        records.clone(),
        profiles.clone(),
        config,
    );
    (svc, sender, records, profiles)
}

#[tokio::test]
async fn test_issue_code_stores_record_and_dispatches_email() {
    let (svc, sender, records, _) = service(config_without_cooldown());

    let result = svc.issue_code("u1", EMAIL).await.unwrap();

    assert_eq!(result.record.user_id, "u1");
    assert_eq!(result.record.email, EMAIL);
    assert_eq!(result.record.code.len(), CODE_LENGTH);
    assert!(result.record.is_pending());
    assert_eq!(
        result.record.expires_at,
        result.record.created_at + Duration::minutes(10)
    );
    assert!(result.message_id.starts_with("mock-msg-"));

    // exactly one record and one dispatch, carrying the stored code
    assert_eq!(records.pending_count("u1").await, 1);
    assert_eq!(sender.sent_count(), 1);
    assert_eq!(sender.sent_code(EMAIL), Some(result.record.code.clone()));
}

#[tokio::test]
async fn test_issue_code_rejects_external_domain() {
    let (svc, sender, records, _) = service(config_without_cooldown());

    let result = svc.issue_code("u3", "bad@gmail.com").await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(
            VerificationError::InvalidEmailDomain { .. }
        ))
    ));

    // no record, no dispatch
    assert_eq!(records.all_records().await.len(), 0);
    assert_eq!(sender.sent_count(), 0);
}

#[tokio::test]
async fn test_issue_code_rejects_missing_fields() {
    let (svc, sender, records, _) = service(config_without_cooldown());

    let result = svc.issue_code("", EMAIL).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(
            ValidationError::RequiredField { .. }
        ))
    ));

    let result = svc.issue_code("u1", "  ").await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(
            ValidationError::RequiredField { .. }
        ))
    ));

    assert_eq!(records.all_records().await.len(), 0);
    assert_eq!(sender.sent_count(), 0);
}

#[tokio::test]
async fn test_issue_code_enforces_resend_cooldown() {
    let (svc, _, records, _) = service(VerificationServiceConfig {
        resend_cooldown_seconds: 60,
        ..Default::default()
    });

    svc.issue_code("u1", EMAIL).await.unwrap();

    let result = svc.issue_code("u1", EMAIL).await;
    match result {
        Err(DomainError::Verification(VerificationError::ResendCooldown {
            seconds_remaining,
        })) => {
            assert!(seconds_remaining > 0 && seconds_remaining <= 60);
        }
        other => panic!("expected cooldown error, got {:?}", other),
    }

    // the rejected request inserted nothing
    assert_eq!(records.all_records().await.len(), 1);

    // a different user is unaffected
    svc.issue_code("u2", EMAIL).await.unwrap();
}

#[tokio::test]
async fn test_issue_code_without_cooldown_appends_independent_records() {
    let (svc, _, records, _) = service(config_without_cooldown());

    let first = svc.issue_code("u2", EMAIL).await.unwrap();
    let second = svc.issue_code("u2", EMAIL).await.unwrap();

    assert_ne!(first.record.id, second.record.id);
    assert_eq!(records.pending_count("u2").await, 2);
}

#[tokio::test]
async fn test_issue_code_dispatch_failure_leaves_orphaned_pending_record() {
    let sender = Arc::new(MockEmailSender::with_failure(true));
    let records = Arc::new(MockVerificationRepository::new());
    let profiles = Arc::new(MockProfileRepository::new());
    let svc = VerificationService::new(
        sender,
        records.clone(),
        profiles,
        config_without_cooldown(),
    );

    let result = svc.issue_code("u1", EMAIL).await;
    assert!(matches!(result, Err(DomainError::Dispatch { .. })));

    // the inserted record stays pending and harmless
    assert_eq!(records.pending_count("u1").await, 1);
}

#[tokio::test]
async fn test_issue_code_store_failure() {
    let sender = Arc::new(MockEmailSender::new());
    let records = Arc::new(FailingVerificationRepository);
    let profiles = Arc::new(MockProfileRepository::new());
    let svc = VerificationService::new(
        sender.clone(),
        records,
        profiles,
        config_without_cooldown(),
    );

    let result = svc.issue_code("u1", EMAIL).await;
    assert!(matches!(result, Err(DomainError::Store { .. })));
    assert_eq!(sender.sent_count(), 0);
}

#[tokio::test]
async fn test_verify_code_success_flips_flag_and_consumes_record() {
    let (svc, _, records, profiles) = service(config_without_cooldown());
    profiles.add_profile("u1").await;

    let issued = svc.issue_code("u1", EMAIL).await.unwrap();
    let code = issued.record.code.clone();

    let result = svc.verify_code("u1", &code).await.unwrap();
    assert_eq!(result.record_id, issued.record.id);
    assert_eq!(result.email, EMAIL);

    assert!(profiles.is_email_verified("u1").await);
    assert_eq!(records.pending_count("u1").await, 0);

    // the consumed record cannot be verified again
    let again = svc.verify_code("u1", &code).await;
    assert!(matches!(
        again,
        Err(DomainError::Verification(
            VerificationError::NoPendingVerification
        ))
    ));
}

#[tokio::test]
async fn test_verify_code_without_issuance() {
    let (svc, _, _, _) = service(config_without_cooldown());

    let result = svc.verify_code("u1", "482913").await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(
            VerificationError::NoPendingVerification
        ))
    ));
}

#[tokio::test]
async fn test_verify_code_wrong_code_does_not_consume() {
    let (svc, _, records, profiles) = service(config_without_cooldown());
    profiles.add_profile("u1").await;

    let issued = svc.issue_code("u1", EMAIL).await.unwrap();
    let wrong = if issued.record.code == "000000" {
        "111111"
    } else {
        "000000"
    };

    let result = svc.verify_code("u1", wrong).await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::CodeMismatch))
    ));
    assert!(!profiles.is_email_verified("u1").await);
    assert_eq!(records.pending_count("u1").await, 1);

    // the correct code still works afterwards
    svc.verify_code("u1", &issued.record.code).await.unwrap();
    assert!(profiles.is_email_verified("u1").await);
}

#[tokio::test]
async fn test_verify_code_malformed_code_is_rejected_upfront() {
    let (svc, _, records, _) = service(config_without_cooldown());

    svc.issue_code("u1", EMAIL).await.unwrap();

    for bad in ["12345", "1234567", "48291a", ""] {
        let result = svc.verify_code("u1", bad).await;
        assert!(matches!(
            result,
            Err(DomainError::Verification(VerificationError::CodeMismatch))
        ));
    }

    assert_eq!(records.pending_count("u1").await, 1);
}

#[tokio::test]
async fn test_verify_code_expired_even_if_correct() {
    let (svc, _, records, profiles) = service(VerificationServiceConfig {
        code_expiration_minutes: 0,
        resend_cooldown_seconds: 0,
    });
    profiles.add_profile("u1").await;

    let issued = svc.issue_code("u1", EMAIL).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let result = svc.verify_code("u1", &issued.record.code).await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::CodeExpired))
    ));

    // expired records are neither consumed nor deleted
    assert_eq!(records.pending_count("u1").await, 1);
    assert!(!profiles.is_email_verified("u1").await);
}

#[tokio::test]
async fn test_verify_code_targets_most_recent_issuance() {
    let (svc, _, _, profiles) = service(config_without_cooldown());
    profiles.add_profile("u2").await;

    let first = svc.issue_code("u2", EMAIL).await.unwrap();
    let second = svc.issue_code("u2", EMAIL).await.unwrap();

    if first.record.code != second.record.code {
        // the superseded code no longer matches anything reachable
        let result = svc.verify_code("u2", &first.record.code).await;
        assert!(matches!(
            result,
            Err(DomainError::Verification(VerificationError::CodeMismatch))
        ));
    }

    svc.verify_code("u2", &second.record.code).await.unwrap();
    assert!(profiles.is_email_verified("u2").await);
}

#[tokio::test]
async fn test_verify_code_profile_failure_after_consumption() {
    let sender = Arc::new(MockEmailSender::new());
    let records = Arc::new(MockVerificationRepository::new());
    let profiles = Arc::new(FailingProfileRepository);
    let svc = VerificationService::new(
        sender,
        records.clone(),
        profiles,
        config_without_cooldown(),
    );

    let issued = svc.issue_code("u1", EMAIL).await.unwrap();

    let result = svc.verify_code("u1", &issued.record.code).await;
    assert!(matches!(result, Err(DomainError::ProfileUpdate { .. })));

    // the record was consumed before the downstream write failed, so a
    // retry deterministically reports no pending verification
    assert_eq!(records.pending_count("u1").await, 0);
    let retry = svc.verify_code("u1", &issued.record.code).await;
    assert!(matches!(
        retry,
        Err(DomainError::Verification(
            VerificationError::NoPendingVerification
        ))
    ));
}

#[tokio::test]
async fn test_verify_code_rejects_missing_user_id() {
    let (svc, _, _, _) = service(config_without_cooldown());

    let result = svc.verify_code("", "482913").await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(
            ValidationError::RequiredField { .. }
        ))
    ));
}
