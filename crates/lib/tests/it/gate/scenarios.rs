//! Concrete request scenarios for a caller logged in as user 1.

use txguard::{
    ErrorKind, OwnerId, RequestedId,
    outcome::{FailureContext, encode},
    store::TransactionSource,
};

use crate::helpers::*;

#[test]
fn test_own_id_returns_own_transactions() {
    let bank = setup_bank();
    let caller = bank.login(1);

    let outcome = bank.gate.handle_request("1", &caller);
    let expected = bank.store.fetch_for_owner(OwnerId::new(1)).unwrap();
    assert_eq!(outcome.payload(), Some(expected.as_slice()));
}

#[test]
fn test_quoted_tautology_is_reported_verbatim() {
    let bank = setup_bank();
    let caller = bank.login(1);

    let outcome = bank.gate.handle_request("1' OR '1'='1", &caller);
    let encoded = encode(&outcome);
    assert!(!encoded.ok);
    assert_eq!(encoded.error_kind, Some(ErrorKind::SqlInjectionDetected));
    assert_eq!(encoded.suspicious_input.as_deref(), Some("1' OR '1'='1"));
    assert_eq!(
        encoded.message.as_deref(),
        Some("Potential SQL injection detected. This attempt has been blocked and logged.")
    );
}

#[test]
fn test_union_select_is_injection() {
    let bank = setup_bank();
    let caller = bank.login(1);

    let outcome = bank.gate.handle_request("2' UNION SELECT 1,2,3,4,5--", &caller);
    assert_eq!(outcome.error_kind(), Some(ErrorKind::SqlInjectionDetected));
}

#[test]
fn test_letters_are_invalid_input() {
    let bank = setup_bank();
    let caller = bank.login(1);

    let outcome = bank.gate.handle_request("abc", &caller);
    let encoded = encode(&outcome);
    assert_eq!(encoded.error_kind, Some(ErrorKind::InvalidInput));
    assert_eq!(encoded.provided_input.as_deref(), Some("abc"));
    assert_eq!(
        encoded.message.as_deref(),
        Some("Invalid userId format. UserId must be numeric.")
    );
}

#[test]
fn test_other_user_is_denied() {
    let bank = setup_bank();
    let caller = bank.login(1);

    let outcome = bank.gate.handle_request("2", &caller);
    let failure = outcome.failure().unwrap();
    assert_eq!(failure.kind, ErrorKind::AuthorizationDenied);
    assert_eq!(
        failure.context,
        FailureContext::Denied {
            requested: RequestedId::from(OwnerId::new(2)),
            authorized: OwnerId::new(1),
        }
    );

    let encoded = encode(&outcome);
    assert_eq!(encoded.requested.as_deref(), Some("2"));
    assert_eq!(encoded.authorized_id.as_deref(), Some("1"));
}

#[test]
fn test_id_too_long_for_any_owner_is_denied() {
    let bank = setup_bank();
    let caller = bank.login(1);

    let outcome = bank.gate.handle_request("99999999999999999999999", &caller);
    let encoded = encode(&outcome);
    assert_eq!(encoded.error_kind, Some(ErrorKind::AuthorizationDenied));
    assert_eq!(encoded.requested.as_deref(), Some("99999999999999999999999"));
    assert_eq!(encoded.authorized_id.as_deref(), Some("1"));
    assert_eq!(bank.audit.security_events().len(), 1);
}

#[test]
fn test_security_events_reach_the_audit_sink() {
    let bank = setup_bank();
    let caller = bank.login(1);

    bank.gate.handle_request("1", &caller);
    bank.gate.handle_request("2", &caller);
    bank.gate.handle_request("1' OR '1'='1", &caller);
    bank.gate.handle_request("abc", &caller);

    let security = bank.audit.security_events();
    assert_eq!(security.len(), 2);
    assert_eq!(security[0].kind, ErrorKind::AuthorizationDenied);
    assert_eq!(security[1].kind, ErrorKind::SqlInjectionDetected);
    assert_eq!(bank.audit.events_of_kind(ErrorKind::InvalidInput).len(), 1);
}

#[test]
fn test_switching_user_changes_authorization() {
    let bank = setup_bank();
    let caller = bank.login(1);
    assert!(bank.gate.handle_request("1", &caller).is_success());

    bank.sessions.switch_user(&caller, OwnerId::new(3)).unwrap();
    assert_eq!(
        bank.gate.handle_request("1", &caller).error_kind(),
        Some(ErrorKind::AuthorizationDenied)
    );
    assert!(bank.gate.handle_request("3", &caller).is_success());
}

#[test]
fn test_known_owner_without_transactions_succeeds_empty() {
    let bank = setup_bank();
    bank.store
        .insert_user(txguard::store::UserRecord {
            user_id: OwnerId::new(5),
            username: "Jennifer".to_string(),
        })
        .unwrap();
    let caller = bank.login(5);

    let outcome = bank.gate.handle_request("5", &caller);
    assert_eq!(outcome.payload().map(<[_]>::len), Some(0));
}

#[test]
fn test_session_for_missing_user_is_system_error() {
    let bank = setup_bank();
    let caller = bank.login(42);

    let outcome = bank.gate.handle_request("42", &caller);
    let encoded = encode(&outcome);
    assert_eq!(encoded.error_kind, Some(ErrorKind::SystemError));
    assert_eq!(
        encoded.message.as_deref(),
        Some("Unable to retrieve transactions.")
    );
}
