//! Properties that hold across whole families of inputs.

use txguard::{ErrorKind, outcome::encode};

use crate::helpers::*;

#[test]
fn test_attacks_are_detected_for_every_caller() {
    let bank = setup_bank();
    for owner in 1..=4 {
        let caller = bank.login(owner);
        for raw in ATTACK_PAYLOADS {
            let outcome = bank.gate.handle_request(raw, &caller);
            assert_eq!(
                outcome.error_kind(),
                Some(ErrorKind::SqlInjectionDetected),
                "input {raw:?} as user {owner}"
            );
            assert_eq!(encode(&outcome).suspicious_input.as_deref(), Some(*raw));
        }
    }
}

#[test]
fn test_own_id_wrapped_in_attack_syntax_is_detected() {
    let bank = setup_bank();
    let caller = bank.login(1);
    for suffix in [";", "--", " OR 1=1", "' OR 'x'='x", " UNION SELECT 1"] {
        let raw = format!("1{suffix}");
        assert_eq!(
            bank.gate.handle_request(&raw, &caller).error_kind(),
            Some(ErrorKind::SqlInjectionDetected),
            "input {raw:?}"
        );
    }
}

#[test]
fn test_malformed_inputs_are_invalid() {
    let bank = setup_bank();
    let caller = bank.login(1);
    for raw in MALFORMED_PAYLOADS {
        let outcome = bank.gate.handle_request(raw, &caller);
        assert_eq!(
            outcome.error_kind(),
            Some(ErrorKind::InvalidInput),
            "input {raw:?}"
        );
        assert_eq!(encode(&outcome).provided_input.as_deref(), Some(*raw));
    }
}

#[test]
fn test_numeric_ids_other_than_own_are_denied() {
    let bank = setup_bank();
    let caller = bank.login(2);
    for requested in (0..50u64).filter(|id| *id != 2) {
        let outcome = bank.gate.handle_request(&requested.to_string(), &caller);
        let encoded = encode(&outcome);
        assert_eq!(encoded.error_kind, Some(ErrorKind::AuthorizationDenied));
        assert_eq!(encoded.requested, Some(requested.to_string()));
        assert_eq!(encoded.authorized_id.as_deref(), Some("2"));
        assert_ne!(encoded.requested, encoded.authorized_id);
    }
}

#[test]
fn test_oversized_numeric_ids_are_denied() {
    let bank = setup_bank();
    let caller = bank.login(1);
    for raw in OVERSIZED_IDS {
        let outcome = bank.gate.handle_request(raw, &caller);
        let encoded = encode(&outcome);
        assert_eq!(
            encoded.error_kind,
            Some(ErrorKind::AuthorizationDenied),
            "input {raw:?}"
        );
        assert_eq!(
            encoded.requested.as_deref(),
            Some(raw.trim_start_matches('0'))
        );
        assert_eq!(encoded.authorized_id.as_deref(), Some("1"));
    }
    assert_eq!(bank.audit.security_events().len(), OVERSIZED_IDS.len());
}

#[test]
fn test_every_user_reads_only_their_own_rows() {
    let bank = setup_bank();
    for owner in 1..=4u64 {
        let caller = bank.login(owner);
        let outcome = bank.gate.handle_request(&owner.to_string(), &caller);
        let records = outcome.payload().unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.user_id.get() == owner));
    }
}

#[test]
fn test_outcomes_are_stable_across_calls() {
    let bank = setup_bank();
    let caller = bank.login(1);
    let inputs = ATTACK_PAYLOADS
        .iter()
        .chain(MALFORMED_PAYLOADS)
        .chain(&["1", "2", "3", "001"]);
    for raw in inputs {
        let first = encode(&bank.gate.handle_request(raw, &caller));
        let second = encode(&bank.gate.handle_request(raw, &caller));
        assert_eq!(first, second, "input {raw:?}");
    }
}

#[test]
fn test_every_request_has_exactly_one_outcome_kind() {
    let bank = setup_bank();
    let caller = bank.login(1);
    for raw in ATTACK_PAYLOADS.iter().chain(MALFORMED_PAYLOADS) {
        let encoded = encode(&bank.gate.handle_request(raw, &caller));
        assert_eq!(encoded.ok, encoded.error_kind.is_none());
        assert_eq!(encoded.ok, encoded.payload.is_some());
    }
}
