//! Store files feeding the gate.

use std::sync::Arc;

use txguard::{
    AccessGate, ErrorKind, OwnerId,
    identity::SessionStore,
    store::{InMemory, UserRecord},
};

#[test]
fn test_gate_over_reloaded_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.json");

    let store = InMemory::with_sample_data().unwrap();
    store
        .insert_user(UserRecord {
            user_id: OwnerId::new(7),
            username: "Strickland".to_string(),
        })
        .unwrap();
    store
        .add_transaction(OwnerId::new(7), "Detention", "Hill Valley High", 12.0)
        .unwrap();
    store.save_to_file(&path).unwrap();

    let sessions = SessionStore::new();
    let caller = sessions.create_session(OwnerId::new(7)).unwrap();
    let gate = AccessGate::new(
        Arc::new(sessions),
        Arc::new(InMemory::load_from_file(&path).unwrap()),
    );

    let outcome = gate.handle_request("7", &caller);
    let records = outcome.payload().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].recipient, "Hill Valley High");

    assert_eq!(
        gate.handle_request("1", &caller).error_kind(),
        Some(ErrorKind::AuthorizationDenied)
    );
}

#[test]
fn test_corrupt_store_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = InMemory::load_from_file(&path).unwrap_err();
    assert!(err.is_store_error());
}
