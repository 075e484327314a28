use std::sync::Arc;

use txguard::{
    AccessGate, CallerIdentity, OwnerId,
    audit::MemoryAuditSink,
    identity::SessionStore,
    store::InMemory,
    tools::ToolBox,
};

// Helper functions for gate testing
//
// Every helper builds on the sample bank: users 1-4, with user 1 (MartyMcFly)
// owning three transactions.

/// A gate over the sample bank, with its session table and audit sink.
pub struct TestBank {
    pub gate: AccessGate,
    pub sessions: SessionStore,
    pub store: Arc<InMemory>,
    pub audit: Arc<MemoryAuditSink>,
}

impl TestBank {
    /// Log a new session in as `owner`.
    pub fn login(&self, owner: u64) -> CallerIdentity {
        self.sessions
            .create_session(OwnerId::new(owner))
            .expect("Failed to create session")
    }
}

/// Create a gate over the sample bank
pub fn setup_bank() -> TestBank {
    let sessions = SessionStore::new();
    let store = Arc::new(InMemory::with_sample_data().expect("Failed to seed store"));
    let audit = Arc::new(MemoryAuditSink::new());
    let gate = AccessGate::new(Arc::new(sessions.clone()), store.clone())
        .with_audit_sink(audit.clone());
    TestBank {
        gate,
        sessions,
        store,
        audit,
    }
}

/// Create a tool box over the sample bank with a session logged in as `owner`
pub fn setup_tools(owner: u64) -> (ToolBox, CallerIdentity, Arc<MemoryAuditSink>) {
    let sessions = SessionStore::new();
    let caller = sessions
        .create_session(OwnerId::new(owner))
        .expect("Failed to create session");
    let store = Arc::new(InMemory::with_sample_data().expect("Failed to seed store"));
    let audit = Arc::new(MemoryAuditSink::new());
    let tools = ToolBox::new(Arc::new(sessions), store).with_audit_sink(audit.clone());
    (tools, caller, audit)
}

/// Payloads that must always be reported as injection attempts
pub const ATTACK_PAYLOADS: &[&str] = &[
    "1' OR '1'='1",
    "2' UNION SELECT 1,2,3,4,5--",
    "a' UNION SELECT 1,username,password,'','100' FROM Users--",
    "1'; DROP TABLE Users--",
    "1; DELETE FROM Transactions",
    "1 INSERT INTO Users VALUES (9)",
    "1--",
    "1;",
    "1 OR 1=1",
    "union select",
    "' or ''='",
];

/// Non-numeric payloads that carry no attack signature
pub const MALFORMED_PAYLOADS: &[&str] = &[
    "",
    "abc",
    "MartyMcFly",
    "1 ",
    " 1",
    "1.5",
    "-1",
    "one",
    "1'",
    "1 OR 2",
];

/// Long digit-only ids that never name user 1
pub const OVERSIZED_IDS: &[&str] = &[
    "18446744073709551616",
    "99999999999999999999999",
    "000000000000000000000000000002",
    "0099999999999999999999999999999999999999",
];
