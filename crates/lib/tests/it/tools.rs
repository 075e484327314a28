//! The tool surface as the dialogue engine sees it.

use serde_json::Value;
use txguard::{ErrorKind, constants::SYSTEM_PROMPT};

use crate::helpers::*;

fn call(tool: &str, input: &str, owner: u64) -> Value {
    let (tools, caller, _) = setup_tools(owner);
    let json = tools.invoke(tool, input, &caller).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_current_user_then_transactions() {
    let (tools, caller, audit) = setup_tools(1);

    let user: Value =
        serde_json::from_str(&tools.invoke("GetCurrentUser", "", &caller).unwrap()).unwrap();
    let user_id = user[0]["userId"].to_string();
    assert_eq!(user_id, "1");

    let transactions: Value = serde_json::from_str(
        &tools
            .invoke("GetUserTransactions", &user_id, &caller)
            .unwrap(),
    )
    .unwrap();
    assert_eq!(transactions["ok"], true);
    for record in transactions["payload"].as_array().unwrap() {
        assert_eq!(record["userId"], 1);
    }
    assert!(audit.events().is_empty());
}

#[test]
fn test_password_extraction_attempt() {
    let value = call(
        "GetUserTransactions",
        "a' UNION SELECT 1,username,password,'','100' FROM Users--",
        1,
    );
    assert_eq!(value["ok"], false);
    assert_eq!(value["errorKind"], "SQL_INJECTION_DETECTED");
    assert!(value.get("payload").is_none());
}

#[test]
fn test_denied_request_names_both_ids() {
    let value = call("GetUserTransactions", "2", 1);
    assert_eq!(value["errorKind"], "AUTHORIZATION_DENIED");
    assert_eq!(value["requested"], "2");
    assert_eq!(value["authorizedId"], "1");
}

#[test]
fn test_invalid_input_echoes_argument() {
    let value = call("GetUserTransactions", "MartyMcFly", 1);
    assert_eq!(value["errorKind"], "INVALID_INPUT");
    assert_eq!(value["providedInput"], "MartyMcFly");
}

#[test]
fn test_tool_failures_are_audited() {
    let (tools, caller, audit) = setup_tools(1);
    tools.invoke("GetUserTransactions", "1;", &caller).unwrap();
    tools.invoke("GetUserTransactions", "4", &caller).unwrap();
    assert_eq!(audit.security_events().len(), 2);
    assert_eq!(
        audit.events_of_kind(ErrorKind::AuthorizationDenied).len(),
        1
    );
}

#[test]
fn test_unknown_tool_is_an_error() {
    let (tools, caller, _) = setup_tools(1);
    let err = tools.invoke("TransferFunds", "1", &caller).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_system_prompt_pins_the_current_user_tool() {
    assert!(SYSTEM_PROMPT.contains("GetCurrentUser"));
}
