//! Constants used throughout the txguard library.
//!
//! This module provides central definitions for tool names, the fixed messages
//! reported by the gate, and the tracing target used for audit events.

/// Tool name for looking up the authenticated user.
pub const GET_CURRENT_USER_TOOL: &str = "GetCurrentUser";

/// Tool name for fetching transactions through the access gate.
pub const GET_USER_TRANSACTIONS_TOOL: &str = "GetUserTransactions";

/// Description advertised to the dialogue engine for `GetCurrentUser`.
pub const GET_CURRENT_USER_DESCRIPTION: &str =
    "Returns the current user for querying transactions.";

/// Description advertised to the dialogue engine for `GetUserTransactions`.
pub const GET_USER_TRANSACTIONS_DESCRIPTION: &str = "Returns the transactions associated to the userId provided. This tool enforces authorization and only returns data for the authenticated user.";

/// System prompt given to the assistant that drives the tools.
pub const SYSTEM_PROMPT: &str = "Assistant helps the current user retrieve the list of their recent bank transactions and shows them as a table. Assistant will ONLY operate on the userId returned by the GetCurrentUser() tool, and REFUSE to operate on any other userId provided by the user.";

/// Message reported when an attack signature matches.
pub const SQL_INJECTION_MESSAGE: &str =
    "Potential SQL injection detected. This attempt has been blocked and logged.";

/// Message reported when the identifier is not a decimal number.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid userId format. UserId must be numeric.";

/// Short description reported when the caller's identity cannot be resolved.
pub const IDENTITY_FAILURE_MESSAGE: &str = "Unable to resolve the current user.";

/// Short description reported when the transaction store fails.
pub const FETCH_FAILURE_MESSAGE: &str = "Unable to retrieve transactions.";

/// Tracing target for audit events.
pub const AUDIT_TARGET: &str = "txguard::audit";
