//! Callable tools exposed to the dialogue engine
//!
//! The assistant reaches the transaction store only through these tools.
//! `GetCurrentUser` tells it who is logged in; `GetUserTransactions` forwards its
//! `userId` argument, untrusted, to the [`AccessGate`].

pub mod errors;

use std::{fmt, str::FromStr, sync::Arc};

use serde::Serialize;

use crate::{
    Result,
    audit::AuditSink,
    constants::{
        GET_CURRENT_USER_DESCRIPTION, GET_CURRENT_USER_TOOL, GET_USER_TRANSACTIONS_DESCRIPTION,
        GET_USER_TRANSACTIONS_TOOL,
    },
    gate::AccessGate,
    identity::{CallerIdentity, OwnerResolver},
    outcome::encode,
    store::{TransactionSource, UserRecord},
};

pub use errors::ToolError;

/// The tools known to the tool box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    GetCurrentUser,
    GetUserTransactions,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::GetCurrentUser, Tool::GetUserTransactions];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::GetCurrentUser => GET_CURRENT_USER_TOOL,
            Tool::GetUserTransactions => GET_USER_TRANSACTIONS_TOOL,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tool::GetCurrentUser => GET_CURRENT_USER_DESCRIPTION,
            Tool::GetUserTransactions => GET_USER_TRANSACTIONS_DESCRIPTION,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = ToolError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == name)
            .ok_or_else(|| ToolError::UnknownTool {
                name: name.to_string(),
            })
    }
}

/// Name and description of a tool, as advertised to the dialogue engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Dispatches tool calls from the dialogue engine.
#[derive(Clone)]
pub struct ToolBox {
    gate: AccessGate,
    resolver: Arc<dyn OwnerResolver>,
    source: Arc<dyn TransactionSource>,
}

impl ToolBox {
    /// Create a tool box whose transactions tool goes through a fresh [`AccessGate`].
    pub fn new(resolver: Arc<dyn OwnerResolver>, source: Arc<dyn TransactionSource>) -> Self {
        Self {
            gate: AccessGate::new(resolver.clone(), source.clone()),
            resolver,
            source,
        }
    }

    /// Replace the audit sink of the underlying gate.
    pub fn with_audit_sink(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.gate = self.gate.with_audit_sink(audit);
        self
    }

    /// The gate the transactions tool goes through.
    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    /// The tools advertised to the dialogue engine.
    pub fn specs() -> Vec<ToolSpec> {
        Tool::ALL
            .iter()
            .map(|tool| ToolSpec {
                name: tool.name(),
                description: tool.description(),
            })
            .collect()
    }

    /// Invoke the tool called `name` with the engine-supplied `input`.
    ///
    /// # Returns
    /// The JSON text handed back to the dialogue engine. Gate failures are part of
    /// that text; only an unknown tool or a failing `GetCurrentUser` lookup is an error.
    pub fn invoke(&self, name: &str, input: &str, caller: &CallerIdentity) -> Result<String> {
        let tool: Tool = name.parse()?;
        tracing::debug!(tool = %tool, "Invoking tool");
        match tool {
            Tool::GetCurrentUser => Ok(serde_json::to_string_pretty(&[
                self.current_user(caller)?
            ])?),
            Tool::GetUserTransactions => self.user_transactions(input, caller),
        }
    }

    /// `GetCurrentUser`: the record of the user logged in on the caller's session.
    pub fn current_user(&self, caller: &CallerIdentity) -> Result<UserRecord> {
        let owner = self.resolver.resolve_owner(caller)?;
        self.source.get_user(owner)
    }

    /// `GetUserTransactions`: the encoded gate outcome for `input`.
    fn user_transactions(&self, input: &str, caller: &CallerIdentity) -> Result<String> {
        let outcome = self.gate.handle_request(input, caller);
        encode(&outcome).to_json()
    }
}
