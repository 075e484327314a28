//!
//! txguard: the authorization and input-validation gate that sits between a
//! tool-calling banking assistant and the store holding its users' transactions.
//!
//! ## Core Concepts
//!
//! The conversational layer forwards a raw, untrusted `userId` argument to the gate.
//! The gate decides, in a fixed order, what happens to it:
//!
//! * **Validation (`validation::validate`)**: Classifies the raw argument as an attack
//!   payload, a malformed identifier, or a well-formed numeric owner id. The ordered
//!   signature table lives in `validation::SIGNATURES`.
//! * **Identity (`identity::CallerIdentity`)**: The session-bound identity of the caller,
//!   resolved to an owner id through an `identity::OwnerResolver` on every request.
//! * **Authorization (`auth::authorize`)**: Compares the requested owner id against the
//!   caller's own owner id. A caller can read exactly one resource: its own.
//! * **Access Gate (`gate::AccessGate`)**: Orchestrates validation, authorization and the
//!   data fetch, producing exactly one `outcome::Outcome` per request.
//! * **Outcomes (`outcome::encode`)**: The stable structured record returned to the caller,
//!   also fed to the `audit::AuditSink` for security logging.
//! * **Tools (`tools::ToolBox`)**: The callable tools exposed to the dialogue engine.
//! * **Store (`store::TransactionSource`)**: The data-access collaborator, with an
//!   in-memory implementation (`store::InMemory`) that persists to JSON.

pub mod audit;
pub mod auth;
pub mod constants;
pub mod gate;
pub mod identity;
pub mod outcome;
pub mod store;
pub mod tools;
pub mod validation;

pub use gate::AccessGate;
pub use identity::{CallerIdentity, OwnerId, RequestedId};
pub use outcome::{ErrorKind, Outcome};

/// Result type used throughout the txguard library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the txguard library.
///
/// Gate decisions are never errors: they are `Outcome` values. This type covers
/// failures of the collaborators the gate relies on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured identity errors from the identity module
    #[error(transparent)]
    Identity(identity::IdentityError),

    /// Structured storage errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured tool dispatch errors from the tools module
    #[error(transparent)]
    Tool(tools::ToolError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Identity(_) => "identity",
            Error::Store(_) => "store",
            Error::Tool(_) => "tools",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Identity(identity_err) => identity_err.is_not_found(),
            Error::Store(store_err) => store_err.is_not_found(),
            Error::Tool(tool_err) => tool_err.is_unknown_tool(),
            _ => false,
        }
    }

    /// Check if this error came from resolving the caller's identity.
    pub fn is_identity_error(&self) -> bool {
        matches!(self, Error::Identity(_))
    }

    /// Check if this error is storage-related.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Store(store_err) => store_err.is_io_error(),
            _ => false,
        }
    }
}
