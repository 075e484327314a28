//! Structured encoding of gate outcomes.

use serde::{Deserialize, Serialize};

use super::{ErrorKind, FailureContext, Outcome};
use crate::{Result, store::TransactionRecord};

/// The structured record returned to the caller for every gate invocation.
///
/// `ok` discriminates success from failure. A success carries `payload`; a failure
/// carries `errorKind`, `message` and the context fields that apply to its kind.
/// Owner ids are echoed as decimal strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedOutcome {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Vec<TransactionRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspicious_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provided_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_id: Option<String>,
}

impl EncodedOutcome {
    /// Render the record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Encode an outcome into its structured record. Every outcome is encodable.
pub fn encode(outcome: &Outcome) -> EncodedOutcome {
    let failure = match outcome {
        Outcome::Success(records) => {
            return EncodedOutcome {
                ok: true,
                payload: Some(records.clone()),
                ..Default::default()
            };
        }
        Outcome::Failure(failure) => failure,
    };

    let mut encoded = EncodedOutcome {
        ok: false,
        error_kind: Some(failure.kind),
        message: Some(failure.message.clone()),
        ..Default::default()
    };
    match &failure.context {
        FailureContext::None => {}
        FailureContext::SuspiciousInput(raw) => encoded.suspicious_input = Some(raw.clone()),
        FailureContext::ProvidedInput(raw) => encoded.provided_input = Some(raw.clone()),
        FailureContext::Denied {
            requested,
            authorized,
        } => {
            encoded.requested = Some(requested.to_string());
            encoded.authorized_id = Some(authorized.to_string());
        }
    }
    encoded
}
