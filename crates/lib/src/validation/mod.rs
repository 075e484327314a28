//! Identifier validation for the access gate
//!
//! This module classifies the raw `userId` argument forwarded by the conversational
//! layer. Attack signatures are checked first, then the identifier format. The
//! result is exactly one [`ValidationVerdict`] per argument.

pub mod signatures;


use tracing::debug;

use crate::identity::RequestedId;

pub use signatures::{SIGNATURES, Signature, SignatureClass, scan};

/// Classification of a raw identifier argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    /// The argument matched an attack signature.
    Malicious(&'static Signature),
    /// The argument is not a non-empty string of decimal digits.
    Malformed,
    /// The argument is a well-formed owner id.
    Valid(RequestedId),
}

impl ValidationVerdict {
    /// Check if this verdict is an attack match.
    pub fn is_malicious(&self) -> bool {
        matches!(self, ValidationVerdict::Malicious(_))
    }

    /// The validated requested id, if any.
    pub fn requested_id(&self) -> Option<&RequestedId> {
        match self {
            ValidationVerdict::Valid(id) => Some(id),
            _ => None,
        }
    }
}

/// Validate a raw identifier argument.
///
/// Signatures are evaluated in table order before any format check, so an argument
/// that is both an attack and malformed always reports as an attack. Any non-empty
/// digit string is valid, whatever its length; leading zeros are normalized away.
///
/// # Examples
/// ```
/// use txguard::validation::{ValidationVerdict, validate};
/// use txguard::OwnerId;
///
/// assert_eq!(validate("42"), ValidationVerdict::Valid(OwnerId::new(42).into()));
/// assert_eq!(validate("abc"), ValidationVerdict::Malformed);
/// assert!(validate("1' OR '1'='1").is_malicious());
/// ```
pub fn validate(raw: &str) -> ValidationVerdict {
    if let Some(signature) = scan(raw) {
        debug!(signature = signature.name, "Attack signature matched");
        return ValidationVerdict::Malicious(signature);
    }

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationVerdict::Malformed;
    }

    ValidationVerdict::Valid(RequestedId::from_digits(raw))
}
