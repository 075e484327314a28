//! Attack signature table
//!
//! The ordered list of injection signatures the gate screens its argument channel
//! for. This is a heuristic pre-filter for a single argument, not a general SQL
//! injection scanner: queries must still be parameterized at the data-access layer.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

/// Broad family of an attack signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureClass {
    /// Two keywords that only appear together in a query (`UNION SELECT`).
    KeywordPair,
    /// A statement that modifies or destroys data.
    DestructiveStatement,
    /// A statement terminator or comment marker.
    Terminator,
    /// A condition that is always true.
    Tautology,
}

/// A single entry of the signature table.
#[derive(Debug, PartialEq, Eq)]
pub struct Signature {
    /// Stable short name, used in logs.
    pub name: &'static str,
    /// Regular expression, matched case-insensitively anywhere in the argument.
    pub pattern: &'static str,
    /// Human-readable description of what the signature catches.
    pub description: &'static str,
    pub class: SignatureClass,
}

/// The signature table, in evaluation order.
pub static SIGNATURES: &[Signature] = &[
    Signature {
        name: "union_select",
        pattern: r"UNION\s+SELECT",
        description: "UNION SELECT keyword pair",
        class: SignatureClass::KeywordPair,
    },
    Signature {
        name: "drop_table",
        pattern: r"DROP\s+TABLE",
        description: "DROP TABLE statement",
        class: SignatureClass::DestructiveStatement,
    },
    Signature {
        name: "insert_into",
        pattern: r"INSERT\s+INTO",
        description: "INSERT INTO statement",
        class: SignatureClass::DestructiveStatement,
    },
    Signature {
        name: "delete_from",
        pattern: r"DELETE\s+FROM",
        description: "DELETE FROM statement",
        class: SignatureClass::DestructiveStatement,
    },
    Signature {
        name: "comment",
        pattern: r"--",
        description: "SQL comment marker",
        class: SignatureClass::Terminator,
    },
    Signature {
        name: "terminator",
        pattern: r";",
        description: "statement terminator",
        class: SignatureClass::Terminator,
    },
    Signature {
        name: "quoted_or_tautology",
        pattern: r"'.*OR.*'.*=.*'",
        description: "quoted OR tautology",
        class: SignatureClass::Tautology,
    },
    Signature {
        name: "numeric_tautology",
        pattern: r"1=1",
        description: "literal 1=1 tautology",
        class: SignatureClass::Tautology,
    },
];

fn compiled() -> &'static [Regex] {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        SIGNATURES
            .iter()
            .map(|signature| {
                RegexBuilder::new(signature.pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("signature pattern")
            })
            .collect()
    })
}

/// Return the first signature in table order that matches `raw`.
pub fn scan(raw: &str) -> Option<&'static Signature> {
    SIGNATURES
        .iter()
        .zip(compiled())
        .find(|(_, re)| re.is_match(raw))
        .map(|(signature, _)| signature)
}
