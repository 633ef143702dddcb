//! # Error Types — Construction Failures
//!
//! Defines the error type used throughout the crate. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Every identifier is fully validated at construction; there is no partial
//! construction and no deferred validation. A constructor either returns a
//! valid instance or one of three failure kinds:
//!
//! - **Syntax** — the input does not match the required digit/delimiter
//!   pattern (wrong length, non-digit characters, misplaced delimiter).
//! - **Range** — an integer input lies outside the representable range for
//!   the identifier length.
//! - **Invalid** — the input is syntactically well-formed but violates a
//!   business rule (zero-valued identifier, unknown category ID, failed
//!   checksum, zero-valued SSN component).
//!
//! Callers decide whether to retry with corrected input or reject upstream;
//! the library never recovers on its own.

use thiserror::Error;

/// Construction-time failure for a US identifier type.
///
/// Errors carry a human-readable description naming the violated rule and,
/// where useful, the offending input. The enum derives `PartialEq`/`Eq` so
/// the fail-fast contract (which rule tripped first) is directly testable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsIdError {
    /// Input does not match the required digit/delimiter pattern.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Integer input outside the representable range for the identifier.
    #[error("value {value} out of range [{min}, {max}]")]
    Range {
        /// The rejected input value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Well-formed input that violates a business rule.
    #[error("invalid identifier: {0}")]
    Invalid(String),
}
