//! # usid-core — Validated US Identifier Types
//!
//! This crate defines a small set of validated, immutable identifier types
//! used in United States financial and civil record-keeping:
//!
//! - [`Rtn`] — an ABA routing transit number identifying a financial
//!   institution, with category classification and checksum validation.
//! - [`Ssn`] — a social security number identifying an individual, with
//!   area/group/serial decomposition.
//! - [`FederalReserveDistrict`] — the twelve Federal Reserve Bank
//!   districts that ranged routing number categories encode.
//!
//! ## Key Design Principles
//!
//! 1. **Parse, don't validate twice.** Every constructor returns either a
//!    fully validated instance or a [`UsIdError`]; a constructed value is
//!    valid for its lifetime. No bare strings or integers for identifiers.
//!
//! 2. **Structural validation only.** The checksum, category, and
//!    zero-component rules check a number's self-consistency; no registry
//!    of issued numbers is consulted.
//!
//! 3. **Frozen enum order.** District numbers, letter codes, and ranged
//!    category offsets are all derived from declaration order, which is
//!    never reordered across versions.
//!
//! 4. **Value semantics throughout.** All types are `Copy`, keyed by their
//!    nine-digit value for equality, ordering, and hashing, and freely
//!    shareable across threads.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No I/O; construction is pure and synchronous.
//! - No `panic!()` or `.unwrap()` outside tests. The single `expect()` in
//!   [`Rtn::category()`] guards an internal invariant that construction
//!   makes unreachable; tripping it is a defect in this crate.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod district;
pub mod error;
pub mod rtn;
pub mod ssn;

// Re-export primary types for ergonomic imports.
pub use district::{FederalReserveDistrict, DISTRICT_COUNT};
pub use error::UsIdError;
pub use rtn::{Category, Rtn};
pub use ssn::Ssn;
