//! # wdc-core
//!
//! Core types and error definitions for the workday calendar.
//!
//! This crate provides the building blocks shared by the rest of the
//! workspace: primitive aliases, the error hierarchy, and the `ensure!` /
//! `fail!` early-return macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Exact decimal number used for workday increments (e.g. `1.25` workdays).
pub use rust_decimal::Decimal;

/// A signed count of minutes.
pub type Minutes = i64;

/// A signed count of whole workdays.
pub type Workdays = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
