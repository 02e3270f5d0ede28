// ============================================================================
// Numeric Module
// Arbitrary-precision unsigned decimal arithmetic
// ============================================================================
//
// This module provides:
// - Decimal: unsigned integer of any length, one base-10 digit per element
// - NumericError: Error types for construction and arithmetic
// - digits (crate-private): carry/borrow/compare kernels behind Decimal
//
// Design principles:
// - Canonical storage: never empty, no redundant leading zeros
// - All fallible operations return Result (no panics)
// - Arithmetic builds new values; operands are never mutated
// - Least-significant-digit-first storage, inline for small values

mod decimal;
mod digits;
mod errors;

pub use decimal::Decimal;
pub use errors::{NumericError, NumericResult};
