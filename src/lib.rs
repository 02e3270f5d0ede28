// ============================================================================
// Unsigned Decimal Library
// Arbitrary-precision non-negative integers stored as base-10 digits
// ============================================================================

//! # Unsigned Decimal
//!
//! An arbitrary-precision unsigned integer kept as a sequence of decimal
//! digits, least significant first.
//!
//! ## Features
//!
//! - **Exact arithmetic** of any length: addition with carry, subtraction
//!   with borrow, magnitude comparison
//! - **Canonical form** on every value: no redundant leading zeros, zero is `[0]`
//! - **Checked subtraction**: a negative result is an `Underflow` error, never a panic
//! - **String round-trip** through `FromStr` and `Display`
//! - Optional `serde` (string form) and `logging` (tracing subscriber) features
//!
//! ## Example
//!
//! ```rust
//! use unsigned_decimal::prelude::*;
//!
//! let big: Decimal = "999999999999999999".parse().unwrap();
//! let one = Decimal::from(1u64);
//!
//! let sum = big.add(&one);
//! assert_eq!(sum.to_string(), "1000000000000000000");
//! assert!(sum.is_greater(&big));
//!
//! // Subtraction below zero is rejected
//! assert_eq!(one.checked_sub(&big), Err(NumericError::Underflow));
//!
//! // Digits are indexed from the units position
//! assert_eq!(sum.digit_at(18), Ok(1));
//! assert_eq!(sum.digit_count(), 19);
//! ```

#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{Decimal, NumericError, NumericResult};
}
