// ============================================================================
// Digit Buffers
// Grade-school base-10 algorithms over least-significant-first digit slices
// ============================================================================
//
// Index 0 of every buffer is the units digit. All functions here assume
// their inputs are valid digits (0-9); validation happens at construction.

use super::errors::{NumericError, NumericResult};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Digits kept inline before spilling to the heap.
///
/// Covers every `u64` (20 digits) and most `u128` values without allocating.
const INLINE_DIGITS: usize = 32;

/// Owned digit storage, least significant digit first.
pub(crate) type DigitBuf = SmallVec<[u8; INLINE_DIGITS]>;

/// Largest value a single decimal digit can hold.
pub(crate) const MAX_DIGIT: u8 = 9;

/// Base of the positional system.
const RADIX: u8 = 10;

/// Reject the first element above `MAX_DIGIT`.
#[inline]
pub(crate) fn validate(digits: &[u8]) -> NumericResult<()> {
    match digits.iter().find(|&&d| d > MAX_DIGIT) {
        Some(&bad) => Err(NumericError::InvalidDigit(bad)),
        None => Ok(()),
    }
}

/// Strip redundant most-significant zeros.
///
/// Always leaves at least one digit: an all-zero or empty buffer becomes `[0]`.
#[inline]
pub(crate) fn normalize(digits: &mut DigitBuf) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}

/// True if the buffer is in canonical form.
#[inline]
pub(crate) fn is_canonical(digits: &[u8]) -> bool {
    match digits {
        [] => false,
        [_] => true,
        [.., last] => *last != 0,
    }
}

/// Magnitude comparison of two canonical buffers.
///
/// A longer buffer is larger; equal lengths compare from the most
/// significant digit down.
pub(crate) fn compare(lhs: &[u8], rhs: &[u8]) -> Ordering {
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

/// Digit-wise sum with carry.
pub(crate) fn add(lhs: &[u8], rhs: &[u8]) -> DigitBuf {
    let width = lhs.len().max(rhs.len());
    let mut out = DigitBuf::with_capacity(width + 1);
    let mut carry = 0u8;

    for i in 0..width {
        let sum = carry + lhs.get(i).copied().unwrap_or(0) + rhs.get(i).copied().unwrap_or(0);
        out.push(sum % RADIX);
        carry = sum / RADIX;
    }

    if carry > 0 {
        out.push(carry);
    }

    normalize(&mut out);
    out
}

/// Digit-wise difference with borrow.
///
/// The caller must ensure `minuend >= subtrahend` by [`compare`]; a
/// borrow left over after the last position means that contract was broken.
pub(crate) fn sub(minuend: &[u8], subtrahend: &[u8]) -> DigitBuf {
    let width = minuend.len().max(subtrahend.len());
    let mut out = DigitBuf::with_capacity(width);
    let mut borrow = 0u8;

    for i in 0..width {
        let top = minuend.get(i).copied().unwrap_or(0);
        let bottom = subtrahend.get(i).copied().unwrap_or(0) + borrow;

        if top < bottom {
            out.push(top + RADIX - bottom);
            borrow = 1;
        } else {
            out.push(top - bottom);
            borrow = 0;
        }
    }

    debug_assert_eq!(borrow, 0, "subtrahend larger than minuend");

    normalize(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn buf(digits: &[u8]) -> DigitBuf {
        DigitBuf::from_slice(digits)
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate(&[0, 5, 9]), Ok(()));
        assert_eq!(validate(&[]), Ok(()));
        assert_eq!(validate(&[1, 10, 15]), Err(NumericError::InvalidDigit(10)));
    }

    #[test]
    fn test_normalize_strips_high_zeros() {
        let mut d: DigitBuf = smallvec![1, 0, 0, 0];
        normalize(&mut d);
        assert_eq!(d.as_slice(), &[1]);

        let mut z: DigitBuf = smallvec![0, 0, 0, 0, 0];
        normalize(&mut z);
        assert_eq!(z.as_slice(), &[0]);

        let mut empty = DigitBuf::new();
        normalize(&mut empty);
        assert_eq!(empty.as_slice(), &[0]);

        // Interior zeros survive
        let mut mid: DigitBuf = smallvec![5, 0, 3, 0];
        normalize(&mut mid);
        assert_eq!(mid.as_slice(), &[5, 0, 3]);
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical(&[0]));
        assert!(is_canonical(&[0, 1]));
        assert!(!is_canonical(&[1, 0]));
        assert!(!is_canonical(&[]));
    }

    #[test]
    fn test_compare() {
        // 123 vs 99
        assert_eq!(compare(&[3, 2, 1], &[9, 9]), Ordering::Greater);
        // 123 vs 124
        assert_eq!(compare(&[3, 2, 1], &[4, 2, 1]), Ordering::Less);
        // 321 vs 123 (most significant digit decides)
        assert_eq!(compare(&[1, 2, 3], &[3, 2, 1]), Ordering::Greater);
        assert_eq!(compare(&[7], &[7]), Ordering::Equal);
    }

    #[test]
    fn test_add_with_carry() {
        // 999 + 1 = 1000
        assert_eq!(add(&[9, 9, 9], &[1]).as_slice(), &[0, 0, 0, 1]);
        // 12345 + 67890 = 80235
        assert_eq!(
            add(&[5, 4, 3, 2, 1], &[0, 9, 8, 7, 6]).as_slice(),
            &[5, 3, 2, 0, 8]
        );
        assert_eq!(add(&[0], &[0]).as_slice(), &[0]);
    }

    #[test]
    fn test_sub_with_borrow() {
        // 1000 - 999 = 1
        assert_eq!(sub(&[0, 0, 0, 1], &[9, 9, 9]).as_slice(), &[1]);
        // 500 - 1 = 499
        assert_eq!(sub(&[0, 0, 5], &[1]).as_slice(), &[9, 9, 4]);
        // 42 - 42 = 0
        assert_eq!(sub(&[2, 4], &[2, 4]).as_slice(), &[0]);
    }

    #[test]
    fn test_results_stay_inline() {
        let sum = add(&buf(&[9; 20]), &buf(&[1]));
        assert_eq!(sum.len(), 21);
        assert!(!sum.spilled());
    }
}
