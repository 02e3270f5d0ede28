// ============================================================================
// Unsigned Decimal
// Arbitrary-precision non-negative integer stored as base-10 digits
// ============================================================================

use super::digits::{self, DigitBuf};
use super::errors::{NumericError, NumericResult};
use smallvec::smallvec;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops;

/// Arbitrary-precision unsigned decimal integer.
///
/// Stores one base-10 digit per element, least significant digit first
/// (index 0 is the units digit). The storage is always canonical: it is
/// never empty and carries no redundant most-significant zeros, so zero
/// is exactly `[0]`.
///
/// Arithmetic never touches its operands; every operation builds a new
/// value. The assign forms compute the result first and only then replace
/// the target, so a failed `checked_sub_assign` leaves it unchanged.
///
/// # Example
/// ```
/// use unsigned_decimal::numeric::Decimal;
///
/// let a: Decimal = "999".parse()?;
/// let b = Decimal::from_digits(&[1])?;
///
/// let sum = a.add(&b);
/// assert_eq!(sum.to_string(), "1000");
///
/// let back = sum.checked_sub(&b)?;
/// assert_eq!(back, a);
/// # Ok::<(), unsigned_decimal::numeric::NumericError>(())
/// ```
///
/// The unchecked digit kernels are internal; raw digit buffers can only
/// enter through the validating constructors:
/// ```compile_fail
/// let _ = unsigned_decimal::numeric::digits::add(&[200], &[100]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    digits: DigitBuf,
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Canonical zero.
    #[inline]
    pub fn zero() -> Self {
        Self {
            digits: smallvec![0],
        }
    }

    /// Same as [`Decimal::zero`].
    #[inline]
    pub fn new() -> Self {
        Self::zero()
    }

    /// Build `count` copies of `fill`, most significant first.
    ///
    /// `count == 0` yields zero whatever `fill` is. A zero fill collapses
    /// to canonical zero.
    ///
    /// # Errors
    /// Returns `InvalidDigit` if `fill > 9` (and `count > 0`).
    pub fn filled(count: usize, fill: u8) -> NumericResult<Self> {
        if count == 0 {
            return Ok(Self::zero());
        }

        if fill > digits::MAX_DIGIT {
            tracing::debug!(fill, count, "rejected fill digit");
            return Err(NumericError::InvalidDigit(fill));
        }

        if fill == 0 {
            return Ok(Self::zero());
        }

        Ok(Self {
            digits: DigitBuf::from_elem(fill, count),
        })
    }

    /// Build from digits written most significant first, e.g. `[1, 2, 3]`
    /// is one hundred twenty-three.
    ///
    /// An empty slice yields zero; leading zeros are dropped.
    ///
    /// # Errors
    /// Returns `InvalidDigit` for the first element above 9. Nothing is
    /// stored when that happens.
    pub fn from_digits(msd_first: &[u8]) -> NumericResult<Self> {
        if msd_first.is_empty() {
            return Ok(Self::zero());
        }

        digits::validate(msd_first).inspect_err(|err| {
            tracing::debug!(error = %err, len = msd_first.len(), "rejected digit list");
        })?;

        let mut digits: DigitBuf = msd_first.iter().rev().copied().collect();
        digits::normalize(&mut digits);
        Ok(Self { digits })
    }

    /// Parse a string of ASCII digits.
    ///
    /// Leading `'0'` characters are skipped; an empty or all-zero string is
    /// zero. No sign, whitespace, or separator is accepted.
    ///
    /// # Errors
    /// Returns `InvalidNumericString` if any character after the leading
    /// zeros is not `'0'..='9'`. The whole remainder is checked before any
    /// digit is converted.
    pub fn from_string(s: &str) -> NumericResult<Self> {
        let significant = s.trim_start_matches('0');
        if significant.is_empty() {
            return Ok(Self::zero());
        }

        if !significant.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(input = s, "rejected numeric string");
            return Err(NumericError::InvalidNumericString);
        }

        // Leading zeros are gone, so the result is already canonical
        let digits: DigitBuf = significant.bytes().rev().map(|b| b - b'0').collect();
        debug_assert!(digits::is_canonical(&digits));
        Ok(Self { digits })
    }

    fn from_u128(mut value: u128) -> Self {
        if value == 0 {
            return Self::zero();
        }

        let mut digits = DigitBuf::new();
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        Self { digits }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of stored digits. Zero has one digit.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Digit at `index`, counted from the units digit (index 0).
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` when `index >= digit_count()`.
    #[inline]
    pub fn digit_at(&self, index: usize) -> NumericResult<u8> {
        self.digits
            .get(index)
            .copied()
            .ok_or(NumericError::IndexOutOfRange {
                index,
                len: self.digits.len(),
            })
    }

    /// Check if the value is numerically zero.
    ///
    /// The digit storage is never empty, so this is a value check only.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.as_slice() == [0]
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Sum of `self` and `other`. Never fails.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            digits: digits::add(&self.digits, &other.digits),
        }
    }

    /// Difference `self - other`.
    ///
    /// # Errors
    /// Returns `Underflow` if `other` is larger than `self`.
    pub fn checked_sub(&self, other: &Self) -> NumericResult<Self> {
        if self.is_less(other) {
            tracing::debug!(minuend = %self, subtrahend = %other, "decimal subtraction underflow");
            return Err(NumericError::Underflow);
        }

        Ok(Self {
            digits: digits::sub(&self.digits, &other.digits),
        })
    }

    /// Replace `self` with `self - other`.
    ///
    /// # Errors
    /// Returns `Underflow` if `other` is larger than `self`; `self` keeps
    /// its previous value.
    pub fn checked_sub_assign(&mut self, other: &Self) -> NumericResult<()> {
        let difference = self.checked_sub(other)?;
        tracing::trace!(digits = difference.digit_count(), "rebinding after subtraction");
        *self = difference;
        Ok(())
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Strictly greater in magnitude.
    #[inline]
    pub fn is_greater(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Strictly less in magnitude.
    #[inline]
    pub fn is_less(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Same magnitude, i.e. identical canonical digits.
    #[inline]
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        digits::compare(&self.digits, &other.digits)
    }
}

impl ops::Add<&Decimal> for &Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: &Decimal) -> Decimal {
        Decimal::add(self, rhs)
    }
}

impl ops::Add<&Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: &Decimal) -> Decimal {
        Decimal::add(&self, rhs)
    }
}

impl ops::Add for Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: Decimal) -> Decimal {
        Decimal::add(&self, &rhs)
    }
}

impl ops::AddAssign<&Decimal> for Decimal {
    fn add_assign(&mut self, rhs: &Decimal) {
        let sum = Decimal::add(self, rhs);
        tracing::trace!(digits = sum.digit_count(), "rebinding after addition");
        *self = sum;
    }
}

impl ops::AddAssign for Decimal {
    #[inline]
    fn add_assign(&mut self, rhs: Decimal) {
        *self += &rhs;
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::zero(), |acc, x| acc + x)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({}, digits={})", self, self.digits.len())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .digits
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();
        f.pad_integral(true, "", &rendered)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Decimal {
    type Err = NumericError;

    /// Parse from a digit string.
    ///
    /// # Examples
    /// - "12345" -> 12345
    /// - "000" -> 0
    /// - "12a34" -> `InvalidNumericString`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

// ============================================================================
// Primitive Conversions
// ============================================================================

impl From<u32> for Decimal {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from_u128(u128::from(value))
    }
}

impl From<u64> for Decimal {
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_u128(u128::from(value))
    }
}

impl From<u128> for Decimal {
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl TryFrom<&Decimal> for u128 {
    type Error = NumericError;

    fn try_from(value: &Decimal) -> Result<Self, Self::Error> {
        value.digits.iter().rev().try_fold(0u128, |acc, &d| {
            acc.checked_mul(10)
                .and_then(|scaled| scaled.checked_add(u128::from(d)))
                .ok_or(NumericError::Overflow)
        })
    }
}

impl TryFrom<&Decimal> for u64 {
    type Error = NumericError;

    fn try_from(value: &Decimal) -> Result<Self, Self::Error> {
        let wide = u128::try_from(value)?;
        u64::try_from(wide).map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Decimal {
    /// Convert from rust_decimal::Decimal.
    ///
    /// Accepts non-negative integral values at any scale (e.g. `42.000`).
    ///
    /// # Errors
    /// - `Underflow` if the value is negative
    /// - `PrecisionLoss` if the value has a non-zero fractional part
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        if d.is_zero() {
            return Ok(Self::zero());
        }
        if d.is_sign_negative() {
            return Err(NumericError::Underflow);
        }
        if !d.fract().is_zero() {
            return Err(NumericError::PrecisionLoss);
        }

        let integral = d.trunc().to_u128().ok_or(NumericError::Overflow)?;
        Ok(Self::from_u128(integral))
    }

    /// Convert to rust_decimal::Decimal with scale 0.
    ///
    /// # Errors
    /// Returns `Overflow` if the value exceeds the 96-bit mantissa of
    /// rust_decimal (roughly 7.9 × 10^28).
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let wide = u128::try_from(self)?;
        let signed = i128::try_from(wide).map_err(|_| NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(signed, 0)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Serde (string form)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Decimal;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Decimal {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string of decimal digits or an unsigned integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
            Decimal::from_string(v).map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }
    }

    impl<'de> Deserialize<'de> for Decimal {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(DecimalVisitor)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
