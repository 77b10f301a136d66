//! Underlying integral representations.
//!
//! Every enum is backed by one of the eight fixed-width integer types. This
//! module abstracts them behind the [`EnumRepr`] trait so the metadata cache
//! and its algorithms are written once instead of once per width and
//! signedness. `i128` is the canonical wide carrier: every supported type
//! converts to it losslessly, and range checks against a foreign width are a
//! single `try_from`.
//!
//! ## Examples
//!
//! ```rust
//! use fastenum::EnumRepr;
//!
//! assert_eq!(u8::BITS_WIDTH, 8);
//! assert!(!u8::SIGNED);
//! assert_eq!(u8::from_wide(255), Some(255u8));
//! assert_eq!(u8::from_wide(256), None);
//! assert_eq!((-1i8).to_wide(), -1);
//! ```

use std::fmt;
use std::hash::Hash;
use std::num::IntErrorKind;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A fixed-width integer type usable as an enum's underlying representation.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32` and `u64`.
/// The trait requires exactly what the cache algorithms use: total ordering
/// for the sorted value table, bitwise operators for flag arithmetic, and
/// lossless widening through `i128` for cross-width conversion.
pub trait EnumRepr:
    Copy
    + Eq
    + Ord
    + Hash
    + Send
    + Sync
    + fmt::Debug
    + fmt::Display
    + fmt::UpperHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + 'static
{
    /// The additive and bitwise identity.
    const ZERO: Self;

    /// Width in bits (named to avoid clashing with the inherent `BITS`).
    const BITS_WIDTH: u32;

    /// Whether the type is signed.
    const SIGNED: bool;

    /// Widens to the canonical `i128` carrier. Lossless for all eight types.
    fn to_wide(self) -> i128;

    /// Narrows from the canonical carrier, `None` if out of range.
    fn from_wide(wide: i128) -> Option<Self>;

    /// Reinterprets a raw bit pattern, `None` if bits beyond the width are set.
    ///
    /// For signed types the pattern is two's complement, so
    /// `i8::from_bit_pattern(0xFF)` is `Some(-1)`.
    fn from_bit_pattern(bits: u64) -> Option<Self>;

    /// Renders the two's-complement bit pattern as uppercase hex, zero-padded
    /// to the full width.
    fn hex(self) -> String {
        format!("{:0width$X}", self, width = (Self::BITS_WIDTH / 4) as usize)
    }
}

macro_rules! impl_enum_repr {
    ($($ty:ty => $signed:expr),+ $(,)?) => {
        $(
            impl EnumRepr for $ty {
                const ZERO: Self = 0;
                const BITS_WIDTH: u32 = <$ty>::BITS;
                const SIGNED: bool = $signed;

                #[inline]
                fn to_wide(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_wide(wide: i128) -> Option<Self> {
                    <$ty>::try_from(wide).ok()
                }

                #[inline]
                fn from_bit_pattern(bits: u64) -> Option<Self> {
                    let mask: u64 = u64::MAX >> (64 - <$ty>::BITS);
                    if bits & !mask != 0 {
                        None
                    } else {
                        Some(bits as $ty)
                    }
                }
            }
        )+
    };
}

impl_enum_repr! {
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
}

/// Outcome of parsing a numeric literal token.
///
/// Distinguishes "not a number" (the format chain continues) from "a number
/// that does not fit" (an overflow error surfaces immediately).
pub(crate) enum Numeric<T> {
    Value(T),
    Overflow,
    Malformed,
}

/// Parses a signed decimal literal (optional `+`/`-`) into `T`.
pub(crate) fn parse_decimal<T: EnumRepr>(token: &str) -> Numeric<T> {
    match token.parse::<i128>() {
        Ok(wide) => T::from_wide(wide).map_or(Numeric::Overflow, Numeric::Value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Numeric::Overflow,
            _ => Numeric::Malformed,
        },
    }
}

/// Parses a hex literal (optional `0x` prefix) as a raw bit pattern into `T`.
pub(crate) fn parse_hex<T: EnumRepr>(token: &str) -> Numeric<T> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Numeric::Malformed;
    }
    match u128::from_str_radix(digits, 16) {
        Ok(bits) if bits <= u128::from(u64::MAX) => {
            T::from_bit_pattern(bits as u64).map_or(Numeric::Overflow, Numeric::Value)
        }
        // All-hex-digit input that does not fit 64 bits can only be too large.
        Ok(_) | Err(_) => Numeric::Overflow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_round_trip_at_bounds() {
        assert_eq!(i8::from_wide(127), Some(127i8));
        assert_eq!(i8::from_wide(128), None);
        assert_eq!(i8::from_wide(-128), Some(-128i8));
        assert_eq!(i8::from_wide(-129), None);
        assert_eq!(u64::from_wide(u64::MAX.to_wide()), Some(u64::MAX));
        assert_eq!(u8::from_wide(-1), None);
    }

    #[test]
    fn test_bit_pattern_reinterprets_twos_complement() {
        assert_eq!(i8::from_bit_pattern(0xFF), Some(-1i8));
        assert_eq!(i8::from_bit_pattern(0x100), None);
        assert_eq!(u16::from_bit_pattern(0xFFFF), Some(0xFFFFu16));
        assert_eq!(i64::from_bit_pattern(u64::MAX), Some(-1i64));
    }

    #[test]
    fn test_hex_is_zero_padded_to_width() {
        assert_eq!(5u8.hex(), "05");
        assert_eq!((-1i8).hex(), "FF");
        assert_eq!(255u16.hex(), "00FF");
        assert_eq!(0u32.hex(), "00000000");
    }

    #[test]
    fn test_parse_decimal_distinguishes_overflow() {
        assert!(matches!(parse_decimal::<u8>("200"), Numeric::Value(200)));
        assert!(matches!(parse_decimal::<u8>("-3"), Numeric::Overflow));
        assert!(matches!(parse_decimal::<u8>("300"), Numeric::Overflow));
        assert!(matches!(parse_decimal::<u8>("ten"), Numeric::Malformed));
        assert!(matches!(parse_decimal::<i16>("+42"), Numeric::Value(42)));
        assert!(matches!(
            parse_decimal::<i64>("999999999999999999999999999999999999999"),
            Numeric::Overflow
        ));
    }

    #[test]
    fn test_parse_hex_accepts_prefix_and_bare_digits() {
        assert!(matches!(parse_hex::<u8>("0xFF"), Numeric::Value(255)));
        assert!(matches!(parse_hex::<u8>("ff"), Numeric::Value(255)));
        assert!(matches!(parse_hex::<i8>("FF"), Numeric::Value(-1)));
        assert!(matches!(parse_hex::<u8>("100"), Numeric::Overflow));
        assert!(matches!(parse_hex::<u8>("0x"), Numeric::Malformed));
        assert!(matches!(parse_hex::<u8>("zz"), Numeric::Malformed));
    }
}
