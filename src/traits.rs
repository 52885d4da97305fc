//! Scalar lane traits
//!
//! The `LaneScalar` family describes the six integer element types a
//! [`LaneVec`](crate::vector::LaneVec) can carry, together with the
//! width-change and signedness casts the emulation layer is built from.
//! Everything here is bit-pattern arithmetic: wrapping ops, an explicit
//! arithmetic/logical shift split, and lossless reinterpret casts.

/// An integer scalar that can occupy a vector lane.
///
/// Implemented for `i8`, `u8`, `i16`, `u16`, `i32`, and `u32`. All
/// arithmetic is wrapping (two's complement); overflow information is
/// surfaced separately through carry masks by the engine layers.
pub trait LaneScalar:
    Copy + PartialEq + Eq + PartialOrd + Ord + core::fmt::Debug
{
    /// Lane width in bits.
    const BITS: u32;
    /// Whether the lane is interpreted as two's-complement signed.
    const SIGNED: bool;
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;

    /// Wrapping addition.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Wrapping subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Wrapping multiplication (low half of the product).
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Wrapping two's-complement negation.
    fn wrapping_neg(self) -> Self;

    /// Bitwise AND.
    fn bit_and(self, rhs: Self) -> Self;
    /// Bitwise OR.
    fn bit_or(self, rhs: Self) -> Self;
    /// Bitwise XOR.
    fn bit_xor(self, rhs: Self) -> Self;
    /// Bitwise complement.
    fn bit_not(self) -> Self;

    /// Left shift. Amounts at or beyond the lane width are a caller
    /// contract violation; the amount wraps rather than panics.
    fn shl(self, amount: u32) -> Self;
    /// Arithmetic (sign-filling) right shift.
    fn shr_arithmetic(self, amount: u32) -> Self;
    /// Logical (zero-filling) right shift.
    fn shr_logical(self, amount: u32) -> Self;

    /// Number of leading zero bits.
    fn leading_zeros(self) -> u32;
    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Numeric value of the lane, sign-extended for signed types.
    ///
    /// Every lane type fits `i64` exactly; this is the bridge used for
    /// index computation and reference arithmetic.
    fn to_i64(self) -> i64;
}

/// A lane scalar with a double-width counterpart.
///
/// `widen` is value-preserving: sign-extension for signed types,
/// zero-extension for unsigned ones.
pub trait WidenScalar: LaneScalar {
    /// The lane type twice as wide, with the same signedness.
    type Wide: NarrowScalar<Half = Self>;
    /// Extend to double width without changing the value.
    fn widen(self) -> Self::Wide;
}

/// A lane scalar with a half-width counterpart.
///
/// `narrow` truncates to the low half of the bit pattern.
pub trait NarrowScalar: LaneScalar {
    /// The lane type half as wide, with the same signedness.
    type Half: WidenScalar<Wide = Self>;
    /// Truncate to the low half-width bits.
    fn narrow(self) -> Self::Half;
}

/// A lane scalar with a same-width opposite-signedness counterpart.
pub trait SignCastScalar: LaneScalar {
    /// The same-width type with flipped signedness.
    type Flipped: SignCastScalar<Flipped = Self>;
    /// Reinterpret the bit pattern under the opposite signedness.
    fn cast_sign(self) -> Self::Flipped;
}

macro_rules! impl_lane_scalar {
    ($t:ty, $ut:ty, $st:ty, $signed:expr) => {
        impl LaneScalar for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                self.wrapping_neg()
            }

            #[inline(always)]
            fn bit_and(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline(always)]
            fn bit_or(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline(always)]
            fn bit_xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            #[inline(always)]
            fn bit_not(self) -> Self {
                !self
            }

            #[inline(always)]
            fn shl(self, amount: u32) -> Self {
                self.wrapping_shl(amount)
            }

            #[inline(always)]
            fn shr_arithmetic(self, amount: u32) -> Self {
                ((self as $st).wrapping_shr(amount)) as $t
            }

            #[inline(always)]
            fn shr_logical(self, amount: u32) -> Self {
                ((self as $ut).wrapping_shr(amount)) as $t
            }

            #[inline(always)]
            fn leading_zeros(self) -> u32 {
                (self as $ut).leading_zeros()
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                self.count_ones()
            }

            #[inline(always)]
            fn to_i64(self) -> i64 {
                self as i64
            }
        }
    };
}

impl_lane_scalar!(i8, u8, i8, true);
impl_lane_scalar!(u8, u8, i8, false);
impl_lane_scalar!(i16, u16, i16, true);
impl_lane_scalar!(u16, u16, i16, false);
impl_lane_scalar!(i32, u32, i32, true);
impl_lane_scalar!(u32, u32, i32, false);

macro_rules! impl_widen_narrow {
    ($half:ty => $wide:ty) => {
        impl WidenScalar for $half {
            type Wide = $wide;

            #[inline(always)]
            fn widen(self) -> $wide {
                self as $wide
            }
        }

        impl NarrowScalar for $wide {
            type Half = $half;

            #[inline(always)]
            fn narrow(self) -> $half {
                self as $half
            }
        }
    };
}

impl_widen_narrow!(i8 => i16);
impl_widen_narrow!(u8 => u16);
impl_widen_narrow!(i16 => i32);
impl_widen_narrow!(u16 => u32);

macro_rules! impl_sign_cast {
    ($signed:ty, $unsigned:ty) => {
        impl SignCastScalar for $signed {
            type Flipped = $unsigned;

            #[inline(always)]
            fn cast_sign(self) -> $unsigned {
                self as $unsigned
            }
        }

        impl SignCastScalar for $unsigned {
            type Flipped = $signed;

            #[inline(always)]
            fn cast_sign(self) -> $signed {
                self as $signed
            }
        }
    };
}

impl_sign_cast!(i8, u8);
impl_sign_cast!(i16, u16);
impl_sign_cast!(i32, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_shift_fills_sign() {
        assert_eq!((-0x8000i16).shr_arithmetic(15), -1);
        assert_eq!(LaneScalar::shr_arithmetic(0x8000u16, 15), 0xFFFF);
    }

    #[test]
    fn test_logical_shift_fills_zero() {
        assert_eq!((-1i16).shr_logical(8), 0x00FF);
        assert_eq!(LaneScalar::shr_logical(0xFF00u16, 8), 0x00FF);
    }

    #[test]
    fn test_widen_preserves_value() {
        assert_eq!((-5i8).widen(), -5i16);
        assert_eq!(250u8.widen(), 250u16);
        assert_eq!((-5i16).widen(), -5i32);
        assert_eq!(65000u16.widen(), 65000u32);
    }

    #[test]
    fn test_narrow_truncates() {
        assert_eq!(0x1_0001i32.narrow(), 1i16);
        assert_eq!(0xFFFF_FFFFu32.narrow(), 0xFFFFu16);
    }

    #[test]
    fn test_sign_cast_round_trip() {
        assert_eq!((-1i16).cast_sign(), 0xFFFFu16);
        assert_eq!(0xFFFFu16.cast_sign(), -1i16);
        assert_eq!((-1i16).cast_sign().cast_sign(), -1i16);
    }

    #[test]
    fn test_to_i64_sign_aware() {
        assert_eq!((-1i16).to_i64(), -1);
        assert_eq!(0xFFFFu16.to_i64(), 65535);
        assert_eq!(0xFFFF_FFFFu32.to_i64(), 4_294_967_295);
    }
}
