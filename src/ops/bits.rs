//! Bitwise and lane-local operations
//!
//! Bit logic, absolute values, clamping, and per-lane bit counts. The
//! 32-bit forms are composed from the half pair: `abs` splats the sign of
//! the high half across both halves before the add/xor trick, and the bit
//! counts combine the two 16-bit half counts.

use crate::traits::LaneScalar;
use crate::vector::LaneVec;

/// Bitwise AND of two lane vectors.
#[inline(always)]
pub fn and<T: LaneScalar, const N: usize>(
    a: LaneVec<T, N>,
    b: LaneVec<T, N>,
) -> LaneVec<T, N> {
    a.and(b)
}

/// Bitwise OR of two lane vectors.
#[inline(always)]
pub fn or<T: LaneScalar, const N: usize>(
    a: LaneVec<T, N>,
    b: LaneVec<T, N>,
) -> LaneVec<T, N> {
    a.or(b)
}

/// Bitwise XOR of two lane vectors.
#[inline(always)]
pub fn xor<T: LaneScalar, const N: usize>(
    a: LaneVec<T, N>,
    b: LaneVec<T, N>,
) -> LaneVec<T, N> {
    a.xor(b)
}

/// Bitwise complement of each lane.
#[inline(always)]
pub fn not<T: LaneScalar, const N: usize>(a: LaneVec<T, N>) -> LaneVec<T, N> {
    a.not()
}

/// Signed lane vectors with an unsigned absolute value.
pub trait AbsLanes: Copy {
    /// The unsigned result type; `|MIN|` is representable.
    type Output;
    /// Per-lane absolute value.
    fn abs(self) -> Self::Output;
}

impl<const N: usize> AbsLanes for LaneVec<i16, N> {
    type Output = LaneVec<u16, N>;

    #[inline(always)]
    fn abs(self) -> LaneVec<u16, N> {
        // (v + sign) ^ sign, with sign = 0 or -1 from the top bit.
        let sign = self.shr_arithmetic(LaneVec::splat(15));
        self.add(sign).xor(sign).cast_sign()
    }
}

impl<const N: usize> AbsLanes for LaneVec<i8, N> {
    type Output = LaneVec<u8, N>;

    #[inline(always)]
    fn abs(self) -> LaneVec<u8, N> {
        // Promote to native width where |i8::MIN| exists, then narrow.
        self.widen().abs().narrow()
    }
}

impl<const N: usize> AbsLanes for LaneVec<i32, N> {
    type Output = LaneVec<u32, N>;

    #[inline(always)]
    fn abs(self) -> LaneVec<u32, N> {
        let (_, hi) = self.unpack();
        let sign = hi.shr_arithmetic(LaneVec::splat(15));
        let pair = LaneVec::<i32, N>::pack(sign.cast_sign(), sign);
        self.add(pair).xor(pair).cast_sign()
    }
}

/// Per-lane absolute value of a signed vector, as the unsigned type.
///
/// # Example
///
/// ```rust
/// use lanewise::{ops, Vec16s, Vec16u};
///
/// assert_eq!(ops::abs(Vec16s::splat(i16::MIN)), Vec16u::splat(0x8000));
/// ```
#[inline(always)]
pub fn abs<V: AbsLanes>(v: V) -> V::Output {
    v.abs()
}

/// Absolute difference of each lane pair: `max(a, b) - min(a, b)`.
///
/// Wraps when the true difference exceeds the lane range (signed operands
/// at opposite extremes).
#[inline(always)]
pub fn abs_diff<T: LaneScalar, const N: usize>(
    a: LaneVec<T, N>,
    b: LaneVec<T, N>,
) -> LaneVec<T, N> {
    LaneVec::select(a.gt(b), a.sub(b), b.sub(a))
}

/// Clamp each lane into `[lo, hi]` (per-lane bounds).
#[inline(always)]
pub fn clamp<T: LaneScalar, const N: usize>(
    v: LaneVec<T, N>,
    lo: LaneVec<T, N>,
    hi: LaneVec<T, N>,
) -> LaneVec<T, N> {
    LaneVec::select(v.lt(lo), lo, LaneVec::select(hi.lt(v), hi, v))
}

/// Lane vectors with per-lane bit counts.
///
/// Counts are reported as 16-bit lanes for every input width; the 32-bit
/// impls combine the counts of the two halves.
pub trait BitCounts: Copy {
    /// The 16-bit count vector type, signedness matching the input.
    type Count;
    /// Leading zero bits per lane.
    fn leading_zeros(self) -> Self::Count;
    /// Leading redundant sign bits per lane, measured as the leading
    /// zero bits of the lane's magnitude. Unsigned lanes reinterpret the
    /// bit pattern as signed first.
    fn leading_sign_bits(self) -> Self::Count;
    /// Set bits per lane.
    fn count_ones(self) -> Self::Count;
}

impl<const N: usize> BitCounts for LaneVec<i16, N> {
    type Count = LaneVec<i16, N>;

    #[inline(always)]
    fn leading_zeros(self) -> LaneVec<i16, N> {
        LaneVec::from_fn(|i| LaneScalar::leading_zeros(self.0[i]) as i16)
    }

    #[inline(always)]
    fn leading_sign_bits(self) -> LaneVec<i16, N> {
        self.abs().leading_zeros().cast_sign()
    }

    #[inline(always)]
    fn count_ones(self) -> LaneVec<i16, N> {
        LaneVec::from_fn(|i| LaneScalar::count_ones(self.0[i]) as i16)
    }
}

impl<const N: usize> BitCounts for LaneVec<u16, N> {
    type Count = LaneVec<u16, N>;

    #[inline(always)]
    fn leading_zeros(self) -> LaneVec<u16, N> {
        self.cast_sign().leading_zeros().cast_sign()
    }

    #[inline(always)]
    fn leading_sign_bits(self) -> LaneVec<u16, N> {
        self.cast_sign().leading_sign_bits().cast_sign()
    }

    #[inline(always)]
    fn count_ones(self) -> LaneVec<u16, N> {
        self.cast_sign().count_ones().cast_sign()
    }
}

impl<const N: usize> BitCounts for LaneVec<i32, N> {
    type Count = LaneVec<i16, N>;

    #[inline(always)]
    fn leading_zeros(self) -> LaneVec<i16, N> {
        let (lo, hi) = self.unpack();
        let hi_count = hi.leading_zeros();
        let lo_count = lo.cast_sign().leading_zeros();
        LaneVec::select(
            hi.eq(LaneVec::zero()),
            lo_count.add(LaneVec::splat(16)),
            hi_count,
        )
    }

    #[inline(always)]
    fn leading_sign_bits(self) -> LaneVec<i16, N> {
        self.abs().leading_zeros().cast_sign()
    }

    #[inline(always)]
    fn count_ones(self) -> LaneVec<i16, N> {
        let (lo, hi) = self.unpack();
        hi.count_ones().add(lo.cast_sign().count_ones())
    }
}

impl<const N: usize> BitCounts for LaneVec<u32, N> {
    type Count = LaneVec<u16, N>;

    #[inline(always)]
    fn leading_zeros(self) -> LaneVec<u16, N> {
        self.cast_sign().leading_zeros().cast_sign()
    }

    #[inline(always)]
    fn leading_sign_bits(self) -> LaneVec<u16, N> {
        self.cast_sign().leading_sign_bits().cast_sign()
    }

    #[inline(always)]
    fn count_ones(self) -> LaneVec<u16, N> {
        self.cast_sign().count_ones().cast_sign()
    }
}

/// Leading zero bits of each lane, as a 16-bit count vector.
#[inline(always)]
pub fn leading_zeros<V: BitCounts>(v: V) -> V::Count {
    v.leading_zeros()
}

/// Leading redundant sign bits of each lane, as a 16-bit count vector.
///
/// Computed as the leading zeros of each lane's magnitude, so `0` reports
/// the full lane width, `-1` one less, and `MIN` zero.
///
/// # Example
///
/// ```rust
/// use lanewise::{ops, Vec16s};
///
/// assert_eq!(ops::leading_sign_bits(Vec16s::splat(-1)), Vec16s::splat(15));
/// assert_eq!(ops::leading_sign_bits(Vec16s::splat(i16::MIN)), Vec16s::zero());
/// ```
#[inline(always)]
pub fn leading_sign_bits<V: BitCounts>(v: V) -> V::Count {
    v.leading_sign_bits()
}

/// Set bits of each lane, as a 16-bit count vector.
#[inline(always)]
pub fn count_ones<V: BitCounts>(v: V) -> V::Count {
    v.count_ones()
}
