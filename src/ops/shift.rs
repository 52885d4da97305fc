//! Per-lane and double-width shifts
//!
//! Plain shifts take their amount per lane from a second vector. The
//! extended forms shift a 32-bit value held as a 16-bit half pair: the
//! pair is packed, shifted at full width, and unpacked again, so bits
//! crossing the half boundary land where a real 32-bit shift would put
//! them.

pub use crate::native::{shift_in_high, shift_in_low};
use crate::traits::LaneScalar;
use crate::vector::LaneVec;

/// Left shift each lane of `v` by the matching lane of `amounts`.
///
/// Amounts outside `0..BITS` are a caller contract violation.
#[inline(always)]
pub fn shl<T: LaneScalar, const N: usize>(
    v: LaneVec<T, N>,
    amounts: LaneVec<T, N>,
) -> LaneVec<T, N> {
    v.shl(amounts)
}

/// Arithmetic right shift of each lane of `v` by the matching lane of
/// `amounts`.
#[inline(always)]
pub fn shr_arithmetic<T: LaneScalar, const N: usize>(
    v: LaneVec<T, N>,
    amounts: LaneVec<T, N>,
) -> LaneVec<T, N> {
    v.shr_arithmetic(amounts)
}

/// Logical right shift of each lane of `v` by the matching lane of
/// `amounts`.
#[inline(always)]
pub fn shr_logical<T: LaneScalar, const N: usize>(
    v: LaneVec<T, N>,
    amounts: LaneVec<T, N>,
) -> LaneVec<T, N> {
    v.shr_logical(amounts)
}

/// Left shift a signed 32-bit half pair. Amounts may reach `0..32`.
///
/// # Example
///
/// ```rust
/// use lanewise::{ops, Vec16s, Vec16u};
///
/// let (lo, hi) = ops::shl_extended(
///     Vec16u::splat(0x8000),
///     Vec16s::splat(0),
///     Vec16s::splat(1),
/// );
/// assert_eq!(lo, Vec16u::splat(0));
/// assert_eq!(hi, Vec16s::splat(1));
/// ```
#[inline(always)]
pub fn shl_extended<const N: usize>(
    lo: LaneVec<u16, N>,
    hi: LaneVec<i16, N>,
    amounts: LaneVec<i16, N>,
) -> (LaneVec<u16, N>, LaneVec<i16, N>) {
    LaneVec::<i32, N>::pack(lo, hi).shl(amounts.widen()).unpack()
}

/// Arithmetic right shift of a signed 32-bit half pair.
#[inline(always)]
pub fn shr_arithmetic_extended<const N: usize>(
    lo: LaneVec<u16, N>,
    hi: LaneVec<i16, N>,
    amounts: LaneVec<i16, N>,
) -> (LaneVec<u16, N>, LaneVec<i16, N>) {
    LaneVec::<i32, N>::pack(lo, hi)
        .shr_arithmetic(amounts.widen())
        .unpack()
}

/// Logical right shift of a signed 32-bit half pair.
#[inline(always)]
pub fn shr_logical_extended<const N: usize>(
    lo: LaneVec<u16, N>,
    hi: LaneVec<i16, N>,
    amounts: LaneVec<i16, N>,
) -> (LaneVec<u16, N>, LaneVec<i16, N>) {
    LaneVec::<i32, N>::pack(lo, hi)
        .shr_logical(amounts.widen())
        .unpack()
}

/// Left shift an unsigned 32-bit half pair.
#[inline(always)]
pub fn shl_extended_unsigned<const N: usize>(
    lo: LaneVec<u16, N>,
    hi: LaneVec<u16, N>,
    amounts: LaneVec<u16, N>,
) -> (LaneVec<u16, N>, LaneVec<u16, N>) {
    LaneVec::<u32, N>::pack(lo, hi).shl(amounts.widen()).unpack()
}

/// Arithmetic right shift of an unsigned 32-bit half pair.
///
/// The pair is read as a signed value for the shift, matching the
/// sign-filling behavior of the signed form on the same bit pattern.
#[inline(always)]
pub fn shr_arithmetic_extended_unsigned<const N: usize>(
    lo: LaneVec<u16, N>,
    hi: LaneVec<u16, N>,
    amounts: LaneVec<u16, N>,
) -> (LaneVec<u16, N>, LaneVec<u16, N>) {
    LaneVec::<u32, N>::pack(lo, hi)
        .shr_arithmetic(amounts.widen())
        .unpack()
}

/// Logical right shift of an unsigned 32-bit half pair.
#[inline(always)]
pub fn shr_logical_extended_unsigned<const N: usize>(
    lo: LaneVec<u16, N>,
    hi: LaneVec<u16, N>,
    amounts: LaneVec<u16, N>,
) -> (LaneVec<u16, N>, LaneVec<u16, N>) {
    LaneVec::<u32, N>::pack(lo, hi)
        .shr_logical(amounts.widen())
        .unpack()
}
