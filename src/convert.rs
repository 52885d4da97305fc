//! Width and signedness conversions
//!
//! Lane-wise widening/narrowing, same-width signedness reinterpretation,
//! and the 32-bit half-pair pack/unpack. The half pair is the backbone of
//! every double-width operation: a 32-bit lane is `(lo, hi)` with an
//! unsigned low half carrying bits 0..16 and a high half (signed or
//! unsigned, matching the 32-bit type) carrying bits 16..32, paired at the
//! same lane index. `pack(unpack(v)) == v` for all inputs.

use crate::traits::{NarrowScalar, SignCastScalar, WidenScalar};
use crate::vector::LaneVec;

impl<T: WidenScalar, const N: usize> LaneVec<T, N> {
    /// Widen every lane to double width, preserving the value.
    ///
    /// Sign-extends signed lanes and zero-extends unsigned ones.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lanewise::{Vec8s, Vec16s};
    ///
    /// let v = Vec8s::splat(-3);
    /// assert_eq!(v.widen(), Vec16s::splat(-3));
    /// ```
    #[inline(always)]
    pub fn widen(self) -> LaneVec<T::Wide, N> {
        LaneVec::from_fn(|i| self.0[i].widen())
    }
}

impl<T: NarrowScalar, const N: usize> LaneVec<T, N> {
    /// Truncate every lane to half width (the low bits of the pattern).
    #[inline(always)]
    pub fn narrow(self) -> LaneVec<T::Half, N> {
        LaneVec::from_fn(|i| self.0[i].narrow())
    }
}

impl<T: SignCastScalar, const N: usize> LaneVec<T, N> {
    /// Reinterpret every lane under the opposite signedness.
    ///
    /// A bit cast: `Vec16s::splat(-1).cast_sign()` is `Vec16u::splat(0xFFFF)`.
    #[inline(always)]
    pub fn cast_sign(self) -> LaneVec<T::Flipped, N> {
        LaneVec::from_fn(|i| self.0[i].cast_sign())
    }
}

impl<const N: usize> LaneVec<i32, N> {
    /// Assemble 32-bit lanes from a low/high half pair.
    #[inline(always)]
    pub fn pack(lo: LaneVec<u16, N>, hi: LaneVec<i16, N>) -> Self {
        LaneVec::from_fn(|i| {
            (((hi.0[i] as u16 as u32) << 16) | lo.0[i] as u32) as i32
        })
    }

    /// Split each 32-bit lane into its low/high half pair.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lanewise::{Vec16s, Vec16u, Vec32s};
    ///
    /// let v = Vec32s::splat(-2); // 0xFFFF_FFFE
    /// let (lo, hi) = v.unpack();
    /// assert_eq!(lo, Vec16u::splat(0xFFFE));
    /// assert_eq!(hi, Vec16s::splat(-1));
    /// assert_eq!(Vec32s::pack(lo, hi), v);
    /// ```
    #[inline(always)]
    pub fn unpack(self) -> (LaneVec<u16, N>, LaneVec<i16, N>) {
        let lo = LaneVec::from_fn(|i| self.0[i] as u16);
        let hi = LaneVec::from_fn(|i| ((self.0[i] as u32) >> 16) as i16);
        (lo, hi)
    }
}

impl<const N: usize> LaneVec<u32, N> {
    /// Assemble 32-bit lanes from a low/high half pair.
    #[inline(always)]
    pub fn pack(lo: LaneVec<u16, N>, hi: LaneVec<u16, N>) -> Self {
        LaneVec::from_fn(|i| ((hi.0[i] as u32) << 16) | lo.0[i] as u32)
    }

    /// Split each 32-bit lane into its low/high half pair.
    #[inline(always)]
    pub fn unpack(self) -> (LaneVec<u16, N>, LaneVec<u16, N>) {
        let lo = LaneVec::from_fn(|i| self.0[i] as u16);
        let hi = LaneVec::from_fn(|i| (self.0[i] >> 16) as u16);
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use crate::vector::{Vec16s, Vec16u, Vec32s, Vec32u, Vec8u, LANES};

    #[test]
    fn test_pack_unpack_round_trip_signed() {
        let v = Vec32s::from_fn(|i| (i as i32).wrapping_mul(-0x0101_0101));
        let (lo, hi) = v.unpack();
        assert_eq!(Vec32s::pack(lo, hi), v);
    }

    #[test]
    fn test_pack_unpack_round_trip_unsigned() {
        let v = Vec32u::from_fn(|i| (i as u32).wrapping_mul(0x8765_4321));
        let (lo, hi) = v.unpack();
        assert_eq!(Vec32u::pack(lo, hi), v);
    }

    #[test]
    fn test_widen_then_unpack_sign_splat() {
        let v = Vec16s::splat(-1);
        let (lo, hi) = v.widen().unpack();
        assert_eq!(lo, Vec16u::splat(0xFFFF));
        assert_eq!(hi, Vec16s::splat(-1));
    }

    #[test]
    fn test_widen_unsigned_zero_extends() {
        let v = Vec8u::splat(0xFF);
        assert_eq!(v.widen(), Vec16u::splat(0x00FF));
    }

    #[test]
    fn test_narrow_truncates_per_lane() {
        let v = Vec32s::from_fn(|i| 0x0001_0000 + i as i32);
        let n = v.narrow();
        for i in 0..LANES {
            assert_eq!(n.extract(i), i as i16);
        }
    }

    #[test]
    fn test_cast_sign_is_bit_cast() {
        let v = Vec16s::splat(i16::MIN);
        assert_eq!(v.cast_sign(), Vec16u::splat(0x8000));
        assert_eq!(v.cast_sign().cast_sign(), v);
    }
}
