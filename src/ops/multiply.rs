//! Widening multiply and multiply-accumulate engine
//!
//! A 16x16 product is assembled from the four 8-bit-half quadrant products
//! of the operands. Writing a lane as `a = a1 * 2^8 + a0` (unsigned low
//! byte `a0`, high byte `a1` read per the operand's signedness):
//!
//! ```text
//! a * b = a1*b1 * 2^16  +  (a1*b0 + a0*b1) * 2^8  +  a0*b0
//! ```
//!
//! The three weights map onto the accumulate steps below, which maintain a
//! 32-bit running value as an `(hi, lo)` half pair and move the carry from
//! the low half into the high half. The double-width result of
//! [`widening_mul`] is exact for every input and signedness combination;
//! [`widening_mul_acc`] adds the product into an existing pair mod 2^32.

use crate::native;
use crate::vector::LaneVec;

/// Add `addend` (zero-extended) into an `(hi, lo)` pair at weight `2^0`.
#[inline(always)]
pub fn accumulate_low<const N: usize>(
    hi: LaneVec<i16, N>,
    lo: LaneVec<u16, N>,
    addend: LaneVec<u16, N>,
) -> (LaneVec<i16, N>, LaneVec<u16, N>) {
    let (lo, carry) = native::addc(lo.cast_sign(), addend.cast_sign());
    let (hi, _) = native::adde(hi, LaneVec::zero(), carry);
    (hi, lo.cast_sign())
}

/// Add `addend` (sign-extended) into an `(hi, lo)` pair at weight `2^0`.
#[inline(always)]
pub fn accumulate_low_signed<const N: usize>(
    hi: LaneVec<i16, N>,
    lo: LaneVec<u16, N>,
    addend: LaneVec<i16, N>,
) -> (LaneVec<i16, N>, LaneVec<u16, N>) {
    let (lo, carry) = native::addc(lo.cast_sign(), addend);
    let extension = addend.shr_arithmetic(LaneVec::splat(15));
    let (hi, _) = native::adde(hi, extension, carry);
    (hi, lo.cast_sign())
}

/// Add `addend` (sign-extended) into an `(hi, lo)` pair at weight `2^8`.
///
/// The low byte of `addend` lands in the high byte of `lo` (with carry
/// into `hi`); the arithmetically shifted top bits land in `hi`.
#[inline(always)]
pub fn accumulate_mid<const N: usize>(
    hi: LaneVec<i16, N>,
    lo: LaneVec<u16, N>,
    addend: LaneVec<i16, N>,
) -> (LaneVec<i16, N>, LaneVec<u16, N>) {
    let (lo, carry) = native::addc(lo.cast_sign(), addend.shl(LaneVec::splat(8)));
    let top = addend.shr_arithmetic(LaneVec::splat(8));
    let (hi, _) = native::adde(hi, top, carry);
    (hi, lo.cast_sign())
}

/// Add `addend` (zero-extended) into an `(hi, lo)` pair at weight `2^8`.
#[inline(always)]
pub fn accumulate_mid_unsigned<const N: usize>(
    hi: LaneVec<i16, N>,
    lo: LaneVec<u16, N>,
    addend: LaneVec<u16, N>,
) -> (LaneVec<i16, N>, LaneVec<u16, N>) {
    let shifted = addend.shl(LaneVec::splat(8)).cast_sign();
    let (lo, carry) = native::addc(lo.cast_sign(), shifted);
    let top = addend.shr_logical(LaneVec::splat(8)).cast_sign();
    let (hi, _) = native::adde(hi, top, carry);
    (hi, lo.cast_sign())
}

/// Add `addend` into the high half of an `(hi, lo)` pair (weight `2^16`).
#[inline(always)]
pub fn accumulate_high<const N: usize>(
    hi: LaneVec<i16, N>,
    addend: LaneVec<i16, N>,
) -> LaneVec<i16, N> {
    hi.add(addend)
}

/// Lane vectors supporting exact double-width multiplication.
///
/// The `Rhs` parameter carries the signedness combination: signed x
/// signed, unsigned x unsigned, and the mixed forms each resolve to their
/// own quadrant recipe. `signed x unsigned` canonicalises by commuting to
/// `unsigned x signed`.
pub trait WideningMul<Rhs = Self>: Copy {
    /// High half of the double-width product.
    type High: Copy;
    /// Low half of the double-width product (always an unsigned pattern).
    type Low: Copy;

    /// Exact product of each lane pair as `(high, low)` halves.
    fn widening_mul(self, rhs: Rhs) -> (Self::High, Self::Low);

    /// `(hi, lo) + self * rhs` per lane, mod `2^32`.
    fn widening_mul_acc(
        self,
        rhs: Rhs,
        hi: Self::High,
        lo: Self::Low,
    ) -> (Self::High, Self::Low);
}

impl<const N: usize> WideningMul for LaneVec<i16, N> {
    type High = LaneVec<i16, N>;
    type Low = LaneVec<u16, N>;

    #[inline(always)]
    fn widening_mul(self, rhs: Self) -> (Self, LaneVec<u16, N>) {
        let a = self.cast_sign();
        let b = rhs.cast_sign();
        let lo = native::mul_ll_uu(a, b);
        let hi = native::mul_hh_ss(a, b);
        let (hi, lo) = accumulate_mid(hi, lo, native::mul_hl_su(a, b));
        accumulate_mid(hi, lo, native::mul_lh_us(a, b))
    }

    #[inline(always)]
    fn widening_mul_acc(
        self,
        rhs: Self,
        hi: Self,
        lo: LaneVec<u16, N>,
    ) -> (Self, LaneVec<u16, N>) {
        let a = self.cast_sign();
        let b = rhs.cast_sign();
        let (hi, lo) = accumulate_low(hi, lo, native::mul_ll_uu(a, b));
        let hi = accumulate_high(hi, native::mul_hh_ss(a, b));
        let (hi, lo) = accumulate_mid(hi, lo, native::mul_hl_su(a, b));
        accumulate_mid(hi, lo, native::mul_lh_us(a, b))
    }
}

impl<const N: usize> WideningMul for LaneVec<u16, N> {
    type High = LaneVec<u16, N>;
    type Low = LaneVec<u16, N>;

    #[inline(always)]
    fn widening_mul(self, rhs: Self) -> (Self, Self) {
        let lo = native::mul_ll_uu(self, rhs);
        let hi = native::mul_hh_uu(self, rhs).cast_sign();
        let (hi, lo) = accumulate_mid_unsigned(hi, lo, native::mul_hl_uu(self, rhs));
        let (hi, lo) = accumulate_mid_unsigned(hi, lo, native::mul_lh_uu(self, rhs));
        (hi.cast_sign(), lo)
    }

    #[inline(always)]
    fn widening_mul_acc(self, rhs: Self, hi: Self, lo: Self) -> (Self, Self) {
        let (hi, lo) = accumulate_low(hi.cast_sign(), lo, native::mul_ll_uu(self, rhs));
        let hi = accumulate_high(hi, native::mul_hh_uu(self, rhs).cast_sign());
        let (hi, lo) = accumulate_mid_unsigned(hi, lo, native::mul_hl_uu(self, rhs));
        let (hi, lo) = accumulate_mid_unsigned(hi, lo, native::mul_lh_uu(self, rhs));
        (hi.cast_sign(), lo)
    }
}

impl<const N: usize> WideningMul<LaneVec<i16, N>> for LaneVec<u16, N> {
    type High = LaneVec<i16, N>;
    type Low = LaneVec<u16, N>;

    #[inline(always)]
    fn widening_mul(self, rhs: LaneVec<i16, N>) -> (LaneVec<i16, N>, LaneVec<u16, N>) {
        let b = rhs.cast_sign();
        let lo = native::mul_ll_uu(self, b);
        let hi = native::mul_hh_us(self, b);
        let (hi, lo) = accumulate_mid_unsigned(hi, lo, native::mul_hl_uu(self, b));
        accumulate_mid(hi, lo, native::mul_lh_us(self, b))
    }

    #[inline(always)]
    fn widening_mul_acc(
        self,
        rhs: LaneVec<i16, N>,
        hi: LaneVec<i16, N>,
        lo: LaneVec<u16, N>,
    ) -> (LaneVec<i16, N>, LaneVec<u16, N>) {
        let b = rhs.cast_sign();
        let (hi, lo) = accumulate_low(hi, lo, native::mul_ll_uu(self, b));
        let hi = accumulate_high(hi, native::mul_hh_us(self, b));
        let (hi, lo) = accumulate_mid_unsigned(hi, lo, native::mul_hl_uu(self, b));
        accumulate_mid(hi, lo, native::mul_lh_us(self, b))
    }
}

impl<const N: usize> WideningMul<LaneVec<u16, N>> for LaneVec<i16, N> {
    type High = LaneVec<i16, N>;
    type Low = LaneVec<u16, N>;

    #[inline(always)]
    fn widening_mul(self, rhs: LaneVec<u16, N>) -> (LaneVec<i16, N>, LaneVec<u16, N>) {
        rhs.widening_mul(self)
    }

    #[inline(always)]
    fn widening_mul_acc(
        self,
        rhs: LaneVec<u16, N>,
        hi: LaneVec<i16, N>,
        lo: LaneVec<u16, N>,
    ) -> (LaneVec<i16, N>, LaneVec<u16, N>) {
        rhs.widening_mul_acc(self, hi, lo)
    }
}

/// Exact double-width product of each lane pair, as `(high, low)` halves.
///
/// # Example
///
/// ```rust
/// use lanewise::{ops, Vec16s, Vec16u};
///
/// let (hi, lo) = ops::widening_mul(Vec16s::splat(-1), Vec16s::splat(-1));
/// assert_eq!(hi, Vec16s::splat(0));
/// assert_eq!(lo, Vec16u::splat(1));
/// ```
#[inline(always)]
pub fn widening_mul<A: WideningMul<B>, B>(a: A, b: B) -> (A::High, A::Low) {
    a.widening_mul(b)
}

/// `(hi, lo) + a * b` per lane, mod `2^32`, as a pure state transition.
#[inline(always)]
pub fn widening_mul_acc<A: WideningMul<B>, B>(
    a: A,
    b: B,
    hi: A::High,
    lo: A::Low,
) -> (A::High, A::Low) {
    a.widening_mul_acc(b, hi, lo)
}

/// In-place multiply-accumulate: `(hi, lo) += a * b` mod `2^32`.
#[inline(always)]
pub fn mac<A: WideningMul<B>, B>(hi: &mut A::High, lo: &mut A::Low, a: A, b: B) {
    let (h, l) = a.widening_mul_acc(b, *hi, *lo);
    *hi = h;
    *lo = l;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vec16s, Vec16u};

    fn reconstruct_signed(hi: Vec16s, lo: Vec16u, lane: usize) -> i32 {
        ((hi.extract(lane) as i32) << 16) | lo.extract(lane) as i32 & 0xFFFF
    }

    fn reconstruct_unsigned(hi: Vec16u, lo: Vec16u, lane: usize) -> u32 {
        ((hi.extract(lane) as u32) << 16) | lo.extract(lane) as u32
    }

    #[test]
    fn test_widening_mul_signed_corners() {
        for &(a, b) in &[
            (0i16, 0i16),
            (1, -1),
            (-1, -1),
            (i16::MAX, i16::MAX),
            (i16::MIN, i16::MIN),
            (i16::MIN, i16::MAX),
            (0x0101, 0x0101),
            (-257, 300),
        ] {
            let (hi, lo) = widening_mul(Vec16s::splat(a), Vec16s::splat(b));
            assert_eq!(
                reconstruct_signed(hi, lo, 0),
                a as i32 * b as i32,
                "{a} * {b}"
            );
        }
    }

    #[test]
    fn test_widening_mul_unsigned_corners() {
        for &(a, b) in &[
            (0u16, 0u16),
            (0xFFFF, 0xFFFF),
            (0xFFFF, 1),
            (0x0100, 0x0100),
            (0x8000, 2),
            (1234, 56789),
        ] {
            let (hi, lo) = widening_mul(Vec16u::splat(a), Vec16u::splat(b));
            assert_eq!(
                reconstruct_unsigned(hi, lo, 0),
                a as u32 * b as u32,
                "{a} * {b}"
            );
        }
    }

    #[test]
    fn test_widening_mul_mixed() {
        for &(a, b) in &[
            (0xFFFFu16, -1i16),
            (0x8000, -2),
            (255, -32768),
            (40000, 100),
            (1, i16::MIN),
        ] {
            let want = a as i64 * b as i64;
            let (hi, lo) = widening_mul(Vec16u::splat(a), Vec16s::splat(b));
            assert_eq!(reconstruct_signed(hi, lo, 0) as i64, want, "{a} * {b}");

            // The commuted form resolves to the same recipe.
            let (hi, lo) = widening_mul(Vec16s::splat(b), Vec16u::splat(a));
            assert_eq!(reconstruct_signed(hi, lo, 0) as i64, want, "{b} * {a}");
        }
    }

    #[test]
    fn test_widening_mul_acc_adds_mod_2_32() {
        let hi = Vec16s::splat(0);
        let lo = Vec16u::splat(0xFFFF);
        // 0x0000FFFF + 2 * 1 carries into the high half.
        let (hi, lo) = widening_mul_acc(Vec16s::splat(2), Vec16s::splat(1), hi, lo);
        assert_eq!(hi, Vec16s::splat(1));
        assert_eq!(lo, Vec16u::splat(1));
    }

    #[test]
    fn test_mac_in_place() {
        let mut hi = Vec16s::splat(0);
        let mut lo = Vec16u::splat(0);
        mac(&mut hi, &mut lo, Vec16s::splat(-3), Vec16s::splat(100));
        assert_eq!(reconstruct_signed(hi, lo, 0), -300);
        mac(&mut hi, &mut lo, Vec16s::splat(3), Vec16s::splat(100));
        assert_eq!(reconstruct_signed(hi, lo, 0), 0);
    }

    #[test]
    fn test_accumulate_steps_weights() {
        let hi = Vec16s::splat(0);
        let lo = Vec16u::splat(0);
        let (hi, lo) = accumulate_low(hi, lo, Vec16u::splat(1));
        assert_eq!(reconstruct_signed(hi, lo, 0), 1);
        let (hi, lo) = accumulate_mid(hi, lo, Vec16s::splat(1));
        assert_eq!(reconstruct_signed(hi, lo, 0), 1 + (1 << 8));
        let hi = accumulate_high(hi, Vec16s::splat(1));
        assert_eq!(reconstruct_signed(hi, lo, 0), 1 + (1 << 8) + (1 << 16));
    }

    #[test]
    fn test_accumulate_low_signed_extends() {
        let hi = Vec16s::splat(0);
        let lo = Vec16u::splat(0);
        let (hi, lo) = accumulate_low_signed(hi, lo, Vec16s::splat(-1));
        assert_eq!(reconstruct_signed(hi, lo, 0), -1);
    }
}
