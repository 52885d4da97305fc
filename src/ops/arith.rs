//! Carry-propagating add/sub engine
//!
//! Wrapping lane arithmetic plus the carry/borrow forms that make
//! multi-precision chains possible. 16-bit lanes map straight onto the
//! native primitives; 32-bit lanes chain the native carry through their
//! half pair, least significant half first; unsigned lanes reinterpret
//! onto the signed carrier and back. Saturating variants clamp from the
//! carry and sign information of the wrapping result.

use crate::native;
use crate::traits::LaneScalar;
use crate::vector::{LaneVec, Mask};

/// Wrapping lane-wise addition.
///
/// # Example
///
/// ```rust
/// use lanewise::{ops, Vec16u};
///
/// let r = ops::add(Vec16u::splat(0xFFFF), Vec16u::splat(2));
/// assert_eq!(r, Vec16u::splat(1));
/// ```
#[inline(always)]
pub fn add<T: LaneScalar, const N: usize>(
    a: LaneVec<T, N>,
    b: LaneVec<T, N>,
) -> LaneVec<T, N> {
    a.add(b)
}

/// Wrapping lane-wise subtraction.
#[inline(always)]
pub fn sub<T: LaneScalar, const N: usize>(
    a: LaneVec<T, N>,
    b: LaneVec<T, N>,
) -> LaneVec<T, N> {
    a.sub(b)
}

/// Wrapping lane-wise multiplication (low half of each product).
#[inline(always)]
pub fn mul<T: LaneScalar, const N: usize>(
    a: LaneVec<T, N>,
    b: LaneVec<T, N>,
) -> LaneVec<T, N> {
    a.mul(b)
}

/// Two's-complement negation of each lane.
#[inline(always)]
pub fn neg<T: LaneScalar, const N: usize>(a: LaneVec<T, N>) -> LaneVec<T, N> {
    a.neg()
}

/// Lane vectors supporting carry-reporting and carry-consuming add/sub.
///
/// Implemented for 16- and 32-bit lane vectors of both signednesses.
/// Carries and borrows are bit-pattern events (carry out of the top bit,
/// subtrahend pattern exceeding minuend pattern) and are independent of
/// the signed interpretation of the lanes.
pub trait CarryArith: Copy {
    /// Per-lane carry/borrow mask type.
    type Mask: Copy;

    /// `(self + rhs, carry out)` per lane.
    fn add_carry_out(self, rhs: Self) -> (Self, Self::Mask);
    /// `self + rhs + carry_in` per lane, discarding the carry out.
    fn add_with_carry(self, rhs: Self, carry_in: Self::Mask) -> Self;
    /// `(self + rhs + carry_in, carry out)` per lane.
    fn add_carry_in_out(self, rhs: Self, carry_in: Self::Mask) -> (Self, Self::Mask);
    /// `(self - rhs, borrow)` per lane.
    fn sub_borrow_out(self, rhs: Self) -> (Self, Self::Mask);
    /// `self - rhs - borrow_in` per lane, discarding the borrow out.
    fn sub_with_borrow(self, rhs: Self, borrow_in: Self::Mask) -> Self;
    /// `(self - rhs - borrow_in, borrow out)` per lane.
    fn sub_borrow_in_out(self, rhs: Self, borrow_in: Self::Mask) -> (Self, Self::Mask);
}

impl<const N: usize> CarryArith for LaneVec<i16, N> {
    type Mask = Mask<N>;

    #[inline(always)]
    fn add_carry_out(self, rhs: Self) -> (Self, Mask<N>) {
        native::addc(self, rhs)
    }

    #[inline(always)]
    fn add_with_carry(self, rhs: Self, carry_in: Mask<N>) -> Self {
        native::adde(self, rhs, carry_in).0
    }

    #[inline(always)]
    fn add_carry_in_out(self, rhs: Self, carry_in: Mask<N>) -> (Self, Mask<N>) {
        native::adde(self, rhs, carry_in)
    }

    #[inline(always)]
    fn sub_borrow_out(self, rhs: Self) -> (Self, Mask<N>) {
        native::subc(self, rhs)
    }

    #[inline(always)]
    fn sub_with_borrow(self, rhs: Self, borrow_in: Mask<N>) -> Self {
        native::sube(self, rhs, borrow_in).0
    }

    #[inline(always)]
    fn sub_borrow_in_out(self, rhs: Self, borrow_in: Mask<N>) -> (Self, Mask<N>) {
        native::sube(self, rhs, borrow_in)
    }
}

impl<const N: usize> CarryArith for LaneVec<u16, N> {
    type Mask = Mask<N>;

    #[inline(always)]
    fn add_carry_out(self, rhs: Self) -> (Self, Mask<N>) {
        let (sum, carry) = native::addc(self.cast_sign(), rhs.cast_sign());
        (sum.cast_sign(), carry)
    }

    #[inline(always)]
    fn add_with_carry(self, rhs: Self, carry_in: Mask<N>) -> Self {
        native::adde(self.cast_sign(), rhs.cast_sign(), carry_in)
            .0
            .cast_sign()
    }

    #[inline(always)]
    fn add_carry_in_out(self, rhs: Self, carry_in: Mask<N>) -> (Self, Mask<N>) {
        let (sum, carry) = native::adde(self.cast_sign(), rhs.cast_sign(), carry_in);
        (sum.cast_sign(), carry)
    }

    #[inline(always)]
    fn sub_borrow_out(self, rhs: Self) -> (Self, Mask<N>) {
        let (diff, borrow) = native::subc(self.cast_sign(), rhs.cast_sign());
        (diff.cast_sign(), borrow)
    }

    #[inline(always)]
    fn sub_with_borrow(self, rhs: Self, borrow_in: Mask<N>) -> Self {
        native::sube(self.cast_sign(), rhs.cast_sign(), borrow_in)
            .0
            .cast_sign()
    }

    #[inline(always)]
    fn sub_borrow_in_out(self, rhs: Self, borrow_in: Mask<N>) -> (Self, Mask<N>) {
        let (diff, borrow) = native::sube(self.cast_sign(), rhs.cast_sign(), borrow_in);
        (diff.cast_sign(), borrow)
    }
}

impl<const N: usize> CarryArith for LaneVec<i32, N> {
    type Mask = Mask<N>;

    #[inline(always)]
    fn add_carry_out(self, rhs: Self) -> (Self, Mask<N>) {
        let (al, ah) = self.unpack();
        let (bl, bh) = rhs.unpack();
        let (lo, carry) = native::addc(al.cast_sign(), bl.cast_sign());
        let (hi, carry) = native::adde(ah, bh, carry);
        (Self::pack(lo.cast_sign(), hi), carry)
    }

    #[inline(always)]
    fn add_with_carry(self, rhs: Self, carry_in: Mask<N>) -> Self {
        self.add_carry_in_out(rhs, carry_in).0
    }

    #[inline(always)]
    fn add_carry_in_out(self, rhs: Self, carry_in: Mask<N>) -> (Self, Mask<N>) {
        let (al, ah) = self.unpack();
        let (bl, bh) = rhs.unpack();
        let (lo, carry) = native::adde(al.cast_sign(), bl.cast_sign(), carry_in);
        let (hi, carry) = native::adde(ah, bh, carry);
        (Self::pack(lo.cast_sign(), hi), carry)
    }

    #[inline(always)]
    fn sub_borrow_out(self, rhs: Self) -> (Self, Mask<N>) {
        let (al, ah) = self.unpack();
        let (bl, bh) = rhs.unpack();
        let (lo, borrow) = native::subc(al.cast_sign(), bl.cast_sign());
        let (hi, borrow) = native::sube(ah, bh, borrow);
        (Self::pack(lo.cast_sign(), hi), borrow)
    }

    #[inline(always)]
    fn sub_with_borrow(self, rhs: Self, borrow_in: Mask<N>) -> Self {
        self.sub_borrow_in_out(rhs, borrow_in).0
    }

    #[inline(always)]
    fn sub_borrow_in_out(self, rhs: Self, borrow_in: Mask<N>) -> (Self, Mask<N>) {
        let (al, ah) = self.unpack();
        let (bl, bh) = rhs.unpack();
        let (lo, borrow) = native::sube(al.cast_sign(), bl.cast_sign(), borrow_in);
        let (hi, borrow) = native::sube(ah, bh, borrow);
        (Self::pack(lo.cast_sign(), hi), borrow)
    }
}

impl<const N: usize> CarryArith for LaneVec<u32, N> {
    type Mask = Mask<N>;

    #[inline(always)]
    fn add_carry_out(self, rhs: Self) -> (Self, Mask<N>) {
        let (sum, carry) = self.cast_sign().add_carry_out(rhs.cast_sign());
        (sum.cast_sign(), carry)
    }

    #[inline(always)]
    fn add_with_carry(self, rhs: Self, carry_in: Mask<N>) -> Self {
        self.cast_sign()
            .add_with_carry(rhs.cast_sign(), carry_in)
            .cast_sign()
    }

    #[inline(always)]
    fn add_carry_in_out(self, rhs: Self, carry_in: Mask<N>) -> (Self, Mask<N>) {
        let (sum, carry) = self.cast_sign().add_carry_in_out(rhs.cast_sign(), carry_in);
        (sum.cast_sign(), carry)
    }

    #[inline(always)]
    fn sub_borrow_out(self, rhs: Self) -> (Self, Mask<N>) {
        let (diff, borrow) = self.cast_sign().sub_borrow_out(rhs.cast_sign());
        (diff.cast_sign(), borrow)
    }

    #[inline(always)]
    fn sub_with_borrow(self, rhs: Self, borrow_in: Mask<N>) -> Self {
        self.cast_sign()
            .sub_with_borrow(rhs.cast_sign(), borrow_in)
            .cast_sign()
    }

    #[inline(always)]
    fn sub_borrow_in_out(self, rhs: Self, borrow_in: Mask<N>) -> (Self, Mask<N>) {
        let (diff, borrow) = self.cast_sign().sub_borrow_in_out(rhs.cast_sign(), borrow_in);
        (diff.cast_sign(), borrow)
    }
}

/// `(a + b, carry out)` per lane.
///
/// # Example
///
/// ```rust
/// use lanewise::{ops, Vec32u};
///
/// let a = Vec32u::splat(0x0000_FFFF);
/// let b = Vec32u::splat(0x0000_0001);
/// let (sum, carry) = ops::add_carry_out(a, b);
/// assert_eq!(sum, Vec32u::splat(0x0001_0000));
/// assert!(carry.none());
/// ```
#[inline(always)]
pub fn add_carry_out<V: CarryArith>(a: V, b: V) -> (V, V::Mask) {
    a.add_carry_out(b)
}

/// `a + b + carry_in` per lane, carry out discarded.
#[inline(always)]
pub fn add_with_carry<V: CarryArith>(a: V, b: V, carry_in: V::Mask) -> V {
    a.add_with_carry(b, carry_in)
}

/// `(a + b + carry_in, carry out)` per lane.
#[inline(always)]
pub fn add_carry_in_out<V: CarryArith>(a: V, b: V, carry_in: V::Mask) -> (V, V::Mask) {
    a.add_carry_in_out(b, carry_in)
}

/// `(a - b, borrow)` per lane.
#[inline(always)]
pub fn sub_borrow_out<V: CarryArith>(a: V, b: V) -> (V, V::Mask) {
    a.sub_borrow_out(b)
}

/// `a - b - borrow_in` per lane, borrow out discarded.
#[inline(always)]
pub fn sub_with_borrow<V: CarryArith>(a: V, b: V, borrow_in: V::Mask) -> V {
    a.sub_with_borrow(b, borrow_in)
}

/// `(a - b - borrow_in, borrow out)` per lane.
#[inline(always)]
pub fn sub_borrow_in_out<V: CarryArith>(a: V, b: V, borrow_in: V::Mask) -> (V, V::Mask) {
    a.sub_borrow_in_out(b, borrow_in)
}

/// Lane vectors with saturating add/sub.
///
/// Clamping is derived from the wrapping result: unsigned lanes select on
/// the carry/borrow mask, signed lanes detect overflow from operand and
/// result signs, and 8-bit lanes promote to the native width where the
/// exact sum is representable, clamp, and narrow back.
pub trait SaturatingArith: Copy {
    /// Saturating lane-wise addition.
    fn add_sat(self, rhs: Self) -> Self;
    /// Saturating lane-wise subtraction.
    fn sub_sat(self, rhs: Self) -> Self;
}

impl<const N: usize> SaturatingArith for LaneVec<u16, N> {
    #[inline(always)]
    fn add_sat(self, rhs: Self) -> Self {
        let (sum, carry) = self.add_carry_out(rhs);
        LaneVec::select(carry, LaneVec::splat(u16::MAX), sum)
    }

    #[inline(always)]
    fn sub_sat(self, rhs: Self) -> Self {
        let (diff, borrow) = self.sub_borrow_out(rhs);
        LaneVec::select(borrow, LaneVec::zero(), diff)
    }
}

impl<const N: usize> SaturatingArith for LaneVec<i16, N> {
    #[inline(always)]
    fn add_sat(self, rhs: Self) -> Self {
        let sum = self.add(rhs);
        // Overflow iff the operands share a sign the result lost.
        let overflow = self.xor(sum).and(rhs.xor(sum)).lt(LaneVec::zero());
        let limit = LaneVec::select(
            self.lt(LaneVec::zero()),
            LaneVec::splat(i16::MIN),
            LaneVec::splat(i16::MAX),
        );
        LaneVec::select(overflow, limit, sum)
    }

    #[inline(always)]
    fn sub_sat(self, rhs: Self) -> Self {
        let diff = self.sub(rhs);
        // Overflow iff the operands differ in sign and the result flipped
        // away from the minuend's.
        let overflow = self.xor(rhs).and(self.xor(diff)).lt(LaneVec::zero());
        let limit = LaneVec::select(
            self.lt(LaneVec::zero()),
            LaneVec::splat(i16::MIN),
            LaneVec::splat(i16::MAX),
        );
        LaneVec::select(overflow, limit, diff)
    }
}

impl<const N: usize> SaturatingArith for LaneVec<i8, N> {
    #[inline(always)]
    fn add_sat(self, rhs: Self) -> Self {
        clamp_narrow_signed(self.widen().add(rhs.widen()))
    }

    #[inline(always)]
    fn sub_sat(self, rhs: Self) -> Self {
        clamp_narrow_signed(self.widen().sub(rhs.widen()))
    }
}

impl<const N: usize> SaturatingArith for LaneVec<u8, N> {
    #[inline(always)]
    fn add_sat(self, rhs: Self) -> Self {
        clamp_narrow_unsigned(
            self.widen().cast_sign().add(rhs.widen().cast_sign()),
        )
    }

    #[inline(always)]
    fn sub_sat(self, rhs: Self) -> Self {
        clamp_narrow_unsigned(
            self.widen().cast_sign().sub(rhs.widen().cast_sign()),
        )
    }
}

#[inline(always)]
fn clamp_narrow_signed<const N: usize>(wide: LaneVec<i16, N>) -> LaneVec<i8, N> {
    let lo = LaneVec::splat(i8::MIN as i16);
    let hi = LaneVec::splat(i8::MAX as i16);
    let clamped = LaneVec::select(wide.lt(lo), lo, LaneVec::select(hi.lt(wide), hi, wide));
    clamped.narrow()
}

#[inline(always)]
fn clamp_narrow_unsigned<const N: usize>(wide: LaneVec<i16, N>) -> LaneVec<u8, N> {
    let lo = LaneVec::zero();
    let hi = LaneVec::splat(u8::MAX as i16);
    let clamped = LaneVec::select(wide.lt(lo), lo, LaneVec::select(hi.lt(wide), hi, wide));
    clamped.narrow().cast_sign()
}

/// Saturating lane-wise addition.
///
/// # Example
///
/// ```rust
/// use lanewise::{ops, Vec16s};
///
/// let r = ops::add_sat(Vec16s::splat(0x7FFF), Vec16s::splat(1));
/// assert_eq!(r, Vec16s::splat(0x7FFF));
/// ```
#[inline(always)]
pub fn add_sat<V: SaturatingArith>(a: V, b: V) -> V {
    a.add_sat(b)
}

/// Saturating lane-wise subtraction.
#[inline(always)]
pub fn sub_sat<V: SaturatingArith>(a: V, b: V) -> V {
    a.sub_sat(b)
}
