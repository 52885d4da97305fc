//! Native 16-bit lane primitives
//!
//! The boundary between the emulation engine and the underlying lane unit.
//! Everything wider or narrower than 16 bits is synthesized on top of the
//! operations in this module: carry/borrow-reporting add and sub, the four
//! signedness quadrants of the 8-bit-half partial products used by the
//! widening multiply, and single-bit shift-ins.
//!
//! All primitives here work on 16-bit lane *bit patterns*; the signed
//! `i16` form is the canonical carrier and unsigned callers cast in and
//! out with [`cast_sign`](crate::vector::LaneVec::cast_sign).

use crate::vector::{LaneVec, Mask};

/// Add with carry-out: `(a + b, carry out of bit 15)` per lane.
///
/// Carry is the bit-pattern carry, independent of signed interpretation.
///
/// # Example
///
/// ```rust
/// use lanewise::{native, Vec16s};
///
/// let a = Vec16s::splat(-1); // pattern 0xFFFF
/// let (sum, carry) = native::addc(a, Vec16s::splat(1));
/// assert_eq!(sum, Vec16s::splat(0));
/// assert!(carry.all());
/// ```
#[inline(always)]
pub fn addc<const N: usize>(
    a: LaneVec<i16, N>,
    b: LaneVec<i16, N>,
) -> (LaneVec<i16, N>, Mask<N>) {
    let mut carry = [false; N];
    let sum = LaneVec::from_fn(|i| {
        let (s, c) = (a.0[i] as u16).overflowing_add(b.0[i] as u16);
        carry[i] = c;
        s as i16
    });
    (sum, Mask::from_array(carry))
}

/// Add with carry-in and carry-out: `(a + b + carry_in, carry out)` per lane.
#[inline(always)]
pub fn adde<const N: usize>(
    a: LaneVec<i16, N>,
    b: LaneVec<i16, N>,
    carry_in: Mask<N>,
) -> (LaneVec<i16, N>, Mask<N>) {
    let mut carry = [false; N];
    let sum = LaneVec::from_fn(|i| {
        let s = (a.0[i] as u16 as u32)
            + (b.0[i] as u16 as u32)
            + (carry_in.0[i] as u32);
        carry[i] = s > 0xFFFF;
        s as u16 as i16
    });
    (sum, Mask::from_array(carry))
}

/// Subtract with borrow-out: `(a - b, borrow)` per lane.
///
/// Borrow is set when the subtrahend's bit pattern exceeds the minuend's.
#[inline(always)]
pub fn subc<const N: usize>(
    a: LaneVec<i16, N>,
    b: LaneVec<i16, N>,
) -> (LaneVec<i16, N>, Mask<N>) {
    let mut borrow = [false; N];
    let diff = LaneVec::from_fn(|i| {
        borrow[i] = (b.0[i] as u16) > (a.0[i] as u16);
        a.0[i].wrapping_sub(b.0[i])
    });
    (diff, Mask::from_array(borrow))
}

/// Subtract with borrow-in and borrow-out: `(a - b - borrow_in, borrow)`.
#[inline(always)]
pub fn sube<const N: usize>(
    a: LaneVec<i16, N>,
    b: LaneVec<i16, N>,
    borrow_in: Mask<N>,
) -> (LaneVec<i16, N>, Mask<N>) {
    let mut borrow = [false; N];
    let diff = LaneVec::from_fn(|i| {
        let need = (b.0[i] as u16 as u32) + (borrow_in.0[i] as u32);
        borrow[i] = need > (a.0[i] as u16 as u32);
        a.0[i]
            .wrapping_sub(b.0[i])
            .wrapping_sub(borrow_in.0[i] as i16)
    });
    (diff, Mask::from_array(borrow))
}

// Quadrant multiplies. A 16-bit lane splits into an unsigned low byte and
// a high byte read as signed or unsigned; every quadrant product fits a
// 16-bit result exactly. Operands are raw bit patterns (`u16` lanes);
// signed-reading quadrants reinterpret internally.

#[inline(always)]
fn lo_u(x: u16) -> u16 {
    x & 0x00FF
}

#[inline(always)]
fn hi_u(x: u16) -> u16 {
    x >> 8
}

#[inline(always)]
fn hi_s(x: u16) -> i16 {
    (x as i16) >> 8
}

/// Low byte of `a` (unsigned) times low byte of `b` (unsigned).
#[inline(always)]
pub fn mul_ll_uu<const N: usize>(
    a: LaneVec<u16, N>,
    b: LaneVec<u16, N>,
) -> LaneVec<u16, N> {
    LaneVec::from_fn(|i| lo_u(a.0[i]).wrapping_mul(lo_u(b.0[i])))
}

/// Low byte of `a` (unsigned) times high byte of `b` (unsigned).
#[inline(always)]
pub fn mul_lh_uu<const N: usize>(
    a: LaneVec<u16, N>,
    b: LaneVec<u16, N>,
) -> LaneVec<u16, N> {
    LaneVec::from_fn(|i| lo_u(a.0[i]).wrapping_mul(hi_u(b.0[i])))
}

/// High byte of `a` (unsigned) times low byte of `b` (unsigned).
#[inline(always)]
pub fn mul_hl_uu<const N: usize>(
    a: LaneVec<u16, N>,
    b: LaneVec<u16, N>,
) -> LaneVec<u16, N> {
    LaneVec::from_fn(|i| hi_u(a.0[i]).wrapping_mul(lo_u(b.0[i])))
}

/// High byte of `a` (unsigned) times high byte of `b` (unsigned).
#[inline(always)]
pub fn mul_hh_uu<const N: usize>(
    a: LaneVec<u16, N>,
    b: LaneVec<u16, N>,
) -> LaneVec<u16, N> {
    LaneVec::from_fn(|i| hi_u(a.0[i]).wrapping_mul(hi_u(b.0[i])))
}

/// Low byte of `a` (unsigned) times high byte of `b` (signed).
#[inline(always)]
pub fn mul_lh_us<const N: usize>(
    a: LaneVec<u16, N>,
    b: LaneVec<u16, N>,
) -> LaneVec<i16, N> {
    LaneVec::from_fn(|i| (lo_u(a.0[i]) as i16).wrapping_mul(hi_s(b.0[i])))
}

/// High byte of `a` (signed) times low byte of `b` (unsigned).
#[inline(always)]
pub fn mul_hl_su<const N: usize>(
    a: LaneVec<u16, N>,
    b: LaneVec<u16, N>,
) -> LaneVec<i16, N> {
    LaneVec::from_fn(|i| hi_s(a.0[i]).wrapping_mul(lo_u(b.0[i]) as i16))
}

/// High byte of `a` (unsigned) times high byte of `b` (signed).
#[inline(always)]
pub fn mul_hh_us<const N: usize>(
    a: LaneVec<u16, N>,
    b: LaneVec<u16, N>,
) -> LaneVec<i16, N> {
    LaneVec::from_fn(|i| (hi_u(a.0[i]) as i16).wrapping_mul(hi_s(b.0[i])))
}

/// High byte of `a` (signed) times high byte of `b` (signed).
#[inline(always)]
pub fn mul_hh_ss<const N: usize>(
    a: LaneVec<u16, N>,
    b: LaneVec<u16, N>,
) -> LaneVec<i16, N> {
    LaneVec::from_fn(|i| hi_s(a.0[i]).wrapping_mul(hi_s(b.0[i])))
}

/// Shift each lane left one bit, feeding `bit` into the LSB.
///
/// Returns the shifted vector and the displaced bit 15 as a mask.
#[inline(always)]
pub fn shift_in_low<const N: usize>(
    v: LaneVec<i16, N>,
    bit: Mask<N>,
) -> (LaneVec<i16, N>, Mask<N>) {
    let mut out = [false; N];
    let shifted = LaneVec::from_fn(|i| {
        let x = v.0[i] as u16;
        out[i] = x & 0x8000 != 0;
        ((x << 1) | bit.0[i] as u16) as i16
    });
    (shifted, Mask::from_array(out))
}

/// Shift each lane right one bit, feeding `bit` into the MSB.
///
/// Returns the shifted vector and the displaced bit 0 as a mask.
#[inline(always)]
pub fn shift_in_high<const N: usize>(
    v: LaneVec<i16, N>,
    bit: Mask<N>,
) -> (LaneVec<i16, N>, Mask<N>) {
    let mut out = [false; N];
    let shifted = LaneVec::from_fn(|i| {
        let x = v.0[i] as u16;
        out[i] = x & 0x0001 != 0;
        ((x >> 1) | ((bit.0[i] as u16) << 15)) as i16
    });
    (shifted, Mask::from_array(out))
}
