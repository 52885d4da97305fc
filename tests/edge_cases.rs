//! Boundary-value tests for the emulation engine
//!
//! Fixed scenarios at the edges of each lane type: carry chains across
//! the half boundary, saturation limits, extreme products, and the
//! degenerate shift amounts.

use lanewise::{ops, Vec16s, Vec16u, Vec32s, Vec32u, Vec8s, Vec8u, VecBool};

use test_utils::{pair_to_i32, pair_to_u32};

#[test]
fn test_low_half_overflow_carries_into_high_half() {
    // 0x0000FFFF + 0x00000001: the low half overflows, the high half
    // absorbs the carry, and no carry leaves the 32-bit lane.
    let a = Vec32u::splat(0x0000_FFFF);
    let b = Vec32u::splat(0x0000_0001);
    let (sum, carry) = ops::add_carry_out(a, b);
    assert_eq!(sum, Vec32u::splat(0x0001_0000));
    assert!(carry.none());
}

#[test]
fn test_full_width_carry_out() {
    let (sum, carry) = ops::add_carry_out(Vec32u::splat(u32::MAX), Vec32u::splat(u32::MAX));
    assert_eq!(sum, Vec32u::splat(u32::MAX - 1));
    assert!(carry.all());
}

#[test]
fn test_carry_in_ripples_through_both_halves() {
    let (sum, carry) = ops::add_carry_in_out(
        Vec32u::splat(u32::MAX),
        Vec32u::splat(0),
        VecBool::splat(true),
    );
    assert_eq!(sum, Vec32u::splat(0));
    assert!(carry.all());
}

#[test]
fn test_borrow_crosses_half_boundary() {
    let (diff, borrow) = ops::sub_borrow_out(Vec32u::splat(0x0001_0000), Vec32u::splat(1));
    assert_eq!(diff, Vec32u::splat(0x0000_FFFF));
    assert!(borrow.none());
}

#[test]
fn test_borrow_out_of_zero() {
    let (diff, borrow) = ops::sub_borrow_in_out(
        Vec32u::splat(0),
        Vec32u::splat(0),
        VecBool::splat(true),
    );
    assert_eq!(diff, Vec32u::splat(u32::MAX));
    assert!(borrow.all());
}

#[test]
fn test_saturation_boundaries_16() {
    assert_eq!(
        ops::add_sat(Vec16u::splat(0xFFFF), Vec16u::splat(1)),
        Vec16u::splat(0xFFFF)
    );
    assert_eq!(
        ops::sub_sat(Vec16u::splat(0), Vec16u::splat(1)),
        Vec16u::splat(0)
    );
    assert_eq!(
        ops::add_sat(Vec16s::splat(i16::MAX), Vec16s::splat(1)),
        Vec16s::splat(i16::MAX)
    );
    assert_eq!(
        ops::add_sat(Vec16s::splat(i16::MIN), Vec16s::splat(-1)),
        Vec16s::splat(i16::MIN)
    );
    // MIN - MIN must not saturate.
    assert_eq!(
        ops::sub_sat(Vec16s::splat(i16::MIN), Vec16s::splat(i16::MIN)),
        Vec16s::splat(0)
    );
}

#[test]
fn test_saturation_boundaries_8() {
    assert_eq!(
        ops::add_sat(Vec8s::splat(i8::MAX), Vec8s::splat(i8::MAX)),
        Vec8s::splat(i8::MAX)
    );
    assert_eq!(
        ops::sub_sat(Vec8s::splat(i8::MIN), Vec8s::splat(i8::MAX)),
        Vec8s::splat(i8::MIN)
    );
    assert_eq!(
        ops::add_sat(Vec8u::splat(u8::MAX), Vec8u::splat(u8::MAX)),
        Vec8u::splat(u8::MAX)
    );
}

#[test]
fn test_extreme_products() {
    let (hi, lo) = ops::widening_mul(Vec16s::splat(i16::MIN), Vec16s::splat(i16::MIN));
    assert_eq!(pair_to_i32(hi.extract(0), lo.extract(0)), 0x4000_0000);

    let (hi, lo) = ops::widening_mul(Vec16s::splat(i16::MIN), Vec16s::splat(i16::MAX));
    assert_eq!(pair_to_i32(hi.extract(0), lo.extract(0)), -0x3FFF_8000);

    let (hi, lo) = ops::widening_mul(Vec16u::splat(0xFFFF), Vec16u::splat(0xFFFF));
    assert_eq!(pair_to_u32(hi.extract(0), lo.extract(0)), 0xFFFE_0001);

    let (hi, lo) = ops::widening_mul(Vec16u::splat(0xFFFF), Vec16s::splat(i16::MIN));
    assert_eq!(
        pair_to_i32(hi.extract(0), lo.extract(0)) as i64,
        0xFFFF * (i16::MIN as i64)
    );
}

#[test]
fn test_multiply_accumulate_wraps_mod_2_32() {
    // Accumulator at the top of the 32-bit range wraps cleanly.
    let hi = Vec16s::splat(-1);
    let lo = Vec16u::splat(0xFFFF);
    let (hi, lo) = ops::widening_mul_acc(Vec16s::splat(1), Vec16s::splat(1), hi, lo);
    assert_eq!(pair_to_i32(hi.extract(0), lo.extract(0)), 0);
}

#[test]
fn test_zero_and_identity_multiplies() {
    let (hi, lo) = ops::widening_mul(Vec16s::splat(0), Vec16s::splat(i16::MIN));
    assert_eq!((hi, lo), (Vec16s::splat(0), Vec16u::splat(0)));

    let (hi, lo) = ops::widening_mul(Vec16s::splat(1), Vec16s::splat(-1));
    assert_eq!(pair_to_i32(hi.extract(0), lo.extract(0)), -1);
}

#[test]
fn test_extended_shift_full_range_amounts() {
    let (lo, hi) = Vec32s::splat(1).unpack();
    let (slo, shi) = ops::shl_extended(lo, hi, Vec16s::splat(31));
    assert_eq!(pair_to_i32(shi.extract(0), slo.extract(0)), i32::MIN);

    let (lo, hi) = Vec32s::splat(i32::MIN).unpack();
    let (slo, shi) = ops::shr_arithmetic_extended(lo, hi, Vec16s::splat(31));
    assert_eq!(pair_to_i32(shi.extract(0), slo.extract(0)), -1);

    let (slo, shi) = ops::shr_logical_extended(lo, hi, Vec16s::splat(31));
    assert_eq!(pair_to_i32(shi.extract(0), slo.extract(0)), 1);
}

#[test]
fn test_select_uniform_masks_pass_through() {
    let a = Vec32s::splat(0x1234_5678);
    let b = Vec32s::splat(-0x1234_5678);
    assert_eq!(ops::select(VecBool::splat(true), a, b), a);
    assert_eq!(ops::select(VecBool::splat(false), a, b), b);
}

#[test]
fn test_abs_diff_extremes() {
    assert_eq!(
        ops::abs_diff(Vec16u::splat(0), Vec16u::splat(0xFFFF)),
        Vec16u::splat(0xFFFF)
    );
    assert_eq!(ops::abs_diff(Vec16s::splat(5), Vec16s::splat(5)), Vec16s::splat(0));
}

#[test]
fn test_32bit_lane_assembles_halves_low_first() {
    let lo = Vec16u::splat(0xBEEF);
    let hi = Vec16s::splat(-0x2153); // 0xDEAD
    let v = Vec32s::pack(lo, hi);
    assert_eq!(v.extract(0) as u32, 0xDEAD_BEEF);
}
