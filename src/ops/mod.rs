//! Functional-style engine operations
//!
//! The emulation engine proper, grouped by concern. Everything here is a
//! free function over [`LaneVec`](crate::vector::LaneVec) values; the
//! traits (`CarryArith`, `WideningMul`, ...) exist so one name covers
//! every lane width and signedness combination it is defined for.

pub mod arith;
pub mod bits;
pub mod lanes;
pub mod multiply;
pub mod select;
pub mod shift;

pub use arith::{
    add, add_carry_in_out, add_carry_out, add_sat, add_with_carry, mul, neg,
    sub, sub_borrow_in_out, sub_borrow_out, sub_sat, sub_with_borrow,
    CarryArith, SaturatingArith,
};
pub use bits::{
    abs, abs_diff, and, clamp, count_ones, leading_sign_bits, leading_zeros,
    not, or, xor, AbsLanes, BitCounts,
};
pub use lanes::{
    extract, gather_lanes, insert, insert_lanes, rotate_lanes_high,
    rotate_lanes_low, shift_lanes_high, shift_lanes_low,
};
pub use multiply::{
    accumulate_high, accumulate_low, accumulate_low_signed, accumulate_mid,
    accumulate_mid_unsigned, mac, widening_mul, widening_mul_acc, WideningMul,
};
pub use select::{add_sub_select, select, swap, swap_in_place};
pub use shift::{
    shift_in_high, shift_in_low, shl, shl_extended, shl_extended_unsigned,
    shr_arithmetic, shr_arithmetic_extended, shr_arithmetic_extended_unsigned,
    shr_logical, shr_logical_extended, shr_logical_extended_unsigned,
};
