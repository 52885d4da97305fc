#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! lanewise: fixed-width SIMD integer arithmetic over a 16-bit native core
//!
//! The crate is layered the way the emulated machine is:
//!
//! - [`native`] is the 16-bit primitive boundary: carry/borrow adds,
//!   quadrant multiplies, single-bit shift-ins.
//! - [`ops`] synthesizes the full 8/16/32-bit surface on top of it:
//!   carry-chained arithmetic, exact widening multiply-accumulate,
//!   select/swap, extended shifts, and lane-index operations.
//! - [`convert`] and [`mem`] carry values across widths, signednesses,
//!   and slice-backed memory.
//!
//! All `N` lanes move in lockstep; carries, borrows, and comparison
//! results travel between operations as [`Mask`] values.
//!
//! # Quick Start
//!
//! ```rust
//! use lanewise::{ops, Vec16s, Vec16u, Vec32s};
//!
//! // Exact signed widening multiply as a (high, low) half pair.
//! let (hi, lo) = ops::widening_mul(Vec16s::splat(-300), Vec16s::splat(200));
//! assert_eq!(Vec32s::pack(lo, hi), Vec32s::splat(-60_000));
//!
//! // Saturating arithmetic clamps instead of wrapping.
//! let r = ops::add_sat(Vec16u::splat(0xFFF0), Vec16u::splat(0x100));
//! assert_eq!(r, Vec16u::splat(0xFFFF));
//! ```

// Scalar lane trait definitions
pub mod traits;

// Lane vector and mask types
pub mod vector;

// Width and signedness conversions
pub mod convert;

// Native 16-bit primitive layer
pub mod native;

// Engine operations
pub mod ops;

// Indexed memory access
pub mod mem;

// Public re-exports for convenience
pub use traits::{LaneScalar, NarrowScalar, SignCastScalar, WidenScalar};

pub use vector::{
    LaneVec, Mask, Vec16s, Vec16u, Vec32s, Vec32u, Vec8s, Vec8u, VecBool, LANES,
};

pub use ops::{CarryArith, SaturatingArith, WideningMul};
