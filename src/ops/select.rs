//! Masked select and swap
//!
//! Data movement steered by a per-lane mask. Both operations treat a
//! 32-bit lane as one unit: the mask lane steers the whole half pair, so
//! pairs never split.

use crate::traits::LaneScalar;
use crate::vector::{LaneVec, Mask};

/// Pick `if_true` lanes where `mask` is set, `if_false` elsewhere.
///
/// # Example
///
/// ```rust
/// use lanewise::{ops, Vec16s, VecBool};
///
/// let m = VecBool::splat(true);
/// let r = ops::select(m, Vec16s::splat(1), Vec16s::splat(2));
/// assert_eq!(r, Vec16s::splat(1));
/// ```
#[inline(always)]
pub fn select<T: LaneScalar, const N: usize>(
    mask: Mask<N>,
    if_true: LaneVec<T, N>,
    if_false: LaneVec<T, N>,
) -> LaneVec<T, N> {
    LaneVec::select(mask, if_true, if_false)
}

/// Exchange the lanes of `a` and `b` where `mask` is set.
///
/// Pure form: returns the new `(a, b)`. Applying the same mask twice
/// restores the inputs.
#[inline(always)]
pub fn swap<T: LaneScalar, const N: usize>(
    mask: Mask<N>,
    a: LaneVec<T, N>,
    b: LaneVec<T, N>,
) -> (LaneVec<T, N>, LaneVec<T, N>) {
    (LaneVec::select(mask, b, a), LaneVec::select(mask, a, b))
}

/// In-place [`swap`].
#[inline(always)]
pub fn swap_in_place<T: LaneScalar, const N: usize>(
    mask: Mask<N>,
    a: &mut LaneVec<T, N>,
    b: &mut LaneVec<T, N>,
) {
    let (x, y) = swap(mask, *a, *b);
    *a = x;
    *b = y;
}

/// `a + b` where `mask` is set, `a - b` elsewhere.
#[inline(always)]
pub fn add_sub_select<T: LaneScalar, const N: usize>(
    mask: Mask<N>,
    a: LaneVec<T, N>,
    b: LaneVec<T, N>,
) -> LaneVec<T, N> {
    LaneVec::select(mask, a.add(b), a.sub(b))
}
