//! Lane-index operations
//!
//! Scalar extract/insert, per-lane-index gather/insert within a vector,
//! and the lane-move family that slides or rotates the whole lane
//! sequence by one element. 32-bit lanes move as whole half pairs.

use crate::traits::LaneScalar;
use crate::vector::LaneVec;

/// Read lane `index` of `v`.
#[inline(always)]
pub fn extract<T: LaneScalar, const N: usize>(v: LaneVec<T, N>, index: usize) -> T {
    v.extract(index)
}

/// Replace lane `index` of `v` with `value`, returning the new vector.
#[inline(always)]
pub fn insert<T: LaneScalar, const N: usize>(
    v: LaneVec<T, N>,
    value: T,
    index: usize,
) -> LaneVec<T, N> {
    v.insert(value, index)
}

#[inline(always)]
fn lane_index<I: LaneScalar, const N: usize>(lane: I) -> usize {
    let k = lane.to_i64();
    debug_assert!(k >= 0 && (k as u64) < N as u64, "lane index out of range");
    k.rem_euclid(N as i64) as usize
}

/// Permute: `out[j] = v[idx[j]]` for each lane `j`.
///
/// Indices outside `0..N` are a caller contract violation.
///
/// # Example
///
/// ```rust
/// use lanewise::{ops, Vec16s, LANES};
///
/// let v = Vec16s::from_fn(|i| i as i16);
/// let reversed = Vec16s::from_fn(|i| (LANES - 1 - i) as i16);
/// let r = ops::gather_lanes(v, reversed);
/// assert_eq!(r.extract(0), 31);
/// assert_eq!(r.extract(31), 0);
/// ```
#[inline(always)]
pub fn gather_lanes<T: LaneScalar, I: LaneScalar, const N: usize>(
    v: LaneVec<T, N>,
    idx: LaneVec<I, N>,
) -> LaneVec<T, N> {
    LaneVec::from_fn(|j| v.0[lane_index::<I, N>(idx.0[j])])
}

/// Scatter within a vector: `out[idx[j]] = values[j]`, starting from `v`.
///
/// When several lanes name the same destination, the highest lane index
/// wins.
#[inline(always)]
pub fn insert_lanes<T: LaneScalar, I: LaneScalar, const N: usize>(
    v: LaneVec<T, N>,
    values: LaneVec<T, N>,
    idx: LaneVec<I, N>,
) -> LaneVec<T, N> {
    let mut lanes = v.to_array();
    for j in 0..N {
        lanes[lane_index::<I, N>(idx.0[j])] = values.0[j];
    }
    LaneVec::from_array(lanes)
}

/// Slide lanes one step toward index 0; the vacated top lane takes
/// `fill`'s lane 0.
#[inline(always)]
pub fn shift_lanes_low<T: LaneScalar, const N: usize>(
    a: LaneVec<T, N>,
    fill: LaneVec<T, N>,
) -> LaneVec<T, N> {
    LaneVec::from_fn(|i| if i + 1 < N { a.0[i + 1] } else { fill.0[0] })
}

/// Slide lanes one step toward index N-1; lane 0 takes `fill`'s last lane.
#[inline(always)]
pub fn shift_lanes_high<T: LaneScalar, const N: usize>(
    a: LaneVec<T, N>,
    fill: LaneVec<T, N>,
) -> LaneVec<T, N> {
    LaneVec::from_fn(|i| if i > 0 { a.0[i - 1] } else { fill.0[N - 1] })
}

/// Rotate lanes one step toward index 0.
#[inline(always)]
pub fn rotate_lanes_low<T: LaneScalar, const N: usize>(a: LaneVec<T, N>) -> LaneVec<T, N> {
    LaneVec::from_fn(|i| a.0[(i + 1) % N])
}

/// Rotate lanes one step toward index N-1.
#[inline(always)]
pub fn rotate_lanes_high<T: LaneScalar, const N: usize>(a: LaneVec<T, N>) -> LaneVec<T, N> {
    LaneVec::from_fn(|i| a.0[(i + N - 1) % N])
}
