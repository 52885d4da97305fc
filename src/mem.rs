//! Indexed memory access
//!
//! Gather and scatter over slices with per-lane element indices. Element
//! scaling is carried by the slice type; indices count elements, not
//! bytes. Out-of-range indices are a caller contract violation
//! (`debug_assert!`ed), as is a negative index lane.
//!
//! The `_wide` forms model a 32-bit access against 16-bit memory: element
//! `k` occupies `base[2k]` (low half) and `base[2k + 1]` (high half), and
//! the vector side goes through the half-pair pack/unpack.

use crate::traits::LaneScalar;
use crate::vector::LaneVec;

#[inline(always)]
fn element_index<I: LaneScalar>(lane: I, len: usize) -> usize {
    let k = lane.to_i64();
    debug_assert!(k >= 0 && (k as u64) < len as u64, "memory index out of range");
    k.rem_euclid(len.max(1) as i64) as usize
}

/// Gather: `out[j] = base[idx[j]]` for each lane `j`.
///
/// # Example
///
/// ```rust
/// use lanewise::{mem, Vec16s, Vec16u};
///
/// let table: Vec<u16> = (0..64u16).map(|x| x * x).collect();
/// let idx = Vec16s::from_fn(|i| (2 * i) as i16);
/// let v: Vec16u = mem::gather(&table, idx);
/// assert_eq!(v.extract(3), 36);
/// ```
#[inline(always)]
pub fn gather<T: LaneScalar, I: LaneScalar, const N: usize>(
    base: &[T],
    idx: LaneVec<I, N>,
) -> LaneVec<T, N> {
    LaneVec::from_fn(|j| base[element_index(idx.0[j], base.len())])
}

/// Scatter: `base[idx[j]] = v[j]` for each lane `j`.
///
/// When several lanes name the same element, the highest lane index wins.
#[inline(always)]
pub fn scatter<T: LaneScalar, I: LaneScalar, const N: usize>(
    base: &mut [T],
    idx: LaneVec<I, N>,
    v: LaneVec<T, N>,
) {
    for j in 0..N {
        base[element_index(idx.0[j], base.len())] = v.0[j];
    }
}

/// Gather 32-bit lanes from 16-bit memory, low half first.
#[inline(always)]
pub fn gather_wide<I: LaneScalar, const N: usize>(
    base: &[u16],
    idx: LaneVec<I, N>,
) -> LaneVec<i32, N> {
    let len = base.len() / 2;
    let lo = LaneVec::from_fn(|j| base[2 * element_index(idx.0[j], len)]);
    let hi = LaneVec::from_fn(|j| base[2 * element_index(idx.0[j], len) + 1] as i16);
    LaneVec::<i32, N>::pack(lo, hi)
}

/// Scatter 32-bit lanes to 16-bit memory, low half first.
#[inline(always)]
pub fn scatter_wide<I: LaneScalar, const N: usize>(
    base: &mut [u16],
    idx: LaneVec<I, N>,
    v: LaneVec<i32, N>,
) {
    let len = base.len() / 2;
    let (lo, hi) = v.unpack();
    for j in 0..N {
        let k = element_index(idx.0[j], len);
        base[2 * k] = lo.0[j];
        base[2 * k + 1] = hi.0[j] as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vec16s, Vec16u, Vec32s, LANES};

    #[test]
    fn test_gather_scatter_round_trip() {
        let mut buf = [0u16; LANES * 2];
        let idx = Vec16s::from_fn(|i| (2 * i) as i16);
        let v = Vec16u::from_fn(|i| (i * 7) as u16);
        scatter(&mut buf, idx, v);
        assert_eq!(gather(&buf, idx), v);
        // Odd elements untouched.
        assert_eq!(buf[1], 0);
    }

    #[test]
    fn test_scatter_last_writer_wins() {
        let mut buf = [0i16; LANES];
        let idx = Vec16s::splat(0);
        let v = Vec16s::from_fn(|i| i as i16);
        scatter(&mut buf, idx, v);
        assert_eq!(buf[0], (LANES - 1) as i16);
    }

    #[test]
    fn test_wide_round_trip() {
        let mut buf = [0u16; LANES * 2];
        let idx = Vec16s::from_fn(|i| i as i16);
        let v = Vec32s::from_fn(|i| -1 - i as i32);
        scatter_wide(&mut buf, idx, v);
        assert_eq!(gather_wide(&buf, idx), v);
        // Low half stored first.
        assert_eq!(buf[0], 0xFFFF);
        assert_eq!(buf[1] as i16, -1);
    }
}
