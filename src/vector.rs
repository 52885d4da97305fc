//! Lane vectors and masks
//!
//! [`LaneVec`] is a fixed-length vector of integer lanes operating in
//! lockstep; [`Mask`] is the matching per-lane boolean vector that carries
//! comparison results, carries, and borrows between operations. The system
//! vector length is [`LANES`] and the concrete aliases (`Vec16s`, `Vec32u`,
//! ...) are defined at that length.

use crate::traits::LaneScalar;

/// Number of lanes in the system vector types.
pub const LANES: usize = 32;

/// A fixed-length vector of integer lanes.
///
/// All lane-wise operations are pure: they consume values and return new
/// vectors. Arithmetic wraps; carry and overflow information is reported
/// through [`Mask`] values by the engine operations in [`ops`](crate::ops).
///
/// # Example
///
/// ```rust
/// use lanewise::Vec16s;
///
/// let a = Vec16s::splat(40);
/// let b = Vec16s::splat(2);
/// assert_eq!(a.add(b), Vec16s::splat(42));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LaneVec<T, const N: usize>(pub(crate) [T; N]);

/// Per-lane boolean vector.
///
/// Produced by comparisons and carry-reporting arithmetic, consumed by
/// select/swap and carry-in arithmetic.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Mask<const N: usize>(pub(crate) [bool; N]);

/// 8-bit signed lanes at the system vector length.
pub type Vec8s = LaneVec<i8, LANES>;
/// 8-bit unsigned lanes at the system vector length.
pub type Vec8u = LaneVec<u8, LANES>;
/// 16-bit signed lanes at the system vector length.
pub type Vec16s = LaneVec<i16, LANES>;
/// 16-bit unsigned lanes at the system vector length.
pub type Vec16u = LaneVec<u16, LANES>;
/// 32-bit signed lanes at the system vector length.
pub type Vec32s = LaneVec<i32, LANES>;
/// 32-bit unsigned lanes at the system vector length.
pub type Vec32u = LaneVec<u32, LANES>;
/// Boolean lanes at the system vector length.
pub type VecBool = Mask<LANES>;

impl<T: LaneScalar, const N: usize> LaneVec<T, N> {
    /// Broadcast one value to every lane.
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// All-zero vector.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Build a vector from a lane array.
    #[inline(always)]
    pub fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    /// The lane array.
    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    /// Borrow the lane array.
    #[inline(always)]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Build a vector by evaluating `f` for each lane index.
    #[inline(always)]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(core::array::from_fn(f))
    }

    /// Load the first `N` elements of a slice.
    ///
    /// Panics if the slice is shorter than `N`.
    #[inline(always)]
    pub fn from_slice(slice: &[T]) -> Self {
        assert!(slice.len() >= N, "slice too short for LaneVec");
        Self::from_fn(|i| slice[i])
    }

    /// Store all lanes to the front of a slice.
    ///
    /// Panics if the slice is shorter than `N`.
    #[inline(always)]
    pub fn write_to_slice(self, out: &mut [T]) {
        assert!(out.len() >= N, "slice too short for LaneVec");
        out[..N].copy_from_slice(&self.0);
    }

    /// Read lane `index`.
    #[inline(always)]
    pub fn extract(self, index: usize) -> T {
        debug_assert!(index < N, "lane index out of range");
        self.0[index % N]
    }

    /// Replace lane `index` with `value`, returning the new vector.
    #[inline(always)]
    pub fn insert(self, value: T, index: usize) -> Self {
        debug_assert!(index < N, "lane index out of range");
        let mut lanes = self.0;
        lanes[index % N] = value;
        Self(lanes)
    }

    #[inline(always)]
    pub(crate) fn map(self, mut f: impl FnMut(T) -> T) -> Self {
        Self::from_fn(|i| f(self.0[i]))
    }

    #[inline(always)]
    pub(crate) fn zip_map(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_fn(|i| f(self.0[i], rhs.0[i]))
    }

    // Lane-wise arithmetic

    /// Wrapping lane-wise addition.
    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::wrapping_add)
    }

    /// Wrapping lane-wise subtraction.
    #[inline(always)]
    pub fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::wrapping_sub)
    }

    /// Wrapping lane-wise multiplication (low half of each product).
    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::wrapping_mul)
    }

    /// Wrapping two's-complement negation of each lane.
    #[inline(always)]
    pub fn neg(self) -> Self {
        self.map(T::wrapping_neg)
    }

    // Lane-wise bit operations

    /// Bitwise AND.
    #[inline(always)]
    pub fn and(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::bit_and)
    }

    /// Bitwise OR.
    #[inline(always)]
    pub fn or(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::bit_or)
    }

    /// Bitwise XOR.
    #[inline(always)]
    pub fn xor(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::bit_xor)
    }

    /// Bitwise complement.
    #[inline(always)]
    pub fn not(self) -> Self {
        self.map(T::bit_not)
    }

    // Lane-wise shifts. Amounts are taken per lane from `amounts`; an
    // amount outside `0..T::BITS` is a caller contract violation.

    /// Left shift each lane by the matching lane of `amounts`.
    #[inline(always)]
    pub fn shl(self, amounts: Self) -> Self {
        self.zip_map(amounts, |x, n| x.shl(Self::shift_amount(n)))
    }

    /// Arithmetic right shift of each lane by the matching lane of `amounts`.
    #[inline(always)]
    pub fn shr_arithmetic(self, amounts: Self) -> Self {
        self.zip_map(amounts, |x, n| x.shr_arithmetic(Self::shift_amount(n)))
    }

    /// Logical right shift of each lane by the matching lane of `amounts`.
    #[inline(always)]
    pub fn shr_logical(self, amounts: Self) -> Self {
        self.zip_map(amounts, |x, n| x.shr_logical(Self::shift_amount(n)))
    }

    #[inline(always)]
    fn shift_amount(lane: T) -> u32 {
        let n = lane.to_i64();
        debug_assert!(
            n >= 0 && (n as u32) < T::BITS,
            "shift amount out of range"
        );
        n as u32
    }

    // Comparisons

    /// Lane-wise equality.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Mask<N> {
        Mask::from_fn(|i| self.0[i] == rhs.0[i])
    }

    /// Lane-wise inequality.
    #[inline(always)]
    pub fn ne(self, rhs: Self) -> Mask<N> {
        Mask::from_fn(|i| self.0[i] != rhs.0[i])
    }

    /// Lane-wise less-than.
    #[inline(always)]
    pub fn lt(self, rhs: Self) -> Mask<N> {
        Mask::from_fn(|i| self.0[i] < rhs.0[i])
    }

    /// Lane-wise less-or-equal.
    #[inline(always)]
    pub fn le(self, rhs: Self) -> Mask<N> {
        Mask::from_fn(|i| self.0[i] <= rhs.0[i])
    }

    /// Lane-wise greater-than.
    #[inline(always)]
    pub fn gt(self, rhs: Self) -> Mask<N> {
        Mask::from_fn(|i| self.0[i] > rhs.0[i])
    }

    /// Lane-wise greater-or-equal.
    #[inline(always)]
    pub fn ge(self, rhs: Self) -> Mask<N> {
        Mask::from_fn(|i| self.0[i] >= rhs.0[i])
    }

    /// Pick `if_true` lanes where `mask` is set, `if_false` elsewhere.
    #[inline(always)]
    pub fn select(mask: Mask<N>, if_true: Self, if_false: Self) -> Self {
        Self::from_fn(|i| if mask.0[i] { if_true.0[i] } else { if_false.0[i] })
    }
}

impl<T, const N: usize> core::ops::Index<usize> for LaneVec<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<const N: usize> Mask<N> {
    /// Broadcast one boolean to every lane.
    #[inline(always)]
    pub fn splat(value: bool) -> Self {
        Self([value; N])
    }

    /// Build a mask from a lane array.
    #[inline(always)]
    pub fn from_array(lanes: [bool; N]) -> Self {
        Self(lanes)
    }

    /// The lane array.
    #[inline(always)]
    pub fn to_array(self) -> [bool; N] {
        self.0
    }

    /// Build a mask by evaluating `f` for each lane index.
    #[inline(always)]
    pub fn from_fn(f: impl FnMut(usize) -> bool) -> Self {
        Self(core::array::from_fn(f))
    }

    /// Read lane `index`.
    #[inline(always)]
    pub fn get(self, index: usize) -> bool {
        debug_assert!(index < N, "mask lane index out of range");
        self.0[index % N]
    }

    /// Replace lane `index` with `value`, returning the new mask.
    #[inline(always)]
    pub fn set(self, value: bool, index: usize) -> Self {
        debug_assert!(index < N, "mask lane index out of range");
        let mut lanes = self.0;
        lanes[index % N] = value;
        Self(lanes)
    }

    /// True if every lane is set.
    #[inline(always)]
    pub fn all(self) -> bool {
        self.0.iter().all(|&b| b)
    }

    /// True if any lane is set.
    #[inline(always)]
    pub fn any(self) -> bool {
        self.0.iter().any(|&b| b)
    }

    /// True if no lane is set.
    #[inline(always)]
    pub fn none(self) -> bool {
        !self.any()
    }

    /// Number of set lanes.
    #[inline(always)]
    pub fn count(self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    /// Lane-wise AND.
    #[inline(always)]
    pub fn and(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i] && rhs.0[i])
    }

    /// Lane-wise OR.
    #[inline(always)]
    pub fn or(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i] || rhs.0[i])
    }

    /// Lane-wise XOR.
    #[inline(always)]
    pub fn xor(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i] != rhs.0[i])
    }

    /// Lane-wise NOT.
    #[inline(always)]
    pub fn not(self) -> Self {
        Self::from_fn(|i| !self.0[i])
    }
}

impl<const N: usize> core::ops::Index<usize> for Mask<N> {
    type Output = bool;

    #[inline(always)]
    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}
