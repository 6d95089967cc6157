//! Fixed-length arrays of unboxed `f64`s.
//!
//! [`FloatArray`] is a distinct type from `Array<f64>`, with a smaller
//! interface, but the two share the same representation and can be converted
//! into each other without copying.

use super::{Array, max_length};
use super::error::{Result, check_length};

/// A fixed-length, zero-indexed, mutable array of `f64`s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatArray(Array<f64>);

impl FloatArray {
    /// The maximum length of a `FloatArray`.
    pub const MAX_LENGTH: usize = max_length::<f64>();

    /// Constructs a `FloatArray` of length `n`, with every element `0.0`.
    ///
    /// Callers should not rely on the initial contents, and should overwrite
    /// every element before reading it.
    ///
    /// ```
    /// use fixarray::FloatArray;
    /// let a = FloatArray::create(3).unwrap();
    /// assert_eq!(a.length(), 3);
    /// assert!(FloatArray::create(FloatArray::MAX_LENGTH + 1).is_err());
    /// ```
    pub fn create(n: usize) -> Result<Self> {
        let n = check_length("create_float", n, Self::MAX_LENGTH)?;
        Ok(Self(Array::new(vec![0.0; n])))
    }

    /// Constructs a `FloatArray` of length `n`, with every element `x`.
    pub fn make(n: usize, x: f64) -> Result<Self> { Array::make(n, x).map(Self) }

    /// Constructs a `FloatArray` of length `n` whose element `i` is `f(i)`.
    ///
    /// ```
    /// use fixarray::FloatArray;
    /// let a = FloatArray::init(4, |i| i as f64 / 2.0).unwrap();
    /// assert_eq!(a.as_ref(), [0.0, 0.5, 1.0, 1.5]);
    /// ```
    pub fn init(n: usize, f: impl FnMut(usize) -> f64) -> Result<Self> { Array::init(n, f).map(Self) }

    /// Constructs a `FloatArray` with the elements of `list`, in order.
    pub fn of_list(list: Vec<f64>) -> Self { Self(Array::of_list(list)) }

    /// Returns the elements of `self` as a list, in order.
    pub fn to_list(&self) -> Vec<f64> { self.0.to_list() }

    /// Wraps an `Array<f64>` without copying it.
    pub fn of_array(array: Array<f64>) -> Self { Self(array) }

    /// Unwraps `self` into an `Array<f64>` without copying it.
    pub fn to_array(self) -> Array<f64> { self.0 }

    /// The number of elements in `self`.
    pub fn length(&self) -> usize { self.0.length() }

    /// Returns the element at `index`.
    ///
    /// ```
    /// use fixarray::FloatArray;
    /// let mut a = FloatArray::create(2).unwrap();
    /// a.set(1, 2.5).unwrap();
    /// assert_eq!(a.get(1), Ok(2.5));
    /// assert!(a.get(2).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<f64> { self.0.get(index).copied() }

    /// Replace the element at `index` with `x`.
    pub fn set(&mut self, index: usize, x: f64) -> Result<()> { self.0.set(index, x) }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.length()`.
    #[inline(always)]
    pub unsafe fn unsafe_get(&self, index: usize) -> f64 { *self.0.unsafe_get(index) }

    /// Replace the element at `index` with `x`, without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.length()`.
    #[inline(always)]
    pub unsafe fn unsafe_set(&mut self, index: usize, x: f64) { self.0.unsafe_set(index, x) }

    /// Returns a fresh copy of `len` elements starting at `pos`.
    pub fn sub(&self, pos: usize, len: usize) -> Result<Self> { self.0.sub(pos, len).map(Self) }

    /// Returns a fresh copy of `self`.
    pub fn copy(&self) -> Self { self.clone() }

    /// Replace `len` elements starting at `pos` with `x`.
    pub fn fill(&mut self, pos: usize, len: usize, x: f64) -> Result<()> { self.0.fill(pos, len, x) }

    /// Copy `len` elements of `src` starting at `src_pos` into `dst` starting
    /// at `dst_pos`.
    pub fn blit(src: &Self, src_pos: usize, dst: &mut Self, dst_pos: usize, len: usize) -> Result<()> {
        Array::blit(&src.0, src_pos, &mut dst.0, dst_pos, len)
    }

    /// Copy `len` elements of `self` from `src_pos` to `dst_pos`. The ranges
    /// may overlap.
    pub fn blit_within(&mut self, src_pos: usize, dst_pos: usize, len: usize) -> Result<()> {
        self.0.blit_within(src_pos, dst_pos, len)
    }
}

impl std::convert::AsRef<[f64]> for FloatArray {
    fn as_ref(&self) -> &[f64] { self.0.as_ref() }
}

impl std::convert::AsMut<[f64]> for FloatArray {
    fn as_mut(&mut self) -> &mut [f64] { self.0.as_mut() }
}

impl std::ops::Index<usize> for FloatArray {
    type Output = f64;
    #[inline(always)]
    fn index(&self, index: usize) -> &f64 { &self.0[index] }
}

impl std::ops::IndexMut<usize> for FloatArray {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut f64 { &mut self.0[index] }
}

impl From<FloatArray> for Array<f64> {
    fn from(a: FloatArray) -> Self { a.to_array() }
}

impl From<Array<f64>> for FloatArray {
    fn from(a: Array<f64>) -> Self { Self::of_array(a) }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InvalidArgument};

    #[test]
    fn create_is_zeroed() {
        let a = FloatArray::create(5).unwrap();
        assert!(a.to_list().iter().all(|x| *x == 0.0));
        assert_eq!(FloatArray::create(0).unwrap().length(), 0);
    }

    #[test]
    fn too_long() {
        let n = FloatArray::MAX_LENGTH + 1;
        assert_eq!(
            FloatArray::create(n),
            Err(InvalidArgument::InvalidLength {op: "create_float", length: n, max: n - 1}),
        );
        assert!(FloatArray::make(n, 1.0).is_err());
    }

    #[test]
    fn access() {
        let mut a = FloatArray::make(3, 1.5).unwrap();
        a.set(0, -1.0).unwrap();
        a[2] = 4.0;
        assert_eq!(a.to_list(), [-1.0, 1.5, 4.0]);
        assert_eq!(a.set(3, 0.0), Err(InvalidArgument::IndexOutOfBounds {op: "set", index: 3, length: 3}));
        assert_eq!(a.get(4), Err(InvalidArgument::IndexOutOfBounds {op: "get", index: 4, length: 3}));
        unsafe {
            a.unsafe_set(1, 2.0);
            assert_eq!(a.unsafe_get(1), 2.0);
        }
    }

    #[test]
    fn bulk() {
        let mut a = FloatArray::of_list(vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(a.sub(1, 2).unwrap().to_list(), [1.0, 2.0]);
        a.blit_within(0, 1, 3).unwrap();
        assert_eq!(a.to_list(), [0.0, 0.0, 1.0, 2.0]);
        let mut b = FloatArray::create(4).unwrap();
        FloatArray::blit(&a, 2, &mut b, 0, 2).unwrap();
        b.fill(2, 2, 9.0).unwrap();
        assert_eq!(b.to_list(), [1.0, 2.0, 9.0, 9.0]);
        assert!(b.fill(3, 2, 0.0).is_err());
    }

    #[test]
    fn conversion() {
        let a = FloatArray::init(3, |i| i as f64).unwrap();
        let array: Array<f64> = a.copy().into();
        assert_eq!(array.as_ref(), [0.0, 1.0, 2.0]);
        assert_eq!(FloatArray::from(array), a);
    }
}
