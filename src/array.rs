use super::{Identity};
use super::error::{Result, check_index, check_length, check_range, check_same_length, check_total};

/// Returns the maximum length of an `Array<T>`.
///
/// This is the largest number of `T`s that fit in a single allocation, or
/// `usize::MAX` if `T` is zero-sized. Any operation asked to construct a
/// longer array returns [`InvalidArgument::InvalidLength`]. Every `Vec<T>`
/// is short enough, so converting one into an `Array` cannot fail.
///
/// [`InvalidArgument::InvalidLength`]: super::InvalidArgument::InvalidLength
///
/// ```
/// use fixarray::max_length;
/// assert_eq!(max_length::<u8>(), isize::MAX as usize);
/// assert_eq!(max_length::<f64>(), isize::MAX as usize / 8);
/// assert_eq!(max_length::<()>(), usize::MAX);
/// ```
pub const fn max_length<T>() -> usize {
    let size = std::mem::size_of::<T>();
    if size == 0 { usize::MAX } else { isize::MAX as usize / size }
}

// ----------------------------------------------------------------------------

/// A fixed-length, zero-indexed, mutable array of `T`s.
///
/// The length of an `Array` is fixed when it is constructed and nothing
/// changes it. Elements are stored contiguously in a [`Box<[T]>`].
///
/// To share one mutable value between several slots, store a shared pointer
/// such as `Rc<RefCell<U>>`. [`Array::make()`] clones its argument into
/// every slot, and cloning an `Rc` aliases the value rather than copying it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Array<T> {
    items: Box<[T]>,
}

impl<T> Array<T> {
    fn new_inner(items: Box<[T]>) -> Self {
        debug_assert!(items.len() <= max_length::<T>());
        Self {items}
    }

    /// Constructs an `Array` given its elements.
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::new(["apple", "body", "crane"]);
    /// assert_eq!(a[1], "body");
    /// ```
    pub fn new(items: impl Into<Box<[T]>>) -> Self { Self::new_inner(items.into()) }

    /// Constructs an `Array` of length zero.
    pub fn empty() -> Self { Self::new_inner(Box::new([])) }

    /// Constructs an `Array` of length `n`, every element of which is a clone
    /// of `x`.
    ///
    /// ```
    /// use std::{cell::RefCell, rc::Rc};
    /// use fixarray::Array;
    /// let a = Array::make(3, Rc::new(RefCell::new(0))).unwrap();
    /// *a[0].borrow_mut() = 42;
    /// assert_eq!(*a[2].borrow(), 42);
    /// assert!(Array::make(usize::MAX, 0u8).is_err());
    /// ```
    pub fn make(n: usize, x: T) -> Result<Self> where T: Clone {
        let n = check_length("make", n, max_length::<T>())?;
        Ok(Self::new_inner(vec![x; n].into()))
    }

    /// Constructs an `Array` of length `n` whose element `i` is `f(i)`.
    ///
    /// `f` is called for `i` in `0..n`, in increasing order.
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::init(10, |x| x % 3 == 0).unwrap();
    /// assert_eq!(a.as_ref(), [true, false, false, true, false, false, true, false, false, true]);
    /// ```
    pub fn init(n: usize, mut f: impl FnMut(usize) -> T) -> Result<Self> {
        let n = check_length("init", n, max_length::<T>())?;
        let mut items = Vec::with_capacity(n);
        for i in 0..n { items.push(f(i)); }
        Ok(Self::new_inner(items.into()))
    }

    /// Constructs an `Array` of `dimx` rows, each an `Array` of `dimy` clones
    /// of `e`.
    ///
    /// Unlike the elements of a single row, the rows are independent: changing
    /// one of them does not affect the others.
    ///
    /// ```
    /// use fixarray::Array;
    /// let mut m = Array::make_matrix(2, 3, 0).unwrap();
    /// m[0][1] = 5;
    /// assert_eq!(m[0].as_ref(), [0, 5, 0]);
    /// assert_eq!(m[1].as_ref(), [0, 0, 0]);
    /// ```
    pub fn make_matrix(dimx: usize, dimy: usize, e: T) -> Result<Array<Array<T>>> where T: Clone {
        let dimx = check_length("make_matrix", dimx, max_length::<Array<T>>())?;
        let dimy = check_length("make_matrix", dimy, max_length::<T>())?;
        Array::init(dimx, |_| Self::new_inner(vec![e.clone(); dimy].into()))
    }

    /// Constructs an `Array` with the elements of `list`, in the same order.
    pub fn of_list(list: Vec<T>) -> Self { Self::new_inner(list.into()) }

    /// Returns the elements of `self` as a list, in the same order.
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::of_list(vec![3, 1, 2]);
    /// assert_eq!(a.to_list(), vec![3, 1, 2]);
    /// ```
    pub fn to_list(&self) -> Vec<T> where T: Clone { self.items.to_vec() }

    /// Returns the raw array elements.
    pub fn to_raw(self) -> Box<[T]> { self.items }

    /// The number of elements in `self`.
    pub fn length(&self) -> usize { self.items.len() }

    /// Returns `true` if `self.length()` is zero.
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    // ------------------------------------------------------------------------

    /// Borrow the element at `index`.
    ///
    /// ```
    /// use fixarray::{Array, InvalidArgument};
    /// let a = Array::new([10, 20]);
    /// assert_eq!(a.get(1), Ok(&20));
    /// assert_eq!(a.get(2), Err(InvalidArgument::IndexOutOfBounds {op: "get", index: 2, length: 2}));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let index = check_index("get", index, self.length())?;
        // SAFETY: `check_index()` succeeded.
        Ok(unsafe { self.unsafe_get(index) })
    }

    /// Mutably borrow the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let index = check_index("get_mut", index, self.length())?;
        Ok(&mut self.items[index])
    }

    /// Replace the element at `index` with `x`.
    pub fn set(&mut self, index: usize, x: T) -> Result<()> {
        let index = check_index("set", index, self.length())?;
        // SAFETY: `check_index()` succeeded.
        unsafe { self.unsafe_set(index, x); }
        Ok(())
    }

    /// Borrow the element at `index` without checking that `index` is in
    /// bounds.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.length()`. Otherwise the behaviour is
    /// undefined.
    #[inline(always)]
    pub unsafe fn unsafe_get(&self, index: usize) -> &T { self.items.get_unchecked(index) }

    /// Replace the element at `index` with `x` without checking that `index`
    /// is in bounds.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.length()`. Otherwise the behaviour is
    /// undefined.
    #[inline(always)]
    pub unsafe fn unsafe_set(&mut self, index: usize, x: T) { *self.items.get_unchecked_mut(index) = x; }

    // ------------------------------------------------------------------------

    /// Returns a fresh array containing the elements of `self` followed by
    /// those of `other`.
    ///
    /// Fails if the combined length exceeds [`max_length()`].
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::new(["apple", "body"]).append(&Array::new(["crane"])).unwrap();
    /// assert_eq!(a.as_ref(), ["apple", "body", "crane"]);
    /// ```
    pub fn append(&self, other: &Self) -> Result<Self> where T: Clone {
        Self::concat_inner("append", [self, other])
    }

    /// Returns a fresh array containing the elements of each of `arrays` in
    /// turn.
    ///
    /// Fails if the total length exceeds [`max_length()`]. Nothing is copied
    /// in that case.
    ///
    /// ```
    /// use fixarray::Array;
    /// let parts = [Array::new([1, 2]), Array::empty(), Array::new([3])];
    /// assert_eq!(Array::concat(&parts).unwrap().as_ref(), [1, 2, 3]);
    /// ```
    pub fn concat<'a>(arrays: impl IntoIterator<Item=&'a Self>) -> Result<Self> where T: 'a + Clone {
        Self::concat_inner("concat", arrays)
    }

    fn concat_inner<'a>(
        op: &'static str,
        arrays: impl IntoIterator<Item=&'a Self>,
    ) -> Result<Self> where T: 'a + Clone {
        let arrays: Vec<&Self> = arrays.into_iter().collect();
        let length = check_total(op, arrays.iter().map(|a| a.length()), max_length::<T>())?;
        let mut items = Vec::with_capacity(length);
        for a in arrays { items.extend_from_slice(&a.items); }
        Ok(Self::new_inner(items.into()))
    }

    /// Returns a fresh array containing the `len` elements of `self` starting
    /// at `pos`.
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::new([0, 1, 2, 3, 4]);
    /// assert_eq!(a.sub(1, 3).unwrap().as_ref(), [1, 2, 3]);
    /// assert!(a.sub(3, 3).is_err());
    /// ```
    pub fn sub(&self, pos: usize, len: usize) -> Result<Self> where T: Clone {
        let range = check_range("sub", pos, len, self.length())?;
        Ok(Self::new_inner(Box::from(&self.items[range])))
    }

    /// Returns a shallow copy of `self`.
    ///
    /// The elements are cloned; if they are shared pointers, the copy shares
    /// the values they point to.
    pub fn copy(&self) -> Self where T: Clone { self.clone() }

    /// Replace the `len` elements of `self` starting at `pos` with clones of
    /// `x`.
    ///
    /// ```
    /// use fixarray::Array;
    /// let mut a = Array::new([0, 1, 2, 3, 4]);
    /// a.fill(1, 2, 9).unwrap();
    /// assert_eq!(a.as_ref(), [0, 9, 9, 3, 4]);
    /// ```
    pub fn fill(&mut self, pos: usize, len: usize, x: T) -> Result<()> where T: Clone {
        let range = check_range("fill", pos, len, self.length())?;
        self.items[range].fill(x);
        Ok(())
    }

    /// Copy `len` elements of `src` starting at `src_pos` into `dst` starting
    /// at `dst_pos`.
    ///
    /// `src` and `dst` are necessarily different arrays. To copy within a
    /// single array, use [`blit_within()`].
    ///
    /// [`blit_within()`]: Self::blit_within()
    ///
    /// ```
    /// use fixarray::Array;
    /// let src = Array::new(["a", "b", "c"]);
    /// let mut dst = Array::make(4, "_").unwrap();
    /// Array::blit(&src, 1, &mut dst, 2, 2).unwrap();
    /// assert_eq!(dst.as_ref(), ["_", "_", "b", "c"]);
    /// ```
    pub fn blit(src: &Self, src_pos: usize, dst: &mut Self, dst_pos: usize, len: usize) -> Result<()> where T: Clone {
        let from = check_range("blit", src_pos, len, src.length())?;
        let to = check_range("blit", dst_pos, len, dst.length())?;
        tracing::trace!(src_pos, dst_pos, len, "blit");
        dst.items[to].clone_from_slice(&src.items[from]);
        Ok(())
    }

    /// Copy `len` elements of `self` starting at `src_pos` to `dst_pos`.
    ///
    /// The ranges may overlap. The result is the same as if the elements were
    /// first copied to a temporary buffer.
    ///
    /// ```
    /// use fixarray::Array;
    /// let mut a = Array::new([0, 1, 2, 3, 4]);
    /// a.blit_within(0, 1, 3).unwrap();
    /// assert_eq!(a.as_ref(), [0, 0, 1, 2, 4]);
    /// a.blit_within(2, 0, 3).unwrap();
    /// assert_eq!(a.as_ref(), [1, 2, 4, 2, 4]);
    /// ```
    pub fn blit_within(&mut self, src_pos: usize, dst_pos: usize, len: usize) -> Result<()> where T: Clone {
        let length = self.length();
        check_range("blit", src_pos, len, length)?;
        check_range("blit", dst_pos, len, length)?;
        tracing::trace!(src_pos, dst_pos, len, "blit within");
        if dst_pos <= src_pos {
            // Copying downwards: each source slot is read before it is written.
            for i in 0..len { self.items[dst_pos + i] = self.items[src_pos + i].clone(); }
        } else {
            for i in (0..len).rev() { self.items[dst_pos + i] = self.items[src_pos + i].clone(); }
        }
        Ok(())
    }

    // ------------------------------------------------------------------------

    /// Apply `f` to every element of `self` in turn.
    ///
    /// ```
    /// use fixarray::Array;
    /// let mut total = 0;
    /// Array::new([1, 2, 3, 4]).iter(|x| { total += x; });
    /// assert_eq!(total, 10);
    /// ```
    pub fn iter(&self, mut f: impl FnMut(&T)) {
        for x in self.items.iter() { f(x); }
    }

    /// Apply `f` to every index and element of `self` in turn.
    pub fn iteri(&self, mut f: impl FnMut(usize, &T)) {
        for (i, x) in self.items.iter().enumerate() { f(i, x); }
    }

    /// Returns a fresh array containing `f(x)` for each element `x` of
    /// `self`.
    ///
    /// `f` is applied to the elements in increasing index order.
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::new([1, 2, 3]).map(|x| x * x);
    /// assert_eq!(a.as_ref(), [1, 4, 9]);
    /// ```
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Array<U> {
        Array::new_inner(self.items.iter().map(|x| f(x)).collect())
    }

    /// Like [`map()`] but `f` also receives the index.
    ///
    /// [`map()`]: Self::map()
    pub fn mapi<U>(&self, mut f: impl FnMut(usize, &T) -> U) -> Array<U> {
        Array::new_inner(self.items.iter().enumerate().map(|(i, x)| f(i, x)).collect())
    }

    /// Replace every element `x` of `self` with `f(x)`, in increasing index
    /// order.
    pub fn map_inplace(&mut self, mut f: impl FnMut(&T) -> T) {
        for x in self.items.iter_mut() { *x = f(x); }
    }

    /// Computes `f(... f(f(init, a[0]), a[1]) ..., a[n-1])`.
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::new(["a", "b", "c"]);
    /// assert_eq!(a.fold_left(String::new(), |s, x| s + x), "abc");
    /// ```
    pub fn fold_left<A>(&self, init: A, f: impl FnMut(A, &T) -> A) -> A {
        self.items.iter().fold(init, f)
    }

    /// Computes `f(a[0], f(a[1], ... f(a[n-1], init) ...))`.
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::new(["a", "b", "c"]);
    /// assert_eq!(a.fold_right(String::new(), |x, s| s + x), "cba");
    /// ```
    pub fn fold_right<A>(&self, init: A, mut f: impl FnMut(&T, A) -> A) -> A {
        self.items.iter().rev().fold(init, |acc, x| f(x, acc))
    }

    /// Like [`map()`] but threads an accumulator through the calls to `f`.
    /// Returns the final accumulator and the mapped array.
    ///
    /// ```
    /// use fixarray::Array;
    /// let (total, sums) = Array::new([1, 2, 3]).fold_left_map(0, |acc, x| (acc + x, acc + x));
    /// assert_eq!(total, 6);
    /// assert_eq!(sums.as_ref(), [1, 3, 6]);
    /// ```
    pub fn fold_left_map<A, U>(&self, init: A, mut f: impl FnMut(A, &T) -> (A, U)) -> (A, Array<U>) {
        let mut acc = init;
        let mut items = Vec::with_capacity(self.length());
        for x in self.items.iter() {
            let (next, u) = f(acc, x);
            acc = next;
            items.push(u);
        }
        (acc, Array::new_inner(items.into()))
    }

    /// Apply `f` to every pair of corresponding elements of `a` and `b`.
    ///
    /// Returns an error, without calling `f`, if `a` and `b` have different
    /// lengths.
    pub fn iter2<U>(a: &Self, b: &Array<U>, mut f: impl FnMut(&T, &U)) -> Result<()> {
        check_same_length("iter2", a.length(), b.length())?;
        for (x, y) in a.items.iter().zip(b.items.iter()) { f(x, y); }
        Ok(())
    }

    /// Returns a fresh array of `f(a[i], b[i])`.
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::new([1, 2, 3]);
    /// let b = Array::new([10, 20, 30]);
    /// assert_eq!(Array::map2(&a, &b, |x, y| x + y).unwrap().as_ref(), [11, 22, 33]);
    /// assert!(Array::map2(&a, &Array::new([1]), |x, y| x + y).is_err());
    /// ```
    pub fn map2<U, V>(a: &Self, b: &Array<U>, mut f: impl FnMut(&T, &U) -> V) -> Result<Array<V>> {
        check_same_length("map2", a.length(), b.length())?;
        Ok(Array::new_inner(a.items.iter().zip(b.items.iter()).map(|(x, y)| f(x, y)).collect()))
    }

    // ------------------------------------------------------------------------

    /// Returns `true` if `f` holds for at least one element of `self`.
    ///
    /// Stops at the first element for which `f` holds.
    pub fn exists(&self, f: impl FnMut(&T) -> bool) -> bool { self.items.iter().any(f) }

    /// Returns `true` if `f` holds for every element of `self`.
    ///
    /// Stops at the first element for which `f` does not hold.
    pub fn for_all(&self, f: impl FnMut(&T) -> bool) -> bool { self.items.iter().all(f) }

    /// Like [`exists()`] but over pairs of corresponding elements.
    ///
    /// [`exists()`]: Self::exists()
    pub fn exists2<U>(a: &Self, b: &Array<U>, mut f: impl FnMut(&T, &U) -> bool) -> Result<bool> {
        check_same_length("exists2", a.length(), b.length())?;
        Ok(a.items.iter().zip(b.items.iter()).any(|(x, y)| f(x, y)))
    }

    /// Like [`for_all()`] but over pairs of corresponding elements.
    ///
    /// [`for_all()`]: Self::for_all()
    pub fn for_all2<U>(a: &Self, b: &Array<U>, mut f: impl FnMut(&T, &U) -> bool) -> Result<bool> {
        check_same_length("for_all2", a.length(), b.length())?;
        Ok(a.items.iter().zip(b.items.iter()).all(|(x, y)| f(x, y)))
    }

    /// Returns `true` if some element of `self` is equal to `x`.
    ///
    /// ```
    /// use fixarray::Array;
    /// assert!(Array::new([1, 2, 3]).mem(&2));
    /// assert!(!Array::new([1, 2, 3]).mem(&4));
    /// ```
    pub fn mem(&self, x: &T) -> bool where T: PartialEq { self.items.iter().any(|y| y == x) }

    /// Returns `true` if some element of `self` is the same object as `x`.
    ///
    /// See [`Identity`] for what "the same" means.
    ///
    /// ```
    /// use std::rc::Rc;
    /// use fixarray::Array;
    /// let x = Rc::new("apple");
    /// let a = Array::new([Rc::new("apple"), Rc::clone(&x)]);
    /// assert!(a.memq(&x));
    /// assert!(!a.memq(&Rc::new("apple")));
    /// assert!(a.mem(&Rc::new("apple")));
    /// ```
    pub fn memq(&self, x: &T) -> bool where T: Identity { self.items.iter().any(|y| y.same(x)) }

    /// Returns the first element for which `f` holds, if any.
    pub fn find_opt(&self, mut f: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|x| f(*x))
    }

    /// Returns the index of the first element for which `f` holds, if any.
    pub fn find_index(&self, f: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(f)
    }

    /// Returns the first `Some` returned by `f`, if any.
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::new(["x", "42", "7"]);
    /// assert_eq!(a.find_map(|s| s.parse::<u32>().ok()), Some(42));
    /// ```
    pub fn find_map<U>(&self, f: impl FnMut(&T) -> Option<U>) -> Option<U> {
        self.items.iter().find_map(f)
    }

    // ------------------------------------------------------------------------

    /// Returns an array of pairs of corresponding elements of `a` and `b`.
    pub fn combine<U>(a: Self, b: Array<U>) -> Result<Array<(T, U)>> {
        check_same_length("combine", a.length(), b.length())?;
        Ok(Array::new_inner(a.items.into_vec().into_iter().zip(b.items.into_vec()).collect()))
    }
}

impl<A, B> Array<(A, B)> {
    /// Splits an array of pairs into a pair of arrays.
    ///
    /// ```
    /// use fixarray::Array;
    /// let (a, b) = Array::new([(1, 'a'), (2, 'b')]).split();
    /// assert_eq!(a.as_ref(), [1, 2]);
    /// assert_eq!(b.as_ref(), ['a', 'b']);
    /// ```
    pub fn split(self) -> (Array<A>, Array<B>) {
        let (a, b): (Vec<A>, Vec<B>) = self.items.into_vec().into_iter().unzip();
        (Array::new_inner(a.into()), Array::new_inner(b.into()))
    }
}

// ----------------------------------------------------------------------------

impl<T> std::convert::AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<T> std::convert::AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<T> std::ops::Index<usize> for Array<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: usize) -> &T { &self.items[index] }
}

impl<T> std::ops::IndexMut<usize> for Array<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T { &mut self.items[index] }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self { Self::of_list(items) }
}

impl<T> From<Box<[T]>> for Array<T> {
    fn from(items: Box<[T]>) -> Self { Self::new_inner(items) }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self { Self::new(items) }
}

impl<T> From<Array<T>> for Vec<T> {
    fn from(a: Array<T>) -> Self { a.items.into_vec() }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc};

    use proptest::prelude::*;

    use super::{Array, max_length};
    use crate::{InvalidArgument};

    #[test]
    fn make_aliases() {
        let x = Rc::new(RefCell::new(vec![1]));
        let a = Array::make(4, Rc::clone(&x)).unwrap();
        assert_eq!(a.length(), 4);
        for i in 0..4 { assert!(Rc::ptr_eq(a.get(i).unwrap(), &x)); }
        a[3].borrow_mut().push(2);
        assert_eq!(*a[0].borrow(), [1, 2]);
        assert!(a.memq(&x));
    }

    #[test]
    fn make_empty() {
        let a = Array::make(0, 'x').unwrap();
        assert!(a.is_empty());
        assert_eq!(a, Array::empty());
    }

    #[test]
    fn too_long() {
        let max = max_length::<u32>();
        assert_eq!(
            Array::make(max + 1, 0u32),
            Err(InvalidArgument::InvalidLength {op: "make", length: max + 1, max}),
        );
        let calls = Cell::new(0);
        assert!(Array::init(usize::MAX, |i| { calls.set(calls.get() + 1); i as u64 }).is_err());
        assert_eq!(calls.get(), 0);
        assert!(Array::make_matrix(1, usize::MAX, 0u16).is_err());
    }

    #[test]
    fn init_order() {
        let mut seen = Vec::new();
        let a = Array::init(4, |i| { seen.push(i); i * 10 }).unwrap();
        assert_eq!(seen, [0, 1, 2, 3]);
        assert_eq!(a.as_ref(), [0, 10, 20, 30]);
    }

    #[test]
    fn matrix_rows_independent() {
        let mut m = Array::make_matrix(3, 2, 'a').unwrap();
        assert_eq!(m.length(), 3);
        m.get_mut(1).unwrap().set(0, 'b').unwrap();
        assert_eq!(m[0].as_ref(), ['a', 'a']);
        assert_eq!(m[1].as_ref(), ['b', 'a']);
        assert_eq!(m[2].as_ref(), ['a', 'a']);
        assert!(Array::make_matrix(0, 5, 0).unwrap().is_empty());
    }

    #[test]
    fn get_set() {
        let mut a = Array::new([1, 2, 3]);
        a.set(0, 7).unwrap();
        *a.get_mut(2).unwrap() += 1;
        assert_eq!(a.as_ref(), [7, 2, 4]);
        assert_eq!(a.set(3, 0), Err(InvalidArgument::IndexOutOfBounds {op: "set", index: 3, length: 3}));
        assert_eq!(a.get(5), Err(InvalidArgument::IndexOutOfBounds {op: "get", index: 5, length: 3}));
        assert_eq!(
            a.get_mut(usize::MAX).map(|x| *x),
            Err(InvalidArgument::IndexOutOfBounds {op: "get_mut", index: usize::MAX, length: 3}),
        );
        assert_eq!(a.as_ref(), [7, 2, 4]);
    }

    #[test]
    fn unchecked() {
        let mut a = Array::new([1, 2, 3]);
        for i in 0..a.length() {
            unsafe {
                let x = *a.unsafe_get(i);
                a.unsafe_set(i, x * 2);
            }
        }
        assert_eq!(a.as_ref(), [2, 4, 6]);
    }

    #[test]
    fn append_concat() {
        let a = Array::new([1, 2]);
        let b = Array::new([3]);
        assert_eq!(a.append(&b).unwrap().as_ref(), [1, 2, 3]);
        assert_eq!(a.append(&Array::empty()), Ok(a.clone()));
        let parts = vec![b.clone(), a.clone(), b.clone()];
        assert_eq!(Array::concat(&parts).unwrap().as_ref(), [3, 1, 2, 3]);
        assert!(Array::<u8>::concat([]).unwrap().is_empty());
    }

    /// An array of `usize::MAX` zero-sized elements, without touching each one.
    fn longest_unit_array() -> Array<()> {
        let mut items: Vec<()> = Vec::new();
        // SAFETY: a `Vec` of a zero-sized type has capacity `usize::MAX`.
        unsafe { items.set_len(usize::MAX); }
        Array::of_list(items)
    }

    #[test]
    fn append_concat_too_long() {
        let a = longest_unit_array();
        assert_eq!(a.length(), max_length::<()>());
        let too_long = |op: &'static str| -> crate::Result<Array<()>> {
            Err(InvalidArgument::InvalidLength {op, length: usize::MAX, max: usize::MAX})
        };
        assert_eq!(a.append(&Array::new([()])), too_long("append"));
        assert_eq!(a.append(&a), too_long("append"));
        assert_eq!(Array::concat([&a, &Array::empty(), &a, &a]), too_long("concat"));
    }

    #[test]
    fn sub_copy() {
        let a = Array::new(["a", "b", "c"]);
        assert_eq!(a.sub(0, 3).unwrap(), a);
        assert!(a.sub(3, 0).unwrap().is_empty());
        assert!(a.sub(4, 0).is_err());
        assert!(a.sub(1, usize::MAX).is_err());
        let mut b = a.copy();
        b[0] = "z";
        assert_eq!(a[0], "a");
    }

    #[test]
    fn copy_is_shallow() {
        let a = Array::make(2, Rc::new(Cell::new(0))).unwrap();
        let b = a.copy();
        b[0].set(5);
        assert_eq!(a[1].get(), 5);
    }

    #[test]
    fn fill_range() {
        let mut a = Array::new([0; 5]);
        a.fill(0, 0, 1).unwrap();
        assert_eq!(a.as_ref(), [0; 5]);
        a.fill(3, 2, 1).unwrap();
        assert_eq!(a.as_ref(), [0, 0, 0, 1, 1]);
        assert_eq!(
            a.fill(4, 2, 9),
            Err(InvalidArgument::InvalidRange {op: "fill", pos: 4, len: 2, length: 5}),
        );
        assert_eq!(a.as_ref(), [0, 0, 0, 1, 1]);
    }

    #[test]
    fn blit_bounds() {
        let src = Array::new([1, 2, 3]);
        let mut dst = Array::new([0; 3]);
        assert!(Array::blit(&src, 2, &mut dst, 0, 2).is_err());
        assert!(Array::blit(&src, 0, &mut dst, 2, 2).is_err());
        assert!(dst.blit_within(3, 0, 1).is_err());
        assert_eq!(dst.as_ref(), [0; 3]);
        Array::blit(&src, 0, &mut dst, 0, 3).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn iterate() {
        let a = Array::new([5usize, 6, 7]);
        let mut seen = Vec::new();
        a.iteri(|i, x| seen.push((i, *x)));
        assert_eq!(seen, [(0, 5), (1, 6), (2, 7)]);
        assert_eq!(a.mapi(|i, x| i * x).as_ref(), [0, 6, 14]);
        let mut b = a.copy();
        b.map_inplace(|x| x + 1);
        assert_eq!(b.as_ref(), [6, 7, 8]);
    }

    #[test]
    fn folds() {
        let a = Array::new([1, 2, 3]);
        assert_eq!(a.fold_left(0, |acc, x| acc + x), 6);
        assert_eq!(a.fold_right(0, |x, acc| acc + x), 6);
        assert_eq!(a.fold_left(Vec::new(), |mut v, x| { v.push(*x); v }), [1, 2, 3]);
        assert_eq!(a.fold_right(Vec::new(), |x, mut v| { v.push(*x); v }), [3, 2, 1]);
        assert_eq!(Array::<i32>::empty().fold_right(9, |x, acc| acc + x), 9);
    }

    #[test]
    fn pairwise() {
        let a = Array::new([1, 2]);
        let b = Array::new(["x", "y"]);
        let mut seen = Vec::new();
        Array::iter2(&a, &b, |x, y| seen.push((*x, *y))).unwrap();
        assert_eq!(seen, [(1, "x"), (2, "y")]);

        let mut called = false;
        let err = Array::iter2(&a, &Array::new([0]), |_, _| called = true);
        assert_eq!(err, Err(InvalidArgument::LengthMismatch {op: "iter2", left: 2, right: 1}));
        assert!(!called);

        assert_eq!(Array::exists2(&a, &a, |x, y| x + y == 4), Ok(true));
        assert_eq!(Array::for_all2(&a, &a, |x, y| x == y), Ok(true));
        assert!(Array::for_all2(&a, &Array::empty(), |x, y: &i32| x == y).is_err());
    }

    #[test]
    fn search() {
        let a = Array::new([1, 3, 5]);
        assert!(!a.exists(|x| x % 2 == 0));
        assert!(a.for_all(|x| x % 2 == 1));
        assert!(Array::<i32>::empty().for_all(|_| false));
        assert!(!Array::<i32>::empty().exists(|_| true));

        let mut visited = 0;
        assert!(a.exists(|x| { visited += 1; *x == 3 }));
        assert_eq!(visited, 2);
        visited = 0;
        assert!(!a.for_all(|x| { visited += 1; *x == 1 }));
        assert_eq!(visited, 2);

        assert_eq!(a.find_opt(|x| *x > 2), Some(&3));
        assert_eq!(a.find_index(|x| *x > 2), Some(1));
        assert_eq!(a.find_index(|x| *x > 5), None);
    }

    #[test]
    fn split_combine() {
        let a = Array::new([1, 2, 3]);
        let b = Array::new(['a', 'b', 'c']);
        let ab = Array::combine(a.clone(), b.clone()).unwrap();
        assert_eq!(ab[2], (3, 'c'));
        assert_eq!(ab.split(), (a.clone(), b));
        assert!(Array::combine(a, Array::new(['a'])).is_err());
    }

    #[test]
    fn conversions() {
        let a: Array<u8> = vec![1, 2].into();
        let v: Vec<u8> = a.clone().into();
        assert_eq!(v, [1, 2]);
        assert_eq!(Array::from([1u8, 2]), a);
        assert_eq!(a.clone().to_raw().len(), 2);
    }

    // ------------------------------------------------------------------------

    proptest! {
        #[test]
        fn list_round_trip(xs in prop::collection::vec(any::<i32>(), 0..64)) {
            let a = Array::of_list(xs.clone());
            prop_assert_eq!(Array::of_list(a.to_list()).to_list(), a.to_list());
            prop_assert_eq!(a.to_list(), xs);
        }

        #[test]
        fn blit_within_matches_temporary(
            xs in prop::collection::vec(any::<u8>(), 1..48),
            p in 0usize..48,
            q in 0usize..48,
            len in 0usize..48,
        ) {
            let mut a = Array::of_list(xs.clone());
            let n = xs.len();
            let result = a.blit_within(p, q, len);
            if p + len <= n && q + len <= n {
                prop_assert!(result.is_ok());
                let tmp: Vec<u8> = xs[p..p + len].to_vec();
                let mut expected = xs.clone();
                expected[q..q + len].copy_from_slice(&tmp);
                prop_assert_eq!(a.to_list(), expected);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(a.to_list(), xs);
            }
        }

        #[test]
        fn out_of_bounds_rejected(
            xs in prop::collection::vec(any::<i8>(), 0..16),
            extra in 0usize..16,
        ) {
            let mut a = Array::of_list(xs.clone());
            let n = a.length();
            prop_assert!(a.get(n + extra).is_err());
            prop_assert!(a.set(n + extra, 0).is_err());
            prop_assert!(a.sub(n, extra + 1).is_err());
            prop_assert!(a.fill(n + extra + 1, 0, 0).is_err());
            prop_assert_eq!(a.to_list(), xs);
        }
    }
}
