//! Lazy sequences over the elements of an [`Array`].
//!
//! A [`Seq`] doesn't copy anything, but instead reads the array one element
//! at a time, on demand. Cloning a `Seq` restarts it from the same position,
//! so a `Seq` can be consumed as many times as you like.
//!
//! While a `Seq` exists, the array is borrowed and so cannot be replaced
//! element-wise. However, elements with interior mutability (e.g. [`Cell`])
//! can still change, and a `Seq` observes any such change made before it
//! reaches the element.
//!
//! [`Cell`]: std::cell::Cell

use std::iter::{FusedIterator};

use super::{Array};

/// The return type of [`Array::to_seq()`].
#[derive(Debug)]
pub struct Seq<'a, T> {
    array: &'a Array<T>,
    next: usize,
}

// Not derived: `T` need not be `Clone`.
impl<'a, T> Clone for Seq<'a, T> {
    fn clone(&self) -> Self { Self {array: self.array, next: self.next} }
}

impl<'a, T> Iterator for Seq<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let items: &'a [T] = self.array.as_ref();
        let x = items.get(self.next)?;
        self.next += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.length() - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for Seq<'a, T> {}
impl<'a, T> FusedIterator for Seq<'a, T> {}

// ----------------------------------------------------------------------------

/// The return type of [`Array::to_seqi()`].
#[derive(Debug)]
pub struct Seqi<'a, T>(Seq<'a, T>);

impl<'a, T> Clone for Seqi<'a, T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, T> Iterator for Seqi<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.0.next;
        self.0.next().map(|x| (index, x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> ExactSizeIterator for Seqi<'a, T> {}
impl<'a, T> FusedIterator for Seqi<'a, T> {}

// ----------------------------------------------------------------------------

impl<T> Array<T> {
    /// Returns a lazy sequence of the elements of `self`, in increasing index
    /// order.
    ///
    /// ```
    /// use std::cell::Cell;
    /// use fixarray::Array;
    /// let a = Array::init(3, Cell::new).unwrap();
    /// let seq = a.to_seq();
    /// a[2].set(20);
    /// let values: Vec<usize> = seq.clone().map(Cell::get).collect();
    /// assert_eq!(values, [0, 1, 20]);
    /// // Restart the sequence.
    /// assert_eq!(seq.count(), 3);
    /// ```
    pub fn to_seq(&self) -> Seq<'_, T> { Seq {array: self, next: 0} }

    /// Like [`to_seq()`] but also yields the index of each element.
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::new(["apple", "body"]);
    /// let pairs: Vec<_> = a.to_seqi().collect();
    /// assert_eq!(pairs, [(0, &"apple"), (1, &"body")]);
    /// ```
    ///
    /// [`to_seq()`]: Self::to_seq()
    pub fn to_seqi(&self) -> Seqi<'_, T> { Seqi(self.to_seq()) }

    /// Constructs an `Array` from all the elements of `seq`, in order.
    ///
    /// ```
    /// use fixarray::Array;
    /// let a = Array::of_seq((1..=4).map(|x| x * 10));
    /// assert_eq!(a.as_ref(), [10, 20, 30, 40]);
    /// ```
    pub fn of_seq(seq: impl IntoIterator<Item=T>) -> Self {
        Self::of_list(seq.into_iter().collect())
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self { Self::of_seq(iter) }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = Seq<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.to_seq() }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { Vec::from(self).into_iter() }
}

// ----------------------------------------------------------------------------
