//! Sorting [`Array`]s in place.
//!
//! All three entry points take a comparison function `cmp`. It must be a
//! total preorder: `cmp(x, y)` is `Greater` exactly when `cmp(y, x)` is
//! `Less`, and "not `Less`" is transitive. This is not checked. Afterwards,
//! `cmp(a[i], a[j])` is not `Greater` whenever `i <= j`.
//!
//! If `cmp` panics, the array holds some permutation of its original
//! elements; none are lost or duplicated.

use std::cmp::{Ordering};

use super::{Array};

/// Runs shorter than this are sorted by insertion sort in
/// [`Array::stable_sort()`].
pub const STABLE_SORT_CUTOFF: usize = 5;

impl<T> Array<T> {
    /// Sort `self` in place using heap sort.
    ///
    /// Uses constant auxiliary space, on the heap and on the stack. Equal
    /// elements may be reordered.
    ///
    /// ```
    /// use fixarray::Array;
    /// let mut a = Array::new([3, 1, 4, 1, 5, 9, 2, 6]);
    /// a.sort(|x, y| x.cmp(y));
    /// assert_eq!(a.as_ref(), [1, 1, 2, 3, 4, 5, 6, 9]);
    /// ```
    pub fn sort(&mut self, mut cmp: impl FnMut(&T, &T) -> Ordering) {
        tracing::trace!(length = self.length(), "heap sort");
        heap_sort(self.as_mut(), &mut cmp);
    }

    /// Sort `self` in place using merge sort, keeping equal elements in their
    /// original order.
    ///
    /// Uses auxiliary space proportional to `self.length()`.
    ///
    /// ```
    /// use fixarray::Array;
    /// let mut a = Array::new([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
    /// a.stable_sort(|x, y| x.0.cmp(&y.0));
    /// assert_eq!(a.as_ref(), [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    /// ```
    pub fn stable_sort(&mut self, mut cmp: impl FnMut(&T, &T) -> Ordering) {
        tracing::trace!(length = self.length(), "merge sort");
        let items: &mut [T] = self.as_mut();
        // Sort a permutation, so that a panic in `cmp` leaves `items` alone.
        let order = merge_sort((0..items.len()).collect(), &mut |&i: &usize, &j: &usize| cmp(&items[i], &items[j]));
        permute(items, order);
    }

    /// Sort `self` in place using whichever of [`sort()`] and
    /// [`stable_sort()`] is faster. Currently that is `stable_sort()`.
    ///
    /// [`sort()`]: Self::sort()
    /// [`stable_sort()`]: Self::stable_sort()
    pub fn fast_sort(&mut self, cmp: impl FnMut(&T, &T) -> Ordering) {
        self.stable_sort(cmp)
    }
}

// ----------------------------------------------------------------------------

/// Returns the index of the largest child of `i` in a ternary heap of length
/// `length`, if `i` has any children.
fn max_child<T>(
    items: &[T],
    length: usize,
    i: usize,
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> Option<usize> {
    let first = i.checked_mul(3)?.checked_add(1)?;
    if first >= length { return None; }
    let mut best = first;
    for j in (first + 1)..std::cmp::min(first + 3, length) {
        if cmp(&items[j], &items[best]) == Ordering::Greater { best = j; }
    }
    Some(best)
}

/// Move `items[i]` down the heap `items[..length]` until it is no smaller
/// than its children.
fn sift_down<T>(
    items: &mut [T],
    length: usize,
    mut i: usize,
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) {
    while let Some(j) = max_child(items, length, i, cmp) {
        if cmp(&items[j], &items[i]) != Ordering::Greater { return; }
        items.swap(i, j);
        i = j;
    }
}

fn heap_sort<T>(items: &mut [T], cmp: &mut impl FnMut(&T, &T) -> Ordering) {
    let length = items.len();
    if length < 2 { return; }
    for i in (0..=(length - 2) / 3).rev() { sift_down(items, length, i, cmp); }
    for end in (1..length).rev() {
        items.swap(0, end);
        sift_down(items, end, 0, cmp);
    }
}

// ----------------------------------------------------------------------------

fn insertion_sort<U>(items: &mut [U], cmp: &mut impl FnMut(&U, &U) -> Ordering) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Stable top-down merge sort.
fn merge_sort<U>(mut items: Vec<U>, cmp: &mut impl FnMut(&U, &U) -> Ordering) -> Vec<U> {
    if items.len() <= STABLE_SORT_CUTOFF {
        insertion_sort(&mut items, cmp);
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, cmp);
    let right = merge_sort(right, cmp);
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(x), Some(y)) => cmp(x, y) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }
    merged
}

/// Rearrange `items` so that `items[k]` becomes the old `items[order[k]]`.
///
/// `order` must be a permutation of `0..items.len()`.
fn permute<T>(items: &mut [T], mut order: Vec<usize>) {
    debug_assert_eq!(order.len(), items.len());
    for start in 0..order.len() {
        let mut i = start;
        while order[i] != start {
            let j = order[i];
            items.swap(i, j);
            order[i] = i;
            i = j;
        }
        order[i] = i;
    }
}

// ----------------------------------------------------------------------------
