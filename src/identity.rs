use std::rc::{Rc};
use std::sync::{Arc};

/// Physical equality, as opposed to the structural equality of [`PartialEq`].
///
/// Two shared pointers are identical if they point at the same allocation,
/// even if another value compares equal. Scalars have no identity apart from
/// their value, so for them `same()` is `==`.
///
/// Used by [`Array::memq()`].
///
/// [`Array::memq()`]: super::Array::memq()
///
/// ```
/// use std::rc::Rc;
/// use fixarray::Identity;
/// let x = Rc::new(String::from("apple"));
/// let y = Rc::new(String::from("apple"));
/// assert!(x.same(&x.clone()));
/// assert!(!x.same(&y));
/// ```
pub trait Identity {
    /// Returns `true` if `self` and `other` are the same object.
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for Rc<T> {
    #[inline(always)]
    fn same(&self, other: &Self) -> bool { Rc::ptr_eq(self, other) }
}

impl<T: ?Sized> Identity for Arc<T> {
    #[inline(always)]
    fn same(&self, other: &Self) -> bool { Arc::ptr_eq(self, other) }
}

impl<'a, T: ?Sized> Identity for &'a T {
    #[inline(always)]
    fn same(&self, other: &Self) -> bool { std::ptr::eq(*self, *other) }
}

impl<'a, T: ?Sized> Identity for &'a mut T {
    #[inline(always)]
    fn same(&self, other: &Self) -> bool { std::ptr::eq(&**self, &**other) }
}

impl<T: Identity> Identity for Option<T> {
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(x), Some(y)) => x.same(y),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! impl_identity_by_value {
    ($($t:ty),*) => {
        $(
            impl Identity for $t {
                #[inline(always)]
                fn same(&self, other: &Self) -> bool { self == other }
            }
        )*
    };
}

impl_identity_by_value!(bool, char, ());
impl_identity_by_value!(i8, i16, i32, i64, i128, isize);
impl_identity_by_value!(u8, u16, u32, u64, u128, usize);

// ----------------------------------------------------------------------------
