//! A pure-Rust library providing fixed-length arrays.
//!
//! [`Array<T>`] is a zero-indexed, mutable collection of `T`s whose length is
//! chosen when it is constructed and never changes afterwards. The `T` values
//! are stored in a [`Box<[T]>`], so there is no spare capacity and no way to
//! push or pop.
//!
//! Every operation that takes an index, a range or a length checks it, and
//! returns [`InvalidArgument`] if it is out of bounds. Nothing is clamped or
//! wrapped. The exceptions are [`Array::unsafe_get()`] and
//! [`Array::unsafe_set()`], which are for callers that have already proved
//! the index valid, and the [`std::ops::Index`] implementations, which panic
//! like slices do.
//!
//! ```
//! use fixarray::Array;
//! let mut a = Array::init(5, |i| i * i).unwrap();
//! assert_eq!(a.fold_left(0, |acc, x| acc + x), 30);
//! a.blit_within(0, 2, 3).unwrap();
//! assert_eq!(a.as_ref(), [0, 1, 0, 1, 4]);
//! a.sort(|x, y| x.cmp(y));
//! assert_eq!(a.to_list(), vec![0, 0, 1, 1, 4]);
//! assert!(a.get(5).is_err());
//! ```
//!
//! Structural equality is [`PartialEq`], and is used by [`Array::mem()`].
//! Physical equality, used by [`Array::memq()`], is the [`Identity`] trait.
//!
//! [`FloatArray`] is a separate type for arrays of `f64`.
//!
//! Rejected arguments are reported through [`tracing`] at the `debug` level;
//! install a subscriber to see them.

mod error;
pub use error::{InvalidArgument, Result};

mod identity;
pub use identity::{Identity};

mod array;
pub use array::{Array, max_length};

pub mod sort;

pub mod seq;
pub use seq::{Seq, Seqi};

pub mod float;
pub use float::{FloatArray};
