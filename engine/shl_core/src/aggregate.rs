//! Folding value lists into a single constant.
//!
//! Addition over `usize` is associative and commutative, so the fold order
//! does not change the result; it is still performed left to right.
//! Overflow fails the build.

use std::marker::PhantomData;

use crate::transform::{Map, Transform};
use crate::ValueList;

/// The sum of the constants of `L`.
pub struct Sum<L>(PhantomData<fn() -> L>);

impl<L: ValueList> Sum<L> {
    pub const VALUE: usize = L::VALUES.sum();
}

/// Sum of the constants of `L`; 0 for the empty list.
///
/// ```
/// use shl_core::{sum, values};
///
/// const TOTAL: usize = sum::<values![1, 2, 3, 4]>();
/// assert_eq!(TOTAL, 10);
/// ```
pub const fn sum<L: ValueList>() -> usize {
    Sum::<L>::VALUE
}

/// `sum(transform(L, F))`.
pub const fn apply_then_sum<L, F>() -> usize
where
    L: Map<F>,
    Transform<L, F>: ValueList,
{
    Sum::<Transform<L, F>>::VALUE
}

/// Lift constants into a value list and apply `F` to each:
/// `map_values![Square; 1, 2, 3, 4]`.
#[macro_export]
macro_rules! map_values {
    ($f:ty; $($value:expr),* $(,)?) => {
        $crate::Transform<$crate::values![$($value),*], $f>
    };
}
