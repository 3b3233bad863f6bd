//! Membership, position and end queries.
//!
//! Queries that can fail are definition-time failures, never runtime errors:
//! - [`index_of`] of an absent shape fails `const` evaluation.
//! - [`Front`], [`Back`] and [`At`] of an empty (or too short) list have no
//!   trait implementation, so the type does not resolve.
//!
//! ```compile_fail
//! use shl_core::{index_of, values, Value};
//!
//! const MISSING: usize = index_of::<values![1, 2, 3], Value<7>>();
//! ```
//!
//! ```compile_fail
//! use shl_core::{shapes, Front};
//!
//! type Nothing = Front<shapes![]>;
//! fn touch(_: Option<Nothing>) {}
//! ```
//!
//! ```compile_fail
//! use shl_core::{back_value, values};
//!
//! const LAST: usize = back_value::<values![]>();
//! ```

use std::marker::PhantomData;

use crate::{Cons, Constant, Here, Nil, Shape, ShapeList, There};

/// `true` if `S` is a member of `L`.
pub const fn has<L: ShapeList, S: Shape>() -> bool {
    L::IDS.contains(S::ID)
}

/// Position of the first occurrence of `S` in `L`.
///
/// Reading [`IndexOf::VALUE`] for a shape that is not a member fails the
/// build.
pub struct IndexOf<L, S>(PhantomData<fn() -> (L, S)>);

impl<L: ShapeList, S: Shape> IndexOf<L, S> {
    pub const VALUE: usize = match L::IDS.position(S::ID) {
        Some(index) => index,
        None => panic!("shape is not a member of the list"),
    };
}

/// 0-based position of the first occurrence of `S` in `L`.
///
/// ```
/// use shl_core::{index_of, values, Value};
///
/// const THIRD: usize = index_of::<values![10, 20, 30], Value<30>>();
/// assert_eq!(THIRD, 2);
/// ```
pub const fn index_of<L: ShapeList, S: Shape>() -> usize {
    IndexOf::<L, S>::VALUE
}

/// Lists with a first member.
pub trait First {
    type First;
}

impl<H, T> First for Cons<H, T> {
    type First = H;
}

/// Lists with a last member.
pub trait Last {
    type Last;
}

impl<H> Last for Cons<H, Nil> {
    type Last = H;
}

impl<H, N, T> Last for Cons<H, Cons<N, T>>
where
    Cons<N, T>: Last,
{
    type Last = <Cons<N, T> as Last>::Last;
}

/// Lists with a member at ordinal `I`.
pub trait Nth<I> {
    type Output;
}

impl<H, T> Nth<Here> for Cons<H, T> {
    type Output = H;
}

impl<H, T: Nth<I>, I> Nth<There<I>> for Cons<H, T> {
    type Output = T::Output;
}

/// First member of `L`.
pub type Front<L> = <L as First>::First;

/// Last member of `L`.
pub type Back<L> = <L as Last>::Last;

/// Member of `L` at ordinal `I`.
pub type At<L, I> = <L as Nth<I>>::Output;

/// Value of the first constant in `L`.
pub const fn front_value<L>() -> usize
where
    L: First,
    Front<L>: Constant,
{
    <Front<L> as Constant>::VALUE
}

/// Value of the last constant in `L`.
pub const fn back_value<L>() -> usize
where
    L: Last,
    Back<L>: Constant,
{
    <Back<L> as Constant>::VALUE
}

/// Fail the build if a shape list contains the same shape twice.
///
/// Key sets and table keys are assumed duplicate-free; this turns the
/// assumption into a definition-time check.
///
/// ```compile_fail
/// use shl_core::{assert_distinct, values};
///
/// assert_distinct!(values![1, 2, 1]);
/// ```
#[macro_export]
macro_rules! assert_distinct {
    ($list:ty) => {
        const _: () = <$list as $crate::ShapeList>::IDS.assert_distinct();
    };
}
