//! Type-level list containers.
//!
//! A list is a chain of zero-sized [`Cons`] cells ending in [`Nil`], written
//! with [`shapes!`](crate::shapes) or [`values!`](crate::values). Position in
//! the chain is the list's notion of index. Lists are never instantiated:
//! they only exist as types, and every derived list is a new type.
//!
//! Three traits describe what a list can do:
//! - [`TypeList`]: any members. Length and the structural conversions.
//! - [`ShapeList`]: every member is a [`Shape`]. Identity queries.
//! - [`ValueList`]: every member is a [`Constant`]. Value queries.

use std::marker::PhantomData;

use crate::record::{Fields, NoFields, RecordLayout};
use crate::union::{Coprod, TaggedUnion, Void};
use crate::{Constant, Ordinal, Shape, ShapeId, ShapeIds, There, Values};

/// The empty list.
#[derive(Copy, Clone, Debug, Default)]
pub struct Nil;

/// A list with head `H` and tail `T`.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

/// An ordered sequence of types.
pub trait TypeList {
    /// Number of members.
    const LEN: usize;

    /// Positional record holding one value per member.
    type Record: RecordLayout;

    /// Closed tagged union over the members.
    type Union: TaggedUnion;

    /// List of non-owning references, one per member.
    type Pointers<'a>: TypeList
    where
        Self: 'a;
}

impl TypeList for Nil {
    const LEN: usize = 0;
    type Record = NoFields;
    type Union = Void;
    type Pointers<'a> = Nil;
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = T::LEN + 1;
    type Record = Fields<H, T::Record>;
    type Union = Coprod<H, T::Union>;
    type Pointers<'a>
        = Cons<&'a H, T::Pointers<'a>>
    where
        Self: 'a;
}

/// A list whose members are all shapes.
///
/// A shape list is itself a shape: its identity combines its members' ids in
/// order, so lists of lists can be used as key sets.
pub trait ShapeList: TypeList + Shape {
    /// Member identities in list order.
    const IDS: ShapeIds;
}

impl Shape for Nil {
    const ID: ShapeId = ShapeId::of("shl_core::Nil");
    const NAME: &'static str = "Nil";
}

impl<H: Shape, T: Shape> Shape for Cons<H, T> {
    const ID: ShapeId = ShapeId::of("shl_core::Cons").combine(H::ID).combine(T::ID);
    const NAME: &'static str = "Cons";
}

impl ShapeList for Nil {
    const IDS: ShapeIds = ShapeIds::EMPTY;
}

impl<H: Shape, T: ShapeList> ShapeList for Cons<H, T> {
    const IDS: ShapeIds = T::IDS.prepend(H::ID, H::NAME);
}

/// A definition-time source of constants, addressed by position.
pub trait Source {
    const VALUES: Values;
}

/// The constant at ordinal `I` of source `Src`.
pub struct Pick<Src, I>(PhantomData<fn() -> (Src, I)>);

impl<Src: Source, I: Ordinal> Constant for Pick<Src, I> {
    const VALUE: usize = Src::VALUES.get(I::ORDINAL);
}

/// A list whose members are all constants.
pub trait ValueList: TypeList {
    /// Member values in list order.
    const VALUES: Values;

    /// A list with this list's arity whose member at ordinal `I + k` is the
    /// `k`-th constant of `Src`.
    type Reshaped<Src: Source, I: Ordinal>: ValueList;
}

impl ValueList for Nil {
    const VALUES: Values = Values::EMPTY;
    type Reshaped<Src: Source, I: Ordinal> = Nil;
}

impl<H: Constant, T: ValueList> ValueList for Cons<H, T> {
    const VALUES: Values = T::VALUES.prepend(H::VALUE);
    type Reshaped<Src: Source, I: Ordinal> = Cons<Pick<Src, I>, T::Reshaped<Src, There<I>>>;
}

/// Build a shape list type: `shapes![A, B, C]`.
#[macro_export]
macro_rules! shapes {
    () => { $crate::Nil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::shapes![$($rest),*]>
    };
}

/// Build a value list type: `values![1, 2, 3]`.
#[macro_export]
macro_rules! values {
    () => { $crate::Nil };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::Cons<$crate::Value<{ $head }>, $crate::values![$($rest),*]>
    };
}

#[cfg(test)]
mod tests;
