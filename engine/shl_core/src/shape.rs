//! Descriptor primitives: shapes, constants and type-level positions.
//!
//! - A *shape* is any `'static` type with a [`ShapeId`]. User types get one
//!   with `#[derive(Shape)]`.
//! - A *constant* is a type carrying a `usize` fixed at definition time.
//!   [`Value<N>`] is the literal constant; named constants use
//!   `#[derive(Constant)]`.
//! - An *ordinal* ([`Here`], [`There<I>`]) is a type-level position, inferred
//!   by the compiler when selecting a record field or union variant.

use std::marker::PhantomData;

use crate::ShapeId;

/// A distinct record field type with a definition-time identity.
pub trait Shape: 'static {
    /// Identity, compared with [`ShapeId::same`].
    const ID: ShapeId;
    /// Human-readable name, for diagnostics only.
    const NAME: &'static str;
}

/// An integral value fixed at definition time.
pub trait Constant {
    const VALUE: usize;
}

/// The literal constant `N`.
///
/// A `Value` is also a shape whose identity is derived from `N`, so value
/// lists can be queried with `has` and `index_of`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Value<const N: usize>;

impl<const N: usize> Constant for Value<N> {
    const VALUE: usize = N;
}

impl<const N: usize> Shape for Value<N> {
    const ID: ShapeId = ShapeId::of("shl_core::Value").combine(ShapeId::from_raw(N as u64));
    const NAME: &'static str = "Value";
}

/// Position of a type-level ordinal.
pub trait Ordinal {
    const ORDINAL: usize;
}

/// Ordinal 0: the head of a list.
#[derive(Copy, Clone, Debug, Default)]
pub struct Here;

/// Ordinal `I + 1`: somewhere in the tail of a list.
pub struct There<I>(PhantomData<fn() -> I>);

impl Ordinal for Here {
    const ORDINAL: usize = 0;
}

impl<I: Ordinal> Ordinal for There<I> {
    const ORDINAL: usize = I::ORDINAL + 1;
}

#[cfg(test)]
mod tests;
