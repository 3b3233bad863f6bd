//! Closed tagged unions built from a list.
//!
//! The union form of `[A, B, C]` is `Coprod<A, Coprod<B, Coprod<C, Void>>>`.
//! Exactly one member is active; its discriminant is its position in the
//! list. [`Void`] has no values, so the union is closed: it can hold nothing
//! but the listed members.

use crate::{Cons, Here, Nil, There, TypeList};

/// Either the head member (`Head`) or one of the remaining members (`Tail`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Coprod<H, T> {
    Head(H),
    Tail(T),
}

/// The empty union.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Void {}

/// A closed tagged union.
pub trait TaggedUnion: Sized {
    /// The list this union was built from.
    type Shapes: TypeList;

    /// Number of members.
    const ARITY: usize;

    /// Position of the active member in the list.
    fn tag(&self) -> usize;
}

impl TaggedUnion for Void {
    type Shapes = Nil;

    const ARITY: usize = 0;

    fn tag(&self) -> usize {
        match *self {}
    }
}

impl<H, T: TaggedUnion> TaggedUnion for Coprod<H, T> {
    type Shapes = Cons<H, T::Shapes>;

    const ARITY: usize = T::ARITY + 1;

    fn tag(&self) -> usize {
        match self {
            Coprod::Head(_) => 0,
            Coprod::Tail(rest) => rest.tag() + 1,
        }
    }
}

/// Unions with member `S` at ordinal `I`.
pub trait Inject<S, I>: Sized {
    fn inject(value: S) -> Self;
    fn peek(&self) -> Option<&S>;
    fn peek_mut(&mut self) -> Option<&mut S>;
    fn extract(self) -> Result<S, Self>;
}

impl<S, T> Inject<S, Here> for Coprod<S, T> {
    fn inject(value: S) -> Self {
        Coprod::Head(value)
    }

    fn peek(&self) -> Option<&S> {
        match self {
            Coprod::Head(value) => Some(value),
            Coprod::Tail(_) => None,
        }
    }

    fn peek_mut(&mut self) -> Option<&mut S> {
        match self {
            Coprod::Head(value) => Some(value),
            Coprod::Tail(_) => None,
        }
    }

    fn extract(self) -> Result<S, Self> {
        match self {
            Coprod::Head(value) => Ok(value),
            tail @ Coprod::Tail(_) => Err(tail),
        }
    }
}

impl<H, T: Inject<S, I>, S, I> Inject<S, There<I>> for Coprod<H, T> {
    fn inject(value: S) -> Self {
        Coprod::Tail(T::inject(value))
    }

    fn peek(&self) -> Option<&S> {
        match self {
            Coprod::Head(_) => None,
            Coprod::Tail(rest) => rest.peek(),
        }
    }

    fn peek_mut(&mut self) -> Option<&mut S> {
        match self {
            Coprod::Head(_) => None,
            Coprod::Tail(rest) => rest.peek_mut(),
        }
    }

    fn extract(self) -> Result<S, Self> {
        match self {
            head @ Coprod::Head(_) => Err(head),
            Coprod::Tail(rest) => rest.extract().map_err(Coprod::Tail),
        }
    }
}

impl<H, T> Coprod<H, T> {
    /// Make `value` the active member. The ordinal `I` is inferred.
    pub fn new<S, I>(value: S) -> Self
    where
        Self: Inject<S, I>,
    {
        <Self as Inject<S, I>>::inject(value)
    }

    /// The active member, if it is of type `S`.
    pub fn get<S, I>(&self) -> Option<&S>
    where
        Self: Inject<S, I>,
    {
        <Self as Inject<S, I>>::peek(self)
    }

    pub fn get_mut<S, I>(&mut self) -> Option<&mut S>
    where
        Self: Inject<S, I>,
    {
        <Self as Inject<S, I>>::peek_mut(self)
    }

    /// The active member if it is of type `S`, else the union unchanged.
    pub fn take<S, I>(self) -> Result<S, Self>
    where
        Self: Inject<S, I>,
    {
        <Self as Inject<S, I>>::extract(self)
    }

    /// `true` if the active member is of type `S`.
    pub fn is<S, I>(&self) -> bool
    where
        Self: Inject<S, I>,
    {
        <Self as Inject<S, I>>::peek(self).is_some()
    }
}
