//! Per-member function application and list restructuring.
//!
//! A function object is a type implementing [`Apply<X>`] for the member types
//! it accepts. It sees nothing but its argument, and runs when the compiler
//! normalizes the resulting type. [`Transform<L, F>`] applies `F` to every
//! member of `L`, preserving order and length.
//!
//! Constant-to-constant functions are declared with
//! [`value_fn!`](crate::value_fn). List-to-member functions ([`TakeFront`],
//! [`TakeBack`]) pull one member out of each sub-list of a list of lists.

use crate::query::{First, Last};
use crate::{Cons, Nil, TypeList};

/// A definition-time function from type `X` to [`Apply::Output`].
pub trait Apply<X> {
    type Output;
}

/// Lists that `F` can be applied to member-wise.
pub trait Map<F>: TypeList {
    type Output: TypeList;
}

impl<F> Map<F> for Nil {
    type Output = Nil;
}

impl<F, H, T> Map<F> for Cons<H, T>
where
    F: Apply<H>,
    T: Map<F>,
{
    type Output = Cons<<F as Apply<H>>::Output, <T as Map<F>>::Output>;
}

/// `F` applied to every member of `L`.
pub type Transform<L, F> = <L as Map<F>>::Output;

/// Function object selecting the first member of a list.
pub struct TakeFront;

impl<L: First> Apply<L> for TakeFront {
    type Output = L::First;
}

/// Function object selecting the last member of a list.
pub struct TakeBack;

impl<L: Last> Apply<L> for TakeBack {
    type Output = L::Last;
}

/// Declare a constant-to-constant function object.
///
/// ```
/// use shl_core::{sum, value_fn, values, Transform};
///
/// value_fn! {
///     /// Triples its argument.
///     pub Triple = |x| x * 3;
/// }
///
/// assert_eq!(sum::<Transform<values![1, 2], Triple>>(), 9);
/// ```
///
/// The body is a `const` expression over `x: usize`. The generated type
/// doubles as the function object (`Triple`) and as its result for a given
/// argument (`Triple<C>`), which is the constant the body evaluates to.
#[macro_export]
macro_rules! value_fn {
    ($(#[$meta:meta])* $vis:vis $name:ident = |$x:ident| $body:expr;) => {
        $(#[$meta])*
        $vis struct $name<C = ()>(::core::marker::PhantomData<fn() -> C>);

        impl<C: $crate::Constant> $crate::Constant for $name<C> {
            const VALUE: usize = {
                let $x: usize = <C as $crate::Constant>::VALUE;
                $body
            };
        }

        impl<C: $crate::Constant> $crate::Apply<C> for $name {
            type Output = $name<C>;
        }
    };
}

value_fn! {
    /// `x * x`.
    pub Square = |x| x * x;
}

value_fn! {
    /// `1 << x`: a bit count turned into a capacity.
    pub Exp2 = |x| 1 << x;
}

/// Lists that can have list `R` appended.
pub trait Append<R> {
    type Output;
}

impl<R> Append<R> for Nil {
    type Output = R;
}

impl<H, T: Append<R>, R> Append<R> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
}

/// Members of `A` followed by members of `B`.
pub type Concat<A, B> = <A as Append<B>>::Output;

/// Lists of lists that can be flattened into one list.
pub trait Flatten {
    type Output;
}

impl Flatten for Nil {
    type Output = Nil;
}

impl<H, T> Flatten for Cons<H, T>
where
    T: Flatten,
    H: Append<<T as Flatten>::Output>,
{
    type Output = <H as Append<<T as Flatten>::Output>>::Output;
}

/// Members of every sub-list of `L`, in order.
pub type Flat<L> = <L as Flatten>::Output;

#[cfg(test)]
mod tests;
