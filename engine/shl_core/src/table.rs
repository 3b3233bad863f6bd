//! Keyed tables with default resolution.
//!
//! A keyed table is a list of [`Entry<K, V>`] pairs mapping a key shape to a
//! value list, written with [`table!`](crate::table). [`Lookup<T, K, D>`]
//! resolves key `K`: the values of the first entry for `K`, or the default
//! `D` when `T` has no such entry. Absence is never an error. Unlisted keys
//! silently adopt the default, so a schema can grow new keys without
//! touching every table.
//!
//! The result of a lookup always has the default's arity. An entry whose
//! value list is longer or shorter than the default fails the build when it
//! is resolved:
//!
//! ```compile_fail
//! use shl_core::{lookup_values, table, values, Value};
//!
//! type Sizes = table! { Value<1> => values![12, 20, 4] };
//! const BAD: usize = lookup_values::<Sizes, Value<1>, values![10, 16]>().len();
//! ```

use std::marker::PhantomData;

use crate::transform::{Apply, Transform};
use crate::{Cons, Here, Nil, Shape, ShapeIds, Source, TypeList, ValueList, Values};

/// One table entry: key shape `K` paired with value list `V`.
pub struct Entry<K, V>(PhantomData<fn() -> (K, V)>);

/// A list of [`Entry`] pairs.
pub trait KeyedTable: TypeList {
    /// Entry keys in table order.
    const KEYS: ShapeIds;
    /// Length of each entry's value list, in table order.
    const ARITIES: Values;
}

impl KeyedTable for Nil {
    const KEYS: ShapeIds = ShapeIds::EMPTY;
    const ARITIES: Values = Values::EMPTY;
}

impl<K: Shape, V: ValueList, T: KeyedTable> KeyedTable for Cons<Entry<K, V>, T> {
    const KEYS: ShapeIds = T::KEYS.prepend(K::ID, K::NAME);
    const ARITIES: Values = T::ARITIES.prepend(V::LEN);
}

/// Tables that can be searched for key `K`.
pub trait Find<K> {
    /// Values of the first entry for `K`, if any.
    const FOUND: Option<Values>;
}

impl<K> Find<K> for Nil {
    const FOUND: Option<Values> = None;
}

impl<K: Shape, EK: Shape, V: ValueList, T: Find<K>> Find<K> for Cons<Entry<EK, V>, T> {
    const FOUND: Option<Values> = if EK::ID.same(K::ID) {
        Some(V::VALUES)
    } else {
        T::FOUND
    };
}

/// The resolved values of key `K` in table `T` with default `D`.
pub struct Resolve<T, K, D>(PhantomData<fn() -> (T, K, D)>);

impl<T: Find<K>, K: Shape, D: ValueList> Source for Resolve<T, K, D> {
    const VALUES: Values = match T::FOUND {
        Some(values) => {
            if values.len() != D::LEN {
                panic!("table entry and default differ in arity");
            }
            values
        }
        None => D::VALUES,
    };
}

/// The value list resolved for key `K`: the first entry of `T` for `K`, else
/// `D` unchanged.
pub type Lookup<T, K, D> = <D as ValueList>::Reshaped<Resolve<T, K, D>, Here>;

/// The values resolved for key `K`, as a buffer.
pub const fn lookup_values<T, K, D>() -> Values
where
    T: Find<K>,
    K: Shape,
    D: ValueList,
{
    <Resolve<T, K, D> as Source>::VALUES
}

/// Function object resolving a key against table `T` with default `D`.
pub struct LookupIn<T, D>(PhantomData<fn() -> (T, D)>);

impl<K: Shape, T: Find<K>, D: ValueList> Apply<K> for LookupIn<T, D> {
    type Output = Lookup<T, K, D>;
}

/// One resolved value list per key of `Keys`, in order. Each key missing
/// from `T` independently receives `D`.
pub type BatchLookup<T, Keys, D> = Transform<Keys, LookupIn<T, D>>;

/// Build a keyed table type: `table! { Key => values![..], .. }`.
#[macro_export]
macro_rules! table {
    ($($key:ty => $values:ty),* $(,)?) => {
        $crate::shapes![$($crate::Entry<$key, $values>),*]
    };
}
