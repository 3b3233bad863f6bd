//! Positional records built from a list.
//!
//! The record form of a list `[A, B, C]` is `Fields<A, Fields<B, Fields<C,
//! NoFields>>>`: field `i` holds one value of member `i`. [`Record<L>`] wraps
//! that layout and adds shape-addressed access:
//!
//! - [`Record::field`] selects by type with an inferred ordinal. Asking for a
//!   shape that is not in the list does not compile.
//! - [`Record::get`] looks up by shape identity and yields `None` for shapes
//!   that are not in the list, never a value of another shape.
//!
//! ```
//! use shl_core::{fields, shapes, Record, Shape};
//!
//! #[derive(Shape, Debug, PartialEq)]
//! struct Position(f32, f32, f32);
//!
//! #[derive(Shape, Debug, PartialEq)]
//! struct Material(u32);
//!
//! #[derive(Shape, Debug, PartialEq)]
//! struct Geometry(u32);
//!
//! let mut record = Record::<shapes![Position, Material]>::new(fields![
//!     Position(0.0, 1.0, 2.0),
//!     Material(7),
//! ]);
//!
//! assert_eq!(record.field::<Material, _>(), &Material(7));
//! assert_eq!(record.get::<Geometry>(), None);
//! assert!(record.update(Material(9)));
//! assert_eq!(record.get::<Material>(), Some(&Material(9)));
//! ```

use std::any::{Any, TypeId};
use std::fmt;

use crate::{Cons, Here, Nil, Shape, There, TypeList};

/// A record field holding `head`, followed by the remaining fields.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fields<H, T> {
    pub head: H,
    pub tail: T,
}

/// The end of a record.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoFields;

/// A positional record layout.
pub trait RecordLayout {
    /// The list this layout was built from.
    type Shapes: TypeList;

    /// The same layout holding a reference to each field.
    type Refs<'a>: RecordLayout
    where
        Self: 'a;

    const ARITY: usize;

    fn refs(&self) -> Self::Refs<'_>;
}

impl RecordLayout for NoFields {
    type Shapes = Nil;
    type Refs<'a> = NoFields;

    const ARITY: usize = 0;

    fn refs(&self) -> Self::Refs<'_> {
        NoFields
    }
}

impl<H, T: RecordLayout> RecordLayout for Fields<H, T> {
    type Shapes = Cons<H, T::Shapes>;
    type Refs<'a>
        = Fields<&'a H, T::Refs<'a>>
    where
        Self: 'a;

    const ARITY: usize = T::ARITY + 1;

    fn refs(&self) -> Self::Refs<'_> {
        Fields {
            head: &self.head,
            tail: self.tail.refs(),
        }
    }
}

/// Layouts with a field of type `S` at ordinal `I`.
pub trait Selector<S, I> {
    fn select(&self) -> &S;
    fn select_mut(&mut self) -> &mut S;
}

impl<S, T> Selector<S, Here> for Fields<S, T> {
    fn select(&self) -> &S {
        &self.head
    }

    fn select_mut(&mut self) -> &mut S {
        &mut self.head
    }
}

impl<H, T: Selector<S, I>, S, I> Selector<S, There<I>> for Fields<H, T> {
    fn select(&self) -> &S {
        self.tail.select()
    }

    fn select_mut(&mut self) -> &mut S {
        self.tail.select_mut()
    }
}

/// Layouts whose fields are all shapes, searchable by shape identity.
pub trait ShapeLookup {
    /// The first field of shape `S`, if any.
    fn lookup<S: Shape>(&self) -> Option<&S>;
    fn lookup_mut<S: Shape>(&mut self) -> Option<&mut S>;
}

impl ShapeLookup for NoFields {
    fn lookup<S: Shape>(&self) -> Option<&S> {
        None
    }

    fn lookup_mut<S: Shape>(&mut self) -> Option<&mut S> {
        None
    }
}

impl<H: Shape, T: ShapeLookup> ShapeLookup for Fields<H, T> {
    fn lookup<S: Shape>(&self) -> Option<&S> {
        if TypeId::of::<H>() == TypeId::of::<S>() {
            (&self.head as &dyn Any).downcast_ref::<S>()
        } else {
            self.tail.lookup::<S>()
        }
    }

    fn lookup_mut<S: Shape>(&mut self) -> Option<&mut S> {
        if TypeId::of::<H>() == TypeId::of::<S>() {
            (&mut self.head as &mut dyn Any).downcast_mut::<S>()
        } else {
            self.tail.lookup_mut::<S>()
        }
    }
}

/// A record holding one value per member of `L`, in list order.
pub struct Record<L: TypeList> {
    fields: L::Record,
}

impl<L: TypeList> Record<L> {
    pub fn new(fields: L::Record) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &L::Record {
        &self.fields
    }

    pub fn into_fields(self) -> L::Record {
        self.fields
    }

    /// The field of shape `S`. The ordinal `I` is inferred.
    pub fn field<S, I>(&self) -> &S
    where
        L::Record: Selector<S, I>,
    {
        self.fields.select()
    }

    pub fn field_mut<S, I>(&mut self) -> &mut S
    where
        L::Record: Selector<S, I>,
    {
        self.fields.select_mut()
    }

    /// One reference per field, in list order: the pointer-list form.
    pub fn pointers(&self) -> <L::Record as RecordLayout>::Refs<'_> {
        self.fields.refs()
    }
}

impl<L: TypeList> Record<L>
where
    L::Record: ShapeLookup,
{
    /// The field of shape `S`, or `None` if `S` is not a member of `L`.
    pub fn get<S: Shape>(&self) -> Option<&S> {
        self.fields.lookup::<S>()
    }

    pub fn get_mut<S: Shape>(&mut self) -> Option<&mut S> {
        self.fields.lookup_mut::<S>()
    }

    /// Replace the field of shape `S`.
    ///
    /// Returns `false`, leaving the record untouched, if `S` is not a member
    /// of `L`.
    pub fn update<S: Shape>(&mut self, value: S) -> bool {
        match self.fields.lookup_mut::<S>() {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn contains<S: Shape>(&self) -> bool {
        self.get::<S>().is_some()
    }
}

impl<L: TypeList> Clone for Record<L>
where
    L::Record: Clone,
{
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<L: TypeList> Default for Record<L>
where
    L::Record: Default,
{
    fn default() -> Self {
        Self {
            fields: Default::default(),
        }
    }
}

impl<L: TypeList> PartialEq for Record<L>
where
    L::Record: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<L: TypeList> fmt::Debug for Record<L>
where
    L::Record: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Record").field(&self.fields).finish()
    }
}

/// Build a record layout value: `fields![a, b, c]`.
#[macro_export]
macro_rules! fields {
    () => { $crate::NoFields };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::Fields { head: $head, tail: $crate::fields![$($rest),*] }
    };
}
