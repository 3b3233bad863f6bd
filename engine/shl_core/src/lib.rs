//! Shapelist - Definition-Time Type Lists
//!
//! This crate contains the list engine behind shape-keyed component storage:
//! - Shapes and their identities (`ShapeId`)
//! - Type-level lists of shapes (`shapes!`) and of constants (`values!`)
//! - Queries: membership, position, front, back
//! - Transformations: member-wise function application, flattening
//! - Structural conversions: list to record, pointer list, tagged union
//! - Keyed tables with a default entry
//! - Aggregation: summing value lists
//!
//! # Evaluation Model
//!
//! Every operation is resolved by the compiler. Lists are never
//! instantiated; a derived list is a new type, and derived values are
//! associated constants. Nothing here allocates or does work at run time
//! except the records and unions built from a list, and the validation pass.
//!
//! # Failure Model
//!
//! Malformed queries fail the build:
//! - Absent shapes, empty-list queries and arity mismatches do not compile.
//! - Duplicate shapes in a key set are accepted (first match wins) unless
//!   checked with `assert_distinct!` or reported by [`validate_key_set`].
//!
//! Generic types cannot derive an identity, since every instantiation would
//! share it:
//!
//! ```compile_fail
//! #[derive(shl_core::Shape)]
//! struct Slot<T>(T);
//! ```

// Derives emit `::shl_core::` paths, which must also resolve in this crate.
#[allow(unused_extern_crates)]
extern crate self as shl_core;

mod aggregate;
mod check;
mod convert;
mod id;
mod list;
mod query;
mod record;
mod shape;
mod table;
mod transform;
mod union;
mod validate;
mod values;

pub use shl_macros::{Constant, Shape};

pub use aggregate::{apply_then_sum, sum, Sum};
pub use check::self_check;
pub use convert::{ToPointers, ToRecord, ToUnion};
pub use id::ShapeId;
pub use list::{Cons, Nil, Pick, ShapeList, Source, TypeList, ValueList};
pub use query::{
    back_value, front_value, has, index_of, At, Back, First, Front, IndexOf, Last, Nth,
};
pub use record::{Fields, NoFields, Record, RecordLayout, Selector, ShapeLookup};
pub use shape::{Constant, Here, Ordinal, Shape, There, Value};
pub use table::{lookup_values, BatchLookup, Entry, Find, KeyedTable, Lookup, LookupIn, Resolve};
pub use transform::{
    Append, Apply, Concat, Exp2, Flat, Flatten, Map, Square, TakeBack, TakeFront, Transform,
};
pub use union::{Coprod, Inject, TaggedUnion, Void};
pub use validate::{defaulted_keys, validate_key_set, validate_table, SchemaError};
pub use values::{ShapeIds, Values, MAX_LEN};

/// Compile-time assertion that a type has a specific size.
///
/// Lists and the descriptors built from them are expected to stay
/// zero-sized; records are expected to cost exactly their fields.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

static_assert_size!(Nil, 0);
static_assert_size!(Cons<Value<1>, Nil>, 0);
static_assert_size!(Fields<u32, Fields<u16, NoFields>>, 8);
