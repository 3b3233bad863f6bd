//! Structural conversions of a list into concrete layouts.
//!
//! These look only at the member types, never at values, and each derived
//! form names its source list (`Shapes`), so the list's order and membership
//! are recoverable from any of them.

use crate::TypeList;

/// Positional record of `L`: field `i` holds one value of member `i`.
pub type ToRecord<L> = <L as TypeList>::Record;

/// One non-owning reference type per member of `L`, in order.
pub type ToPointers<'a, L> = <L as TypeList>::Pointers<'a>;

/// Closed tagged union over the members of `L`.
pub type ToUnion<L> = <L as TypeList>::Union;
