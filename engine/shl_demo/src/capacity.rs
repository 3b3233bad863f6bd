//! Storage capacities, declared as a keyed table of bit counts.
//!
//! Each entity type maps to `(segment bits, max bits)`: segments hold
//! `1 << segment_bits` entities and a registry holds at most
//! `1 << max_bits`. Entity types without an entry use the default.

use std::marker::PhantomData;

use shl_core::{
    apply_then_sum, back_value, defaulted_keys, front_value, table, validate_key_set,
    validate_table, values, BatchLookup, Exp2, Lookup, SchemaError, TakeBack, Transform,
};

use crate::components::{Animated, Components, Draw, EntityType, EntityTypes, Node};

/// Capacity bits per entity type.
pub type CapacityBits = table! {
    Node => values![12, 20],
    Draw => values![12, 20],
    Animated => values![8, 10],
};

/// Capacity bits for entity types missing from [`CapacityBits`].
pub type DefaultBits = values![10, 16];

/// The resolved `(segment bits, max bits)` of `E`.
pub type EntityBits<E> = Lookup<CapacityBits, E, DefaultBits>;

/// Largest number of entities over all registries.
pub const MAX_TABLE_SIZE: usize = apply_then_sum::<
    Transform<BatchLookup<CapacityBits, EntityTypes, DefaultBits>, TakeBack>,
    Exp2,
>();

/// Capacities of the registry for `E`.
pub struct Capacity<E>(PhantomData<fn() -> E>);

impl<E: EntityType> Capacity<E> {
    pub const SEGMENT_BITS: usize = front_value::<EntityBits<E>>();
    pub const MAX_BITS: usize = back_value::<EntityBits<E>>();
    pub const SEGMENT_SIZE: usize = 1 << Self::SEGMENT_BITS;
    pub const MAX_SIZE: usize = 1 << Self::MAX_BITS;
}

/// Check the schema's key sets and capacity table.
///
/// Entity types that fall back to [`DefaultBits`] are reported as warnings.
#[tracing::instrument(level = "debug", skip_all)]
pub fn validate_schema() -> Result<(), SchemaError> {
    validate_key_set::<Components>()?;
    validate_key_set::<EntityTypes>()?;
    validate_table::<CapacityBits, DefaultBits>()?;

    for entity in defaulted_keys::<CapacityBits, EntityTypes>() {
        tracing::warn!(entity, "entity type has no capacity entry, using the default");
    }

    tracing::debug!(max_table_size = MAX_TABLE_SIZE, "schema is valid");
    Ok(())
}
