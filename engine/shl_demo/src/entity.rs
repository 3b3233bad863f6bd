//! Entities: a handle plus one value per component of the entity type.

use shl_core::{index_of, Record, Shape, ShapeLookup, ToRecord, TypeList};

use crate::components::{EntityType, EntityTypes};

/// Reference to an entity stored in a registry.
///
/// The generation counter makes a handle to an erased entity stale, even
/// after its slot is reused.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Handle {
    /// Slot of the entity in its registry.
    pub entity_index: u32,
    pub generation: u16,
    /// Position of the entity type in [`EntityTypes`].
    pub type_index: u16,
}

shl_core::static_assert_size!(Handle, 8);

impl Handle {
    #[inline]
    pub fn index(self) -> u32 {
        u32::from(self.type_index)
    }
}

const _: () = assert!(<EntityTypes as TypeList>::LEN <= u16::MAX as usize);

/// Type index of `E`. An entity type missing from [`EntityTypes`] does not
/// compile.
#[allow(clippy::cast_possible_truncation)]
pub const fn type_index<E: EntityType>() -> u16 {
    index_of::<EntityTypes, E>() as u16
}

/// An entity of type `E`.
pub struct Entity<E: EntityType> {
    handle: Handle,
    data: Record<E::Components>,
}

impl<E: EntityType> Entity<E> {
    pub fn new(handle: Handle, components: ToRecord<E::Components>) -> Self {
        Self {
            handle,
            data: Record::new(components),
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn data(&self) -> &Record<E::Components> {
        &self.data
    }

    pub fn into_data(self) -> Record<E::Components> {
        self.data
    }
}

impl<E: EntityType> Entity<E>
where
    ToRecord<E::Components>: ShapeLookup,
{
    /// A copy of component `C`, or `None` if `E` has no such component.
    pub fn component<C: Shape + Clone>(&self) -> Option<C> {
        self.data.get::<C>().cloned()
    }

    /// Overwrite component `C`. Does nothing if `E` has no such component.
    pub fn update<C: Shape>(&mut self, component: C) {
        if !self.data.update(component) {
            tracing::trace!(
                entity = E::NAME,
                component = C::NAME,
                "update ignored, entity has no such component"
            );
        }
    }
}

impl<E: EntityType> Clone for Entity<E>
where
    ToRecord<E::Components>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            handle: self.handle,
            data: self.data.clone(),
        }
    }
}

impl<E: EntityType> std::fmt::Debug for Entity<E>
where
    ToRecord<E::Components>: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("type", &E::NAME)
            .field("handle", &self.handle)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests;
