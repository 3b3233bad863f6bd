//! Slot storage for the entities of one type.
//!
//! Erasing an entity bumps its slot's generation and recycles the slot.
//! Handles issued before the erase keep the old generation and resolve to
//! `None` from then on.
//!
//! A registry is built with a size limit of at most [`MAX_TABLE_SIZE`], the
//! default. It stores no more than the smaller of that limit and the entity
//! type's own maximum.

use shl_core::ToRecord;

use crate::capacity::{Capacity, MAX_TABLE_SIZE};
use crate::components::EntityType;
use crate::entity::{type_index, Entity, Handle};

/// Error returned when an entity cannot be stored.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("registry for `{entity}` is full ({capacity} entities)")]
    Full {
        entity: &'static str,
        capacity: usize,
    },
    #[error("registry limit {limit} exceeds the table maximum of {max} entities")]
    LimitTooLarge { limit: usize, max: usize },
}

struct Slot<E: EntityType> {
    generation: u16,
    entity: Option<Entity<E>>,
}

/// All live entities of type `E`.
pub struct Registry<E: EntityType> {
    slots: Vec<Slot<E>>,
    free: Vec<u32>,
    len: usize,
    capacity: usize,
}

impl<E: EntityType> Registry<E> {
    /// Most entities a registry of `E` can hold.
    pub const CAPACITY: usize = Capacity::<E>::MAX_SIZE;

    /// A registry limited to [`MAX_TABLE_SIZE`] entities.
    pub fn new() -> Self {
        Self::empty(MAX_TABLE_SIZE)
    }

    /// A registry limited to `limit` entities.
    pub fn with_limit(limit: usize) -> Result<Self, RegistryError> {
        if limit > MAX_TABLE_SIZE {
            return Err(RegistryError::LimitTooLarge {
                limit,
                max: MAX_TABLE_SIZE,
            });
        }
        Ok(Self::empty(limit))
    }

    fn empty(limit: usize) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
            capacity: limit.min(Self::CAPACITY),
        }
    }

    /// Most entities this registry holds at once.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store a new entity and return its handle.
    #[tracing::instrument(level = "trace", skip_all, fields(entity = E::NAME))]
    pub fn insert(&mut self, components: ToRecord<E::Components>) -> Result<Handle, RegistryError> {
        let entity_index = match self.free.pop() {
            Some(index) => index,
            None => self.grow()?,
        };
        let slot = &mut self.slots[entity_index as usize];
        let handle = Handle {
            entity_index,
            generation: slot.generation,
            type_index: type_index::<E>(),
        };
        slot.entity = Some(Entity::new(handle, components));
        self.len += 1;
        Ok(handle)
    }

    fn grow(&mut self) -> Result<u32, RegistryError> {
        let full = RegistryError::Full {
            entity: E::NAME,
            capacity: self.capacity,
        };
        if self.slots.len() >= self.capacity {
            tracing::warn!(entity = E::NAME, capacity = self.capacity, "registry is full");
            return Err(full);
        }
        let index = u32::try_from(self.slots.len()).map_err(|_| full)?;
        self.slots.push(Slot {
            generation: 0,
            entity: None,
        });
        Ok(index)
    }

    fn slot(&self, handle: Handle) -> Option<&Slot<E>> {
        if handle.type_index != type_index::<E>() {
            return None;
        }
        self.slots
            .get(handle.entity_index as usize)
            .filter(|slot| slot.generation == handle.generation)
    }

    fn slot_mut(&mut self, handle: Handle) -> Option<&mut Slot<E>> {
        if handle.type_index != type_index::<E>() {
            return None;
        }
        self.slots
            .get_mut(handle.entity_index as usize)
            .filter(|slot| slot.generation == handle.generation)
    }

    /// The entity behind `handle`, or `None` if the handle is stale.
    pub fn get(&self, handle: Handle) -> Option<&Entity<E>> {
        self.slot(handle)?.entity.as_ref()
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut Entity<E>> {
        self.slot_mut(handle)?.entity.as_mut()
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Remove the entity behind `handle`. Every copy of `handle` becomes
    /// stale.
    #[tracing::instrument(level = "trace", skip_all, fields(entity = E::NAME, index = handle.entity_index))]
    pub fn erase(&mut self, handle: Handle) -> Option<Entity<E>> {
        let slot = self.slot_mut(handle)?;
        let entity = slot.entity.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.entity_index);
        self.len -= 1;
        Some(entity)
    }

    /// Live entities in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity<E>> {
        self.slots.iter().filter_map(|slot| slot.entity.as_ref())
    }
}

impl<E: EntityType> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
