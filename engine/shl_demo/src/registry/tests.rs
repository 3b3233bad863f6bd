use pretty_assertions::assert_eq;
use shl_core::fields;

use super::*;
use crate::capacity::MAX_TABLE_SIZE;
use crate::components::{Animated, Animation, Draw, Geometry, Material, Name, Node};

fn draw(index: u32) -> ToRecord<<Draw as EntityType>::Components> {
    fields![
        Name(format!("draw {index}")),
        Material { index },
        Geometry { index }
    ]
}

fn animated() -> ToRecord<<Animated as EntityType>::Components> {
    fields![Name("clip".to_owned()), Animation::default()]
}

#[test]
fn test_insert_and_get() {
    let mut registry = Registry::<Draw>::new();
    let first = registry.insert(draw(1)).unwrap();
    let second = registry.insert(draw(2)).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(first.entity_index, 0);
    assert_eq!(second.entity_index, 1);
    assert_eq!(first.type_index, 1);

    let entity = registry.get(second).unwrap();
    assert_eq!(entity.handle(), second);
    assert_eq!(entity.component::<Material>(), Some(Material { index: 2 }));
}

#[test]
fn test_get_mut_updates_in_place() {
    let mut registry = Registry::<Draw>::new();
    let handle = registry.insert(draw(1)).unwrap();
    registry.get_mut(handle).unwrap().update(Geometry { index: 7 });
    assert_eq!(
        registry.get(handle).unwrap().component::<Geometry>(),
        Some(Geometry { index: 7 })
    );
}

#[test]
fn test_erase_makes_handle_stale() {
    let mut registry = Registry::<Draw>::new();
    let handle = registry.insert(draw(1)).unwrap();

    let erased = registry.erase(handle).unwrap();
    assert_eq!(erased.component::<Material>(), Some(Material { index: 1 }));
    assert!(registry.is_empty());
    assert!(registry.get(handle).is_none());
    assert!(registry.erase(handle).is_none());
}

#[test]
fn test_reused_slot_gets_new_generation() {
    let mut registry = Registry::<Draw>::new();
    let old = registry.insert(draw(1)).unwrap();
    registry.erase(old);
    let new = registry.insert(draw(2)).unwrap();

    assert_eq!(new.entity_index, old.entity_index);
    assert_eq!(new.generation, old.generation + 1);
    assert!(!registry.contains(old));
    assert_eq!(
        registry.get(new).unwrap().component::<Material>(),
        Some(Material { index: 2 })
    );
}

#[test]
fn test_handle_of_other_entity_type_is_rejected() {
    let mut draws = Registry::<Draw>::new();
    let mut animations = Registry::<Animated>::new();
    let handle = draws.insert(draw(1)).unwrap();
    animations.insert(animated()).unwrap();

    assert!(animations.get(handle).is_none());
}

#[test]
fn test_full_registry() {
    let mut registry = Registry::<Animated>::new();
    assert_eq!(Registry::<Animated>::CAPACITY, 1024);
    assert_eq!(registry.capacity(), 1024);
    for _ in 0..Registry::<Animated>::CAPACITY {
        registry.insert(animated()).unwrap();
    }

    let err = registry.insert(animated()).unwrap_err();
    assert_eq!(
        err,
        RegistryError::Full {
            entity: "Animated",
            capacity: 1024,
        }
    );
    assert_eq!(err.to_string(), "registry for `Animated` is full (1024 entities)");
}

#[test]
fn test_erase_frees_capacity() {
    let mut registry = Registry::<Animated>::new();
    let mut last = None;
    for _ in 0..Registry::<Animated>::CAPACITY {
        last = Some(registry.insert(animated()).unwrap());
    }
    registry.erase(last.unwrap());
    assert!(registry.insert(animated()).is_ok());
    assert_eq!(registry.iter().count(), Registry::<Animated>::CAPACITY);
}

#[test]
fn test_limit_bounds_capacity() {
    let mut registry = Registry::<Draw>::with_limit(2).unwrap();
    assert_eq!(registry.capacity(), 2);
    registry.insert(draw(1)).unwrap();
    registry.insert(draw(2)).unwrap();
    assert_eq!(
        registry.insert(draw(3)).unwrap_err(),
        RegistryError::Full {
            entity: "Draw",
            capacity: 2,
        }
    );
}

#[test]
fn test_default_limit_is_max_table_size() {
    assert_eq!(Registry::<Node>::new().capacity(), 1 << 20);
    assert_eq!(
        Registry::<Node>::with_limit(MAX_TABLE_SIZE).unwrap().capacity(),
        1 << 20
    );
    assert_eq!(
        Registry::<Animated>::with_limit(MAX_TABLE_SIZE).unwrap().capacity(),
        1024
    );
}

#[test]
fn test_limit_above_max_table_size_is_rejected() {
    let err = Registry::<Node>::with_limit(MAX_TABLE_SIZE + 1).err();
    assert_eq!(
        err,
        Some(RegistryError::LimitTooLarge {
            limit: MAX_TABLE_SIZE + 1,
            max: MAX_TABLE_SIZE,
        })
    );
}
