use pretty_assertions::assert_eq;
use shl_core::fields;

use super::*;
use crate::components::{Animated, Animation, Draw, Geometry, Material, Name, Node, Orientation, Position};

fn node() -> Entity<Node> {
    let handle = Handle {
        entity_index: 3,
        generation: 1,
        type_index: type_index::<Node>(),
    };
    Entity::new(
        handle,
        fields![
            Name("camera".to_owned()),
            Position {
                x: 1.0,
                y: 2.0,
                z: 3.0
            },
            Orientation::default(),
        ],
    )
}

#[test]
fn test_type_index() {
    assert_eq!(type_index::<Node>(), 0);
    assert_eq!(type_index::<Draw>(), 1);
    assert_eq!(type_index::<Animated>(), 2);
}

#[test]
fn test_handle_index_is_type_index() {
    let entity = node();
    assert_eq!(entity.handle().index(), 0);
    assert_eq!(entity.handle().entity_index, 3);
}

#[test]
fn test_component_present() {
    let entity = node();
    assert_eq!(
        entity.component::<Position>(),
        Some(Position {
            x: 1.0,
            y: 2.0,
            z: 3.0
        })
    );
    assert_eq!(
        entity.component::<Name>(),
        Some(Name("camera".to_owned()))
    );
}

#[test]
fn test_component_absent() {
    let entity = node();
    assert_eq!(entity.component::<Material>(), None);
    assert_eq!(entity.component::<Animation>(), None);
}

#[test]
fn test_update_present_component() {
    let mut entity = node();
    entity.update(Position {
        x: 0.0,
        y: 0.0,
        z: -1.0,
    });
    assert_eq!(entity.component::<Position>().map(|p| p.z), Some(-1.0));
}

#[test]
fn test_update_absent_component_is_noop() {
    let mut entity = node();
    let before = entity.clone().into_data();
    entity.update(Geometry { index: 9 });
    assert_eq!(entity.data(), &before);
    assert_eq!(entity.component::<Geometry>(), None);
}
