//! Component shapes and the entity types built from them.
//!
//! An entity type is a named shape carrying the list of components every
//! entity of that type holds, in storage order.

use shl_core::{assert_distinct, shapes, Shape, ShapeList, TaggedUnion, ToPointers, ToUnion};

/// Display name of an entity.
#[derive(Shape, Clone, Debug, Default, PartialEq)]
pub struct Name(pub String);

#[derive(Shape, Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Rotation as a quaternion.
#[derive(Shape, Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    pub i: f32,
    pub j: f32,
    pub k: f32,
    pub r: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            i: 0.0,
            j: 0.0,
            k: 0.0,
            r: 1.0,
        }
    }
}

#[derive(Shape, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Material {
    pub index: u32,
}

#[derive(Shape, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Geometry {
    pub index: u32,
}

/// Keyframes: sample times and the values at those times.
#[derive(Shape, Clone, Debug, Default, PartialEq)]
pub struct Animation {
    pub times: Vec<f32>,
    pub values: Vec<f32>,
}

/// Every component shape, in declaration order.
pub type Components = shapes![Name, Position, Orientation, Material, Geometry, Animation];

/// A borrowed component of any shape.
pub type ComponentRef<'a> = ToUnion<ToPointers<'a, Components>>;

assert_distinct!(Components);

/// Name of the component a [`ComponentRef`] points to.
pub fn component_name(component: &ComponentRef<'_>) -> &'static str {
    <Components as ShapeList>::IDS.name(component.tag())
}

/// A named entity type.
pub trait EntityType: Shape {
    /// The components of this entity type, in storage order.
    type Components: ShapeList;
}

/// A scene graph node.
#[derive(Shape)]
pub struct Node;

impl EntityType for Node {
    type Components = shapes![Name, Position, Orientation];
}

/// Something to draw.
#[derive(Shape)]
pub struct Draw;

impl EntityType for Draw {
    type Components = shapes![Name, Material, Geometry];
}

/// An animation driver.
#[derive(Shape)]
pub struct Animated;

impl EntityType for Animated {
    type Components = shapes![Name, Animation];
}

/// Every entity type. A handle's type index is a position in this list.
pub type EntityTypes = shapes![Node, Draw, Animated];

assert_distinct!(EntityTypes);
