//! Derived shapes get distinct identities, even when names collide.

use shl_core::{has, index_of, shapes, Shape};

#[derive(Shape)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Shape)]
pub enum Material {
    Opaque,
    Glass,
}

mod other {
    #[derive(shl_core::Shape)]
    pub struct Position;
}

type Keys = shapes![Position, Material];

const _: () = assert!(index_of::<Keys, Material>() == 1);
const _: () = assert!(!has::<Keys, other::Position>());
const _: () = assert!(!Position::ID.same(other::Position::ID));

fn local_marker() -> shl_core::ShapeId {
    #[derive(Shape)]
    struct Marker;
    Marker::ID
}

fn main() {
    #[derive(Shape)]
    struct Marker;

    assert_eq!(Position::NAME, other::Position::NAME);
    assert!(!Marker::ID.same(local_marker()));
}
