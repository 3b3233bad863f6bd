use pretty_assertions::assert_eq;

use super::*;
use crate::Value;

#[derive(crate::Shape)]
struct Position;

#[derive(crate::Shape)]
struct Orientation;

#[derive(crate::Shape)]
struct Material;

type Components = shapes![Position, Orientation, Material];

#[test]
fn test_len() {
    assert_eq!(<shapes![] as TypeList>::LEN, 0);
    assert_eq!(Components::LEN, 3);
    assert_eq!(<values![1, 2, 3, 4] as TypeList>::LEN, 4);
}

#[test]
fn test_trailing_comma() {
    assert_eq!(<shapes![Position, Material,] as TypeList>::LEN, 2);
    assert_eq!(<values![7,] as ValueList>::VALUES, [7]);
}

#[test]
fn test_shape_ids_follow_list_order() {
    let ids = Components::IDS;
    assert_eq!(
        ids.ids(),
        &[Position::ID, Orientation::ID, Material::ID]
    );
    assert_eq!(ids.names(), &["Position", "Orientation", "Material"]);
}

#[test]
fn test_derived_names_and_ids() {
    assert_eq!(Position::NAME, "Position");
    assert_eq!(
        Position::ID,
        ShapeId::of(concat!(module_path!(), "::Position"))
    );
    assert_ne!(Position::ID, Orientation::ID);
}

#[test]
fn test_list_identity_is_structural_and_ordered() {
    type Node = shapes![Position, Orientation];
    type SameNode = shapes![Position, Orientation];
    type Flipped = shapes![Orientation, Position];

    assert_eq!(Node::ID, SameNode::ID);
    assert_ne!(Node::ID, Flipped::ID);
    assert_ne!(Node::ID, <shapes![Position] as Shape>::ID);
    assert_ne!(<Nil as Shape>::ID, Node::ID);
}

#[test]
fn test_value_list_values() {
    assert_eq!(<values![1, 2, 3, 4] as ValueList>::VALUES, [1, 2, 3, 4]);
    assert_eq!(<values![] as ValueList>::VALUES, Values::EMPTY);
    assert_eq!(<values![1 << 4, 2 + 3] as ValueList>::VALUES, [16, 5]);
}

#[test]
fn test_value_lists_are_shape_lists() {
    let ids = <values![5, 6] as ShapeList>::IDS;
    assert_eq!(ids.ids(), &[Value::<5>::ID, Value::<6>::ID]);
}

struct Fixed;

impl Source for Fixed {
    const VALUES: Values = Values::EMPTY.prepend(9).prepend(8);
}

#[test]
fn test_reshape_draws_from_source() {
    type Shaped = <values![0, 0] as ValueList>::Reshaped<Fixed, crate::Here>;
    assert_eq!(<Shaped as ValueList>::VALUES, [8, 9]);
    assert_eq!(<Pick<Fixed, There<crate::Here>> as Constant>::VALUE, 9);
}
