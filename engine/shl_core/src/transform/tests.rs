use std::any::TypeId;

use pretty_assertions::assert_eq;

use super::*;
use crate::{shapes, values, ValueList};

#[derive(crate::Shape)]
struct Position;

#[derive(crate::Shape)]
struct Orientation;

#[derive(crate::Shape)]
struct Animation;

fn same_type<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

value_fn! {
    Increment = |x| x + 1;
}

#[test]
fn test_transform_values() {
    type Squares = Transform<values![1, 2, 3, 4], Square>;
    assert_eq!(<Squares as ValueList>::VALUES, [1, 4, 9, 16]);
    assert_eq!(<Squares as TypeList>::LEN, 4);
}

#[test]
fn test_transform_empty() {
    assert!(same_type::<Transform<Nil, Square>, Nil>());
}

#[test]
fn test_local_value_fn() {
    type Bumped = Transform<values![0, 9], Increment>;
    assert_eq!(<Bumped as ValueList>::VALUES, [1, 10]);
}

#[test]
fn test_exp2() {
    type Capacities = Transform<values![20, 20, 10], Exp2>;
    assert_eq!(<Capacities as ValueList>::VALUES, [1_048_576, 1_048_576, 1024]);
}

#[test]
fn test_composed_transforms() {
    type Composed = Transform<Transform<values![1, 2, 3], Increment>, Square>;
    assert_eq!(<Composed as ValueList>::VALUES, [4, 9, 16]);
}

#[test]
fn test_take_back_of_sub_lists() {
    type Sizes = shapes![values![12, 20], values![12, 20], values![8, 10]];
    assert_eq!(<Transform<Sizes, TakeBack> as ValueList>::VALUES, [20, 20, 10]);
    assert_eq!(<Transform<Sizes, TakeFront> as ValueList>::VALUES, [12, 12, 8]);
}

#[test]
fn test_take_front_of_shape_lists() {
    type Entities = shapes![shapes![Position, Orientation], shapes![Animation]];
    assert!(same_type::<Transform<Entities, TakeFront>, shapes![Position, Animation]>());
    assert!(same_type::<Transform<Entities, TakeBack>, shapes![Orientation, Animation]>());
}

#[test]
fn test_concat() {
    assert!(same_type::<
        Concat<shapes![Position], shapes![Orientation, Animation]>,
        shapes![Position, Orientation, Animation],
    >());
    assert!(same_type::<Concat<Nil, shapes![Animation]>, shapes![Animation]>());
}

#[test]
fn test_flatten() {
    type Entities = shapes![shapes![Position, Orientation], shapes![], shapes![Animation]];
    assert!(same_type::<Flat<Entities>, shapes![Position, Orientation, Animation]>());
    assert!(same_type::<Flat<Nil>, Nil>());
    assert_eq!(
        <Flat<shapes![values![1], values![2, 3]]> as ValueList>::VALUES,
        [1, 2, 3]
    );
}
