//! Table lookup, member-wise transforms and summation, all in const context.

use shl_core::{
    apply_then_sum, shapes, table, values, BatchLookup, Exp2, Shape, TakeBack, Transform,
};

#[derive(Shape)]
struct Node;

#[derive(Shape)]
struct Draw;

#[derive(Shape)]
struct Animation;

type Bits = table! {
    Node => values![12, 20],
    Draw => values![12, 20],
    Animation => values![8, 10],
};

type Resolved = BatchLookup<Bits, shapes![Node, Draw, Animation], values![10, 16]>;

const TOTAL: usize = apply_then_sum::<Transform<Resolved, TakeBack>, Exp2>();

const _: () = assert!(TOTAL == 2_098_176);

fn main() {}
