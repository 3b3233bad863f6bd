//! Named constants mix with literal constants in value lists.

use shl_core::{sum, values, Constant, Shape, Value, ValueList};

#[derive(Constant, Shape)]
#[constant(1 << 4)]
pub struct SegmentBits;

#[derive(Constant)]
#[constant(SegmentBits::VALUE + 4)]
pub struct MaxBits;

type Bits = shl_core::Cons<SegmentBits, shl_core::Cons<MaxBits, values![2]>>;

const _: () = assert!(sum::<Bits>() == 38);
const _: () = assert!(<Value<16> as Constant>::VALUE == SegmentBits::VALUE);

fn main() {
    assert_eq!(<Bits as ValueList>::VALUES, [16, 20, 2]);
}
