//! Built-in self-check over the engine's list operations.
//!
//! Every assertion is evaluated while the crate is compiled; a regression
//! in any operation fails the build of `shl_core` itself.

use crate::{
    apply_then_sum, back_value, front_value, has, index_of, lookup_values, sum, table, values,
    Concat, Exp2, Flat, Square, Transform, TypeList, Value, ValueList, Values,
};

type Digits = values![1, 2, 3, 4];
type Sizes = table! {
    Value<1> => values![12, 20],
    Value<2> => values![8, 10],
};
type Fallback = values![10, 16];

const fn same(left: Values, right: &[usize]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut i = 0;
    while i < right.len() {
        if left.get(i) != right[i] {
            return false;
        }
        i += 1;
    }
    true
}

const SELF_CHECK: () = {
    assert!(<Digits as TypeList>::LEN == 4);
    assert!(has::<Digits, Value<3>>());
    assert!(!has::<Digits, Value<7>>());
    assert!(index_of::<Digits, Value<3>>() == 2);
    assert!(front_value::<Digits>() == 1);
    assert!(back_value::<Digits>() == 4);

    assert!(sum::<Digits>() == 10);
    assert!(sum::<values![]>() == 0);
    assert!(apply_then_sum::<Digits, Square>() == 30);
    assert!(same(
        <Transform<values![20, 20, 10], Exp2> as ValueList>::VALUES,
        &[1_048_576, 1_048_576, 1024],
    ));

    assert!(same(
        <Concat<values![1, 2], values![3]> as ValueList>::VALUES,
        &[1, 2, 3],
    ));
    assert!(same(
        <Flat<crate::shapes![values![1], values![], values![2, 3]]> as ValueList>::VALUES,
        &[1, 2, 3],
    ));

    assert!(same(lookup_values::<Sizes, Value<1>, Fallback>(), &[12, 20]));
    assert!(same(lookup_values::<Sizes, Value<2>, Fallback>(), &[8, 10]));
    assert!(same(lookup_values::<Sizes, Value<9>, Fallback>(), &[10, 16]));
};

/// Confirm the definition-time self-check was evaluated.
pub fn self_check() {
    let () = SELF_CHECK;
    tracing::debug!("list engine self-check passed");
}
